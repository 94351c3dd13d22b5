//! Clause sets: plain, heuristic (for unprocessed clauses) and indexed (for
//! processed clauses)

pub mod eqaxioms;
pub mod heuristic;
pub mod indexed;
pub mod set;


use crate::logic::{Clause, Literal};
use std::sync::Arc;

pub use eqaxioms::generate_equality_axioms;
pub use heuristic::HeuristicClauseSet;
pub use indexed::IndexedClauseSet;
pub use set::ClauseSet;

/// Operations the saturation loop and inference control need from a clause
/// collection
///
/// Members are identified by pointer. Candidate queries may over-approximate;
/// callers re-check every candidate.
pub trait ClauseStore {
    fn add_clause(&mut self, clause: Arc<Clause>);

    /// Remove this exact clause object; `None` if it is not a member
    fn extract_clause(&mut self, clause: &Arc<Clause>) -> Option<Arc<Clause>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Members in insertion order
    fn clauses(&self) -> Vec<Arc<Clause>>;

    /// Literal positions with opposite sign and the same predicate as `lit`
    fn get_resolution_literals(&self, lit: &Literal) -> Vec<(Arc<Clause>, usize)>;

    /// Members that may subsume `query`
    fn get_subsuming_candidates(&self, query: &Clause) -> Vec<Arc<Clause>>;

    /// Members that `query` may subsume
    fn get_subsumed_candidates(&self, query: &Clause) -> Vec<Arc<Clause>>;
}

/// Unindexed partner scan shared by the plain clause sets
fn scan_resolution_literals<'a>(
    clauses: impl Iterator<Item = &'a Arc<Clause>>,
    lit: &Literal,
) -> Vec<(Arc<Clause>, usize)> {
    let mut partners = Vec::new();
    for clause in clauses {
        for (pos, candidate) in clause.literals.iter().enumerate() {
            if candidate.is_resolution_partner(lit) {
                partners.push((Arc::clone(clause), pos));
            }
        }
    }
    partners
}
