//! Clause set with resolution and subsumption indexes

use super::{ClauseSet, ClauseStore};
use crate::index::{ClauseIndex, ResolutionIndex, SubsumptionIndex};
use crate::logic::{Clause, Literal};
use std::sync::Arc;

/// Processed clauses, kept in sync with both indexes
///
/// Every member is indexed and every indexed clause is a member.
#[derive(Debug, Default)]
pub struct IndexedClauseSet {
    set: ClauseSet,
    res_index: ResolutionIndex,
    sub_index: SubsumptionIndex,
}

impl IndexedClauseSet {
    pub fn new() -> Self {
        IndexedClauseSet::default()
    }

    pub fn res_index(&self) -> &ResolutionIndex {
        &self.res_index
    }

    pub fn sub_index(&self) -> &SubsumptionIndex {
        &self.sub_index
    }

    pub fn contains(&self, clause: &Arc<Clause>) -> bool {
        self.set.contains(clause)
    }
}

impl ClauseStore for IndexedClauseSet {
    fn add_clause(&mut self, clause: Arc<Clause>) {
        self.res_index.insert_clause(&clause);
        self.sub_index.insert_clause(&clause);
        self.set.add_clause(clause);
    }

    fn extract_clause(&mut self, clause: &Arc<Clause>) -> Option<Arc<Clause>> {
        let extracted = self.set.extract_clause(clause)?;
        self.res_index.remove_clause(&extracted);
        self.sub_index.remove_clause(&extracted);
        Some(extracted)
    }

    fn len(&self) -> usize {
        self.set.len()
    }

    fn clauses(&self) -> Vec<Arc<Clause>> {
        self.set.clauses()
    }

    fn get_resolution_literals(&self, lit: &Literal) -> Vec<(Arc<Clause>, usize)> {
        self.res_index.get_resolution_literals(lit)
    }

    fn get_subsuming_candidates(&self, query: &Clause) -> Vec<Arc<Clause>> {
        self.sub_index.get_subsuming_candidates(query)
    }

    fn get_subsumed_candidates(&self, query: &Clause) -> Vec<Arc<Clause>> {
        self.sub_index.get_subsumed_candidates(query)
    }
}
