//! Subsumption candidate index.
//!
//! Groups indexed clauses by their predicate abstraction: the sorted list of
//! (polarity, predicate) pairs of their literals. A clause can only subsume
//! another if its abstraction is a sub-multiset of the other's, which on
//! sorted lists is an ordered subsequence test.

use super::{ClauseIndex, ClauseRef};
use crate::logic::Clause;
use indexmap::IndexSet;
use std::collections::BTreeMap;
use std::sync::Arc;

type Abstraction = Vec<(bool, String)>;

/// Index from predicate abstraction to the clauses that have it
#[derive(Debug, Default)]
pub struct SubsumptionIndex {
    abstractions: BTreeMap<Abstraction, IndexSet<ClauseRef>>,
}

/// `sub` is an ordered subsequence of `sup` (both sorted)
pub fn is_subsequence(sub: &[(bool, String)], sup: &[(bool, String)]) -> bool {
    let mut rest = sup.iter();
    sub.iter().all(|item| rest.by_ref().any(|candidate| candidate == item))
}

impl SubsumptionIndex {
    pub fn new() -> Self {
        SubsumptionIndex::default()
    }

    /// Indexed clauses that may subsume `query`
    pub fn get_subsuming_candidates(&self, query: &Clause) -> Vec<Arc<Clause>> {
        let pa = query.predicate_abstraction();
        self.collect(|key| is_subsequence(key, &pa))
    }

    /// Indexed clauses that `query` may subsume
    pub fn get_subsumed_candidates(&self, query: &Clause) -> Vec<Arc<Clause>> {
        let pa = query.predicate_abstraction();
        self.collect(|key| is_subsequence(&pa, key))
    }

    fn collect(&self, accept: impl Fn(&Abstraction) -> bool) -> Vec<Arc<Clause>> {
        self.abstractions
            .iter()
            .filter(|(key, _)| accept(key))
            .flat_map(|(_, clauses)| clauses.iter().map(|c| Arc::clone(&c.0)))
            .collect()
    }

    /// Number of indexed clauses
    pub fn len(&self) -> usize {
        self.abstractions.values().map(IndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.abstractions.is_empty()
    }
}

impl ClauseIndex for SubsumptionIndex {
    fn insert_clause(&mut self, clause: &Arc<Clause>) {
        self.abstractions
            .entry(clause.predicate_abstraction())
            .or_default()
            .insert(ClauseRef(Arc::clone(clause)));
    }

    fn remove_clause(&mut self, clause: &Arc<Clause>) -> bool {
        let pa = clause.predicate_abstraction();
        let removed = match self.abstractions.get_mut(&pa) {
            Some(clauses) => {
                let removed = clauses.shift_remove(&ClauseRef(Arc::clone(clause)));
                if clauses.is_empty() {
                    self.abstractions.remove(&pa);
                }
                removed
            }
            None => false,
        };
        debug_assert!(removed, "removing unindexed clause {}", clause);
        removed
    }

    fn is_indexed(&self, clause: &Arc<Clause>) -> bool {
        self.abstractions
            .get(&clause.predicate_abstraction())
            .map_or(false, |clauses| clauses.contains(&ClauseRef(Arc::clone(clause))))
    }
}
