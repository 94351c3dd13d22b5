//! Clause set ordered by given-clause heuristics

use super::{scan_resolution_literals, ClauseStore};
use crate::index::ClauseRef;
use crate::logic::{Clause, Literal};
use crate::selection::EvalStructure;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

/// Unprocessed clauses, evaluated once on insertion
///
/// Each evaluation function has its own ordered bucket of
/// `(score, insertion number)` pairs, so the best clause under any function
/// is found without a scan and ties go to the older clause. Extracting a
/// clause removes it from every bucket.
#[derive(Debug)]
pub struct HeuristicClauseSet {
    eval_functions: EvalStructure,
    entries: BTreeMap<u64, (Arc<Clause>, Vec<u64>)>,
    buckets: Vec<BTreeSet<(u64, u64)>>,
    positions: HashMap<ClauseRef, u64>,
    next_seq: u64,
}

impl HeuristicClauseSet {
    pub fn new(eval_functions: EvalStructure) -> Self {
        let buckets = vec![BTreeSet::new(); eval_functions.len()];
        HeuristicClauseSet {
            eval_functions,
            entries: BTreeMap::new(),
            buckets,
            positions: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Scores assigned to a member clause, one per evaluation function
    pub fn evaluations(&self, clause: &Arc<Clause>) -> Option<&[u64]> {
        let seq = self.positions.get(&ClauseRef(Arc::clone(clause)))?;
        self.entries.get(seq).map(|(_, scores)| scores.as_slice())
    }

    fn remove_seq(&mut self, seq: u64) -> Option<Arc<Clause>> {
        let (clause, scores) = self.entries.remove(&seq)?;
        for (bucket, score) in self.buckets.iter_mut().zip(scores) {
            bucket.remove(&(score, seq));
        }
        self.positions.remove(&ClauseRef(Arc::clone(&clause)));
        Some(clause)
    }

    /// Remove the clause with the smallest score under function `index`
    pub fn extract_best_by_eval(&mut self, index: usize) -> Option<Arc<Clause>> {
        let &(_, seq) = self.buckets.get(index)?.iter().next()?;
        self.remove_seq(seq)
    }

    /// Remove the best clause under the function picked by round robin
    pub fn extract_best(&mut self) -> Option<Arc<Clause>> {
        if self.entries.is_empty() {
            return None;
        }
        let index = self.eval_functions.next_eval();
        self.extract_best_by_eval(index)
    }

    /// Remove the oldest clause, ignoring evaluations
    pub fn extract_first(&mut self) -> Option<Arc<Clause>> {
        let seq = *self.entries.keys().next()?;
        self.remove_seq(seq)
    }
}

impl ClauseStore for HeuristicClauseSet {
    /// Adding a clause object that is already queued does nothing
    fn add_clause(&mut self, clause: Arc<Clause>) {
        let key = ClauseRef(Arc::clone(&clause));
        if self.positions.contains_key(&key) {
            return;
        }
        let scores = self.eval_functions.evaluate(&clause);
        let seq = self.next_seq;
        self.next_seq += 1;
        for (bucket, &score) in self.buckets.iter_mut().zip(&scores) {
            bucket.insert((score, seq));
        }
        self.positions.insert(key, seq);
        self.entries.insert(seq, (clause, scores));
    }

    fn extract_clause(&mut self, clause: &Arc<Clause>) -> Option<Arc<Clause>> {
        let seq = *self.positions.get(&ClauseRef(Arc::clone(clause)))?;
        self.remove_seq(seq)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clauses(&self) -> Vec<Arc<Clause>> {
        self.entries.values().map(|(c, _)| Arc::clone(c)).collect()
    }

    fn get_resolution_literals(&self, lit: &Literal) -> Vec<(Arc<Clause>, usize)> {
        scan_resolution_literals(self.entries.values().map(|(c, _)| c), lit)
    }

    fn get_subsuming_candidates(&self, _query: &Clause) -> Vec<Arc<Clause>> {
        self.clauses()
    }

    fn get_subsumed_candidates(&self, _query: &Clause) -> Vec<Arc<Clause>> {
        self.clauses()
    }
}
