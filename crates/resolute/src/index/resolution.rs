//! Resolution index.
//!
//! Maps predicate symbols to the literal positions of indexed clauses,
//! separately for positive and negative literals, so that resolution partners
//! of a literal can be found without scanning every processed clause.

use super::{ClauseIndex, ClauseRef};
use crate::logic::{Clause, Literal};
use indexmap::IndexSet;
use std::collections::HashMap;
use std::sync::Arc;

/// Index of literal occurrences by (polarity, predicate)
///
/// Every literal of every indexed clause is recorded in exactly one of the
/// two maps. Entries keep insertion order.
#[derive(Debug, Default)]
pub struct ResolutionIndex {
    positive: HashMap<String, IndexSet<(ClauseRef, usize)>>,
    negative: HashMap<String, IndexSet<(ClauseRef, usize)>>,
}

impl ResolutionIndex {
    pub fn new() -> Self {
        ResolutionIndex::default()
    }

    fn side(&self, negative: bool) -> &HashMap<String, IndexSet<(ClauseRef, usize)>> {
        if negative {
            &self.negative
        } else {
            &self.positive
        }
    }

    /// Literal positions with the same predicate as `lit` and opposite sign
    pub fn get_resolution_literals(&self, lit: &Literal) -> Vec<(Arc<Clause>, usize)> {
        self.side(lit.is_positive())
            .get(lit.predicate())
            .map(|entries| {
                entries
                    .iter()
                    .map(|(clause, pos)| (Arc::clone(&clause.0), *pos))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of indexed literal occurrences
    pub fn len(&self) -> usize {
        self.positive.values().map(IndexSet::len).sum::<usize>()
            + self.negative.values().map(IndexSet::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ClauseIndex for ResolutionIndex {
    fn insert_clause(&mut self, clause: &Arc<Clause>) {
        for (pos, lit) in clause.literals.iter().enumerate() {
            let side = if lit.is_negative() {
                &mut self.negative
            } else {
                &mut self.positive
            };
            side.entry(lit.predicate().to_string())
                .or_default()
                .insert((ClauseRef(Arc::clone(clause)), pos));
        }
    }

    fn remove_clause(&mut self, clause: &Arc<Clause>) -> bool {
        let mut removed = false;
        for (pos, lit) in clause.literals.iter().enumerate() {
            let side = if lit.is_negative() {
                &mut self.negative
            } else {
                &mut self.positive
            };
            if let Some(entries) = side.get_mut(lit.predicate()) {
                removed |= entries.shift_remove(&(ClauseRef(Arc::clone(clause)), pos));
                if entries.is_empty() {
                    side.remove(lit.predicate());
                }
            }
        }
        debug_assert!(
            removed || clause.is_empty(),
            "removing unindexed clause {}",
            clause
        );
        removed
    }

    fn is_indexed(&self, clause: &Arc<Clause>) -> bool {
        clause.literals.first().map_or(false, |lit| {
            self.side(lit.is_negative())
                .get(lit.predicate())
                .map_or(false, |e| e.contains(&(ClauseRef(Arc::clone(clause)), 0)))
        })
    }
}
