//! Clause indexes for processed clauses.
//!
//! Both indexes track the same lifecycle: a clause is inserted when it
//! becomes processed and removed when it is extracted (for example by
//! backward subsumption). [`IndexedClauseSet`](crate::clauses::IndexedClauseSet)
//! routes every insertion and removal to all of its indexes.
//!
//! ## Index Types
//!
//! - `Resolution`: literal positions by polarity and predicate symbol
//! - `Subsumption`: clauses by predicate abstraction

pub mod resolution;
pub mod subsumption;

use crate::logic::Clause;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub use resolution::ResolutionIndex;
pub use subsumption::SubsumptionIndex;

/// Lifecycle interface shared by clause indexes
pub trait ClauseIndex {
    /// Start tracking a clause
    fn insert_clause(&mut self, clause: &Arc<Clause>);

    /// Stop tracking a clause; false if it was not indexed
    fn remove_clause(&mut self, clause: &Arc<Clause>) -> bool;

    fn is_indexed(&self, clause: &Arc<Clause>) -> bool;
}

/// A clause compared and hashed by identity
#[derive(Debug, Clone)]
pub struct ClauseRef(pub Arc<Clause>);

impl PartialEq for ClauseRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ClauseRef {}

impl Hash for ClauseRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}
