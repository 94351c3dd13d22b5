//! Plain ordered clause sets

use super::{eqaxioms, scan_resolution_literals, ClauseStore};
use crate::error::Result;
use crate::logic::{Clause, Literal, Signature};
use std::fmt;
use std::sync::Arc;

/// An ordered collection of clauses without any index
#[derive(Debug, Clone, Default)]
pub struct ClauseSet {
    clauses: Vec<Arc<Clause>>,
}

impl ClauseSet {
    pub fn new() -> Self {
        ClauseSet::default()
    }

    pub fn from_clauses(clauses: Vec<Clause>) -> Self {
        ClauseSet {
            clauses: clauses.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn add_more(&mut self, clauses: impl IntoIterator<Item = Arc<Clause>>) {
        self.clauses.extend(clauses);
    }

    /// Remove and return the oldest clause
    pub fn extract_first(&mut self) -> Option<Arc<Clause>> {
        if self.clauses.is_empty() {
            None
        } else {
            Some(self.clauses.remove(0))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Clause>> {
        self.clauses.iter()
    }

    pub fn contains(&self, clause: &Arc<Clause>) -> bool {
        self.clauses.iter().any(|c| Arc::ptr_eq(c, clause))
    }

    /// Signature of all member clauses; fails on inconsistent arities
    pub fn collect_sig(&self) -> Result<Signature> {
        let mut sig = Signature::new();
        for clause in &self.clauses {
            sig.collect_clause(clause)?;
        }
        Ok(sig)
    }

    /// Add equality axioms if `=` occurs; returns the number added
    pub fn add_eq_axioms(&mut self) -> Result<usize> {
        let sig = self.collect_sig()?;
        if !sig.is_predicate(crate::logic::EQUALITY) {
            return Ok(0);
        }
        let axioms = eqaxioms::generate_equality_axioms(&sig);
        let count = axioms.len();
        self.add_more(axioms.into_iter().map(Arc::new));
        Ok(count)
    }
}

impl ClauseStore for ClauseSet {
    fn add_clause(&mut self, clause: Arc<Clause>) {
        self.clauses.push(clause);
    }

    fn extract_clause(&mut self, clause: &Arc<Clause>) -> Option<Arc<Clause>> {
        let pos = self.clauses.iter().position(|c| Arc::ptr_eq(c, clause))?;
        Some(self.clauses.remove(pos))
    }

    fn len(&self) -> usize {
        self.clauses.len()
    }

    fn clauses(&self) -> Vec<Arc<Clause>> {
        self.clauses.clone()
    }

    fn get_resolution_literals(&self, lit: &Literal) -> Vec<(Arc<Clause>, usize)> {
        scan_resolution_literals(self.clauses.iter(), lit)
    }

    fn get_subsuming_candidates(&self, _query: &Clause) -> Vec<Arc<Clause>> {
        self.clauses.clone()
    }

    fn get_subsumed_candidates(&self, _query: &Clause) -> Vec<Arc<Clause>> {
        self.clauses.clone()
    }
}

impl fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clause in &self.clauses {
            writeln!(f, "{}", clause)?;
        }
        Ok(())
    }
}
