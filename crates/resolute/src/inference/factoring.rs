//! Factoring inference rule

use super::derivation::Derivation;
use crate::logic::{mgu, Clause};
use std::sync::Arc;

/// Unify literals `lit1` and `lit2` of `clause` and drop `lit2`
///
/// Both literals must have the same sign. The result has exactly one
/// literal less than `clause`; it is unnamed.
pub fn factor(clause: &Arc<Clause>, lit1: usize, lit2: usize) -> Option<Clause> {
    if lit1 == lit2 {
        return None;
    }
    let l1 = clause.literals.get(lit1)?;
    let l2 = clause.literals.get(lit2)?;
    if l1.is_negative() != l2.is_negative() || l1.predicate() != l2.predicate() {
        return None;
    }
    let sigma = mgu(l1.atom(), l2.atom())?;

    let literals = clause
        .literals
        .iter()
        .enumerate()
        .filter(|(k, _)| *k != lit2)
        .map(|(_, lit)| lit.instantiate(&sigma))
        .collect();

    Some(Clause::new(literals).with_derivation(Derivation::inference(
        "factor",
        vec![Arc::clone(clause)],
    )))
}
