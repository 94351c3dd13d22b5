//! Binary resolution inference rule

use super::derivation::Derivation;
use crate::logic::{mgu, Clause, FreshVars};
use std::sync::Arc;

/// Resolve literal `lit1` of `clause1` against literal `lit2` of `clause2`
///
/// `clause2` is renamed apart with fresh variables first. Returns `None` if
/// the literals have the same sign or their atoms do not unify. Duplicate
/// literals are kept; the result is unnamed.
pub fn resolve(
    clause1: &Arc<Clause>,
    lit1: usize,
    clause2: &Arc<Clause>,
    lit2: usize,
    fresh: &mut FreshVars,
) -> Option<Clause> {
    let l1 = clause1.literals.get(lit1)?;
    let l2 = clause2.literals.get(lit2)?;
    if l1.is_negative() == l2.is_negative() || l1.predicate() != l2.predicate() {
        return None;
    }

    let renamed = clause2.fresh_var_copy(fresh);
    let sigma = mgu(l1.atom(), renamed.literals[lit2].atom())?;

    let mut literals = Vec::with_capacity(clause1.len() + renamed.len() - 2);
    for (k, lit) in clause1.literals.iter().enumerate() {
        if k != lit1 {
            literals.push(lit.instantiate(&sigma));
        }
    }
    for (k, lit) in renamed.literals.iter().enumerate() {
        if k != lit2 {
            literals.push(lit.instantiate(&sigma));
        }
    }

    Some(Clause::new(literals).with_derivation(Derivation::inference(
        "resolution",
        vec![Arc::clone(clause1), Arc::clone(clause2)],
    )))
}
