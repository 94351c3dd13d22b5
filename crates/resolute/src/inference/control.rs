//! Exhaustive generation of resolvents and factors for a given clause

use super::factoring::factor;
use super::resolution::resolve;
use crate::clauses::ClauseStore;
use crate::logic::{Clause, ClauseNamer, FreshVars};
use std::sync::Arc;
use tracing::trace;

/// All resolvents between inference literals of `given` and inference
/// literals of members of `set`, each given a fresh name
pub fn compute_all_resolvents<S: ClauseStore + ?Sized>(
    given: &Arc<Clause>,
    set: &S,
    fresh: &mut FreshVars,
    namer: &mut ClauseNamer,
) -> Vec<Clause> {
    let mut resolvents = Vec::new();
    for (i, lit) in given.literals.iter().enumerate() {
        if !lit.is_inference_lit() {
            continue;
        }
        for (partner, j) in set.get_resolution_literals(lit) {
            if !partner.literals[j].is_inference_lit() {
                continue;
            }
            if let Some(mut resolvent) = resolve(given, i, &partner, j, fresh) {
                resolvent.name = namer.next_name();
                trace!(clause = %resolvent, "resolvent");
                resolvents.push(resolvent);
            }
        }
    }
    resolvents
}

/// All factors of `clause` over literal pairs with at least one inference
/// literal, each given a fresh name
pub fn compute_all_factors(clause: &Arc<Clause>, namer: &mut ClauseNamer) -> Vec<Clause> {
    let mut factors = Vec::new();
    let literals = &clause.literals;
    for i in 0..literals.len() {
        for j in (i + 1)..literals.len() {
            if !(literals[i].is_inference_lit() || literals[j].is_inference_lit()) {
                continue;
            }
            if let Some(mut factored) = factor(clause, i, j) {
                factored.name = namer.next_name();
                trace!(clause = %factored, "factor");
                factors.push(factored);
            }
        }
    }
    factors
}

/// Inference driver owning the fresh-variable and clause-name counters of
/// one search
#[derive(Debug, Clone, Default)]
pub struct ResControl {
    fresh: FreshVars,
    namer: ClauseNamer,
}

impl ResControl {
    pub fn new() -> Self {
        ResControl::default()
    }

    pub fn compute_all_resolvents<S: ClauseStore + ?Sized>(
        &mut self,
        given: &Arc<Clause>,
        set: &S,
    ) -> Vec<Clause> {
        compute_all_resolvents(given, set, &mut self.fresh, &mut self.namer)
    }

    pub fn compute_all_factors(&mut self, clause: &Arc<Clause>) -> Vec<Clause> {
        compute_all_factors(clause, &mut self.namer)
    }

    pub fn next_name(&mut self) -> String {
        self.namer.next_name()
    }

    pub fn reset(&mut self) {
        self.fresh.reset();
        self.namer.reset();
    }
}
