//! Main saturation state and algorithm
//!
//! The prover keeps two clause sets:
//!
//! - **Unprocessed (U)**: input and derived clauses waiting to be selected,
//!   ordered by the configured heuristic
//! - **Processed (P)**: clauses already used as inference partners, indexed
//!   for partner and subsumption candidate retrieval
//!
//! Each iteration of the main loop:
//!
//! 1. Stop with `GaveUp` if an iteration or time bound is reached
//! 2. Select the given clause G from U; stop with `Saturated` if U is empty
//! 3. Stop with `ProofFound` if G is empty
//! 4. Redundancy: drop G if it is a tautology, remove the clauses of P that
//!    G subsumes, drop G if some clause of P subsumes it (each optional)
//! 5. Generate all resolvents of G with P and all factors of G
//! 6. Move G into P
//! 7. Simplify the new clauses and add them to U; stop with `ProofFound` on
//!    the first empty one

use super::{bound_exceeded, ProofStatistics, ProofStatus};
use crate::clauses::{ClauseSet, ClauseStore, HeuristicClauseSet, IndexedClauseSet};
use crate::config::SearchParams;
use crate::error::Result;
use crate::inference::{
    backward_subsumption, forward_subsumption, ordered_derivation, select_inference_literals,
    Proof, ResControl,
};
use crate::logic::Clause;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Given-clause proof search with heuristic selection and redundancy
/// elimination
#[derive(Debug)]
pub struct ProofState {
    params: SearchParams,
    processed: IndexedClauseSet,
    unprocessed: HeuristicClauseSet,
    control: ResControl,
    stats: ProofStatistics,
    status: ProofStatus,
    result: Option<Arc<Clause>>,
    started: Option<Instant>,
}

impl ProofState {
    /// Set up a search over `clauses`
    ///
    /// Fails if the clauses use a symbol with inconsistent arities.
    pub fn new(params: SearchParams, clauses: ClauseSet) -> Result<Self> {
        clauses.collect_sig()?;
        let mut unprocessed = HeuristicClauseSet::new(params.heuristics.build()?);
        for clause in clauses.iter() {
            unprocessed.add_clause(Arc::clone(clause));
        }
        let stats = ProofStatistics {
            initial_clauses: clauses.len(),
            ..ProofStatistics::default()
        };
        debug!(
            clauses = stats.initial_clauses,
            heuristic = %params.heuristics,
            "proof state initialised"
        );
        Ok(ProofState {
            params,
            processed: IndexedClauseSet::new(),
            unprocessed,
            control: ResControl::new(),
            stats,
            status: ProofStatus::Running,
            result: None,
            started: None,
        })
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn status(&self) -> ProofStatus {
        self.status
    }

    pub fn statistics(&self) -> &ProofStatistics {
        &self.stats
    }

    pub fn processed(&self) -> &IndexedClauseSet {
        &self.processed
    }

    pub fn unprocessed(&self) -> &HeuristicClauseSet {
        &self.unprocessed
    }

    /// The empty clause, once a proof is found
    pub fn result(&self) -> Option<&Arc<Clause>> {
        self.result.as_ref()
    }

    /// Ancestry of the empty clause in dependency order
    pub fn derivation(&self) -> Vec<Arc<Clause>> {
        self.result.as_ref().map(ordered_derivation).unwrap_or_default()
    }

    pub fn proof(&self) -> Option<Proof> {
        self.result.as_ref().map(Proof::from_clause)
    }

    fn finish(&mut self, status: ProofStatus, started: Instant) {
        self.status = status;
        self.stats.elapsed = started.elapsed();
        info!(
            status = %status,
            iterations = self.stats.iterations,
            processed = self.stats.processed_clauses,
            generated = self.stats.generated(),
            "search finished"
        );
    }

    /// Run one iteration of the given-clause loop
    ///
    /// Does nothing once the state is terminal.
    pub fn process_clause(&mut self) -> ProofStatus {
        if self.status.is_terminal() {
            return self.status;
        }
        let started = *self.started.get_or_insert_with(Instant::now);
        if bound_exceeded(&self.params, self.stats.iterations, started) {
            self.finish(ProofStatus::GaveUp, started);
            return self.status;
        }

        let Some(given) = self.unprocessed.extract_best() else {
            self.finish(ProofStatus::Saturated, started);
            return self.status;
        };
        self.stats.iterations += 1;
        debug!(given = %given, "given clause");

        if given.is_empty() {
            self.result = Some(given);
            self.finish(ProofStatus::ProofFound, started);
            return self.status;
        }

        if self.params.delete_tautologies && given.is_tautology() {
            self.stats.tautologies_deleted += 1;
            debug!(clause = %given, "tautology deleted");
            return self.status;
        }

        if self.params.backward_subsumption {
            let removed = backward_subsumption(given.as_ref(), &mut self.processed);
            for clause in &removed {
                debug!(clause = %clause, by = %given.name, "backward subsumed");
            }
            self.stats.backward_subsumed += removed.len();
        }

        if self.params.forward_subsumption && forward_subsumption(&self.processed, &given) {
            self.stats.forward_subsumed += 1;
            debug!(clause = %given, "forward subsumed");
            return self.status;
        }

        let given = match self.params.literal_selection {
            Some(strategy) => {
                let mut selected = Clause::clone(&given);
                select_inference_literals(&mut selected, strategy);
                Arc::new(selected)
            }
            None => given,
        };

        let resolvents = self.control.compute_all_resolvents(&given, &self.processed);
        let factors = self.control.compute_all_factors(&given);
        self.stats.resolvents += resolvents.len();
        self.stats.factors += factors.len();

        self.processed.add_clause(given);
        self.stats.processed_clauses += 1;

        for mut clause in resolvents.into_iter().chain(factors) {
            if clause.is_empty() {
                let empty = Arc::new(clause);
                debug!(clause = %empty, "empty clause derived");
                self.result = Some(empty);
                self.finish(ProofStatus::ProofFound, started);
                return self.status;
            }
            clause.remove_duplicate_literals();
            if self.params.delete_tautologies && clause.is_tautology() {
                self.stats.tautologies_deleted += 1;
                trace!(clause = %clause, "new tautology deleted");
                continue;
            }
            self.unprocessed.add_clause(Arc::new(clause));
        }

        self.stats.elapsed = started.elapsed();
        self.status
    }

    /// Run the loop until a terminal state or until `max_iterations` calls
    /// of [`ProofState::process_clause`] in this run
    ///
    /// Reaching `max_iterations` ends the search with `GaveUp`. Returns the
    /// empty clause if a proof was found.
    pub fn saturate(&mut self, max_iterations: Option<usize>) -> Option<Arc<Clause>> {
        let mut steps = 0;
        while !self.status.is_terminal() {
            if max_iterations.is_some_and(|max| steps >= max) {
                let started = *self.started.get_or_insert_with(Instant::now);
                self.finish(ProofStatus::GaveUp, started);
                break;
            }
            self.process_clause();
            steps += 1;
        }
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::LiteralSelection;
    use crate::logic::{Literal, Term};
    use crate::selection::HeuristicKind;

    fn atom(pred: &str, args: Vec<Term>) -> Term {
        Term::app(pred, args)
    }

    fn pos(pred: &str, args: Vec<Term>) -> Literal {
        Literal::positive(atom(pred, args))
    }

    fn neg(pred: &str, args: Vec<Term>) -> Literal {
        Literal::negative(atom(pred, args))
    }

    fn clauses(lits: Vec<Vec<Literal>>) -> ClauseSet {
        ClauseSet::from_clauses(lits.into_iter().map(Clause::new).collect())
    }

    fn socrates() -> ClauseSet {
        let x = Term::var("X");
        let s = Term::constant("socrates");
        clauses(vec![
            vec![pos("mortal", vec![x.clone()]), neg("human", vec![x])],
            vec![pos("human", vec![s.clone()])],
            vec![neg("mortal", vec![s])],
        ])
    }

    #[test]
    fn test_complementary_units() {
        let problem = clauses(vec![vec![pos("a", vec![])], vec![neg("a", vec![])]]);
        let mut state = ProofState::new(SearchParams::default(), problem).unwrap();
        let result = state.saturate(None).unwrap();
        assert!(result.is_empty());
        assert_eq!(state.status(), ProofStatus::ProofFound);
        assert_eq!(state.statistics().iterations, 2);
    }

    #[test]
    fn test_tautology_problem_saturates() {
        let x = Term::var("X");
        let a = Term::constant("a");
        let problem = clauses(vec![
            vec![pos("p", vec![x.clone()]), pos("q", vec![a.clone()])],
            vec![pos("p", vec![x.clone()]), neg("p", vec![x])],
            vec![neg("p", vec![a])],
        ]);
        let params = SearchParams {
            delete_tautologies: true,
            ..SearchParams::default()
        };
        let mut state = ProofState::new(params, problem).unwrap();
        assert!(state.saturate(None).is_none());
        assert_eq!(state.status(), ProofStatus::Saturated);
        assert!(state.statistics().tautologies_deleted >= 1);
        assert!(state.proof().is_none());
    }

    #[test]
    fn test_horn_chain() {
        let mut state = ProofState::new(SearchParams::default(), socrates()).unwrap();
        let result = state.saturate(None).unwrap();
        assert!(result.is_empty());
        assert!(state.statistics().iterations <= 4);

        let proof = state.proof().unwrap();
        assert_eq!(proof.count_rule("resolution"), 2);
        assert_eq!(proof.len(), 5);
        assert_eq!(proof.steps.last().unwrap().clause, "$false");
    }

    #[test]
    fn test_horn_chain_with_every_option() {
        for heuristics in HeuristicKind::ALL {
            for selection in [None, Some(LiteralSelection::First)] {
                let params = SearchParams {
                    heuristics,
                    literal_selection: selection,
                    ..SearchParams::default().with_redundancy_elimination()
                };
                let mut state = ProofState::new(params, socrates()).unwrap();
                assert!(state.saturate(None).is_some(), "{} {:?}", heuristics, selection);
            }
        }
    }

    #[test]
    fn test_empty_input_clause_is_a_proof() {
        let problem = clauses(vec![vec![pos("p", vec![])], vec![]]);
        let mut state = ProofState::new(SearchParams::default(), problem).unwrap();
        assert!(state.saturate(None).is_some());
        assert_eq!(state.statistics().resolvents, 0);
    }

    #[test]
    fn test_empty_problem_saturates() {
        let mut state = ProofState::new(SearchParams::default(), ClauseSet::new()).unwrap();
        assert!(state.saturate(None).is_none());
        assert_eq!(state.status(), ProofStatus::Saturated);
    }

    fn diverging() -> ClauseSet {
        // p(a), ~p(X)|p(f(X)) has infinitely many consequences and no proof
        let x = Term::var("X");
        clauses(vec![
            vec![pos("p", vec![Term::constant("a")])],
            vec![
                neg("p", vec![x.clone()]),
                pos("p", vec![Term::app("f", vec![x])]),
            ],
        ])
    }

    #[test]
    fn test_iteration_bound_gives_up() {
        let params = SearchParams {
            max_iterations: Some(10),
            ..SearchParams::default()
        };
        let mut state = ProofState::new(params, diverging()).unwrap();
        assert!(state.saturate(None).is_none());
        assert_eq!(state.status(), ProofStatus::GaveUp);
        assert_eq!(state.statistics().iterations, 10);
    }

    #[test]
    fn test_saturate_argument_bounds_the_run() {
        let mut state = ProofState::new(SearchParams::default(), diverging()).unwrap();
        assert!(state.saturate(Some(5)).is_none());
        assert_eq!(state.status(), ProofStatus::GaveUp);
        assert_eq!(state.statistics().iterations, 5);
    }

    #[test]
    fn test_terminal_state_is_sticky() {
        let problem = clauses(vec![vec![pos("a", vec![])], vec![neg("a", vec![])]]);
        let mut state = ProofState::new(SearchParams::default(), problem).unwrap();
        state.saturate(None);
        let iterations = state.statistics().iterations;
        assert_eq!(state.process_clause(), ProofStatus::ProofFound);
        assert_eq!(state.statistics().iterations, iterations);
    }

    #[test]
    fn test_forward_subsumption_drops_instances() {
        let x = Term::var("X");
        let a = Term::constant("a");
        // p(X) is lighter and selected first, so p(a) and p(a)|q(a) are
        // subsumed when they come up
        let problem = clauses(vec![
            vec![pos("p", vec![a.clone()]), pos("q", vec![a.clone()])],
            vec![pos("p", vec![x])],
            vec![pos("p", vec![a])],
        ]);
        let params = SearchParams {
            forward_subsumption: true,
            ..SearchParams::default()
        };
        let mut state = ProofState::new(params, problem).unwrap();
        assert!(state.saturate(None).is_none());
        assert_eq!(state.statistics().forward_subsumed, 2);
        assert_eq!(state.processed().len(), 1);
    }

    #[test]
    fn test_backward_subsumption_shrinks_processed() {
        let x = Term::var("X");
        let a = Term::constant("a");
        let problem = clauses(vec![
            vec![pos("p", vec![a.clone()]), pos("q", vec![a])],
            vec![pos("p", vec![x])],
        ]);
        let params = SearchParams {
            heuristics: HeuristicKind::Fifo,
            backward_subsumption: true,
            ..SearchParams::default()
        };
        let mut state = ProofState::new(params, problem).unwrap();
        assert!(state.saturate(None).is_none());
        assert_eq!(state.statistics().backward_subsumed, 1);
        assert_eq!(state.processed().len(), 1);
    }

    #[test]
    fn test_arity_clash_is_rejected() {
        let problem = clauses(vec![
            vec![pos("p", vec![Term::constant("a")])],
            vec![neg("p", vec![])],
        ]);
        assert!(ProofState::new(SearchParams::default(), problem).is_err());
    }
}
