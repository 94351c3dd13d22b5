//! Plain FIFO given-clause loop without indexes or redundancy elimination

use super::{bound_exceeded, ProofStatistics, ProofStatus};
use crate::clauses::{ClauseSet, ClauseStore};
use crate::config::SearchParams;
use crate::error::Result;
use crate::inference::{ordered_derivation, select_inference_literals, Proof, ResControl};
use crate::logic::Clause;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Given-clause search that always picks the oldest clause
///
/// Only the bounds and the literal selection of [`SearchParams`] are used.
#[derive(Debug)]
pub struct SimpleProofState {
    params: SearchParams,
    processed: ClauseSet,
    unprocessed: ClauseSet,
    control: ResControl,
    stats: ProofStatistics,
    status: ProofStatus,
    result: Option<Arc<Clause>>,
    started: Option<Instant>,
}

impl SimpleProofState {
    pub fn new(params: SearchParams, clauses: ClauseSet) -> Result<Self> {
        clauses.collect_sig()?;
        let stats = ProofStatistics {
            initial_clauses: clauses.len(),
            ..ProofStatistics::default()
        };
        Ok(SimpleProofState {
            params,
            processed: ClauseSet::new(),
            unprocessed: clauses,
            control: ResControl::new(),
            stats,
            status: ProofStatus::Running,
            result: None,
            started: None,
        })
    }

    pub fn status(&self) -> ProofStatus {
        self.status
    }

    pub fn statistics(&self) -> &ProofStatistics {
        &self.stats
    }

    pub fn processed(&self) -> &ClauseSet {
        &self.processed
    }

    pub fn result(&self) -> Option<&Arc<Clause>> {
        self.result.as_ref()
    }

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
            generated = self.stats.generated(),
            "simple search finished"
        );
    }

    pub fn process_clause(&mut self) -> ProofStatus {
        if self.status.is_terminal() {
            return self.status;
        }
        let started = *self.started.get_or_insert_with(Instant::now);
        if bound_exceeded(&self.params, self.stats.iterations, started) {
            self.finish(ProofStatus::GaveUp, started);
            return self.status;
        }

        let Some(given) = self.unprocessed.extract_first() else {
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

        let given = match self.params.literal_selection {
            Some(strategy) => {
                let mut selected = Clause::clone(&given);
                select_inference_literals(&mut selected, strategy);
                Arc::new(selected)
            }
            None => given,
        };

        let mut new = self.control.compute_all_resolvents(&given, &self.processed);
        self.stats.resolvents += new.len();
        let factors = self.control.compute_all_factors(&given);
        self.stats.factors += factors.len();
        new.extend(factors);

        self.processed.add_clause(given);
        self.stats.processed_clauses += 1;

        for clause in new {
            let clause = Arc::new(clause);
            if clause.is_empty() {
                self.result = Some(clause);
                self.finish(ProofStatus::ProofFound, started);
                return self.status;
            }
            self.unprocessed.add_clause(clause);
        }

        self.stats.elapsed = started.elapsed();
        self.status
    }

    /// Same contract as [`super::ProofState::saturate`]
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
