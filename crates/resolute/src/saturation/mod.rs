//! Given-clause saturation
//!
//! [`ProofState`] runs the full loop with heuristic clause selection, indexed
//! partner retrieval and optional redundancy elimination.
//! [`SimpleProofState`] is the plain FIFO variant without indexes or
//! redundancy checks. Both move through the same states:
//!
//! ```text
//! Running -> ProofFound | Saturated | GaveUp
//! ```

pub mod simple;
pub mod state;
pub mod stats;

pub use simple::SimpleProofState;
pub use state::ProofState;
pub use stats::ProofStatistics;

use crate::config::SearchParams;
use crate::parser::SzsStatus;
use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// Search state; every state but `Running` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProofStatus {
    Running,
    /// The empty clause was derived
    ProofFound,
    /// No clauses left to process and no proof
    Saturated,
    /// Stopped by an iteration or time bound
    GaveUp,
}

impl ProofStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ProofStatus::Running)
    }

    pub fn szs_status(&self) -> SzsStatus {
        match self {
            ProofStatus::Running => SzsStatus::Unknown,
            ProofStatus::ProofFound => SzsStatus::Unsatisfiable,
            ProofStatus::Saturated => SzsStatus::Satisfiable,
            ProofStatus::GaveUp => SzsStatus::GaveUp,
        }
    }
}

impl fmt::Display for ProofStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProofStatus::Running => "Running",
            ProofStatus::ProofFound => "ProofFound",
            ProofStatus::Saturated => "Saturated",
            ProofStatus::GaveUp => "GaveUp",
        };
        f.write_str(name)
    }
}

/// Iteration or wall-clock bound from `params` reached
pub(crate) fn bound_exceeded(params: &SearchParams, iterations: usize, started: Instant) -> bool {
    if let Some(max) = params.max_iterations {
        if iterations >= max {
            return true;
        }
    }
    match params.timeout {
        Some(timeout) => started.elapsed() >= timeout,
        None => false,
    }
}
