//! Resolute: a given-clause resolution prover for first-order clause logic
//!
//! The library reads clause sets, runs a saturation loop over binary
//! resolution and factoring with optional redundancy elimination, and
//! reconstructs the derivation of the empty clause when a refutation is found.

pub mod clauses;
pub mod config;
pub mod error;
pub mod index;
pub mod inference;
pub mod logic;
pub mod parser;
pub mod saturation;
pub mod selection;

pub use clauses::{ClauseSet, ClauseStore, HeuristicClauseSet, IndexedClauseSet};
pub use config::SearchParams;
pub use error::{ResoluteError, Result};
pub use inference::{
    compute_all_factors, compute_all_resolvents, factor, forward_subsumption,
    backward_subsumption, resolve, subsumes, Derivable, Derivation, LiteralSelection, Proof,
    ProofStep, ResControl,
};
pub use logic::{
    mgu, BtSubstitution, Clause, ClauseNamer, ClauseType, EqSign, FreshVars, Literal, Signature,
    StateId, Substitution, Term,
};
pub use parser::{parse_problem, parse_problem_file, Problem, SzsStatus};
pub use saturation::{ProofState, ProofStatistics, ProofStatus, SimpleProofState};
pub use selection::{ClauseEvaluation, EvalStructure, HeuristicKind};
