//! Given-clause selection heuristics

pub mod evaluation;

pub use evaluation::{ClauseEvaluation, EvalStructure, HeuristicKind};
