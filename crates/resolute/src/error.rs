//! Error types for the prover

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResoluteError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Symbol {symbol} used with arity {found}, previously {expected}")]
    ArityMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },

    #[error("Symbol {symbol} used both as function and predicate")]
    SymbolKindClash { symbol: String },

    #[error("Unknown heuristic: {0}")]
    UnknownHeuristic(String),

    #[error("Unknown literal selection strategy: {0}")]
    UnknownLiteralSelection(String),

    #[error("Invalid evaluation ratings: {0}")]
    InvalidRatings(String),
}

pub type Result<T> = std::result::Result<T, ResoluteError>;
