//! Clause-text reader
//!
//! Reads `cnf(...)` statements and the `% Status` header of a problem file.
//! Clauses print back in the same notation, so parse and print round-trip.

pub mod cnf;

pub use cnf::parse_clauses;

use crate::clauses::ClauseSet;
use crate::error::{ResoluteError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// SZS result status names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SzsStatus {
    Theorem,
    ContradictoryAxioms,
    Unsatisfiable,
    CounterSatisfiable,
    Satisfiable,
    Open,
    Unknown,
    GaveUp,
    ResourceOut,
    Timeout,
}

impl SzsStatus {
    const ALL: [SzsStatus; 10] = [
        SzsStatus::Theorem,
        SzsStatus::ContradictoryAxioms,
        SzsStatus::Unsatisfiable,
        SzsStatus::CounterSatisfiable,
        SzsStatus::Satisfiable,
        SzsStatus::Open,
        SzsStatus::Unknown,
        SzsStatus::GaveUp,
        SzsStatus::ResourceOut,
        SzsStatus::Timeout,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SzsStatus::Theorem => "Theorem",
            SzsStatus::ContradictoryAxioms => "ContradictoryAxioms",
            SzsStatus::Unsatisfiable => "Unsatisfiable",
            SzsStatus::CounterSatisfiable => "CounterSatisfiable",
            SzsStatus::Satisfiable => "Satisfiable",
            SzsStatus::Open => "Open",
            SzsStatus::Unknown => "Unknown",
            SzsStatus::GaveUp => "GaveUp",
            SzsStatus::ResourceOut => "ResourceOut",
            SzsStatus::Timeout => "Timeout",
        }
    }

    /// A refutation of the clause set exists
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(
            self,
            SzsStatus::Theorem | SzsStatus::ContradictoryAxioms | SzsStatus::Unsatisfiable
        )
    }

    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SzsStatus::Satisfiable | SzsStatus::CounterSatisfiable)
    }

    /// Whether a search result `found` is consistent with this expected status
    ///
    /// A search that stopped without an answer never contradicts anything.
    pub fn agrees_with(&self, found: SzsStatus) -> bool {
        if found.is_unsatisfiable() {
            !self.is_satisfiable()
        } else if found.is_satisfiable() {
            !self.is_unsatisfiable()
        } else {
            true
        }
    }
}

impl FromStr for SzsStatus {
    type Err = ResoluteError;

    fn from_str(s: &str) -> Result<Self> {
        SzsStatus::ALL
            .into_iter()
            .find(|status| status.name() == s)
            .ok_or_else(|| ResoluteError::Parse(format!("unknown SZS status '{}'", s)))
    }
}

impl fmt::Display for SzsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed problem: input clauses plus the expected status, if stated
#[derive(Debug, Clone, Default)]
pub struct Problem {
    pub clauses: ClauseSet,
    pub status: Option<SzsStatus>,
}

/// Value of the first `% Status : <value>` comment line
fn header_status(text: &str) -> Result<Option<SzsStatus>> {
    for line in text.lines() {
        let Some(comment) = line.trim_start().strip_prefix('%') else {
            continue;
        };
        let Some((key, value)) = comment.split_once(':') else {
            continue;
        };
        if key.trim() == "Status" {
            let value = value.split_whitespace().next().unwrap_or("");
            return value.parse().map(Some);
        }
    }
    Ok(None)
}

pub fn parse_problem(text: &str) -> Result<Problem> {
    let status = header_status(text)?;
    let clauses = parse_clauses(text)?;
    Ok(Problem {
        clauses: ClauseSet::from_clauses(clauses),
        status,
    })
}

pub fn parse_problem_file(path: impl AsRef<Path>) -> Result<Problem> {
    let text = fs::read_to_string(path)?;
    parse_problem(&text)
}
