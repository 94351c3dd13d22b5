//! Clause evaluation functions for given-clause selection
//!
//! An evaluation function assigns each clause a cost when it enters the
//! unprocessed set; lower is better. Several functions are combined in an
//! [`EvalStructure`] that alternates between them by weighted round robin,
//! e.g. picking by weight five times, then once by age.

use crate::error::{ResoluteError, Result};
use crate::logic::Clause;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single clause evaluation function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseEvaluation {
    /// Insertion order: each call returns a strictly larger value
    Fifo { counter: u64 },
    /// Symbol-count weight of the clause
    SymbolCount { f_weight: u64, v_weight: u64 },
}

impl ClauseEvaluation {
    pub fn fifo() -> Self {
        ClauseEvaluation::Fifo { counter: 0 }
    }

    pub fn symbol_count(f_weight: u64, v_weight: u64) -> Self {
        ClauseEvaluation::SymbolCount { f_weight, v_weight }
    }

    pub fn heuristic_eval(&mut self, clause: &Clause) -> u64 {
        match self {
            ClauseEvaluation::Fifo { counter } => {
                *counter += 1;
                *counter
            }
            ClauseEvaluation::SymbolCount { f_weight, v_weight } => {
                clause.weight(*f_weight, *v_weight)
            }
        }
    }
}

impl fmt::Display for ClauseEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseEvaluation::Fifo { .. } => write!(f, "FIFOEval"),
            ClauseEvaluation::SymbolCount { f_weight, v_weight } => {
                write!(f, "SymbolCountEval({},{})", f_weight, v_weight)
            }
        }
    }
}

/// A list of evaluation functions with selection ratings
///
/// [`next_eval`](EvalStructure::next_eval) returns evaluator `i` for
/// `ratings[i]` consecutive calls before moving on, cycling forever.
#[derive(Debug, Clone)]
pub struct EvalStructure {
    evals: Vec<ClauseEvaluation>,
    ratings: Vec<usize>,
    current: usize,
    current_count: usize,
}

impl EvalStructure {
    pub fn new(evals: Vec<(ClauseEvaluation, usize)>) -> Result<Self> {
        if evals.is_empty() {
            return Err(ResoluteError::InvalidRatings(
                "no evaluation functions".to_string(),
            ));
        }
        if let Some((eval, _)) = evals.iter().find(|(_, rating)| *rating == 0) {
            return Err(ResoluteError::InvalidRatings(format!(
                "{} has rating 0",
                eval
            )));
        }
        let (evals, ratings) = evals.into_iter().unzip();
        Ok(EvalStructure {
            evals,
            ratings,
            current: 0,
            current_count: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.evals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evals.is_empty()
    }

    /// One score per evaluation function
    pub fn evaluate(&mut self, clause: &Clause) -> Vec<u64> {
        self.evals
            .iter_mut()
            .map(|e| e.heuristic_eval(clause))
            .collect()
    }

    /// Index of the evaluation function to use for the next selection
    pub fn next_eval(&mut self) -> usize {
        let selected = self.current;
        self.current_count += 1;
        if self.current_count >= self.ratings[self.current] {
            self.current_count = 0;
            self.current = (self.current + 1) % self.evals.len();
        }
        selected
    }
}

impl fmt::Display for EvalStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (eval, rating)) in self.evals.iter().zip(&self.ratings).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}*{}", rating, eval)?;
        }
        write!(f, "]")
    }
}

/// Named given-clause heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeuristicKind {
    #[serde(rename = "FIFO")]
    Fifo,
    SymbolCount,
    #[default]
    PickGiven5,
    PickGiven2,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 4] = [
        HeuristicKind::Fifo,
        HeuristicKind::SymbolCount,
        HeuristicKind::PickGiven5,
        HeuristicKind::PickGiven2,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HeuristicKind::Fifo => "FIFO",
            HeuristicKind::SymbolCount => "SymbolCount",
            HeuristicKind::PickGiven5 => "PickGiven5",
            HeuristicKind::PickGiven2 => "PickGiven2",
        }
    }

    /// Fresh evaluation structure for one search
    pub fn build(&self) -> Result<EvalStructure> {
        let evals = match self {
            HeuristicKind::Fifo => vec![(ClauseEvaluation::fifo(), 1)],
            HeuristicKind::SymbolCount => vec![(ClauseEvaluation::symbol_count(2, 1), 1)],
            HeuristicKind::PickGiven5 => vec![
                (ClauseEvaluation::symbol_count(2, 1), 5),
                (ClauseEvaluation::fifo(), 1),
            ],
            HeuristicKind::PickGiven2 => vec![
                (ClauseEvaluation::symbol_count(2, 1), 2),
                (ClauseEvaluation::fifo(), 1),
            ],
        };
        EvalStructure::new(evals)
    }
}

impl FromStr for HeuristicKind {
    type Err = ResoluteError;

    fn from_str(s: &str) -> Result<Self> {
        HeuristicKind::ALL
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| ResoluteError::UnknownHeuristic(s.to_string()))
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
