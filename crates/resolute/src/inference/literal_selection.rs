//! Negative literal selection
//!
//! Restricts generating inferences on a clause to one chosen negative
//! literal. Clauses without negative literals are left alone, so all of
//! their literals stay eligible.

use crate::error::ResoluteError;
use crate::logic::{Clause, EqSign, Literal};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// Strategy for choosing the inference literal among negative literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralSelection {
    /// The first negative literal
    First,
    /// Lowest weight (all symbols count 1), first on ties
    Smallest,
    /// Highest weight, first on ties
    Largest,
    /// Fewest distinct variables, heavier first on ties
    LeastVars,
    /// Negative equations first, then as `LeastVars`
    EqLeastVars,
}

impl LiteralSelection {
    pub const ALL: [LiteralSelection; 5] = [
        LiteralSelection::First,
        LiteralSelection::Smallest,
        LiteralSelection::Largest,
        LiteralSelection::LeastVars,
        LiteralSelection::EqLeastVars,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LiteralSelection::First => "first",
            LiteralSelection::Smallest => "smallest",
            LiteralSelection::Largest => "largest",
            LiteralSelection::LeastVars => "leastvars",
            LiteralSelection::EqLeastVars => "eqleastvars",
        }
    }

    /// Position in `literals` of the chosen negative literal
    pub fn select(&self, literals: &[Literal]) -> Option<usize> {
        let candidates = literals
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_negative());
        match self {
            LiteralSelection::First => candidates.map(|(i, _)| i).next(),
            LiteralSelection::Smallest => candidates
                .min_by_key(|(_, l)| l.weight(1, 1))
                .map(|(i, _)| i),
            LiteralSelection::Largest => candidates
                .min_by_key(|(_, l)| Reverse(l.weight(1, 1)))
                .map(|(i, _)| i),
            LiteralSelection::LeastVars => candidates
                .min_by_key(|(_, l)| (l.variables().len(), Reverse(l.weight(1, 1))))
                .map(|(i, _)| i),
            LiteralSelection::EqLeastVars => candidates
                .min_by_key(|(_, l)| {
                    (
                        l.eq_sign() != Some(EqSign::NotEqual),
                        l.variables().len(),
                        Reverse(l.weight(1, 1)),
                    )
                })
                .map(|(i, _)| i),
        }
    }
}

/// Mark the selected literal of `clause` as its only inference literal
///
/// Does nothing if the clause has no negative literal.
pub fn select_inference_literals(clause: &mut Clause, strategy: LiteralSelection) {
    if let Some(selected) = strategy.select(&clause.literals) {
        for (i, lit) in clause.literals.iter_mut().enumerate() {
            lit.set_inference_lit(i == selected);
        }
    }
}

impl FromStr for LiteralSelection {
    type Err = ResoluteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LiteralSelection::ALL
            .into_iter()
            .find(|sel| sel.name() == s)
            .ok_or_else(|| ResoluteError::UnknownLiteralSelection(s.to_string()))
    }
}

impl fmt::Display for LiteralSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
