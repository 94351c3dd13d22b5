//! Proof records built from the derivation of the empty clause

use super::derivation::{ordered_derivation, Derivable};
use crate::error::Result;
use crate::logic::term::write_symbol;
use crate::logic::Clause;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A single step in a proof. Every step produces a clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub name: String,
    pub role: String,
    /// Literals of the clause in clause text form
    pub clause: String,
    /// Inference rule, `None` for input clauses
    pub rule: Option<String>,
    pub parents: Vec<String>,
}

/// A proof is a sequence of steps, each listed after its premises
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub steps: Vec<ProofStep>,
}

impl Proof {
    /// Ancestry of `root` in dependency order
    pub fn from_clause(root: &Arc<Clause>) -> Self {
        let steps = ordered_derivation(root)
            .iter()
            .map(|clause| ProofStep {
                name: clause.name.clone(),
                role: clause.clause_type.to_string(),
                clause: clause.literals_string(),
                rule: clause.derivation().map(|d| d.rule_name.clone()),
                parents: clause.parents().iter().map(|p| p.name.clone()).collect(),
            })
            .collect();
        Proof { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps produced by the given rule
    pub fn count_rule(&self, rule: &str) -> usize {
        self.steps
            .iter()
            .filter(|s| s.rule.as_deref() == Some(rule))
            .count()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "cnf(")?;
            write_symbol(f, &step.name)?;
            write!(f, ",{},{}", step.role, step.clause)?;
            match &step.rule {
                Some(rule) if step.parents.is_empty() => write!(f, ",introduced({})", rule)?,
                Some(rule) => {
                    write!(f, ",inference({},[status(thm)],[", rule)?;
                    for (i, parent) in step.parents.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        write_symbol(f, parent)?;
                    }
                    write!(f, "])")?;
                }
                None => {}
            }
            writeln!(f, ").")?;
        }
        Ok(())
    }
}
