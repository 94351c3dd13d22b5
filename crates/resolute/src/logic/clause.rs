//! Clauses: named disjunctions of literals

use super::literal::Literal;
use super::substitution::{FreshVars, Substitution};
use super::term::{write_symbol, Term};
use crate::error::ResoluteError;
use crate::inference::derivation::{derivation_output_enabled, Derivation};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a clause, using the role names of the clause text format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClauseType {
    Axiom,
    Hypothesis,
    Definition,
    Assumption,
    Lemma,
    Theorem,
    Corollary,
    Conjecture,
    NegatedConjecture,
    /// Derived by an inference
    #[default]
    Plain,
    Unknown,
}

impl ClauseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseType::Axiom => "axiom",
            ClauseType::Hypothesis => "hypothesis",
            ClauseType::Definition => "definition",
            ClauseType::Assumption => "assumption",
            ClauseType::Lemma => "lemma",
            ClauseType::Theorem => "theorem",
            ClauseType::Corollary => "corollary",
            ClauseType::Conjecture => "conjecture",
            ClauseType::NegatedConjecture => "negated_conjecture",
            ClauseType::Plain => "plain",
            ClauseType::Unknown => "unknown",
        }
    }

    /// Check if this is a goal clause
    pub fn is_goal(&self) -> bool {
        matches!(self, ClauseType::NegatedConjecture | ClauseType::Conjecture)
    }
}

impl FromStr for ClauseType {
    type Err = ResoluteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "axiom" => ClauseType::Axiom,
            "hypothesis" => ClauseType::Hypothesis,
            "definition" => ClauseType::Definition,
            "assumption" => ClauseType::Assumption,
            "lemma" => ClauseType::Lemma,
            "theorem" => ClauseType::Theorem,
            "corollary" => ClauseType::Corollary,
            "conjecture" => ClauseType::Conjecture,
            "negated_conjecture" => ClauseType::NegatedConjecture,
            "plain" => ClauseType::Plain,
            "unknown" => ClauseType::Unknown,
            other => return Err(ResoluteError::Parse(format!("unknown clause role '{}'", other))),
        })
    }
}

impl fmt::Display for ClauseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clause (disjunction of literals)
///
/// Clauses are shared as `Arc<Clause>` once they enter a clause set; the
/// sets and indexes identify them by pointer, so two clauses with the same
/// literals are still distinct members.
#[derive(Debug, Clone, Default)]
pub struct Clause {
    pub name: String,
    pub clause_type: ClauseType,
    pub literals: Vec<Literal>,
    pub derivation: Option<Derivation>,
}

impl Clause {
    /// Create an unnamed clause from literals
    pub fn new(literals: Vec<Literal>) -> Self {
        Clause {
            name: String::new(),
            clause_type: ClauseType::Plain,
            literals,
            derivation: None,
        }
    }

    pub fn named(name: impl Into<String>, clause_type: ClauseType, literals: Vec<Literal>) -> Self {
        Clause {
            name: name.into(),
            clause_type,
            literals,
            derivation: None,
        }
    }

    pub fn with_derivation(mut self, derivation: Derivation) -> Self {
        self.derivation = Some(derivation);
        self
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// The empty clause (contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// At most one positive literal
    pub fn is_horn(&self) -> bool {
        self.literals.iter().filter(|l| l.is_positive()).count() <= 1
    }

    pub fn literal(&self, index: usize) -> &Literal {
        &self.literals[index]
    }

    /// Complementary literals, or a positive `t = t`
    pub fn is_tautology(&self) -> bool {
        for i in 0..self.literals.len() {
            for j in (i + 1)..self.literals.len() {
                if self.literals[i].is_opposite(&self.literals[j]) {
                    return true;
                }
            }
        }
        self.literals.iter().any(Literal::is_trivial_equation)
    }

    pub fn is_ground(&self) -> bool {
        self.literals.iter().all(Literal::is_ground)
    }

    /// Sum of literal weights
    pub fn weight(&self, f_weight: u64, v_weight: u64) -> u64 {
        self.literals
            .iter()
            .map(|l| l.weight(f_weight, v_weight))
            .sum()
    }

    pub fn variables(&self) -> IndexSet<String> {
        let mut vars = IndexSet::new();
        for lit in &self.literals {
            lit.collect_variables(&mut vars);
        }
        vars
    }

    /// Instantiate every literal; the result is unnamed and has no derivation
    pub fn instantiate(&self, subst: &Substitution) -> Clause {
        Clause::new(self.literals.iter().map(|l| l.instantiate(subst)).collect())
    }

    /// Copy with all variables renamed to fresh ones
    pub fn fresh_var_copy(&self, fresh: &mut FreshVars) -> Clause {
        let vars = self.variables();
        let renaming = fresh.renaming(&vars);
        Clause {
            name: self.name.clone(),
            clause_type: self.clause_type,
            literals: self
                .literals
                .iter()
                .map(|l| {
                    let mut renamed = l.instantiate(&renaming);
                    renamed.set_inference_lit(l.is_inference_lit());
                    renamed
                })
                .collect(),
            derivation: self.derivation.clone(),
        }
    }

    /// Drop repeated literals, keeping first occurrences; returns how many
    pub fn remove_duplicate_literals(&mut self) -> usize {
        let before = self.literals.len();
        let mut seen: IndexSet<Literal> = IndexSet::with_capacity(before);
        self.literals.retain(|l| seen.insert(l.clone()));
        before - self.literals.len()
    }

    /// Sorted (polarity, predicate) pairs of all literals
    pub fn predicate_abstraction(&self) -> Vec<(bool, String)> {
        let mut abstraction: Vec<_> = self
            .literals
            .iter()
            .map(Literal::predicate_abstraction)
            .collect();
        abstraction.sort();
        abstraction
    }

    /// Disjunction text, `$false` for the empty clause
    pub fn literals_string(&self) -> String {
        if self.literals.is_empty() {
            return "$false".to_string();
        }
        self.literals
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Name-independent text form used to recognise duplicate clauses
    ///
    /// Literals are ordered by their text with variables blanked out, then
    /// variables are renamed in order of first occurrence.
    pub fn canonical_key(&self) -> String {
        let blank = Substitution::from_bindings(
            self.variables()
                .into_iter()
                .map(|v| (v, Term::var("_"))),
        );
        let mut order: Vec<(String, &Literal)> = self
            .literals
            .iter()
            .map(|l| (l.instantiate(&blank).to_string(), l))
            .collect();
        order.sort_by(|a, b| a.0.cmp(&b.0));

        let mut vars = IndexSet::new();
        for (_, lit) in &order {
            lit.collect_variables(&mut vars);
        }
        let renaming = Substitution::from_bindings(
            vars.iter()
                .enumerate()
                .map(|(i, v)| (v.clone(), Term::var(format!("X{}", i)))),
        );
        let renamed = Clause::new(
            order
                .into_iter()
                .map(|(_, l)| l.instantiate(&renaming))
                .collect(),
        );
        renamed.literals_string()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() {
            "unnamed"
        } else {
            &self.name
        };
        write!(f, "cnf(")?;
        write_symbol(f, name)?;
        write!(f, ",{},{}", self.clause_type, self.literals_string())?;
        if derivation_output_enabled() {
            if let Some(derivation) = &self.derivation {
                write!(f, ",{}", derivation.annotation())?;
            }
        }
        write!(f, ").")
    }
}

/// Source of names for derived clauses (`c1`, `c2`, ...)
#[derive(Debug, Clone, Default)]
pub struct ClauseNamer {
    counter: usize,
}

impl ClauseNamer {
    pub fn new() -> Self {
        ClauseNamer { counter: 0 }
    }

    pub fn next_name(&mut self) -> String {
        self.counter += 1;
        format!("c{}", self.counter)
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(negative: bool, pred: &str, args: Vec<Term>) -> Literal {
        Literal::new(Term::app(pred, args), negative)
    }

    fn a() -> Term {
        Term::constant("a")
    }

    fn x() -> Term {
        Term::var("X")
    }

    #[test]
    fn test_classifiers() {
        let empty = Clause::new(vec![]);
        assert!(empty.is_empty() && empty.is_horn() && !empty.is_unit());

        let unit = Clause::new(vec![lit(false, "p", vec![a()])]);
        assert!(unit.is_unit() && unit.is_horn());

        let horn = Clause::new(vec![
            lit(false, "mortal", vec![x()]),
            lit(true, "human", vec![x()]),
        ]);
        assert!(horn.is_horn());

        let non_horn = Clause::new(vec![lit(false, "p", vec![x()]), lit(false, "q", vec![a()])]);
        assert!(!non_horn.is_horn());
    }

    #[test]
    fn test_tautology() {
        let taut = Clause::new(vec![lit(false, "p", vec![x()]), lit(true, "p", vec![x()])]);
        assert!(taut.is_tautology());

        let not_taut = Clause::new(vec![lit(false, "p", vec![x()]), lit(true, "p", vec![a()])]);
        assert!(!not_taut.is_tautology());

        let refl = Clause::new(vec![Literal::equation(x(), x())]);
        assert!(refl.is_tautology());
    }

    #[test]
    fn test_weight() {
        // p(X) | ~q(a): (2 + 1) + (2 + 2)
        let clause = Clause::new(vec![lit(false, "p", vec![x()]), lit(true, "q", vec![a()])]);
        assert_eq!(clause.weight(2, 1), 7);
    }

    #[test]
    fn test_remove_duplicate_literals() {
        let mut clause = Clause::new(vec![
            lit(false, "p", vec![a()]),
            lit(true, "q", vec![a()]),
            lit(false, "p", vec![a()]),
        ]);
        assert_eq!(clause.remove_duplicate_literals(), 1);
        assert_eq!(clause.literals_string(), "p(a)|~q(a)");
    }

    #[test]
    fn test_fresh_var_copy_renames_consistently() {
        let clause = Clause::named(
            "c",
            ClauseType::Axiom,
            vec![lit(false, "p", vec![x(), Term::var("Y")]), lit(true, "q", vec![x()])],
        );
        let mut fresh = FreshVars::new();
        let copy = clause.fresh_var_copy(&mut fresh);
        assert_eq!(copy.literals_string(), "p(V_1,V_2)|~q(V_1)");
        assert_eq!(copy.name, "c");
        assert!(copy.variables().iter().all(|v| !clause.variables().contains(v)));
    }

    #[test]
    fn test_canonical_key_identifies_variants() {
        let c1 = Clause::new(vec![lit(false, "q", vec![Term::var("Y")]), lit(false, "p", vec![x()])]);
        let c2 = Clause::new(vec![lit(false, "p", vec![Term::var("Z")]), lit(false, "q", vec![x()])]);
        assert_eq!(c1.canonical_key(), c2.canonical_key());
        assert_eq!(c1.canonical_key(), "p(X0)|q(X1)");

        let c3 = Clause::new(vec![lit(false, "p", vec![x()]), lit(false, "q", vec![x()])]);
        assert_ne!(c1.canonical_key(), c3.canonical_key());
    }

    #[test]
    fn test_predicate_abstraction_is_sorted() {
        let clause = Clause::new(vec![
            lit(false, "q", vec![a()]),
            lit(true, "p", vec![a()]),
            lit(false, "p", vec![x()]),
        ]);
        assert_eq!(
            clause.predicate_abstraction(),
            vec![
                (false, "p".to_string()),
                (true, "p".to_string()),
                (true, "q".to_string())
            ]
        );
    }

    #[test]
    fn test_display() {
        let clause = Clause::named(
            "ax1",
            ClauseType::Axiom,
            vec![lit(false, "p", vec![a()]), lit(true, "q", vec![x()])],
        );
        assert_eq!(clause.literals_string(), "p(a)|~q(X)");
        assert!(clause.to_string().starts_with("cnf(ax1,axiom,p(a)|~q(X)"));
        assert_eq!(Clause::new(vec![]).literals_string(), "$false");
    }

    #[test]
    fn test_clause_type_roundtrip() {
        for role in ["axiom", "negated_conjecture", "plain", "hypothesis"] {
            assert_eq!(role.parse::<ClauseType>().unwrap().as_str(), role);
        }
        assert!("bogus".parse::<ClauseType>().is_err());
    }

    #[test]
    fn test_clause_namer() {
        let mut namer = ClauseNamer::new();
        assert_eq!(namer.next_name(), "c1");
        assert_eq!(namer.next_name(), "c2");
        namer.reset();
        assert_eq!(namer.next_name(), "c1");
    }
}
