//! Literals: signed atoms

use super::backtrack::BtSubstitution;
use super::substitution::Substitution;
use super::term::Term;
use super::unification::match_term;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Name of the equality predicate
pub const EQUALITY: &str = "=";

/// Equational tag of a literal whose atom is `=(l, r)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EqSign {
    Equal,
    NotEqual,
}

/// A literal: an atom with a sign
///
/// The equational tag is derived from the atom and kept consistent with the
/// sign: a negative equation is always tagged [`EqSign::NotEqual`]. The
/// inference flag marks literals that may take part in generating
/// inferences; it is not part of the literal's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Literal {
    atom: Term,
    negative: bool,
    equation: Option<EqSign>,
    inference: bool,
}

impl Literal {
    pub fn new(atom: Term, negative: bool) -> Self {
        let equation = if atom.functor() == Some(EQUALITY) && atom.arity() == 2 {
            Some(if negative {
                EqSign::NotEqual
            } else {
                EqSign::Equal
            })
        } else {
            None
        };
        Literal {
            atom,
            negative,
            equation,
            inference: true,
        }
    }

    pub fn positive(atom: Term) -> Self {
        Literal::new(atom, false)
    }

    pub fn negative(atom: Term) -> Self {
        Literal::new(atom, true)
    }

    /// `l = r`
    pub fn equation(lhs: Term, rhs: Term) -> Self {
        Literal::positive(Term::app(EQUALITY, vec![lhs, rhs]))
    }

    /// `l != r`
    pub fn disequation(lhs: Term, rhs: Term) -> Self {
        Literal::negative(Term::app(EQUALITY, vec![lhs, rhs]))
    }

    pub fn atom(&self) -> &Term {
        &self.atom
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_positive(&self) -> bool {
        !self.negative
    }

    pub fn eq_sign(&self) -> Option<EqSign> {
        self.equation
    }

    pub fn is_equational(&self) -> bool {
        self.equation.is_some()
    }

    /// Predicate symbol of the atom
    pub fn predicate(&self) -> &str {
        self.atom.functor().unwrap_or("")
    }

    pub fn arity(&self) -> usize {
        self.atom.arity()
    }

    pub fn is_inference_lit(&self) -> bool {
        self.inference
    }

    pub fn set_inference_lit(&mut self, flag: bool) {
        self.inference = flag;
    }

    /// Sign and equational tag agree
    pub fn is_consistent(&self) -> bool {
        match self.equation {
            Some(EqSign::Equal) => !self.negative,
            Some(EqSign::NotEqual) => self.negative,
            None => self.atom.functor() != Some(EQUALITY) || self.atom.arity() != 2,
        }
    }

    pub fn negate(&self) -> Literal {
        Literal::new(self.atom.clone(), !self.negative)
    }

    /// Same atom, opposite sign
    pub fn is_opposite(&self, other: &Literal) -> bool {
        self.negative != other.negative && self.atom == other.atom
    }

    /// Opposite sign and same predicate symbol
    pub fn is_resolution_partner(&self, other: &Literal) -> bool {
        self.negative != other.negative && self.predicate() == other.predicate()
    }

    /// `t = t`
    pub fn is_trivial_equation(&self) -> bool {
        match (self.equation, self.atom.args()) {
            (Some(EqSign::Equal), [l, r]) => l == r,
            _ => false,
        }
    }

    pub fn is_ground(&self) -> bool {
        self.atom.is_ground()
    }

    /// Apply a substitution; the result is again an inference literal
    pub fn instantiate(&self, subst: &Substitution) -> Literal {
        Literal::new(subst.apply(&self.atom), self.negative)
    }

    pub fn collect_variables(&self, vars: &mut IndexSet<String>) {
        self.atom.collect_variables(vars);
    }

    pub fn variables(&self) -> IndexSet<String> {
        self.atom.variables()
    }

    /// Symbol-count weight of the atom; the sign does not count
    pub fn weight(&self, f_weight: u64, v_weight: u64) -> u64 {
        self.atom.weight(f_weight, v_weight)
    }

    /// One-way match of `self` onto `target`, extending `subst`
    ///
    /// Signs must agree. On failure `subst` is unchanged.
    pub fn match_onto(&self, target: &Literal, subst: &mut BtSubstitution) -> bool {
        self.negative == target.negative && match_term(&self.atom, &target.atom, subst)
    }

    /// (polarity, predicate) pair used by the subsumption index
    pub fn predicate_abstraction(&self) -> (bool, String) {
        (self.is_positive(), self.predicate().to_string())
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.atom == other.atom
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.atom.hash(state);
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.equation, self.atom.args()) {
            (Some(EqSign::Equal), [l, r]) => write!(f, "{}={}", l, r),
            (Some(EqSign::NotEqual), [l, r]) => write!(f, "{}!={}", l, r),
            _ if self.negative => write!(f, "~{}", self.atom),
            _ => write!(f, "{}", self.atom),
        }
    }
}
