//! Functional substitutions and fresh variable generation

use super::term::Term;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A substitution mapping variable names to terms
///
/// Substitutions built by unification are kept in composed form: applying a
/// binding updates every existing value, so a single pass of [`apply`]
/// yields the fully instantiated term as long as no binding is cyclic.
///
/// [`apply`]: Substitution::apply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    map: BTreeMap<String, Term>,
}

impl Substitution {
    pub fn new() -> Self {
        Substitution {
            map: BTreeMap::new(),
        }
    }

    /// Build a substitution from raw bindings without normalizing them
    pub fn from_bindings<I, S>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (S, Term)>,
        S: Into<String>,
    {
        Substitution {
            map: bindings.into_iter().map(|(v, t)| (v.into(), t)).collect(),
        }
    }

    pub fn get(&self, var: &str) -> Option<&Term> {
        self.map.get(var)
    }

    pub fn is_bound(&self, var: &str) -> bool {
        self.map.contains_key(var)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Term)> {
        self.map.iter()
    }

    /// Add a raw binding, replacing any previous value
    pub fn insert(&mut self, var: impl Into<String>, term: Term) {
        self.map.insert(var.into(), term);
    }

    /// Add `var <- term` and propagate it into every existing binding
    pub fn compose_binding(&mut self, var: &str, term: Term) {
        for value in self.map.values_mut() {
            if value.occurs(var) {
                *value = apply_binding(value, var, &term);
            }
        }
        self.map.insert(var.to_string(), term);
    }

    /// Apply this substitution to a term (single pass)
    pub fn apply(&self, term: &Term) -> Term {
        if self.map.is_empty() {
            return term.clone();
        }
        match term {
            Term::Variable(v) => self.map.get(v).cloned().unwrap_or_else(|| term.clone()),
            Term::Compound(f, args) => {
                Term::Compound(f.clone(), args.iter().map(|a| self.apply(a)).collect())
            }
        }
    }

    /// The substitution that applies `self` first and `other` second
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut result = Substitution::new();
        for (var, term) in &self.map {
            result.insert(var.clone(), other.apply(term));
        }
        for (var, term) in &other.map {
            if !self.map.contains_key(var) {
                result.insert(var.clone(), term.clone());
            }
        }
        result
    }

    /// Whether some variable is bound to a term that contains it
    ///
    /// Only unification without occurs check can produce such bindings.
    pub fn has_cyclic_binding(&self) -> bool {
        self.map.iter().any(|(v, t)| t.occurs(v))
    }
}

/// Replace every occurrence of `var` in `term` by `value`
pub(crate) fn apply_binding(term: &Term, var: &str, value: &Term) -> Term {
    match term {
        Term::Variable(v) if v == var => value.clone(),
        Term::Variable(_) => term.clone(),
        Term::Compound(f, args) => Term::Compound(
            f.clone(),
            args.iter().map(|a| apply_binding(a, var, value)).collect(),
        ),
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, term)) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}<-{}", var, term)?;
        }
        write!(f, "}}")
    }
}

/// Source of variable names that do not occur in input problems
///
/// Names have the form `V_<n>`. The counter is owned by whoever drives the
/// inferences, so independent searches do not share it.
#[derive(Debug, Clone, Default)]
pub struct FreshVars {
    counter: usize,
}

impl FreshVars {
    pub fn new() -> Self {
        FreshVars { counter: 0 }
    }

    pub fn fresh_name(&mut self) -> String {
        self.counter += 1;
        format!("V_{}", self.counter)
    }

    pub fn fresh_var(&mut self) -> Term {
        Term::Variable(self.fresh_name())
    }

    /// A renaming that maps each of `vars` to a new variable
    pub fn renaming<'a, I>(&mut self, vars: I) -> Substitution
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut subst = Substitution::new();
        for var in vars {
            let fresh = self.fresh_var();
            subst.insert(var.clone(), fresh);
        }
        subst
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }
}
