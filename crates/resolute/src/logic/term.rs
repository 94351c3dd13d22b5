//! Terms in first-order logic

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A first-order term
///
/// Constants are compound terms without arguments. Names that start with an
/// uppercase letter or an underscore denote variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    Variable(String),
    Compound(String, Vec<Term>),
}

/// Whether a symbol name denotes a variable
pub fn is_variable_name(name: &str) -> bool {
    name.chars()
        .next()
        .map_or(false, |c| c.is_ascii_uppercase() || c == '_')
}

/// Whether a symbol prints without quotes: a lower word or an integer
pub fn is_plain_symbol(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        Some(c) if c.is_ascii_digit() => chars.all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Write a function, predicate or clause name, single-quoted if needed
pub(crate) fn write_symbol(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    if is_plain_symbol(name) {
        return f.write_str(name);
    }
    f.write_str("'")?;
    for c in name.chars() {
        if c == '\\' || c == '\'' {
            f.write_str("\\")?;
        }
        write!(f, "{}", c)?;
    }
    f.write_str("'")
}

/// Displays a name the way [`write_symbol`] writes it
pub(crate) struct Symbol<'a>(pub &'a str);

impl fmt::Display for Symbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_symbol(f, self.0)
    }
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Term::Compound(name.into(), Vec::new())
    }

    pub fn app(functor: impl Into<String>, args: Vec<Term>) -> Self {
        Term::Compound(functor.into(), args)
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Term::Compound(..))
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Term::Compound(_, args) if args.is_empty())
    }

    /// Top symbol of a compound term
    pub fn functor(&self) -> Option<&str> {
        match self {
            Term::Compound(f, _) => Some(f),
            Term::Variable(_) => None,
        }
    }

    /// Arguments of a compound term (empty for variables and constants)
    pub fn args(&self) -> &[Term] {
        match self {
            Term::Compound(_, args) => args,
            Term::Variable(_) => &[],
        }
    }

    pub fn arity(&self) -> usize {
        self.args().len()
    }

    pub fn is_ground(&self) -> bool {
        match self {
            Term::Variable(_) => false,
            Term::Compound(_, args) => args.iter().all(Term::is_ground),
        }
    }

    /// Whether the variable `name` occurs anywhere in this term
    pub fn occurs(&self, name: &str) -> bool {
        match self {
            Term::Variable(v) => v == name,
            Term::Compound(_, args) => args.iter().any(|a| a.occurs(name)),
        }
    }

    /// Collect variables in order of first occurrence
    pub fn collect_variables(&self, vars: &mut IndexSet<String>) {
        match self {
            Term::Variable(v) => {
                vars.insert(v.clone());
            }
            Term::Compound(_, args) => {
                for arg in args {
                    arg.collect_variables(vars);
                }
            }
        }
    }

    pub fn variables(&self) -> IndexSet<String> {
        let mut vars = IndexSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    /// Symbol-count weight: every function symbol occurrence costs
    /// `f_weight`, every variable occurrence `v_weight`
    pub fn weight(&self, f_weight: u64, v_weight: u64) -> u64 {
        match self {
            Term::Variable(_) => v_weight,
            Term::Compound(_, args) => {
                f_weight
                    + args
                        .iter()
                        .map(|a| a.weight(f_weight, v_weight))
                        .sum::<u64>()
            }
        }
    }

    /// Number of symbol occurrences (functions and variables)
    pub fn size(&self) -> usize {
        match self {
            Term::Variable(_) => 1,
            Term::Compound(_, args) => 1 + args.iter().map(Term::size).sum::<usize>(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v),
            Term::Compound(name, args) => {
                write_symbol(f, name)?;
                if !args.is_empty() {
                    write!(f, "(")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}
