//! Function and predicate symbols with their arities

use super::clause::Clause;
use super::literal::Literal;
use super::term::Term;
use crate::error::{ResoluteError, Result};
use indexmap::IndexMap;

/// Symbols collected from a clause set
///
/// Every name has exactly one arity and is either a function or a
/// predicate symbol. Insertion order is kept so that generated axioms come
/// out in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    functions: IndexMap<String, usize>,
    predicates: IndexMap<String, usize>,
}

impl Signature {
    pub fn new() -> Self {
        Signature::default()
    }

    pub fn add_function(&mut self, name: &str, arity: usize) -> Result<()> {
        if self.predicates.contains_key(name) {
            return Err(ResoluteError::SymbolKindClash {
                symbol: name.to_string(),
            });
        }
        Self::add_symbol(&mut self.functions, name, arity)
    }

    pub fn add_predicate(&mut self, name: &str, arity: usize) -> Result<()> {
        if self.functions.contains_key(name) {
            return Err(ResoluteError::SymbolKindClash {
                symbol: name.to_string(),
            });
        }
        Self::add_symbol(&mut self.predicates, name, arity)
    }

    fn add_symbol(table: &mut IndexMap<String, usize>, name: &str, arity: usize) -> Result<()> {
        match table.get(name) {
            Some(&expected) if expected != arity => Err(ResoluteError::ArityMismatch {
                symbol: name.to_string(),
                expected,
                found: arity,
            }),
            Some(_) => Ok(()),
            None => {
                table.insert(name.to_string(), arity);
                Ok(())
            }
        }
    }

    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn is_predicate(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    pub fn arity(&self, name: &str) -> Option<usize> {
        self.functions
            .get(name)
            .or_else(|| self.predicates.get(name))
            .copied()
    }

    pub fn functions(&self) -> impl Iterator<Item = (&str, usize)> {
        self.functions.iter().map(|(n, a)| (n.as_str(), *a))
    }

    pub fn predicates(&self) -> impl Iterator<Item = (&str, usize)> {
        self.predicates.iter().map(|(n, a)| (n.as_str(), *a))
    }

    pub fn collect_term(&mut self, term: &Term) -> Result<()> {
        if let Term::Compound(f, args) = term {
            self.add_function(f, args.len())?;
            for arg in args {
                self.collect_term(arg)?;
            }
        }
        Ok(())
    }

    pub fn collect_literal(&mut self, literal: &Literal) -> Result<()> {
        self.add_predicate(literal.predicate(), literal.arity())?;
        for arg in literal.atom().args() {
            self.collect_term(arg)?;
        }
        Ok(())
    }

    pub fn collect_clause(&mut self, clause: &Clause) -> Result<()> {
        for lit in &clause.literals {
            self.collect_literal(lit)?;
        }
        Ok(())
    }
}
