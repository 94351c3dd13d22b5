//! First-order clause logic: terms, substitutions, unification, literals and clauses

pub mod backtrack;
pub mod clause;
pub mod literal;
pub mod signature;
pub mod substitution;
pub mod term;
pub mod unification;


pub use backtrack::{BtSubstitution, StateId};
pub use clause::{Clause, ClauseNamer, ClauseType};
pub use literal::{EqSign, Literal, EQUALITY};
pub use signature::Signature;
pub use substitution::{FreshVars, Substitution};
pub use term::{is_plain_symbol, is_variable_name, Term};
pub use unification::{match_term, match_term_rec, mgu};
