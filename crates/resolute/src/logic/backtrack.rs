//! Backtrackable substitutions for search procedures

use super::term::Term;
use std::collections::HashMap;
use std::fmt;

/// Opaque watermark into the binding trail of a [`BtSubstitution`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StateId(usize);

/// A substitution whose bindings can be undone in reverse order
///
/// Every binding is recorded on a trail. [`mark`] returns the current trail
/// position and [`undo_to`] pops bindings until the trail is back at that
/// position, so nested search steps can roll back exactly what they added.
///
/// [`mark`]: BtSubstitution::mark
/// [`undo_to`]: BtSubstitution::undo_to
#[derive(Debug, Clone, Default)]
pub struct BtSubstitution {
    map: HashMap<String, Term>,
    trail: Vec<String>,
}

impl BtSubstitution {
    pub fn new() -> Self {
        BtSubstitution {
            map: HashMap::new(),
            trail: Vec::new(),
        }
    }

    /// Bind an unbound variable, recording it on the trail
    #[inline]
    pub fn add_binding(&mut self, var: &str, term: Term) {
        debug_assert!(!self.map.contains_key(var), "variable {} bound twice", var);
        self.trail.push(var.to_string());
        self.map.insert(var.to_string(), term);
    }

    /// Save the current position for a later [`undo_to`](Self::undo_to)
    #[inline]
    pub fn mark(&self) -> StateId {
        StateId(self.trail.len())
    }

    /// Remove every binding added after `state`
    pub fn undo_to(&mut self, state: StateId) {
        while self.trail.len() > state.0 {
            if let Some(var) = self.trail.pop() {
                self.map.remove(&var);
            }
        }
    }

    /// Remove the most recent binding; false if there is none
    pub fn undo_last(&mut self) -> bool {
        match self.trail.pop() {
            Some(var) => {
                self.map.remove(&var);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, var: &str) -> Option<&Term> {
        self.map.get(var)
    }

    pub fn is_bound(&self, var: &str) -> bool {
        self.map.contains_key(var)
    }

    /// Number of live bindings
    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    pub fn apply(&self, term: &Term) -> Term {
        match term {
            Term::Variable(v) => self.map.get(v).cloned().unwrap_or_else(|| term.clone()),
            Term::Compound(f, args) => {
                Term::Compound(f.clone(), args.iter().map(|a| self.apply(a)).collect())
            }
        }
    }
}

impl fmt::Display for BtSubstitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, var) in self.trail.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if let Some(term) = self.map.get(var) {
                write!(f, "{}<-{}", var, term)?;
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_undo() {
        let mut subst = BtSubstitution::new();
        subst.add_binding("X", Term::constant("a"));
        let state = subst.mark();
        subst.add_binding("Y", Term::constant("b"));
        subst.add_binding("Z", Term::constant("c"));
        assert_eq!(subst.len(), 3);

        subst.undo_to(state);
        assert_eq!(subst.len(), 1);
        assert!(subst.is_bound("X"));
        assert!(!subst.is_bound("Y"));
        assert!(!subst.is_bound("Z"));
    }

    #[test]
    fn test_undo_last() {
        let mut subst = BtSubstitution::new();
        assert!(!subst.undo_last());
        subst.add_binding("X", Term::constant("a"));
        subst.add_binding("Y", Term::constant("b"));
        assert!(subst.undo_last());
        assert!(!subst.is_bound("Y"));
        assert!(subst.undo_last());
        assert!(!subst.undo_last());
        assert!(subst.is_empty());
    }

    #[test]
    fn test_undo_to_later_mark_is_noop() {
        let mut subst = BtSubstitution::new();
        let early = subst.mark();
        subst.add_binding("X", Term::constant("a"));
        let late = subst.mark();
        subst.undo_to(late);
        assert_eq!(subst.len(), 1);
        subst.undo_to(early);
        assert_eq!(subst.len(), 0);
    }

    #[test]
    fn test_rebind_after_undo() {
        let mut subst = BtSubstitution::new();
        let state = subst.mark();
        subst.add_binding("X", Term::constant("a"));
        subst.undo_to(state);
        subst.add_binding("X", Term::constant("b"));
        let t = Term::app("f", vec![Term::var("X")]);
        assert_eq!(subst.apply(&t).to_string(), "f(b)");
        assert_eq!(subst.to_string(), "{X<-b}");
    }
}
