//! Clause derivation tracking.
//!
//! Records how each clause was derived (inference rule + parent clauses) and
//! reconstructs the ancestry of a clause in dependency order.

use crate::logic::term::Symbol;
use crate::logic::Clause;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

static DERIVATION_OUTPUT: AtomicBool = AtomicBool::new(false);

/// Print derivation annotations when clauses are displayed
pub fn enable_derivation_output() {
    DERIVATION_OUTPUT.store(true, Ordering::Relaxed);
}

pub fn disable_derivation_output() {
    DERIVATION_OUTPUT.store(false, Ordering::Relaxed);
}

pub fn derivation_output_enabled() -> bool {
    DERIVATION_OUTPUT.load(Ordering::Relaxed)
}

/// How a clause was derived
///
/// Rules construct it directly:
/// ```ignore
/// Derivation::inference("resolution", vec![p1, p2])
/// ```
/// A derivation without parents marks a clause introduced by the prover
/// itself, such as an equality axiom.
#[derive(Debug, Clone)]
pub struct Derivation {
    /// Name of the inference rule that produced the clause
    pub rule_name: String,
    /// Premises, shared with the clause sets that hold them
    pub parents: Vec<Arc<Clause>>,
    /// Status tag printed in annotations (`thm` when absent)
    pub extra: Option<String>,
}

impl Derivation {
    pub fn inference(rule_name: impl Into<String>, parents: Vec<Arc<Clause>>) -> Self {
        Derivation {
            rule_name: rule_name.into(),
            parents,
            extra: None,
        }
    }

    pub fn introduced(rule_name: impl Into<String>) -> Self {
        Derivation {
            rule_name: rule_name.into(),
            parents: Vec::new(),
            extra: None,
        }
    }

    /// Annotation in clause text form
    pub fn annotation(&self) -> String {
        if self.parents.is_empty() {
            return format!("introduced({})", self.rule_name);
        }
        let parents: Vec<String> = self
            .parents
            .iter()
            .map(|p| Symbol(&p.name).to_string())
            .collect();
        format!(
            "inference({},[status({})],[{}])",
            self.rule_name,
            self.extra.as_deref().unwrap_or("thm"),
            parents.join(",")
        )
    }
}

/// Objects that may carry a link to the inference that produced them
pub trait Derivable {
    fn derivation(&self) -> Option<&Derivation>;

    fn parents(&self) -> &[Arc<Clause>] {
        match self.derivation() {
            Some(d) => &d.parents,
            None => &[],
        }
    }

    /// Produced by an inference from other clauses
    fn is_derived(&self) -> bool {
        !self.parents().is_empty()
    }
}

impl Derivable for Clause {
    fn derivation(&self) -> Option<&Derivation> {
        self.derivation.as_ref()
    }
}

/// All ancestors of `root` and `root` itself, each exactly once, with every
/// clause listed after its parents
///
/// Clauses are identified by pointer, so shared sub-derivations appear once.
/// Uses an explicit stack; derivation depth is not limited by recursion.
pub fn ordered_derivation(root: &Arc<Clause>) -> Vec<Arc<Clause>> {
    let mut order = Vec::new();
    let mut visited: HashSet<*const Clause> = HashSet::new();
    let mut stack: Vec<(Arc<Clause>, bool)> = vec![(Arc::clone(root), false)];

    while let Some((clause, expanded)) = stack.pop() {
        if expanded {
            order.push(clause);
            continue;
        }
        if !visited.insert(Arc::as_ptr(&clause)) {
            continue;
        }
        stack.push((Arc::clone(&clause), true));
        for parent in clause.parents().iter().rev() {
            if !visited.contains(&Arc::as_ptr(parent)) {
                stack.push((Arc::clone(parent), false));
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{ClauseType, Literal, Term};

    fn input(name: &str, pred: &str) -> Arc<Clause> {
        Arc::new(Clause::named(
            name,
            ClauseType::Axiom,
            vec![Literal::positive(Term::constant(pred))],
        ))
    }

    fn derived(name: &str, parents: Vec<Arc<Clause>>) -> Arc<Clause> {
        let mut clause = Clause::new(vec![]);
        clause.name = name.to_string();
        Arc::new(clause.with_derivation(Derivation::inference("resolution", parents)))
    }

    fn names(order: &[Arc<Clause>]) -> Vec<&str> {
        order.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_annotation_quotes_parent_names() {
        let ax = Arc::new(Clause::named("my ax", ClauseType::Axiom, vec![]));
        let goal = Arc::new(Clause::named("goal", ClauseType::NegatedConjecture, vec![]));
        let derivation = Derivation::inference("resolution", vec![ax, goal]);
        assert_eq!(
            derivation.annotation(),
            "inference(resolution,[status(thm)],['my ax',goal])"
        );
        assert_eq!(Derivation::introduced("eq_refl").annotation(), "introduced(eq_refl)");
    }

    #[test]
    fn test_input_clause_has_no_parents() {
        let a = input("a", "p");
        assert!(a.parents().is_empty());
        assert!(!a.is_derived());
        assert_eq!(names(&ordered_derivation(&a)), vec!["a"]);
    }

    #[test]
    fn test_shared_ancestor_listed_once() {
        // d <- (b, c), b <- (a), c <- (a, b)
        let a = input("a", "p");
        let b = derived("b", vec![a.clone()]);
        let c = derived("c", vec![a.clone(), b.clone()]);
        let d = derived("d", vec![b.clone(), c.clone()]);

        let order = ordered_derivation(&d);
        assert_eq!(names(&order), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_parents_precede_children() {
        let a = input("a", "p");
        let b = input("b", "q");
        let c = derived("c", vec![a.clone(), b.clone()]);
        let e = derived("e", vec![c.clone(), a.clone()]);

        let order = ordered_derivation(&e);
        let pos = |n: &str| order.iter().position(|c| c.name == n).unwrap();
        assert_eq!(order.len(), 4);
        assert!(pos("a") < pos("c"));
        assert!(pos("b") < pos("c"));
        assert!(pos("c") < pos("e"));
        assert_eq!(pos("e"), 3);
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let mut current = input("c0", "p");
        for i in 1..10_000 {
            current = derived(&format!("c{}", i), vec![current]);
        }
        let mut order = ordered_derivation(&current);
        assert_eq!(order.len(), 10_000);
        assert_eq!(order[0].name, "c0");

        // Release the chain from the newest clause so each drop is shallow
        drop(current);
        while let Some(clause) = order.pop() {
            drop(clause);
        }
    }

    #[test]
    fn test_annotation() {
        let a = input("a", "p");
        let b = input("b", "q");
        let c = derived("c", vec![a, b]);
        assert_eq!(
            c.derivation().unwrap().annotation(),
            "inference(resolution,[status(thm)],[a,b])"
        );
        assert_eq!(
            Derivation::introduced("eq_axiom").annotation(),
            "introduced(eq_axiom)"
        );
    }
}
