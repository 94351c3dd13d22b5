//! Clause subsumption and its forward/backward application

use crate::clauses::ClauseStore;
use crate::logic::{BtSubstitution, Clause, Literal};
use std::sync::Arc;

/// Check whether `subsumer` subsumes `subsumed`
///
/// True if a single substitution maps every literal of `subsumer` onto a
/// distinct literal of `subsumed`. The empty clause subsumes every clause.
pub fn subsumes(subsumer: &Clause, subsumed: &Clause) -> bool {
    if subsumer.len() > subsumed.len() {
        return false;
    }
    let mut subst = BtSubstitution::new();
    let mut used = vec![false; subsumed.len()];
    subsume_literals(&subsumer.literals, &subsumed.literals, &mut used, &mut subst)
}

fn subsume_literals(
    remaining: &[Literal],
    targets: &[Literal],
    used: &mut [bool],
    subst: &mut BtSubstitution,
) -> bool {
    let Some((first, rest)) = remaining.split_first() else {
        return true;
    };
    for (i, target) in targets.iter().enumerate() {
        if used[i] {
            continue;
        }
        let state = subst.mark();
        if first.match_onto(target, subst) {
            used[i] = true;
            if subsume_literals(rest, targets, used, subst) {
                return true;
            }
            used[i] = false;
        }
        subst.undo_to(state);
    }
    false
}

/// Some member of `set` subsumes `clause`
pub fn forward_subsumption<S: ClauseStore + ?Sized>(set: &S, clause: &Clause) -> bool {
    set.get_subsuming_candidates(clause)
        .iter()
        .any(|candidate| subsumes(candidate, clause))
}

/// Remove every member of `set` that `clause` subsumes; returns them
pub fn backward_subsumption<S: ClauseStore + ?Sized>(
    clause: &Clause,
    set: &mut S,
) -> Vec<Arc<Clause>> {
    let mut removed = Vec::new();
    for candidate in set.get_subsumed_candidates(clause) {
        if std::ptr::eq(candidate.as_ref(), clause) {
            continue;
        }
        if subsumes(clause, &candidate) {
            if let Some(extracted) = set.extract_clause(&candidate) {
                removed.push(extracted);
            }
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clauses::{ClauseSet, IndexedClauseSet};
    use crate::logic::Term;

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
    fn test_general_subsumes_specific() {
        // p(X) subsumes p(a) | q(b), not the other way round
        let general = Clause::new(vec![lit(false, "p", vec![x()])]);
        let specific = Clause::new(vec![
            lit(false, "p", vec![a()]),
            lit(false, "q", vec![Term::constant("b")]),
        ]);
        assert!(subsumes(&general, &specific));
        assert!(!subsumes(&specific, &general));
    }

    #[test]
    fn test_empty_clause_subsumes_everything() {
        let empty = Clause::new(vec![]);
        let clause = Clause::new(vec![lit(false, "p", vec![a()])]);
        assert!(subsumes(&empty, &clause));
        assert!(subsumes(&empty, &empty));
        assert!(!subsumes(&clause, &empty));
    }

    #[test]
    fn test_consistent_substitution_required() {
        // p(X) | q(X) does not subsume p(a) | q(b)
        let subsumer = Clause::new(vec![lit(false, "p", vec![x()]), lit(false, "q", vec![x()])]);
        let target = Clause::new(vec![
            lit(false, "p", vec![a()]),
            lit(false, "q", vec![Term::constant("b")]),
        ]);
        assert!(!subsumes(&subsumer, &target));

        let target = Clause::new(vec![
            lit(false, "q", vec![a()]),
            lit(true, "r", vec![a()]),
            lit(false, "p", vec![a()]),
        ]);
        assert!(subsumes(&subsumer, &target));
    }

    #[test]
    fn test_backtracking_over_literal_choices() {
        // p(X, Y) | p(Y, a) onto p(b, c) | p(c, a): needs the first choice for p(X, Y)
        // p(X, Y) | p(Y, a) onto p(c, a) | p(b, c): first match of p(X, Y) must be retracted
        let subsumer = Clause::new(vec![
            lit(false, "p", vec![x(), Term::var("Y")]),
            lit(false, "p", vec![Term::var("Y"), a()]),
        ]);
        let b = Term::constant("b");
        let c = Term::constant("c");
        let t1 = Clause::new(vec![
            lit(false, "p", vec![b.clone(), c.clone()]),
            lit(false, "p", vec![c.clone(), a()]),
        ]);
        let t2 = Clause::new(vec![
            lit(false, "p", vec![c.clone(), a()]),
            lit(false, "p", vec![b, c]),
        ]);
        assert!(subsumes(&subsumer, &t1));
        assert!(subsumes(&subsumer, &t2));
    }

    #[test]
    fn test_literals_used_once() {
        // p(X) | p(Y) does not subsume p(a)
        let subsumer = Clause::new(vec![lit(false, "p", vec![x()]), lit(false, "p", vec![Term::var("Y")])]);
        let target = Clause::new(vec![lit(false, "p", vec![a()])]);
        assert!(!subsumes(&subsumer, &target));
    }

    #[test]
    fn test_sign_matters() {
        let subsumer = Clause::new(vec![lit(true, "p", vec![x()])]);
        let target = Clause::new(vec![lit(false, "p", vec![a()])]);
        assert!(!subsumes(&subsumer, &target));
    }

    #[test]
    fn test_forward_and_backward_agree_on_plain_and_indexed() {
        let members = vec![
            Arc::new(Clause::new(vec![lit(false, "p", vec![a()]), lit(false, "q", vec![a()])])),
            Arc::new(Clause::new(vec![lit(false, "p", vec![Term::constant("b")])])),
            Arc::new(Clause::new(vec![lit(true, "p", vec![a()])])),
        ];
        let mut plain = ClauseSet::new();
        let mut indexed = IndexedClauseSet::new();
        for m in &members {
            plain.add_clause(m.clone());
            indexed.add_clause(m.clone());
        }

        let general = Clause::new(vec![lit(false, "p", vec![x()])]);
        let specific = Clause::new(vec![
            lit(false, "p", vec![Term::constant("b")]),
            lit(true, "r", vec![a()]),
        ]);

        assert!(!forward_subsumption(&plain, &general));
        assert!(!forward_subsumption(&indexed, &general));
        assert!(forward_subsumption(&plain, &specific));
        assert!(forward_subsumption(&indexed, &specific));

        let removed_plain = backward_subsumption(&general, &mut plain);
        let removed_indexed = backward_subsumption(&general, &mut indexed);
        assert_eq!(removed_plain.len(), 2);
        assert_eq!(removed_indexed.len(), 2);
        assert_eq!(plain.len(), 1);
        assert_eq!(indexed.len(), 1);
        assert!(indexed.contains(&members[2]));
    }
}
