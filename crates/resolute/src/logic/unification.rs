//! Unification and one-way matching

use super::backtrack::BtSubstitution;
use super::substitution::{apply_binding, Substitution};
use super::term::Term;

/// Compute a most general unifier of two terms
///
/// Works on a list of pending equations. Binding a variable rewrites the
/// remaining equations and composes the binding into the result, so the
/// returned substitution is idempotent whenever it is acyclic.
///
/// There is no occurs check: `X` unifies with `f(X)` and yields the cyclic
/// binding `X <- f(X)`. Such a unifier does not make the two sides equal, and
/// resolution steps built on it are unsound. A variable that already carries a
/// binding is never rebound; any further non-trivial equation on it fails.
/// This keeps the procedure terminating and symmetric in its arguments.
pub fn mgu(s: &Term, t: &Term) -> Option<Substitution> {
    let mut subst = Substitution::new();
    let mut pending: Vec<(Term, Term)> = vec![(s.clone(), t.clone())];

    while let Some((left, right)) = pending.pop() {
        if left == right {
            continue;
        }
        if is_bound_var(&left, &subst) || is_bound_var(&right, &subst) {
            return None;
        }
        match (left, right) {
            (Term::Variable(var), term) | (term, Term::Variable(var)) => {
                for (l, r) in pending.iter_mut() {
                    if l.occurs(&var) {
                        *l = apply_binding(l, &var, &term);
                    }
                    if r.occurs(&var) {
                        *r = apply_binding(r, &var, &term);
                    }
                }
                subst.compose_binding(&var, term);
            }
            (Term::Compound(f, fargs), Term::Compound(g, gargs)) => {
                if f != g || fargs.len() != gargs.len() {
                    return None;
                }
                // Reversed so the leftmost argument pair is solved first
                pending.extend(fargs.into_iter().zip(gargs).rev());
            }
        }
    }

    Some(subst)
}

fn is_bound_var(term: &Term, subst: &Substitution) -> bool {
    matches!(term, Term::Variable(v) if subst.is_bound(v))
}

/// Match `pattern` onto `target`, extending `subst`
///
/// Only pattern variables are bound; variables in `target` behave like
/// constants. Bindings already in `subst` are respected. On failure every
/// binding added by this call is undone. Uses an explicit work stack.
pub fn match_term(pattern: &Term, target: &Term, subst: &mut BtSubstitution) -> bool {
    let state = subst.mark();
    let mut stack: Vec<(&Term, &Term)> = vec![(pattern, target)];

    while let Some((p, t)) = stack.pop() {
        let ok = match p {
            Term::Variable(v) => match subst.get(v) {
                Some(bound) => bound == t,
                None => {
                    subst.add_binding(v, t.clone());
                    true
                }
            },
            Term::Compound(f, pargs) => match t {
                Term::Compound(g, targs) if f == g && pargs.len() == targs.len() => {
                    stack.extend(pargs.iter().zip(targs.iter()).rev());
                    true
                }
                _ => false,
            },
        };
        if !ok {
            subst.undo_to(state);
            return false;
        }
    }

    true
}

/// Recursive formulation of [`match_term`] with the same contract
pub fn match_term_rec(pattern: &Term, target: &Term, subst: &mut BtSubstitution) -> bool {
    let state = subst.mark();
    if match_inner(pattern, target, subst) {
        true
    } else {
        subst.undo_to(state);
        false
    }
}

fn match_inner(pattern: &Term, target: &Term, subst: &mut BtSubstitution) -> bool {
    match (pattern, target) {
        (Term::Variable(v), t) => match subst.get(v) {
            Some(bound) => bound == t,
            None => {
                subst.add_binding(v, t.clone());
                true
            }
        },
        (Term::Compound(f, pargs), Term::Compound(g, targs)) => {
            f == g
                && pargs.len() == targs.len()
                && pargs
                    .iter()
                    .zip(targs.iter())
                    .all(|(p, t)| match_inner(p, t, subst))
        }
        (Term::Compound(..), Term::Variable(_)) => false,
    }
}
