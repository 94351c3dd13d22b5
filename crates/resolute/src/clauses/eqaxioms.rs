//! Equality axioms for problems that use `=` as an ordinary predicate

use crate::inference::derivation::Derivation;
use crate::logic::{Clause, ClauseType, Literal, Signature, Term, EQUALITY};

fn axiom(name: String, literals: Vec<Literal>) -> Clause {
    Clause::named(name, ClauseType::Axiom, literals).with_derivation(Derivation::introduced("eq_axiom"))
}

fn vars(prefix: &str, n: usize) -> Vec<Term> {
    (1..=n).map(|i| Term::var(format!("{}{}", prefix, i))).collect()
}

/// `X1!=Y1 | ... | Xn!=Yn`
fn pairwise_disequations(xs: &[Term], ys: &[Term]) -> Vec<Literal> {
    xs.iter()
        .zip(ys)
        .map(|(x, y)| Literal::disequation(x.clone(), y.clone()))
        .collect()
}

/// Reflexivity, symmetry and transitivity of `=`
pub fn equivalence_axioms() -> Vec<Clause> {
    let (x, y, z) = (Term::var("X"), Term::var("Y"), Term::var("Z"));
    vec![
        axiom("eq_refl".into(), vec![Literal::equation(x.clone(), x.clone())]),
        axiom(
            "eq_sym".into(),
            vec![
                Literal::disequation(x.clone(), y.clone()),
                Literal::equation(y.clone(), x.clone()),
            ],
        ),
        axiom(
            "eq_trans".into(),
            vec![
                Literal::disequation(x.clone(), y.clone()),
                Literal::disequation(y, z.clone()),
                Literal::equation(x, z),
            ],
        ),
    ]
}

/// Substitution axioms for every function and predicate of positive arity
pub fn compatibility_axioms(sig: &Signature) -> Vec<Clause> {
    let mut axioms = Vec::new();

    for (f, arity) in sig.functions().filter(|(_, a)| *a > 0) {
        let xs = vars("X", arity);
        let ys = vars("Y", arity);
        let mut literals = pairwise_disequations(&xs, &ys);
        literals.push(Literal::equation(Term::app(f, xs), Term::app(f, ys)));
        axioms.push(axiom(format!("eq_fun_{}", f), literals));
    }

    for (p, arity) in sig
        .predicates()
        .filter(|(name, a)| *name != EQUALITY && *a > 0)
    {
        let xs = vars("X", arity);
        let ys = vars("Y", arity);
        let mut literals = pairwise_disequations(&xs, &ys);
        literals.push(Literal::negative(Term::app(p, xs)));
        literals.push(Literal::positive(Term::app(p, ys)));
        axioms.push(axiom(format!("eq_pred_{}", p), literals));
    }

    axioms
}

pub fn generate_equality_axioms(sig: &Signature) -> Vec<Clause> {
    let mut axioms = equivalence_axioms();
    axioms.extend(compatibility_axioms(sig));
    axioms
}
