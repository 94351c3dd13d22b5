//! Integration tests for the prover, driven through the clause-text reader

use resolute::{
    parse_problem, HeuristicKind, LiteralSelection, Proof, ProofState, ProofStatus,
    SearchParams, SimpleProofState, SzsStatus,
};
use std::collections::HashSet;
use std::time::Duration;

/// Every parent precedes its child, rules have the right arity and the proof
/// ends in the empty clause
fn check_proof(proof: &Proof) {
    let mut seen: HashSet<&str> = HashSet::new();
    for step in &proof.steps {
        for parent in &step.parents {
            assert!(
                seen.contains(parent.as_str()),
                "{} used before it is derived",
                parent
            );
        }
        match step.rule.as_deref() {
            None => assert!(step.parents.is_empty()),
            Some("resolution") => assert_eq!(step.parents.len(), 2, "{:?}", step),
            Some("factor") => assert_eq!(step.parents.len(), 1, "{:?}", step),
            Some(_) => assert!(step.parents.is_empty(), "{:?}", step),
        }
        seen.insert(step.name.as_str());
    }
    let last = proof.steps.last().expect("proof has steps");
    assert_eq!(last.clause, "$false");
}

fn run(text: &str, params: SearchParams) -> (ProofStatus, Option<Proof>) {
    let problem = parse_problem(text).unwrap();
    let mut state = ProofState::new(params, problem.clauses).unwrap();
    state.saturate(None);
    (state.status(), state.proof())
}

fn run_simple(text: &str, params: SearchParams) -> (ProofStatus, Option<Proof>) {
    let problem = parse_problem(text).unwrap();
    let mut state = SimpleProofState::new(params, problem.clauses).unwrap();
    state.saturate(None);
    (state.status(), state.proof())
}

const CHAIN: &str = r#"
% Status : Unsatisfiable
cnf(p_a, axiom, p(a)).
cnf(p_implies_q, axiom, ~p(X) | q(X)).
cnf(q_implies_r, axiom, ~q(Y) | r(Y)).
cnf(not_r_a, negated_conjecture, ~r(a)).
"#;

const FACTORING: &str = r#"
% Status : Unsatisfiable
cnf(both, axiom, p(X) | p(Y)).
cnf(neither, negated_conjecture, ~p(X) | ~p(Y)).
"#;

const SATISFIABLE: &str = r#"
% Status : Satisfiable
cnf(p_a, axiom, p(a)).
cnf(q_b, axiom, q(b)).
cnf(p_or_q, axiom, ~p(X) | q(X)).
"#;

const TAUTOLOGIES: &str = r#"
% Status : Satisfiable
cnf(c1, axiom, p(X) | q(a)).
cnf(c2, axiom, p(X) | ~p(X)).
cnf(c3, axiom, ~p(a)).
"#;

#[test]
fn test_simple_resolution() {
    let (status, proof) = run(CHAIN, SearchParams::default());
    assert_eq!(status, ProofStatus::ProofFound);
    let proof = proof.unwrap();
    check_proof(&proof);
    assert!(proof.count_rule("resolution") >= 3);
}

#[test]
fn test_factoring_is_needed() {
    // Without factoring only two-literal resolvents exist
    let (status, proof) = run(
        FACTORING,
        SearchParams {
            max_iterations: Some(200),
            ..SearchParams::default().with_redundancy_elimination()
        },
    );
    assert_eq!(status, ProofStatus::ProofFound);
    let proof = proof.unwrap();
    check_proof(&proof);
    assert!(proof.count_rule("factor") >= 1);
}

#[test]
fn test_satisfiable_problem_saturates() {
    let (status, proof) = run(SATISFIABLE, SearchParams::default());
    assert_eq!(status, ProofStatus::Saturated);
    assert!(proof.is_none());
}

#[test]
fn test_tautology_deletion_makes_search_finite() {
    let params = SearchParams {
        delete_tautologies: true,
        ..SearchParams::default()
    };
    assert_eq!(run(TAUTOLOGIES, params).0, ProofStatus::Saturated);
}

#[test]
fn test_results_agree_with_header_status() {
    let params = SearchParams {
        max_iterations: Some(500),
        ..SearchParams::default().with_redundancy_elimination()
    };
    for text in [CHAIN, FACTORING, SATISFIABLE, TAUTOLOGIES] {
        let expected = parse_problem(text).unwrap().status.unwrap();
        for heuristics in HeuristicKind::ALL {
            let params = SearchParams {
                heuristics,
                ..params.clone()
            };
            let (status, _) = run(text, params);
            assert!(
                expected.agrees_with(status.szs_status()),
                "{} found {} for\n{}",
                heuristics,
                status,
                text
            );
            assert_ne!(status, ProofStatus::GaveUp, "{}\n{}", heuristics, text);
        }
    }
}

#[test]
fn test_every_literal_selection_finds_the_chain_proof() {
    for selection in LiteralSelection::ALL {
        let params = SearchParams {
            literal_selection: Some(selection),
            ..SearchParams::default()
        };
        let (status, proof) = run(CHAIN, params);
        assert_eq!(status, ProofStatus::ProofFound, "{}", selection);
        check_proof(&proof.unwrap());
    }
}

#[test]
fn test_simple_loop_matches_full_loop() {
    let (status, proof) = run_simple(CHAIN, SearchParams::default());
    assert_eq!(status, ProofStatus::ProofFound);
    check_proof(&proof.unwrap());

    let (status, _) = run_simple(SATISFIABLE, SearchParams::default());
    assert_eq!(status, ProofStatus::Saturated);
}

#[test]
fn test_equality_axioms() {
    let text = r#"
        cnf(ab, axiom, a = b).
        cnf(bc, axiom, b = c).
        cnf(goal, negated_conjecture, a != c).
    "#;
    let mut problem = parse_problem(text).unwrap();
    assert_eq!(problem.clauses.add_eq_axioms().unwrap(), 3);

    let params = SearchParams {
        max_iterations: Some(5000),
        timeout: Some(Duration::from_secs(30)),
        ..SearchParams::default().with_redundancy_elimination()
    };
    let mut state = ProofState::new(params, problem.clauses).unwrap();
    assert!(state.saturate(None).is_some());
    let proof = state.proof().unwrap();
    check_proof(&proof);
    assert!(proof.steps.iter().any(|s| s.name == "eq_trans"));
}

#[test]
fn test_equality_needs_axioms() {
    let text = "cnf(irreflexive, negated_conjecture, a != a).";
    let (status, _) = run(text, SearchParams::default());
    assert_eq!(status, ProofStatus::Saturated);

    let mut problem = parse_problem(text).unwrap();
    problem.clauses.add_eq_axioms().unwrap();
    let mut state = ProofState::new(SearchParams::default(), problem.clauses).unwrap();
    assert!(state.saturate(None).is_some());
}

#[test]
fn test_compatibility_axioms() {
    let text = r#"
        cnf(ab, axiom, a = b).
        cnf(pa, axiom, p(f(a))).
        cnf(goal, negated_conjecture, ~p(f(b))).
    "#;
    let mut problem = parse_problem(text).unwrap();
    // refl, sym, trans, f, p
    assert_eq!(problem.clauses.add_eq_axioms().unwrap(), 5);
    let params = SearchParams {
        max_iterations: Some(5000),
        timeout: Some(Duration::from_secs(30)),
        ..SearchParams::default().with_redundancy_elimination()
    };
    let mut state = ProofState::new(params, problem.clauses).unwrap();
    assert!(state.saturate(None).is_some());
    check_proof(&state.proof().unwrap());
}

#[test]
fn test_timeout_gives_up() {
    let params = SearchParams {
        timeout: Some(Duration::ZERO),
        ..SearchParams::default()
    };
    let (status, proof) = run(CHAIN, params);
    assert_eq!(status, ProofStatus::GaveUp);
    assert!(proof.is_none());
    assert_eq!(status.szs_status(), SzsStatus::GaveUp);
}

#[test]
fn test_proof_json() {
    let (_, proof) = run(CHAIN, SearchParams::default());
    let json = proof.unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let steps = value["steps"].as_array().unwrap();
    assert_eq!(steps.last().unwrap()["clause"], "$false");
    assert!(steps.iter().any(|s| s["name"] == "not_r_a"));
}

#[test]
fn test_malformed_input_is_rejected() {
    assert!(parse_problem("cnf(a, axiom, p(a).").is_err());
    let problem = parse_problem("cnf(a, axiom, p(a)).\ncnf(b, axiom, ~p(a, b)).").unwrap();
    assert!(ProofState::new(SearchParams::default(), problem.clauses).is_err());
}
