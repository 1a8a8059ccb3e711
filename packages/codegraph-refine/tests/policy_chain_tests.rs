//! Integration tests for FieldRefinePolicyChain
//!
//! The chain must be observably identical to right-nested delegating policies.

mod common;

use codegraph_refine::{AutomatonState, FieldRefinePolicy, FieldRefinePolicyChain, RefineError};
use common::*;
use pretty_assertions::assert_eq;

fn chain_of(outcomes: &[(&'static str, Outcome)], log: &CallLog) -> FieldRefinePolicyChain {
    FieldRefinePolicyChain::new(
        outcomes
            .iter()
            .map(|&(name, outcome)| answering(name, outcome, log))
            .collect(),
    )
    .unwrap()
}

#[test]
fn three_policies_true_first_skips_rest() {
    let log = CallLog::new();
    let mut chain = chain_of(
        &[("A", Outcome::Yes), ("B", Outcome::Fault), ("C", Outcome::Fault)],
        &log,
    );

    assert!(Query::sample().ask(&mut chain).unwrap());
    assert_eq!(log.should_refine_count("B"), 0);
    assert_eq!(log.should_refine_count("C"), 0);
}

#[test]
fn three_policies_stop_at_first_yes() {
    let log = CallLog::new();
    let mut chain = chain_of(
        &[("A", Outcome::No), ("B", Outcome::Yes), ("C", Outcome::Fault)],
        &log,
    );

    assert!(Query::sample().ask(&mut chain).unwrap());
    assert_eq!(log.order(), ["A", "B"]);
}

#[test]
fn three_policies_all_decline() {
    let log = CallLog::new();
    let mut chain = chain_of(
        &[("A", Outcome::No), ("B", Outcome::No), ("C", Outcome::No)],
        &log,
    );

    assert!(!Query::sample().ask(&mut chain).unwrap());
    assert_eq!(log.order(), ["A", "B", "C"]);
}

#[test]
fn next_pass_visits_every_member_in_order() {
    let log = CallLog::new();
    let mut chain = chain_of(
        &[("A", Outcome::Yes), ("B", Outcome::No), ("C", Outcome::No)],
        &log,
    );

    assert!(chain.next_pass().unwrap());
    assert_eq!(
        log.calls(),
        vec![Call::NextPass("A"), Call::NextPass("B"), Call::NextPass("C")]
    );
}

#[test]
fn next_pass_fault_stops_remaining_members() {
    let log = CallLog::new();
    let mut chain = chain_of(
        &[("A", Outcome::No), ("B", Outcome::Fault), ("C", Outcome::Yes)],
        &log,
    );

    let err = chain.next_pass().unwrap_err();
    assert!(matches!(err, RefineError::Delegate { ref policy, .. } if policy == "B"));
    assert_eq!(log.order(), ["A", "B"]);
}

#[test]
fn nested_form_matches_chain_call_for_call() {
    let scenarios: [[Outcome; 3]; 4] = [
        [Outcome::Yes, Outcome::Yes, Outcome::Yes],
        [Outcome::No, Outcome::Yes, Outcome::Fault],
        [Outcome::No, Outcome::No, Outcome::Yes],
        [Outcome::No, Outcome::Fault, Outcome::Yes],
    ];

    for outcomes in scenarios {
        let named = [("A", outcomes[0]), ("B", outcomes[1]), ("C", outcomes[2])];

        let chain_log = CallLog::new();
        let mut chain = chain_of(&named, &chain_log);
        let chain_refine = Query::sample().ask(&mut chain).ok();
        let chain_pass = chain.next_pass().ok();

        let nested_log = CallLog::new();
        let nested = chain_of(&named, &nested_log).into_nested().unwrap();
        let nested_refine = Query::sample().ask(&mut *nested.lock()).ok();
        let nested_pass = nested.lock().next_pass().ok();

        assert_eq!(chain_refine, nested_refine, "{:?}", outcomes);
        assert_eq!(chain_pass, nested_pass, "{:?}", outcomes);
        assert_eq!(chain_log.calls(), nested_log.calls(), "{:?}", outcomes);
    }
}

#[test]
fn single_member_chain_behaves_as_member() {
    let log = CallLog::new();
    let mut chain = chain_of(&[("A", Outcome::No)], &log);

    assert!(!Query::sample().ask(&mut chain).unwrap());
    assert!(!chain.next_pass().unwrap());
    assert_eq!(log.order(), ["A", "A"]);
}

#[test]
fn missing_member_fails_before_any_call() {
    let log = CallLog::new();
    let result = FieldRefinePolicyChain::try_from_options(vec![
        Some(answering("A", Outcome::Yes, &log)),
        None,
        Some(answering("C", Outcome::Yes, &log)),
    ]);

    assert!(matches!(result, Err(RefineError::MissingDelegate { .. })));
    assert!(log.is_empty());
}

#[test]
fn nested_form_keeps_member_order() {
    let log = CallLog::new();
    let nested = chain_of(
        &[
            ("A", Outcome::No),
            ("B", Outcome::No),
            ("C", Outcome::No),
            ("D", Outcome::Yes),
        ],
        &log,
    )
    .into_nested()
    .unwrap();

    assert!(Query::sample().ask(&mut *nested.lock()).unwrap());
    assert!(nested.lock().next_pass().unwrap());
    assert_eq!(log.order(), ["A", "B", "C", "D", "A", "B", "C", "D"]);
}

#[test]
fn every_member_sees_the_callers_state() {
    let log = CallLog::new();
    let mut chain = chain_of(&[("A", Outcome::No), ("B", Outcome::No)], &log);
    let query = Query {
        state: AutomatonState::new(42),
        ..Query::sample()
    };

    assert!(!query.ask(&mut chain).unwrap());
    assert_eq!(
        log.calls(),
        vec![
            Call::ShouldRefine("A", query.clone()),
            Call::ShouldRefine("B", query.clone()),
        ]
    );
}
