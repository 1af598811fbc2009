use kqe_model::{Application, Health, IstioConfig, IstioConfigObjectType, IstioConfigValidation};
use rstest::rstest;

use super::*;

fn app(name: &str, sidecar: bool) -> Application {
    Application {
        istio_sidecar: sidecar,
        ..Application::new(name, "bookinfo")
    }
}

#[test]
fn compare_all_accepts_extra_cluster_records_test() {
    let ui = vec![app("reviews", true), app("details", true)];
    let rest = vec![app("details", true), app("reviews", true)];
    let cluster = vec![app("reviews", false), app("details", false), app("mongodb", false)];

    assert!(compare_all("Applications", &ui, &rest, &cluster, Cardinality::AtLeast).is_ok());
}

#[rstest]
#[case(Cardinality::AtLeast, true)]
#[case(Cardinality::Exact, false)]
fn cardinality_test(#[case] cardinality: Cardinality, #[case] expected: bool) {
    let ui = vec![app("reviews", true)];
    let cluster = vec![app("reviews", false), app("ratings", false)];

    let report = match_all(&ui, &ui, &cluster, cardinality);

    assert_eq!(expected, report.counts_match());
    assert_eq!(expected, report.is_ok());
}

#[test]
fn compare_all_reports_count_mismatch_test() {
    let ui = vec![app("reviews", true), app("details", true)];
    let rest = vec![app("reviews", true)];

    let result = compare_all("Applications", &ui, &rest, &rest, Cardinality::AtLeast);

    match result {
        Err(CheckError::Mismatch(message)) => assert!(message.contains("UI shows 2 items but REST returns 1")),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn advanced_check_against_rest_basic_against_cluster_test() {
    let ui = vec![app("reviews", true)];
    let rest = vec![app("reviews", false)];

    let report = match_all(&ui, &rest, &rest, Cardinality::AtLeast);

    assert_eq!(vec![app("reviews", true)], report.missing_in_rest);
    assert!(report.missing_in_cluster.is_empty());
    assert!(!report.is_ok());

    let Err(CheckError::Mismatch(message)) = report.into_result("Applications") else {
        panic!("mismatch expected");
    };
    assert!(message.contains("not found in REST"));
}

#[test]
fn report_keeps_all_unmatched_records_test() {
    let ui = vec![app("reviews", true), app("ratings", true), app("details", true)];
    let rest = vec![app("details", true), app("foo", true), app("bar", true)];

    let report = match_all(&ui, &rest, &rest, Cardinality::AtLeast);

    assert_eq!(2, report.missing_in_rest.len());
    assert_eq!(2, report.missing_in_cluster.len());
    assert_eq!("bar", report.rest[0].name);
}

#[test]
fn unknown_health_matches_test() {
    let ui = vec![Application {
        health: Some(Health::Healthy),
        ..app("reviews", true)
    }];
    let rest = vec![app("reviews", true)];

    assert!(compare_two("Applications", &ui, &rest, true).is_ok());
}

#[test]
fn ensure_all_found_test() {
    let vs = IstioConfig {
        validation: Some(IstioConfigValidation::Valid),
        ..IstioConfig::new("reviews", "bookinfo", IstioConfigObjectType::VirtualService)
    };
    let not_valid = IstioConfig {
        validation: Some(IstioConfigValidation::NotValid),
        ..vs.clone()
    };

    assert!(ensure_all_found("Istio Config", "cluster", &[vs.clone()], &[not_valid.clone()], false).is_ok());
    assert!(
        ensure_all_found("Istio Config", "REST", &[vs], &[not_valid], true)
            .is_err_and(|e| e.is_mismatch())
    );
}

#[test]
fn find_match_first_candidate_wins_test() {
    let candidates = vec![app("reviews", false), app("reviews", true)];

    let found = find_match(&app("reviews", true), &candidates, false);

    assert_eq!(Some(&app("reviews", false)), found);
}
