use rstest::rstest;

use super::*;
use crate::{Comparable, Health, IstioConfigObjectType, IstioConfigValidation, OverviewPageType};

fn labels(pairs: &[(&str, &str)]) -> Labels {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn application_basic_ignores_sidecar_test() {
    let ui = Application {
        istio_sidecar: true,
        ..Application::new("reviews", "bookinfo")
    };
    let cluster = Application::new("reviews", "bookinfo");

    assert!(ui.is_equal(&cluster, false));
    assert!(!ui.is_equal(&cluster, true));
    assert!(!ui.is_equal(&Application::new("reviews", "bookinfo2"), false));
}

#[test]
fn unknown_health_is_not_compared_test() {
    let ui = Application {
        health: Some(Health::Healthy),
        ..Application::new("details", "bookinfo")
    };
    let rest = Application::new("details", "bookinfo");
    let degraded = Application {
        health: Some(Health::Degraded),
        ..Application::new("details", "bookinfo")
    };

    assert!(ui.is_equal(&rest, true));
    assert!(!ui.is_equal(&degraded, true));
}

#[rstest]
#[case(true, true, "Deployment", &[("app", "reviews")])]
#[case(true, false, "Deployment", &[("app", "reviews"), ("version", "v2")])]
#[case(false, false, "StatefulSet", &[("app", "reviews")])]
fn workload_is_equal_test(
    #[case] expected: bool,
    #[case] advanced_check: bool,
    #[case] workload_type: &str,
    #[case] other_labels: &[(&str, &str)],
) {
    let ui = Workload::new("reviews-v1", "bookinfo", "Deployment").with_labels(labels(&[("app", "reviews")]));
    let other = Workload::new("reviews-v1", "bookinfo", workload_type).with_labels(labels(other_labels));

    assert_eq!(expected, ui.is_equal(&other, advanced_check));
}

#[test]
fn workload_label_flags_test() {
    let workload = Workload::new("ratings-v1", "bookinfo", "Deployment").with_labels(labels(&[("app", "ratings")]));

    assert!(workload.app_label);
    assert!(!workload.version_label);
}

#[test]
fn istio_config_type_is_identity_test() {
    let vs = IstioConfig::new("reviews", "bookinfo", IstioConfigObjectType::VirtualService);
    let dr = IstioConfig::new("reviews", "bookinfo", IstioConfigObjectType::DestinationRule);
    let valid = IstioConfig {
        validation: Some(IstioConfigValidation::Valid),
        ..vs.clone()
    };
    let not_valid = IstioConfig {
        validation: Some(IstioConfigValidation::NotValid),
        ..vs.clone()
    };

    assert!(!vs.is_equal(&dr, false));
    assert!(vs.is_equal(&valid, true));
    assert!(!valid.is_equal(&not_valid, true));
    assert!(valid.is_equal(&not_valid, false));
}

#[test]
fn overview_counters_only_in_advanced_test() {
    let ui = Overview::new(OverviewPageType::Apps, "bookinfo", 4);
    let rest = Overview {
        healthy: 4,
        ..Overview::new(OverviewPageType::Apps, "bookinfo", 4)
    };

    assert!(ui.is_equal(&rest, false));
    assert!(!ui.is_equal(&rest, true));
    assert!(!ui.is_equal(&Overview::new(OverviewPageType::Services, "bookinfo", 4), false));
}

#[test]
fn service_details_counters_test() {
    let details = ServiceDetails {
        name: "reviews".to_owned(),
        namespace: "bookinfo".to_owned(),
        workloads: vec![ServiceWorkload::default(), ServiceWorkload::default()],
        virtual_services: vec![VirtualService::default()],
        ..Default::default()
    }
    .with_counters();

    assert_eq!(2, details.workloads_number);
    assert_eq!(1, details.virtual_services_number);
    assert_eq!(0, details.destination_rules_number);
}
