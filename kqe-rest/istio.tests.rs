use kqe_model::{IstioConfigObjectType, IstioConfigValidation};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;

#[rstest]
#[case(json!(null), IstioConfigValidation::NotAvailable)]
#[case(json!({ "valid": true, "checks": [] }), IstioConfigValidation::Valid)]
#[case(json!({ "valid": false, "checks": [{ "message": "No matching workload", "severity": "error" }] }), IstioConfigValidation::NotValid)]
#[case(json!({ "valid": true, "checks": [{ "message": "More than one VS for the host", "severity": "warning" }] }), IstioConfigValidation::Warning)]
fn parse_validation_test(#[case] validation: Value, #[case] expected: IstioConfigValidation) {
    assert_eq!(expected, parse_validation(&validation));
}

#[test]
fn parse_istio_list_test() {
    let response = json!({
        "namespace": { "name": "bookinfo" },
        "gateways": [{ "metadata": { "name": "bookinfo-gateway", "namespace": "bookinfo" } }],
        "virtualServices": { "items": [
            { "metadata": { "name": "bookinfo" } },
            { "metadata": { "name": "reviews" } }
        ] },
        "destinationRules": [],
        "validations": {
            "gateway": { "bookinfo-gateway": { "valid": true, "checks": [] } },
            "virtualservice": {
                "bookinfo": { "valid": true, "checks": [] },
                "reviews": { "valid": false, "checks": [{ "message": "Subset not found", "severity": "error" }] }
            }
        }
    });

    let mut configs = parse_istio_list(&response, "bookinfo");
    configs.sort();

    assert_eq!(3, configs.len());
    assert_eq!("bookinfo", configs[0].name);
    assert_eq!(IstioConfigObjectType::VirtualService, configs[0].object_type);
    assert_eq!(Some(IstioConfigValidation::Valid), configs[0].validation);
    assert_eq!("bookinfo-gateway", configs[1].name);
    assert_eq!(IstioConfigObjectType::Gateway, configs[1].object_type);
    assert_eq!("reviews", configs[2].name);
    assert_eq!(Some(IstioConfigValidation::NotValid), configs[2].validation);
    assert!(configs.iter().all(|c| c.namespace == "bookinfo"));
}

#[test]
fn parse_istio_list_without_validations_test() {
    let response = json!({ "sidecars": [{ "metadata": { "name": "default" } }] });

    let configs = parse_istio_list(&response, "istio-system");

    assert_eq!(1, configs.len());
    assert_eq!("istio-system", configs[0].namespace);
    assert_eq!(Some(IstioConfigValidation::NotAvailable), configs[0].validation);
}

#[test]
fn parse_istio_details_test() {
    let response = json!({
        "destinationRule": {
            "metadata": { "name": "reviews", "namespace": "bookinfo" },
            "spec": { "host": "reviews", "subsets": [{ "name": "v1", "labels": { "version": "v1" } }] }
        },
        "validation": { "valid": true, "checks": [{ "message": "Host not found", "severity": "warning" }] }
    });

    let details = parse_istio_details(&response, "bookinfo", IstioConfigObjectType::DestinationRule, "reviews");

    assert_eq!("reviews", details.name);
    assert_eq!(Some(IstioConfigValidation::Warning), details.validation);
    assert_eq!(vec!["Host not found".to_owned()], details.error_messages);
    assert!(details.text.contains("\"host\": \"reviews\""));
}

#[test]
fn parse_istio_details_missing_object_test() {
    let details = parse_istio_details(&json!({}), "bookinfo", IstioConfigObjectType::Gateway, "missing");

    assert_eq!("missing", details.name);
    assert!(details.text.is_empty());
    assert!(details.error_messages.is_empty());
    assert_eq!(Some(IstioConfigValidation::NotAvailable), details.validation);
}

#[test]
fn parse_virtual_service_test() {
    let object = json!({
        "metadata": { "name": "bookinfo" },
        "spec": { "hosts": ["*"], "gateways": ["bookinfo-gateway"] }
    });

    let vs = parse_virtual_service(&object, "bookinfo");

    assert_eq!("bookinfo", vs.namespace);
    assert_eq!(vec!["*".to_owned()], vs.hosts);
    assert_eq!(vec!["bookinfo-gateway".to_owned()], vs.gateways);
    assert_eq!(None, vs.validation);
}
