use k8s_openapi::serde_json::json;
use kqe_model::IstioConfigObjectType;
use kube::api::{DynamicObject, ObjectMeta};
use rstest::rstest;

use super::*;

fn object(name: &str, spec: Value) -> DynamicObject {
    DynamicObject {
        types: None,
        metadata: ObjectMeta {
            name: Some(name.to_owned()),
            namespace: Some("bookinfo".to_owned()),
            ..Default::default()
        },
        data: json!({ "spec": spec }),
    }
}

#[rstest]
#[case(IstioConfigObjectType::VirtualService, "networking.istio.io", "virtualservices")]
#[case(IstioConfigObjectType::PeerAuthentication, "security.istio.io", "peerauthentications")]
#[case(IstioConfigObjectType::Rule, "config.istio.io", "rules")]
fn get_istio_resource_test(
    #[case] object_type: IstioConfigObjectType,
    #[case] group: &str,
    #[case] plural: &str,
) {
    let ar = get_istio_resource(object_type);

    assert_eq!(group, ar.group);
    assert_eq!(plural, ar.plural);
    assert_eq!(object_type.text(), ar.kind);
    assert_eq!(format!("{group}/{}", api_version(object_type)), ar.api_version);
}

#[rstest]
#[case("reviews", true)]
#[case("reviews.bookinfo.svc.cluster.local", true)]
#[case("reviews.bookinfo", true)]
#[case("reviews.bookinfo.svc", true)]
#[case("reviews.bookinfo2.svc.cluster.local", false)]
#[case("reviews.bookinfo2", false)]
#[case("ratings", false)]
fn is_service_host_test(#[case] host: &str, #[case] expected: bool) {
    assert_eq!(expected, is_service_host(host, "reviews", "bookinfo"));
}

#[test]
fn virtual_service_targets_route_destination_test() {
    let vs = object(
        "bookinfo",
        json!({
            "hosts": ["*"],
            "gateways": ["bookinfo-gateway"],
            "http": [{ "route": [{ "destination": { "host": "productpage", "port": { "number": 9080 } } }] }]
        }),
    );

    assert!(virtual_service_targets(&vs, "productpage", "bookinfo"));
    assert!(!virtual_service_targets(&vs, "reviews", "bookinfo"));

    let record = virtual_service(&vs);
    assert_eq!(vec!["*".to_owned()], record.hosts);
    assert_eq!("bookinfo", record.namespace);
}

#[test]
fn destination_rule_test() {
    let dr = object(
        "reviews",
        json!({
            "host": "reviews",
            "trafficPolicy": { "loadBalancer": { "simple": "LEAST_CONN" } },
            "subsets": [{ "name": "v1" }, { "name": "v3" }]
        }),
    );

    let record = destination_rule(&dr);

    assert!(destination_rule_targets(&dr, "reviews", "bookinfo"));
    assert_eq!(vec!["v1".to_owned(), "v3".to_owned()], record.subsets);
    assert!(record.traffic_policy.contains("LEAST_CONN"));
    assert!(!record.traffic_policy.contains("ISTIO_MUTUAL"));
}
