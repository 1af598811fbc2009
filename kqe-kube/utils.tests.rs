use k8s_openapi::serde_json::json;
use kube::api::{DynamicObject, ObjectMeta};
use rstest::rstest;

use super::*;

fn labels(pairs: &[(&str, &str)]) -> Labels {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[rstest]
#[case(&[("app", "reviews")], &[("app", "reviews"), ("version", "v1")], true)]
#[case(&[("app", "reviews"), ("version", "v2")], &[("app", "reviews"), ("version", "v1")], false)]
#[case(&[], &[("app", "reviews")], false)]
#[case(&[("app", "reviews")], &[], false)]
fn selects_test(#[case] selector: &[(&str, &str)], #[case] object_labels: &[(&str, &str)], #[case] expected: bool) {
    assert_eq!(expected, selects(&labels(selector), &labels(object_labels)));
}

#[test]
fn serialize_resource_test() {
    let mut object = DynamicObject {
        types: None,
        metadata: ObjectMeta {
            name: Some("reviews".to_owned()),
            namespace: Some("bookinfo".to_owned()),
            ..Default::default()
        },
        data: json!({ "spec": { "host": "reviews" } }),
    };

    let yaml = serialize_resource(&mut object).unwrap();

    assert!(yaml.contains("name: reviews"));
    assert!(yaml.contains("host: reviews"));
    assert!(!yaml.contains("managedFields"));
}

fn api_error(code: u16, reason: &str) -> kube::Error {
    let response = k8s_openapi::serde_json::from_value(json!({
        "status": "Failure",
        "message": format!("request failed with {reason}"),
        "reason": reason,
        "code": code,
    }))
    .unwrap();
    kube::Error::Api(response)
}

#[rstest]
#[case(404, "NotFound", true)]
#[case(403, "Forbidden", false)]
#[case(429, "TooManyRequests", false)]
#[case(500, "InternalError", false)]
fn is_not_served_test(#[case] code: u16, #[case] reason: &str, #[case] expected: bool) {
    assert_eq!(expected, is_not_served(&api_error(code, reason)));
}
