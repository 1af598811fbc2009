use rstest::rstest;

use super::*;

const UI_TEXT: &str = "apiVersion: networking.istio.io/v1beta1
kind: DestinationRule
metadata:
  name: reviews
  namespace: bookinfo
  resourceVersion: ~
spec:
  host: reviews
  subsets:
  - name: v1
    labels:
      version: v1
";

const REST_TEXT: &str = r#"{
  "apiVersion": "networking.istio.io/v1beta1",
  "kind": "DestinationRule",
  "metadata": {
    "name": "reviews",
    "namespace": "bookinfo",
    "resourceVersion": null
  },
  "spec": {
    "host": "reviews",
    "subsets": [
      {
        "name": "v1",
        "labels": {
          "version": "v1"
        }
      }
    ]
  }
}"#;

const CLUSTER_TEXT: &str = "apiVersion: networking.istio.io/v1
metadata:
  name: reviews
  namespace: bookinfo
spec:
  host: reviews
  subsets:
  - labels:
      version: v1
    name: v1
";

fn pair(key: &str, value: &str) -> TextPair {
    TextPair {
        key: key.to_owned(),
        value: value.to_owned(),
    }
}

#[rstest]
#[case("hosts: - '*'", "hosts: - *")]
#[case("resourceVersion: ~", "resourceVersion: null")]
#[case("selfLink: >- /apis/x", "selfLink: /apis/x")]
#[case("description: > folded", "description: folded")]
#[case("labels: {}", "labels: ")]
fn normalize_ui_test(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(expected, normalize_ui(text));
}

#[test]
fn normalize_rest_test() {
    assert_eq!("host: reviews hosts: *", normalize_rest(r#"{"host": "reviews", "hosts": ["*"]}"#));
}

#[test]
fn normalize_cluster_appends_kind_test() {
    let text = normalize_cluster("hosts:\n  - '*'", IstioConfigObjectType::VirtualService);

    assert!(text.ends_with("kind: VirtualService"));
    assert!(pairs(&text).contains(&pair("hosts:", "*")));
}

#[test]
fn pairs_test() {
    let pairs = pairs("ignored metadata: name: reviews subsets: - name: v1 v2");

    assert_eq!(
        vec![pair("name:", "reviews"), pair("name:", "v1"), pair("name:", "v2")],
        pairs
    );
}

#[test]
fn ui_text_found_in_rest_and_cluster_test() {
    let result = assert_text_contained(UI_TEXT, REST_TEXT, CLUSTER_TEXT, IstioConfigObjectType::DestinationRule);

    assert!(result.is_ok());
}

#[test]
fn changed_value_is_reported_test() {
    let ui = UI_TEXT.replace("host: reviews", "host: ratings");

    let result = assert_text_contained(&ui, REST_TEXT, CLUSTER_TEXT, IstioConfigObjectType::DestinationRule);

    let Err(crate::CheckError::Mismatch(message)) = result else {
        panic!("mismatch expected");
    };
    assert!(message.starts_with("host: ratings not found in REST"));
}

#[test]
fn missing_in_cluster_is_reported_test() {
    let cluster = CLUSTER_TEXT.replace("version: v1", "version: v3");

    let result = assert_text_contained(UI_TEXT, REST_TEXT, &cluster, IstioConfigObjectType::DestinationRule);

    let Err(crate::CheckError::Mismatch(message)) = result else {
        panic!("mismatch expected");
    };
    assert!(message.starts_with("version: v1 not found in cluster"));
}
