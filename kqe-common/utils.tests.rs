use rstest::rstest;

use super::*;

#[rstest]
#[case(true, &["a", "b", "c"], &["c", "a", "b"])]
#[case(true, &[], &[])]
#[case(false, &["a", "b"], &["a", "b", "c"])]
#[case(false, &["a", "b", "c"], &["a", "b"])]
#[case(false, &["a", "a", "b"], &["a", "b", "c"])]
fn is_equal_test(#[case] expected: bool, #[case] left: &[&str], #[case] right: &[&str]) {
    assert_eq!(expected, is_equal(left, right));
}

#[test]
fn is_sublist_test() {
    assert!(is_sublist(&["default"], &["default", "istio-system"]));
    assert!(is_sublist::<&str>(&[], &["default"]));
    assert!(!is_sublist(&["bookinfo"], &["default", "istio-system"]));
}

#[test]
fn word_in_text_test() {
    let policy = r#"{"loadBalancer":{"simple":"ROUND_ROBIN"},"tls":{"mode":"ISTIO_MUTUAL"}}"#;

    assert!(word_in_text("round_robin", &policy.to_lowercase(), true));
    assert!(word_in_text("least_conn", &policy.to_lowercase(), false));
    assert!(!word_in_text("istio_mutual", &policy.to_lowercase(), false));
}

#[test]
fn truncate_test() {
    assert_eq!("Hello", truncate("Hello world", 5));
    assert_eq!("Hello world", truncate("Hello world", 50));
}
