use kqe_common::truncate;
use kqe_model::IstioConfigObjectType;
use tracing::debug;

use crate::CheckResult;

#[cfg(test)]
#[path = "./text_diff.tests.rs"]
mod text_diff_tests;

const PUNCTUATION: [char; 7] = ['{', '}', '"', ',', '[', ']', '\\'];
const NULL_VALUE: &str = "null";
const API_VERSION_KEY: &str = "apiVersion:";
const MAX_TEXT_IN_MESSAGE: usize = 200;

/// Single `key: value` pair found in the object text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPair {
    pub key: String,
    pub value: String,
}

/// Normalizes YAML shown in the UI editor.
pub fn normalize_ui(text: &str) -> String {
    strip_punctuation(
        &text
            .replace('\'', "")
            .replace('~', NULL_VALUE)
            .replace("selfLink: >- ", "selfLink: ")
            .replace(": > ", ": "),
    )
}

/// Normalizes JSON returned by the REST API.
pub fn normalize_rest(text: &str) -> String {
    strip_punctuation(&text.replace("\\n", ""))
}

/// Normalizes YAML read from the cluster and appends the object kind to it.
pub fn normalize_cluster(text: &str, object_type: IstioConfigObjectType) -> String {
    let mut text = strip_punctuation(&text.replace('\'', "").replace("\\n", "").replace(" - ", " "));
    text.push_str(" kind: ");
    text.push_str(object_type.text());
    text
}

/// Splits normalized text into `key: value` pairs.\
/// **Note** that tokens before the first key and bare `-` list markers are skipped.
pub fn pairs(text: &str) -> Vec<TextPair> {
    let mut result = Vec::new();
    let mut key: Option<&str> = None;
    for token in text.split_whitespace() {
        if token.ends_with(':') {
            key = Some(token);
        } else if token != "-" {
            if let Some(key) = key {
                result.push(TextPair {
                    key: key.to_owned(),
                    value: token.to_owned(),
                });
            }
        }
    }

    result
}

/// Asserts that every `key: value` pair from the UI text is present in REST and cluster texts.\
/// **Note** that `apiVersion` is not checked against the cluster and UI `null` values always match it.
pub fn assert_text_contained(
    ui_text: &str,
    rest_text: &str,
    cluster_text: &str,
    object_type: IstioConfigObjectType,
) -> CheckResult {
    let ui = pairs(&normalize_ui(ui_text));
    let rest = pairs(&normalize_rest(rest_text));
    let cluster = pairs(&normalize_cluster(cluster_text, object_type));
    debug!(
        "Comparing {} text pairs: {} UI, {} REST, {} cluster",
        object_type,
        ui.len(),
        rest.len(),
        cluster.len()
    );

    for pair in &ui {
        verify!(
            rest.contains(pair),
            "{} {} not found in REST text '{}'",
            pair.key,
            pair.value,
            truncate(rest_text, MAX_TEXT_IN_MESSAGE)
        );

        if pair.key == API_VERSION_KEY || pair.value == NULL_VALUE {
            continue;
        }

        verify!(
            cluster.contains(pair),
            "{} {} not found in cluster text '{}'",
            pair.key,
            pair.value,
            truncate(cluster_text, MAX_TEXT_IN_MESSAGE)
        );
    }

    Ok(())
}

fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}
