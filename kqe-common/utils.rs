#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Returns `true` if both slices hold the same items, ignoring their order.
pub fn is_equal<T: PartialEq>(left: &[T], right: &[T]) -> bool {
    left.len() == right.len() && is_sublist(left, right) && is_sublist(right, left)
}

/// Returns `true` if every item of `sub` can be found in `list`.
pub fn is_sublist<T: PartialEq>(sub: &[T], list: &[T]) -> bool {
    sub.iter().all(|item| list.contains(item))
}

/// Returns `true` if presence of `word` in `text` matches `expected`.
pub fn word_in_text(word: &str, text: &str, expected: bool) -> bool {
    text.contains(word) == expected
}

/// Truncates a string slice to the new length.
pub fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
