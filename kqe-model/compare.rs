/// Record that can be compared with the same record fetched from another source.
pub trait Comparable {
    /// Returns `true` if both records describe the same entity.\
    /// **Note** that `advanced_check` compares all known fields, otherwise only identity fields are compared.
    fn is_equal(&self, other: &Self, advanced_check: bool) -> bool;
}

/// Returns `true` if both values are equal or at least one of them is unknown.
#[inline]
pub fn is_equal_when_known<T: PartialEq>(left: Option<&T>, right: Option<&T>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => left == right,
        _ => true,
    }
}
