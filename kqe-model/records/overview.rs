use crate::{Comparable, OverviewPageType};

/// Namespace summary shown on the Overview page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Overview {
    pub overview_type: OverviewPageType,
    pub namespace: String,
    pub items: usize,
    pub healthy: usize,
    pub degraded: usize,
    pub failure: usize,
    pub na: usize,
}

impl Overview {
    /// Creates new [`Overview`] instance with no health counters.
    pub fn new(overview_type: OverviewPageType, namespace: impl Into<String>, items: usize) -> Self {
        Self {
            overview_type,
            namespace: namespace.into(),
            items,
            healthy: 0,
            degraded: 0,
            failure: 0,
            na: 0,
        }
    }
}

impl Comparable for Overview {
    fn is_equal(&self, other: &Self, advanced_check: bool) -> bool {
        if self.overview_type != other.overview_type || self.namespace != other.namespace || self.items != other.items {
            return false;
        }

        !advanced_check
            || (self.healthy == other.healthy
                && self.degraded == other.degraded
                && self.failure == other.failure
                && self.na == other.na)
    }
}
