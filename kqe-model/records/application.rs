use super::Labels;
use crate::{Comparable, Health, is_equal_when_known};

/// Application row of the Applications list.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Application {
    pub name: String,
    pub namespace: String,
    pub istio_sidecar: bool,
    pub labels: Labels,
    pub health: Option<Health>,
}

impl Application {
    /// Creates new [`Application`] instance.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }
}

impl Comparable for Application {
    fn is_equal(&self, other: &Self, advanced_check: bool) -> bool {
        if self.name != other.name || self.namespace != other.namespace {
            return false;
        }

        !advanced_check
            || (self.istio_sidecar == other.istio_sidecar
                && self.labels == other.labels
                && is_equal_when_known(self.health.as_ref(), other.health.as_ref()))
    }
}

/// Workload that belongs to the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct AppWorkload {
    pub name: String,
    pub istio_sidecar: bool,
}

impl AppWorkload {
    /// Creates new [`AppWorkload`] instance.
    pub fn new(name: impl Into<String>, istio_sidecar: bool) -> Self {
        Self {
            name: name.into(),
            istio_sidecar,
        }
    }
}

impl Comparable for AppWorkload {
    fn is_equal(&self, other: &Self, advanced_check: bool) -> bool {
        self.name == other.name && (!advanced_check || self.istio_sidecar == other.istio_sidecar)
    }
}

/// Application details page.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ApplicationDetails {
    pub name: String,
    pub namespace: String,
    pub workloads: Vec<AppWorkload>,
    pub services: Vec<String>,
    pub health: Option<Health>,
}

impl Comparable for ApplicationDetails {
    fn is_equal(&self, other: &Self, advanced_check: bool) -> bool {
        if self.name != other.name || self.namespace != other.namespace {
            return false;
        }

        !advanced_check || is_equal_when_known(self.health.as_ref(), other.health.as_ref())
    }
}
