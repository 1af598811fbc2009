use super::Labels;
use crate::{Comparable, Health, is_equal_when_known};

/// Workload row of the Workloads list.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Workload {
    pub name: String,
    pub namespace: String,
    pub workload_type: String,
    pub istio_sidecar: bool,
    pub app_label: bool,
    pub version_label: bool,
    pub labels: Labels,
    pub health: Option<Health>,
}

impl Workload {
    /// Creates new [`Workload`] instance.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, workload_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            workload_type: workload_type.into(),
            ..Default::default()
        }
    }

    /// Sets labels and derives `app` / `version` label flags from them.
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.app_label = labels.contains_key("app");
        self.version_label = labels.contains_key("version");
        self.labels = labels;
        self
    }
}

impl Comparable for Workload {
    fn is_equal(&self, other: &Self, advanced_check: bool) -> bool {
        if self.name != other.name || self.namespace != other.namespace || self.workload_type != other.workload_type {
            return false;
        }

        !advanced_check
            || (self.istio_sidecar == other.istio_sidecar
                && self.app_label == other.app_label
                && self.version_label == other.version_label
                && self.labels == other.labels
                && is_equal_when_known(self.health.as_ref(), other.health.as_ref()))
    }
}

/// Pod of the workload.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pod {
    pub name: String,
    pub status: Option<String>,
    pub istio_sidecar: bool,
    pub labels: Labels,
    pub created_by: Vec<String>,
}

impl Comparable for Pod {
    fn is_equal(&self, other: &Self, advanced_check: bool) -> bool {
        if self.name != other.name {
            return false;
        }

        !advanced_check
            || (self.istio_sidecar == other.istio_sidecar
                && self.labels == other.labels
                && is_equal_when_known(self.status.as_ref(), other.status.as_ref()))
    }
}

/// Service that selects pods of the workload.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkloadService {
    pub name: String,
    pub namespace: String,
    pub labels: Labels,
    pub ip: Option<String>,
}

impl Comparable for WorkloadService {
    fn is_equal(&self, other: &Self, advanced_check: bool) -> bool {
        if self.name != other.name || self.namespace != other.namespace {
            return false;
        }

        !advanced_check || (self.labels == other.labels && is_equal_when_known(self.ip.as_ref(), other.ip.as_ref()))
    }
}

/// Workload details page.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkloadDetails {
    pub name: String,
    pub namespace: String,
    pub workload_type: String,
    pub istio_sidecar: bool,
    pub labels: Labels,
    pub health: Option<Health>,
    pub pods: Vec<Pod>,
    pub services: Vec<WorkloadService>,
}

impl WorkloadDetails {
    /// Returns number of pods of the workload.
    #[inline]
    pub fn pods_number(&self) -> usize {
        self.pods.len()
    }

    /// Returns number of services of the workload.
    #[inline]
    pub fn services_number(&self) -> usize {
        self.services.len()
    }
}

impl Comparable for WorkloadDetails {
    fn is_equal(&self, other: &Self, advanced_check: bool) -> bool {
        if self.name != other.name || self.namespace != other.namespace || self.workload_type != other.workload_type {
            return false;
        }

        !advanced_check
            || (self.istio_sidecar == other.istio_sidecar
                && self.labels == other.labels
                && is_equal_when_known(self.health.as_ref(), other.health.as_ref()))
    }
}
