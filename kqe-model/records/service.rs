use super::Labels;
use crate::{Comparable, Health, IstioConfigValidation, is_equal_when_known};

/// Service row of the Services list.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Service {
    pub name: String,
    pub namespace: String,
    pub istio_sidecar: bool,
    pub labels: Labels,
    pub health: Option<Health>,
}

impl Service {
    /// Creates new [`Service`] instance.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }
}

impl Comparable for Service {
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

/// Workload that is selected by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ServiceWorkload {
    pub name: String,
    pub workload_type: String,
    pub labels: Labels,
}

impl Comparable for ServiceWorkload {
    fn is_equal(&self, other: &Self, advanced_check: bool) -> bool {
        self.name == other.name
            && (!advanced_check || (self.workload_type == other.workload_type && self.labels == other.labels))
    }
}

/// Virtual service that routes traffic to the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct VirtualService {
    pub name: String,
    pub namespace: String,
    pub hosts: Vec<String>,
    pub gateways: Vec<String>,
    pub validation: Option<IstioConfigValidation>,
}

impl Comparable for VirtualService {
    fn is_equal(&self, other: &Self, advanced_check: bool) -> bool {
        if self.name != other.name {
            return false;
        }

        !advanced_check
            || (self.hosts == other.hosts
                && self.gateways == other.gateways
                && is_equal_when_known(self.validation.as_ref(), other.validation.as_ref()))
    }
}

/// Destination rule that applies to the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct DestinationRule {
    pub name: String,
    pub namespace: String,
    pub host: String,
    pub traffic_policy: String,
    pub subsets: Vec<String>,
    pub validation: Option<IstioConfigValidation>,
}

impl Comparable for DestinationRule {
    fn is_equal(&self, other: &Self, advanced_check: bool) -> bool {
        if self.name != other.name {
            return false;
        }

        !advanced_check
            || (self.host == other.host
                && self.subsets == other.subsets
                && is_equal_when_known(self.validation.as_ref(), other.validation.as_ref()))
    }
}

/// Service details page.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ServiceDetails {
    pub name: String,
    pub namespace: String,
    pub istio_sidecar: bool,
    pub labels: Labels,
    pub ip: Option<String>,
    pub ports: Vec<String>,
    pub health: Option<Health>,
    pub workloads_number: usize,
    pub virtual_services_number: usize,
    pub destination_rules_number: usize,
    pub workloads: Vec<ServiceWorkload>,
    pub virtual_services: Vec<VirtualService>,
    pub destination_rules: Vec<DestinationRule>,
}

impl ServiceDetails {
    /// Sets the tab counters to the length of the collected lists.
    pub fn with_counters(mut self) -> Self {
        self.workloads_number = self.workloads.len();
        self.virtual_services_number = self.virtual_services.len();
        self.destination_rules_number = self.destination_rules.len();
        self
    }
}

impl Comparable for ServiceDetails {
    fn is_equal(&self, other: &Self, advanced_check: bool) -> bool {
        if self.name != other.name || self.namespace != other.namespace {
            return false;
        }

        !advanced_check
            || (self.istio_sidecar == other.istio_sidecar
                && self.labels == other.labels
                && self.ports == other.ports
                && is_equal_when_known(self.ip.as_ref(), other.ip.as_ref())
                && is_equal_when_known(self.health.as_ref(), other.health.as_ref()))
    }
}
