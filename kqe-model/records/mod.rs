pub use self::application::{AppWorkload, Application, ApplicationDetails};
pub use self::istio::{IstioConfig, IstioConfigDetails};
pub use self::overview::Overview;
pub use self::service::{DestinationRule, Service, ServiceDetails, ServiceWorkload, VirtualService};
pub use self::traffic::TrafficItem;
pub use self::workload::{Pod, Workload, WorkloadDetails, WorkloadService};

use std::collections::BTreeMap;

#[cfg(test)]
#[path = "./records.tests.rs"]
mod records_tests;

mod application;
mod istio;
mod overview;
mod service;
mod traffic;
mod workload;

/// Kubernetes labels attached to the record.
pub type Labels = BTreeMap<String, String>;
