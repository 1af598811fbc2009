use kqe_model::{
    Application, ApplicationDetails, IstioConfig, IstioConfigDetails, IstioConfigObjectType, Overview,
    RoutingWizardType, Service, ServiceDetails, TrafficItem, Workload, WorkloadDetails, name_matches,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::ui::TracesState;

/// Dashboard shared between the fake page and the fake sources.
pub type SharedDashboard = Arc<Mutex<Dashboard>>;

/// Record that belongs to a namespace and has a name.
pub trait Keyed {
    /// Returns `(namespace, name)` of the record.
    fn key(&self) -> (&str, &str);
}

macro_rules! keyed {
    ($($record:ty),* $(,)?) => {
        $(
            impl Keyed for $record {
                fn key(&self) -> (&str, &str) {
                    (self.namespace.as_str(), self.name.as_str())
                }
            }
        )*
    };
}

keyed!(
    Application,
    ApplicationDetails,
    Workload,
    WorkloadDetails,
    Service,
    ServiceDetails,
    IstioConfig,
    IstioConfigDetails,
);

/// Records known to a single source.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub namespaces: Vec<String>,
    pub overviews: Vec<Overview>,
    pub applications: Vec<Application>,
    pub application_details: Vec<ApplicationDetails>,
    pub workloads: Vec<Workload>,
    pub workload_details: Vec<WorkloadDetails>,
    pub services: Vec<Service>,
    pub service_details: Vec<ServiceDetails>,
    pub istio_configs: Vec<IstioConfig>,
    pub istio_config_details: Vec<IstioConfigDetails>,
}

impl Dataset {
    /// Returns details of the service if the source knows it.
    pub fn service_details_mut(&mut self, namespace: &str, name: &str) -> Option<&mut ServiceDetails> {
        self.service_details.iter_mut().find(|s| s.key() == (namespace, name))
    }

    /// Returns details of the Istio object if the source knows it.
    pub fn istio_details(
        &self,
        namespace: &str,
        object_type: IstioConfigObjectType,
        name: &str,
    ) -> Option<IstioConfigDetails> {
        self.istio_config_details
            .iter()
            .find(|c| c.key() == (namespace, name) && c.object_type == object_type)
            .cloned()
    }

    /// Adds Istio object to the source, replacing the existing one.
    pub fn put_istio_config(&mut self, config: IstioConfig, details: IstioConfigDetails) {
        self.remove_istio_config(&config.namespace, config.object_type, &config.name);
        self.istio_configs.push(config);
        self.istio_config_details.push(details);
    }

    /// Removes Istio object from the source.
    pub fn remove_istio_config(&mut self, namespace: &str, object_type: IstioConfigObjectType, name: &str) {
        self.istio_configs
            .retain(|c| c.key() != (namespace, name) || c.object_type != object_type);
        self.istio_config_details
            .retain(|c| c.key() != (namespace, name) || c.object_type != object_type);
    }
}

/// What the UI, the REST API and the cluster currently show.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub ui: Dataset,
    pub rest: Dataset,
    pub cluster: Dataset,
    pub inbound: BTreeMap<String, Vec<TrafficItem>>,
    pub outbound: BTreeMap<String, Vec<TrafficItem>>,
    pub traces: TracesState,
    pub routing: BTreeMap<String, RoutingWizardType>,
}

impl Dashboard {
    /// Wraps the dashboard so it can be shared by pages and sources.
    pub fn shared(self) -> SharedDashboard {
        Arc::new(Mutex::new(self))
    }

    /// Returns all datasets that hold Istio objects.
    pub fn datasets_mut(&mut self) -> [&mut Dataset; 3] {
        [&mut self.ui, &mut self.rest, &mut self.cluster]
    }
}

/// Locks the shared dashboard.
pub fn lock(dashboard: &SharedDashboard) -> MutexGuard<'_, Dashboard> {
    dashboard.lock().expect("dashboard lock should not be poisoned")
}

/// Returns `true` if the `namespace` is one of the `namespaces` or no namespace is selected.
pub fn in_scope(namespace: &str, namespaces: &[String]) -> bool {
    namespaces.is_empty() || namespaces.iter().any(|n| n == namespace)
}

/// Returns records from the `namespaces` that pass the name filter.
pub fn select<T: Keyed + Clone>(items: &[T], namespaces: &[String], names: &[String]) -> Vec<T> {
    items
        .iter()
        .filter(|i| {
            let (namespace, name) = i.key();
            in_scope(namespace, namespaces) && name_matches(name, names)
        })
        .cloned()
        .collect()
}

/// Returns the record with the exact `namespace` and `name`.
pub fn lookup<T: Keyed + Clone>(items: &[T], namespace: &str, name: &str) -> Option<T> {
    items.iter().find(|i| i.key() == (namespace, name)).cloned()
}
