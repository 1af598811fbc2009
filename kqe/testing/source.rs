use kqe_model::{
    Application, ApplicationDetails, ClusterClient, IstioConfig, IstioConfigDetails, IstioConfigObjectType, Overview,
    OverviewPageType, RestClient, Service, ServiceDetails, Workload, WorkloadDetails,
};
use std::future::{Ready, ready};

use super::dashboard::{Dataset, SharedDashboard, in_scope, lock, lookup, select};

/// Possible errors from the fake sources.
#[derive(thiserror::Error, Debug)]
pub enum FakeError {
    /// Requested record does not exist.
    #[error("{0} not found")]
    NotFound(String),
}

type Reply<T> = Ready<Result<T, FakeError>>;

/// Dashboard REST API backed by the `rest` dataset.
#[derive(Clone)]
pub struct FakeRest {
    dashboard: SharedDashboard,
}

impl FakeRest {
    pub fn new(dashboard: &SharedDashboard) -> Self {
        Self {
            dashboard: dashboard.clone(),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&Dataset) -> T) -> T {
        f(&lock(&self.dashboard).rest)
    }
}

/// Cluster API backed by the `cluster` dataset.
#[derive(Clone)]
pub struct FakeCluster {
    dashboard: SharedDashboard,
}

impl FakeCluster {
    pub fn new(dashboard: &SharedDashboard) -> Self {
        Self {
            dashboard: dashboard.clone(),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&Dataset) -> T) -> T {
        f(&lock(&self.dashboard).cluster)
    }
}

fn found<T>(record: Option<T>, what: &str, namespace: &str, name: &str) -> Reply<T> {
    ready(record.ok_or_else(|| FakeError::NotFound(format!("{what} {namespace}/{name}"))))
}

fn istio_configs(data: &Dataset, namespaces: &[String], names: &[String]) -> Vec<IstioConfig> {
    select(&data.istio_configs, namespaces, names)
}

macro_rules! fake_source {
    ($source:ident, $client:ident { $($extra:tt)* }) => {
        impl $client for $source {
            type Error = FakeError;

            $($extra)*

            fn namespace_list(&self) -> Reply<Vec<String>> {
                ready(Ok(self.read(|d| d.namespaces.clone())))
            }

            fn application_list(&self, namespaces: &[String], names: &[String]) -> Reply<Vec<Application>> {
                ready(Ok(self.read(|d| select(&d.applications, namespaces, names))))
            }

            fn application_details(&self, namespace: &str, name: &str) -> Reply<ApplicationDetails> {
                let details = self.read(|d| lookup(&d.application_details, namespace, name));
                found(details, "application", namespace, name)
            }

            fn workload_list(&self, namespaces: &[String], names: &[String]) -> Reply<Vec<Workload>> {
                ready(Ok(self.read(|d| select(&d.workloads, namespaces, names))))
            }

            fn workload_details(&self, namespace: &str, name: &str, _workload_type: &str) -> Reply<WorkloadDetails> {
                let details = self.read(|d| lookup(&d.workload_details, namespace, name));
                found(details, "workload", namespace, name)
            }

            fn service_list(&self, namespaces: &[String], names: &[String]) -> Reply<Vec<Service>> {
                ready(Ok(self.read(|d| select(&d.services, namespaces, names))))
            }

            fn service_details(&self, namespace: &str, name: &str) -> Reply<ServiceDetails> {
                let details = self.read(|d| lookup(&d.service_details, namespace, name));
                found(details, "service", namespace, name)
            }

            fn istio_config_list(&self, namespaces: &[String], names: &[String]) -> Reply<Vec<IstioConfig>> {
                ready(Ok(self.read(|d| istio_configs(d, namespaces, names))))
            }

            fn istio_config_details(
                &self,
                namespace: &str,
                object_type: IstioConfigObjectType,
                name: &str,
            ) -> Reply<IstioConfigDetails> {
                let details = self.read(|d| d.istio_details(namespace, object_type, name));
                found(details, object_type.text(), namespace, name)
            }
        }
    };
}

fake_source!(FakeRest, RestClient {
    fn overview_list(&self, namespaces: &[String], overview_type: OverviewPageType) -> Reply<Vec<Overview>> {
        ready(Ok(self.read(|d| {
            d.overviews
                .iter()
                .filter(|o| o.overview_type == overview_type && in_scope(&o.namespace, namespaces))
                .cloned()
                .collect()
        })))
    }
});

fake_source!(FakeCluster, ClusterClient {});
