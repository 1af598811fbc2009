use kqe_model::{
    AppWorkload, Application, ApplicationDetails, Health, Overview, OverviewPageType, Pod, Service, ServiceDetails,
    ServiceWorkload, Workload, WorkloadDetails, WorkloadService,
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::istio::{parse_destination_rule, parse_virtual_service};

#[cfg(test)]
#[path = "./responses.tests.rs"]
mod responses_tests;

#[derive(Deserialize, Default)]
pub struct NamespaceRef {
    #[serde(default)]
    pub name: String,
}

/// Either a plain array or an object with the `items` array.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum ItemsOrList {
    List(Vec<Value>),
    Items { items: Vec<Value> },
}

impl Default for ItemsOrList {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl ItemsOrList {
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Self::List(items) | Self::Items { items } => items,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppListResponse {
    #[serde(default)]
    pub applications: Vec<AppListItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppListItem {
    pub name: String,
    #[serde(default)]
    pub istio_sidecar: bool,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl AppListItem {
    pub fn into_record(self, namespace: &str) -> Application {
        Application {
            name: self.name,
            namespace: namespace.to_owned(),
            istio_sidecar: self.istio_sidecar,
            labels: self.labels,
            health: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDetailsResponse {
    pub name: String,
    #[serde(default)]
    pub namespace: NamespaceRef,
    #[serde(default)]
    pub workloads: Vec<AppDetailsWorkload>,
    #[serde(default)]
    pub service_names: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDetailsWorkload {
    pub workload_name: String,
    #[serde(default)]
    pub istio_sidecar: bool,
}

impl AppDetailsResponse {
    pub fn into_record(self, namespace: &str) -> ApplicationDetails {
        let namespace = if self.namespace.name.is_empty() {
            namespace.to_owned()
        } else {
            self.namespace.name
        };

        let mut services = self.service_names;
        services.sort();

        ApplicationDetails {
            name: self.name,
            namespace,
            workloads: self
                .workloads
                .into_iter()
                .map(|w| AppWorkload::new(w.workload_name, w.istio_sidecar))
                .collect(),
            services,
            health: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadListResponse {
    #[serde(default)]
    pub workloads: Vec<WorkloadListItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadListItem {
    pub name: String,
    #[serde(rename = "type", default)]
    pub workload_type: String,
    #[serde(default)]
    pub istio_sidecar: bool,
    #[serde(default)]
    pub app_label: bool,
    #[serde(default)]
    pub version_label: bool,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl WorkloadListItem {
    pub fn into_record(self, namespace: &str) -> Workload {
        Workload {
            name: self.name,
            namespace: namespace.to_owned(),
            workload_type: self.workload_type,
            istio_sidecar: self.istio_sidecar,
            app_label: self.app_label,
            version_label: self.version_label,
            labels: self.labels,
            health: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadDetailsResponse {
    pub name: String,
    #[serde(rename = "type", default)]
    pub workload_type: String,
    #[serde(default)]
    pub istio_sidecar: bool,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub pods: Vec<PodItem>,
    #[serde(default)]
    pub services: Vec<ServiceItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodItem {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub istio_containers: Vec<Value>,
    #[serde(default)]
    pub created_by: Vec<CreatedBy>,
}

#[derive(Deserialize)]
pub struct CreatedBy {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub ip: Option<String>,
}

impl WorkloadDetailsResponse {
    pub fn into_record(self, namespace: &str) -> WorkloadDetails {
        WorkloadDetails {
            name: self.name,
            namespace: namespace.to_owned(),
            workload_type: self.workload_type,
            istio_sidecar: self.istio_sidecar,
            labels: self.labels,
            health: None,
            pods: self
                .pods
                .into_iter()
                .map(|p| Pod {
                    name: p.name,
                    status: p.status,
                    istio_sidecar: !p.istio_containers.is_empty(),
                    labels: p.labels,
                    created_by: p.created_by.into_iter().map(|c| c.name).collect(),
                })
                .collect(),
            services: self
                .services
                .into_iter()
                .map(|s| WorkloadService {
                    name: s.name,
                    namespace: s.namespace.unwrap_or_else(|| namespace.to_owned()),
                    labels: s.labels,
                    ip: s.ip,
                })
                .collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListResponse {
    #[serde(default)]
    pub services: Vec<ServiceListItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListItem {
    pub name: String,
    #[serde(default)]
    pub istio_sidecar: bool,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl ServiceListItem {
    pub fn into_record(self, namespace: &str) -> Service {
        Service {
            name: self.name,
            namespace: namespace.to_owned(),
            istio_sidecar: self.istio_sidecar,
            labels: self.labels,
            health: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetailsResponse {
    pub service: ServiceDefinition,
    #[serde(default)]
    pub istio_sidecar: bool,
    #[serde(default)]
    pub workloads: Vec<ServiceWorkloadItem>,
    #[serde(default)]
    pub virtual_services: ItemsOrList,
    #[serde(default)]
    pub destination_rules: ItemsOrList,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    pub name: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub ports: Vec<ServicePort>,
}

#[derive(Deserialize)]
pub struct ServicePort {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub protocol: String,
    pub port: u32,
}

impl ServicePort {
    pub fn to_text(&self) -> String {
        format!("{}/{} {}", self.port, self.protocol, self.name).trim_end().to_owned()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceWorkloadItem {
    pub name: String,
    #[serde(rename = "type", default)]
    pub workload_type: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl ServiceDetailsResponse {
    pub fn into_record(self, namespace: &str) -> ServiceDetails {
        ServiceDetails {
            name: self.service.name,
            namespace: namespace.to_owned(),
            istio_sidecar: self.istio_sidecar,
            labels: self.service.labels,
            ip: self.service.ip,
            ports: self.service.ports.iter().map(ServicePort::to_text).collect(),
            health: None,
            workloads: self
                .workloads
                .into_iter()
                .map(|w| ServiceWorkload {
                    name: w.name,
                    workload_type: w.workload_type,
                    labels: w.labels,
                })
                .collect(),
            virtual_services: self
                .virtual_services
                .into_vec()
                .iter()
                .map(|vs| parse_virtual_service(vs, namespace))
                .collect(),
            destination_rules: self
                .destination_rules
                .into_vec()
                .iter()
                .map(|dr| parse_destination_rule(dr, namespace))
                .collect(),
            ..Default::default()
        }
        .with_counters()
    }
}

/// Builds namespace summary from the `health` endpoint response.\
/// **Note** that health is derived from workload replica statuses only.
pub fn parse_overview(namespace: &str, overview_type: OverviewPageType, health: &Value) -> Overview {
    let mut overview = Overview::new(overview_type, namespace, 0);
    let Some(items) = health.as_object() else {
        return overview;
    };

    overview.items = items.len();
    for item in items.values() {
        match item_health(item) {
            Health::Healthy => overview.healthy += 1,
            Health::Degraded => overview.degraded += 1,
            Health::Failure => overview.failure += 1,
            Health::NotAvailable => overview.na += 1,
        }
    }

    overview
}

fn item_health(item: &Value) -> Health {
    let statuses: &[Value] = if let Some(statuses) = item["workloadStatuses"].as_array() {
        statuses
    } else if item["workloadStatus"].is_object() {
        std::slice::from_ref(&item["workloadStatus"])
    } else {
        &[]
    };

    if statuses.is_empty() {
        return Health::NotAvailable;
    }

    let mut health = Health::Healthy;
    for status in statuses {
        let desired = status["desiredReplicas"].as_i64().unwrap_or_default();
        let available = status["availableReplicas"].as_i64().unwrap_or_default();
        if desired > 0 && available == 0 {
            return Health::Failure;
        }

        if available < desired {
            health = Health::Degraded;
        }
    }

    health
}
