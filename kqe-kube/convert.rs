use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet};
use k8s_openapi::api::batch::v1::{CronJob, Job};
use k8s_openapi::api::core::v1::{Pod as KubePod, PodTemplateSpec, Service as KubeService};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use kqe_model::{
    AppWorkload, Application, Labels, Pod, Service, ServiceWorkload, Workload, WorkloadService,
};
use std::collections::BTreeMap;

use crate::selects;

#[cfg(test)]
#[path = "./convert.tests.rs"]
mod convert_tests;

pub const ISTIO_PROXY: &str = "istio-proxy";
pub const APP_LABEL: &str = "app";

/// Workload resource reduced to the fields needed for reconciliation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkloadObject {
    pub name: String,
    pub namespace: String,
    pub workload_type: &'static str,
    pub labels: Labels,
    pub selector: Labels,
}

impl WorkloadObject {
    fn new(meta: &ObjectMeta, workload_type: &'static str, template: Option<&PodTemplateSpec>, selector: Option<&LabelSelector>) -> Self {
        Self {
            name: meta.name.clone().unwrap_or_default(),
            namespace: meta.namespace.clone().unwrap_or_default(),
            workload_type,
            labels: template
                .and_then(|t| t.metadata.as_ref())
                .and_then(|m| m.labels.clone())
                .unwrap_or_default(),
            selector: selector.and_then(|s| s.match_labels.clone()).unwrap_or_default(),
        }
    }

    pub fn from_deployment(deployment: &Deployment) -> Self {
        let spec = deployment.spec.as_ref();
        Self::new(
            &deployment.metadata,
            "Deployment",
            spec.map(|s| &s.template),
            spec.map(|s| &s.selector),
        )
    }

    pub fn from_replica_set(replica_set: &ReplicaSet) -> Self {
        let spec = replica_set.spec.as_ref();
        Self::new(
            &replica_set.metadata,
            "ReplicaSet",
            spec.and_then(|s| s.template.as_ref()),
            spec.map(|s| &s.selector),
        )
    }

    pub fn from_stateful_set(stateful_set: &StatefulSet) -> Self {
        let spec = stateful_set.spec.as_ref();
        Self::new(
            &stateful_set.metadata,
            "StatefulSet",
            spec.map(|s| &s.template),
            spec.map(|s| &s.selector),
        )
    }

    pub fn from_daemon_set(daemon_set: &DaemonSet) -> Self {
        let spec = daemon_set.spec.as_ref();
        Self::new(&daemon_set.metadata, "DaemonSet", spec.map(|s| &s.template), spec.map(|s| &s.selector))
    }

    pub fn from_job(job: &Job) -> Self {
        let spec = job.spec.as_ref();
        Self::new(
            &job.metadata,
            "Job",
            spec.map(|s| &s.template),
            spec.and_then(|s| s.selector.as_ref()),
        )
    }

    pub fn from_cron_job(cron_job: &CronJob) -> Self {
        let job_spec = cron_job.spec.as_ref().and_then(|s| s.job_template.spec.as_ref());
        let mut workload = Self::new(&cron_job.metadata, "CronJob", job_spec.map(|s| &s.template), None);
        workload.selector = workload.labels.clone();
        workload
    }

    /// Creates workload from the pod that is not managed by any controller.\
    /// **Note** that such pod selects itself by its own labels.
    pub fn from_pod(pod: &KubePod) -> Self {
        let labels = pod.metadata.labels.clone().unwrap_or_default();
        Self {
            name: pod.metadata.name.clone().unwrap_or_default(),
            namespace: pod.metadata.namespace.clone().unwrap_or_default(),
            workload_type: "Pod",
            selector: labels.clone(),
            labels,
        }
    }

    /// Returns value of the `app` label.
    pub fn app(&self) -> Option<&str> {
        self.labels.get(APP_LABEL).map(String::as_str)
    }

    /// Returns `true` if workload owns the pod.
    pub fn owns(&self, pod: &KubePod) -> bool {
        pod.metadata.namespace.as_deref() == Some(self.namespace.as_str())
            && pod
                .metadata
                .labels
                .as_ref()
                .is_some_and(|labels| selects(&self.selector, labels))
    }

    /// Converts workload to the list record.
    pub fn to_workload(&self) -> Workload {
        Workload::new(&self.name, &self.namespace, self.workload_type).with_labels(self.labels.clone())
    }

    /// Converts workload to the service details record.
    pub fn to_service_workload(&self) -> ServiceWorkload {
        ServiceWorkload {
            name: self.name.clone(),
            workload_type: self.workload_type.to_owned(),
            labels: self.labels.clone(),
        }
    }
}

/// Returns `true` if the object is managed by another resource.
pub fn is_owned(meta: &ObjectMeta) -> bool {
    meta.owner_references.as_ref().is_some_and(|o| !o.is_empty())
}

/// Groups workloads into applications using the `app` label.
pub fn applications(workloads: &[WorkloadObject]) -> Vec<Application> {
    let mut result = BTreeMap::<(String, String), Application>::new();
    for workload in workloads {
        let Some(app) = workload.app() else {
            continue;
        };

        result
            .entry((workload.namespace.clone(), app.to_owned()))
            .or_insert_with(|| Application::new(app, &workload.namespace));
    }

    result.into_values().collect()
}

/// Returns application workloads sorted by name.
pub fn app_workloads(workloads: &[WorkloadObject], app: &str) -> Vec<AppWorkload> {
    let mut result = workloads
        .iter()
        .filter(|w| w.app() == Some(app))
        .map(|w| AppWorkload::new(&w.name, false))
        .collect::<Vec<_>>();
    result.sort();
    result
}

/// Returns names of services that select the application.
pub fn app_services(services: &[KubeService], app: &str) -> Vec<String> {
    let mut result = services
        .iter()
        .filter(|s| service_selector(s).get(APP_LABEL).map(String::as_str) == Some(app))
        .filter_map(|s| s.metadata.name.clone())
        .collect::<Vec<_>>();
    result.sort();
    result
}

/// Converts kubernetes pod to the record.
pub fn pod(pod: &KubePod) -> Pod {
    let istio_sidecar = pod.spec.as_ref().is_some_and(|s| {
        s.containers.iter().any(|c| c.name == ISTIO_PROXY)
            || s.init_containers
                .as_ref()
                .is_some_and(|c| c.iter().any(|c| c.name == ISTIO_PROXY))
    });

    Pod {
        name: pod.metadata.name.clone().unwrap_or_default(),
        status: pod.status.as_ref().and_then(|s| s.phase.clone()),
        istio_sidecar,
        labels: pod.metadata.labels.clone().unwrap_or_default(),
        created_by: pod
            .metadata
            .owner_references
            .as_ref()
            .map(|o| o.iter().map(|o| o.name.clone()).collect())
            .unwrap_or_default(),
    }
}

/// Returns selector of the kubernetes service.
pub fn service_selector(service: &KubeService) -> Labels {
    service
        .spec
        .as_ref()
        .and_then(|s| s.selector.clone())
        .unwrap_or_default()
}

/// Converts kubernetes service to the list record.
pub fn service(service: &KubeService) -> Service {
    Service {
        labels: service.metadata.labels.clone().unwrap_or_default(),
        ..Service::new(
            service.metadata.name.clone().unwrap_or_default(),
            service.metadata.namespace.clone().unwrap_or_default(),
        )
    }
}

/// Converts kubernetes service to the workload details record.
pub fn workload_service(service: &KubeService) -> WorkloadService {
    WorkloadService {
        name: service.metadata.name.clone().unwrap_or_default(),
        namespace: service.metadata.namespace.clone().unwrap_or_default(),
        labels: service.metadata.labels.clone().unwrap_or_default(),
        ip: service_ip(service),
    }
}

/// Returns cluster IP of the service.
pub fn service_ip(service: &KubeService) -> Option<String> {
    service
        .spec
        .as_ref()
        .and_then(|s| s.cluster_ip.clone())
        .filter(|ip| ip != "None")
}

/// Returns service ports in the `port/protocol name` form.
pub fn service_ports(service: &KubeService) -> Vec<String> {
    service
        .spec
        .as_ref()
        .and_then(|s| s.ports.as_ref())
        .map(|ports| {
            ports
                .iter()
                .map(|p| {
                    let protocol = p.protocol.as_deref().unwrap_or("TCP");
                    let name = p.name.as_deref().unwrap_or_default();
                    format!("{}/{} {}", p.port, protocol, name).trim_end().to_owned()
                })
                .collect()
        })
        .unwrap_or_default()
}
