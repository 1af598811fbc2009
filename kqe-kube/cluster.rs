use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet};
use k8s_openapi::api::batch::v1::{CronJob, Job};
use k8s_openapi::api::core::v1::{Namespace, Pod as KubePod, Service as KubeService};
use k8s_openapi::NamespaceResourceScope;
use kqe_model::{
    Application, ApplicationDetails, ClusterClient, IstioConfig, IstioConfigDetails, IstioConfigObjectType, Service,
    ServiceDetails, Workload, WorkloadDetails, name_matches,
};
use kube::api::{DynamicObject, ListParams};
use kube::{Api, Resource, ResourceExt};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{debug, warn};

use crate::client::{ClusterError, KubernetesClient};
use crate::convert::{self, WorkloadObject};
use crate::istio::{
    destination_rule, destination_rule_targets, get_istio_resource, istio_config, virtual_service,
    virtual_service_targets,
};
use crate::utils::is_not_served;
use crate::{selects, serialize_resource};

impl KubernetesClient {
    /// Lists namespaced resources of type `K` from `namespaces` or from all namespaces if `namespaces` is empty.
    pub async fn list<K>(&self, namespaces: &[String]) -> Result<Vec<K>, ClusterError>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        <K as Resource>::DynamicType: Default,
    {
        let params = ListParams::default();
        if namespaces.is_empty() {
            return Ok(Api::<K>::all(self.get_client()).list(&params).await?.items);
        }

        let mut result = Vec::new();
        for namespace in namespaces {
            result.extend(Api::<K>::namespaced(self.get_client(), namespace).list(&params).await?.items);
        }

        Ok(result)
    }

    /// Lists Istio objects of the specified type.\
    /// **Note** that types not served by the cluster are reported as empty lists, other errors are returned.
    pub async fn list_istio(
        &self,
        namespaces: &[String],
        object_type: IstioConfigObjectType,
    ) -> Result<Vec<DynamicObject>, ClusterError> {
        let ar = get_istio_resource(object_type);
        let params = ListParams::default();
        let namespaces = if namespaces.is_empty() {
            vec![None]
        } else {
            namespaces.iter().map(|n| Some(n.as_str())).collect()
        };

        let mut result = Vec::new();
        for namespace in namespaces {
            match self.get_api(&ar, namespace).list(&params).await {
                Ok(list) => result.extend(list.items),
                Err(error) if is_not_served(&error) => {
                    warn!("Cannot list {} in {:?}: {}", object_type, namespace, error);
                },
                Err(error) => return Err(error.into()),
            }
        }

        Ok(result)
    }

    /// Returns all workloads from the namespaces.\
    /// **Note** that objects managed by other workloads are skipped.
    pub async fn workload_objects(&self, namespaces: &[String]) -> Result<Vec<WorkloadObject>, ClusterError> {
        let mut result = Vec::new();

        result.extend(self.list::<Deployment>(namespaces).await?.iter().map(WorkloadObject::from_deployment));
        result.extend(
            self.list::<ReplicaSet>(namespaces)
                .await?
                .iter()
                .filter(|r| !convert::is_owned(&r.metadata))
                .map(WorkloadObject::from_replica_set),
        );
        result.extend(self.list::<StatefulSet>(namespaces).await?.iter().map(WorkloadObject::from_stateful_set));
        result.extend(self.list::<DaemonSet>(namespaces).await?.iter().map(WorkloadObject::from_daemon_set));
        result.extend(
            self.list::<Job>(namespaces)
                .await?
                .iter()
                .filter(|j| !convert::is_owned(&j.metadata))
                .map(WorkloadObject::from_job),
        );
        result.extend(self.list::<CronJob>(namespaces).await?.iter().map(WorkloadObject::from_cron_job));
        result.extend(
            self.list::<KubePod>(namespaces)
                .await?
                .iter()
                .filter(|p| !convert::is_owned(&p.metadata))
                .map(WorkloadObject::from_pod),
        );

        debug!("Found {} workloads in {:?}", result.len(), namespaces);

        Ok(result)
    }

    async fn workload_object(&self, namespace: &str, name: &str, workload_type: &str) -> Result<WorkloadObject, ClusterError> {
        let client = self.get_client();
        let workload = match workload_type {
            "Deployment" => WorkloadObject::from_deployment(&Api::<Deployment>::namespaced(client, namespace).get(name).await?),
            "ReplicaSet" => WorkloadObject::from_replica_set(&Api::<ReplicaSet>::namespaced(client, namespace).get(name).await?),
            "StatefulSet" => WorkloadObject::from_stateful_set(&Api::<StatefulSet>::namespaced(client, namespace).get(name).await?),
            "DaemonSet" => WorkloadObject::from_daemon_set(&Api::<DaemonSet>::namespaced(client, namespace).get(name).await?),
            "Job" => WorkloadObject::from_job(&Api::<Job>::namespaced(client, namespace).get(name).await?),
            "CronJob" => WorkloadObject::from_cron_job(&Api::<CronJob>::namespaced(client, namespace).get(name).await?),
            "Pod" => WorkloadObject::from_pod(&Api::<KubePod>::namespaced(client, namespace).get(name).await?),
            _ => return Err(ClusterError::UnsupportedWorkloadType(workload_type.to_owned())),
        };

        Ok(workload)
    }
}

impl ClusterClient for KubernetesClient {
    type Error = ClusterError;

    async fn namespace_list(&self) -> Result<Vec<String>, ClusterError> {
        let namespaces = Api::<Namespace>::all(self.get_client())
            .list(&ListParams::default())
            .await?;
        Ok(namespaces.items.iter().map(|n| n.name_any()).collect())
    }

    async fn application_list(&self, namespaces: &[String], names: &[String]) -> Result<Vec<Application>, ClusterError> {
        let workloads = self.workload_objects(namespaces).await?;
        Ok(convert::applications(&workloads)
            .into_iter()
            .filter(|a| name_matches(&a.name, names))
            .collect())
    }

    async fn application_details(&self, namespace: &str, name: &str) -> Result<ApplicationDetails, ClusterError> {
        let namespaces = [namespace.to_owned()];
        let workloads = self.workload_objects(&namespaces).await?;
        let services = self.list::<KubeService>(&namespaces).await?;

        Ok(ApplicationDetails {
            name: name.to_owned(),
            namespace: namespace.to_owned(),
            workloads: convert::app_workloads(&workloads, name),
            services: convert::app_services(&services, name),
            health: None,
        })
    }

    async fn workload_list(&self, namespaces: &[String], names: &[String]) -> Result<Vec<Workload>, ClusterError> {
        Ok(self
            .workload_objects(namespaces)
            .await?
            .iter()
            .filter(|w| name_matches(&w.name, names))
            .map(WorkloadObject::to_workload)
            .collect())
    }

    async fn workload_details(&self, namespace: &str, name: &str, workload_type: &str) -> Result<WorkloadDetails, ClusterError> {
        let namespaces = [namespace.to_owned()];
        let workload = self.workload_object(namespace, name, workload_type).await?;
        let pods = self.list::<KubePod>(&namespaces).await?;
        let services = self.list::<KubeService>(&namespaces).await?;

        let mut pods = pods.iter().filter(|p| workload.owns(p)).map(convert::pod).collect::<Vec<_>>();
        pods.sort();

        Ok(WorkloadDetails {
            name: workload.name.clone(),
            namespace: workload.namespace.clone(),
            workload_type: workload.workload_type.to_owned(),
            istio_sidecar: !pods.is_empty() && pods.iter().all(|p| p.istio_sidecar),
            labels: workload.labels.clone(),
            health: None,
            pods,
            services: services
                .iter()
                .filter(|s| selects(&convert::service_selector(s), &workload.labels))
                .map(convert::workload_service)
                .collect(),
        })
    }

    async fn service_list(&self, namespaces: &[String], names: &[String]) -> Result<Vec<Service>, ClusterError> {
        Ok(self
            .list::<KubeService>(namespaces)
            .await?
            .iter()
            .map(convert::service)
            .filter(|s| name_matches(&s.name, names))
            .collect())
    }

    async fn service_details(&self, namespace: &str, name: &str) -> Result<ServiceDetails, ClusterError> {
        let namespaces = [namespace.to_owned()];
        let service = Api::<KubeService>::namespaced(self.get_client(), namespace).get(name).await?;
        let selector = convert::service_selector(&service);
        let workloads = self.workload_objects(&namespaces).await?;
        let virtual_services = self.list_istio(&namespaces, IstioConfigObjectType::VirtualService).await?;
        let destination_rules = self.list_istio(&namespaces, IstioConfigObjectType::DestinationRule).await?;

        Ok(ServiceDetails {
            name: name.to_owned(),
            namespace: namespace.to_owned(),
            istio_sidecar: false,
            labels: service.metadata.labels.clone().unwrap_or_default(),
            ip: convert::service_ip(&service),
            ports: convert::service_ports(&service),
            health: None,
            workloads: workloads
                .iter()
                .filter(|w| selects(&selector, &w.labels))
                .map(WorkloadObject::to_service_workload)
                .collect(),
            virtual_services: virtual_services
                .iter()
                .filter(|vs| virtual_service_targets(vs, name, namespace))
                .map(virtual_service)
                .collect(),
            destination_rules: destination_rules
                .iter()
                .filter(|dr| destination_rule_targets(dr, name, namespace))
                .map(destination_rule)
                .collect(),
            ..Default::default()
        }
        .with_counters())
    }

    async fn istio_config_list(&self, namespaces: &[String], names: &[String]) -> Result<Vec<IstioConfig>, ClusterError> {
        let mut result = Vec::new();
        for object_type in IstioConfigObjectType::ALL {
            result.extend(
                self.list_istio(namespaces, *object_type)
                    .await?
                    .iter()
                    .map(|o| istio_config(o, *object_type))
                    .filter(|c| name_matches(&c.name, names)),
            );
        }

        debug!("Found {} Istio objects in {:?}", result.len(), namespaces);

        Ok(result)
    }

    async fn istio_config_details(
        &self,
        namespace: &str,
        object_type: IstioConfigObjectType,
        name: &str,
    ) -> Result<IstioConfigDetails, ClusterError> {
        let ar = get_istio_resource(object_type);
        let mut object = self.get_api(&ar, Some(namespace)).get(name).await?;

        Ok(IstioConfigDetails {
            name: object.name_any(),
            namespace: namespace.to_owned(),
            object_type,
            text: serialize_resource(&mut object)?,
            validation: None,
            error_messages: Vec::new(),
        })
    }
}
