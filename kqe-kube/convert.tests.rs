use k8s_openapi::api::apps::v1::DeploymentSpec;
use k8s_openapi::api::core::v1::{Container, PodSpec, PodStatus, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;

use super::*;

fn labels(pairs: &[(&str, &str)]) -> Labels {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn meta(name: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_owned()),
        namespace: Some("bookinfo".to_owned()),
        ..Default::default()
    }
}

fn deployment(name: &str, pod_labels: &[(&str, &str)]) -> Deployment {
    Deployment {
        metadata: meta(name),
        spec: Some(DeploymentSpec {
            selector: LabelSelector {
                match_labels: Some(labels(pod_labels)),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels(pod_labels)),
                    ..Default::default()
                }),
                spec: None,
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn kube_pod(name: &str, pod_labels: &[(&str, &str)], containers: &[&str]) -> KubePod {
    KubePod {
        metadata: ObjectMeta {
            labels: Some(labels(pod_labels)),
            owner_references: Some(vec![OwnerReference {
                name: format!("{name}-rs"),
                kind: "ReplicaSet".to_owned(),
                ..Default::default()
            }]),
            ..meta(name)
        },
        spec: Some(PodSpec {
            containers: containers
                .iter()
                .map(|c| Container {
                    name: (*c).to_owned(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }),
        status: Some(PodStatus {
            phase: Some("Running".to_owned()),
            ..Default::default()
        }),
    }
}

fn kube_service(name: &str, selector: &[(&str, &str)]) -> KubeService {
    KubeService {
        metadata: meta(name),
        spec: Some(ServiceSpec {
            selector: Some(labels(selector)),
            cluster_ip: Some("172.30.10.1".to_owned()),
            ports: Some(vec![ServicePort {
                name: Some("http".to_owned()),
                port: 9080,
                protocol: Some("TCP".to_owned()),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn deployment_to_workload_test() {
    let workload = WorkloadObject::from_deployment(&deployment("reviews-v1", &[("app", "reviews"), ("version", "v1")]));

    assert_eq!("Deployment", workload.workload_type);
    assert_eq!(Some("reviews"), workload.app());

    let record = workload.to_workload();
    assert_eq!("reviews-v1", record.name);
    assert_eq!("bookinfo", record.namespace);
    assert!(record.app_label);
    assert!(record.version_label);
}

#[test]
fn workload_owns_pod_test() {
    let workload = WorkloadObject::from_deployment(&deployment("reviews-v1", &[("app", "reviews"), ("version", "v1")]));

    assert!(workload.owns(&kube_pod("reviews-v1-abc", &[("app", "reviews"), ("version", "v1")], &[])));
    assert!(!workload.owns(&kube_pod("reviews-v2-abc", &[("app", "reviews"), ("version", "v2")], &[])));
}

#[test]
fn applications_group_by_app_label_test() {
    let workloads = vec![
        WorkloadObject::from_deployment(&deployment("reviews-v1", &[("app", "reviews")])),
        WorkloadObject::from_deployment(&deployment("reviews-v2", &[("app", "reviews")])),
        WorkloadObject::from_deployment(&deployment("details-v1", &[("app", "details")])),
        WorkloadObject::from_deployment(&deployment("no-app", &[("name", "no-app")])),
    ];

    let apps = applications(&workloads);

    assert_eq!(2, apps.len());
    assert_eq!("details", apps[0].name);
    assert_eq!("reviews", apps[1].name);
    assert_eq!(
        vec![AppWorkload::new("reviews-v1", false), AppWorkload::new("reviews-v2", false)],
        app_workloads(&workloads, "reviews")
    );
}

#[test]
fn pod_record_test() {
    let record = pod(&kube_pod("details-v1-xyz", &[("app", "details")], &["details", ISTIO_PROXY]));

    assert!(record.istio_sidecar);
    assert_eq!(Some("Running".to_owned()), record.status);
    assert_eq!(vec!["details-v1-xyz-rs".to_owned()], record.created_by);
    assert!(!pod(&kube_pod("mongodb-v1", &[], &["mongodb"])).istio_sidecar);
}

#[test]
fn service_records_test() {
    let reviews = kube_service("reviews", &[("app", "reviews")]);
    let headless = KubeService {
        spec: Some(ServiceSpec {
            cluster_ip: Some("None".to_owned()),
            ..Default::default()
        }),
        ..kube_service("headless", &[])
    };

    assert_eq!(vec!["9080/TCP http".to_owned()], service_ports(&reviews));
    assert_eq!(Some("172.30.10.1".to_owned()), workload_service(&reviews).ip);
    assert_eq!(None, service_ip(&headless));
    assert_eq!("reviews", service(&reviews).name);
    assert_eq!(vec!["reviews".to_owned()], app_services(&[reviews, headless], "reviews"));
}

#[test]
fn is_owned_test() {
    let pod = kube_pod("reviews-v1-abc", &[], &[]);

    assert!(is_owned(&pod.metadata));
    assert!(!is_owned(&meta("standalone")));
}
