use kqe_model::{
    AppWorkload, Application, ApplicationDetails, DestinationRule, Health, IstioConfig, IstioConfigDetails,
    IstioConfigObjectType, IstioConfigValidation, Labels, Overview, OverviewPageType, Pod, Service, ServiceDetails,
    ServiceWorkload, TrafficItem, TrafficType, VirtualService, Workload, WorkloadDetails, WorkloadService,
};
use serde_json::json;

use super::dashboard::{Dashboard, Dataset};
use crate::ui::TracesState;

pub const BOOKINFO: &str = "bookinfo";
pub const BOOKINFO2: &str = "bookinfo2";
pub const ISTIO_SYSTEM: &str = "istio-system";

const UNMANAGED_NAMESPACE: &str = "default";
const WORKLOAD_TYPE: &str = "Deployment";
const GATEWAY: &str = "bookinfo-gateway";

const BOOKINFO_APPS: [(&str, &[&str]); 4] = [
    ("details", &["v1"]),
    ("productpage", &["v1"]),
    ("ratings", &["v1"]),
    ("reviews", &["v1", "v2", "v3"]),
];

/// Returns dashboard with the bookinfo demo installed in two namespaces.\
/// **Note** that UI, REST and cluster agree with each other, the cluster also sees unmanaged entities.
pub fn bookinfo() -> Dashboard {
    let mut rest = Dataset {
        namespaces: vec![BOOKINFO.to_owned(), BOOKINFO2.to_owned(), ISTIO_SYSTEM.to_owned()],
        ..Default::default()
    };

    let mut texts = Vec::new();
    for namespace in [BOOKINFO, BOOKINFO2] {
        for (app, versions) in BOOKINFO_APPS {
            add_app(&mut rest, namespace, app, versions);
        }

        texts.extend(add_istio_configs(&mut rest, namespace));
    }

    add_app(&mut rest, ISTIO_SYSTEM, "istio-ingressgateway", &[]);
    rest.overviews = overviews(&rest);

    let mut ui = rest.clone();
    let mut cluster = cluster_view(&rest);
    for (namespace, object_type, name, ui_text, cluster_text) in texts {
        set_text(&mut ui, namespace, object_type, name, ui_text);
        set_text(&mut cluster, namespace, object_type, name, cluster_text);
    }

    Dashboard {
        ui,
        rest,
        cluster,
        inbound: [
            (
                "reviews",
                vec![traffic("productpage", TrafficType::App), traffic("productpage-v1", TrafficType::Workload)],
            ),
            (
                "reviews-v1",
                vec![
                    traffic("istio-ingressgateway", TrafficType::Service),
                    traffic("productpage", TrafficType::Service),
                ],
            ),
        ]
        .into_iter()
        .map(|(name, items)| (name.to_owned(), items))
        .collect(),
        outbound: [
            (
                "productpage",
                vec![
                    traffic("details", TrafficType::App),
                    traffic("reviews", TrafficType::App),
                    traffic("reviews-v1", TrafficType::Workload),
                ],
            ),
            ("productpage-v1", vec![traffic("reviews", TrafficType::Service)]),
        ]
        .into_iter()
        .map(|(name, items)| (name.to_owned(), items))
        .collect(),
        traces: TracesState {
            login_displayed: false,
            has_no_results: false,
            has_results: true,
        },
        routing: Default::default(),
    }
}

fn labels(pairs: &[(&str, &str)]) -> Labels {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn traffic(name: &str, object_type: TrafficType) -> TrafficItem {
    TrafficItem {
        name: name.to_owned(),
        object_type,
        request_type: "HTTP".to_owned(),
    }
}

fn workload_names(app: &str, versions: &[&str]) -> Vec<(String, Labels)> {
    if versions.is_empty() {
        return vec![(app.to_owned(), labels(&[("app", app)]))];
    }

    versions
        .iter()
        .map(|v| (format!("{app}-{v}"), labels(&[("app", app), ("version", v)])))
        .collect()
}

fn add_app(data: &mut Dataset, namespace: &str, app: &str, versions: &[&str]) {
    let workloads = workload_names(app, versions);
    let health = Some(Health::Healthy);
    let ip = Some(format!("10.96.{}.{}", data.services.len() + 1, app.len()));

    data.applications.push(Application {
        istio_sidecar: true,
        labels: labels(&[("app", app)]),
        health,
        ..Application::new(app, namespace)
    });
    data.application_details.push(ApplicationDetails {
        name: app.to_owned(),
        namespace: namespace.to_owned(),
        workloads: workloads.iter().map(|(w, _)| AppWorkload::new(w.as_str(), true)).collect(),
        services: vec![app.to_owned()],
        health,
    });

    for (workload, workload_labels) in &workloads {
        data.workloads.push(Workload {
            istio_sidecar: true,
            health,
            ..Workload::new(workload.as_str(), namespace, WORKLOAD_TYPE).with_labels(workload_labels.clone())
        });
        data.workload_details.push(WorkloadDetails {
            name: workload.clone(),
            namespace: namespace.to_owned(),
            workload_type: WORKLOAD_TYPE.to_owned(),
            istio_sidecar: true,
            labels: workload_labels.clone(),
            health,
            pods: vec![Pod {
                name: format!("{workload}-7d9c8b5f6d-x2kq4"),
                status: Some("Running".to_owned()),
                istio_sidecar: true,
                labels: workload_labels.clone(),
                created_by: vec![workload.clone()],
            }],
            services: vec![WorkloadService {
                name: app.to_owned(),
                namespace: namespace.to_owned(),
                labels: labels(&[("app", app)]),
                ip: ip.clone(),
            }],
        });
    }

    let service_labels = labels(&[("app", app), ("service", app)]);
    data.services.push(Service {
        istio_sidecar: true,
        labels: service_labels.clone(),
        health,
        ..Service::new(app, namespace)
    });
    data.service_details.push(
        ServiceDetails {
            name: app.to_owned(),
            namespace: namespace.to_owned(),
            istio_sidecar: true,
            labels: service_labels,
            ip,
            ports: vec!["http 9080".to_owned()],
            health,
            workloads: workloads
                .iter()
                .map(|(w, l)| ServiceWorkload {
                    name: w.clone(),
                    workload_type: WORKLOAD_TYPE.to_owned(),
                    labels: l.clone(),
                })
                .collect(),
            ..Default::default()
        }
        .with_counters(),
    );
}

type IstioTexts = (&'static str, IstioConfigObjectType, &'static str, String, String);

/// Adds bookinfo gateway, virtual service and destination rule to the namespace.\
/// **Note** that REST texts are stored in the dataset, UI and cluster texts are returned.
fn add_istio_configs(data: &mut Dataset, namespace: &'static str) -> Vec<IstioTexts> {
    let configs: [(IstioConfigObjectType, &'static str, &[(&str, &str)]); 3] = [
        (IstioConfigObjectType::Gateway, GATEWAY, &[("istio", "ingressgateway"), ("protocol", "HTTP")]),
        (IstioConfigObjectType::VirtualService, "bookinfo", &[("gateway", GATEWAY), ("host", "productpage")]),
        (IstioConfigObjectType::DestinationRule, "reviews", &[("host", "reviews"), ("subset", "v1")]),
    ];

    let mut texts = Vec::new();
    for (object_type, name, spec) in configs {
        let (ui_text, rest_text, cluster_text) = istio_texts(object_type, name, namespace, spec);
        data.istio_configs.push(IstioConfig {
            validation: Some(IstioConfigValidation::Valid),
            ..IstioConfig::new(name, namespace, object_type)
        });
        data.istio_config_details.push(IstioConfigDetails {
            name: name.to_owned(),
            namespace: namespace.to_owned(),
            object_type,
            text: rest_text,
            validation: Some(IstioConfigValidation::Valid),
            error_messages: Vec::new(),
        });
        texts.push((namespace, object_type, name, ui_text, cluster_text));
    }

    if let Some(productpage) = data.service_details_mut(namespace, "productpage") {
        productpage.virtual_services = vec![VirtualService {
            name: "bookinfo".to_owned(),
            namespace: namespace.to_owned(),
            hosts: vec!["*".to_owned()],
            gateways: vec![GATEWAY.to_owned()],
            validation: Some(IstioConfigValidation::Valid),
        }];
        productpage.virtual_services_number = 1;
    }

    if let Some(reviews) = data.service_details_mut(namespace, "reviews") {
        reviews.destination_rules = vec![DestinationRule {
            name: "reviews".to_owned(),
            namespace: namespace.to_owned(),
            host: "reviews".to_owned(),
            traffic_policy: String::new(),
            subsets: vec!["v1".to_owned(), "v2".to_owned(), "v3".to_owned()],
            validation: Some(IstioConfigValidation::Valid),
        }];
        reviews.destination_rules_number = 1;
    }

    texts
}

/// Returns the object as YAML shown by the UI editor, JSON returned by REST and YAML read from the cluster.
fn istio_texts(
    object_type: IstioConfigObjectType,
    name: &str,
    namespace: &str,
    spec: &[(&str, &str)],
) -> (String, String, String) {
    let api_version = format!("{}/v1beta1", object_type.api_group());
    let mut ui = format!("apiVersion: {api_version}\nkind: {object_type}\nmetadata:\n  name: {name}\n  namespace: {namespace}\n  resourceVersion: ~\nspec:\n");
    let mut cluster = format!(
        "apiVersion: {}/v1\nmetadata:\n  name: {name}\n  namespace: {namespace}\nspec:\n",
        object_type.api_group()
    );

    let mut spec_json = serde_json::Map::new();
    for (key, value) in spec {
        ui.push_str(&format!("  {key}: '{value}'\n"));
        cluster.push_str(&format!("  {key}: {value}\n"));
        spec_json.insert((*key).to_owned(), json!(value));
    }

    let rest = json!({
        "apiVersion": api_version,
        "kind": object_type.text(),
        "metadata": { "name": name, "namespace": namespace, "resourceVersion": null },
        "spec": spec_json,
    });

    (ui, serde_json::to_string_pretty(&rest).unwrap_or_default(), cluster)
}

fn set_text(data: &mut Dataset, namespace: &str, object_type: IstioConfigObjectType, name: &str, text: String) {
    if let Some(details) = data
        .istio_config_details
        .iter_mut()
        .find(|c| c.namespace == namespace && c.name == name && c.object_type == object_type)
    {
        details.text = text;
    }
}

fn overviews(data: &Dataset) -> Vec<Overview> {
    let mut overviews = Vec::new();
    for namespace in &data.namespaces {
        let counts = [
            (OverviewPageType::Apps, data.applications.iter().filter(|a| &a.namespace == namespace).count()),
            (OverviewPageType::Workloads, data.workloads.iter().filter(|w| &w.namespace == namespace).count()),
            (OverviewPageType::Services, data.services.iter().filter(|s| &s.namespace == namespace).count()),
        ];

        for (overview_type, items) in counts {
            overviews.push(Overview {
                healthy: items,
                ..Overview::new(overview_type, namespace.as_str(), items)
            });
        }
    }

    overviews
}

/// Returns what the cluster knows about the records.\
/// **Note** that the cluster has no health and validation and it also lists unmanaged entities.
fn cluster_view(rest: &Dataset) -> Dataset {
    let mut cluster = rest.clone();
    cluster.overviews.clear();
    cluster.namespaces.extend([UNMANAGED_NAMESPACE.to_owned(), "kube-system".to_owned()]);
    add_app(&mut cluster, UNMANAGED_NAMESPACE, "unmanaged", &["v1"]);

    for application in &mut cluster.applications {
        application.istio_sidecar = false;
        application.health = None;
    }

    for details in &mut cluster.application_details {
        details.health = None;
        for workload in &mut details.workloads {
            workload.istio_sidecar = false;
        }
    }

    for workload in &mut cluster.workloads {
        workload.istio_sidecar = false;
        workload.health = None;
    }

    for details in &mut cluster.workload_details {
        details.istio_sidecar = false;
        details.health = None;
    }

    for service in &mut cluster.services {
        service.istio_sidecar = false;
        service.health = None;
    }

    for config in &mut cluster.istio_configs {
        config.validation = None;
    }

    for details in &mut cluster.istio_config_details {
        details.validation = None;
    }

    cluster
}
