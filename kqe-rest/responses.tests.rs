use serde_json::json;

use super::*;

#[test]
fn app_list_test() {
    let response: AppListResponse = serde_json::from_value(json!({
        "namespace": { "name": "bookinfo" },
        "applications": [
            { "name": "details", "istioSidecar": true, "labels": { "app": "details", "version": "v1" } },
            { "name": "mongodb", "istioSidecar": false }
        ]
    }))
    .unwrap();

    let apps = response
        .applications
        .into_iter()
        .map(|a| a.into_record("bookinfo"))
        .collect::<Vec<_>>();

    assert_eq!(2, apps.len());
    assert_eq!("details", apps[0].name);
    assert_eq!("bookinfo", apps[0].namespace);
    assert!(apps[0].istio_sidecar);
    assert_eq!(Some("v1"), apps[0].labels.get("version").map(String::as_str));
    assert!(!apps[1].istio_sidecar);
    assert!(apps[1].labels.is_empty());
}

#[test]
fn workload_details_test() {
    let response: WorkloadDetailsResponse = serde_json::from_value(json!({
        "name": "reviews-v2",
        "type": "Deployment",
        "istioSidecar": true,
        "labels": { "app": "reviews", "version": "v2" },
        "pods": [{
            "name": "reviews-v2-5b64f47978-xn7l5",
            "status": "Running",
            "labels": { "app": "reviews" },
            "istioContainers": [{ "name": "istio-proxy" }],
            "createdBy": [{ "name": "reviews-v2-5b64f47978", "kind": "ReplicaSet" }]
        }],
        "services": [{ "name": "reviews", "labels": { "app": "reviews" }, "ip": "172.30.0.12" }]
    }))
    .unwrap();

    let details = response.into_record("bookinfo");

    assert_eq!("Deployment", details.workload_type);
    assert_eq!(1, details.pods_number());
    assert!(details.pods[0].istio_sidecar);
    assert_eq!(vec!["reviews-v2-5b64f47978".to_owned()], details.pods[0].created_by);
    assert_eq!(1, details.services_number());
    assert_eq!("bookinfo", details.services[0].namespace);
    assert_eq!(Some("172.30.0.12".to_owned()), details.services[0].ip);
}

#[test]
fn service_details_accepts_both_list_shapes_test() {
    let plain: ServiceDetailsResponse = serde_json::from_value(json!({
        "service": { "name": "reviews", "ports": [{ "name": "http", "protocol": "TCP", "port": 9080 }] },
        "istioSidecar": true,
        "workloads": [{ "name": "reviews-v1", "type": "Deployment" }],
        "virtualServices": [{ "metadata": { "name": "reviews" }, "spec": { "hosts": ["reviews"], "gateways": ["mesh"] } }],
        "destinationRules": { "items": [{
            "metadata": { "name": "reviews", "namespace": "bookinfo" },
            "spec": {
                "host": "reviews",
                "trafficPolicy": { "loadBalancer": { "simple": "ROUND_ROBIN" }, "tls": { "mode": "ISTIO_MUTUAL" } },
                "subsets": [{ "name": "v1" }, { "name": "v2" }]
            }
        }] }
    }))
    .unwrap();

    let details = plain.into_record("bookinfo");

    assert_eq!(vec!["9080/TCP http".to_owned()], details.ports);
    assert_eq!(1, details.workloads_number);
    assert_eq!(1, details.virtual_services_number);
    assert_eq!(vec!["mesh".to_owned()], details.virtual_services[0].gateways);
    assert_eq!(1, details.destination_rules_number);
    assert_eq!(vec!["v1".to_owned(), "v2".to_owned()], details.destination_rules[0].subsets);
    assert!(details.destination_rules[0].traffic_policy.to_lowercase().contains("round_robin"));
    assert!(details.destination_rules[0].traffic_policy.to_lowercase().contains("istio_mutual"));
}

#[test]
fn overview_counts_health_test() {
    let health = json!({
        "details": { "workloadStatuses": [{ "name": "details-v1", "desiredReplicas": 1, "availableReplicas": 1 }] },
        "reviews": { "workloadStatuses": [
            { "name": "reviews-v1", "desiredReplicas": 2, "availableReplicas": 1 },
            { "name": "reviews-v2", "desiredReplicas": 1, "availableReplicas": 1 }
        ] },
        "ratings": { "workloadStatuses": [{ "name": "ratings-v1", "desiredReplicas": 1, "availableReplicas": 0 }] },
        "productpage": { "requests": {} }
    });

    let overview = parse_overview("bookinfo", OverviewPageType::Apps, &health);

    assert_eq!(4, overview.items);
    assert_eq!(1, overview.healthy);
    assert_eq!(1, overview.degraded);
    assert_eq!(1, overview.failure);
    assert_eq!(1, overview.na);
}

#[test]
fn overview_without_items_test() {
    let overview = parse_overview("empty", OverviewPageType::Services, &json!({}));

    assert_eq!(0, overview.items);
    assert_eq!(0, overview.healthy + overview.degraded + overview.failure + overview.na);
}

#[test]
fn service_port_text_test() {
    let port = ServicePort {
        name: String::new(),
        protocol: "TCP".to_owned(),
        port: 27017,
    };

    assert_eq!("27017/TCP", port.to_text());
    assert_eq!(Health::NotAvailable, item_health(&json!({ "requests": {} })));
}
