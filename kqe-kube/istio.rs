use k8s_openapi::serde_json::Value;
use kqe_model::{DestinationRule, IstioConfig, IstioConfigObjectType, VirtualService};
use kube::{
    ResourceExt,
    api::{ApiResource, DynamicObject},
    core::GroupVersionKind,
};

#[cfg(test)]
#[path = "./istio.tests.rs"]
mod istio_tests;

/// Returns API version served for the Istio object type.
pub const fn api_version(object_type: IstioConfigObjectType) -> &'static str {
    match object_type {
        IstioConfigObjectType::Rule => "v1alpha2",
        _ => "v1beta1",
    }
}

/// Builds [`ApiResource`] for the Istio object type.
pub fn get_istio_resource(object_type: IstioConfigObjectType) -> ApiResource {
    let gvk = GroupVersionKind::gvk(object_type.api_group(), api_version(object_type), object_type.text());
    ApiResource::from_gvk_with_plural(&gvk, object_type.rest_name())
}

/// Converts dynamic Istio object to the list record.
pub fn istio_config(object: &DynamicObject, object_type: IstioConfigObjectType) -> IstioConfig {
    IstioConfig::new(
        object.name_any(),
        object.namespace().unwrap_or_default(),
        object_type,
    )
}

/// Converts dynamic object to [`VirtualService`].
pub fn virtual_service(object: &DynamicObject) -> VirtualService {
    let spec = &object.data["spec"];
    VirtualService {
        name: object.name_any(),
        namespace: object.namespace().unwrap_or_default(),
        hosts: strings(&spec["hosts"]),
        gateways: strings(&spec["gateways"]),
        validation: None,
    }
}

/// Converts dynamic object to [`DestinationRule`].
pub fn destination_rule(object: &DynamicObject) -> DestinationRule {
    let spec = &object.data["spec"];
    DestinationRule {
        name: object.name_any(),
        namespace: object.namespace().unwrap_or_default(),
        host: spec["host"].as_str().unwrap_or_default().to_owned(),
        traffic_policy: if spec["trafficPolicy"].is_null() {
            String::new()
        } else {
            spec["trafficPolicy"].to_string()
        },
        subsets: spec["subsets"]
            .as_array()
            .map(|s| s.iter().filter_map(|s| s["name"].as_str().map(String::from)).collect())
            .unwrap_or_default(),
        validation: None,
    }
}

/// Returns `true` if virtual service routes traffic for the service.\
/// **Note** that both `hosts` and HTTP route destinations are checked.
pub fn virtual_service_targets(object: &DynamicObject, service: &str, namespace: &str) -> bool {
    let spec = &object.data["spec"];
    if strings(&spec["hosts"]).iter().any(|h| is_service_host(h, service, namespace)) {
        return true;
    }

    spec["http"].as_array().is_some_and(|routes| {
        routes.iter().any(|r| {
            r["route"].as_array().is_some_and(|destinations| {
                destinations
                    .iter()
                    .filter_map(|d| d["destination"]["host"].as_str())
                    .any(|h| is_service_host(h, service, namespace))
            })
        })
    })
}

/// Returns `true` if destination rule applies to the service.
pub fn destination_rule_targets(object: &DynamicObject, service: &str, namespace: &str) -> bool {
    object.data["spec"]["host"]
        .as_str()
        .is_some_and(|h| is_service_host(h, service, namespace))
}

/// Returns `true` if `host` is a short or fully qualified name of the service.
pub fn is_service_host(host: &str, service: &str, namespace: &str) -> bool {
    let qualified = format!("{service}.{namespace}");
    host == service || host == qualified || host.strip_prefix(&qualified).is_some_and(|rest| rest.starts_with('.'))
}

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|v| v.iter().filter_map(|s| s.as_str().map(String::from)).collect())
        .unwrap_or_default()
}
