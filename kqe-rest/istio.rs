use kqe_model::{DestinationRule, IstioConfig, IstioConfigDetails, IstioConfigObjectType, IstioConfigValidation, VirtualService};
use serde_json::Value;

use crate::responses::ItemsOrList;

#[cfg(test)]
#[path = "./istio.tests.rs"]
mod istio_tests;

/// Response keys used by the Istio config endpoints for the object type.
struct IstioKeys {
    object_type: IstioConfigObjectType,
    list: &'static str,
    details: &'static str,
    validation: &'static str,
}

static ISTIO_KEYS: [IstioKeys; 11] = [
    keys(IstioConfigObjectType::AuthorizationPolicy, "authorizationPolicies", "authorizationPolicy"),
    keys(IstioConfigObjectType::DestinationRule, "destinationRules", "destinationRule"),
    keys(IstioConfigObjectType::EnvoyFilter, "envoyFilters", "envoyFilter"),
    keys(IstioConfigObjectType::Gateway, "gateways", "gateway"),
    keys(IstioConfigObjectType::PeerAuthentication, "peerAuthentications", "peerAuthentication"),
    keys(IstioConfigObjectType::RequestAuthentication, "requestAuthentications", "requestAuthentication"),
    keys(IstioConfigObjectType::Rule, "rules", "rule"),
    keys(IstioConfigObjectType::ServiceEntry, "serviceEntries", "serviceEntry"),
    keys(IstioConfigObjectType::Sidecar, "sidecars", "sidecar"),
    keys(IstioConfigObjectType::VirtualService, "virtualServices", "virtualService"),
    keys(IstioConfigObjectType::WorkloadEntry, "workloadEntries", "workloadEntry"),
];

const fn keys(object_type: IstioConfigObjectType, list: &'static str, details: &'static str) -> IstioKeys {
    IstioKeys {
        object_type,
        list,
        details,
        validation: validation_key(object_type),
    }
}

const fn validation_key(object_type: IstioConfigObjectType) -> &'static str {
    match object_type {
        IstioConfigObjectType::AuthorizationPolicy => "authorizationpolicy",
        IstioConfigObjectType::DestinationRule => "destinationrule",
        IstioConfigObjectType::EnvoyFilter => "envoyfilter",
        IstioConfigObjectType::Gateway => "gateway",
        IstioConfigObjectType::PeerAuthentication => "peerauthentication",
        IstioConfigObjectType::RequestAuthentication => "requestauthentication",
        IstioConfigObjectType::Rule => "rule",
        IstioConfigObjectType::ServiceEntry => "serviceentry",
        IstioConfigObjectType::Sidecar => "sidecar",
        IstioConfigObjectType::VirtualService => "virtualservice",
        IstioConfigObjectType::WorkloadEntry => "workloadentry",
    }
}

fn keys_for(object_type: IstioConfigObjectType) -> &'static IstioKeys {
    ISTIO_KEYS
        .iter()
        .find(|k| k.object_type == object_type)
        .unwrap_or(&ISTIO_KEYS[0])
}

/// Converts validation object (`valid` flag with `checks`) to the UI validation state.
pub fn parse_validation(validation: &Value) -> IstioConfigValidation {
    if !validation.is_object() {
        return IstioConfigValidation::NotAvailable;
    }

    if !validation["valid"].as_bool().unwrap_or(true) {
        return IstioConfigValidation::NotValid;
    }

    let has_warnings = validation["checks"]
        .as_array()
        .is_some_and(|checks| checks.iter().any(|c| c["severity"].as_str() == Some("warning")));

    if has_warnings {
        IstioConfigValidation::Warning
    } else {
        IstioConfigValidation::Valid
    }
}

/// Returns messages of all validation checks.
pub fn parse_error_messages(validation: &Value) -> Vec<String> {
    validation["checks"]
        .as_array()
        .map(|checks| {
            checks
                .iter()
                .filter_map(|c| c["message"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// Parses the namespace Istio config list response.
pub fn parse_istio_list(response: &Value, namespace: &str) -> Vec<IstioConfig> {
    let mut result = Vec::new();
    for entry in &ISTIO_KEYS {
        let Some(items) = items_of(&response[entry.list]) else {
            continue;
        };

        for item in &items {
            let name = object_name(item);
            let validation = &response["validations"][entry.validation][&name];
            result.push(IstioConfig {
                name,
                namespace: object_namespace(item).unwrap_or(namespace).to_owned(),
                object_type: entry.object_type,
                validation: Some(parse_validation(validation)),
            });
        }
    }

    result
}

/// Parses the Istio config details response.
pub fn parse_istio_details(
    response: &Value,
    namespace: &str,
    object_type: IstioConfigObjectType,
    name: &str,
) -> IstioConfigDetails {
    let object = &response[keys_for(object_type).details];
    let text = if object.is_null() {
        String::new()
    } else {
        serde_json::to_string_pretty(object).unwrap_or_default()
    };

    let object_name = object_name(object);
    IstioConfigDetails {
        name: if object_name.is_empty() { name.to_owned() } else { object_name },
        namespace: namespace.to_owned(),
        object_type,
        text,
        validation: Some(parse_validation(&response["validation"])),
        error_messages: parse_error_messages(&response["validation"]),
    }
}

/// Parses virtual service object.
pub fn parse_virtual_service(object: &Value, namespace: &str) -> VirtualService {
    VirtualService {
        name: object_name(object),
        namespace: object_namespace(object).unwrap_or(namespace).to_owned(),
        hosts: strings(&object["spec"]["hosts"]),
        gateways: strings(&object["spec"]["gateways"]),
        validation: None,
    }
}

/// Parses destination rule object.\
/// **Note** that traffic policy is kept as serialized JSON document.
pub fn parse_destination_rule(object: &Value, namespace: &str) -> DestinationRule {
    let spec = &object["spec"];
    DestinationRule {
        name: object_name(object),
        namespace: object_namespace(object).unwrap_or(namespace).to_owned(),
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

fn items_of(value: &Value) -> Option<Vec<Value>> {
    if value.is_null() {
        return None;
    }

    serde_json::from_value::<ItemsOrList>(value.clone()).ok().map(ItemsOrList::into_vec)
}

fn object_name(object: &Value) -> String {
    object["metadata"]["name"].as_str().unwrap_or_default().to_owned()
}

fn object_namespace(object: &Value) -> Option<&str> {
    object["metadata"]["namespace"].as_str()
}

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|v| v.iter().filter_map(|s| s.as_str().map(String::from)).collect())
        .unwrap_or_default()
}
