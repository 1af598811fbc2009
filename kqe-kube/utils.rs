use kqe_model::Labels;
use kube::ResourceExt;
use kube::api::DynamicObject;

#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Serializes kubernetes resource to YAML.
pub fn serialize_resource(resource: &mut DynamicObject) -> Result<String, serde_yaml::Error> {
    resource.managed_fields_mut().clear();
    let mut yaml = serde_yaml::to_string(resource)?;

    if let Some(index) = yaml.find("\n  managedFields: []\n") {
        yaml.replace_range(index + 1..index + 21, "");
    }

    Ok(yaml)
}

/// Returns `true` if all `selector` pairs are present in `labels`.\
/// **Note** that empty selector does not select anything.
pub fn selects(selector: &Labels, labels: &Labels) -> bool {
    !selector.is_empty() && selector.iter().all(|(k, v)| labels.get(k) == Some(v))
}

/// Returns `true` if the error means that the resource type is not served by the cluster.
pub fn is_not_served(error: &kube::Error) -> bool {
    matches!(error, kube::Error::Api(response) if response.code == 404)
}
