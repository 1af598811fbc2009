pub use self::client::{ClusterError, KubernetesClient, get_dynamic_api};
pub use self::istio::get_istio_resource;
pub use self::utils::{selects, serialize_resource};

pub mod convert;

mod client;
mod cluster;
mod istio;
mod utils;
