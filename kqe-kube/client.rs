use kqe_config::ClusterConfig;
use kube::{
    Api, Client, Config,
    api::{ApiResource, DynamicObject},
    config::{KubeConfigOptions, Kubeconfig},
};
use std::ops::Deref;
use tracing::info;

/// Possible errors from the kubernetes cluster client.
#[derive(thiserror::Error, Debug)]
pub enum ClusterError {
    /// Failed to process kube configuration.
    #[error("failed to process kube configuration")]
    KubeconfigError(#[from] kube::config::KubeconfigError),

    /// Failed to build kubernetes client or to query the cluster.
    #[error("kubernetes request failed")]
    KubeError(#[from] kube::Error),

    /// Failed to serialize kubernetes resource.
    #[error("failed to serialize kubernetes resource")]
    SerializationError(#[from] serde_yaml::Error),

    /// Workload type is not known to the cluster client.
    #[error("unsupported workload type '{0}'")]
    UnsupportedWorkloadType(String),
}

/// Wrapper for the kubernetes [`Client`].
#[derive(Clone)]
pub struct KubernetesClient {
    /// Kubernetes client.
    client: Client,

    /// Context used by the kubernetes client.
    context: String,

    /// Kubernetes API version that the client is connected to.
    k8s_version: String,
}

impl KubernetesClient {
    /// Creates new [`KubernetesClient`] instance.
    pub async fn new(config: &ClusterConfig) -> Result<Self, ClusterError> {
        let (client, context) = get_client(config).await?;
        let k8s_version = client.apiserver_version().await?.git_version;

        info!("Connected to cluster {} using context '{}'", k8s_version, context);

        Ok(Self {
            client,
            context,
            k8s_version,
        })
    }

    /// Returns cloned kubernetes client that can be consumed.
    pub fn get_client(&self) -> Client {
        self.client.clone()
    }

    /// Returns [`Api`] for the currently held kubernetes client.
    pub fn get_api(&self, ar: &ApiResource, ns: Option<&str>) -> Api<DynamicObject> {
        get_dynamic_api(ar, self.client.clone(), ns)
    }

    /// Returns kube context name for the currently held kubernetes client.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Returns kubernetes API version.
    pub fn k8s_version(&self) -> &str {
        &self.k8s_version
    }
}

impl Deref for KubernetesClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

/// Gets dynamic api client for given namespaced `resource` and `namespace`.\
/// **Note** that `None` namespace means all namespaces.
pub fn get_dynamic_api(ar: &ApiResource, client: Client, ns: Option<&str>) -> Api<DynamicObject> {
    match ns {
        Some(namespace) => Api::namespaced_with(client, namespace, ar),
        None => Api::all_with(client, ar),
    }
}

/// Creates kubernetes client and returns it together with used context.
async fn get_client(config: &ClusterConfig) -> Result<(Client, String), ClusterError> {
    if config.kube_config.is_none() && config.context.is_none() {
        let context = Kubeconfig::read()
            .ok()
            .and_then(|c| c.current_context)
            .unwrap_or_default();
        return Ok((Client::try_default().await?, context));
    }

    let kube_config = match &config.kube_config {
        Some(path) => Kubeconfig::read_from(path)?,
        None => Kubeconfig::read()?,
    };
    let context = config
        .context
        .clone()
        .or_else(|| kube_config.current_context.clone())
        .unwrap_or_default();

    let kube_config_options = KubeConfigOptions {
        context: config.context.clone(),
        user: None,
        cluster: None,
    };
    let config = Config::from_custom_kubeconfig(kube_config, &kube_config_options).await?;

    Ok((Client::try_from(config)?, context))
}
