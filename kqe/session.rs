use anyhow::{Context, Result};
use kqe_config::{APP_NAME, Config};
use kqe_kube::KubernetesClient;
use kqe_rest::KialiClient;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

#[cfg(test)]
#[path = "./session.tests.rs"]
mod session_tests;

/// Connected data sources shared by all scenarios of a single run.
pub struct Session {
    pub config: Config,
    pub rest: KialiClient,
    pub cluster: KubernetesClient,
    _guard: Option<WorkerGuard>,
}

impl Session {
    /// Initializes logging, loads configuration and connects to the dashboard and the cluster.
    pub async fn start() -> Result<Self> {
        let guard = kqe_common::logging::initialize(APP_NAME)?;
        let config = Config::load_or_create()
            .await
            .context("cannot load harness configuration")?;

        let mut session = Self::connect(config).await?;
        session._guard = Some(guard);

        Ok(session)
    }

    /// Connects to the dashboard and the cluster described by the `config`.\
    /// **Note** that logging is not initialized here.
    pub async fn connect(config: Config) -> Result<Self> {
        let rest = KialiClient::new(&config.kiali).context("cannot create dashboard client")?;
        let cluster = KubernetesClient::new(&config.cluster)
            .await
            .context("cannot connect to the cluster")?;

        info!(
            "Session started for {} against cluster {} (context '{}')",
            config.kiali.url,
            cluster.k8s_version(),
            cluster.context()
        );

        Ok(Self {
            config,
            rest,
            cluster,
            _guard: None,
        })
    }

    /// Returns the seed for randomized scenarios.
    pub fn random_seed(&self) -> Option<u64> {
        self.config.random_seed
    }

    /// Returns namespaces the scenarios run against in the order: bookinfo, bookinfo2, istio-system.
    pub fn namespaces(&self) -> [String; 3] {
        let namespaces = &self.config.namespaces;
        [
            namespaces.bookinfo.clone(),
            namespaces.bookinfo2.clone(),
            namespaces.istio_system.clone(),
        ]
    }
}
