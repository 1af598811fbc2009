use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[cfg(test)]
#[path = "./config.tests.rs"]
mod config_tests;

pub const APP_NAME: &str = "kqe";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CONFIG_ENV: &str = "KQE_CONFIG";

/// Possible errors from configuration files manipulation.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Cannot read/write configuration file.
    #[error("cannot read/write configuration file")]
    IoError(#[from] std::io::Error),

    /// Cannot serialize/deserialize configuration.
    #[error("cannot serialize/deserialize configuration")]
    SerializationError(#[from] serde_yaml::Error),
}

/// Dashboard REST API connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KialiConfig {
    #[serde(default = "default_kiali_url")]
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for KialiConfig {
    fn default() -> Self {
        Self {
            url: default_kiali_url(),
            username: None,
            password: None,
            token: None,
            insecure: false,
            timeout_secs: default_timeout(),
        }
    }
}

/// Kubernetes API connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ClusterConfig {
    /// Path to the kubeconfig file (defaults to `$HOME/.kube/config`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kube_config: Option<String>,

    /// Context to use from the kubeconfig file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Namespaces the scenarios run against.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Namespaces {
    pub bookinfo: String,
    pub bookinfo2: String,
    pub istio_system: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            bookinfo: "bookinfo".to_owned(),
            bookinfo2: "bookinfo2".to_owned(),
            istio_system: "istio-system".to_owned(),
        }
    }
}

/// Harness configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub kiali: KialiConfig,

    #[serde(default)]
    pub cluster: ClusterConfig,

    #[serde(default)]
    pub namespaces: Namespaces,

    /// Seed for the randomized scenarios, a new one is generated if not set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
}

fn default_kiali_url() -> String {
    "http://localhost:20001/kiali".to_owned()
}

fn default_timeout() -> u64 {
    30
}

impl Config {
    /// Returns the configuration path: `$KQE_CONFIG` or `HOME/.kqe/config.yaml`.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return PathBuf::from(path);
        }

        match std::env::home_dir() {
            Some(path) => path.join(format!(".{APP_NAME}")).join("config.yaml"),
            None => PathBuf::from("config.yaml"),
        }
    }

    /// Loads the configuration from a file or creates a default one if the file does not exist.
    pub async fn load_or_create() -> Result<Self, ConfigError> {
        load_or_create_default(&Self::default_path()).await
    }

    /// Loads configuration from the specified file.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut file = File::open(path).await?;

        let mut config_str = String::new();
        file.read_to_string(&mut config_str).await?;

        Ok(serde_yaml::from_str::<Config>(&config_str)?)
    }

    /// Saves configuration to the specified file.
    pub async fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let config_str = serde_yaml::to_string(self)?;

        let mut file = File::create(path).await?;
        file.write_all(config_str.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}

async fn load_or_create_default(path: &Path) -> Result<Config, ConfigError> {
    match Config::load(path).await {
        Ok(configuration) => Ok(configuration),
        Err(ConfigError::SerializationError(error)) => {
            tracing::error!("Cannot deserialize config: {}", error);
            Ok(Config::default())
        },
        Err(error) => {
            tracing::warn!("Cannot load config: {}, creating default one", error);
            let configuration = Config::default();
            configuration.save(path).await?;
            Ok(configuration)
        },
    }
}
