pub use self::config::{APP_NAME, APP_VERSION, CONFIG_ENV, ClusterConfig, Config, ConfigError, KialiConfig, Namespaces};

mod config;
