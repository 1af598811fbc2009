use super::*;

#[test]
fn partial_config_uses_defaults_test() {
    let yaml = "kiali:\n  url: https://kiali.apps.example.com\n  insecure: true\nrandom_seed: 42\n";
    let config: Config = serde_yaml::from_str(yaml).unwrap();

    assert_eq!("https://kiali.apps.example.com", config.kiali.url);
    assert!(config.kiali.insecure);
    assert_eq!(30, config.kiali.timeout_secs);
    assert_eq!(None, config.kiali.token);
    assert_eq!(Namespaces::default(), config.namespaces);
    assert_eq!(ClusterConfig::default(), config.cluster);
    assert_eq!(Some(42), config.random_seed);
}

#[test]
fn serialize_config_test() {
    let config = Config::default();
    let serialized = serde_yaml::to_string(&config).unwrap();
    let deserialized: Config = serde_yaml::from_str(&serialized).unwrap();

    assert_eq!(config, deserialized);
    assert!(!serialized.contains("password"));
}

#[tokio::test]
async fn load_or_create_writes_default_test() {
    let dir = std::env::temp_dir().join(format!("kqe-config-test-{}", std::process::id()));
    let path = dir.join("config.yaml");
    let _ = tokio::fs::remove_dir_all(&dir).await;

    let config = load_or_create_default(&path).await.unwrap();
    assert_eq!(Config::default(), config);
    assert!(path.exists());

    let loaded = Config::load(&path).await.unwrap();
    assert_eq!(config, loaded);

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
