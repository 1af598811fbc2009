use kqe_common::is_sublist;
use kqe_config::Config;
use kqe_model::{ClusterClient, RestClient};

use super::*;
use crate::reconcile::ensure_all_found;

async fn live_session() -> Session {
    let config = Config::load_or_create().await.expect("config should load");
    Session::connect(config).await.expect("session should connect")
}

#[tokio::test]
#[ignore = "requires a running dashboard and cluster"]
async fn rest_namespaces_exist_in_cluster_test() {
    let session = live_session().await;

    let rest = session.rest.namespace_list().await.unwrap();
    let cluster = session.cluster.namespace_list().await.unwrap();

    assert!(is_sublist(&rest, &cluster));
    for namespace in session.namespaces() {
        assert!(rest.contains(&namespace), "{namespace} is not visible to the dashboard");
    }
}

#[tokio::test]
#[ignore = "requires a running dashboard and cluster"]
async fn rest_istio_configs_exist_in_cluster_test() {
    let session = live_session().await;
    let namespaces = [session.config.namespaces.bookinfo.clone()];

    let rest = session.rest.istio_config_list(&namespaces, &[]).await.unwrap();
    let cluster = session.cluster.istio_config_list(&namespaces, &[]).await.unwrap();

    assert!(ensure_all_found("Istio Config", "cluster", &rest, &cluster, false).is_ok());
}
