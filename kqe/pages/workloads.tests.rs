use kqe_model::{Pod, Workload, WorkloadsPageSort};
use rstest::rstest;

use super::*;
use crate::testing::{BOOKINFO, BOOKINFO2, FakeCluster, FakePage, FakeRest, SharedDashboard, bookinfo, lock};

type Test = WorkloadsPageTest<FakePage<Workload>, FakeRest, FakeCluster>;

fn page_test(dashboard: &SharedDashboard) -> Test {
    WorkloadsPageTest::new(
        FakePage::new(dashboard),
        FakeRest::new(dashboard),
        FakeCluster::new(dashboard),
        Some(11),
    )
}

fn namespaces(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_owned()).collect()
}

fn workload_name(value: &str) -> Filter {
    Filter::new(WorkloadsPageFilter::WorkloadName.text(), value)
}

#[rstest]
#[case(&[BOOKINFO2], &["reviews"])]
#[case(&[BOOKINFO, BOOKINFO2], &["v1"])]
#[case(&[], &[])]
#[tokio::test]
async fn assert_all_items_test(#[case] selected: &[&str], #[case] names: &[&str]) {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);
    let filters = names.iter().map(|n| workload_name(n)).collect::<Vec<_>>();

    test.assert_all_items(&namespaces(selected), &filters, None, true)
        .await
        .unwrap();
}

#[tokio::test]
async fn assert_all_items_missing_in_cluster_test() {
    let dashboard = bookinfo().shared();
    lock(&dashboard)
        .cluster
        .workloads
        .retain(|w| !(w.name == "reviews-v3" && w.namespace == BOOKINFO));
    let mut test = page_test(&dashboard);

    let error = test
        .assert_all_items(&namespaces(&[BOOKINFO]), &[], None, false)
        .await
        .unwrap_err();

    assert_eq!(
        "Workloads: REST returns 6 items but cluster returns only 5",
        error.to_string()
    );
}

#[tokio::test]
async fn assert_sort_options_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_sort_options(&WorkloadsPageSort::texts()).await.unwrap();
    assert!(
        test.assert_sort_options(&["Namespace".to_owned(), "Application Name".to_owned()])
            .await
            .is_err()
    );
}

#[tokio::test]
async fn assert_filter_feature_random_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_filter_feature_random().await.unwrap();
}

#[rstest]
#[case("reviews-v2", BOOKINFO, true)]
#[case("productpage-v1", BOOKINFO2, false)]
#[case("istio-ingressgateway", "istio-system", false)]
#[tokio::test]
async fn assert_details_test(#[case] name: &str, #[case] namespace: &str, #[case] check_metrics: bool) {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_details(name, namespace, "Deployment", check_metrics, false)
        .await
        .unwrap();
}

#[tokio::test]
async fn assert_details_checks_traffic_test() {
    let dashboard = bookinfo().shared();
    lock(&dashboard)
        .outbound
        .insert("productpage".to_owned(), Vec::new());
    let mut test = page_test(&dashboard);

    let error = test
        .assert_details("reviews-v1", BOOKINFO, "Deployment", false, false)
        .await
        .unwrap_err();

    assert!(error.to_string().starts_with("reviews-v1 Workload HTTP not found in"));
}

#[tokio::test]
async fn assert_details_wrong_type_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    let error = test
        .assert_details("ratings-v1", BOOKINFO, "StatefulSet", false, false)
        .await
        .unwrap_err();

    assert_eq!("StatefulSet and Deployment are not equal", error.to_string());
}

#[tokio::test]
async fn assert_details_skips_pods_when_counts_differ_test() {
    let dashboard = bookinfo().shared();
    for details in &mut lock(&dashboard).ui.workload_details {
        if details.name == "details-v1" {
            details.pods.push(Pod {
                name: "details-v1-terminating".to_owned(),
                ..Default::default()
            });
        }
    }

    let mut test = page_test(&dashboard);

    test.assert_details("details-v1", BOOKINFO, "Deployment", true, false)
        .await
        .unwrap();
}

#[tokio::test]
async fn assert_details_pod_mismatch_test() {
    let dashboard = bookinfo().shared();
    for details in &mut lock(&dashboard).ui.workload_details {
        if details.name == "details-v1" {
            details.pods[0].status = Some("Pending".to_owned());
        }
    }

    let mut test = page_test(&dashboard);
    let error = test
        .assert_details("details-v1", BOOKINFO, "Deployment", false, false)
        .await
        .unwrap_err();

    assert!(error.to_string().starts_with("Workload pods:"));
}

#[tokio::test]
async fn assert_random_details_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_random_details(&namespaces(&[BOOKINFO2]), &[workload_name("reviews")], false)
        .await
        .unwrap();
}
