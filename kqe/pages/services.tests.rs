use kqe_model::{IstioConfigObjectType, RoutingWizardLoadBalancer, RoutingWizardTls, Service, ServicesPageSort};
use rstest::rstest;

use super::*;
use crate::testing::{BOOKINFO, BOOKINFO2, FakeCluster, FakePage, FakeRest, SharedDashboard, bookinfo, lock};

type Test = ServicesPageTest<FakePage<Service>, FakeRest, FakeCluster>;

fn page_test(dashboard: &SharedDashboard) -> Test {
    ServicesPageTest::new(
        FakePage::new(dashboard),
        FakeRest::new(dashboard),
        FakeCluster::new(dashboard),
        Some(3),
    )
}

fn namespaces(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_owned()).collect()
}

#[rstest]
#[case(&[BOOKINFO], None)]
#[case(&[BOOKINFO, BOOKINFO2], Some(SortOption::ascending(ServicesPageSort::Configuration.text())))]
#[case(&[BOOKINFO2], Some(SortOption::descending(ServicesPageSort::ServiceName.text())))]
#[tokio::test]
async fn assert_all_items_test(#[case] selected: &[&str], #[case] sort: Option<SortOption>) {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_all_items(&namespaces(selected), &[], sort.as_ref(), false)
        .await
        .unwrap();
}

#[tokio::test]
async fn assert_all_items_unknown_sort_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);
    let sort = SortOption::ascending("Istio Type");

    let result = test.assert_all_items(&namespaces(&[BOOKINFO]), &[], Some(&sort), false).await;

    assert!(matches!(result, Err(CheckError::UiError(_))));
}

#[tokio::test]
async fn assert_filter_feature_random_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_filter_feature_random().await.unwrap();
}

#[rstest]
#[case("reviews", BOOKINFO)]
#[case("productpage", BOOKINFO2)]
#[case("details", BOOKINFO)]
#[tokio::test]
async fn assert_details_test(#[case] name: &str, #[case] namespace: &str) {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_details(name, namespace, true, false).await.unwrap();
}

#[tokio::test]
async fn assert_details_sidecar_mismatch_test() {
    let dashboard = bookinfo().shared();
    for details in &mut lock(&dashboard).ui.service_details {
        if details.name == "ratings" {
            details.istio_sidecar = false;
        }
    }

    let mut test = page_test(&dashboard);
    let error = test.assert_details("ratings", BOOKINFO, false, false).await.unwrap_err();

    assert_eq!("Service ratings sidecar differs: UI false, REST true", error.to_string());
}

#[tokio::test]
async fn assert_details_virtual_service_overview_mismatch_test() {
    let dashboard = bookinfo().shared();
    for details in &mut lock(&dashboard).ui.service_details {
        if details.name == "productpage" {
            details.virtual_services[0].hosts = vec!["productpage".to_owned()];
        }
    }

    let mut test = page_test(&dashboard);
    let error = test
        .assert_details("productpage", BOOKINFO, false, false)
        .await
        .unwrap_err();

    assert!(error.to_string().starts_with("VS overview"));
}

#[tokio::test]
async fn assert_random_details_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_random_details(&namespaces(&[BOOKINFO, BOOKINFO2]), &[], false)
        .await
        .unwrap();
}

#[tokio::test]
async fn weighted_routing_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.routing_create("ratings", BOOKINFO, RoutingWizardType::CreateWeightedRouting, &RoutingOptions::default())
        .await
        .unwrap();

    let rest_configs = FakeRest::new(&dashboard)
        .istio_config_list(&namespaces(&[BOOKINFO]), &["ratings".to_owned()])
        .await
        .unwrap();
    assert_eq!(2, rest_configs.len());

    let options = RoutingOptions {
        tls: Some(RoutingWizardTls::Simple),
        load_balancer: false,
        load_balancer_type: Some(RoutingWizardLoadBalancer::LeastConn),
        gateway: true,
        include_mesh_gateway: false,
    };
    test.routing_update("ratings", BOOKINFO, RoutingWizardType::UpdateWeightedRouting, &options)
        .await
        .unwrap();

    test.routing_delete("ratings", BOOKINFO).await.unwrap();

    let rest_configs = FakeRest::new(&dashboard)
        .istio_config_list(&namespaces(&[BOOKINFO]), &["ratings".to_owned()])
        .await
        .unwrap();
    assert!(rest_configs.is_empty());
}

#[rstest]
#[case(RoutingWizardType::CreateMatchingRouting, RoutingWizardType::UpdateMatchingRouting)]
#[case(RoutingWizardType::SuspendTraffic, RoutingWizardType::UpdateSuspendedTraffic)]
#[tokio::test]
async fn routing_create_and_update_test(#[case] create: RoutingWizardType, #[case] update: RoutingWizardType) {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);
    let options = RoutingOptions {
        gateway: false,
        ..Default::default()
    };

    test.routing_create("details", BOOKINFO2, create, &options).await.unwrap();
    test.routing_update("details", BOOKINFO2, update, &options).await.unwrap();
    test.routing_delete("details", BOOKINFO2).await.unwrap();
}

#[tokio::test]
async fn routing_create_replaces_existing_routing_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);
    let options = RoutingOptions::default();

    test.routing_create("ratings", BOOKINFO, RoutingWizardType::CreateWeightedRouting, &options)
        .await
        .unwrap();
    test.routing_create("ratings", BOOKINFO, RoutingWizardType::SuspendTraffic, &options)
        .await
        .unwrap();

    let details = lock(&dashboard).rest.istio_details(BOOKINFO, IstioConfigObjectType::VirtualService, "ratings");
    assert!(details.is_some());
}

#[tokio::test]
async fn routing_update_without_routing_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    let error = test
        .routing_update(
            "ratings",
            BOOKINFO,
            RoutingWizardType::UpdateWeightedRouting,
            &RoutingOptions::default(),
        )
        .await
        .unwrap_err();

    assert_eq!("Action 'Update Weighted Routing' is disabled", error.to_string());
}

#[rstest]
#[case(RoutingWizardType::UpdateWeightedRouting)]
#[case(RoutingWizardType::DeleteAllTrafficRouting)]
#[tokio::test]
async fn routing_create_rejects_other_actions_test(#[case] action: RoutingWizardType) {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    let error = test
        .routing_create("ratings", BOOKINFO, action, &RoutingOptions::default())
        .await
        .unwrap_err();

    assert_eq!(format!("'{action}' does not create routing"), error.to_string());
}

#[tokio::test]
async fn routing_delete_without_routing_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    let error = test.routing_delete("reviews", BOOKINFO).await.unwrap_err();

    assert_eq!("Routing of service reviews was not deleted", error.to_string());
}

#[tokio::test]
async fn assert_traces_tab_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);
    test.load_details_page("productpage", BOOKINFO, false).await.unwrap();

    test.assert_traces_tab().await.unwrap();

    lock(&dashboard).traces.login_displayed = true;
    let error = test.assert_traces_tab().await.unwrap_err();
    assert_eq!("Login should not be displayed", error.to_string());
}
