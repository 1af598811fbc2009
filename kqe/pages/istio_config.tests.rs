use kqe_model::IstioConfigPageSort;
use rstest::rstest;

use super::*;
use crate::testing::{BOOKINFO, BOOKINFO2, FakeCluster, FakePage, FakeRest, SharedDashboard, bookinfo, lock};
use crate::ui::FilterControls;

type Test = IstioConfigPageTest<FakePage<IstioConfig>, FakeRest, FakeCluster>;

fn page_test(dashboard: &SharedDashboard) -> Test {
    IstioConfigPageTest::new(
        FakePage::new(dashboard),
        FakeRest::new(dashboard),
        FakeCluster::new(dashboard),
        Some(5),
    )
}

fn namespaces(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_owned()).collect()
}

fn istio_type(object_type: IstioConfigObjectType) -> Filter {
    Filter::new(IstioConfigPageFilter::IstioType.text(), object_type.text())
}

#[tokio::test]
async fn assert_all_items_sorted_by_configuration_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);
    let sort = SortOption::ascending(IstioConfigPageSort::Configuration.text());

    test.assert_all_items(&namespaces(&[BOOKINFO2]), &[], Some(&sort), false)
        .await
        .unwrap();
}

#[rstest]
#[case(vec![istio_type(IstioConfigObjectType::Gateway)])]
#[case(vec![istio_type(IstioConfigObjectType::Gateway), istio_type(IstioConfigObjectType::DestinationRule)])]
#[case(vec![istio_type(IstioConfigObjectType::VirtualService), Filter::new("Istio Name", "book")])]
#[case(vec![istio_type(IstioConfigObjectType::Sidecar)])]
#[tokio::test]
async fn assert_all_items_filtered_by_type_test(#[case] filters: Vec<Filter>) {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_all_items(&namespaces(&[BOOKINFO, BOOKINFO2]), &filters, None, true)
        .await
        .unwrap();
}

#[tokio::test]
async fn assert_all_items_exact_cardinality_test() {
    let dashboard = bookinfo().shared();
    lock(&dashboard).cluster.istio_configs.push(IstioConfig::new(
        "ratings",
        BOOKINFO2,
        IstioConfigObjectType::Sidecar,
    ));
    let mut test = page_test(&dashboard);

    let error = test
        .assert_all_items(&namespaces(&[BOOKINFO2]), &[], None, false)
        .await
        .unwrap_err();

    assert_eq!(
        "Istio Config: REST returns 3 items but cluster returns 4",
        error.to_string()
    );
}

#[rstest]
#[case(IstioConfigValidation::Valid)]
#[case(IstioConfigValidation::NotValid)]
#[case(IstioConfigValidation::Warning)]
#[tokio::test]
async fn assert_all_items_filtered_by_config_test(#[case] validation: IstioConfigValidation) {
    let dashboard = bookinfo().shared();
    {
        let mut dashboard = lock(&dashboard);
        let [ui, rest, _] = dashboard.datasets_mut();
        for data in [ui, rest] {
            for config in data.istio_configs.iter_mut() {
                if config.namespace == BOOKINFO && config.object_type == IstioConfigObjectType::DestinationRule {
                    config.validation = Some(IstioConfigValidation::NotValid);
                }
            }
        }
    }
    let mut test = page_test(&dashboard);
    let filters = [Filter::new(IstioConfigPageFilter::Config.text(), validation.text())];

    test.assert_all_items(&namespaces(&[BOOKINFO]), &filters, None, true)
        .await
        .unwrap();
}

#[tokio::test]
async fn assert_filter_feature_random_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_filter_feature_random().await.unwrap();
}

#[tokio::test]
async fn istio_type_filter_values_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    let values = test
        .page
        .filter_values(IstioConfigPageFilter::IstioType.text())
        .await
        .unwrap();

    assert_eq!(IstioConfigObjectType::texts(), values);
}

#[rstest]
#[case("bookinfo-gateway", IstioConfigObjectType::Gateway, BOOKINFO)]
#[case("bookinfo", IstioConfigObjectType::VirtualService, BOOKINFO2)]
#[case("reviews", IstioConfigObjectType::DestinationRule, BOOKINFO)]
#[tokio::test]
async fn assert_details_test(#[case] name: &str, #[case] object_type: IstioConfigObjectType, #[case] namespace: &str) {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_details(name, object_type, namespace, &[]).await.unwrap();
}

#[tokio::test]
async fn assert_details_error_messages_test() {
    let dashboard = bookinfo().shared();
    let message = "KIA1107 Subset not found".to_owned();
    for details in &mut lock(&dashboard).rest.istio_config_details {
        if details.name == "reviews" {
            details.error_messages.push(message.clone());
        }
    }

    let mut test = page_test(&dashboard);
    test.assert_details("reviews", IstioConfigObjectType::DestinationRule, BOOKINFO, std::slice::from_ref(&message))
        .await
        .unwrap();

    let error = test
        .assert_details(
            "reviews",
            IstioConfigObjectType::DestinationRule,
            BOOKINFO,
            &["KIA0101 No matching workload".to_owned()],
        )
        .await
        .unwrap_err();
    assert!(error.to_string().starts_with("Error message 'KIA0101 No matching workload' is not in"));
}

#[tokio::test]
async fn assert_details_unknown_validation_test() {
    let dashboard = bookinfo().shared();
    {
        let mut dashboard = lock(&dashboard);
        for details in &mut dashboard.rest.istio_config_details {
            details.validation = Some(IstioConfigValidation::NotAvailable);
        }

        for details in &mut dashboard.ui.istio_config_details {
            details.validation = Some(IstioConfigValidation::NotValid);
        }
    }

    let mut test = page_test(&dashboard);

    test.assert_details("bookinfo-gateway", IstioConfigObjectType::Gateway, BOOKINFO, &[])
        .await
        .unwrap();
}

#[tokio::test]
async fn assert_details_validation_mismatch_test() {
    let dashboard = bookinfo().shared();
    for details in &mut lock(&dashboard).ui.istio_config_details {
        details.validation = Some(IstioConfigValidation::Warning);
    }

    let mut test = page_test(&dashboard);
    let error = test
        .assert_details("bookinfo-gateway", IstioConfigObjectType::Gateway, BOOKINFO, &[])
        .await
        .unwrap_err();

    assert!(error.to_string().starts_with("Istio object UI"));
}

#[tokio::test]
async fn assert_details_text_mismatch_test() {
    let dashboard = bookinfo().shared();
    for details in &mut lock(&dashboard).cluster.istio_config_details {
        if details.name == "reviews" {
            details.text = details.text.replace("host: reviews", "host: ratings");
        }
    }

    let mut test = page_test(&dashboard);
    let error = test
        .assert_details("reviews", IstioConfigObjectType::DestinationRule, BOOKINFO, &[])
        .await
        .unwrap_err();

    assert!(error.to_string().starts_with("host: reviews not found in cluster text"));
}

#[tokio::test]
async fn assert_random_details_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_random_details(&namespaces(&[BOOKINFO]), &[]).await.unwrap();
}

#[tokio::test]
async fn delete_istio_config_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.delete_istio_config("bookinfo-gateway", IstioConfigObjectType::Gateway, BOOKINFO)
        .await
        .unwrap();

    assert!(
        lock(&dashboard)
            .cluster
            .istio_details(BOOKINFO, IstioConfigObjectType::Gateway, "bookinfo-gateway")
            .is_none()
    );
    test.assert_all_items(&namespaces(&[BOOKINFO]), &[], None, true)
        .await
        .unwrap();
}
