use kqe_model::Overview;
use rstest::rstest;

use super::*;
use crate::CheckError;
use crate::testing::{BOOKINFO, BOOKINFO2, FakeCluster, FakePage, FakeRest, ISTIO_SYSTEM, SharedDashboard, bookinfo, lock};

type Test = OverviewPageTest<FakePage<Overview>, FakeRest, FakeCluster>;

fn page_test(dashboard: &SharedDashboard) -> Test {
    OverviewPageTest::new(
        FakePage::new(dashboard),
        FakeRest::new(dashboard),
        FakeCluster::new(dashboard),
        None,
    )
}

fn name(value: &str) -> Filter {
    Filter::new(OverviewPageFilter::Name.text(), value)
}

#[tokio::test]
async fn assert_type_options_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_type_options().await.unwrap();
}

#[rstest]
#[case(OverviewPageType::Apps, &[BOOKINFO])]
#[case(OverviewPageType::Workloads, &[BOOKINFO, ISTIO_SYSTEM])]
#[case(OverviewPageType::Services, &[BOOKINFO, BOOKINFO2, ISTIO_SYSTEM])]
#[tokio::test]
async fn assert_all_items_test(#[case] overview_type: OverviewPageType, #[case] namespaces: &[&str]) {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);
    let filters = namespaces.iter().map(|n| name(n)).collect::<Vec<_>>();

    test.assert_all_items(&filters, overview_type, true).await.unwrap();
}

#[tokio::test]
async fn assert_all_items_count_mismatch_test() {
    let dashboard = bookinfo().shared();
    for overview in &mut lock(&dashboard).ui.overviews {
        if overview.namespace == BOOKINFO2 && overview.overview_type == OverviewPageType::Workloads {
            overview.items = 5;
        }
    }

    let mut test = page_test(&dashboard);
    let error = test
        .assert_all_items(&[name(BOOKINFO2)], OverviewPageType::Workloads, true)
        .await
        .unwrap_err();

    assert!(error.to_string().starts_with("Overview: Overview"));
    assert!(error.to_string().contains("not found in REST"));
}

#[tokio::test]
async fn ui_namespaces_from_name_filter_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    assert_eq!(
        vec![BOOKINFO.to_owned(), BOOKINFO2.to_owned(), ISTIO_SYSTEM.to_owned()],
        test.ui_namespaces().await.unwrap()
    );
}

#[tokio::test]
async fn not_implemented_items_check_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    let result = ItemsCheck::assert_all_items(&mut test, &[], &[], None, false).await;
    assert!(matches!(result, Err(CheckError::NotImplemented("assert_all_items"))));

    let result = test.assert_filter_feature_random().await;
    assert!(matches!(result, Err(CheckError::NotImplemented("get_additional_filters"))));
}
