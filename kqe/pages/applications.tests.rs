use kqe_model::{Application, ApplicationsPageSort};
use rstest::rstest;

use super::*;
use crate::testing::{BOOKINFO, BOOKINFO2, FakeCluster, FakePage, FakeRest, SharedDashboard, bookinfo, lock};
use crate::ui::{FilterControls, NamespaceControls};

type Test = ApplicationsPageTest<FakePage<Application>, FakeRest, FakeCluster>;

fn page_test(dashboard: &SharedDashboard) -> Test {
    ApplicationsPageTest::new(
        FakePage::new(dashboard),
        FakeRest::new(dashboard),
        FakeCluster::new(dashboard),
        Some(7),
    )
}

fn namespaces(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_owned()).collect()
}

fn app_name(value: &str) -> Filter {
    Filter::new(ApplicationsPageFilter::AppName.text(), value)
}

#[rstest]
#[case(&[BOOKINFO], &[])]
#[case(&[BOOKINFO, BOOKINFO2], &["reviews"])]
#[case(&[BOOKINFO2], &["details", "ratings"])]
#[case(&[], &[])]
#[tokio::test]
async fn assert_all_items_test(#[case] selected: &[&str], #[case] names: &[&str]) {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);
    let filters = names.iter().map(|n| app_name(n)).collect::<Vec<_>>();

    test.assert_all_items(&namespaces(selected), &filters, None, false)
        .await
        .unwrap();
}

#[tokio::test]
async fn assert_all_items_sorted_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);
    let sort = SortOption::descending(ApplicationsPageSort::AppName.text());

    test.assert_all_items(&namespaces(&[BOOKINFO]), &[], Some(&sort), true)
        .await
        .unwrap();
}

#[tokio::test]
async fn assert_all_items_missing_in_ui_test() {
    let dashboard = bookinfo().shared();
    lock(&dashboard)
        .ui
        .applications
        .retain(|a| !(a.name == "ratings" && a.namespace == BOOKINFO));
    let mut test = page_test(&dashboard);

    let error = test
        .assert_all_items(&namespaces(&[BOOKINFO]), &[], None, false)
        .await
        .unwrap_err();

    assert!(error.is_mismatch());
    assert_eq!("Applications: UI shows 3 items but REST returns 4", error.to_string());
}

#[tokio::test]
async fn assert_all_items_different_labels_test() {
    let dashboard = bookinfo().shared();
    for application in &mut lock(&dashboard).ui.applications {
        if application.name == "details" {
            application.labels.insert("team".to_owned(), "ui".to_owned());
        }
    }

    let mut test = page_test(&dashboard);
    let error = test
        .assert_all_items(&namespaces(&[BOOKINFO]), &[app_name("details")], None, false)
        .await
        .unwrap_err();

    assert!(error.to_string().contains("not found in REST"));
}

#[tokio::test]
async fn assert_namespaces_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_namespaces().await.unwrap();

    lock(&dashboard).ui.namespaces.push("travel-agency".to_owned());
    assert!(test.assert_namespaces().await.is_err());
}

#[tokio::test]
async fn assert_filter_and_sort_options_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_filter_options(&ApplicationsPageFilter::texts()).await.unwrap();
    test.assert_sort_options(&ApplicationsPageSort::texts()).await.unwrap();
}

#[tokio::test]
async fn assert_filter_feature_random_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_filter_feature_random().await.unwrap();

    assert_eq!(7, test.seed());
}

#[tokio::test]
async fn assert_details_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_details("reviews", BOOKINFO, true, false).await.unwrap();
    test.assert_details("details", BOOKINFO2, false, true).await.unwrap();
}

#[tokio::test]
async fn assert_random_details_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_random_details(&namespaces(&[BOOKINFO]), &[], false)
        .await
        .unwrap();
}

#[tokio::test]
async fn assert_details_services_mismatch_test() {
    let dashboard = bookinfo().shared();
    for details in &mut lock(&dashboard).ui.application_details {
        if details.name == "ratings" {
            details.services.push("ratings-legacy".to_owned());
        }
    }

    let mut test = page_test(&dashboard);
    let error = test.assert_details("ratings", BOOKINFO, false, false).await.unwrap_err();

    assert!(error.to_string().starts_with("UI services"));
}

#[tokio::test]
async fn assert_details_unknown_application_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    let result = test.assert_details("mongodb", BOOKINFO, false, false).await;

    assert!(matches!(result, Err(CheckError::UiError(_))));
}

#[tokio::test]
async fn load_details_page_skips_navigation_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    let first = test.load_details_page("productpage", BOOKINFO, false).await.unwrap();
    let second = test.load_details_page("productpage", BOOKINFO, false).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(1, test.page.loads);
    assert_eq!(Some("productpage"), second.active());
}

#[tokio::test]
async fn assert_breadcrumb_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.assert_breadcrumb_object("reviews", BOOKINFO2).await.unwrap();
    test.assert_breadcrumb_namespace("reviews", BOOKINFO2).await.unwrap();
    test.assert_breadcrumb_menu("reviews", BOOKINFO2).await.unwrap();

    assert!(!test.is_in_details_page("reviews", BOOKINFO2).await.unwrap());
}

#[tokio::test]
async fn scoped_resets_page_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    test.scoped(async |t: &mut Test| {
        t.assert_all_items(&namespaces(&[BOOKINFO]), &[app_name("reviews")], None, false)
            .await
    })
    .await
    .unwrap();

    assert!(test.page.checked_namespaces().await.unwrap().is_empty());
    assert!(test.page.active_filters().await.unwrap().is_empty());
}

#[tokio::test]
async fn scoped_returns_scenario_error_test() {
    let dashboard = bookinfo().shared();
    let mut test = page_test(&dashboard);

    let result = test
        .scoped(async |t: &mut Test| -> CheckResult {
            t.apply_namespaces(&namespaces(&[BOOKINFO2]), false).await?;
            Err(CheckError::Mismatch("scenario failed".to_owned()))
        })
        .await;

    assert_eq!("scenario failed", result.unwrap_err().to_string());
    assert!(test.page.checked_namespaces().await.unwrap().is_empty());
}
