use kqe_model::{Application, ApplicationsPageFilter, Filter};
use rstest::rstest;

use super::*;
use crate::CheckError;
use crate::testing::{BOOKINFO, BOOKINFO2, FakePage, bookinfo};
use crate::ui::UiError;

fn app_name(value: &str) -> Filter {
    Filter::new(ApplicationsPageFilter::AppName.text(), value)
}

#[rstest]
#[case(&[], &[1, 2], &[1, 2], &[])]
#[case(&[1, 2], &[2, 3], &[3], &[1])]
#[case(&[1, 2], &[], &[], &[1, 2])]
#[case(&[1], &[1, 1], &[], &[])]
#[case(&[], &[4, 4], &[4], &[])]
fn diff_test(#[case] active: &[i32], #[case] desired: &[i32], #[case] to_apply: &[i32], #[case] to_remove: &[i32]) {
    assert_eq!((to_apply.to_vec(), to_remove.to_vec()), diff(active, desired));
}

#[tokio::test]
async fn apply_filters_keeps_matching_filters_test() {
    let dashboard = bookinfo().shared();
    let mut page = FakePage::<Application>::new(&dashboard);
    page.apply_filter(&app_name("details")).await.unwrap();
    page.apply_filter(&app_name("ratings")).await.unwrap();

    apply_filters(&mut page, &[app_name("ratings"), app_name("reviews")], false)
        .await
        .unwrap();

    assert_eq!(
        vec![app_name("ratings"), app_name("reviews")],
        page.active_filters().await.unwrap()
    );
}

#[tokio::test]
async fn apply_filters_force_clear_all_test() {
    let dashboard = bookinfo().shared();
    let mut page = FakePage::<Application>::new(&dashboard);
    page.apply_filter(&app_name("details")).await.unwrap();

    apply_filters(&mut page, &[], true).await.unwrap();

    assert!(page.active_filters().await.unwrap().is_empty());
}

#[tokio::test]
async fn apply_filters_unknown_filter_test() {
    let dashboard = bookinfo().shared();
    let mut page = FakePage::<Application>::new(&dashboard);

    let result = apply_filters(&mut page, &[Filter::new("Unknown", "x")], true).await;

    assert!(matches!(result, Err(CheckError::UiError(UiError::ElementNotFound(_)))));
}

#[tokio::test]
async fn apply_namespaces_test() {
    let dashboard = bookinfo().shared();
    let mut page = FakePage::<Application>::new(&dashboard);
    page.check_namespace(BOOKINFO).await.unwrap();

    apply_namespaces(&mut page, &[BOOKINFO2.to_owned()], false).await.unwrap();
    assert_eq!(vec![BOOKINFO2.to_owned()], page.checked_namespaces().await.unwrap());

    apply_namespaces(&mut page, &[], true).await.unwrap();
    assert!(page.checked_namespaces().await.unwrap().is_empty());
}

#[tokio::test]
async fn assert_applied_namespaces_mismatch_test() {
    let dashboard = bookinfo().shared();
    let mut page = FakePage::<Application>::new(&dashboard);
    page.check_namespace(BOOKINFO).await.unwrap();

    let error = assert_applied_namespaces(&mut page, &[BOOKINFO2.to_owned()])
        .await
        .unwrap_err();

    assert!(error.is_mismatch());
    assert_eq!(
        "Selected namespaces [\"bookinfo\"] differ from expected [\"bookinfo2\"]",
        error.to_string()
    );
}

#[tokio::test]
async fn assert_applied_filters_mismatch_test() {
    let dashboard = bookinfo().shared();
    let mut page = FakePage::<Application>::new(&dashboard);
    page.apply_filter(&app_name("details")).await.unwrap();

    let error = assert_applied_filters(&mut page, &[app_name("ratings")]).await.unwrap_err();

    assert!(error.is_mismatch());
    assert_eq!(
        "Active filters [Filter { name: \"App Name\", value: \"details\" }] differ from expected \
         [Filter { name: \"App Name\", value: \"ratings\" }]",
        error.to_string()
    );
}

#[rstest]
#[case(true, &["Name", "Label"], &["Label", "Name"])]
#[case(false, &["Name"], &["Name", "Label"])]
#[case(false, &["Name", "Health"], &["Name", "Label"])]
fn assert_options_test(#[case] expected: bool, #[case] actual: &[&str], #[case] options: &[&str]) {
    let actual = actual.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>();
    let options = options.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>();

    assert_eq!(expected, assert_options("Filter", &actual, &options).is_ok());
}

#[tokio::test]
async fn assert_filter_options_test() {
    let dashboard = bookinfo().shared();
    let mut page = FakePage::<Application>::new(&dashboard);

    assert!(assert_filter_options(&mut page, &ApplicationsPageFilter::texts()).await.is_ok());
    assert!(assert_filter_options(&mut page, &["App Name".to_owned()]).await.is_err());
}
