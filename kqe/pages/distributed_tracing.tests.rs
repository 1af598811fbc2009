use super::*;
use crate::testing::{BOOKINFO, FakePage, TracingView, bookinfo, lock};
use crate::ui::{NamespaceControls, TracesState};

#[tokio::test]
async fn assert_search_traces_test() {
    let dashboard = bookinfo().shared();
    let mut test = DistributedTracingPageTest::new(FakePage::<TracingView>::new(&dashboard));

    test.assert_search_traces("productpage", &[BOOKINFO.to_owned()], true)
        .await
        .unwrap();

    assert_eq!(vec![BOOKINFO.to_owned()], test.page.checked_namespaces().await.unwrap());
    assert_eq!(vec![Some("productpage".to_owned())], test.page.searched_traces);
}

#[tokio::test]
async fn assert_search_traces_without_results_test() {
    let dashboard = bookinfo().shared();
    lock(&dashboard).traces = TracesState {
        login_displayed: false,
        has_no_results: true,
        has_results: false,
    };
    let mut test = DistributedTracingPageTest::new(FakePage::<TracingView>::new(&dashboard));

    test.assert_search_traces("ratings", &[BOOKINFO.to_owned()], false)
        .await
        .unwrap();
}

#[tokio::test]
async fn assert_search_traces_results_not_shown_test() {
    let dashboard = bookinfo().shared();
    lock(&dashboard).traces.has_results = false;
    let mut test = DistributedTracingPageTest::new(FakePage::<TracingView>::new(&dashboard));

    let error = test
        .assert_search_traces("reviews", &[BOOKINFO.to_owned()], false)
        .await
        .unwrap_err();

    assert_eq!("Traces results are not shown", error.to_string());
}
