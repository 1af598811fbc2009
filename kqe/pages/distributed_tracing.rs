use tracing::info;

use crate::CheckResult;
use crate::filters::apply_namespaces;
use crate::pages::assert_traces_state;
use crate::ui::DistributedTracingPage;

#[cfg(test)]
#[path = "./distributed_tracing.tests.rs"]
mod distributed_tracing_tests;

/// Checks of the Distributed Tracing page.
pub struct DistributedTracingPageTest<P> {
    pub page: P,
}

impl<P: DistributedTracingPage> DistributedTracingPageTest<P> {
    /// Creates new [`DistributedTracingPageTest`] instance.
    pub fn new(page: P) -> Self {
        Self { page }
    }

    /// Opens the page and selects the `namespaces`.
    pub async fn load_page(&mut self, namespaces: &[String], force_clear_all: bool) -> CheckResult {
        self.page.load(true).await?;
        apply_namespaces(&mut self.page, namespaces, force_clear_all).await
    }

    /// Searches traces of the service and asserts the results view.
    pub async fn assert_search_traces(&mut self, service: &str, namespaces: &[String], force_clear_all: bool) -> CheckResult {
        info!("Searching traces of {} in {:?}", service, namespaces);

        self.load_page(namespaces, force_clear_all).await?;
        self.page.search_traces(Some(service)).await?;
        assert_traces_state(&mut self.page).await
    }
}
