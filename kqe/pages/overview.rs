use kqe_model::{ClusterClient, Filter, OverviewPageFilter, OverviewPageType, RestClient};
use rand::rngs::StdRng;
use std::ops::{Deref, DerefMut};
use tracing::debug;

use crate::filters::assert_options;
use crate::pages::{ItemsCheck, ListPageTest};
use crate::reconcile::compare_two;
use crate::ui::OverviewPage;
use crate::{CheckError, CheckResult};

#[cfg(test)]
#[path = "./overview.tests.rs"]
mod overview_tests;

/// Checks of the Overview page.
pub struct OverviewPageTest<P, R, C> {
    base: ListPageTest<P, R, C>,
}

impl<P, R, C> OverviewPageTest<P, R, C> {
    /// Creates new [`OverviewPageTest`] instance.
    pub fn new(page: P, rest: R, cluster: C, seed: Option<u64>) -> Self {
        Self {
            base: ListPageTest::new(page, rest, cluster, OverviewPageFilter::Name.text(), seed),
        }
    }
}

impl<P, R, C> Deref for OverviewPageTest<P, R, C> {
    type Target = ListPageTest<P, R, C>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl<P, R, C> DerefMut for OverviewPageTest<P, R, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl<P: OverviewPage, R: RestClient, C: ClusterClient> OverviewPageTest<P, R, C> {
    /// Asserts that the page offers all overview types.
    pub async fn assert_type_options(&mut self) -> CheckResult {
        let options = self.base.page.type_options().await?;
        assert_options("Type", &options, &OverviewPageType::texts())
    }

    /// Selects overview type, applies filters and asserts namespace summaries against REST.\
    /// **Note** that only identity fields and item counts are compared.
    pub async fn assert_all_items(
        &mut self,
        filters: &[Filter],
        overview_type: OverviewPageType,
        force_clear_all: bool,
    ) -> CheckResult {
        self.base.page.select_type(overview_type.text()).await?;
        self.base.apply_filters(filters, force_clear_all).await?;
        let ui = self.base.page.all_items().await?;

        let namespaces = Filter::values_of(filters, OverviewPageFilter::Name.text());
        debug!("Overview {} of namespaces {:?}", overview_type, namespaces);
        let rest = self
            .base
            .rest
            .overview_list(&namespaces, overview_type)
            .await
            .map_err(CheckError::rest)?;

        compare_two("Overview", &ui, &rest, false)
    }
}

impl<P: OverviewPage, R: RestClient, C: ClusterClient> ItemsCheck for OverviewPageTest<P, R, C> {
    async fn ui_namespaces(&mut self) -> CheckResult<Vec<String>> {
        Ok(self.base.page.filter_values(OverviewPageFilter::Name.text()).await?)
    }

    async fn clear_filters(&mut self) -> CheckResult {
        self.base.apply_filters(&[], true).await
    }

    async fn reset(&mut self) -> CheckResult {
        self.base.reset().await
    }

    fn rng(&mut self) -> &mut StdRng {
        self.base.rng()
    }
}
