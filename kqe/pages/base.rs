use kqe_common::{is_equal, is_sublist};
use kqe_model::{ClusterClient, Filter, RestClient, SortOption};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::ui::{Breadcrumb, ListPage, NamespaceControls};
use crate::{CheckError, CheckResult, filters, sorting};

#[cfg(test)]
#[path = "./base.tests.rs"]
mod base_tests;

/// Prefix of the namespace location in the details page breadcrumb.
pub const NAMESPACE_LOCATION: &str = "Namespace: ";

/// Shared state and helpers of the list page tests.\
/// **Note** that all UI actions are awaited one after another on the calling task.
pub struct ListPageTest<P, R, C> {
    pub page: P,
    pub rest: R,
    pub cluster: C,
    name_filter: &'static str,
    seed: u64,
    rng: StdRng,
}

impl<P, R, C> ListPageTest<P, R, C> {
    /// Creates new [`ListPageTest`] instance.\
    /// **Note** that random seed is generated when `seed` is not provided.
    pub fn new(page: P, rest: R, cluster: C, name_filter: &'static str, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        info!("Creating {} page test with random seed {}", name_filter, seed);

        Self {
            page,
            rest,
            cluster,
            name_filter,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns seed of the random generator.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns name of the filter that selects items by name.
    pub fn name_filter(&self) -> &'static str {
        self.name_filter
    }

    /// Returns random generator used by the test.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Returns up to `amount` randomly chosen items.
    pub fn sample<T: Clone>(&mut self, items: &[T], amount: usize) -> Vec<T> {
        if items.len() <= amount {
            return items.to_vec();
        }

        items.choose_multiple(&mut self.rng, amount).cloned().collect()
    }

    /// Returns randomly chosen item.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }

        let index = self.rng.gen_range(0..items.len());
        items.get(index)
    }
}

impl<P: NamespaceControls, R: RestClient, C: ClusterClient> ListPageTest<P, R, C> {
    /// Asserts that UI shows the same namespaces as REST and that REST namespaces exist in the cluster.
    pub async fn assert_namespaces(&mut self) -> CheckResult {
        let ui = self.page.namespaces().await?;
        let rest = self.rest.namespace_list().await.map_err(CheckError::rest)?;
        let cluster = self.cluster.namespace_list().await.map_err(CheckError::cluster)?;
        debug!("Namespaces UI: {:?}, REST: {:?}, cluster: {:?}", ui, rest, cluster);

        verify!(is_equal(&ui, &rest), "UI namespaces {:?} differ from REST {:?}", ui, rest);
        verify!(
            is_sublist(&rest, &cluster),
            "REST namespaces {:?} not found in cluster {:?}",
            rest,
            cluster
        );

        Ok(())
    }
}

impl<P: ListPage, R, C> ListPageTest<P, R, C> {
    pub async fn apply_filters(&mut self, filters: &[Filter], force_clear_all: bool) -> CheckResult {
        filters::apply_filters(&mut self.page, filters, force_clear_all).await
    }

    pub async fn apply_namespaces(&mut self, namespaces: &[String], force_clear_all: bool) -> CheckResult {
        filters::apply_namespaces(&mut self.page, namespaces, force_clear_all).await
    }

    pub async fn assert_applied_filters(&mut self, filters: &[Filter]) -> CheckResult {
        filters::assert_applied_filters(&mut self.page, filters).await
    }

    pub async fn assert_applied_namespaces(&mut self, namespaces: &[String]) -> CheckResult {
        filters::assert_applied_namespaces(&mut self.page, namespaces).await
    }

    pub async fn sort(&mut self, sort: Option<&SortOption>) -> CheckResult {
        sorting::sort(&mut self.page, sort).await
    }

    /// Asserts that the page offers exactly the `expected` filters.
    pub async fn assert_filter_options(&mut self, expected: &[String]) -> CheckResult {
        filters::assert_filter_options(&mut self.page, expected).await
    }

    /// Asserts that the page offers exactly the `expected` sort options.
    pub async fn assert_sort_options(&mut self, expected: &[String]) -> CheckResult {
        sorting::assert_sort_options(&mut self.page, expected).await
    }

    /// Removes all filters and unselects all namespaces.
    pub async fn reset(&mut self) -> CheckResult {
        self.apply_filters(&[], true).await?;
        self.apply_namespaces(&[], true).await
    }

    /// Applies namespaces, filters and sort and returns items shown by the UI.
    pub async fn ui_items(
        &mut self,
        namespaces: &[String],
        filters: &[Filter],
        sort: Option<&SortOption>,
        force_clear_all: bool,
    ) -> CheckResult<Vec<P::Item>> {
        self.apply_namespaces(namespaces, force_clear_all).await?;
        self.apply_filters(filters, force_clear_all).await?;
        self.sort(sort).await?;

        Ok(self.page.all_items().await?)
    }

    /// Returns `true` if the breadcrumb shows details of the `name` object.
    pub async fn is_in_details_page(&mut self, name: &str, namespace: &str) -> CheckResult<bool> {
        let breadcrumb = self.page.breadcrumb().await?;
        Ok(is_details_breadcrumb(&breadcrumb, P::PAGE_MENU, name, namespace))
    }

    /// Opens details page of the item unless it is already opened and returns its breadcrumb.
    pub async fn load_details_page(&mut self, name: &str, namespace: &str, force_refresh: bool) -> CheckResult<Breadcrumb> {
        if !self.is_in_details_page(name, namespace).await? {
            debug!("Opening {} details of {}/{}", P::PAGE_MENU, namespace, name);
            self.page.load(true).await?;
            self.apply_namespaces(&[namespace.to_owned()], false).await?;
            self.apply_filters(&[Filter::new(self.name_filter, name)], false).await?;
            self.page.open_item(name, Some(namespace), force_refresh).await?;
        }

        Ok(self.page.breadcrumb().await?)
    }

    /// Asserts that the first breadcrumb location leads back to the list with the object namespace selected.
    pub async fn assert_breadcrumb_menu(&mut self, name: &str, namespace: &str) -> CheckResult {
        let breadcrumb = self.load_details_page(name, namespace, false).await?;
        let menu = breadcrumb.get(0).unwrap_or_default();
        verify!(menu == P::PAGE_MENU, "Breadcrumb menu '{}' differs from '{}'", menu, P::PAGE_MENU);

        self.page.click_breadcrumb(menu).await?;
        self.assert_applied_namespaces(&[namespace.to_owned()]).await
    }

    /// Asserts that the second breadcrumb location leads to the list of the object namespace.
    pub async fn assert_breadcrumb_namespace(&mut self, name: &str, namespace: &str) -> CheckResult {
        let breadcrumb = self.load_details_page(name, namespace, false).await?;
        let expected = format!("{NAMESPACE_LOCATION}{namespace}");
        let location = breadcrumb.get(1).unwrap_or_default();
        verify!(location == expected, "Breadcrumb namespace '{}' differs from '{}'", location, expected);

        self.page.click_breadcrumb(location).await?;
        self.assert_applied_namespaces(&[namespace.to_owned()]).await
    }

    /// Asserts that the active breadcrumb location is the object name.
    pub async fn assert_breadcrumb_object(&mut self, name: &str, namespace: &str) -> CheckResult {
        let breadcrumb = self.load_details_page(name, namespace, false).await?;
        let active = breadcrumb.active().unwrap_or_default();
        verify!(active == name, "Breadcrumb object '{}' differs from '{}'", active, name);

        Ok(())
    }
}

/// Returns `true` if the `breadcrumb` points to the details of the `name` object in the `namespace`.
pub fn is_details_breadcrumb(breadcrumb: &Breadcrumb, menu: &str, name: &str, namespace: &str) -> bool {
    breadcrumb.len() >= 3
        && breadcrumb.get(0) == Some(menu)
        && breadcrumb.get(1) == Some(format!("{NAMESPACE_LOCATION}{namespace}").as_str())
        && breadcrumb.active() == Some(name)
}

/// List page checks that reconcile UI items with REST and cluster.
pub trait ItemsCheck {
    /// Returns namespaces offered by the page.
    async fn ui_namespaces(&mut self) -> CheckResult<Vec<String>>;

    /// Removes all active filters.
    async fn clear_filters(&mut self) -> CheckResult;

    /// Removes all filters and unselects all namespaces.
    async fn reset(&mut self) -> CheckResult;

    fn rng(&mut self) -> &mut StdRng;

    /// Applies namespaces and filters and asserts that UI, REST and cluster show the same items.
    async fn assert_all_items(
        &mut self,
        _namespaces: &[String],
        _filters: &[Filter],
        _sort: Option<&SortOption>,
        _force_clear_all: bool,
    ) -> CheckResult {
        Err(CheckError::NotImplemented("assert_all_items"))
    }

    /// Returns page specific filters for the randomized filter check.
    async fn get_additional_filters(&mut self, _namespaces: &[String], _current: &[Filter]) -> CheckResult<Vec<Filter>> {
        Err(CheckError::NotImplemented("get_additional_filters"))
    }

    /// Applies filters for random namespaces one by one, then removes them one by one.\
    /// **Note** that items are reconciled after every change.
    async fn assert_filter_feature_random(&mut self) -> CheckResult {
        self.clear_filters().await?;

        let namespaces = self.ui_namespaces().await?;
        verify!(!namespaces.is_empty(), "Page shows no namespaces");
        let namespaces = if namespaces.len() > 3 {
            namespaces.choose_multiple(self.rng(), 3).cloned().collect::<Vec<_>>()
        } else {
            namespaces
        };

        let defined = self.get_additional_filters(&namespaces, &[]).await?;
        info!("Random filter check for {:?} with filters {:?}", namespaces, defined);

        let mut applied = Vec::with_capacity(defined.len());
        for filter in &defined {
            applied.push(filter.clone());
            self.assert_all_items(&namespaces, &applied, None, false).await?;
        }

        for filter in &defined {
            if let Some(position) = applied.iter().position(|f| f == filter) {
                applied.remove(position);
            }

            self.assert_all_items(&namespaces, &applied, None, false).await?;
            if applied.len() == 2 {
                self.assert_all_items(&[], &[], None, true).await?;
                break;
            }
        }

        Ok(())
    }

    /// Runs the `scenario` and then removes all filters and namespaces.\
    /// **Note** that the scenario error takes precedence over the cleanup error.
    async fn scoped<T, F>(&mut self, scenario: F) -> CheckResult<T>
    where
        Self: Sized,
        F: AsyncFnOnce(&mut Self) -> CheckResult<T>,
    {
        let result = scenario(self).await;
        let cleanup = self.reset().await;
        let value = result?;
        cleanup?;

        Ok(value)
    }
}
