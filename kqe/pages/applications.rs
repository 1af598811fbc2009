use kqe_common::is_equal;
use kqe_model::{ApplicationsPageFilter, ClusterClient, Comparable, Filter, RestClient, SortOption, TrafficType};
use rand::rngs::StdRng;
use std::ops::{Deref, DerefMut};
use tracing::debug;

use crate::pages::{ItemsCheck, ListPageTest};
use crate::reconcile::{Cardinality, compare_all, ensure_all_found};
use crate::ui::{ApplicationsPage, MetricsTab};
use crate::{CheckError, CheckResult};

#[cfg(test)]
#[path = "./applications.tests.rs"]
mod applications_tests;

/// Checks of the Applications list and details pages.
pub struct ApplicationsPageTest<P, R, C> {
    base: ListPageTest<P, R, C>,
}

impl<P, R, C> ApplicationsPageTest<P, R, C> {
    /// Creates new [`ApplicationsPageTest`] instance.
    pub fn new(page: P, rest: R, cluster: C, seed: Option<u64>) -> Self {
        Self {
            base: ListPageTest::new(page, rest, cluster, ApplicationsPageFilter::AppName.text(), seed),
        }
    }
}

impl<P, R, C> Deref for ApplicationsPageTest<P, R, C> {
    type Target = ListPageTest<P, R, C>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl<P, R, C> DerefMut for ApplicationsPageTest<P, R, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl<P: ApplicationsPage, R: RestClient, C: ClusterClient> ApplicationsPageTest<P, R, C> {
    /// Asserts details of up to 3 random applications returned by REST.
    pub async fn assert_random_details(&mut self, namespaces: &[String], filters: &[Filter], force_refresh: bool) -> CheckResult {
        let names = Filter::values_of(filters, ApplicationsPageFilter::AppName.text());
        let applications = self
            .base
            .rest
            .application_list(namespaces, &names)
            .await
            .map_err(CheckError::rest)?;
        verify!(!applications.is_empty(), "REST returns no applications in {:?}", namespaces);

        let selected = self.base.sample(&applications, 3);
        for (index, application) in selected.iter().enumerate() {
            self.assert_details(&application.name, &application.namespace, index == 0, force_refresh)
                .await?;
        }

        Ok(())
    }

    /// Asserts application details page against REST and cluster.
    pub async fn assert_details(&mut self, name: &str, namespace: &str, check_metrics: bool, force_refresh: bool) -> CheckResult {
        debug!("Application details: {}, {}", name, namespace);

        self.base.load_details_page(name, namespace, force_refresh).await?;
        let ui = self.base.page.details(name).await?;
        verify!(ui.name == name, "UI shows application '{}' instead of '{}'", ui.name, name);

        let rest = self
            .base
            .rest
            .application_details(namespace, name)
            .await
            .map_err(CheckError::rest)?;
        verify!(rest.name == name, "REST returns application '{}' instead of '{}'", rest.name, name);
        let cluster = self
            .base
            .cluster
            .application_details(namespace, name)
            .await
            .map_err(CheckError::cluster)?;

        verify!(ui.is_equal(&rest, true), "Application UI {:?} not equal to REST {:?}", ui, rest);
        verify!(
            ui.is_equal(&cluster, false),
            "Application UI {:?} not equal to cluster {:?}",
            ui,
            cluster
        );

        ensure_all_found("Application workloads", "REST", &ui.workloads, &rest.workloads, true)?;
        ensure_all_found("Application workloads", "cluster", &ui.workloads, &cluster.workloads, false)?;

        verify!(
            ui.services == rest.services,
            "UI services {:?} not equal to REST {:?}",
            ui.services,
            rest.services
        );
        verify!(
            is_equal(&ui.services, &cluster.services),
            "UI services {:?} not equal to cluster {:?}",
            ui.services,
            cluster.services
        );

        if check_metrics {
            self.base.assert_metrics_options(MetricsTab::Inbound).await?;
            self.base.assert_metrics_options(MetricsTab::Outbound).await?;
        }

        self.base.assert_traffic(name, TrafficType::App, TrafficType::App).await
    }
}

impl<P: ApplicationsPage, R: RestClient, C: ClusterClient> ItemsCheck for ApplicationsPageTest<P, R, C> {
    async fn ui_namespaces(&mut self) -> CheckResult<Vec<String>> {
        Ok(self.base.page.namespaces().await?)
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

    async fn assert_all_items(
        &mut self,
        namespaces: &[String],
        filters: &[Filter],
        sort: Option<&SortOption>,
        force_clear_all: bool,
    ) -> CheckResult {
        let ui = self.base.ui_items(namespaces, filters, sort, force_clear_all).await?;

        let names = Filter::values_of(filters, ApplicationsPageFilter::AppName.text());
        debug!("Namespaces: {:?}, application names: {:?}", namespaces, names);
        let rest = self
            .base
            .rest
            .application_list(namespaces, &names)
            .await
            .map_err(CheckError::rest)?;
        let cluster = self
            .base
            .cluster
            .application_list(namespaces, &names)
            .await
            .map_err(CheckError::cluster)?;

        compare_all("Applications", &ui, &rest, &cluster, Cardinality::AtLeast)
    }

    async fn get_additional_filters(&mut self, namespaces: &[String], current: &[Filter]) -> CheckResult<Vec<Filter>> {
        debug!("Current filters: {:?}", current);
        let Some(namespace) = namespaces.first() else {
            return Ok(Vec::new());
        };

        let applications = self
            .base
            .rest
            .application_list(std::slice::from_ref(namespace), &[])
            .await
            .map_err(CheckError::rest)?;

        Ok(self
            .base
            .choose(&applications)
            .map(|a| vec![Filter::new(ApplicationsPageFilter::AppName.text(), a.name.clone())])
            .unwrap_or_default())
    }
}
