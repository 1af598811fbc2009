use kqe_model::{ClusterClient, Comparable, Filter, RestClient, SortOption, TrafficType, WorkloadsPageFilter};
use rand::rngs::StdRng;
use std::ops::{Deref, DerefMut};
use tracing::debug;

use crate::pages::{ItemsCheck, ListPageTest};
use crate::reconcile::{Cardinality, compare_all, ensure_all_found};
use crate::ui::{MetricsTab, WorkloadsPage};
use crate::{CheckError, CheckResult};

#[cfg(test)]
#[path = "./workloads.tests.rs"]
mod workloads_tests;

/// Checks of the Workloads list and details pages.
pub struct WorkloadsPageTest<P, R, C> {
    base: ListPageTest<P, R, C>,
}

impl<P, R, C> WorkloadsPageTest<P, R, C> {
    /// Creates new [`WorkloadsPageTest`] instance.
    pub fn new(page: P, rest: R, cluster: C, seed: Option<u64>) -> Self {
        Self {
            base: ListPageTest::new(page, rest, cluster, WorkloadsPageFilter::WorkloadName.text(), seed),
        }
    }
}

impl<P, R, C> Deref for WorkloadsPageTest<P, R, C> {
    type Target = ListPageTest<P, R, C>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl<P, R, C> DerefMut for WorkloadsPageTest<P, R, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl<P: WorkloadsPage, R: RestClient, C: ClusterClient> WorkloadsPageTest<P, R, C> {
    /// Asserts details of up to 3 random workloads returned by REST.
    pub async fn assert_random_details(&mut self, namespaces: &[String], filters: &[Filter], force_refresh: bool) -> CheckResult {
        let names = Filter::values_of(filters, WorkloadsPageFilter::WorkloadName.text());
        let workloads = self
            .base
            .rest
            .workload_list(namespaces, &names)
            .await
            .map_err(CheckError::rest)?;
        verify!(!workloads.is_empty(), "REST returns no workloads in {:?}", namespaces);

        let selected = self.base.sample(&workloads, 3);
        for (index, workload) in selected.iter().enumerate() {
            self.assert_details(
                &workload.name,
                &workload.namespace,
                &workload.workload_type,
                index == 0,
                force_refresh,
            )
            .await?;
        }

        Ok(())
    }

    /// Asserts workload details page against REST and cluster.\
    /// **Note** that pods and services are compared only when UI and REST show the same number of them.
    pub async fn assert_details(
        &mut self,
        name: &str,
        namespace: &str,
        workload_type: &str,
        check_metrics: bool,
        force_refresh: bool,
    ) -> CheckResult {
        debug!("Workload details: {}, {}", name, namespace);

        self.base.load_details_page(name, namespace, force_refresh).await?;
        let ui = self.base.page.details(name).await?;
        verify!(ui.name == name, "UI shows workload '{}' instead of '{}'", ui.name, name);
        verify!(
            ui.workload_type == workload_type,
            "{} and {} are not equal",
            workload_type,
            ui.workload_type
        );

        let rest = self
            .base
            .rest
            .workload_details(namespace, name, workload_type)
            .await
            .map_err(CheckError::rest)?;
        verify!(rest.name == name, "REST returns workload '{}' instead of '{}'", rest.name, name);
        let cluster = self
            .base
            .cluster
            .workload_details(namespace, name, workload_type)
            .await
            .map_err(CheckError::cluster)?;
        verify!(cluster.name == name, "Cluster returns workload '{}' instead of '{}'", cluster.name, name);

        verify!(ui.is_equal(&rest, true), "Workload UI {:?} not equal to REST {:?}", ui, rest);
        verify!(ui.is_equal(&cluster, false), "Workload UI {:?} not equal to cluster {:?}", ui, cluster);

        if ui.pods_number() != rest.pods_number() || ui.services_number() != rest.services_number() {
            debug!("Skipping pods and services of {}: UI and REST counts differ", name);
            return Ok(());
        }

        ensure_all_found("Workload pods", "REST", &ui.pods, &rest.pods, true)?;
        ensure_all_found("Workload services", "REST", &ui.services, &rest.services, true)?;

        if check_metrics {
            self.base.assert_metrics_options(MetricsTab::Inbound).await?;
            self.base.assert_metrics_options(MetricsTab::Outbound).await?;
        }

        self.base
            .assert_traffic(name, TrafficType::Workload, TrafficType::Service)
            .await
    }
}

impl<P: WorkloadsPage, R: RestClient, C: ClusterClient> ItemsCheck for WorkloadsPageTest<P, R, C> {
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

        let names = Filter::values_of(filters, WorkloadsPageFilter::WorkloadName.text());
        debug!("Namespaces: {:?}, workload names: {:?}", namespaces, names);
        let rest = self
            .base
            .rest
            .workload_list(namespaces, &names)
            .await
            .map_err(CheckError::rest)?;
        let cluster = self
            .base
            .cluster
            .workload_list(namespaces, &names)
            .await
            .map_err(CheckError::cluster)?;

        compare_all("Workloads", &ui, &rest, &cluster, Cardinality::AtLeast)
    }

    async fn get_additional_filters(&mut self, namespaces: &[String], current: &[Filter]) -> CheckResult<Vec<Filter>> {
        debug!("Current filters: {:?}", current);
        let Some(namespace) = namespaces.first() else {
            return Ok(Vec::new());
        };

        let workloads = self
            .base
            .rest
            .workload_list(std::slice::from_ref(namespace), &[])
            .await
            .map_err(CheckError::rest)?;

        Ok(self
            .base
            .choose(&workloads)
            .map(|w| vec![Filter::new(WorkloadsPageFilter::WorkloadName.text(), w.name.clone())])
            .unwrap_or_default())
    }
}
