use kqe_model::{
    ClusterClient, Comparable, Filter, RestClient, RoutingWizardType, ServicesPageFilter, SortOption, TrafficType,
};
use rand::rngs::StdRng;
use std::ops::{Deref, DerefMut};
use tracing::{debug, info};

use crate::pages::{ItemsCheck, ListPageTest};
use crate::reconcile::{Cardinality, compare_all, ensure_all_found, find_match};
use crate::routing::{self, RoutingOptions, RoutingState};
use crate::ui::{MetricsTab, ServicesPage};
use crate::{CheckError, CheckResult};

#[cfg(test)]
#[path = "./services.tests.rs"]
mod services_tests;

/// Checks of the Services list and details pages.
pub struct ServicesPageTest<P, R, C> {
    base: ListPageTest<P, R, C>,
}

impl<P, R, C> ServicesPageTest<P, R, C> {
    /// Creates new [`ServicesPageTest`] instance.
    pub fn new(page: P, rest: R, cluster: C, seed: Option<u64>) -> Self {
        Self {
            base: ListPageTest::new(page, rest, cluster, ServicesPageFilter::ServiceName.text(), seed),
        }
    }
}

impl<P, R, C> Deref for ServicesPageTest<P, R, C> {
    type Target = ListPageTest<P, R, C>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl<P, R, C> DerefMut for ServicesPageTest<P, R, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl<P: ServicesPage, R: RestClient, C: ClusterClient> ServicesPageTest<P, R, C> {
    /// Asserts details of up to 2 random services returned by REST.
    pub async fn assert_random_details(&mut self, namespaces: &[String], filters: &[Filter], force_refresh: bool) -> CheckResult {
        let names = Filter::values_of(filters, ServicesPageFilter::ServiceName.text());
        let services = self
            .base
            .rest
            .service_list(namespaces, &names)
            .await
            .map_err(CheckError::rest)?;
        verify!(!services.is_empty(), "REST returns no services in {:?}", namespaces);

        let selected = self.base.sample(&services, 2);
        for (index, service) in selected.iter().enumerate() {
            self.assert_details(&service.name, &service.namespace, index == 0, force_refresh)
                .await?;
        }

        Ok(())
    }

    /// Asserts service details page against REST and cluster.
    pub async fn assert_details(&mut self, name: &str, namespace: &str, check_metrics: bool, force_refresh: bool) -> CheckResult {
        debug!("Service details: {}, {}", name, namespace);

        self.base.load_details_page(name, namespace, force_refresh).await?;
        let ui = self.base.page.details(name).await?;
        verify!(ui.name == name, "UI shows service '{}' instead of '{}'", ui.name, name);

        let rest = self
            .base
            .rest
            .service_details(namespace, name)
            .await
            .map_err(CheckError::rest)?;
        verify!(rest.name == name, "REST returns service '{}' instead of '{}'", rest.name, name);
        let cluster = self
            .base
            .cluster
            .service_details(namespace, name)
            .await
            .map_err(CheckError::cluster)?;
        verify!(cluster.name == name, "Cluster returns service '{}' instead of '{}'", cluster.name, name);

        verify!(
            ui.istio_sidecar == rest.istio_sidecar,
            "Service {} sidecar differs: UI {}, REST {}",
            name,
            ui.istio_sidecar,
            rest.istio_sidecar
        );
        verify!(ui.is_equal(&rest, true), "Service UI {:?} not equal to REST {:?}", ui, rest);
        verify!(ui.is_equal(&cluster, false), "Service UI {:?} not equal to cluster {:?}", ui, cluster);

        verify!(
            ui.workloads_number == rest.workloads.len(),
            "UI shows {} workloads, REST returns {}",
            ui.workloads_number,
            rest.workloads.len()
        );
        verify!(
            ui.virtual_services_number == rest.virtual_services.len()
                && ui.virtual_services_number == ui.virtual_services.len(),
            "UI shows {} virtual services, UI list has {}, REST returns {}",
            ui.virtual_services_number,
            ui.virtual_services.len(),
            rest.virtual_services.len()
        );
        verify!(
            ui.destination_rules_number == rest.destination_rules.len()
                && ui.destination_rules_number == ui.destination_rules.len(),
            "UI shows {} destination rules, UI list has {}, REST returns {}",
            ui.destination_rules_number,
            ui.destination_rules.len(),
            rest.destination_rules.len()
        );

        ensure_all_found("Service workloads", "REST", &ui.workloads, &rest.workloads, true)?;

        let mut rest_virtual_services = rest.virtual_services.clone();
        rest_virtual_services.sort();
        for virtual_service in &ui.virtual_services {
            let Some(rest_vs) = find_match(virtual_service, &rest_virtual_services, false) else {
                return Err(CheckError::Mismatch(format!(
                    "VS {virtual_service:?} not found in REST {rest_virtual_services:?}"
                )));
            };

            let overview = self.base.page.virtual_service_overview(&virtual_service.name).await?;
            verify!(
                overview.is_equal(rest_vs, true),
                "VS overview {:?} not equal to REST {:?}",
                overview,
                rest_vs
            );
        }

        let mut rest_destination_rules = rest.destination_rules.clone();
        rest_destination_rules.sort();
        for destination_rule in &ui.destination_rules {
            verify!(
                find_match(destination_rule, &rest_destination_rules, true).is_some(),
                "DR {:?} not found in REST {:?}",
                destination_rule,
                rest_destination_rules
            );

            let overview = self.base.page.destination_rule_overview(&destination_rule.name).await?;
            verify!(
                overview.is_equal(destination_rule, false),
                "DR overview {:?} not equal to UI {:?}",
                overview,
                destination_rule
            );
        }

        if check_metrics {
            self.base.assert_metrics_options(MetricsTab::Inbound).await?;
        }

        self.base
            .assert_traffic(name, TrafficType::Service, TrafficType::Workload)
            .await
    }

    /// Removes all routing of the service and creates new one with the wizard `action`.
    pub async fn routing_create(
        &mut self,
        name: &str,
        namespace: &str,
        action: RoutingWizardType,
        options: &RoutingOptions,
    ) -> CheckResult {
        verify!(
            matches!(
                action,
                RoutingWizardType::CreateWeightedRouting
                    | RoutingWizardType::CreateMatchingRouting
                    | RoutingWizardType::SuspendTraffic
            ),
            "'{}' does not create routing",
            action
        );
        info!("Routing wizard {} for service {}/{}", action, namespace, name);

        self.base.load_details_page(name, namespace, false).await?;
        self.base.page.delete_all_routing().await?;
        verify!(
            self.base.page.run_wizard(action, options).await?,
            "Routing wizard '{}' was not submitted",
            action
        );

        routing::assert_actions(&mut self.base.page, RoutingState::NoRouting.after(action)).await?;
        routing::assert_rest_routing(&self.base.rest, namespace, name, options).await
    }

    /// Updates existing routing of the service with the wizard `action`.
    pub async fn routing_update(
        &mut self,
        name: &str,
        namespace: &str,
        action: RoutingWizardType,
        options: &RoutingOptions,
    ) -> CheckResult {
        verify!(
            matches!(
                action,
                RoutingWizardType::UpdateWeightedRouting
                    | RoutingWizardType::UpdateMatchingRouting
                    | RoutingWizardType::UpdateSuspendedTraffic
            ),
            "'{}' does not update routing",
            action
        );
        info!("Routing update wizard {} for service {}/{}", action, namespace, name);

        self.base.load_details_page(name, namespace, false).await?;
        verify!(
            self.base.page.is_action_enabled(action).await?,
            "Action '{}' is disabled",
            action
        );
        verify!(
            self.base.page.run_wizard(action, options).await?,
            "Routing wizard '{}' was not submitted",
            action
        );

        routing::assert_actions(&mut self.base.page, RoutingState::NoRouting.after(action)).await?;
        routing::assert_rest_routing(&self.base.rest, namespace, name, options).await
    }

    /// Deletes all routing of the service.
    pub async fn routing_delete(&mut self, name: &str, namespace: &str) -> CheckResult {
        info!("Routing delete for service {}/{}", namespace, name);

        self.base.load_details_page(name, namespace, false).await?;
        verify!(
            self.base.page.delete_all_routing().await?,
            "Routing of service {} was not deleted",
            name
        );

        routing::assert_actions(&mut self.base.page, RoutingState::NoRouting).await?;
        routing::assert_rest_no_routing(&self.base.rest, namespace, name).await
    }
}

impl<P: ServicesPage, R: RestClient, C: ClusterClient> ItemsCheck for ServicesPageTest<P, R, C> {
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

        let names = Filter::values_of(filters, ServicesPageFilter::ServiceName.text());
        debug!("Namespaces: {:?}, service names: {:?}", namespaces, names);
        let rest = self
            .base
            .rest
            .service_list(namespaces, &names)
            .await
            .map_err(CheckError::rest)?;
        let cluster = self
            .base
            .cluster
            .service_list(namespaces, &names)
            .await
            .map_err(CheckError::cluster)?;

        compare_all("Services", &ui, &rest, &cluster, Cardinality::AtLeast)
    }

    async fn get_additional_filters(&mut self, namespaces: &[String], current: &[Filter]) -> CheckResult<Vec<Filter>> {
        debug!("Current filters: {:?}", current);
        let Some(namespace) = namespaces.first() else {
            return Ok(Vec::new());
        };

        let services = self
            .base
            .rest
            .service_list(std::slice::from_ref(namespace), &[])
            .await
            .map_err(CheckError::rest)?;

        Ok(self
            .base
            .choose(&services)
            .map(|s| vec![Filter::new(ServicesPageFilter::ServiceName.text(), s.name.clone())])
            .unwrap_or_default())
    }
}
