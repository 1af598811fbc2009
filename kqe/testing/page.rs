use kqe_model::{
    Application, ApplicationDetails, ApplicationsPageFilter, ApplicationsPageSort, DestinationRule, Filter,
    IstioConfig, IstioConfigDetails, IstioConfigObjectType, IstioConfigPageFilter, IstioConfigPageSort,
    IstioConfigValidation, Overview, OverviewPageFilter, OverviewPageSort, OverviewPageType, RoutingWizardType,
    Service, ServiceDetails, ServicesPageFilter, ServicesPageSort, SortOption, TrafficItem, TrafficType,
    VirtualService, Workload, WorkloadDetails, WorkloadsPageFilter, WorkloadsPageSort,
};
use serde_json::json;
use std::collections::BTreeSet;
use std::fmt::Debug;

use super::dashboard::{Dashboard, Dataset, Keyed, SharedDashboard, in_scope, lock, lookup};
use crate::pages::{NAMESPACE_LOCATION, expected_metrics_options, expected_metrics_settings};
use crate::routing::RoutingOptions;
use crate::ui::{
    Breadcrumb, ConfigActions, DetailsPage, FilterControls, ListPage, MetricsControls, MetricsOption, MetricsTab,
    NamespaceControls, Navigation, OverviewControls, RoutingActions, ServiceOverviews, SortControls, TracesControls,
    TracesState, TrafficControls, UiError,
};

const INGRESS_GATEWAY: &str = "bookinfo-gateway";
const MESH_GATEWAY: &str = "mesh";

/// Row of the fake list page.
pub trait FakeItem: Keyed + Clone + Debug {
    const MENU: &'static str;
    const NAME_FILTER: &'static str;

    fn filter_options() -> Vec<String>;

    fn sort_options() -> Vec<String>;

    fn items(data: &Dataset) -> Vec<Self>;

    /// Values offered by select filters.
    fn filter_values(_filter_name: &str, _data: &Dataset) -> Vec<String> {
        Vec::new()
    }

    /// Returns `true` if the row passes the `filter`.\
    /// **Note** that filters unknown to the row do not hide it.
    fn matches(&self, filter: &Filter) -> bool {
        filter.name != Self::NAME_FILTER || self.key().1.contains(filter.value.as_str())
    }

    fn is_of_type(&self, _overview_type: OverviewPageType) -> bool {
        true
    }
}

/// Row of the fake list page that has its own details page.
pub trait FakeDetails: FakeItem {
    type Details;

    fn details(&self, data: &Dataset) -> Option<Self::Details>;
}

impl FakeItem for Overview {
    const MENU: &'static str = "Overview";
    const NAME_FILTER: &'static str = OverviewPageFilter::Name.text();

    fn filter_options() -> Vec<String> {
        OverviewPageFilter::texts()
    }

    fn sort_options() -> Vec<String> {
        OverviewPageSort::texts()
    }

    fn items(data: &Dataset) -> Vec<Self> {
        data.overviews.clone()
    }

    fn filter_values(filter_name: &str, data: &Dataset) -> Vec<String> {
        if filter_name == Self::NAME_FILTER {
            data.namespaces.clone()
        } else {
            Vec::new()
        }
    }

    fn matches(&self, filter: &Filter) -> bool {
        filter.name != Self::NAME_FILTER || self.namespace == filter.value
    }

    fn is_of_type(&self, overview_type: OverviewPageType) -> bool {
        self.overview_type == overview_type
    }
}

impl Keyed for Overview {
    fn key(&self) -> (&str, &str) {
        (self.namespace.as_str(), self.namespace.as_str())
    }
}

impl FakeItem for Application {
    const MENU: &'static str = "Applications";
    const NAME_FILTER: &'static str = ApplicationsPageFilter::AppName.text();

    fn filter_options() -> Vec<String> {
        ApplicationsPageFilter::texts()
    }

    fn sort_options() -> Vec<String> {
        ApplicationsPageSort::texts()
    }

    fn items(data: &Dataset) -> Vec<Self> {
        data.applications.clone()
    }
}

impl FakeDetails for Application {
    type Details = ApplicationDetails;

    fn details(&self, data: &Dataset) -> Option<Self::Details> {
        lookup(&data.application_details, &self.namespace, &self.name)
    }
}

impl FakeItem for Workload {
    const MENU: &'static str = "Workloads";
    const NAME_FILTER: &'static str = WorkloadsPageFilter::WorkloadName.text();

    fn filter_options() -> Vec<String> {
        WorkloadsPageFilter::texts()
    }

    fn sort_options() -> Vec<String> {
        WorkloadsPageSort::texts()
    }

    fn items(data: &Dataset) -> Vec<Self> {
        data.workloads.clone()
    }
}

impl FakeDetails for Workload {
    type Details = WorkloadDetails;

    fn details(&self, data: &Dataset) -> Option<Self::Details> {
        lookup(&data.workload_details, &self.namespace, &self.name)
    }
}

impl FakeItem for Service {
    const MENU: &'static str = "Services";
    const NAME_FILTER: &'static str = ServicesPageFilter::ServiceName.text();

    fn filter_options() -> Vec<String> {
        ServicesPageFilter::texts()
    }

    fn sort_options() -> Vec<String> {
        ServicesPageSort::texts()
    }

    fn items(data: &Dataset) -> Vec<Self> {
        data.services.clone()
    }
}

impl FakeDetails for Service {
    type Details = ServiceDetails;

    fn details(&self, data: &Dataset) -> Option<Self::Details> {
        lookup(&data.service_details, &self.namespace, &self.name)
    }
}

impl FakeItem for IstioConfig {
    const MENU: &'static str = "Istio Config";
    const NAME_FILTER: &'static str = IstioConfigPageFilter::IstioName.text();

    fn filter_options() -> Vec<String> {
        IstioConfigPageFilter::texts()
    }

    fn sort_options() -> Vec<String> {
        IstioConfigPageSort::texts()
    }

    fn items(data: &Dataset) -> Vec<Self> {
        data.istio_configs.clone()
    }

    fn filter_values(filter_name: &str, _data: &Dataset) -> Vec<String> {
        if filter_name == IstioConfigPageFilter::IstioType.text() {
            IstioConfigObjectType::texts()
        } else if filter_name == IstioConfigPageFilter::Config.text() {
            IstioConfigValidation::texts()
        } else {
            Vec::new()
        }
    }

    fn matches(&self, filter: &Filter) -> bool {
        if filter.name == IstioConfigPageFilter::IstioType.text() {
            self.object_type.text() == filter.value
        } else if filter.name == IstioConfigPageFilter::Config.text() {
            self.validation.unwrap_or(IstioConfigValidation::NotAvailable).text() == filter.value
        } else {
            filter.name != Self::NAME_FILTER || self.name.contains(filter.value.as_str())
        }
    }
}

impl FakeDetails for IstioConfig {
    type Details = IstioConfigDetails;

    fn details(&self, data: &Dataset) -> Option<Self::Details> {
        data.istio_details(&self.namespace, self.object_type, &self.name)
    }
}

/// Distributed Tracing page has no rows.
#[derive(Debug, Clone, Default)]
pub struct TracingView;

impl Keyed for TracingView {
    fn key(&self) -> (&str, &str) {
        ("", "")
    }
}

impl FakeItem for TracingView {
    const MENU: &'static str = "Distributed Tracing";
    const NAME_FILTER: &'static str = "";

    fn filter_options() -> Vec<String> {
        Vec::new()
    }

    fn sort_options() -> Vec<String> {
        Vec::new()
    }

    fn items(_data: &Dataset) -> Vec<Self> {
        Vec::new()
    }
}

/// Dashboard page driven in memory.
pub struct FakePage<T> {
    dashboard: SharedDashboard,
    checked_namespaces: Vec<String>,
    filters: Vec<Filter>,
    sort: Option<SortOption>,
    overview_type: OverviewPageType,
    opened: Option<T>,
    metrics_checked: BTreeSet<(String, String)>,
    pub loads: usize,
    pub searched_traces: Vec<Option<String>>,
}

impl<T: FakeItem> FakePage<T> {
    pub fn new(dashboard: &SharedDashboard) -> Self {
        Self {
            dashboard: dashboard.clone(),
            checked_namespaces: Vec::new(),
            filters: Vec::new(),
            sort: None,
            overview_type: OverviewPageType::Apps,
            opened: None,
            metrics_checked: BTreeSet::new(),
            loads: 0,
            searched_traces: Vec::new(),
        }
    }

    fn dashboard(&self) -> std::sync::MutexGuard<'_, Dashboard> {
        lock(&self.dashboard)
    }

    /// Returns rows visible with the current namespaces, filters and sort.\
    /// **Note** that filters with the same name are alternatives.
    fn visible_items(&self) -> Vec<T> {
        let mut items = T::items(&self.dashboard().ui)
            .into_iter()
            .filter(|i| in_scope(i.key().0, &self.checked_namespaces) && i.is_of_type(self.overview_type))
            .filter(|i| {
                self.filters
                    .iter()
                    .all(|f| i.matches(f) || self.filters.iter().any(|o| o.name == f.name && i.matches(o)))
            })
            .collect::<Vec<_>>();

        items.sort_by(|a, b| a.key().cmp(&b.key()));
        if self.sort.as_ref().is_some_and(|s| !s.is_ascending) {
            items.reverse();
        }

        items
    }

    fn opened(&self) -> Result<&T, UiError> {
        self.opened
            .as_ref()
            .ok_or_else(|| UiError::ElementNotFound(format!("{} details", T::MENU)))
    }
}

impl<T: FakeItem> NamespaceControls for FakePage<T> {
    async fn namespaces(&mut self) -> Result<Vec<String>, UiError> {
        Ok(self.dashboard().ui.namespaces.clone())
    }

    async fn checked_namespaces(&mut self) -> Result<Vec<String>, UiError> {
        Ok(self.checked_namespaces.clone())
    }

    async fn check_namespace(&mut self, namespace: &str) -> Result<(), UiError> {
        if !self.dashboard().ui.namespaces.iter().any(|n| n == namespace) {
            return Err(UiError::ElementNotFound(format!("namespace {namespace}")));
        }

        if !self.checked_namespaces.iter().any(|n| n == namespace) {
            self.checked_namespaces.push(namespace.to_owned());
        }

        Ok(())
    }

    async fn uncheck_namespace(&mut self, namespace: &str) -> Result<(), UiError> {
        self.checked_namespaces.retain(|n| n != namespace);
        Ok(())
    }

    async fn clear_namespaces(&mut self) -> Result<(), UiError> {
        self.checked_namespaces.clear();
        Ok(())
    }
}

impl<T: FakeItem> FilterControls for FakePage<T> {
    async fn filter_options(&mut self) -> Result<Vec<String>, UiError> {
        Ok(T::filter_options())
    }

    async fn filter_values(&mut self, filter_name: &str) -> Result<Vec<String>, UiError> {
        Ok(T::filter_values(filter_name, &self.dashboard().ui))
    }

    async fn active_filters(&mut self) -> Result<Vec<Filter>, UiError> {
        Ok(self.filters.clone())
    }

    async fn apply_filter(&mut self, filter: &Filter) -> Result<(), UiError> {
        if !T::filter_options().contains(&filter.name) {
            return Err(UiError::ElementNotFound(format!("filter {}", filter.name)));
        }

        if !self.filters.contains(filter) {
            self.filters.push(filter.clone());
        }

        Ok(())
    }

    async fn remove_filter(&mut self, filter: &Filter) -> Result<(), UiError> {
        let Some(position) = self.filters.iter().position(|f| f == filter) else {
            return Err(UiError::ElementNotFound(format!("filter chip {filter}")));
        };

        self.filters.remove(position);
        Ok(())
    }

    async fn clear_filters(&mut self) -> Result<(), UiError> {
        self.filters.clear();
        Ok(())
    }
}

impl<T: FakeItem> SortControls for FakePage<T> {
    async fn sort_options(&mut self) -> Result<Vec<String>, UiError> {
        Ok(T::sort_options())
    }

    async fn select_sort(&mut self, sort: &SortOption) -> Result<(), UiError> {
        if !T::sort_options().contains(&sort.option) {
            return Err(UiError::ElementNotFound(format!("sort option {}", sort.option)));
        }

        self.sort = Some(sort.clone());
        Ok(())
    }
}

impl<T: FakeItem> Navigation for FakePage<T> {
    const PAGE_MENU: &'static str = T::MENU;

    async fn load(&mut self, force: bool) -> Result<(), UiError> {
        if force || self.loads == 0 {
            self.loads += 1;
            self.opened = None;
        }

        Ok(())
    }

    async fn refresh(&mut self) -> Result<(), UiError> {
        Ok(())
    }

    async fn breadcrumb(&mut self) -> Result<Breadcrumb, UiError> {
        let mut locations = vec![T::MENU.to_owned()];
        if let Some(item) = &self.opened {
            let (namespace, name) = item.key();
            locations.push(format!("{NAMESPACE_LOCATION}{namespace}"));
            locations.push(name.to_owned());
        }

        Ok(Breadcrumb::new(locations))
    }

    async fn click_breadcrumb(&mut self, location: &str) -> Result<(), UiError> {
        if location == T::MENU {
            self.opened = None;
            return Ok(());
        }

        match location.strip_prefix(NAMESPACE_LOCATION) {
            Some(namespace) if self.opened.is_some() => {
                self.checked_namespaces = vec![namespace.to_owned()];
                self.opened = None;
                Ok(())
            },
            _ => Err(UiError::ElementNotFound(format!("breadcrumb {location}"))),
        }
    }

    async fn open_item(&mut self, name: &str, namespace: Option<&str>, _force_refresh: bool) -> Result<(), UiError> {
        let item = self
            .visible_items()
            .into_iter()
            .find(|i| i.key().1 == name && namespace.is_none_or(|n| i.key().0 == n))
            .ok_or_else(|| UiError::ElementNotFound(format!("row {name}")))?;

        self.opened = Some(item);
        Ok(())
    }
}

impl<T: FakeItem> ListPage for FakePage<T> {
    type Item = T;

    async fn all_items(&mut self) -> Result<Vec<T>, UiError> {
        Ok(self.visible_items())
    }
}

impl<T: FakeDetails> DetailsPage for FakePage<T> {
    type Details = T::Details;

    async fn details(&mut self, name: &str) -> Result<T::Details, UiError> {
        let item = self.opened()?;
        if item.key().1 != name {
            return Err(UiError::ElementNotFound(format!("details of {name}")));
        }

        item.details(&self.dashboard().ui)
            .ok_or_else(|| UiError::ElementNotFound(format!("details of {name}")))
    }
}

impl OverviewControls for FakePage<Overview> {
    async fn type_options(&mut self) -> Result<Vec<String>, UiError> {
        Ok(OverviewPageType::texts())
    }

    async fn select_type(&mut self, overview_type: &str) -> Result<(), UiError> {
        self.overview_type = overview_type.parse().map_err(|e: kqe_model::UnknownVariantError| {
            UiError::ActionFailed {
                action: "select overview type".to_owned(),
                message: e.to_string(),
            }
        })?;

        Ok(())
    }
}

impl<T: FakeDetails> MetricsControls for FakePage<T> {
    async fn open_metrics(&mut self, tab: MetricsTab) -> Result<(), UiError> {
        self.opened().map(|_| ()).map_err(|_| UiError::ElementNotFound(format!("{tab:?} metrics tab")))
    }

    async fn metrics_settings(&mut self, tab: MetricsTab) -> Result<Vec<String>, UiError> {
        Ok(expected_metrics_settings(tab))
    }

    async fn set_metrics_setting(&mut self, tab: MetricsTab, name: &str, checked: bool) -> Result<(), UiError> {
        if !expected_metrics_settings(tab).iter().any(|s| s == name) {
            return Err(UiError::ElementNotFound(format!("metrics setting {name}")));
        }

        let key = (format!("{tab:?}"), name.to_owned());
        if checked {
            self.metrics_checked.insert(key);
        } else {
            self.metrics_checked.remove(&key);
        }

        Ok(())
    }

    async fn is_metrics_setting_checked(&mut self, tab: MetricsTab, name: &str) -> Result<bool, UiError> {
        Ok(self.metrics_checked.contains(&(format!("{tab:?}"), name.to_owned())))
    }

    async fn metrics_options(&mut self, _tab: MetricsTab, option: MetricsOption) -> Result<Vec<String>, UiError> {
        Ok(expected_metrics_options(option))
    }
}

impl<T: FakeDetails> TrafficControls for FakePage<T> {
    async fn inbound_traffic(&mut self) -> Result<Vec<TrafficItem>, UiError> {
        let name = self.opened()?.key().1.to_owned();
        Ok(self.dashboard().inbound.get(&name).cloned().unwrap_or_default())
    }

    async fn click_traffic_item(
        &mut self,
        _object_type: TrafficType,
        name: &str,
        _inbound: bool,
    ) -> Result<Vec<TrafficItem>, UiError> {
        Ok(self.dashboard().outbound.get(name).cloned().unwrap_or_default())
    }
}

impl<T: FakeItem> TracesControls for FakePage<T> {
    async fn open_traces(&mut self) -> Result<(), UiError> {
        Ok(())
    }

    async fn search_traces(&mut self, service: Option<&str>) -> Result<(), UiError> {
        self.searched_traces.push(service.map(str::to_owned));
        Ok(())
    }

    async fn traces_state(&mut self) -> Result<TracesState, UiError> {
        Ok(self.dashboard().traces)
    }
}

/// Returns `true` if the wizard `action` can be run with the `current` routing.
fn is_enabled(current: Option<RoutingWizardType>, action: RoutingWizardType) -> bool {
    use RoutingWizardType::*;

    match (current, action) {
        (None, CreateWeightedRouting | CreateMatchingRouting | SuspendTraffic) => true,
        (None, _) => false,
        (Some(_), DeleteAllTrafficRouting) => true,
        (Some(CreateWeightedRouting), UpdateWeightedRouting) => true,
        (Some(CreateMatchingRouting), UpdateMatchingRouting) => true,
        (Some(SuspendTraffic), UpdateSuspendedTraffic) => true,
        _ => false,
    }
}

fn created_by(action: RoutingWizardType) -> RoutingWizardType {
    match action {
        RoutingWizardType::UpdateWeightedRouting => RoutingWizardType::CreateWeightedRouting,
        RoutingWizardType::UpdateMatchingRouting => RoutingWizardType::CreateMatchingRouting,
        RoutingWizardType::UpdateSuspendedTraffic => RoutingWizardType::SuspendTraffic,
        action => action,
    }
}

/// Writes objects generated by the routing wizard to all sources.
fn write_routing(dashboard: &mut Dashboard, namespace: &str, name: &str, options: &RoutingOptions) {
    let mut gateways = Vec::new();
    if options.gateway {
        gateways.push(INGRESS_GATEWAY.to_owned());
        if options.include_mesh_gateway {
            gateways.push(MESH_GATEWAY.to_owned());
        }
    }

    let mut policy = serde_json::Map::new();
    if options.load_balancer
        && let Some(load_balancer) = options.load_balancer_type
    {
        policy.insert("loadBalancer".to_owned(), json!({ "simple": load_balancer.text() }));
    }

    if let Some(tls) = options.tls {
        policy.insert("tls".to_owned(), json!({ "mode": tls.text() }));
    }

    let virtual_service = VirtualService {
        name: name.to_owned(),
        namespace: namespace.to_owned(),
        hosts: vec![name.to_owned()],
        gateways: gateways.clone(),
        validation: Some(IstioConfigValidation::Valid),
    };
    let destination_rule = DestinationRule {
        name: name.to_owned(),
        namespace: namespace.to_owned(),
        host: name.to_owned(),
        traffic_policy: serde_json::Value::Object(policy).to_string(),
        subsets: Vec::new(),
        validation: Some(IstioConfigValidation::Valid),
    };

    let vs_text = json!({
        "kind": "VirtualService",
        "metadata": { "name": name, "namespace": namespace },
        "spec": { "hosts": [name], "gateways": gateways },
    })
    .to_string();
    let dr_text = json!({
        "kind": "DestinationRule",
        "metadata": { "name": name, "namespace": namespace },
        "spec": { "host": name, "trafficPolicy": destination_rule.traffic_policy },
    })
    .to_string();

    for data in dashboard.datasets_mut() {
        if let Some(details) = data.service_details_mut(namespace, name) {
            details.virtual_services = vec![virtual_service.clone()];
            details.destination_rules = vec![destination_rule.clone()];
            details.virtual_services_number = 1;
            details.destination_rules_number = 1;
        }

        for (object_type, text) in [
            (IstioConfigObjectType::VirtualService, &vs_text),
            (IstioConfigObjectType::DestinationRule, &dr_text),
        ] {
            data.put_istio_config(
                IstioConfig {
                    validation: Some(IstioConfigValidation::Valid),
                    ..IstioConfig::new(name, namespace, object_type)
                },
                IstioConfigDetails {
                    name: name.to_owned(),
                    namespace: namespace.to_owned(),
                    object_type,
                    text: text.clone(),
                    validation: Some(IstioConfigValidation::Valid),
                    error_messages: Vec::new(),
                },
            );
        }
    }
}

/// Removes objects generated by the routing wizard from all sources.
fn remove_routing(dashboard: &mut Dashboard, namespace: &str, name: &str) {
    for data in dashboard.datasets_mut() {
        if let Some(details) = data.service_details_mut(namespace, name) {
            details.virtual_services.clear();
            details.destination_rules.clear();
            details.virtual_services_number = 0;
            details.destination_rules_number = 0;
        }

        data.remove_istio_config(namespace, IstioConfigObjectType::VirtualService, name);
        data.remove_istio_config(namespace, IstioConfigObjectType::DestinationRule, name);
    }
}

impl FakePage<Service> {
    fn routing_key(&self) -> Result<(String, String), UiError> {
        let (namespace, name) = self.opened()?.key();
        Ok((namespace.to_owned(), name.to_owned()))
    }
}

impl RoutingActions for FakePage<Service> {
    async fn run_wizard(&mut self, action: RoutingWizardType, options: &RoutingOptions) -> Result<bool, UiError> {
        let (namespace, name) = self.routing_key()?;
        let key = format!("{namespace}/{name}");
        let mut dashboard = self.dashboard();
        if action == RoutingWizardType::DeleteAllTrafficRouting || !is_enabled(dashboard.routing.get(&key).copied(), action)
        {
            return Ok(false);
        }

        dashboard.routing.insert(key, created_by(action));
        write_routing(&mut dashboard, &namespace, &name, options);
        Ok(true)
    }

    async fn delete_all_routing(&mut self) -> Result<bool, UiError> {
        let (namespace, name) = self.routing_key()?;
        let mut dashboard = self.dashboard();
        if dashboard.routing.remove(&format!("{namespace}/{name}")).is_none() {
            return Ok(false);
        }

        remove_routing(&mut dashboard, &namespace, &name);
        Ok(true)
    }

    async fn is_action_enabled(&mut self, action: RoutingWizardType) -> Result<bool, UiError> {
        let (namespace, name) = self.routing_key()?;
        let current = self.dashboard().routing.get(&format!("{namespace}/{name}")).copied();
        Ok(is_enabled(current, action))
    }
}

impl ServiceOverviews for FakePage<Service> {
    async fn virtual_service_overview(&mut self, name: &str) -> Result<VirtualService, UiError> {
        let service = self.opened()?.clone();
        service
            .details(&self.dashboard().ui)
            .and_then(|d| d.virtual_services.into_iter().find(|vs| vs.name == name))
            .ok_or_else(|| UiError::ElementNotFound(format!("VS overview {name}")))
    }

    async fn destination_rule_overview(&mut self, name: &str) -> Result<DestinationRule, UiError> {
        let service = self.opened()?.clone();
        service
            .details(&self.dashboard().ui)
            .and_then(|d| d.destination_rules.into_iter().find(|dr| dr.name == name))
            .ok_or_else(|| UiError::ElementNotFound(format!("DR overview {name}")))
    }
}

impl ConfigActions for FakePage<IstioConfig> {
    async fn delete_config(&mut self) -> Result<(), UiError> {
        let Some(config) = self.opened.take() else {
            return Err(UiError::ElementNotFound("Istio config details".to_owned()));
        };

        for data in self.dashboard().datasets_mut() {
            data.remove_istio_config(&config.namespace, config.object_type, &config.name);
        }

        Ok(())
    }
}
