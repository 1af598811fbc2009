use kqe_model::{DestinationRule, Filter, RoutingWizardType, SortOption, TrafficItem, TrafficType, VirtualService};

pub use self::pages::{
    ApplicationsPage, DistributedTracingPage, IstioConfigPage, OverviewPage, ServicesPage, WorkloadsPage,
};

use crate::routing::RoutingOptions;

mod pages;

/// Possible errors reported by the UI driver.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum UiError {
    /// Page element cannot be found.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// UI action could not be performed.
    #[error("cannot {action}: {message}")]
    ActionFailed { action: String, message: String },

    /// Page did not finish loading in time.
    #[error("timed out waiting for {0}")]
    Timeout(String),
}

/// Locations shown in the page breadcrumb.\
/// **Note** that the last location is the active one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumb {
    pub locations: Vec<String>,
}

impl Breadcrumb {
    /// Creates new [`Breadcrumb`] instance.
    pub fn new(locations: Vec<String>) -> Self {
        Self { locations }
    }

    /// Returns the active location.
    pub fn active(&self) -> Option<&str> {
        self.locations.last().map(String::as_str)
    }

    /// Returns the location at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.locations.get(index).map(String::as_str)
    }

    /// Returns number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if there are no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Namespace selector of the page.
pub trait NamespaceControls {
    /// Returns all namespaces offered by the selector.
    async fn namespaces(&mut self) -> Result<Vec<String>, UiError>;

    /// Returns currently selected namespaces.
    async fn checked_namespaces(&mut self) -> Result<Vec<String>, UiError>;

    async fn check_namespace(&mut self, namespace: &str) -> Result<(), UiError>;

    async fn uncheck_namespace(&mut self, namespace: &str) -> Result<(), UiError>;

    /// Unselects all namespaces.
    async fn clear_namespaces(&mut self) -> Result<(), UiError>;
}

/// Filter toolbar of the page.
pub trait FilterControls {
    /// Returns names of all filters offered by the page.
    async fn filter_options(&mut self) -> Result<Vec<String>, UiError>;

    /// Returns values offered for the filter `filter_name`.\
    /// **Note** that free-text filters return an empty list.
    async fn filter_values(&mut self, filter_name: &str) -> Result<Vec<String>, UiError>;

    /// Returns filters shown as active chips.
    async fn active_filters(&mut self) -> Result<Vec<Filter>, UiError>;

    async fn apply_filter(&mut self, filter: &Filter) -> Result<(), UiError>;

    async fn remove_filter(&mut self, filter: &Filter) -> Result<(), UiError>;

    /// Removes all active filters.
    async fn clear_filters(&mut self) -> Result<(), UiError>;
}

/// Sort selector of the page.
pub trait SortControls {
    /// Returns names of all sort options offered by the page.
    async fn sort_options(&mut self) -> Result<Vec<String>, UiError>;

    async fn select_sort(&mut self, sort: &SortOption) -> Result<(), UiError>;
}

/// Page navigation.
pub trait Navigation {
    /// Main menu entry of the page.
    const PAGE_MENU: &'static str;

    /// Opens the page.\
    /// **Note** that it does nothing if the page is already open and `force` is not set.
    async fn load(&mut self, force: bool) -> Result<(), UiError>;

    /// Refreshes page content and waits until it is loaded.
    async fn refresh(&mut self) -> Result<(), UiError>;

    async fn breadcrumb(&mut self) -> Result<Breadcrumb, UiError>;

    async fn click_breadcrumb(&mut self, location: &str) -> Result<(), UiError>;

    /// Opens details of the item from the list.
    async fn open_item(&mut self, name: &str, namespace: Option<&str>, force_refresh: bool) -> Result<(), UiError>;
}

/// List page with namespaces, filters and sort.
pub trait ListPage: NamespaceControls + FilterControls + SortControls + Navigation {
    type Item;

    /// Returns all rows of the list.
    async fn all_items(&mut self) -> Result<Vec<Self::Item>, UiError>;
}

/// List page that also shows details of its items.
pub trait DetailsPage: ListPage {
    type Details;

    /// Returns details of the currently opened item.
    async fn details(&mut self, name: &str) -> Result<Self::Details, UiError>;
}

/// Type selector of the Overview page.
pub trait OverviewControls {
    async fn type_options(&mut self) -> Result<Vec<String>, UiError>;

    async fn select_type(&mut self, overview_type: &str) -> Result<(), UiError>;
}

/// Actions menu of the Service details page.
pub trait RoutingActions {
    /// Runs the routing wizard and returns `true` if it was submitted.
    async fn run_wizard(&mut self, action: RoutingWizardType, options: &RoutingOptions) -> Result<bool, UiError>;

    /// Confirms `Delete ALL Traffic Routing` and returns `true` if it was submitted.
    async fn delete_all_routing(&mut self) -> Result<bool, UiError>;

    async fn is_action_enabled(&mut self, action: RoutingWizardType) -> Result<bool, UiError>;
}

/// Istio objects overview rows of the Service details page.
pub trait ServiceOverviews {
    async fn virtual_service_overview(&mut self, name: &str) -> Result<VirtualService, UiError>;

    async fn destination_rule_overview(&mut self, name: &str) -> Result<DestinationRule, UiError>;
}

/// Direction of the metrics tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricsTab {
    Inbound,
    Outbound,
}

/// Drop-downs of the metrics tab toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricsOption {
    Destination,
    Duration,
    Interval,
}

/// Metrics tabs of the details page.
pub trait MetricsControls {
    async fn open_metrics(&mut self, tab: MetricsTab) -> Result<(), UiError>;

    /// Returns labels of all entries of the metrics settings drop-down.
    async fn metrics_settings(&mut self, tab: MetricsTab) -> Result<Vec<String>, UiError>;

    async fn set_metrics_setting(&mut self, tab: MetricsTab, name: &str, checked: bool) -> Result<(), UiError>;

    async fn is_metrics_setting_checked(&mut self, tab: MetricsTab, name: &str) -> Result<bool, UiError>;

    /// Returns entries of the toolbar drop-down.
    async fn metrics_options(&mut self, tab: MetricsTab, option: MetricsOption) -> Result<Vec<String>, UiError>;
}

/// Traffic tab of the details page.
pub trait TrafficControls {
    async fn inbound_traffic(&mut self) -> Result<Vec<TrafficItem>, UiError>;

    /// Opens the traffic item and returns its outbound traffic.
    async fn click_traffic_item(
        &mut self,
        object_type: TrafficType,
        name: &str,
        inbound: bool,
    ) -> Result<Vec<TrafficItem>, UiError>;
}

/// State of the traces view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracesState {
    pub login_displayed: bool,
    pub has_no_results: bool,
    pub has_results: bool,
}

/// Traces tab or the Distributed Tracing page.
pub trait TracesControls {
    async fn open_traces(&mut self) -> Result<(), UiError>;

    /// Searches traces of the service.\
    /// **Note** that `None` searches with the currently selected service.
    async fn search_traces(&mut self, service: Option<&str>) -> Result<(), UiError>;

    async fn traces_state(&mut self) -> Result<TracesState, UiError>;
}

/// Actions menu of the Istio object details page.
pub trait ConfigActions {
    /// Deletes the currently opened Istio object.
    async fn delete_config(&mut self) -> Result<(), UiError>;
}
