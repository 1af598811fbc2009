use kqe_model::{
    Application, ApplicationDetails, IstioConfig, IstioConfigDetails, Overview, Service, ServiceDetails, Workload,
    WorkloadDetails,
};

use super::{
    ConfigActions, DetailsPage, ListPage, MetricsControls, NamespaceControls, Navigation, OverviewControls,
    RoutingActions, ServiceOverviews, TracesControls, TrafficControls,
};

/// Overview page of the dashboard.
pub trait OverviewPage: ListPage<Item = Overview> + OverviewControls {}

impl<T> OverviewPage for T where T: ListPage<Item = Overview> + OverviewControls {}

/// Applications list and details pages.
pub trait ApplicationsPage:
    DetailsPage<Item = Application, Details = ApplicationDetails> + MetricsControls + TrafficControls
{
}

impl<T> ApplicationsPage for T where
    T: DetailsPage<Item = Application, Details = ApplicationDetails> + MetricsControls + TrafficControls
{
}

/// Workloads list and details pages.
pub trait WorkloadsPage:
    DetailsPage<Item = Workload, Details = WorkloadDetails> + MetricsControls + TrafficControls
{
}

impl<T> WorkloadsPage for T where
    T: DetailsPage<Item = Workload, Details = WorkloadDetails> + MetricsControls + TrafficControls
{
}

/// Services list and details pages.
pub trait ServicesPage:
    DetailsPage<Item = Service, Details = ServiceDetails>
    + MetricsControls
    + TrafficControls
    + RoutingActions
    + ServiceOverviews
    + TracesControls
{
}

impl<T> ServicesPage for T where
    T: DetailsPage<Item = Service, Details = ServiceDetails>
        + MetricsControls
        + TrafficControls
        + RoutingActions
        + ServiceOverviews
        + TracesControls
{
}

/// Istio Config list and details pages.
pub trait IstioConfigPage: DetailsPage<Item = IstioConfig, Details = IstioConfigDetails> + ConfigActions {}

impl<T> IstioConfigPage for T where T: DetailsPage<Item = IstioConfig, Details = IstioConfigDetails> + ConfigActions {}

/// Distributed Tracing page.
pub trait DistributedTracingPage: NamespaceControls + Navigation + TracesControls {}

impl<T> DistributedTracingPage for T where T: NamespaceControls + Navigation + TracesControls {}
