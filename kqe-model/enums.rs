use crate::define_ui_enum;

#[cfg(test)]
#[path = "./enums.tests.rs"]
mod enums_tests;

/// Error returned when a UI text does not match any variant.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("unknown {kind} value '{value}'")]
pub struct UnknownVariantError {
    kind: &'static str,
    value: String,
}

impl UnknownVariantError {
    /// Creates new [`UnknownVariantError`] instance.
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

define_ui_enum! {
    /// Filters available on the Overview page.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum OverviewPageFilter {
        Name => "Name",
        Label => "Label",
        MtlsStatus => "mTLS status",
        Health => "Health",
    }
}

define_ui_enum! {
    /// Overview page content type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum OverviewPageType {
        Apps => "Apps",
        Workloads => "Workloads",
        Services => "Services",
    }
}

impl OverviewPageType {
    /// Returns the type name used by the REST health endpoint.
    pub const fn health_type(&self) -> &'static str {
        match self {
            Self::Apps => "app",
            Self::Workloads => "workload",
            Self::Services => "service",
        }
    }
}

define_ui_enum! {
    /// Sort options available on the Overview page.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum OverviewPageSort {
        Name => "Name",
        Status => "Status",
        Mtls => "mTLS",
    }
}

define_ui_enum! {
    /// Filters available on the Applications page.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum ApplicationsPageFilter {
        AppName => "App Name",
        IstioSidecar => "Istio Sidecar",
        Health => "Health",
        Label => "Label",
    }
}

define_ui_enum! {
    /// Sort options available on the Applications page.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum ApplicationsPageSort {
        Namespace => "Namespace",
        AppName => "Application Name",
        Details => "Details",
        Health => "Health",
    }
}

define_ui_enum! {
    /// Filters available on the Workloads page.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum WorkloadsPageFilter {
        WorkloadName => "Workload Name",
        WorkloadType => "Workload Type",
        IstioSidecar => "Istio Sidecar",
        Health => "Health",
        AppLabel => "App Label",
        VersionLabel => "Version Label",
        Label => "Label",
    }
}

define_ui_enum! {
    /// Sort options available on the Workloads page.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum WorkloadsPageSort {
        Namespace => "Namespace",
        WorkloadName => "Workload Name",
        WorkloadType => "Workload Type",
        Details => "Details",
        Health => "Health",
        AppLabel => "App Label",
        VersionLabel => "Version Label",
    }
}

define_ui_enum! {
    /// Filters available on the Services page.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum ServicesPageFilter {
        ServiceName => "Service Name",
        IstioSidecar => "Istio Sidecar",
        IstioType => "Istio Type",
        Health => "Health",
        Label => "Label",
    }
}

define_ui_enum! {
    /// Sort options available on the Services page.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum ServicesPageSort {
        Namespace => "Namespace",
        ServiceName => "Service Name",
        Details => "Details",
        Health => "Health",
        Configuration => "Configuration",
    }
}

define_ui_enum! {
    /// Filters available on the Istio Config page.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum IstioConfigPageFilter {
        IstioType => "Istio Type",
        IstioName => "Istio Name",
        Config => "Config",
    }
}

define_ui_enum! {
    /// Sort options available on the Istio Config page.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum IstioConfigPageSort {
        Namespace => "Namespace",
        IstioName => "Istio Name",
        IstioType => "Istio Type",
        Configuration => "Configuration",
    }
}

define_ui_enum! {
    /// Istio configuration object types.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum IstioConfigObjectType {
        AuthorizationPolicy => "AuthorizationPolicy",
        DestinationRule => "DestinationRule",
        EnvoyFilter => "EnvoyFilter",
        Gateway => "Gateway",
        PeerAuthentication => "PeerAuthentication",
        RequestAuthentication => "RequestAuthentication",
        Rule => "Rule",
        ServiceEntry => "ServiceEntry",
        Sidecar => "Sidecar",
        VirtualService => "VirtualService",
        WorkloadEntry => "WorkloadEntry",
    }
}

impl IstioConfigObjectType {
    /// Returns the REST API path segment and response key for the object type.
    pub const fn rest_name(&self) -> &'static str {
        match self {
            Self::AuthorizationPolicy => "authorizationpolicies",
            Self::DestinationRule => "destinationrules",
            Self::EnvoyFilter => "envoyfilters",
            Self::Gateway => "gateways",
            Self::PeerAuthentication => "peerauthentications",
            Self::RequestAuthentication => "requestauthentications",
            Self::Rule => "rules",
            Self::ServiceEntry => "serviceentries",
            Self::Sidecar => "sidecars",
            Self::VirtualService => "virtualservices",
            Self::WorkloadEntry => "workloadentries",
        }
    }

    /// Returns the Istio API group the object type belongs to.
    pub const fn api_group(&self) -> &'static str {
        match self {
            Self::AuthorizationPolicy | Self::PeerAuthentication | Self::RequestAuthentication => "security.istio.io",
            Self::Rule => "config.istio.io",
            _ => "networking.istio.io",
        }
    }
}

define_ui_enum! {
    /// Validation state of the Istio configuration object.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum IstioConfigValidation {
        Valid => "Valid",
        NotValid => "Not Valid",
        Warning => "Warning",
        NotAvailable => "N/A",
    }
}

define_ui_enum! {
    /// Health state shown for applications, workloads and services.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Health {
        Healthy => "Healthy",
        Degraded => "Degraded",
        Failure => "Failure",
        NotAvailable => "N/A",
    }
}

define_ui_enum! {
    /// Actions of the Service page routing wizard.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum RoutingWizardType {
        CreateWeightedRouting => "Create Weighted Routing",
        CreateMatchingRouting => "Create Matching Routing",
        SuspendTraffic => "Suspend Traffic",
        UpdateWeightedRouting => "Update Weighted Routing",
        UpdateMatchingRouting => "Update Matching Routing",
        UpdateSuspendedTraffic => "Update Suspended Traffic",
        DeleteAllTrafficRouting => "Delete ALL Traffic Routing",
    }
}

define_ui_enum! {
    /// TLS modes offered by the routing wizard.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum RoutingWizardTls {
        Disable => "DISABLE",
        IstioMutual => "ISTIO_MUTUAL",
        Simple => "SIMPLE",
        Mutual => "MUTUAL",
    }
}

define_ui_enum! {
    /// Load balancer algorithms offered by the routing wizard.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum RoutingWizardLoadBalancer {
        RoundRobin => "ROUND_ROBIN",
        LeastConn => "LEAST_CONN",
        Random => "RANDOM",
        Passthrough => "PASSTHROUGH",
    }
}

define_ui_enum! {
    /// Object types listed on the traffic tab.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum TrafficType {
        App => "App",
        Workload => "Workload",
        Service => "Service",
        Unknown => "Unknown",
    }
}

define_ui_enum! {
    /// Reporter options of the metrics tab.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum MetricsSource {
        Source => "Source",
        Destination => "Destination",
    }
}

define_ui_enum! {
    /// Histogram options of the metrics settings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum MetricsHistograms {
        Average => "Average",
        Median => "Median",
        Quantile95 => "Quantile 0.95",
        Quantile99 => "Quantile 0.99",
        Quantile999 => "Quantile 0.999",
    }
}

define_ui_enum! {
    /// Label options of the inbound metrics settings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum InboundMetricsFilter {
        LocalVersion => "Local version",
        RemoteApp => "Remote app",
        RemoteVersion => "Remote version",
        ResponseCode => "Response code",
        GrpcStatus => "GRPC status",
        ResponseFlags => "Response flags",
    }
}

define_ui_enum! {
    /// Label options of the outbound metrics settings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum OutboundMetricsFilter {
        LocalVersion => "Local version",
        RemoteService => "Remote service",
        RemoteApp => "Remote app",
        RemoteVersion => "Remote version",
        ResponseCode => "Response code",
        GrpcStatus => "GRPC status",
        ResponseFlags => "Response flags",
    }
}

define_ui_enum! {
    /// Duration options of the time range selector.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum TimeIntervalUIText {
        Minute => "Last 1m",
        FiveMinutes => "Last 5m",
        TenMinutes => "Last 10m",
        ThirtyMinutes => "Last 30m",
        Hour => "Last 1h",
        ThreeHours => "Last 3h",
        SixHours => "Last 6h",
        TwelveHours => "Last 12h",
        Day => "Last 1d",
        SevenDays => "Last 7d",
        ThirtyDays => "Last 30d",
    }
}

define_ui_enum! {
    /// Refresh interval options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum GraphRefreshInterval {
        Pause => "Pause",
        TenSeconds => "Every 10s",
        FifteenSeconds => "Every 15s",
        ThirtySeconds => "Every 30s",
        Minute => "Every 1m",
        FiveMinutes => "Every 5m",
        FifteenMinutes => "Every 15m",
    }
}
