pub use self::applications::ApplicationsPageTest;
pub use self::base::{ItemsCheck, ListPageTest, NAMESPACE_LOCATION, is_details_breadcrumb};
pub use self::distributed_tracing::DistributedTracingPageTest;
pub use self::istio_config::IstioConfigPageTest;
pub use self::overview::OverviewPageTest;
pub use self::services::ServicesPageTest;
pub use self::tabs::{assert_traces_state, expected_metrics_options, expected_metrics_settings};
pub use self::workloads::WorkloadsPageTest;

mod applications;
mod base;
mod distributed_tracing;
mod istio_config;
mod overview;
mod services;
mod tabs;
mod workloads;
