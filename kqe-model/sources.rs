use std::error::Error;

use crate::{
    Application, ApplicationDetails, IstioConfig, IstioConfigDetails, IstioConfigObjectType, Overview, OverviewPageType,
    Service, ServiceDetails, Workload, WorkloadDetails,
};

/// Dashboard backend API as a source of records.\
/// **Note** that empty `namespaces` means all namespaces and empty `names` means no name filtering.
pub trait RestClient {
    type Error: Error + Send + Sync + 'static;

    /// Returns names of all namespaces visible to the dashboard.
    fn namespace_list(&self) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send;

    /// Returns namespace summaries of the given type.
    fn overview_list(
        &self,
        namespaces: &[String],
        overview_type: OverviewPageType,
    ) -> impl Future<Output = Result<Vec<Overview>, Self::Error>> + Send;

    /// Returns applications from the specified namespaces.
    fn application_list(
        &self,
        namespaces: &[String],
        names: &[String],
    ) -> impl Future<Output = Result<Vec<Application>, Self::Error>> + Send;

    /// Returns details of a single application.
    fn application_details(
        &self,
        namespace: &str,
        name: &str,
    ) -> impl Future<Output = Result<ApplicationDetails, Self::Error>> + Send;

    /// Returns workloads from the specified namespaces.
    fn workload_list(
        &self,
        namespaces: &[String],
        names: &[String],
    ) -> impl Future<Output = Result<Vec<Workload>, Self::Error>> + Send;

    /// Returns details of a single workload.
    fn workload_details(
        &self,
        namespace: &str,
        name: &str,
        workload_type: &str,
    ) -> impl Future<Output = Result<WorkloadDetails, Self::Error>> + Send;

    /// Returns services from the specified namespaces.
    fn service_list(
        &self,
        namespaces: &[String],
        names: &[String],
    ) -> impl Future<Output = Result<Vec<Service>, Self::Error>> + Send;

    /// Returns details of a single service.
    fn service_details(
        &self,
        namespace: &str,
        name: &str,
    ) -> impl Future<Output = Result<ServiceDetails, Self::Error>> + Send;

    /// Returns Istio configuration objects from the specified namespaces.
    fn istio_config_list(
        &self,
        namespaces: &[String],
        names: &[String],
    ) -> impl Future<Output = Result<Vec<IstioConfig>, Self::Error>> + Send;

    /// Returns details of a single Istio configuration object.
    fn istio_config_details(
        &self,
        namespace: &str,
        object_type: IstioConfigObjectType,
        name: &str,
    ) -> impl Future<Output = Result<IstioConfigDetails, Self::Error>> + Send;
}

/// Orchestration platform API as a source of records.\
/// **Note** that it may return entities that are not managed by the mesh.
pub trait ClusterClient {
    type Error: Error + Send + Sync + 'static;

    /// Returns names of all namespaces in the cluster.
    fn namespace_list(&self) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send;

    /// Returns applications (workloads grouped by the `app` label).
    fn application_list(
        &self,
        namespaces: &[String],
        names: &[String],
    ) -> impl Future<Output = Result<Vec<Application>, Self::Error>> + Send;

    /// Returns details of a single application.
    fn application_details(
        &self,
        namespace: &str,
        name: &str,
    ) -> impl Future<Output = Result<ApplicationDetails, Self::Error>> + Send;

    /// Returns workloads from the specified namespaces.
    fn workload_list(
        &self,
        namespaces: &[String],
        names: &[String],
    ) -> impl Future<Output = Result<Vec<Workload>, Self::Error>> + Send;

    /// Returns details of a single workload.
    fn workload_details(
        &self,
        namespace: &str,
        name: &str,
        workload_type: &str,
    ) -> impl Future<Output = Result<WorkloadDetails, Self::Error>> + Send;

    /// Returns services from the specified namespaces.
    fn service_list(
        &self,
        namespaces: &[String],
        names: &[String],
    ) -> impl Future<Output = Result<Vec<Service>, Self::Error>> + Send;

    /// Returns details of a single service.
    fn service_details(
        &self,
        namespace: &str,
        name: &str,
    ) -> impl Future<Output = Result<ServiceDetails, Self::Error>> + Send;

    /// Returns Istio configuration objects from the specified namespaces.
    fn istio_config_list(
        &self,
        namespaces: &[String],
        names: &[String],
    ) -> impl Future<Output = Result<Vec<IstioConfig>, Self::Error>> + Send;

    /// Returns details of a single Istio configuration object.
    fn istio_config_details(
        &self,
        namespace: &str,
        object_type: IstioConfigObjectType,
        name: &str,
    ) -> impl Future<Output = Result<IstioConfigDetails, Self::Error>> + Send;
}
