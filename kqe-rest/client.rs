use kqe_config::KialiConfig;
use kqe_model::{
    Application, ApplicationDetails, IstioConfig, IstioConfigDetails, IstioConfigObjectType, Overview, OverviewPageType,
    RestClient, Service, ServiceDetails, Workload, WorkloadDetails, name_matches,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::istio::{parse_istio_details, parse_istio_list};
use crate::responses::{
    AppDetailsResponse, AppListResponse, NamespaceRef, ServiceDetailsResponse, ServiceListResponse,
    WorkloadDetailsResponse, WorkloadListResponse, parse_overview,
};

/// Possible errors from the dashboard REST API.
#[derive(thiserror::Error, Debug)]
pub enum RestError {
    /// Failed to build HTTP client or to send request.
    #[error("HTTP request failed")]
    HttpError(#[from] reqwest::Error),

    /// Dashboard responded with unexpected status code.
    #[error("request to '{url}' returned {status}")]
    StatusError { url: String, status: StatusCode },

    /// Response body does not match expected structure.
    #[error("cannot deserialize response")]
    DeserializationError(#[from] serde_json::Error),
}

/// Dashboard REST API client.
#[derive(Clone)]
pub struct KialiClient {
    client: Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
    token: Option<String>,
}

impl KialiClient {
    /// Creates new [`KialiClient`] instance.
    pub fn new(config: &KialiConfig) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.insecure)
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_owned(),
            username: config.username.clone(),
            password: config.password.clone(),
            token: config.token.clone(),
        })
    }

    /// Returns URL of the dashboard API endpoint.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends `GET` request to the API endpoint and deserializes its JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RestError> {
        let url = self.api_url(path);
        debug!("GET {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        } else if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_deref());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RestError::StatusError { url, status });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Returns `namespaces` or all namespaces if `namespaces` is empty.
    async fn namespaces_or_all(&self, namespaces: &[String]) -> Result<Vec<String>, RestError> {
        if namespaces.is_empty() {
            self.namespace_list().await
        } else {
            Ok(namespaces.to_vec())
        }
    }
}

impl RestClient for KialiClient {
    type Error = RestError;

    async fn namespace_list(&self) -> Result<Vec<String>, RestError> {
        let namespaces = self.get::<Vec<NamespaceRef>>("namespaces").await?;
        Ok(namespaces.into_iter().map(|n| n.name).collect())
    }

    async fn overview_list(&self, namespaces: &[String], overview_type: OverviewPageType) -> Result<Vec<Overview>, RestError> {
        let mut result = Vec::new();
        for namespace in self.namespaces_or_all(namespaces).await? {
            let path = format!("namespaces/{namespace}/health?type={}", overview_type.health_type());
            let health = self.get::<Value>(&path).await?;
            result.push(parse_overview(&namespace, overview_type, &health));
        }

        Ok(result)
    }

    async fn application_list(&self, namespaces: &[String], names: &[String]) -> Result<Vec<Application>, RestError> {
        let mut result = Vec::new();
        for namespace in self.namespaces_or_all(namespaces).await? {
            let response = self.get::<AppListResponse>(&format!("namespaces/{namespace}/apps")).await?;
            result.extend(
                response
                    .applications
                    .into_iter()
                    .filter(|a| name_matches(&a.name, names))
                    .map(|a| a.into_record(&namespace)),
            );
        }

        Ok(result)
    }

    async fn application_details(&self, namespace: &str, name: &str) -> Result<ApplicationDetails, RestError> {
        let response = self
            .get::<AppDetailsResponse>(&format!("namespaces/{namespace}/apps/{name}"))
            .await?;
        Ok(response.into_record(namespace))
    }

    async fn workload_list(&self, namespaces: &[String], names: &[String]) -> Result<Vec<Workload>, RestError> {
        let mut result = Vec::new();
        for namespace in self.namespaces_or_all(namespaces).await? {
            let response = self
                .get::<WorkloadListResponse>(&format!("namespaces/{namespace}/workloads"))
                .await?;
            result.extend(
                response
                    .workloads
                    .into_iter()
                    .filter(|w| name_matches(&w.name, names))
                    .map(|w| w.into_record(&namespace)),
            );
        }

        Ok(result)
    }

    async fn workload_details(&self, namespace: &str, name: &str, _workload_type: &str) -> Result<WorkloadDetails, RestError> {
        let response = self
            .get::<WorkloadDetailsResponse>(&format!("namespaces/{namespace}/workloads/{name}"))
            .await?;
        Ok(response.into_record(namespace))
    }

    async fn service_list(&self, namespaces: &[String], names: &[String]) -> Result<Vec<Service>, RestError> {
        let mut result = Vec::new();
        for namespace in self.namespaces_or_all(namespaces).await? {
            let response = self
                .get::<ServiceListResponse>(&format!("namespaces/{namespace}/services"))
                .await?;
            result.extend(
                response
                    .services
                    .into_iter()
                    .filter(|s| name_matches(&s.name, names))
                    .map(|s| s.into_record(&namespace)),
            );
        }

        Ok(result)
    }

    async fn service_details(&self, namespace: &str, name: &str) -> Result<ServiceDetails, RestError> {
        let response = self
            .get::<ServiceDetailsResponse>(&format!("namespaces/{namespace}/services/{name}"))
            .await?;
        Ok(response.into_record(namespace))
    }

    async fn istio_config_list(&self, namespaces: &[String], names: &[String]) -> Result<Vec<IstioConfig>, RestError> {
        let mut result = Vec::new();
        for namespace in self.namespaces_or_all(namespaces).await? {
            let response = self
                .get::<Value>(&format!("namespaces/{namespace}/istio?validate=true"))
                .await?;
            result.extend(
                parse_istio_list(&response, &namespace)
                    .into_iter()
                    .filter(|c| name_matches(&c.name, names)),
            );
        }

        Ok(result)
    }

    async fn istio_config_details(
        &self,
        namespace: &str,
        object_type: IstioConfigObjectType,
        name: &str,
    ) -> Result<IstioConfigDetails, RestError> {
        let path = format!("namespaces/{namespace}/istio/{}/{name}?validate=true", object_type.rest_name());
        let response = self.get::<Value>(&path).await?;
        Ok(parse_istio_details(&response, namespace, object_type, name))
    }
}
