use kqe_model::{
    ClusterClient, Comparable, Filter, IstioConfig, IstioConfigObjectType, IstioConfigPageFilter, IstioConfigValidation,
    RestClient, SortOption,
};
use rand::rngs::StdRng;
use std::ops::{Deref, DerefMut};
use tracing::{debug, info};

use crate::pages::{ItemsCheck, ListPageTest};
use crate::reconcile::{Cardinality, compare_all};
use crate::text_diff::assert_text_contained;
use crate::ui::IstioConfigPage;
use crate::{CheckError, CheckResult};

#[cfg(test)]
#[path = "./istio_config.tests.rs"]
mod istio_config_tests;

/// Checks of the Istio Config list and details pages.
pub struct IstioConfigPageTest<P, R, C> {
    base: ListPageTest<P, R, C>,
}

impl<P, R, C> IstioConfigPageTest<P, R, C> {
    /// Creates new [`IstioConfigPageTest`] instance.
    pub fn new(page: P, rest: R, cluster: C, seed: Option<u64>) -> Self {
        Self {
            base: ListPageTest::new(page, rest, cluster, IstioConfigPageFilter::IstioName.text(), seed),
        }
    }
}

impl<P, R, C> Deref for IstioConfigPageTest<P, R, C> {
    type Target = ListPageTest<P, R, C>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl<P, R, C> DerefMut for IstioConfigPageTest<P, R, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

/// Keeps only configs of types listed in the `Istio Type` filters.
fn retain_types(configs: &mut Vec<IstioConfig>, types: &[String]) {
    if !types.is_empty() {
        configs.retain(|c| types.iter().any(|t| t == c.object_type.text()));
    }
}

/// Keeps only REST configs with validation listed in the `Config` filters./// **Note** that the cluster does not validate objects, so cluster configs are narrowed to the REST ones.
fn retain_validations(rest: &mut Vec<IstioConfig>, cluster: &mut Vec<IstioConfig>, validations: &[String]) {
    if validations.is_empty() {
        return;
    }

    rest.retain(|c| {
        let validation = c.validation.unwrap_or(IstioConfigValidation::NotAvailable);
        validations.iter().any(|v| v == validation.text())
    });
    cluster.retain(|c| {
        rest.iter()
            .any(|r| r.name == c.name && r.namespace == c.namespace && r.object_type == c.object_type)
    });
}

impl<P: IstioConfigPage, R: RestClient, C: ClusterClient> IstioConfigPageTest<P, R, C> {
    /// Asserts details of up to 3 random Istio objects returned by REST.\
    /// **Note** that rules are skipped.
    pub async fn assert_random_details(&mut self, namespaces: &[String], filters: &[Filter]) -> CheckResult {
        let names = Filter::values_of(filters, IstioConfigPageFilter::IstioName.text());
        let configs = self
            .base
            .rest
            .istio_config_list(namespaces, &names)
            .await
            .map_err(CheckError::rest)?;
        verify!(!configs.is_empty(), "REST returns no Istio objects in {:?}", namespaces);

        let selected = self.base.sample(&configs, 3);
        for config in selected.iter().filter(|c| c.object_type != IstioConfigObjectType::Rule) {
            self.assert_details(&config.name, config.object_type, &config.namespace, &[])
                .await?;
        }

        Ok(())
    }

    /// Asserts Istio object details page against REST and cluster.\
    /// **Note** that validation is compared only when REST knows it.
    pub async fn assert_details(
        &mut self,
        name: &str,
        object_type: IstioConfigObjectType,
        namespace: &str,
        error_messages: &[String],
    ) -> CheckResult {
        debug!("Istio config details: {}, {}, {}", object_type, name, namespace);

        self.base.load_details_page(name, namespace, false).await?;
        let ui = self.base.page.details(name).await?;
        verify!(ui.name == name, "UI shows Istio object '{}' instead of '{}'", ui.name, name);
        verify!(!ui.text.is_empty(), "UI shows no text for {}", name);

        let rest = self
            .base
            .rest
            .istio_config_details(namespace, object_type, name)
            .await
            .map_err(CheckError::rest)?;
        verify!(rest.name == name, "REST returns Istio object '{}' instead of '{}'", rest.name, name);
        verify!(!rest.text.is_empty(), "REST returns no text for {}", name);

        let cluster = self
            .base
            .cluster
            .istio_config_details(namespace, object_type, name)
            .await
            .map_err(CheckError::cluster)?;
        verify!(cluster.name == name, "Cluster returns Istio object '{}' instead of '{}'", cluster.name, name);

        for message in error_messages {
            verify!(
                rest.error_messages.contains(message),
                "Error message '{}' is not in {:?}",
                message,
                rest.error_messages
            );
        }

        let advanced_check = rest.validation != Some(IstioConfigValidation::NotAvailable);
        verify!(
            ui.is_equal(&rest, advanced_check),
            "Istio object UI {:?} not equal to REST {:?}",
            ui,
            rest
        );

        assert_text_contained(&ui.text, &rest.text, &cluster.text, object_type)
    }

    /// Deletes Istio object from its details page and asserts it is not listed anymore.
    pub async fn delete_istio_config(&mut self, name: &str, object_type: IstioConfigObjectType, namespace: &str) -> CheckResult {
        info!("Deleting {} {}/{}", object_type, namespace, name);

        self.base.load_details_page(name, namespace, false).await?;
        self.base.page.delete_config().await?;
        self.base.page.load(true).await?;

        let namespaces = [namespace.to_owned()];
        let filters = [Filter::new(IstioConfigPageFilter::IstioName.text(), name)];
        let ui = self.base.ui_items(&namespaces, &filters, None, false).await?;
        verify!(
            !ui.iter().any(|c| c.name == name && c.object_type == object_type),
            "{} {} is still listed in UI",
            object_type,
            name
        );

        let rest = self
            .base
            .rest
            .istio_config_list(&namespaces, &[name.to_owned()])
            .await
            .map_err(CheckError::rest)?;
        verify!(
            !rest.iter().any(|c| c.name == name && c.object_type == object_type),
            "{} {} is still returned by REST",
            object_type,
            name
        );

        Ok(())
    }
}

impl<P: IstioConfigPage, R: RestClient, C: ClusterClient> ItemsCheck for IstioConfigPageTest<P, R, C> {
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

    /// **Note** that cluster must return exactly the same number of objects as REST.
    async fn assert_all_items(
        &mut self,
        namespaces: &[String],
        filters: &[Filter],
        sort: Option<&SortOption>,
        force_clear_all: bool,
    ) -> CheckResult {
        debug!("Filters: {:?}", filters);
        let ui = self.base.ui_items(namespaces, filters, sort, force_clear_all).await?;

        let names = Filter::values_of(filters, IstioConfigPageFilter::IstioName.text());
        let types = Filter::values_of(filters, IstioConfigPageFilter::IstioType.text());
        let validations = Filter::values_of(filters, IstioConfigPageFilter::Config.text());
        let mut rest = self
            .base
            .rest
            .istio_config_list(namespaces, &names)
            .await
            .map_err(CheckError::rest)?;
        let mut cluster = self
            .base
            .cluster
            .istio_config_list(namespaces, &names)
            .await
            .map_err(CheckError::cluster)?;
        retain_types(&mut rest, &types);
        retain_types(&mut cluster, &types);
        retain_validations(&mut rest, &mut cluster, &validations);

        compare_all("Istio Config", &ui, &rest, &cluster, Cardinality::Exact)
    }

    async fn get_additional_filters(&mut self, namespaces: &[String], current: &[Filter]) -> CheckResult<Vec<Filter>> {
        debug!("Current filters: {:?}", current);
        let Some(namespace) = namespaces.first() else {
            return Ok(Vec::new());
        };

        let configs = self
            .base
            .rest
            .istio_config_list(std::slice::from_ref(namespace), &[])
            .await
            .map_err(CheckError::rest)?;

        Ok(self
            .base
            .choose(&configs)
            .map(|c| vec![Filter::new(IstioConfigPageFilter::IstioName.text(), c.name.clone())])
            .unwrap_or_default())
    }
}
