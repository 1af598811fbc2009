use kqe_common::word_in_text;
use kqe_model::{IstioConfigObjectType, RestClient, RoutingWizardLoadBalancer, RoutingWizardTls, RoutingWizardType};
use tracing::debug;

use crate::ui::RoutingActions;
use crate::{CheckError, CheckResult};

#[cfg(test)]
#[path = "./routing.tests.rs"]
mod routing_tests;

const MESH_GATEWAY: &str = "\"mesh\"";

/// Traffic routing configured for the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoutingState {
    #[default]
    NoRouting,
    WeightedRouting,
    MatchingRouting,
    SuspendedRouting,
}

impl RoutingState {
    /// Returns state of the service after the wizard `action` is submitted.
    pub fn after(self, action: RoutingWizardType) -> Self {
        match action {
            RoutingWizardType::CreateWeightedRouting | RoutingWizardType::UpdateWeightedRouting => {
                Self::WeightedRouting
            },
            RoutingWizardType::CreateMatchingRouting | RoutingWizardType::UpdateMatchingRouting => {
                Self::MatchingRouting
            },
            RoutingWizardType::SuspendTraffic | RoutingWizardType::UpdateSuspendedTraffic => Self::SuspendedRouting,
            RoutingWizardType::DeleteAllTrafficRouting => Self::NoRouting,
        }
    }

    /// Returns actions whose enablement is checked in this state together with the expected enablement.
    pub fn expected_actions(self) -> Vec<(RoutingWizardType, bool)> {
        match self {
            Self::NoRouting => vec![
                (RoutingWizardType::DeleteAllTrafficRouting, false),
                (RoutingWizardType::CreateWeightedRouting, true),
                (RoutingWizardType::CreateMatchingRouting, true),
                (RoutingWizardType::SuspendTraffic, true),
            ],
            Self::WeightedRouting => vec![
                (RoutingWizardType::DeleteAllTrafficRouting, true),
                (RoutingWizardType::UpdateWeightedRouting, true),
                (RoutingWizardType::CreateMatchingRouting, false),
                (RoutingWizardType::SuspendTraffic, false),
            ],
            Self::MatchingRouting => vec![
                (RoutingWizardType::DeleteAllTrafficRouting, true),
                (RoutingWizardType::UpdateMatchingRouting, true),
                (RoutingWizardType::CreateWeightedRouting, false),
                (RoutingWizardType::SuspendTraffic, false),
            ],
            Self::SuspendedRouting => vec![
                (RoutingWizardType::DeleteAllTrafficRouting, true),
                (RoutingWizardType::CreateMatchingRouting, false),
                (RoutingWizardType::CreateWeightedRouting, false),
                (RoutingWizardType::UpdateSuspendedTraffic, true),
            ],
        }
    }
}

/// Advanced options of the routing wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingOptions {
    pub tls: Option<RoutingWizardTls>,
    pub load_balancer: bool,
    pub load_balancer_type: Option<RoutingWizardLoadBalancer>,
    pub gateway: bool,
    pub include_mesh_gateway: bool,
}

impl Default for RoutingOptions {
    fn default() -> Self {
        Self {
            tls: Some(RoutingWizardTls::IstioMutual),
            load_balancer: true,
            load_balancer_type: Some(RoutingWizardLoadBalancer::RoundRobin),
            gateway: true,
            include_mesh_gateway: true,
        }
    }
}

/// Asserts that enablement of routing actions matches the `state`.
pub async fn assert_actions<P: RoutingActions>(page: &mut P, state: RoutingState) -> CheckResult {
    for (action, expected) in state.expected_actions() {
        let enabled = page.is_action_enabled(action).await?;
        verify!(
            enabled == expected,
            "Action '{}' is {} in state {:?}",
            action,
            if enabled { "enabled" } else { "disabled" },
            state
        );
    }

    Ok(())
}

/// Asserts that REST reports routing objects generated by the wizard for the service.
pub async fn assert_rest_routing<R: RestClient>(
    rest: &R,
    namespace: &str,
    name: &str,
    options: &RoutingOptions,
) -> CheckResult {
    let details = rest.service_details(namespace, name).await.map_err(CheckError::rest)?;
    debug!(
        "Service {}/{} has {} VS and {} DR",
        namespace,
        name,
        details.virtual_services.len(),
        details.destination_rules.len()
    );

    verify!(details.virtual_services.len() == 1, "Service {name} should have 1 VS");
    verify!(details.destination_rules.len() == 1, "Service {name} should have 1 DR");
    let vs = &details.virtual_services[0];
    let dr = &details.destination_rules[0];
    verify!(vs.name == name, "VS '{}' is not named after service {name}", vs.name);
    verify!(dr.name == name, "DR '{}' is not named after service {name}", dr.name);

    let policy = dr.traffic_policy.to_lowercase();
    if let Some(load_balancer_type) = options.load_balancer_type {
        verify!(
            word_in_text(&load_balancer_type.text().to_lowercase(), &policy, options.load_balancer),
            "Load balancer {} presence should be {} in '{}'",
            load_balancer_type,
            options.load_balancer,
            dr.traffic_policy
        );
    }

    if let Some(tls) = options.tls {
        verify!(
            word_in_text(&tls.text().to_lowercase(), &policy, true),
            "TLS {} not found in '{}'",
            tls,
            dr.traffic_policy
        );
    }

    let vs_details = rest
        .istio_config_details(namespace, IstioConfigObjectType::VirtualService, &vs.name)
        .await
        .map_err(CheckError::rest)?;
    let with_mesh = options.gateway && options.include_mesh_gateway;
    verify!(
        word_in_text(MESH_GATEWAY, &vs_details.text, with_mesh),
        "Mesh gateway presence should be {} in VS {}",
        with_mesh,
        vs.name
    );

    Ok(())
}

/// Asserts that REST reports no routing objects for the service.
pub async fn assert_rest_no_routing<R: RestClient>(rest: &R, namespace: &str, name: &str) -> CheckResult {
    let details = rest.service_details(namespace, name).await.map_err(CheckError::rest)?;
    verify!(details.virtual_services.is_empty(), "Service {name} should have no VS");
    verify!(details.destination_rules.is_empty(), "Service {name} should have no DR");

    Ok(())
}
