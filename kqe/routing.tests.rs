use rstest::rstest;

use super::*;

#[rstest]
#[case(RoutingState::NoRouting, RoutingWizardType::CreateWeightedRouting, RoutingState::WeightedRouting)]
#[case(RoutingState::WeightedRouting, RoutingWizardType::UpdateWeightedRouting, RoutingState::WeightedRouting)]
#[case(RoutingState::NoRouting, RoutingWizardType::CreateMatchingRouting, RoutingState::MatchingRouting)]
#[case(RoutingState::NoRouting, RoutingWizardType::SuspendTraffic, RoutingState::SuspendedRouting)]
#[case(RoutingState::SuspendedRouting, RoutingWizardType::UpdateSuspendedTraffic, RoutingState::SuspendedRouting)]
#[case(RoutingState::MatchingRouting, RoutingWizardType::DeleteAllTrafficRouting, RoutingState::NoRouting)]
fn routing_state_after_test(
    #[case] state: RoutingState,
    #[case] action: RoutingWizardType,
    #[case] expected: RoutingState,
) {
    assert_eq!(expected, state.after(action));
}

#[test]
fn no_routing_allows_only_create_test() {
    let actions = RoutingState::NoRouting.expected_actions();

    assert!(actions.contains(&(RoutingWizardType::DeleteAllTrafficRouting, false)));
    assert!(
        actions
            .iter()
            .filter(|(action, _)| *action != RoutingWizardType::DeleteAllTrafficRouting)
            .all(|(_, enabled)| *enabled)
    );
}

#[rstest]
#[case(RoutingState::WeightedRouting, RoutingWizardType::UpdateWeightedRouting)]
#[case(RoutingState::MatchingRouting, RoutingWizardType::UpdateMatchingRouting)]
#[case(RoutingState::SuspendedRouting, RoutingWizardType::UpdateSuspendedTraffic)]
fn configured_routing_allows_delete_and_update_test(#[case] state: RoutingState, #[case] update: RoutingWizardType) {
    let actions = state.expected_actions();

    assert_eq!(4, actions.len());
    assert!(actions.contains(&(RoutingWizardType::DeleteAllTrafficRouting, true)));
    assert!(actions.contains(&(update, true)));
    assert_eq!(2, actions.iter().filter(|(_, enabled)| !*enabled).count());
}

#[test]
fn default_options_test() {
    let options = RoutingOptions::default();

    assert_eq!(Some(RoutingWizardTls::IstioMutual), options.tls);
    assert_eq!(Some(RoutingWizardLoadBalancer::RoundRobin), options.load_balancer_type);
    assert!(options.load_balancer && options.gateway && options.include_mesh_gateway);
}
