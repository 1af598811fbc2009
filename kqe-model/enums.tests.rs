use rstest::rstest;
use std::str::FromStr;

use super::*;

#[rstest]
#[case(IstioConfigPageFilter::IstioName, "Istio Name")]
#[case(IstioConfigPageFilter::IstioType, "Istio Type")]
#[case(IstioConfigPageFilter::Config, "Config")]
fn text_round_trip_test(#[case] filter: IstioConfigPageFilter, #[case] text: &str) {
    assert_eq!(text, filter.text());
    assert_eq!(text, filter.to_string());
    assert_eq!(filter, IstioConfigPageFilter::from_str(text).unwrap());
}

#[test]
fn unknown_text_test() {
    let error = ServicesPageSort::from_str("Unknown Column").unwrap_err();
    assert_eq!("unknown ServicesPageSort value 'Unknown Column'", error.to_string());
}

#[test]
fn texts_keep_ui_order_test() {
    assert_eq!(vec!["Namespace", "Istio Name", "Istio Type", "Configuration"], IstioConfigPageSort::texts());
    assert_eq!(3, OverviewPageType::ALL.len());
}

#[test]
fn istio_object_type_test() {
    assert_eq!("virtualservices", IstioConfigObjectType::VirtualService.rest_name());
    assert_eq!("networking.istio.io", IstioConfigObjectType::Gateway.api_group());
    assert_eq!("security.istio.io", IstioConfigObjectType::PeerAuthentication.api_group());
    assert_eq!(Ok(IstioConfigObjectType::DestinationRule), "DestinationRule".parse());
}
