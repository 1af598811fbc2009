use kqe_common::is_equal;
use kqe_model::{
    GraphRefreshInterval, InboundMetricsFilter, MetricsHistograms, MetricsSource, OutboundMetricsFilter,
    TimeIntervalUIText, TrafficType,
};
use tracing::debug;

use crate::CheckResult;
use crate::pages::ListPageTest;
use crate::ui::{MetricsControls, MetricsOption, MetricsTab, TracesControls, TrafficControls};

const SKIPPED_SETTING: &str = "Quantile";
const ISTIO_TRAFFIC: &str = "istio";

/// Returns settings expected in the metrics settings drop-down of the `tab`.
pub fn expected_metrics_settings(tab: MetricsTab) -> Vec<String> {
    let mut settings = match tab {
        MetricsTab::Inbound => InboundMetricsFilter::texts(),
        MetricsTab::Outbound => OutboundMetricsFilter::texts(),
    };
    settings.extend(MetricsHistograms::texts());
    settings
}

/// Returns entries expected in the metrics toolbar drop-down.
pub fn expected_metrics_options(option: MetricsOption) -> Vec<String> {
    match option {
        MetricsOption::Destination => MetricsSource::texts(),
        MetricsOption::Duration => TimeIntervalUIText::texts(),
        MetricsOption::Interval => GraphRefreshInterval::texts(),
    }
}

impl<P: MetricsControls, R, C> ListPageTest<P, R, C> {
    /// Asserts metrics settings and toolbar options of the metrics `tab`.\
    /// **Note** that every setting except quantiles is checked and then unchecked.
    pub async fn assert_metrics_options(&mut self, tab: MetricsTab) -> CheckResult {
        self.page.open_metrics(tab).await?;

        let settings = self.page.metrics_settings(tab).await?;
        let expected = expected_metrics_settings(tab);
        verify!(
            is_equal(&settings, &expected),
            "{:?} metrics settings {:?} differ from expected {:?}",
            tab,
            settings,
            expected
        );

        for setting in settings.iter().filter(|s| !s.contains(SKIPPED_SETTING)) {
            self.page.set_metrics_setting(tab, setting, true).await?;
            verify!(
                self.page.is_metrics_setting_checked(tab, setting).await?,
                "Metrics setting '{setting}' is not checked"
            );

            self.page.set_metrics_setting(tab, setting, false).await?;
            verify!(
                !self.page.is_metrics_setting_checked(tab, setting).await?,
                "Metrics setting '{setting}' is still checked"
            );
        }

        for option in [MetricsOption::Destination, MetricsOption::Duration, MetricsOption::Interval] {
            let listed = self.page.metrics_options(tab, option).await?;
            let expected = expected_metrics_options(option);
            verify!(
                is_equal(&listed, &expected),
                "{:?} options {:?} differ from expected {:?}",
                option,
                listed,
                expected
            );
        }

        Ok(())
    }
}

impl<P: TrafficControls, R, C> ListPageTest<P, R, C> {
    /// Asserts that the first non-Istio inbound item of `traffic_type` lists this object as its outbound traffic.
    pub async fn assert_traffic(&mut self, name: &str, self_type: TrafficType, traffic_type: TrafficType) -> CheckResult {
        let inbound = self.page.inbound_traffic().await?;
        let Some(item) = inbound
            .iter()
            .find(|i| i.object_type == traffic_type && !i.name.contains(ISTIO_TRAFFIC))
        else {
            debug!("No inbound {} traffic for {}", traffic_type, name);
            return Ok(());
        };

        let outbound = self.page.click_traffic_item(traffic_type, &item.name, true).await?;
        verify!(
            outbound
                .iter()
                .any(|o| o.name == name && o.object_type == self_type && o.request_type == item.request_type),
            "{} {} {} not found in {:?}",
            name,
            self_type,
            item.request_type,
            outbound
        );

        Ok(())
    }
}

impl<P: TracesControls, R, C> ListPageTest<P, R, C> {
    /// Asserts that the traces tab does not ask for login and shows results when there are any.
    pub async fn assert_traces_tab(&mut self) -> CheckResult {
        self.page.open_traces().await?;
        assert_traces_state(&mut self.page).await
    }
}

/// Asserts that the traces view does not ask for login and shows results when there are any.
pub async fn assert_traces_state<P: TracesControls>(page: &mut P) -> CheckResult {
    let state = page.traces_state().await?;
    verify!(!state.login_displayed, "Login should not be displayed");
    if !state.has_no_results {
        verify!(state.has_results, "Traces results are not shown");
    }

    Ok(())
}
