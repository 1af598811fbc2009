use kqe_model::SortOption;
use tracing::debug;

use crate::CheckResult;
use crate::filters::assert_options;
use crate::ui::SortControls;

/// Selects the sort option on the page.\
/// **Note** that `None` leaves the current sort untouched.
pub async fn sort<P: SortControls>(page: &mut P, sort: Option<&SortOption>) -> CheckResult {
    if let Some(sort) = sort {
        debug!("Sorting by {} ascending: {}", sort.option, sort.is_ascending);
        page.select_sort(sort).await?;
    }

    Ok(())
}

/// Asserts that the page offers exactly the `expected` sort options.
pub async fn assert_sort_options<P: SortControls>(page: &mut P, expected: &[String]) -> CheckResult {
    let options = page.sort_options().await?;
    assert_options("Sort", &options, expected)
}
