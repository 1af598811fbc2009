use kqe_common::is_equal;
use kqe_model::Filter;
use tracing::debug;

use crate::CheckResult;
use crate::ui::{FilterControls, NamespaceControls};

#[cfg(test)]
#[path = "./filters.tests.rs"]
mod filters_tests;

/// Returns items that must be applied and items that must be removed to turn `active` into `desired`.
pub fn diff<T: PartialEq + Clone>(active: &[T], desired: &[T]) -> (Vec<T>, Vec<T>) {
    let mut to_apply = Vec::new();
    for item in desired {
        if !active.contains(item) && !to_apply.contains(item) {
            to_apply.push(item.clone());
        }
    }

    let to_remove = active.iter().filter(|i| !desired.contains(i)).cloned().collect();

    (to_apply, to_remove)
}

/// Makes `filters` the only active filters on the page.\
/// **Note** that with `force_clear_all` all filters are cleared first.
pub async fn apply_filters<P: FilterControls>(page: &mut P, filters: &[Filter], force_clear_all: bool) -> CheckResult {
    let active = if force_clear_all {
        page.clear_filters().await?;
        assert_applied_filters(page, &[]).await?;
        Vec::new()
    } else {
        page.active_filters().await?
    };

    let (to_apply, to_remove) = diff(&active, filters);
    debug!("Applying filters {:?}, removing {:?}", to_apply, to_remove);

    for filter in &to_apply {
        page.apply_filter(filter).await?;
    }

    for filter in &to_remove {
        page.remove_filter(filter).await?;
    }

    assert_applied_filters(page, filters).await
}

/// Asserts that exactly `filters` are active, ignoring their order.
pub async fn assert_applied_filters<P: FilterControls>(page: &mut P, filters: &[Filter]) -> CheckResult {
    let active = page.active_filters().await?;
    verify!(
        is_equal(&active, filters),
        "Active filters {:?} differ from expected {:?}",
        active,
        filters
    );

    Ok(())
}

/// Makes `namespaces` the only selected namespaces on the page.\
/// **Note** that with `force_clear_all` all namespaces are unselected first.
pub async fn apply_namespaces<P: NamespaceControls>(
    page: &mut P,
    namespaces: &[String],
    force_clear_all: bool,
) -> CheckResult {
    let checked = if force_clear_all {
        page.clear_namespaces().await?;
        assert_applied_namespaces(page, &[]).await?;
        Vec::new()
    } else {
        page.checked_namespaces().await?
    };

    let (to_check, to_uncheck) = diff(&checked, namespaces);
    debug!("Checking namespaces {:?}, unchecking {:?}", to_check, to_uncheck);

    for namespace in &to_check {
        page.check_namespace(namespace).await?;
    }

    for namespace in &to_uncheck {
        page.uncheck_namespace(namespace).await?;
    }

    assert_applied_namespaces(page, namespaces).await
}

/// Asserts that exactly `namespaces` are selected, ignoring their order.
pub async fn assert_applied_namespaces<P: NamespaceControls>(page: &mut P, namespaces: &[String]) -> CheckResult {
    let checked = page.checked_namespaces().await?;
    verify!(
        is_equal(&checked, namespaces),
        "Selected namespaces {:?} differ from expected {:?}",
        checked,
        namespaces
    );

    Ok(())
}

/// Asserts that the UI offers exactly the `expected` options.
pub fn assert_options(kind: &str, actual: &[String], expected: &[String]) -> CheckResult {
    verify!(
        is_equal(actual, expected),
        "{kind} options {:?} differ from expected {:?}",
        actual,
        expected
    );

    Ok(())
}

/// Asserts that the page offers exactly the `expected` filters.
pub async fn assert_filter_options<P: FilterControls>(page: &mut P, expected: &[String]) -> CheckResult {
    let options = page.filter_options().await?;
    assert_options("Filter", &options, expected)
}
