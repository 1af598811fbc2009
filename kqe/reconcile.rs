use kqe_model::Comparable;
use std::fmt::Debug;
use tracing::debug;

use crate::{CheckError, CheckResult};

#[cfg(test)]
#[path = "./reconcile.tests.rs"]
mod reconcile_tests;

/// Expected relation between the number of REST and cluster records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cardinality {
    /// Cluster may contain entities that are not managed by the mesh.
    #[default]
    AtLeast,

    /// Cluster must return exactly the same number of records.
    Exact,
}

/// Outcome of the three-way comparison of UI, REST and cluster records.
#[derive(Debug, Clone)]
pub struct MatchReport<T> {
    pub cardinality: Cardinality,
    pub ui_count: usize,
    pub rest_count: usize,
    pub cluster_count: usize,
    pub missing_in_rest: Vec<T>,
    pub missing_in_cluster: Vec<T>,
    pub rest: Vec<T>,
    pub cluster: Vec<T>,
}

impl<T: Debug> MatchReport<T> {
    /// Returns `true` if counts agree and every UI record has its match.
    pub fn is_ok(&self) -> bool {
        self.counts_match() && self.missing_in_rest.is_empty() && self.missing_in_cluster.is_empty()
    }

    /// Returns `true` if the numbers of records satisfy the cardinality.
    pub fn counts_match(&self) -> bool {
        self.ui_count == self.rest_count
            && match self.cardinality {
                Cardinality::AtLeast => self.rest_count <= self.cluster_count,
                Cardinality::Exact => self.rest_count == self.cluster_count,
            }
    }

    /// Converts report to the check result.\
    /// **Note** that only the first unmatched record is reported together with all candidates.
    pub fn into_result(self, kind: &str) -> CheckResult {
        verify!(
            self.ui_count == self.rest_count,
            "{kind}: UI shows {} items but REST returns {}",
            self.ui_count,
            self.rest_count
        );

        match self.cardinality {
            Cardinality::AtLeast => verify!(
                self.rest_count <= self.cluster_count,
                "{kind}: REST returns {} items but cluster returns only {}",
                self.rest_count,
                self.cluster_count
            ),
            Cardinality::Exact => verify!(
                self.rest_count == self.cluster_count,
                "{kind}: REST returns {} items but cluster returns {}",
                self.rest_count,
                self.cluster_count
            ),
        }

        if let Some(item) = self.missing_in_rest.first() {
            return Err(not_found(kind, "REST", item, &self.rest));
        }

        if let Some(item) = self.missing_in_cluster.first() {
            return Err(not_found(kind, "cluster", item, &self.cluster));
        }

        Ok(())
    }
}

/// Matches every UI record against REST (advanced check) and cluster (basic check) records.
pub fn match_all<T>(ui: &[T], rest: &[T], cluster: &[T], cardinality: Cardinality) -> MatchReport<T>
where
    T: Comparable + Clone + Ord + Debug,
{
    let rest = sorted(rest);
    let cluster = sorted(cluster);

    let missing_in_rest = ui.iter().filter(|&i| find_match(i, &rest, true).is_none()).cloned().collect();
    let missing_in_cluster = ui
        .iter()
        .filter(|&i| find_match(i, &cluster, false).is_none())
        .cloned()
        .collect();

    MatchReport {
        cardinality,
        ui_count: ui.len(),
        rest_count: rest.len(),
        cluster_count: cluster.len(),
        missing_in_rest,
        missing_in_cluster,
        rest,
        cluster,
    }
}

/// Asserts that UI, REST and cluster show the same records.
pub fn compare_all<T>(kind: &str, ui: &[T], rest: &[T], cluster: &[T], cardinality: Cardinality) -> CheckResult
where
    T: Comparable + Clone + Ord + Debug,
{
    debug!(
        "Comparing {kind}: {} UI, {} REST and {} cluster records",
        ui.len(),
        rest.len(),
        cluster.len()
    );
    match_all(ui, rest, cluster, cardinality).into_result(kind)
}

/// Asserts that UI and REST show the same number of records and every UI record is found in REST.
pub fn compare_two<T>(kind: &str, ui: &[T], rest: &[T], advanced_check: bool) -> CheckResult
where
    T: Comparable + Clone + Ord + Debug,
{
    debug!("Comparing {kind}: {} UI and {} REST records", ui.len(), rest.len());
    verify!(
        ui.len() == rest.len(),
        "{kind}: UI shows {} items but REST returns {}",
        ui.len(),
        rest.len()
    );

    ensure_all_found(kind, "REST", ui, rest, advanced_check)
}

/// Asserts that each of the `items` has a match among `candidates` from the `source`.
pub fn ensure_all_found<T>(kind: &str, source: &str, items: &[T], candidates: &[T], advanced_check: bool) -> CheckResult
where
    T: Comparable + Clone + Ord + Debug,
{
    let candidates = sorted(candidates);
    for item in items {
        if find_match(item, &candidates, advanced_check).is_none() {
            return Err(not_found(kind, source, item, &candidates));
        }
    }

    Ok(())
}

/// Returns the first candidate equal to the `item`.
pub fn find_match<'a, T: Comparable>(item: &T, candidates: &'a [T], advanced_check: bool) -> Option<&'a T> {
    candidates.iter().find(|c| item.is_equal(c, advanced_check))
}

fn sorted<T: Clone + Ord>(items: &[T]) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort();
    items
}

fn not_found<T: Debug>(kind: &str, source: &str, item: &T, candidates: &[T]) -> CheckError {
    CheckError::Mismatch(format!("{kind}: {item:?} not found in {source} {candidates:?}"))
}
