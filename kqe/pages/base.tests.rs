use rstest::rstest;

use super::*;

fn breadcrumb(locations: &[&str]) -> Breadcrumb {
    Breadcrumb::new(locations.iter().map(|l| (*l).to_owned()).collect())
}

#[rstest]
#[case(true, &["Services", "Namespace: bookinfo", "reviews"])]
#[case(false, &["Services", "Namespace: bookinfo2", "reviews"])]
#[case(false, &["Workloads", "Namespace: bookinfo", "reviews"])]
#[case(false, &["Services", "Namespace: bookinfo", "ratings"])]
#[case(false, &["Services", "reviews"])]
#[case(false, &["Services"])]
fn is_details_breadcrumb_test(#[case] expected: bool, #[case] locations: &[&str]) {
    assert_eq!(
        expected,
        is_details_breadcrumb(&breadcrumb(locations), "Services", "reviews", "bookinfo")
    );
}

#[test]
fn sample_returns_all_when_not_enough_items_test() {
    let mut test = ListPageTest::new((), (), (), "Name", Some(1));

    assert_eq!(vec![1, 2], test.sample(&[1, 2], 3));
}

#[test]
fn same_seed_same_choices_test() {
    let items = (0..50).collect::<Vec<_>>();
    let mut first = ListPageTest::new((), (), (), "Name", Some(42));
    let mut second = ListPageTest::new((), (), (), "Name", Some(42));

    let sample = first.sample(&items, 3);
    assert_eq!(3, sample.len());
    assert_eq!(sample, second.sample(&items, 3));
    assert_eq!(first.choose(&items), second.choose(&items));
    assert_eq!(42, first.seed());
}

#[test]
fn choose_from_empty_test() {
    let mut test = ListPageTest::new((), (), (), "Name", None);

    assert_eq!(None, test.choose::<u8>(&[]));
}

/// Records every reconciliation request of the random filter check.
struct RecordingCheck {
    rng: StdRng,
    namespaces: Vec<String>,
    filters: Vec<Filter>,
    fail_at: Option<usize>,
    calls: Vec<(Vec<String>, usize, bool)>,
}

impl RecordingCheck {
    fn new(filters: usize, fail_at: Option<usize>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(7),
            namespaces: vec!["bookinfo".to_owned(), "bookinfo2".to_owned()],
            filters: (0..filters).map(|i| Filter::new("Label", format!("app=v{i}"))).collect(),
            fail_at,
            calls: Vec::new(),
        }
    }

    fn filter_counts(&self) -> Vec<usize> {
        self.calls.iter().map(|(_, count, _)| *count).collect()
    }
}

impl ItemsCheck for RecordingCheck {
    async fn ui_namespaces(&mut self) -> CheckResult<Vec<String>> {
        Ok(self.namespaces.clone())
    }

    async fn clear_filters(&mut self) -> CheckResult {
        Ok(())
    }

    async fn reset(&mut self) -> CheckResult {
        Ok(())
    }

    fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    async fn assert_all_items(
        &mut self,
        namespaces: &[String],
        filters: &[Filter],
        _sort: Option<&SortOption>,
        force_clear_all: bool,
    ) -> CheckResult {
        self.calls.push((namespaces.to_vec(), filters.len(), force_clear_all));
        if self.fail_at == Some(self.calls.len()) {
            return Err(CheckError::Mismatch(format!("{} filters differ", filters.len())));
        }

        Ok(())
    }

    async fn get_additional_filters(&mut self, _namespaces: &[String], _current: &[Filter]) -> CheckResult<Vec<Filter>> {
        Ok(self.filters.clone())
    }
}

#[tokio::test]
async fn assert_filter_feature_random_walk_test() {
    let mut check = RecordingCheck::new(4, None);

    check.assert_filter_feature_random().await.unwrap();

    assert_eq!(vec![1, 2, 3, 4, 3, 2, 0], check.filter_counts());
    let (namespaces, _, force_clear_all) = check.calls.last().unwrap();
    assert!(namespaces.is_empty());
    assert!(*force_clear_all);
    assert_eq!(1, check.calls.iter().filter(|(_, _, force)| *force).count());
    assert!(check.calls[..6].iter().all(|(ns, _, _)| *ns == check.namespaces));
}

#[tokio::test]
async fn assert_filter_feature_random_stops_on_mismatch_test() {
    let mut check = RecordingCheck::new(4, Some(3));

    let result = check.assert_filter_feature_random().await;

    assert!(matches!(result, Err(CheckError::Mismatch(message)) if message == "3 filters differ"));
    assert_eq!(vec![1, 2, 3], check.filter_counts());
}

#[tokio::test]
async fn assert_filter_feature_random_without_namespaces_test() {
    let mut check = RecordingCheck::new(2, None);
    check.namespaces.clear();

    assert!(check.assert_filter_feature_random().await.is_err());
    assert!(check.calls.is_empty());
}
