//! In-memory dashboard used by the unit tests in place of a browser, the REST API and the cluster.

pub use self::dashboard::{Dashboard, Dataset, Keyed, SharedDashboard, lock};
pub use self::fixtures::{BOOKINFO, BOOKINFO2, ISTIO_SYSTEM, bookinfo};
pub use self::page::{FakeDetails, FakeItem, FakePage, TracingView};
pub use self::source::{FakeCluster, FakeError, FakeRest};

mod dashboard;
mod fixtures;
mod page;
mod source;
