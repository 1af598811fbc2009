pub use self::compare::{Comparable, is_equal_when_known};
pub use self::enums::*;
pub use self::filter::{Filter, SortOption, name_matches};
pub use self::records::*;
pub use self::sources::{ClusterClient, RestClient};

mod compare;
mod enums;
mod enums_macro;
mod filter;
mod records;
mod sources;
