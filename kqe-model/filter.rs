use std::fmt;

/// Single `(name, value)` filter applied on a list page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Filter {
    pub name: String,
    pub value: String,
}

impl Filter {
    /// Creates new [`Filter`] instance.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns values of all filters named `name`.
    pub fn values_of(filters: &[Filter], name: &str) -> Vec<String> {
        filters.iter().filter(|f| f.name == name).map(|f| f.value.clone()).collect()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Sort column together with its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOption {
    pub option: String,
    pub is_ascending: bool,
}

impl SortOption {
    /// Creates new ascending [`SortOption`].
    pub fn ascending(option: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            is_ascending: true,
        }
    }

    /// Creates new descending [`SortOption`].
    pub fn descending(option: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            is_ascending: false,
        }
    }
}

/// Returns `true` if `name` passes the name filter.\
/// **Note** that empty `names` matches everything and a single name matches when it is contained in `name`.
pub fn name_matches(name: &str, names: &[String]) -> bool {
    names.is_empty() || names.iter().any(|n| name.contains(n.as_str()))
}
