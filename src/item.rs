use std::{
    fmt::{self, Debug, Display, Formatter},
    hash::Hash,
};

/// Anything that can appear in a transaction.
///
/// Items need a total order (itemsets are kept sorted and joined
/// lexicographically) and a hash (supports are looked up by content).
pub trait Item: Ord + Hash + Clone + Debug {}

impl<T: Ord + Hash + Clone + Debug> Item for T {}

/// An item identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamedItem {
    name: String,
}

impl NamedItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for NamedItem {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for NamedItem {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Display for NamedItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
