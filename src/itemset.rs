use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
};

use itertools::Itertools;

use crate::{
    error::{ensure_in_range, Result},
    item::Item,
};

/// A sorted, duplicate-free set of items together with its support.
///
/// Equality, hashing and [`Ord`] only look at the items. Support is a
/// property computed by the miner; ordering by support is applied explicitly
/// by [`FrequentItemSets`](crate::itemsets::FrequentItemSets).
#[derive(Debug, Clone)]
pub struct ItemSet<I> {
    items: Vec<I>,
    support: f64,
}

impl<I: Item> ItemSet<I> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            support: 0.0,
        }
    }

    /// Sets the support, which must lie in `[0, 1]`.
    pub fn with_support(mut self, support: f64) -> Result<Self> {
        ensure_in_range("support", support, 0.0, 1.0)?;
        self.support = support;
        Ok(self)
    }

    /// Builds an itemset from items that are already sorted and unique.
    pub(crate) fn from_sorted(items: Vec<I>, support: f64) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self { items, support }
    }

    pub fn support(&self) -> f64 {
        self.support
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&I> {
        self.items.first()
    }

    pub fn contains(&self, item: &I) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// Inserts `item`, keeping the set sorted. Returns `false` if it was
    /// already present.
    pub fn insert(&mut self, item: I) -> bool {
        match self.items.binary_search(&item) {
            Ok(_) => false,
            Err(position) => {
                self.items.insert(position, item);
                true
            }
        }
    }

    pub fn remove(&mut self, item: &I) -> bool {
        match self.items.binary_search(item) {
            Ok(position) => {
                self.items.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_subset(&self, other: &ItemSet<I>) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    pub fn is_disjoint(&self, other: &ItemSet<I>) -> bool {
        self.iter().all(|item| !other.contains(item))
    }

    /// Items of both sets. The result has no support attached.
    pub fn union(&self, other: &ItemSet<I>) -> ItemSet<I> {
        let items = self
            .iter()
            .merge(other.iter())
            .dedup()
            .cloned()
            .collect();
        Self::from_sorted(items, 0.0)
    }
}

impl<I: Item> Default for ItemSet<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> FromIterator<I> for ItemSet<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut items: Vec<I> = iter.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self::from_sorted(items, 0.0)
    }
}

impl<'a, I: Item> IntoIterator for &'a ItemSet<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<I: Item> PartialEq for ItemSet<I> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<I: Item> Eq for ItemSet<I> {}

impl<I: Item> Hash for ItemSet<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<I: Item> PartialOrd for ItemSet<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic over the sorted items; a proper prefix sorts first.
impl<I: Item> Ord for ItemSet<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.items.cmp(&other.items)
    }
}

impl<I: Item + Display> Display for ItemSet<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.items.iter().join(", "))
    }
}
