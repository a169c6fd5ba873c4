use std::collections::{BTreeSet, HashSet};

use crate::{item::Item, itemset::ItemSet};

/// One observed set of items, as supplied by the caller.
///
/// Implementations should answer [`contains`](Transaction::contains) in
/// constant or logarithmic time.
pub trait Transaction {
    type Item: Item;

    fn contains(&self, item: &Self::Item) -> bool;

    fn items(&self) -> Box<dyn Iterator<Item = &Self::Item> + '_>;

    /// Whether every item of `itemset` occurs in this transaction.
    fn contains_all(&self, itemset: &ItemSet<Self::Item>) -> bool {
        itemset.iter().all(|item| self.contains(item))
    }
}

impl<I: Item> Transaction for ItemSet<I> {
    type Item = I;

    fn contains(&self, item: &I) -> bool {
        ItemSet::contains(self, item)
    }

    fn items(&self) -> Box<dyn Iterator<Item = &I> + '_> {
        Box::new(self.iter())
    }
}

impl<I: Item> Transaction for BTreeSet<I> {
    type Item = I;

    fn contains(&self, item: &I) -> bool {
        BTreeSet::contains(self, item)
    }

    fn items(&self) -> Box<dyn Iterator<Item = &I> + '_> {
        Box::new(self.iter())
    }
}

impl<I: Item, S: std::hash::BuildHasher> Transaction for HashSet<I, S> {
    type Item = I;

    fn contains(&self, item: &I) -> bool {
        HashSet::contains(self, item)
    }

    fn items(&self) -> Box<dyn Iterator<Item = &I> + '_> {
        Box::new(self.iter())
    }
}

impl<T: Transaction + ?Sized> Transaction for &T {
    type Item = T::Item;

    fn contains(&self, item: &Self::Item) -> bool {
        (**self).contains(item)
    }

    fn items(&self) -> Box<dyn Iterator<Item = &Self::Item> + '_> {
        (**self).items()
    }
}
