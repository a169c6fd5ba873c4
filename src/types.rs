use bitvec::prelude::*;

use crate::{HashMap, HashSet};

/// Dense id of an interned item. Ids are assigned in item order, so sorting
/// ids sorts the items they stand for.
pub type ItemId = usize;
pub type Itemset = Vec<ItemId>;

pub type ReverseLookup<I> = HashMap<I, ItemId>;
pub type Inventory<I> = Vec<I>;

pub type ItemCounts = Vec<usize>;
pub type ItemsetCounts = HashMap<Itemset, usize>;
pub type KnownItemsets = HashSet<Itemset>;

pub type ItemsetLength = usize;
pub type FrequentItemsets = HashMap<ItemsetLength, ItemsetCounts>;

/// A transaction re-encoded as a bitset over the ids of one mining run.
///
/// Runs number their frequent items densely, so the bitset only spans items
/// that can still appear in a frequent itemset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    items: BitVec,
    len: usize,
}

impl Transaction {
    pub fn new(num_items: usize, ids: impl IntoIterator<Item = ItemId>) -> Self {
        let mut items = bitvec![0; num_items];
        for id in ids {
            items.set(id, true);
        }
        let len = items.count_ones();
        Self { items, len }
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, id: ItemId) -> bool {
        id < self.items.len() && self.items[id]
    }

    pub fn contains_all(&self, itemset: &[ItemId]) -> bool {
        itemset.iter().all(|&id| self.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitset_transaction_tracks_membership() {
        let transaction = Transaction::new(8, vec![1, 3, 3, 6]);
        assert_eq!(transaction.len(), 3);
        assert!(transaction.contains(3));
        assert!(!transaction.contains(2));
        assert!(!transaction.contains(42));
        assert!(transaction.contains_all(&[1, 6]));
        assert!(!transaction.contains_all(&[1, 2]));
    }

    #[test]
    fn empty_transaction() {
        let transaction = Transaction::new(0, vec![]);
        assert!(transaction.is_empty());
        assert!(transaction.contains_all(&[]));
    }
}
