use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    item::Item,
    itemset::ItemSet,
    transaction,
    types::{Inventory, ItemCounts, ItemId, Itemset, ItemsetCounts, ReverseLookup, Transaction},
    HashMap,
};

/// Transactions interned once and re-scanned for every mining level.
///
/// Each transaction is kept as its sorted item ids, so memory grows with the
/// number of item occurrences rather than with transactions times items.
#[derive(Debug, Clone)]
pub struct TransactionDatabase<I> {
    inventory: Inventory<I>,
    item_counts: ItemCounts,
    transactions: Vec<Itemset>,
}

impl<I: Item> TransactionDatabase<I> {
    /// Interns every distinct item (ids follow item order) and re-encodes the
    /// transactions as sorted ids. Consumes `source` in a single pass.
    pub fn encode<T, S>(source: S) -> Self
    where
        S: IntoIterator<Item = T>,
        T: transaction::Transaction<Item = I>,
    {
        let mut counts: BTreeMap<I, usize> = BTreeMap::new();
        let raw_transactions: Vec<Vec<I>> = source
            .into_iter()
            .map(|raw_transaction| {
                let mut items: Vec<I> = raw_transaction.items().cloned().collect();
                items.sort_unstable();
                items.dedup();
                for item in &items {
                    *counts.entry(item.clone()).or_insert(0) += 1;
                }
                items
            })
            .collect();

        let reverse_lookup: ReverseLookup<I> = counts
            .keys()
            .enumerate()
            .map(|(id, item)| (item.clone(), id))
            .collect();
        let (inventory, item_counts): (Inventory<I>, ItemCounts) = counts.into_iter().unzip();

        // items are sorted and ids follow item order, so ids come out sorted
        let transactions: Vec<Itemset> = raw_transactions
            .iter()
            .map(|items| items.iter().map(|item| reverse_lookup[item]).collect())
            .collect();

        tracing::debug!(
            transactions = transactions.len(),
            items = inventory.len(),
            "encoded transactions"
        );

        Self {
            inventory,
            item_counts,
            transactions,
        }
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn num_items(&self) -> usize {
        self.inventory.len()
    }

    pub fn item(&self, id: ItemId) -> &I {
        &self.inventory[id]
    }

    /// Sorted item ids of every transaction.
    pub fn transactions(&self) -> &[Itemset] {
        &self.transactions
    }

    /// Bitsets over the items in `frequent_ids`, which must be sorted. Bit
    /// `i` stands for `frequent_ids[i]`. Transactions with fewer than
    /// `min_len` frequent items are left out.
    pub fn encode_frequent(&self, frequent_ids: &[ItemId], min_len: usize) -> Vec<Transaction> {
        let mut local_ids: Vec<Option<ItemId>> = vec![None; self.num_items()];
        for (local_id, &id) in frequent_ids.iter().enumerate() {
            local_ids[id] = Some(local_id);
        }

        self.transactions
            .iter()
            .map(|ids| {
                Transaction::new(
                    frequent_ids.len(),
                    ids.iter().filter_map(|&id| local_ids[id]),
                )
            })
            .filter(|transaction| transaction.len() >= min_len)
            .collect()
    }

    pub(crate) fn item_counts(&self) -> &ItemCounts {
        &self.item_counts
    }

    /// Maps an id itemset back to items.
    pub fn decode(&self, itemset: &[ItemId], support: f64) -> ItemSet<I> {
        let items = itemset.iter().map(|&id| self.inventory[id].clone()).collect();
        ItemSet::from_sorted(items, support)
    }
}

/// `count / num_transactions >= min_support`, compared on the exact ratio.
pub fn is_frequent(count: usize, num_transactions: usize, min_support: f64) -> bool {
    num_transactions > 0 && count as f64 / num_transactions as f64 >= min_support
}

pub fn support(count: usize, num_transactions: usize) -> f64 {
    if num_transactions == 0 {
        0.0
    } else {
        count as f64 / num_transactions as f64
    }
}

/// 1-itemset
pub fn generate_frequent_1_itemset_counts<I: Item>(
    database: &TransactionDatabase<I>,
    min_support: f64,
) -> ItemsetCounts {
    let num_transactions = database.len();
    database
        .item_counts()
        .iter()
        .enumerate()
        .filter(|&(_, &count)| is_frequent(count, num_transactions, min_support))
        .map(|(id, &count)| (vec![id], count))
        .collect()
}

/// Counts every candidate over `transactions` and keeps the frequent ones.
/// Transactions shorter than the candidates may be left out by the caller;
/// `num_transactions` is the size of the whole database.
pub fn generate_frequent_k_itemset_counts(
    candidates: Vec<Itemset>,
    transactions: &[Transaction],
    num_transactions: usize,
    min_support: f64,
) -> ItemsetCounts {
    #[cfg(feature = "parallel")]
    let candidates = candidates.into_par_iter();
    #[cfg(not(feature = "parallel"))]
    let candidates = candidates.into_iter();

    candidates
        .filter_map(|candidate| {
            let count = count_transactions(&candidate, transactions);
            if is_frequent(count, num_transactions, min_support) {
                Some((candidate, count))
            } else {
                None
            }
        })
        .collect()
}

fn count_transactions(candidate: &[ItemId], transactions: &[Transaction]) -> usize {
    transactions
        .iter()
        .filter(|transaction| transaction.contains_all(candidate))
        .count()
}

/// Support of `itemset` computed directly through [`transaction::Transaction`].
pub fn support_of<I, T>(itemset: &ItemSet<I>, transactions: &[T]) -> f64
where
    I: Item,
    T: transaction::Transaction<Item = I>,
{
    let count = transactions
        .iter()
        .filter(|transaction| transaction.contains_all(itemset))
        .count();
    support(count, transactions.len())
}

/// Per-item occurrence counts keyed by item, mostly useful for inspection.
pub fn item_counts<I: Item>(database: &TransactionDatabase<I>) -> HashMap<I, usize> {
    database
        .item_counts()
        .iter()
        .enumerate()
        .map(|(id, &count)| (database.item(id).clone(), count))
        .collect()
}
