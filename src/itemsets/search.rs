use crate::{
    combi::generate_candidates,
    error::{ensure_min_support, ensure_positive_count, Result},
    item::Item,
    itemset::ItemSet,
    itemsets::{
        count::{
            generate_frequent_1_itemset_counts, generate_frequent_k_itemset_counts, support,
            TransactionDatabase,
        },
        FrequentItemSets,
    },
    transaction,
    types::{FrequentItemsets, ItemId, Itemset, ItemsetCounts, ItemsetLength, Transaction},
    HashMap,
};

/// Level-wise (Apriori) search for frequent itemsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequentItemSetMiner {
    min_support: f64,
    max_size: Option<ItemsetLength>,
}

impl FrequentItemSetMiner {
    /// Fails unless `0 < min_support <= 1`.
    pub fn new(min_support: f64) -> Result<Self> {
        ensure_min_support(min_support)?;
        Ok(Self {
            min_support,
            max_size: None,
        })
    }

    /// Stops after itemsets of `max_size` items.
    pub fn with_max_size(mut self, max_size: Option<ItemsetLength>) -> Result<Self> {
        ensure_positive_count("max item set size", max_size)?;
        self.max_size = max_size;
        Ok(self)
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    pub fn max_size(&self) -> Option<ItemsetLength> {
        self.max_size
    }

    pub fn mine<I, T, S>(&self, transactions: S) -> FrequentItemSets<I>
    where
        I: Item,
        S: IntoIterator<Item = T>,
        T: transaction::Transaction<Item = I>,
    {
        self.mine_encoded(&TransactionDatabase::encode(transactions))
    }

    pub fn mine_encoded<I: Item>(&self, database: &TransactionDatabase<I>) -> FrequentItemSets<I> {
        let num_transactions = database.len();
        let itemsets: Vec<ItemSet<I>> = self
            .mine_levels(database)
            .into_values()
            .flat_map(|itemset_counts| itemset_counts.into_iter())
            .map(|(itemset, count)| database.decode(&itemset, support(count, num_transactions)))
            .collect();
        FrequentItemSets::from_itemsets(itemsets)
    }

    /// Frequent id itemsets with their occurrence counts, keyed by length.
    ///
    /// After level 1 the transactions are re-encoded as bitsets over the
    /// frequent items only, numbered densely in id order. Levels are stored
    /// with database ids again.
    #[tracing::instrument(level = "debug", skip_all, fields(min_support = self.min_support))]
    pub fn mine_levels<I: Item>(&self, database: &TransactionDatabase<I>) -> FrequentItemsets {
        let mut all_frequent_itemsets: FrequentItemsets = HashMap::new();
        let num_transactions = database.len();
        if num_transactions == 0 {
            return all_frequent_itemsets;
        }

        // 1-itemset
        let item_counts = generate_frequent_1_itemset_counts(database, self.min_support);
        tracing::debug!(size = 1, frequent = item_counts.len(), "counted itemsets");
        if item_counts.is_empty() {
            return all_frequent_itemsets;
        }
        let mut frequent_ids: Vec<ItemId> = item_counts.keys().map(|itemset| itemset[0]).collect();
        frequent_ids.sort_unstable();
        all_frequent_itemsets.insert(1, item_counts);

        // k-itemset, k >= 2
        let mut transactions: Vec<Transaction> = database.encode_frequent(&frequent_ids, 2);
        let mut previous: Vec<Itemset> = (0..frequent_ids.len()).map(|id| vec![id]).collect();
        let mut size: ItemsetLength = 2;
        while self.max_size.map_or(true, |max_size| size <= max_size) {
            let candidates = generate_candidates(&previous);
            if candidates.is_empty() {
                break;
            }

            transactions.retain(|transaction| transaction.len() >= size);
            let num_candidates = candidates.len();
            let itemset_counts = generate_frequent_k_itemset_counts(
                candidates,
                &transactions,
                num_transactions,
                self.min_support,
            );
            tracing::debug!(
                size,
                candidates = num_candidates,
                frequent = itemset_counts.len(),
                "counted itemsets"
            );
            if itemset_counts.is_empty() {
                break;
            }

            previous = itemset_counts.keys().cloned().collect();
            // local ids map to database ids monotonically, so itemsets stay sorted
            let itemset_counts: ItemsetCounts = itemset_counts
                .into_iter()
                .map(|(itemset, count)| {
                    let ids = itemset.iter().map(|&local_id| frequent_ids[local_id]).collect();
                    (ids, count)
                })
                .collect();
            all_frequent_itemsets.insert(size, itemset_counts);
            size += 1;
        }

        all_frequent_itemsets
    }
}
