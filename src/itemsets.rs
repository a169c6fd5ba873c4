pub mod count;
pub mod search;

use std::cmp::Ordering;

use crate::{item::Item, itemset::ItemSet, HashMap};

/// Frequent itemsets ordered from most to least frequent.
///
/// Ties in support are broken by content order so that two runs over the
/// same data list the itemsets identically.
#[derive(Debug, Clone)]
pub struct FrequentItemSets<I> {
    itemsets: Vec<ItemSet<I>>,
}

/// Support descending, then content order.
pub fn compare_by_frequency<I: Item>(a: &ItemSet<I>, b: &ItemSet<I>) -> Ordering {
    b.support()
        .total_cmp(&a.support())
        .then_with(|| a.cmp(b))
}

impl<I: Item> FrequentItemSets<I> {
    pub fn new() -> Self {
        Self {
            itemsets: Vec::new(),
        }
    }

    /// Sorts itemsets whose support has already been computed. Duplicate
    /// item sets keep the first occurrence.
    pub fn from_itemsets(mut itemsets: Vec<ItemSet<I>>) -> Self {
        itemsets.sort_by(compare_by_frequency);
        let mut seen = crate::HashSet::with_capacity(itemsets.len());
        itemsets.retain(|itemset| seen.insert(itemset.items().to_vec()));
        Self { itemsets }
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemSet<I>> {
        self.itemsets.iter()
    }

    pub fn as_slice(&self) -> &[ItemSet<I>] {
        &self.itemsets
    }

    pub fn contains(&self, itemset: &ItemSet<I>) -> bool {
        self.itemsets.contains(itemset)
    }

    /// Keeps the `count` most frequent itemsets.
    pub fn truncate(&mut self, count: usize) {
        self.itemsets.truncate(count);
    }

    /// Lookup table from item content to support.
    pub fn support_index(&self) -> HashMap<&[I], f64> {
        self.itemsets
            .iter()
            .map(|itemset| (itemset.items(), itemset.support()))
            .collect()
    }

    pub fn into_vec(self) -> Vec<ItemSet<I>> {
        self.itemsets
    }
}

impl<I: Item> Default for FrequentItemSets<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> PartialEq for FrequentItemSets<I> {
    fn eq(&self, other: &Self) -> bool {
        self.itemsets == other.itemsets
    }
}

impl<'a, I: Item> IntoIterator for &'a FrequentItemSets<I> {
    type Item = &'a ItemSet<I>;
    type IntoIter = std::slice::Iter<'a, ItemSet<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.itemsets.iter()
    }
}

impl<I: Item> FromIterator<ItemSet<I>> for FrequentItemSets<I> {
    fn from_iter<T: IntoIterator<Item = ItemSet<I>>>(iter: T) -> Self {
        Self::from_itemsets(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn itemset(items: &[&'static str], support: f64) -> ItemSet<&'static str> {
        items
            .iter()
            .copied()
            .collect::<ItemSet<_>>()
            .with_support(support)
            .unwrap()
    }

    #[test]
    fn orders_by_support_then_content() {
        let frequent: FrequentItemSets<&str> = vec![
            itemset(&["c"], 0.5),
            itemset(&["b", "c"], 0.5),
            itemset(&["b"], 0.75),
            itemset(&["a", "b"], 0.5),
            itemset(&["a"], 0.75),
        ]
        .into_iter()
        .collect();

        let order: Vec<&[&str]> = frequent.iter().map(ItemSet::items).collect();
        assert_eq!(
            order,
            vec![
                &["a"][..],
                &["b"][..],
                &["a", "b"][..],
                &["b", "c"][..],
                &["c"][..],
            ]
        );
    }

    #[test]
    fn equality_follows_listed_itemsets() {
        let a = FrequentItemSets::from_itemsets(vec![itemset(&["a"], 0.5), itemset(&["b"], 0.25)]);
        let b = FrequentItemSets::from_itemsets(vec![itemset(&["b"], 0.25), itemset(&["a"], 0.5)]);
        assert_eq!(a, b);
        assert_ne!(a, FrequentItemSets::from_itemsets(vec![itemset(&["a"], 0.5)]));
        assert_eq!(FrequentItemSets::<&str>::new(), FrequentItemSets::default());
    }

    #[test]
    fn duplicates_are_dropped() {
        let frequent =
            FrequentItemSets::from_itemsets(vec![itemset(&["a"], 0.5), itemset(&["a"], 0.5)]);
        assert_eq!(frequent.len(), 1);
    }

    #[test]
    fn truncate_keeps_most_frequent() {
        let mut frequent = FrequentItemSets::from_itemsets(vec![
            itemset(&["a"], 0.2),
            itemset(&["b"], 0.9),
            itemset(&["c"], 0.4),
        ]);
        frequent.truncate(2);
        assert!(frequent.contains(&itemset(&["b"], 0.9)));
        assert!(frequent.contains(&itemset(&["c"], 0.4)));
        assert!(!frequent.contains(&itemset(&["a"], 0.2)));
    }

    #[test]
    fn support_index_looks_up_by_content() {
        let frequent = FrequentItemSets::from_itemsets(vec![itemset(&["a", "b"], 0.25)]);
        let index = frequent.support_index();
        assert_eq!(index.get(&["a", "b"][..]), Some(&0.25));
        assert_eq!(index.get(&["a"][..]), None);
    }
}
