use itertools::Itertools;

use crate::types::{ItemId, Itemset, KnownItemsets};

/// Candidates of size k from the frequent itemsets of size k - 1.
///
/// Joins every pair of itemsets sharing their first k - 2 items, then drops
/// candidates with an infrequent (k - 1)-subset. The result is sorted and
/// free of duplicates. Empty itemsets take no part in the join.
pub fn generate_candidates(itemsets: &[Itemset]) -> Vec<Itemset> {
    let known: KnownItemsets = itemsets.iter().cloned().collect();
    let candidates = join_step(itemsets.to_vec());
    let before = candidates.len();

    let candidates: Vec<Itemset> = candidates
        .into_iter()
        .filter(|candidate| has_frequent_subsets(candidate, &known))
        .collect();

    tracing::trace!(
        joined = before,
        pruned = before - candidates.len(),
        "generated candidates"
    );
    candidates
}

/// https://github.com/tommyod/Efficient-Apriori/blob/master/efficient_apriori/itemsets.py
pub fn join_step(mut itemsets: Vec<Itemset>) -> Vec<Itemset> {
    if itemsets.is_empty() {
        return vec![];
    }

    itemsets.retain(|itemset| !itemset.is_empty());
    itemsets.sort_unstable();
    itemsets.dedup();

    let mut final_itemsets: Vec<Itemset> = Vec::new();
    let mut tail_items: Vec<ItemId> = Vec::with_capacity(itemsets.len());

    let mut i = 0;
    while i < itemsets.len() {
        let (prefix, last) = itemsets[i].split_at(itemsets[i].len() - 1);

        tail_items.clear();
        tail_items.extend_from_slice(last);

        let mut skip = 1;
        for next in &itemsets[i + 1..] {
            let (next_prefix, next_last) = next.split_at(next.len() - 1);
            if prefix != next_prefix {
                break;
            }
            tail_items.extend_from_slice(next_last);
            skip += 1;
        }

        // tail_items is ascending because itemsets is sorted
        for (&a, &b) in tail_items.iter().tuple_combinations() {
            let mut candidate = Itemset::with_capacity(prefix.len() + 2);
            candidate.extend_from_slice(prefix);
            candidate.push(a);
            candidate.push(b);
            final_itemsets.push(candidate);
        }

        i += skip;
    }

    final_itemsets
}

/// The two subsets that formed `candidate` by the join are known to be
/// frequent, so only the subsets dropping one of the first k - 2 items are
/// checked.
fn has_frequent_subsets(candidate: &[ItemId], known: &KnownItemsets) -> bool {
    let mut subset = Itemset::with_capacity(candidate.len() - 1);
    (0..candidate.len().saturating_sub(2)).all(|skip| {
        subset.clear();
        subset.extend_from_slice(&candidate[..skip]);
        subset.extend_from_slice(&candidate[skip + 1..]);
        known.contains(&subset)
    })
}
