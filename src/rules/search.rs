use itertools::Itertools;

use crate::{
    error::{Error, Result},
    item::Item,
    itemset::ItemSet,
    itemsets::FrequentItemSets,
    metrics::{meets_threshold, Metric},
    rules::{rule::AssociationRule, rule_set::RuleSet},
    HashMap,
};

type SupportIndex<'a, I> = HashMap<&'a [I], f64>;

/// Generate rules based on frequent itemsets.
///
/// A rule is kept when `generation_metric` scores it at least
/// `min_generation_value`. Bodies and heads must be among
/// `frequent_item_sets`, which holds for any output of the miner.
pub fn generate_rules<I, M>(
    frequent_item_sets: &FrequentItemSets<I>,
    generation_metric: &M,
    min_generation_value: f64,
) -> Result<RuleSet<I>>
where
    I: Item,
    M: Metric + ?Sized,
{
    let supports = frequent_item_sets.support_index();
    let mut rule_set = RuleSet::new();

    for itemset in frequent_item_sets.iter().filter(|itemset| itemset.len() > 1) {
        let rules = rules_from_itemset(itemset, &supports, generation_metric, min_generation_value)?;
        rule_set.extend(rules);
    }

    tracing::debug!(
        rules = rule_set.len(),
        metric = generation_metric.name(),
        min_value = min_generation_value,
        "generated rules"
    );
    Ok(rule_set)
}

/// Given an itemset, find the rules that can be generated from it.
///
/// Bodies are visited from largest to smallest. When the metric only drops
/// as the head grows, every body inside a rejected body is skipped.
fn rules_from_itemset<I, M>(
    itemset: &ItemSet<I>,
    supports: &SupportIndex<'_, I>,
    metric: &M,
    min_value: f64,
) -> Result<Vec<AssociationRule<I>>>
where
    I: Item,
    M: Metric + ?Sized,
{
    let items = itemset.items();
    let prune = metric.decreases_with_head_growth();
    let mut blacklist: Vec<Vec<usize>> = vec![];
    let mut final_rules = vec![];

    for body_len in (1..items.len()).rev() {
        for body in (0..items.len()).combinations(body_len) {
            if prune && is_a_child_of_a_blacklisted_rule(&body, &blacklist) {
                continue;
            }

            let (body_items, head_items): (Vec<I>, Vec<I>) = items
                .iter()
                .enumerate()
                .partition_map(|(index, item)| {
                    if body.binary_search(&index).is_ok() {
                        itertools::Either::Left(item.clone())
                    } else {
                        itertools::Either::Right(item.clone())
                    }
                });

            let body_support = lookup(supports, &body_items)?;
            let head_support = lookup(supports, &head_items)?;
            let rule = AssociationRule::from_parts(
                ItemSet::from_sorted(body_items, body_support),
                ItemSet::from_sorted(head_items, head_support),
                itemset.support(),
            );

            if meets_threshold(rule.evaluate(metric), min_value) {
                final_rules.push(rule);
            } else if prune {
                blacklist.push(body);
            }
        }
    }

    Ok(final_rules)
}

/// `body` lies inside a rejected body, i.e. its head contains a rejected head.
fn is_a_child_of_a_blacklisted_rule(body: &[usize], blacklist: &[Vec<usize>]) -> bool {
    blacklist.iter().any(|rejected| {
        rejected.len() > body.len()
            && body
                .iter()
                .all(|index| rejected.binary_search(index).is_ok())
    })
}

fn lookup<I: Item>(supports: &SupportIndex<'_, I>, items: &[I]) -> Result<f64> {
    supports.get(items).copied().ok_or_else(|| {
        Error::InvalidArgument(format!(
            "support of {:?} is unknown; frequent item sets must contain every subset",
            items
        ))
    })
}
