use crate::{
    item::Item,
    metrics::Metric,
    rules::{rule::AssociationRule, rule_set::compare_scored, rule_set::RuleSet},
};

/// The rules of `rules` ordered by descending `metric` score, ties broken
/// by body and head, cut to the best `top_k` when given.
pub fn rank<I, M>(rules: &RuleSet<I>, metric: &M, top_k: Option<usize>) -> RuleSet<I>
where
    I: Item,
    M: Metric + ?Sized,
{
    let mut scored: Vec<(f64, &AssociationRule<I>)> = rules
        .iter()
        .map(|rule| (rule.evaluate(metric), rule))
        .collect();
    scored.sort_by(|(a_score, a), (b_score, b)| compare_scored(*a_score, a, *b_score, b));

    let limit = top_k.unwrap_or(scored.len());
    scored
        .into_iter()
        .take(limit)
        .map(|(_, rule)| rule.clone())
        .collect()
}
