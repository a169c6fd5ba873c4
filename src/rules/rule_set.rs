use std::cmp::Ordering;

use crate::{item::Item, itemset::ItemSet, metrics::Metric, rules::rule::AssociationRule, HashMap};

/// An ordered collection of rules, unique by body and head.
#[derive(Debug, Clone)]
pub struct RuleSet<I> {
    rules: Vec<AssociationRule<I>>,
    by_body: HashMap<ItemSet<I>, Vec<usize>>,
}

impl<I: Item> RuleSet<I> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            by_body: HashMap::new(),
        }
    }

    /// Appends `rule` unless a rule with the same body and head is present.
    pub fn insert(&mut self, rule: AssociationRule<I>) -> bool {
        if self.contains(&rule) {
            return false;
        }
        self.by_body
            .entry(rule.body().clone())
            .or_default()
            .push(self.rules.len());
        self.rules.push(rule);
        true
    }

    pub fn contains(&self, rule: &AssociationRule<I>) -> bool {
        self.with_body(rule.body())
            .any(|existing| existing.head() == rule.head())
    }

    /// Rules whose body is exactly `body`, in set order.
    pub fn with_body<'a>(
        &'a self,
        body: &ItemSet<I>,
    ) -> impl Iterator<Item = &'a AssociationRule<I>> + 'a {
        self.by_body
            .get(body)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&index| &self.rules[index])
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssociationRule<I>> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[AssociationRule<I>] {
        &self.rules
    }

    /// Sorts by descending score of `metric`, ties by body and head.
    pub fn sort_by_metric<M: Metric + ?Sized>(&mut self, metric: &M) {
        let mut scored: Vec<(f64, AssociationRule<I>)> = self
            .rules
            .drain(..)
            .map(|rule| (rule.evaluate(metric), rule))
            .collect();
        scored.sort_by(|(a_score, a), (b_score, b)| compare_scored(*a_score, a, *b_score, b));
        self.rules = scored.into_iter().map(|(_, rule)| rule).collect();
        self.reindex();
    }

    /// Sorted copy; `self` is left untouched.
    pub fn sorted_by_metric<M: Metric + ?Sized>(&self, metric: &M) -> Self {
        let mut sorted = self.clone();
        sorted.sort_by_metric(metric);
        sorted
    }

    /// Sorts by body and head.
    pub fn sort(&mut self) {
        self.rules.sort();
        self.reindex();
    }

    pub fn truncate(&mut self, count: usize) {
        if count < self.rules.len() {
            self.rules.truncate(count);
            self.reindex();
        }
    }

    /// Keeps the rules `keep` accepts, in their current order.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&AssociationRule<I>) -> bool,
    {
        let len = self.rules.len();
        self.rules.retain(keep);
        if self.rules.len() < len {
            self.reindex();
        }
    }

    pub fn into_vec(self) -> Vec<AssociationRule<I>> {
        self.rules
    }

    fn reindex(&mut self) {
        self.by_body.clear();
        for (index, rule) in self.rules.iter().enumerate() {
            self.by_body
                .entry(rule.body().clone())
                .or_default()
                .push(index);
        }
    }
}

pub(crate) fn compare_scored<I: Item>(
    a_score: f64,
    a: &AssociationRule<I>,
    b_score: f64,
    b: &AssociationRule<I>,
) -> Ordering {
    b_score.total_cmp(&a_score).then_with(|| a.cmp(b))
}

impl<I: Item> Default for RuleSet<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Same rules in the same order.
impl<I: Item> PartialEq for RuleSet<I> {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
    }
}

impl<I: Item> Eq for RuleSet<I> {}

impl<'a, I: Item> IntoIterator for &'a RuleSet<I> {
    type Item = &'a AssociationRule<I>;
    type IntoIter = std::slice::Iter<'a, AssociationRule<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl<I: Item> FromIterator<AssociationRule<I>> for RuleSet<I> {
    fn from_iter<T: IntoIterator<Item = AssociationRule<I>>>(iter: T) -> Self {
        let mut rule_set = Self::new();
        for rule in iter {
            rule_set.insert(rule);
        }
        rule_set
    }
}

impl<I: Item> Extend<AssociationRule<I>> for RuleSet<I> {
    fn extend<T: IntoIterator<Item = AssociationRule<I>>>(&mut self, iter: T) {
        for rule in iter {
            self.insert(rule);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{Confidence, Support};

    fn itemset(items: &[&'static str], support: f64) -> ItemSet<&'static str> {
        items
            .iter()
            .copied()
            .collect::<ItemSet<_>>()
            .with_support(support)
            .unwrap()
    }

    fn rule(
        body: &[&'static str],
        body_support: f64,
        head: &[&'static str],
        support: f64,
    ) -> AssociationRule<&'static str> {
        AssociationRule::new(itemset(body, body_support), itemset(head, 0.5), support).unwrap()
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut rules = RuleSet::new();
        assert!(rules.insert(rule(&["a"], 0.5, &["b"], 0.5)));
        assert!(!rules.insert(rule(&["a"], 0.9, &["b"], 0.1)));
        assert!(rules.insert(rule(&["b"], 0.5, &["a"], 0.5)));
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn looks_up_rules_by_body() {
        let rules: RuleSet<&str> = vec![
            rule(&["a"], 0.5, &["b"], 0.5),
            rule(&["b"], 0.5, &["a"], 0.5),
            rule(&["a"], 0.5, &["c"], 0.25),
        ]
        .into_iter()
        .collect();

        let heads: Vec<&ItemSet<&str>> = rules
            .with_body(&itemset(&["a"], 0.0))
            .map(AssociationRule::head)
            .collect();
        assert_eq!(heads, vec![&itemset(&["b"], 0.0), &itemset(&["c"], 0.0)]);
        assert_eq!(rules.with_body(&itemset(&["z"], 0.0)).count(), 0);
    }

    #[test]
    fn sorts_by_metric_descending() {
        let mut rules: RuleSet<&str> = vec![
            rule(&["a"], 1.0, &["b"], 0.25),
            rule(&["c"], 0.5, &["d"], 0.5),
            rule(&["e"], 0.5, &["f"], 0.25),
        ]
        .into_iter()
        .collect();

        rules.sort_by_metric(&Confidence);
        let bodies: Vec<&str> = rules.iter().map(|r| r.body().items()[0]).collect();
        assert_eq!(bodies, vec!["c", "e", "a"]);
        assert_eq!(rules.with_body(&itemset(&["e"], 0.0)).count(), 1);
    }

    #[test]
    fn sorted_copy_leaves_original_alone() {
        let rules: RuleSet<&str> = vec![
            rule(&["a"], 0.5, &["b"], 0.1),
            rule(&["c"], 0.5, &["d"], 0.4),
        ]
        .into_iter()
        .collect();

        let sorted = rules.sorted_by_metric(&Support);
        assert_eq!(sorted.as_slice()[0].body(), &itemset(&["c"], 0.0));
        assert_eq!(rules.as_slice()[0].body(), &itemset(&["a"], 0.0));
    }

    #[test]
    fn ties_are_broken_by_content() {
        let mut rules: RuleSet<&str> = vec![
            rule(&["b"], 0.5, &["a"], 0.5),
            rule(&["a"], 0.5, &["c"], 0.5),
            rule(&["a"], 0.5, &["b"], 0.5),
        ]
        .into_iter()
        .collect();

        rules.sort_by_metric(&Support);
        let mut expected = rules.clone();
        expected.sort();
        assert_eq!(rules, expected);
    }

    #[test]
    fn truncate_keeps_index_consistent() {
        let mut rules: RuleSet<&str> = vec![
            rule(&["a"], 0.5, &["b"], 0.5),
            rule(&["c"], 0.5, &["d"], 0.5),
        ]
        .into_iter()
        .collect();
        rules.truncate(1);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.with_body(&itemset(&["c"], 0.0)).count(), 0);
        assert!(rules.contains(&rule(&["a"], 0.5, &["b"], 0.5)));
    }

    #[test]
    fn retain_keeps_index_consistent() {
        let mut rules: RuleSet<&str> = vec![
            rule(&["a"], 0.5, &["b"], 0.5),
            rule(&["c"], 0.5, &["d"], 0.25),
            rule(&["e"], 0.5, &["f"], 0.5),
        ]
        .into_iter()
        .collect();
        rules.retain(|rule| rule.support() > 0.3);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.with_body(&itemset(&["c"], 0.0)).count(), 0);
        assert_eq!(rules.with_body(&itemset(&["e"], 0.0)).count(), 1);
        assert!(!rules.insert(rule(&["e"], 0.5, &["f"], 0.5)));
    }
}
