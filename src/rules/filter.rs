use std::sync::Arc;

use crate::{
    error::{ensure_in_range, Result},
    item::Item,
    metrics::{meets_threshold, Metric},
    rules::{rule::AssociationRule, rule_set::RuleSet},
};

/// A chain of minimum scores a rule has to reach, one per metric.
#[derive(Debug, Clone, Default)]
pub struct RuleFilter {
    thresholds: Vec<(Arc<dyn Metric>, f64)>,
}

impl RuleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a threshold, which must lie within the metric's range.
    pub fn with<M: Metric + 'static>(mut self, metric: M, min_value: f64) -> Result<Self> {
        ensure_in_range(
            "rule threshold",
            min_value,
            metric.min_value(),
            metric.max_value(),
        )?;
        self.thresholds.push((Arc::new(metric), min_value));
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    pub fn accepts<I: Item>(&self, rule: &AssociationRule<I>) -> bool {
        self.thresholds
            .iter()
            .all(|(metric, min_value)| meets_threshold(rule.evaluate(metric.as_ref()), *min_value))
    }

    /// Accepted rules, in their original order.
    pub fn apply<I: Item>(&self, rules: &RuleSet<I>) -> RuleSet<I> {
        rules
            .iter()
            .filter(|rule| self.accepts(rule))
            .cloned()
            .collect()
    }
}
