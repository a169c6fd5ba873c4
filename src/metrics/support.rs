use super::{Metric, RuleSupports};

/// Fraction of transactions containing body and head.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Support;

impl Metric for Support {
    fn name(&self) -> &'static str {
        "support"
    }

    fn score(&self, supports: &RuleSupports) -> f64 {
        supports.rule
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        1.0
    }
}
