use super::{Metric, RuleSupports};

/// Observed minus expected co-occurrence under independence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Leverage;

impl Metric for Leverage {
    fn name(&self) -> &'static str {
        "leverage"
    }

    fn score(&self, supports: &RuleSupports) -> f64 {
        supports.rule - supports.body * supports.head
    }

    fn min_value(&self) -> f64 {
        -0.25
    }

    fn max_value(&self) -> f64 {
        0.25
    }
}
