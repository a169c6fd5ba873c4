use super::{ratio, Metric, RuleSupports};

/// How often the head occurs in transactions containing the body.
///
/// A body with zero support scores 0. That cannot happen for rules derived
/// from frequent itemsets, only for rules built by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Confidence;

impl Metric for Confidence {
    fn name(&self) -> &'static str {
        "confidence"
    }

    fn score(&self, supports: &RuleSupports) -> f64 {
        ratio(supports.rule, supports.body)
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        1.0
    }

    fn decreases_with_head_growth(&self) -> bool {
        true
    }
}
