use super::{ratio, Confidence, Metric, RuleSupports};

/// Confidence relative to the head's own support; 1 means independence.
/// Unbounded above.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lift;

impl Metric for Lift {
    fn name(&self) -> &'static str {
        "lift"
    }

    fn score(&self, supports: &RuleSupports) -> f64 {
        ratio(Confidence.evaluate(supports), supports.head)
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        f64::INFINITY
    }
}
