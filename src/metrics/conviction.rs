use super::{Confidence, Metric, RuleSupports};

/// How much more often the body would occur without the head if they were
/// independent. A rule that always holds has infinite conviction, unless
/// the head occurs everywhere, which is independence (1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conviction;

impl Metric for Conviction {
    fn name(&self) -> &'static str {
        "conviction"
    }

    fn score(&self, supports: &RuleSupports) -> f64 {
        let confidence = Confidence.evaluate(supports);
        if confidence < 1.0 {
            (1.0 - supports.head) / (1.0 - confidence)
        } else if supports.head < 1.0 {
            f64::INFINITY
        } else {
            1.0
        }
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        f64::INFINITY
    }
}
