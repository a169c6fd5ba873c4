//! Interestingness measures for association rules.
//!
//! Every measure is a pure function of three supports: the rule's own
//! (body and head together), the body's and the head's. Scores always lie
//! within the measure's declared `[min_value, max_value]`, which is also what
//! configured thresholds are validated against.

mod confidence;
mod conviction;
mod leverage;
mod lift;
mod support;

use std::fmt::{self, Debug, Display, Formatter};

pub use confidence::Confidence;
pub use conviction::Conviction;
pub use leverage::Leverage;
pub use lift::Lift;
pub use support::Support;

/// The supports a rule is scored from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleSupports {
    /// Support of body and head together.
    pub rule: f64,
    pub body: f64,
    pub head: f64,
}

pub trait Metric: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Raw score; [`evaluate`](Metric::evaluate) clamps it into range.
    fn score(&self, supports: &RuleSupports) -> f64;

    fn min_value(&self) -> f64;

    fn max_value(&self) -> f64;

    /// Whether the score can only drop when items move from body to head.
    /// Lets rule generation skip the smaller bodies of a rejected rule.
    fn decreases_with_head_growth(&self) -> bool {
        false
    }

    fn evaluate(&self, supports: &RuleSupports) -> f64 {
        self.score(supports)
            .clamp(self.min_value(), self.max_value())
    }
}

/// The built-in measures, as a copyable tag usable in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricKind {
    Support,
    Confidence,
    Lift,
    Leverage,
    Conviction,
}

impl MetricKind {
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Support,
        MetricKind::Confidence,
        MetricKind::Lift,
        MetricKind::Leverage,
        MetricKind::Conviction,
    ];

    fn as_metric(&self) -> &'static dyn Metric {
        match self {
            MetricKind::Support => &Support,
            MetricKind::Confidence => &Confidence,
            MetricKind::Lift => &Lift,
            MetricKind::Leverage => &Leverage,
            MetricKind::Conviction => &Conviction,
        }
    }
}

impl Metric for MetricKind {
    fn name(&self) -> &'static str {
        self.as_metric().name()
    }

    fn score(&self, supports: &RuleSupports) -> f64 {
        self.as_metric().score(supports)
    }

    fn min_value(&self) -> f64 {
        self.as_metric().min_value()
    }

    fn max_value(&self) -> f64 {
        self.as_metric().max_value()
    }

    fn decreases_with_head_growth(&self) -> bool {
        self.as_metric().decreases_with_head_growth()
    }
}

impl Display for MetricKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scores are ratios of ratios while thresholds are usually typed as
/// decimals, so `0.6 / 0.8` has to count as reaching `0.75`.
const THRESHOLD_TOLERANCE: f64 = 1e-12;

/// Whether `score` reaches the threshold `min_value`.
pub fn meets_threshold(score: f64, min_value: f64) -> bool {
    score >= min_value - THRESHOLD_TOLERANCE
}

/// `numerator / denominator`, or 0 when the denominator is 0.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
