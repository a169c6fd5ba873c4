use crate::{
    error::{ensure_in_range, ensure_min_support, ensure_positive_count, Error, Result},
    metrics::{Metric, MetricKind},
    rules::RuleFilter,
};

/// Upper bound on the mining passes of the iterative support search.
const MAX_SUPPORT_STEPS: f64 = 10_000.0;

/// Parameters of one mining run. Immutable once built; every threshold has
/// been checked against its metric's range.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    min_support: f64,
    max_support: f64,
    support_delta: f64,
    frequent_item_set_count: Option<usize>,
    max_item_set_size: Option<usize>,
    generate_rules: bool,
    generation_metric: MetricKind,
    min_generation_value: f64,
    rule_thresholds: Vec<(MetricKind, f64)>,
    sort_metric: Option<MetricKind>,
    rule_count: Option<usize>,
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    /// Support the iterative search starts from.
    pub fn max_support(&self) -> f64 {
        self.max_support
    }

    /// Step by which the iterative search lowers the support.
    pub fn support_delta(&self) -> f64 {
        self.support_delta
    }

    /// Number of frequent itemsets to look for, if any.
    pub fn frequent_item_set_count(&self) -> Option<usize> {
        self.frequent_item_set_count
    }

    pub fn max_item_set_size(&self) -> Option<usize> {
        self.max_item_set_size
    }

    pub fn generate_rules(&self) -> bool {
        self.generate_rules
    }

    pub fn generation_metric(&self) -> MetricKind {
        self.generation_metric
    }

    pub fn min_generation_value(&self) -> f64 {
        self.min_generation_value
    }

    pub fn rule_thresholds(&self) -> &[(MetricKind, f64)] {
        &self.rule_thresholds
    }

    pub fn sort_metric(&self) -> Option<MetricKind> {
        self.sort_metric
    }

    pub fn rule_count(&self) -> Option<usize> {
        self.rule_count
    }

    /// Filter made of the additional rule thresholds.
    pub fn rule_filter(&self) -> Result<RuleFilter> {
        self.rule_thresholds
            .iter()
            .try_fold(RuleFilter::new(), |filter, &(metric, min_value)| {
                filter.with(metric, min_value)
            })
    }

    /// The metric top-K rules are chosen by.
    pub fn ranking_metric(&self) -> MetricKind {
        self.sort_metric.unwrap_or(self.generation_metric)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            min_support: 0.1,
            max_support: 1.0,
            support_delta: 0.1,
            frequent_item_set_count: None,
            max_item_set_size: None,
            generate_rules: false,
            generation_metric: MetricKind::Confidence,
            min_generation_value: 0.5,
            rule_thresholds: Vec::new(),
            sort_metric: None,
            rule_count: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    configuration: Configuration,
}

impl ConfigurationBuilder {
    pub fn min_support(mut self, min_support: f64) -> Self {
        self.configuration.min_support = min_support;
        self
    }

    pub fn max_support(mut self, max_support: f64) -> Self {
        self.configuration.max_support = max_support;
        self
    }

    pub fn support_delta(mut self, support_delta: f64) -> Self {
        self.configuration.support_delta = support_delta;
        self
    }

    /// Lowers the support from `max_support` until `count` itemsets are
    /// found, then keeps the `count` most frequent ones.
    pub fn frequent_item_set_count(mut self, count: usize) -> Self {
        self.configuration.frequent_item_set_count = Some(count);
        self
    }

    pub fn max_item_set_size(mut self, size: usize) -> Self {
        self.configuration.max_item_set_size = Some(size);
        self
    }

    /// Turns on rule generation; rules scoring below `min_value` on `metric`
    /// are never built.
    pub fn generate_rules(mut self, metric: MetricKind, min_value: f64) -> Self {
        self.configuration.generate_rules = true;
        self.configuration.generation_metric = metric;
        self.configuration.min_generation_value = min_value;
        self
    }

    /// Shorthand for rule generation filtered by confidence.
    pub fn min_confidence(self, min_confidence: f64) -> Self {
        self.generate_rules(MetricKind::Confidence, min_confidence)
    }

    /// Additional threshold applied after generation.
    pub fn rule_threshold(mut self, metric: MetricKind, min_value: f64) -> Self {
        self.configuration.rule_thresholds.push((metric, min_value));
        self
    }

    pub fn sort_metric(mut self, metric: MetricKind) -> Self {
        self.configuration.sort_metric = Some(metric);
        self
    }

    pub fn rule_count(mut self, count: usize) -> Self {
        self.configuration.rule_count = Some(count);
        self
    }

    pub fn build(self) -> Result<Configuration> {
        let configuration = self.configuration;

        ensure_min_support(configuration.min_support)?;
        ensure_in_range(
            "max support",
            configuration.max_support,
            configuration.min_support,
            1.0,
        )?;
        ensure_in_range("support delta", configuration.support_delta, f64::MIN_POSITIVE, 1.0)?;
        let steps =
            (configuration.max_support - configuration.min_support) / configuration.support_delta;
        if steps > MAX_SUPPORT_STEPS {
            return Err(Error::InvalidArgument(format!(
                "support delta {} needs more than {} steps from max support {} to min support {}",
                configuration.support_delta,
                MAX_SUPPORT_STEPS,
                configuration.max_support,
                configuration.min_support
            )));
        }
        ensure_positive_count("frequent item set count", configuration.frequent_item_set_count)?;
        ensure_positive_count("max item set size", configuration.max_item_set_size)?;
        ensure_positive_count("rule count", configuration.rule_count)?;

        let metric = configuration.generation_metric;
        ensure_in_range(
            "min generation value",
            configuration.min_generation_value,
            metric.min_value(),
            metric.max_value(),
        )?;
        configuration.rule_filter()?;

        Ok(configuration)
    }
}
