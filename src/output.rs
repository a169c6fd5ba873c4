use chrono::{DateTime, Duration, Utc};

use crate::{
    config::Configuration,
    error::{Error, Result},
    item::Item,
    itemsets::FrequentItemSets,
    rules::RuleSet,
};

/// Result of one mining run.
///
/// The rule set is present exactly when the configuration asked for rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Output<I: Item> {
    configuration: Configuration,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    frequent_item_sets: FrequentItemSets<I>,
    rule_set: Option<RuleSet<I>>,
}

impl<I: Item> Output<I> {
    pub fn new(
        configuration: Configuration,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        frequent_item_sets: FrequentItemSets<I>,
        rule_set: Option<RuleSet<I>>,
    ) -> Result<Self> {
        if end_time < start_time {
            return Err(Error::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }
        match (configuration.generate_rules(), rule_set.is_some()) {
            (true, false) => return Err(Error::MissingRuleSet),
            (false, true) => return Err(Error::UnexpectedRuleSet),
            _ => {}
        }

        Ok(Self {
            configuration,
            start_time,
            end_time,
            frequent_item_sets,
            rule_set,
        })
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    pub fn runtime(&self) -> Duration {
        self.end_time - self.start_time
    }

    pub fn frequent_item_sets(&self) -> &FrequentItemSets<I> {
        &self.frequent_item_sets
    }

    pub fn rule_set(&self) -> Option<&RuleSet<I>> {
        self.rule_set.as_ref()
    }

    pub fn into_parts(self) -> (FrequentItemSets<I>, Option<RuleSet<I>>) {
        (self.frequent_item_sets, self.rule_set)
    }
}
