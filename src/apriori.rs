use chrono::Utc;

use crate::{
    config::Configuration,
    error::Result,
    item::Item,
    itemsets::{count::TransactionDatabase, search::FrequentItemSetMiner, FrequentItemSets},
    output::Output,
    rules::{generate_rules, rank, RuleSet},
    transaction::Transaction,
};

/// A mining session: frequent itemsets and, when configured, the rules
/// derived from them.
#[derive(Debug, Clone)]
pub struct Apriori {
    configuration: Configuration,
}

impl Apriori {
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Runs the configured search over `transactions`, which are read once.
    #[tracing::instrument(skip_all, fields(min_support = self.configuration.min_support()))]
    pub fn execute<I, T, S>(&self, transactions: S) -> Result<Output<I>>
    where
        I: Item,
        S: IntoIterator<Item = T>,
        T: Transaction<Item = I>,
    {
        let start_time = Utc::now();
        let database = TransactionDatabase::encode(transactions);

        let mut frequent_item_sets = self.find_frequent_item_sets(&database)?;
        let mut rule_set = if self.configuration.generate_rules() {
            Some(self.find_rules(&frequent_item_sets)?)
        } else {
            None
        };

        if let Some(count) = self.configuration.frequent_item_set_count() {
            frequent_item_sets.truncate(count);
            if let Some(rules) = rule_set.as_mut() {
                // a rule stays only if the itemset it was derived from is reported
                let supports = frequent_item_sets.support_index();
                rules.retain(|rule| supports.contains_key(rule.items().items()));
            }
        }
        let rule_set = rule_set.map(|rules| self.rank_rules(rules));

        let end_time = Utc::now();
        tracing::info!(
            itemsets = frequent_item_sets.len(),
            rules = rule_set.as_ref().map_or(0, RuleSet::len),
            runtime_ms = (end_time - start_time).num_milliseconds(),
            "mining finished"
        );

        Output::new(
            self.configuration.clone(),
            start_time,
            end_time,
            frequent_item_sets,
            rule_set,
        )
    }

    /// Mines at the minimum support or, when a target count is set, lowers
    /// the support from the maximum step by step until enough itemsets show
    /// up.
    fn find_frequent_item_sets<I: Item>(
        &self,
        database: &TransactionDatabase<I>,
    ) -> Result<FrequentItemSets<I>> {
        let configuration = &self.configuration;
        let miner = |support: f64| {
            FrequentItemSetMiner::new(support)?.with_max_size(configuration.max_item_set_size())
        };

        let count = match configuration.frequent_item_set_count() {
            Some(count) if !database.is_empty() => count,
            _ => return Ok(miner(configuration.min_support())?.mine_encoded(database)),
        };

        let mut step = 0u32;
        let mut support = configuration.max_support();
        loop {
            let frequent_item_sets = miner(support)?.mine_encoded(database);
            tracing::debug!(support, found = frequent_item_sets.len(), wanted = count);
            if frequent_item_sets.len() >= count || support <= configuration.min_support() {
                return Ok(frequent_item_sets);
            }

            step += 1;
            let next_support = (configuration.max_support()
                - f64::from(step) * configuration.support_delta())
            .max(configuration.min_support());
            if next_support >= support {
                tracing::warn!(support, "support search stopped making progress");
                return Ok(frequent_item_sets);
            }
            support = next_support;
        }
    }

    /// Rules reaching the generation threshold and every additional threshold.
    fn find_rules<I: Item>(&self, frequent_item_sets: &FrequentItemSets<I>) -> Result<RuleSet<I>> {
        let configuration = &self.configuration;
        let rules = generate_rules(
            frequent_item_sets,
            &configuration.generation_metric(),
            configuration.min_generation_value(),
        )?;

        let filter = configuration.rule_filter()?;
        if filter.is_empty() {
            Ok(rules)
        } else {
            Ok(filter.apply(&rules))
        }
    }

    fn rank_rules<I: Item>(&self, rules: RuleSet<I>) -> RuleSet<I> {
        let configuration = &self.configuration;
        if configuration.sort_metric().is_some() || configuration.rule_count().is_some() {
            rank(
                &rules,
                &configuration.ranking_metric(),
                configuration.rule_count(),
            )
        } else {
            rules
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{itemset::ItemSet, metrics::MetricKind};
    use maplit::btreeset;
    use std::collections::BTreeSet;

    fn baskets() -> Vec<BTreeSet<&'static str>> {
        vec![
            btreeset! {"bread", "yogurt"},
            btreeset! {"bread", "milk", "cereal", "eggs"},
            btreeset! {"yogurt", "milk", "cereal", "cheese"},
            btreeset! {"bread", "yogurt", "milk", "cereal"},
            btreeset! {"bread", "yogurt", "milk", "cheese"},
        ]
    }

    #[test]
    fn itemsets_only_has_no_rule_set() {
        let configuration = Configuration::builder().min_support(0.6).build().unwrap();
        let output = Apriori::new(configuration).execute(&baskets()).unwrap();

        assert!(output.rule_set().is_none());
        assert!(output.end_time() >= output.start_time());
        let found: Vec<Vec<&str>> = output
            .frequent_item_sets()
            .iter()
            .map(|itemset| itemset.items().to_vec())
            .collect();
        assert_eq!(
            found,
            vec![
                vec!["bread"],
                vec!["milk"],
                vec!["yogurt"],
                vec!["bread", "milk"],
                vec!["bread", "yogurt"],
                vec!["cereal"],
                vec!["cereal", "milk"],
                vec!["milk", "yogurt"],
            ]
        );
    }

    fn rule_pairs(min_confidence: f64) -> Vec<(Vec<&'static str>, Vec<&'static str>)> {
        let configuration = Configuration::builder()
            .min_support(0.6)
            .min_confidence(min_confidence)
            .build()
            .unwrap();
        let output = Apriori::new(configuration).execute(baskets()).unwrap();
        output
            .rule_set()
            .unwrap()
            .iter()
            .map(|rule| (rule.body().items().to_vec(), rule.head().items().to_vec()))
            .collect()
    }

    #[test]
    fn rules_on_the_confidence_boundary_are_kept() {
        // every pair rule has confidence 0.75 except cereal -> milk
        let pairs = rule_pairs(0.75);
        assert_eq!(pairs.len(), 8);
        assert!(pairs.contains(&(vec!["bread"], vec!["milk"])));
        assert!(pairs.contains(&(vec!["milk"], vec!["cereal"])));
    }

    #[test]
    fn rules_below_min_confidence_are_dropped() {
        assert_eq!(rule_pairs(0.8), vec![(vec!["cereal"], vec!["milk"])]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let configuration = Configuration::builder().min_confidence(0.5).build().unwrap();
        let output = Apriori::new(configuration)
            .execute(Vec::<BTreeSet<&str>>::new())
            .unwrap();
        assert!(output.frequent_item_sets().is_empty());
        assert!(output.rule_set().unwrap().is_empty());
    }

    #[test]
    fn iterative_search_stops_at_requested_count() {
        let configuration = Configuration::builder()
            .min_support(0.2)
            .max_support(1.0)
            .support_delta(0.2)
            .frequent_item_set_count(3)
            .build()
            .unwrap();
        let output = Apriori::new(configuration).execute(baskets()).unwrap();

        // 0.8 finds bread, milk and yogurt
        let found: Vec<(Vec<&str>, f64)> = output
            .frequent_item_sets()
            .iter()
            .map(|itemset| (itemset.items().to_vec(), itemset.support()))
            .collect();
        assert_eq!(
            found,
            vec![
                (vec!["bread"], 0.8),
                (vec!["milk"], 0.8),
                (vec!["yogurt"], 0.8),
            ]
        );
    }

    #[test]
    fn iterative_search_truncates_overshoot() {
        let configuration = Configuration::builder()
            .min_support(0.2)
            .support_delta(0.2)
            .frequent_item_set_count(5)
            .build()
            .unwrap();
        let output = Apriori::new(configuration).execute(baskets()).unwrap();
        assert_eq!(output.frequent_item_sets().len(), 5);
        assert_eq!(
            output.frequent_item_sets().as_slice()[3].items(),
            &["bread", "milk"]
        );
    }

    #[test]
    fn top_rules_are_ranked() {
        let configuration = Configuration::builder()
            .min_support(0.4)
            .generate_rules(MetricKind::Confidence, 0.5)
            .sort_metric(MetricKind::Lift)
            .rule_count(3)
            .build()
            .unwrap();
        let output = Apriori::new(configuration).execute(baskets()).unwrap();
        let rules = output.rule_set().unwrap();

        assert_eq!(rules.len(), 3);
        let lifts: Vec<f64> = rules
            .iter()
            .map(|rule| rule.evaluate(&MetricKind::Lift))
            .collect();
        assert!(lifts.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn additional_thresholds_filter_rules() {
        let configuration = Configuration::builder()
            .min_support(0.4)
            .min_confidence(0.5)
            .rule_threshold(MetricKind::Lift, 1.1)
            .build()
            .unwrap();
        let output = Apriori::new(configuration).execute(baskets()).unwrap();
        for rule in output.rule_set().unwrap() {
            assert!(rule.evaluate(&MetricKind::Lift) >= 1.1);
            assert!(rule.evaluate(&MetricKind::Confidence) >= 0.5);
        }
    }

    #[test]
    fn size_cap_limits_itemsets() {
        let configuration = Configuration::builder()
            .min_support(0.2)
            .max_item_set_size(2)
            .build()
            .unwrap();
        let output = Apriori::new(configuration).execute(baskets()).unwrap();
        assert!(output.frequent_item_sets().iter().all(|s| s.len() <= 2));
        assert!(output.frequent_item_sets().iter().any(|s| s.len() == 2));
    }

    #[test]
    fn truncated_itemsets_keep_only_their_rules() {
        let configuration = Configuration::builder()
            .min_support(0.2)
            .support_delta(0.2)
            .frequent_item_set_count(5)
            .min_confidence(0.5)
            .build()
            .unwrap();
        let output = Apriori::new(configuration).execute(baskets()).unwrap();
        let frequent = output.frequent_item_sets();
        let rules = output.rule_set().unwrap();

        // bread, milk, yogurt, [bread, milk], [bread, yogurt]
        assert_eq!(frequent.len(), 5);
        assert_eq!(rules.len(), 4);
        for rule in rules {
            let parent = frequent.iter().find(|itemset| **itemset == rule.items());
            assert_eq!(parent.map(ItemSet::support), Some(rule.support()), "{}", rule);
            assert!(rule.body().items().contains(&"bread") || rule.head().items().contains(&"bread"));
        }
    }

    #[test]
    fn top_rules_are_picked_after_truncation() {
        let configuration = Configuration::builder()
            .min_support(0.2)
            .support_delta(0.2)
            .frequent_item_set_count(5)
            .min_confidence(0.5)
            .rule_count(3)
            .build()
            .unwrap();
        let output = Apriori::new(configuration).execute(baskets()).unwrap();
        assert_eq!(output.rule_set().unwrap().len(), 3);
    }

    #[test]
    fn fine_support_steps_terminate() {
        let configuration = Configuration::builder()
            .min_support(0.1)
            .support_delta(0.001)
            .frequent_item_set_count(1000)
            .build()
            .unwrap();
        let output = Apriori::new(configuration).execute(baskets()).unwrap();
        // never reaches 1000, so the search ends at min support
        let everything = FrequentItemSetMiner::new(0.1)
            .unwrap()
            .mine(baskets());
        assert_eq!(output.frequent_item_sets(), &everything);
    }
}
