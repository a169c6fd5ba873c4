//! Frequent itemset mining with the Apriori algorithm, and association rules
//! derived from the mined itemsets.
//!
//! ```
//! use arules::{Apriori, Configuration, MetricKind};
//! use std::collections::BTreeSet;
//!
//! let baskets: Vec<BTreeSet<&str>> = vec![
//!     ["a", "b"].into_iter().collect(),
//!     ["a", "b", "c"].into_iter().collect(),
//!     ["b", "c"].into_iter().collect(),
//!     ["a"].into_iter().collect(),
//! ];
//!
//! let configuration = Configuration::builder()
//!     .min_support(0.5)
//!     .generate_rules(MetricKind::Confidence, 0.5)
//!     .build()?;
//! let output = Apriori::new(configuration).execute(&baskets)?;
//!
//! assert_eq!(output.frequent_item_sets().len(), 5);
//! assert!(output.rule_set().is_some());
//! # Ok::<(), arules::Error>(())
//! ```

use std::collections::{HashMap, HashSet};

pub mod apriori;
pub mod combi;
pub mod config;
pub mod error;
pub mod item;
pub mod itemset;
pub mod itemsets;
pub mod metrics;
pub mod output;
pub mod rules;
pub mod transaction;
pub mod types;
#[cfg(feature = "python")]
mod wrapper;

pub use apriori::Apriori;
pub use combi::generate_candidates;
pub use config::{Configuration, ConfigurationBuilder};
pub use error::{Error, Result};
pub use item::{Item, NamedItem};
pub use itemset::ItemSet;
pub use itemsets::{
    count::{support_of, TransactionDatabase},
    search::FrequentItemSetMiner,
    FrequentItemSets,
};
pub use metrics::{
    meets_threshold, Confidence, Conviction, Leverage, Lift, Metric, MetricKind, RuleSupports,
    Support,
};
pub use output::Output;
pub use rules::{generate_rules, rank, AssociationRule, RuleFilter, RuleSet};
pub use transaction::Transaction;
