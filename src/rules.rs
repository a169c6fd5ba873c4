pub mod filter;
pub mod rank;
pub mod rule;
pub mod rule_set;
pub mod search;

pub use filter::RuleFilter;
pub use rank::rank;
pub use rule::AssociationRule;
pub use rule_set::RuleSet;
pub use search::generate_rules;
