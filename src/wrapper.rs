use std::collections::BTreeSet;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{
    apriori::Apriori,
    config::Configuration,
    error::Error,
    metrics::{Confidence, Lift},
    output::Output,
    rules::AssociationRule,
};

impl From<Error> for PyErr {
    fn from(error: Error) -> Self {
        PyValueError::new_err(error.to_string())
    }
}

#[pyclass(frozen, get_all)]
#[derive(Debug, Clone)]
pub struct Rule {
    antecedent: Vec<String>,
    consequent: Vec<String>,
    support: f64,
    confidence: f64,
    lift: f64,
}

#[pymethods]
impl Rule {
    fn __repr__(&self) -> String {
        format!(
            "Rule({:?} -> {:?}, support={}, confidence={}, lift={})",
            self.antecedent, self.consequent, self.support, self.confidence, self.lift
        )
    }
}

impl From<&AssociationRule<String>> for Rule {
    fn from(rule: &AssociationRule<String>) -> Self {
        Rule {
            antecedent: rule.body().items().to_vec(),
            consequent: rule.head().items().to_vec(),
            support: rule.support(),
            confidence: rule.evaluate(&Confidence),
            lift: rule.evaluate(&Lift),
        }
    }
}

type PyItemsets = Vec<(Vec<String>, f64)>;

fn convert_output(output: Output<String>) -> (PyItemsets, Vec<Rule>) {
    let (frequent_item_sets, rule_set) = output.into_parts();
    let itemsets = frequent_item_sets
        .into_vec()
        .into_iter()
        .map(|itemset| {
            let support = itemset.support();
            (itemset.items().to_vec(), support)
        })
        .collect();
    let rules = rule_set
        .map(|rules| rules.iter().map(Rule::from).collect())
        .unwrap_or_default();
    (itemsets, rules)
}

/// Apriori algorithm for association rules.
///
/// Returns the frequent itemsets as `(items, support)` pairs, most frequent
/// first, and the rules reaching `min_confidence` when it is given.
#[pyfunction]
#[pyo3(signature = (transactions, min_support, min_confidence=None, max_len=None))]
fn apriori(
    py: Python<'_>,
    transactions: Vec<Vec<String>>,
    min_support: f64,
    min_confidence: Option<f64>,
    max_len: Option<usize>,
) -> PyResult<(PyItemsets, Vec<Rule>)> {
    let mut builder = Configuration::builder().min_support(min_support);
    if let Some(min_confidence) = min_confidence {
        builder = builder.min_confidence(min_confidence);
    }
    if let Some(max_len) = max_len {
        builder = builder.max_item_set_size(max_len);
    }
    let configuration = builder.build()?;

    let transactions: Vec<BTreeSet<String>> = transactions
        .into_iter()
        .map(|transaction| transaction.into_iter().collect())
        .collect();
    let output = py.allow_threads(|| Apriori::new(configuration).execute(transactions))?;
    Ok(convert_output(output))
}

#[pymodule]
fn arules(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Rule>()?;
    m.add_function(wrap_pyfunction!(apriori, m)?)?;
    Ok(())
}
