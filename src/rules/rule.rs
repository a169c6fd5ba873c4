use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
};

use crate::{
    error::{ensure_in_range, Error, Result},
    item::Item,
    itemset::ItemSet,
    metrics::{Metric, RuleSupports},
};

/// `body -> head`: transactions containing the body tend to contain the
/// head as well.
///
/// The body and head carry their own supports, the rule carries the support
/// of both together. Equality, hashing and ordering only consider the items
/// of body and head.
#[derive(Debug, Clone)]
pub struct AssociationRule<I> {
    body: ItemSet<I>,
    head: ItemSet<I>,
    support: f64,
}

impl<I: Item> AssociationRule<I> {
    /// Fails if body or head is empty, if they share an item or if `support`
    /// lies outside `[0, 1]`.
    pub fn new(body: ItemSet<I>, head: ItemSet<I>, support: f64) -> Result<Self> {
        if body.is_empty() || head.is_empty() {
            return Err(Error::InvalidArgument(
                "body and head of a rule may not be empty".to_string(),
            ));
        }
        if !body.is_disjoint(&head) {
            return Err(Error::InvalidArgument(
                "body and head of a rule must be disjoint".to_string(),
            ));
        }
        ensure_in_range("rule support", support, 0.0, 1.0)?;
        Ok(Self::from_parts(body, head, support))
    }

    pub(crate) fn from_parts(body: ItemSet<I>, head: ItemSet<I>, support: f64) -> Self {
        Self {
            body,
            head,
            support,
        }
    }

    pub fn body(&self) -> &ItemSet<I> {
        &self.body
    }

    pub fn head(&self) -> &ItemSet<I> {
        &self.head
    }

    pub fn support(&self) -> f64 {
        self.support
    }

    /// All items of the rule, i.e. the itemset it was derived from.
    pub fn items(&self) -> ItemSet<I> {
        self.body.union(&self.head)
    }

    pub fn supports(&self) -> RuleSupports {
        RuleSupports {
            rule: self.support,
            body: self.body.support(),
            head: self.head.support(),
        }
    }

    pub fn evaluate<M: Metric + ?Sized>(&self, metric: &M) -> f64 {
        metric.evaluate(&self.supports())
    }
}

impl<I: Item> PartialEq for AssociationRule<I> {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body && self.head == other.head
    }
}

impl<I: Item> Eq for AssociationRule<I> {}

impl<I: Item> Hash for AssociationRule<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.body.hash(state);
        self.head.hash(state);
    }
}

impl<I: Item> PartialOrd for AssociationRule<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: Item> Ord for AssociationRule<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.body
            .cmp(&other.body)
            .then_with(|| self.head.cmp(&other.head))
    }
}

impl<I: Item + Display> Display for AssociationRule<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.body, self.head)
    }
}
