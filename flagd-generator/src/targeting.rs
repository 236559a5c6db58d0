//! JsonLogic targeting rules as understood by flagd.
//!
//! Only the two shapes the generator emits are modelled: a two-way
//! `fractional` split keyed on the session id, and an `if` whose guard is a
//! conjunction of `===` checks on context attributes.

use serde::{Deserialize, Serialize};

use crate::context::ContextSample;

pub const SESSION_ID_KEY: &str = "sessionId";
pub const ON_VARIANT: &str = "on";
pub const OFF_VARIANT: &str = "off";

/// `{"var": "<context key>"}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Var {
    pub var: String,
}

impl Var {
    pub fn new(key: &str) -> Self {
        Self {
            var: key.to_string(),
        }
    }
}

/// A `[variant, weight]` pair inside a fractional distribution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Bucket(pub String, pub u8);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Fractional {
    pub fractional: (Var, Bucket, Bucket),
}

impl Fractional {
    /// Sends `percentage` of sessions to `on` and the rest to `off`.
    pub fn split(percentage: u8) -> Self {
        Self {
            fractional: (
                Var::new(SESSION_ID_KEY),
                Bucket(ON_VARIANT.to_string(), percentage),
                Bucket(OFF_VARIANT.to_string(), 100u8.saturating_sub(percentage)),
            ),
        }
    }

    pub fn buckets(&self) -> [&Bucket; 2] {
        [&self.fractional.1, &self.fractional.2]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Equals {
    #[serde(rename = "===")]
    pub operands: (Var, String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct And {
    pub and: Vec<Equals>,
}

/// `{"if": [guard, then, else]}` where `else` is a static variant name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Conditional {
    #[serde(rename = "if")]
    pub branches: (And, Fractional, String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Targeting {
    Fractional(Fractional),
    Conditional(Conditional),
}

impl Targeting {
    /// Builds the rollout rule for a segmented flag. An empty context yields a
    /// bare fractional split, otherwise the split only applies to evaluations
    /// matching every sampled attribute and everything else resolves to `off`.
    pub fn rollout(percentage: u8, context: &ContextSample) -> Self {
        let split = Fractional::split(percentage);
        if context.is_empty() {
            return Targeting::Fractional(split);
        }

        let guard = And {
            and: context
                .iter()
                .map(|(attribute, value)| Equals {
                    operands: (Var::new(attribute.key()), value.to_string()),
                })
                .collect(),
        };

        Targeting::Conditional(Conditional {
            branches: (guard, split, OFF_VARIANT.to_string()),
        })
    }

    pub fn fractional(&self) -> &Fractional {
        match self {
            Targeting::Fractional(split) => split,
            Targeting::Conditional(conditional) => &conditional.branches.1,
        }
    }

    /// Variant weights of the fractional split, in declaration order.
    pub fn weights(&self) -> Vec<(&str, u8)> {
        self.fractional()
            .buckets()
            .into_iter()
            .map(|Bucket(variant, weight)| (variant.as_str(), *weight))
            .collect()
    }

    pub fn total_weight(&self) -> u32 {
        self.weights().iter().map(|(_, w)| u32::from(*w)).sum()
    }
}
