use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::targeting::{Targeting, OFF_VARIANT, ON_VARIANT};

pub const FLAGD_SCHEMA_URL: &str = "https://flagd.dev/schema/v0/flags.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlagState {
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Variant {
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BooleanVariants {
    pub on: Variant,
    pub off: Variant,
}

impl Default for BooleanVariants {
    fn default() -> Self {
        Self {
            on: Variant { value: true },
            off: Variant { value: false },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagDefinition {
    pub state: FlagState,
    pub variants: BooleanVariants,
    pub default_variant: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<Targeting>,
}

impl FlagDefinition {
    pub fn enabled() -> Self {
        Self {
            state: FlagState::Enabled,
            variants: BooleanVariants::default(),
            default_variant: ON_VARIANT.to_string(),
            targeting: None,
        }
    }

    pub fn disabled() -> Self {
        Self {
            state: FlagState::Disabled,
            variants: BooleanVariants::default(),
            default_variant: OFF_VARIANT.to_string(),
            targeting: None,
        }
    }

    /// Enabled, but off unless the targeting rule resolves to `on`.
    pub fn segmented(targeting: Targeting) -> Self {
        Self {
            state: FlagState::Enabled,
            variants: BooleanVariants::default(),
            default_variant: OFF_VARIANT.to_string(),
            targeting: Some(targeting),
        }
    }
}

/// The top level flagd configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlagsDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub flags: BTreeMap<String, FlagDefinition>,
}

impl FlagsDocument {
    pub fn new(flags: BTreeMap<String, FlagDefinition>) -> Self {
        Self {
            schema: FLAGD_SCHEMA_URL.to_string(),
            flags,
        }
    }
}
