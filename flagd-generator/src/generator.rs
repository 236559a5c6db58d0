use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::context::{random_context, random_percentage};
use crate::flag_models::{FlagDefinition, FlagsDocument};
use crate::targeting::Targeting;

pub const FLAG_COUNT: usize = 1000;
pub const ENABLED_FLAGS: RangeInclusive<usize> = 1..=300;
pub const SEGMENTED_FLAGS: RangeInclusive<usize> = 301..=700;
pub const DISABLED_FLAGS: RangeInclusive<usize> = 701..=FLAG_COUNT;

const PROGRESS_INTERVAL: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagBucket {
    Enabled,
    Segmented,
    Disabled,
}

impl FlagBucket {
    /// Bucket for a 1-based flag index.
    pub fn for_index(index: usize) -> Self {
        if index <= *ENABLED_FLAGS.end() {
            FlagBucket::Enabled
        } else if index <= *SEGMENTED_FLAGS.end() {
            FlagBucket::Segmented
        } else {
            FlagBucket::Disabled
        }
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        match self {
            FlagBucket::Enabled => ENABLED_FLAGS,
            FlagBucket::Segmented => SEGMENTED_FLAGS,
            FlagBucket::Disabled => DISABLED_FLAGS,
        }
    }
}

pub fn flag_name(index: usize) -> String {
    format!("test-flag-{:04}", index)
}

pub struct FlagGenerator<R: Rng> {
    rng: R,
}

impl FlagGenerator<StdRng> {
    /// A generator whose output is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "seeding flag generator");
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> FlagGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn flag(&mut self, index: usize) -> FlagDefinition {
        match FlagBucket::for_index(index) {
            FlagBucket::Enabled => FlagDefinition::enabled(),
            FlagBucket::Segmented => {
                let percentage = random_percentage(&mut self.rng);
                let context = random_context(&mut self.rng);
                FlagDefinition::segmented(Targeting::rollout(percentage, &context))
            }
            FlagBucket::Disabled => FlagDefinition::disabled(),
        }
    }

    pub fn generate(&mut self) -> FlagsDocument {
        info!("Generating flagd configuration with {FLAG_COUNT} test flags...");

        let mut flags = BTreeMap::new();
        for index in 1..=FLAG_COUNT {
            if index % PROGRESS_INTERVAL == 0 {
                info!("Progress: {index}/{FLAG_COUNT} flags generated...");
            }
            flags.insert(flag_name(index), self.flag(index));
        }

        FlagsDocument::new(flags)
    }
}
