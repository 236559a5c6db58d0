use rand::seq::SliceRandom;
use rand::Rng;

/// Evaluation context attributes a segmented flag can be gated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextAttribute {
    Tld,
    AccountType,
    Platform,
}

pub const CONTEXT_CATALOG: [ContextAttribute; 3] = [
    ContextAttribute::Tld,
    ContextAttribute::AccountType,
    ContextAttribute::Platform,
];

pub const ROLLOUT_PERCENTAGES: [u8; 5] = [10, 25, 50, 75, 90];

impl ContextAttribute {
    /// The context key as it appears in a `var` lookup.
    pub fn key(&self) -> &'static str {
        match self {
            ContextAttribute::Tld => "tld",
            ContextAttribute::AccountType => "accountType",
            ContextAttribute::Platform => "platform",
        }
    }

    pub fn values(&self) -> &'static [&'static str] {
        match self {
            ContextAttribute::Tld => &["fr", "de", "it"],
            ContextAttribute::AccountType => &["pro", "patient"],
            ContextAttribute::Platform => &["mobile", "desktop", "web"],
        }
    }
}

/// A selection of context attributes, each pinned to one of its values.
/// Keeps the order in which attributes were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextSample {
    entries: Vec<(ContextAttribute, &'static str)>,
}

impl ContextSample {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins `attribute` to `value`, replacing an earlier value for the same attribute.
    pub fn with(mut self, attribute: ContextAttribute, value: &'static str) -> Self {
        match self.entries.iter_mut().find(|(attr, _)| *attr == attribute) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((attribute, value)),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContextAttribute, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

pub fn random_percentage<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    ROLLOUT_PERCENTAGES[rng.gen_range(0..ROLLOUT_PERCENTAGES.len())]
}

/// Picks 1 to 3 distinct attributes in random order and a random value for each.
pub fn random_context<R: Rng + ?Sized>(rng: &mut R) -> ContextSample {
    let amount = rng.gen_range(1..=CONTEXT_CATALOG.len());
    let selected: Vec<ContextAttribute> = CONTEXT_CATALOG
        .choose_multiple(rng, amount)
        .copied()
        .collect();

    selected
        .into_iter()
        .fold(ContextSample::new(), |sample, attribute| {
            let values = attribute.values();
            let value = values[rng.gen_range(0..values.len())];
            sample.with(attribute, value)
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_random_percentage_is_from_fixed_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(ROLLOUT_PERCENTAGES.contains(&random_percentage(&mut rng)));
        }
    }

    #[test]
    fn test_random_percentage_covers_every_option() {
        let mut rng = StdRng::seed_from_u64(11);
        let seen: HashSet<u8> = (0..1000).map(|_| random_percentage(&mut rng)).collect();
        assert_eq!(seen.len(), ROLLOUT_PERCENTAGES.len());
    }

    #[test]
    fn test_random_context_is_non_empty_and_distinct() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let sample = random_context(&mut rng);
            let size = sample.iter().count();
            assert!((1..=3).contains(&size));

            let keys: HashSet<&str> = sample.iter().map(|(attr, _)| attr.key()).collect();
            assert_eq!(keys.len(), size);

            for (attribute, value) in sample.iter() {
                assert!(attribute.values().contains(&value));
            }
        }
    }

    #[test]
    fn test_random_context_reaches_every_size() {
        let mut rng = StdRng::seed_from_u64(3);
        let sizes: HashSet<usize> = (0..300)
            .map(|_| random_context(&mut rng).iter().count())
            .collect();
        assert_eq!(sizes, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_sample_with_replaces_existing_attribute() {
        let sample = ContextSample::new()
            .with(ContextAttribute::Platform, "web")
            .with(ContextAttribute::Tld, "fr")
            .with(ContextAttribute::Platform, "mobile");

        let entries: Vec<_> = sample.iter().collect();
        assert_eq!(
            entries,
            vec![
                (ContextAttribute::Platform, "mobile"),
                (ContextAttribute::Tld, "fr"),
            ]
        );
    }

}
