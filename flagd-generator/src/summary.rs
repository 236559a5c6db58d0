use std::path::Path;

use crate::context::{ContextAttribute, CONTEXT_CATALOG};
use crate::generator::FlagBucket;

fn bucket_description(bucket: FlagBucket) -> &'static str {
    match bucket {
        FlagBucket::Enabled => "Fully enabled",
        FlagBucket::Segmented => "Segmented with random rollout percentages",
        FlagBucket::Disabled => "Disabled",
    }
}

fn segment_note(attribute: ContextAttribute) -> Option<&'static str> {
    match attribute {
        ContextAttribute::Tld => Some("European users"),
        _ => None,
    }
}

/// Human readable description of what was written to `path`.
pub fn render_summary(path: &Path) -> String {
    let mut lines = vec![
        String::new(),
        format!("Flagd configuration generated: {}", path.display()),
        String::new(),
        "Configuration summary:".to_string(),
    ];

    for bucket in [FlagBucket::Enabled, FlagBucket::Segmented, FlagBucket::Disabled] {
        let range = bucket.range();
        lines.push(format!(
            "- Flags {:04}-{:04} ({} flags): {}",
            range.start(),
            range.end(),
            range.clone().count(),
            bucket_description(bucket)
        ));
    }

    lines.push(String::new());
    lines.push("Supported contexts (segments):".to_string());
    for attribute in CONTEXT_CATALOG {
        let values = attribute.values().join(", ");
        lines.push(match segment_note(attribute) {
            Some(note) => format!("- {}: {} ({})", attribute.key(), values, note),
            None => format!("- {}: {}", attribute.key(), values),
        });
    }

    let mut summary = lines.join("\n");
    summary.push('\n');
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_matches_layout() {
        let summary = render_summary(Path::new("flags.json"));
        let expected = "
Flagd configuration generated: flags.json

Configuration summary:
- Flags 0001-0300 (300 flags): Fully enabled
- Flags 0301-0700 (400 flags): Segmented with random rollout percentages
- Flags 0701-1000 (300 flags): Disabled

Supported contexts (segments):
- tld: fr, de, it (European users)
- accountType: pro, patient
- platform: mobile, desktop, web
";
        assert_eq!(summary, expected);
    }
}
