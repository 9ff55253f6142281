//! Route features to avoid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A feature the calculated route should avoid.
///
/// Sent as the `avoid` query parameter; several features are joined with
/// `|` (see [`join_tokens`](crate::join_tokens)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvoidFeature {
    /// Toll roads and bridges
    Tolls,
    Highways,
    Ferries,
}

impl AvoidFeature {
    /// All features, in declaration order.
    pub const ALL: [AvoidFeature; 3] = [
        AvoidFeature::Tolls,
        AvoidFeature::Highways,
        AvoidFeature::Ferries,
    ];

    /// The query token sent in requests.
    pub fn description(&self) -> &'static str {
        match self {
            AvoidFeature::Tolls => "tolls",
            AvoidFeature::Highways => "highways",
            AvoidFeature::Ferries => "ferries",
        }
    }
}

impl fmt::Display for AvoidFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_tokens() {
        assert_eq!(AvoidFeature::Tolls.description(), "tolls");
        assert_eq!(AvoidFeature::Highways.description(), "highways");
        assert_eq!(AvoidFeature::Ferries.description(), "ferries");
    }

    #[test]
    fn display() {
        assert_eq!(AvoidFeature::Ferries.to_string(), "ferries");
    }

    #[test]
    fn serde_matches_description() {
        for feature in AvoidFeature::ALL {
            let json = serde_json::to_string(&feature).unwrap();
            assert_eq!(json, format!("\"{}\"", feature.description()));

            let back: AvoidFeature = serde_json::from_str(&json).unwrap();
            assert_eq!(back, feature);
        }
    }

    #[test]
    fn serde_rejects_unknown() {
        assert!(serde_json::from_str::<AvoidFeature>(r#""indoor""#).is_err());
        assert!(serde_json::from_str::<AvoidFeature>(r#""TOLLS""#).is_err());
    }
}
