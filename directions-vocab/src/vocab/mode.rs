//! Travel mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unrecognised travel mode label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown travel mode label: {label}")]
pub struct UnknownTravelMode {
    label: String,
}

impl UnknownTravelMode {
    /// The label that was rejected.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Mode of transport used when calculating directions.
///
/// Responses echo the resolved mode as an uppercase label (`"DRIVING"`);
/// requests send the lowercase query token (`"driving"`). Decoding the label
/// is fail-closed: an unrecognised label means the API contract changed or
/// the input is malformed, so the caller has to deal with it.
///
/// # Examples
///
/// ```
/// use directions_vocab::TravelMode;
///
/// assert_eq!(TravelMode::from_label("DRIVING"), Some(TravelMode::Driving));
/// assert_eq!(TravelMode::from_label("FLYING"), None);
///
/// assert_eq!(TravelMode::Transit.description(), "transit");
/// assert_eq!(TravelMode::Transit.label(), "TRANSIT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// By car
    Driving,
    /// On foot
    Walking,
    /// By bicycle
    Bicycling,
    /// By public transport
    Transit,
}

impl TravelMode {
    /// All modes, in declaration order.
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Driving,
        TravelMode::Walking,
        TravelMode::Bicycling,
        TravelMode::Transit,
    ];

    /// Decode a mode label from a response.
    ///
    /// Returns `None` unless `label` exactly matches one of the four labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "DRIVING" => Some(TravelMode::Driving),
            "WALKING" => Some(TravelMode::Walking),
            "BICYCLING" => Some(TravelMode::Bicycling),
            "TRANSIT" => Some(TravelMode::Transit),
            _ => None,
        }
    }

    /// The uppercase label used in responses.
    pub fn label(&self) -> &'static str {
        match self {
            TravelMode::Driving => "DRIVING",
            TravelMode::Walking => "WALKING",
            TravelMode::Bicycling => "BICYCLING",
            TravelMode::Transit => "TRANSIT",
        }
    }

    /// The query token sent in requests.
    pub fn description(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}

impl FromStr for TravelMode {
    type Err = UnknownTravelMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TravelMode::from_label(s).ok_or_else(|| UnknownTravelMode {
            label: s.to_string(),
        })
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_labels() {
        assert_eq!(TravelMode::from_label("DRIVING"), Some(TravelMode::Driving));
        assert_eq!(TravelMode::from_label("WALKING"), Some(TravelMode::Walking));
        assert_eq!(
            TravelMode::from_label("BICYCLING"),
            Some(TravelMode::Bicycling)
        );
        assert_eq!(TravelMode::from_label("TRANSIT"), Some(TravelMode::Transit));
    }

    #[test]
    fn reject_unknown_labels() {
        assert_eq!(TravelMode::from_label("FLYING"), None);
        assert_eq!(TravelMode::from_label(""), None);
        assert_eq!(TravelMode::from_label("CYCLING"), None);
    }

    #[test]
    fn reject_query_tokens() {
        // Decoding is case-sensitive; the lowercase token is not a label
        assert_eq!(TravelMode::from_label("driving"), None);
        assert_eq!(TravelMode::from_label("Driving"), None);
        assert_eq!(TravelMode::from_label("DRIVING "), None);
    }

    #[test]
    fn query_tokens() {
        assert_eq!(TravelMode::Driving.description(), "driving");
        assert_eq!(TravelMode::Walking.description(), "walking");
        assert_eq!(TravelMode::Bicycling.description(), "bicycling");
        assert_eq!(TravelMode::Transit.description(), "transit");
    }

    #[test]
    fn label_roundtrip() {
        for mode in TravelMode::ALL {
            assert_eq!(TravelMode::from_label(mode.label()), Some(mode));
        }
    }

    #[test]
    fn parse() {
        assert_eq!("WALKING".parse::<TravelMode>(), Ok(TravelMode::Walking));

        let err = "FLYING".parse::<TravelMode>().unwrap_err();
        assert_eq!(err.label(), "FLYING");
        assert_eq!(err.to_string(), "unknown travel mode label: FLYING");
    }

    #[test]
    fn display() {
        assert_eq!(format!("mode={}", TravelMode::Bicycling), "mode=bicycling");
    }

    #[test]
    fn serde_uses_query_token() {
        assert_eq!(
            serde_json::to_string(&TravelMode::Transit).unwrap(),
            r#""transit""#
        );
        let mode: TravelMode = serde_json::from_str(r#""walking""#).unwrap();
        assert_eq!(mode, TravelMode::Walking);
        assert!(serde_json::from_str::<TravelMode>(r#""flying""#).is_err());
    }
}
