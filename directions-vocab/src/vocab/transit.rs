//! Transit request preferences.
//!
//! Both types only apply to transit directions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A preferred mode of transit, sent as `transit_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitMode {
    Bus,
    Subway,
    Train,
    /// Tram and light rail
    Tram,
    /// Train, tram, light rail and subway together
    Rail,
}

impl TransitMode {
    /// All transit modes, in declaration order.
    pub const ALL: [TransitMode; 5] = [
        TransitMode::Bus,
        TransitMode::Subway,
        TransitMode::Train,
        TransitMode::Tram,
        TransitMode::Rail,
    ];

    /// The query token sent in requests.
    pub fn description(&self) -> &'static str {
        match self {
            TransitMode::Bus => "bus",
            TransitMode::Subway => "subway",
            TransitMode::Train => "train",
            TransitMode::Tram => "tram",
            TransitMode::Rail => "rail",
        }
    }
}

impl fmt::Display for TransitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Bias for transit routes, sent as `transit_routing_preference`.
///
/// Without one, the API picks what it considers the best route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitRoutingPreference {
    /// Prefer limited amounts of walking
    LessWalking,
    /// Prefer a limited number of transfers
    FewerTransfers,
}

impl TransitRoutingPreference {
    /// All preferences, in declaration order.
    pub const ALL: [TransitRoutingPreference; 2] = [
        TransitRoutingPreference::LessWalking,
        TransitRoutingPreference::FewerTransfers,
    ];

    /// The query token sent in requests.
    pub fn description(&self) -> &'static str {
        match self {
            TransitRoutingPreference::LessWalking => "less_walking",
            TransitRoutingPreference::FewerTransfers => "fewer_transfers",
        }
    }
}

impl fmt::Display for TransitRoutingPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
