//! Transit vehicle types.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

/// Type of vehicle running on a transit line.
///
/// Appears in the line details of transit steps. Decoding is fail-open:
/// anything the API reports that isn't listed here becomes `Other`.
///
/// # Examples
///
/// ```
/// use directions_vocab::VehicleType;
///
/// assert_eq!(VehicleType::from_value("GONDOLA_LIFT"), VehicleType::GondolaLift);
/// assert_eq!(VehicleType::from_value("SPACESHIP"), VehicleType::Other);
/// assert_eq!(VehicleType::Bus.description(), "BUS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum VehicleType {
    Rail,
    /// Light rail
    MetroRail,
    /// Underground light rail
    Subway,
    /// Above ground light rail
    Tram,
    Monorail,
    HeavyRail,
    CommuterTrain,
    HighSpeedTrain,
    Bus,
    IntercityBus,
    Trolleybus,
    /// A bus that can drop off and pick up passengers anywhere on its route
    ShareTaxi,
    Ferry,
    /// Operates on a cable, usually on the ground. Aerial cable cars are
    /// `GondolaLift`.
    CableCar,
    /// An aerial cable car
    GondolaLift,
    /// Pulled up a steep incline by a cable, typically two counterweighted cars
    Funicular,
    /// Any vehicle not listed above
    Other,
}

impl VehicleType {
    /// All vehicle types, in declaration order.
    pub const ALL: [VehicleType; 17] = [
        VehicleType::Rail,
        VehicleType::MetroRail,
        VehicleType::Subway,
        VehicleType::Tram,
        VehicleType::Monorail,
        VehicleType::HeavyRail,
        VehicleType::CommuterTrain,
        VehicleType::HighSpeedTrain,
        VehicleType::Bus,
        VehicleType::IntercityBus,
        VehicleType::Trolleybus,
        VehicleType::ShareTaxi,
        VehicleType::Ferry,
        VehicleType::CableCar,
        VehicleType::GondolaLift,
        VehicleType::Funicular,
        VehicleType::Other,
    ];

    /// Decode a vehicle type token. Never fails.
    pub fn from_value(value: &str) -> Self {
        match value {
            "RAIL" => VehicleType::Rail,
            "METRO_RAIL" => VehicleType::MetroRail,
            "SUBWAY" => VehicleType::Subway,
            "TRAM" => VehicleType::Tram,
            "MONORAIL" => VehicleType::Monorail,
            "HEAVY_RAIL" => VehicleType::HeavyRail,
            "COMMUTER_TRAIN" => VehicleType::CommuterTrain,
            "HIGH_SPEED_TRAIN" => VehicleType::HighSpeedTrain,
            "BUS" => VehicleType::Bus,
            "INTERCITY_BUS" => VehicleType::IntercityBus,
            "TROLLEYBUS" => VehicleType::Trolleybus,
            "SHARE_TAXI" => VehicleType::ShareTaxi,
            "FERRY" => VehicleType::Ferry,
            "CABLE_CAR" => VehicleType::CableCar,
            "GONDOLA_LIFT" => VehicleType::GondolaLift,
            "FUNICULAR" => VehicleType::Funicular,
            "OTHER" => VehicleType::Other,
            _ => {
                debug!(value, "unrecognised vehicle type, treating as OTHER");
                VehicleType::Other
            }
        }
    }

    /// The wire token for this vehicle type.
    pub fn as_wire(&self) -> &'static str {
        match self {
            VehicleType::Rail => "RAIL",
            VehicleType::MetroRail => "METRO_RAIL",
            VehicleType::Subway => "SUBWAY",
            VehicleType::Tram => "TRAM",
            VehicleType::Monorail => "MONORAIL",
            VehicleType::HeavyRail => "HEAVY_RAIL",
            VehicleType::CommuterTrain => "COMMUTER_TRAIN",
            VehicleType::HighSpeedTrain => "HIGH_SPEED_TRAIN",
            VehicleType::Bus => "BUS",
            VehicleType::IntercityBus => "INTERCITY_BUS",
            VehicleType::Trolleybus => "TROLLEYBUS",
            VehicleType::ShareTaxi => "SHARE_TAXI",
            VehicleType::Ferry => "FERRY",
            VehicleType::CableCar => "CABLE_CAR",
            VehicleType::GondolaLift => "GONDOLA_LIFT",
            VehicleType::Funicular => "FUNICULAR",
            VehicleType::Other => "OTHER",
        }
    }

    /// Same as [`as_wire`](Self::as_wire).
    pub fn description(&self) -> &'static str {
        self.as_wire()
    }
}

impl From<&str> for VehicleType {
    fn from(value: &str) -> Self {
        VehicleType::from_value(value)
    }
}

impl From<String> for VehicleType {
    fn from(value: String) -> Self {
        VehicleType::from_value(&value)
    }
}

impl Serialize for VehicleType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Unrecognised tokens always become Other
        #[test]
        fn unknown_tokens_become_other(s in ".*") {
            prop_assume!(!VehicleType::ALL.iter().any(|v| v.as_wire() == s));
            prop_assert_eq!(VehicleType::from_value(&s), VehicleType::Other);
        }

        /// Decoding then encoding a known token is the identity
        #[test]
        fn encode_decode_identity(vehicle in prop::sample::select(VehicleType::ALL.to_vec())) {
            let token = vehicle.as_wire();
            prop_assert_eq!(VehicleType::from_value(token).as_wire(), token);
        }
    }
}
