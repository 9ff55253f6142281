//! Wire vocabulary for the Google Directions API.
//!
//! Typed enumerations for the values a directions client exchanges with the
//! remote API: response statuses, travel modes, avoided features, unit
//! systems, transit preferences and transit vehicle types. Each type knows
//! its exact wire token, so request building and response parsing never
//! deal in raw string literals.

pub mod error;
pub mod options;
pub mod vocab;

pub use error::DirectionsError;
pub use options::TravelOptions;
pub use vocab::{
    AvoidFeature, ErrorStatus, FailureKind, TransitMode, TransitRoutingPreference, TravelMode,
    UnitSystem, UnknownTravelMode, VehicleType, join_tokens,
};
