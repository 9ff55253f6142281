//! Enumerated values exchanged with the directions API.
//!
//! Two decode policies coexist here:
//! - `TravelMode` is fail-closed: an unknown label is reported to the caller.
//! - `ErrorStatus` and `VehicleType` are fail-open: unknown tokens degrade to
//!   `UnknownError` and `Other` respectively.
//!
//! Request-only values (`AvoidFeature`, `UnitSystem`, `TransitMode`,
//! `TransitRoutingPreference`) only encode.

mod avoid;
mod mode;
mod status;
mod transit;
mod units;
mod vehicle;

pub use avoid::AvoidFeature;
pub use mode::{TravelMode, UnknownTravelMode};
pub use status::{ErrorStatus, FailureKind};
pub use transit::{TransitMode, TransitRoutingPreference};
pub use units::UnitSystem;
pub use vehicle::VehicleType;

/// Render a multi-valued query option as a pipe-separated token list.
///
/// Repeated values are dropped, keeping the first occurrence.
///
/// # Examples
///
/// ```
/// use directions_vocab::{AvoidFeature, join_tokens};
///
/// let avoid = [AvoidFeature::Tolls, AvoidFeature::Highways, AvoidFeature::Tolls];
/// assert_eq!(join_tokens(&avoid), "tolls|highways");
/// ```
pub fn join_tokens<T>(values: &[T]) -> String
where
    T: Copy + PartialEq + std::fmt::Display,
{
    let mut seen: Vec<T> = Vec::with_capacity(values.len());
    for &value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }

    seen.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_empty() {
        let none: [TransitMode; 0] = [];
        assert_eq!(join_tokens(&none), "");
    }

    #[test]
    fn join_single() {
        assert_eq!(join_tokens(&[UnitSystem::Metric]), "metric");
    }

    #[test]
    fn join_preserves_order() {
        let modes = [
            TransitMode::Bus,
            TransitMode::Train,
            TransitMode::Tram,
            TransitMode::Subway,
        ];
        assert_eq!(join_tokens(&modes), "bus|train|tram|subway");
    }

    #[test]
    fn join_drops_duplicates() {
        let prefs = [
            TransitRoutingPreference::FewerTransfers,
            TransitRoutingPreference::LessWalking,
            TransitRoutingPreference::FewerTransfers,
        ];
        assert_eq!(join_tokens(&prefs), "fewer_transfers|less_walking");
    }
}
