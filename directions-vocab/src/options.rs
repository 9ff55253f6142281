//! Request options for a directions query.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::vocab::{
    AvoidFeature, TransitMode, TransitRoutingPreference, TravelMode, UnitSystem, join_tokens,
};

/// Travel options rendered into request query parameters.
///
/// Missing fields take their defaults when loaded from JSON, so a config
/// file only needs to name what it changes.
///
/// # Examples
///
/// ```
/// use directions_vocab::{AvoidFeature, TravelOptions};
///
/// let options = TravelOptions::default().with_avoid(vec![AvoidFeature::Tolls]);
/// assert_eq!(
///     options.query_params(),
///     vec![("mode", "driving".to_string()), ("avoid", "tolls".to_string())]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelOptions {
    /// Mode of transport.
    pub mode: TravelMode,

    /// Features the route should avoid.
    pub avoid: Vec<AvoidFeature>,

    /// Unit system for text fields. `None` lets the API pick from the origin.
    pub units: Option<UnitSystem>,

    /// Preferred transit modes. Only sent for transit directions.
    pub transit_modes: Vec<TransitMode>,

    /// Transit routing bias. Only sent for transit directions.
    pub transit_routing_preference: Option<TransitRoutingPreference>,
}

impl TravelOptions {
    /// Create options for the given mode with nothing else set.
    pub fn new(mode: TravelMode) -> Self {
        Self {
            mode,
            avoid: Vec::new(),
            units: None,
            transit_modes: Vec::new(),
            transit_routing_preference: None,
        }
    }

    /// Load options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the features to avoid.
    pub fn with_avoid(mut self, avoid: Vec<AvoidFeature>) -> Self {
        self.avoid = avoid;
        self
    }

    /// Set the unit system.
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = Some(units);
        self
    }

    /// Set the preferred transit modes.
    pub fn with_transit_modes(mut self, modes: Vec<TransitMode>) -> Self {
        self.transit_modes = modes;
        self
    }

    /// Set the transit routing preference.
    pub fn with_transit_routing_preference(mut self, pref: TransitRoutingPreference) -> Self {
        self.transit_routing_preference = Some(pref);
        self
    }

    /// Render as `(name, value)` query parameter pairs.
    ///
    /// `mode` is always present. Empty lists and unset options are left out,
    /// and the transit-only options are left out unless the mode is transit.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("mode", self.mode.description().to_string())];

        if !self.avoid.is_empty() {
            params.push(("avoid", join_tokens(&self.avoid)));
        }

        if let Some(units) = self.units {
            params.push(("units", units.description().to_string()));
        }

        if self.mode != TravelMode::Transit {
            if !self.transit_modes.is_empty() || self.transit_routing_preference.is_some() {
                debug!(
                    mode = %self.mode,
                    "ignoring transit options for non-transit directions"
                );
            }
            return params;
        }

        if !self.transit_modes.is_empty() {
            params.push(("transit_mode", join_tokens(&self.transit_modes)));
        }

        if let Some(pref) = self.transit_routing_preference {
            params.push(("transit_routing_preference", pref.description().to_string()));
        }

        params
    }
}

impl Default for TravelOptions {
    fn default() -> Self {
        Self::new(TravelMode::Driving)
    }
}
