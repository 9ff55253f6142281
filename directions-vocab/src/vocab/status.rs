//! Response status codes.

use std::fmt;

use serde::Deserialize;
use tracing::debug;

use crate::error::DirectionsError;

/// Broad classification of an [`ErrorStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The response contains a valid result.
    Success,
    /// The server reported a failure for this request.
    Server,
    /// The client could not build the request or read the response.
    /// These never come from the server and won't go away on retry.
    Client,
}

/// Status of a directions request.
///
/// The first eight members mirror the `status` field of an API response.
/// `BadApiUrl`, `BadJsonFormatting` and `MissingStatusCode` are raised on the
/// client side and have no wire code.
///
/// Decoding is fail-open: a status string the API adds in the future decodes
/// to `UnknownError` instead of failing the whole response.
///
/// # Examples
///
/// ```
/// use directions_vocab::ErrorStatus;
///
/// let status = ErrorStatus::from_status("ZERO_RESULTS");
/// assert_eq!(status, ErrorStatus::ZeroResults);
/// assert!(status.failed());
///
/// assert!(!ErrorStatus::from_status("OK").failed());
/// assert_eq!(ErrorStatus::from_status("SOMETHING_NEW"), ErrorStatus::UnknownError);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
#[repr(u8)]
pub enum ErrorStatus {
    /// The response contains a valid result
    Ok = 0,
    /// A location in the origin, destination or waypoints could not be geocoded
    NotFound,
    /// No route between the origin and destination
    ZeroResults,
    /// Too many waypoints in the request
    MaxWaypointsExceeded,
    /// The request was invalid (bad parameter or parameter value)
    InvalidRequest,
    /// Too many requests from this application within the allowed period
    OverQueryLimit,
    /// The service refused this application
    RequestDenied,
    /// Server error; the request may succeed if tried again
    UnknownError,
    /// No valid request URL could be built
    BadApiUrl,
    /// The response body was not valid JSON
    BadJsonFormatting,
    /// The response had no status field
    MissingStatusCode,
}

impl ErrorStatus {
    /// All statuses, in code order.
    pub const ALL: [ErrorStatus; 11] = [
        ErrorStatus::Ok,
        ErrorStatus::NotFound,
        ErrorStatus::ZeroResults,
        ErrorStatus::MaxWaypointsExceeded,
        ErrorStatus::InvalidRequest,
        ErrorStatus::OverQueryLimit,
        ErrorStatus::RequestDenied,
        ErrorStatus::UnknownError,
        ErrorStatus::BadApiUrl,
        ErrorStatus::BadJsonFormatting,
        ErrorStatus::MissingStatusCode,
    ];

    /// Decode the `status` field of an API response.
    ///
    /// Matching is exact and case-sensitive. Anything unrecognised yields
    /// `UnknownError`.
    pub fn from_status(status: &str) -> Self {
        match status {
            "OK" => ErrorStatus::Ok,
            "NOT_FOUND" => ErrorStatus::NotFound,
            "ZERO_RESULTS" => ErrorStatus::ZeroResults,
            "MAX_WAYPOINTS_EXCEEDED" => ErrorStatus::MaxWaypointsExceeded,
            "INVALID_REQUEST" => ErrorStatus::InvalidRequest,
            "OVER_QUERY_LIMIT" => ErrorStatus::OverQueryLimit,
            "REQUEST_DENIED" => ErrorStatus::RequestDenied,
            "UNKNOWN_ERROR" => ErrorStatus::UnknownError,
            _ => {
                debug!(status, "unrecognised response status, treating as UNKNOWN_ERROR");
                ErrorStatus::UnknownError
            }
        }
    }

    /// Decode a status field that may be absent from the payload.
    pub fn from_response_status(status: Option<&str>) -> Self {
        match status {
            Some(s) => Self::from_status(s),
            None => ErrorStatus::MissingStatusCode,
        }
    }

    /// Returns the wire code, or `None` for client-only statuses.
    pub fn as_wire(&self) -> Option<&'static str> {
        match self {
            ErrorStatus::Ok => Some("OK"),
            ErrorStatus::NotFound => Some("NOT_FOUND"),
            ErrorStatus::ZeroResults => Some("ZERO_RESULTS"),
            ErrorStatus::MaxWaypointsExceeded => Some("MAX_WAYPOINTS_EXCEEDED"),
            ErrorStatus::InvalidRequest => Some("INVALID_REQUEST"),
            ErrorStatus::OverQueryLimit => Some("OVER_QUERY_LIMIT"),
            ErrorStatus::RequestDenied => Some("REQUEST_DENIED"),
            ErrorStatus::UnknownError => Some("UNKNOWN_ERROR"),
            ErrorStatus::BadApiUrl
            | ErrorStatus::BadJsonFormatting
            | ErrorStatus::MissingStatusCode => None,
        }
    }

    /// Numeric code of this status.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Human-readable description, suitable for users and logs.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorStatus::Ok => "OK",
            ErrorStatus::NotFound => {
                "At least one of the locations specified in the request's origin, destination, or waypoints could not be geocoded"
            }
            ErrorStatus::ZeroResults => {
                "No route could be found between the origin and destination"
            }
            ErrorStatus::MaxWaypointsExceeded => "Too many waypoints were provided in the request",
            ErrorStatus::InvalidRequest => "The provided request was invalid",
            ErrorStatus::OverQueryLimit => {
                "The service has received too many requests from this application within the allowed time period"
            }
            ErrorStatus::RequestDenied => {
                "The service denied use of the directions service by this application"
            }
            ErrorStatus::UnknownError => {
                "The directions request could not be processed due to a server error"
            }
            ErrorStatus::BadApiUrl => "Unable to build a suitable URL for API request",
            ErrorStatus::BadJsonFormatting => "Unable to parse JSON data returned from the API",
            ErrorStatus::MissingStatusCode => {
                "Response status code unexpectedly missing from the response payload"
            }
        }
    }

    /// Returns `true` for every status except `Ok`.
    pub fn failed(&self) -> bool {
        *self != ErrorStatus::Ok
    }

    /// Classify this status.
    pub fn kind(&self) -> FailureKind {
        match self {
            ErrorStatus::Ok => FailureKind::Success,
            ErrorStatus::BadApiUrl
            | ErrorStatus::BadJsonFormatting
            | ErrorStatus::MissingStatusCode => FailureKind::Client,
            _ => FailureKind::Server,
        }
    }

    /// Whether repeating the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorStatus::OverQueryLimit | ErrorStatus::UnknownError
        )
    }

    /// Convert into a `Result`, so a failed status can be propagated with `?`.
    pub fn into_result(self) -> Result<(), DirectionsError> {
        if self.failed() {
            Err(DirectionsError::new(self))
        } else {
            Ok(())
        }
    }
}

impl From<&str> for ErrorStatus {
    fn from(status: &str) -> Self {
        ErrorStatus::from_status(status)
    }
}

impl From<String> for ErrorStatus {
    fn from(status: String) -> Self {
        ErrorStatus::from_status(&status)
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_status() -> impl Strategy<Value = ErrorStatus> {
        prop::sample::select(ErrorStatus::ALL.to_vec())
    }

    proptest! {
        /// Roundtrip: every wire code decodes back to its status
        #[test]
        fn wire_roundtrip(status in any_status()) {
            if let Some(code) = status.as_wire() {
                prop_assert_eq!(ErrorStatus::from_status(code), status);
            }
        }

        /// Strings outside the known set always decode to UnknownError
        #[test]
        fn unknown_strings_fall_back(s in ".*") {
            let known = ErrorStatus::ALL.iter().any(|st| st.as_wire() == Some(s.as_str()));
            prop_assume!(!known);
            prop_assert_eq!(ErrorStatus::from_status(&s), ErrorStatus::UnknownError);
        }

        /// Lowercase never matches
        #[test]
        fn lowercase_falls_back(s in "[a-z_]{1,24}") {
            prop_assert_eq!(ErrorStatus::from_status(&s), ErrorStatus::UnknownError);
        }

        /// A retryable status is always a server failure
        #[test]
        fn retryable_is_server_failure(status in any_status()) {
            if status.is_retryable() {
                prop_assert_eq!(status.kind(), FailureKind::Server);
            }
        }

        /// into_result agrees with failed
        #[test]
        fn into_result_matches_failed(status in any_status()) {
            prop_assert_eq!(status.into_result().is_err(), status.failed());
        }
    }
}
