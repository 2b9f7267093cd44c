//! Error types for the two handshake calls.
//!
//! [`RegistrationError`] collapses every way the registration call can fail
//! into one outcome; any variant stops the flow before submission.
//! [`SubmissionError`] covers requests that never got a usable response: a
//! submission whose response is read in full, whatever its status, is not an
//! error.

use thiserror::Error;

/// A field of the registration response that the flow cannot proceed without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseField {
    /// The `webhook` URL.
    Webhook,
    /// The `accessToken`.
    AccessToken,
}

impl std::fmt::Display for ResponseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Webhook => f.write_str("webhook"),
            Self::AccessToken => f.write_str("accessToken"),
        }
    }
}

/// Failure of the registration call.
///
/// None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The request could not be sent or no response was received
    /// (connection refused, DNS failure, timeout, invalid URL).
    #[error("Registration request failed: {message}")]
    Transport {
        /// Description of the underlying transport error.
        message: String,
    },

    /// The registration service answered with a non-2xx status.
    #[error("Registration failed with status {status}")]
    Status {
        /// HTTP status code received.
        status: u16,
        /// Response body, kept for diagnostics.
        body: String,
    },

    /// A 2xx response whose body could not be decoded as JSON.
    #[error("Registration response could not be decoded: {message}")]
    Decode {
        /// Description of the decoding error.
        message: String,
    },

    /// A 2xx response that lacks a required field, or carries it as null or
    /// an empty string.
    #[error("Registration response is missing '{field}'")]
    MissingField {
        /// The absent field.
        field: ResponseField,
    },
}

/// Failure of the submission call to reach the webhook at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The request could not be built (e.g. the webhook URL does not parse,
    /// or the token is not a valid header value).
    #[error("Submission request could not be built: {message}")]
    InvalidRequest {
        /// Description of the builder error.
        message: String,
    },

    /// The request could not be sent or no response was received.
    #[error("Submission request failed: {message}")]
    Transport {
        /// Description of the underlying transport error.
        message: String,
    },

    /// The webhook answered, but its response body could not be read.
    #[error("Submission response with status {status} could not be read: {message}")]
    Body {
        /// HTTP status code the webhook returned.
        status: u16,
        /// Description of the read error.
        message: String,
    },
}
