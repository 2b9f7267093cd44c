//! Newtype identifiers and credentials.
//!
//! Every string that takes part in the handshake is wrapped in its own
//! newtype so that, for example, a [`WebhookUrl`] cannot be passed where an
//! [`AccessToken`] is expected. All string newtypes reject empty values: an
//! empty field on the wire is treated exactly like a missing one.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Returned when an empty string is deserialised into a non-empty newtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value must not be empty")]
pub struct EmptyValueError;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display, and a
// TryFrom<String> that deserialisation goes through.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new value, returning `None` if it is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = EmptyValueError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value).ok_or(EmptyValueError)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Candidate identity
// ---------------------------------------------------------------------------

string_id! {
    /// The candidate's display name, sent as `name` in the registration call.
    CandidateName
}

string_id! {
    /// The candidate's registration number, sent as `regNo`.
    RegistrationNumber
}

string_id! {
    /// The candidate's e-mail address, sent as `email`.
    ///
    /// Only non-emptiness is checked; the registration service owns any
    /// further validation.
    Email
}

// ---------------------------------------------------------------------------
// Registration output
// ---------------------------------------------------------------------------

string_id! {
    /// The webhook URL handed out by the registration service.
    ///
    /// Kept as the verbatim string received; it is only parsed by the HTTP
    /// client when the submission request is built.
    WebhookUrl
}

/// Number of leading characters of the authorization value shown in logs.
const PREVIEW_CHARS: usize = 10;

/// Opaque credential returned by the registration call.
///
/// Forwarded verbatim as the `Authorization` header of the submission call.
/// No scheme (such as `Bearer `) is ever prepended; a token that needs one
/// must already carry it.
///
/// `Debug` prints only the length so the token never ends up in logs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new token, returning `None` if the value is empty.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.is_empty() {
            None
        } else {
            Some(Self(v))
        }
    }

    /// Returns the token exactly as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the token in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; empty tokens cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the token already carries a `Bearer ` scheme.
    ///
    /// Informational only. The value is sent unchanged either way.
    pub fn has_bearer_scheme(&self) -> bool {
        self.0.starts_with("Bearer ")
    }

    /// A log-safe prefix of the token: the first ten characters followed by
    /// `...`, or just `...` when the token is too short to truncate.
    pub fn preview(&self) -> String {
        if self.0.chars().count() > PREVIEW_CHARS {
            let head: String = self.0.chars().take(PREVIEW_CHARS).collect();
            format!("{head}...")
        } else {
            "...".to_string()
        }
    }
}

impl TryFrom<String> for AccessToken {
    type Error = EmptyValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(EmptyValueError)
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("len", &self.0.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Run correlation
// ---------------------------------------------------------------------------

/// Identifies a single run of the handshake flow.
///
/// Generated fresh for every process invocation and recorded on the flow span
/// so both HTTP calls of one run can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    /// Generates a new random run identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
