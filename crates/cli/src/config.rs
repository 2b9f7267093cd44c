//! Process configuration, read from environment variables.
//!
//! | Variable | Required | Meaning |
//! |----------|----------|---------|
//! | `HANDSHAKE_REGISTRATION_URL` | yes | Registration endpoint |
//! | `HANDSHAKE_CANDIDATE_NAME` | yes | Candidate name |
//! | `HANDSHAKE_CANDIDATE_REG_NO` | yes | Candidate registration number |
//! | `HANDSHAKE_CANDIDATE_EMAIL` | yes | Candidate e-mail |
//! | `HANDSHAKE_LOG_FORMAT` | no | `json` (default) or `pretty` |
//! | `OTEL_EXPORTER_OTLP_ENDPOINT` | no | Enables OTLP span export |

use handshake::{CandidateName, Email, RegistrationNumber, RegistrationRequest};
use thiserror::Error;
use transport::Url;

const REGISTRATION_URL: &str = "HANDSHAKE_REGISTRATION_URL";
const CANDIDATE_NAME: &str = "HANDSHAKE_CANDIDATE_NAME";
const CANDIDATE_REG_NO: &str = "HANDSHAKE_CANDIDATE_REG_NO";
const CANDIDATE_EMAIL: &str = "HANDSHAKE_CANDIDATE_EMAIL";
const LOG_FORMAT: &str = "HANDSHAKE_LOG_FORMAT";
const OTLP_ENDPOINT: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

/// Configuration problems detected before the flow starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("{var} must be set")]
    Missing {
        /// The variable name.
        var: &'static str,
    },

    /// A variable is set but its value is unusable.
    #[error("{var} is invalid: {reason}")]
    Invalid {
        /// The variable name.
        var: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Output format of the stdout log layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(format!("unknown log format '{other}', expected 'json' or 'pretty'")),
        }
    }
}

/// Logging and tracing settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObservabilityConfig {
    /// Format of stdout logs.
    pub log_format: LogFormat,
    /// OTLP collector endpoint; span export is disabled when `None`.
    pub otlp_endpoint: Option<String>,
}

/// Everything the composition root needs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the registration call is sent.
    pub registration_url: Url,
    /// Identity posted in the registration call.
    pub identity: RegistrationRequest,
    /// Logging and tracing settings.
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing { var })
        };

        let registration_url = Url::parse(required(REGISTRATION_URL)?.trim()).map_err(|e| {
            ConfigError::Invalid {
                var: REGISTRATION_URL,
                reason: e.to_string(),
            }
        })?;

        // Emptiness is already rejected by `required`, so these cannot fail.
        let name = CandidateName::new(required(CANDIDATE_NAME)?)
            .ok_or(ConfigError::Missing { var: CANDIDATE_NAME })?;
        let registration_number = RegistrationNumber::new(required(CANDIDATE_REG_NO)?)
            .ok_or(ConfigError::Missing {
                var: CANDIDATE_REG_NO,
            })?;
        let email = Email::new(required(CANDIDATE_EMAIL)?)
            .ok_or(ConfigError::Missing {
                var: CANDIDATE_EMAIL,
            })?;

        let log_format = match lookup(LOG_FORMAT).filter(|v| !v.trim().is_empty()) {
            Some(value) => value.parse::<LogFormat>().map_err(|reason| ConfigError::Invalid {
                var: LOG_FORMAT,
                reason,
            })?,
            None => LogFormat::default(),
        };
        let otlp_endpoint = lookup(OTLP_ENDPOINT).filter(|v| !v.trim().is_empty());

        Ok(Self {
            registration_url,
            identity: RegistrationRequest::new(name, registration_number, email),
            observability: ObservabilityConfig {
                log_format,
                otlp_endpoint,
            },
        })
    }
}
