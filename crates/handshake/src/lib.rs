//! Core domain for the webhook handshake.
//!
//! The handshake is a two-step exchange with a remote registration service:
//!
//! 1. **Registration**: the candidate identity is posted to the registration
//!    endpoint, which answers with a webhook URL and an access token.
//! 2. **Submission**: the fixed [`FINAL_QUERY`] is posted to that webhook,
//!    authorized by the token exactly as it was received.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* the flow needs ([`WebhookRequestor`], [`QuerySubmitter`]);
//! the `transport` crate supplies the HTTP implementations.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Non-empty newtypes (`WebhookUrl`, `AccessToken`, etc.) and `RunId` |
//! | [`types`] | Wire and value types (`RegistrationRequest`, `QueryPayload`, etc.) |
//! | [`errors`] | Registration and submission error types |
//! | [`ports`] | Traits implemented by infrastructure |
//! | [`flow`] | The single-run flow driver |
//! | [`query`] | The static query payload |

pub mod errors;
pub mod flow;
pub mod identifiers;
pub mod ports;
pub mod query;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{RegistrationError, ResponseField, SubmissionError};
pub use flow::{Flow, FlowOutcome};
pub use identifiers::{
    AccessToken, CandidateName, Email, EmptyValueError, RegistrationNumber, RunId, WebhookUrl,
};
pub use ports::{QuerySubmitter, WebhookRequestor};
pub use query::FINAL_QUERY;
pub use types::{
    QueryPayload, RegistrationRequest, RegistrationResponse, RegistrationResponseBody,
    SubmissionReceipt,
};
