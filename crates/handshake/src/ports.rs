//! Port traits implemented by infrastructure.
//!
//! The flow driver only sees these traits. The `transport` crate implements
//! them over HTTP; tests implement them in memory.

use async_trait::async_trait;

use crate::{
    AccessToken, RegistrationError, RegistrationRequest, RegistrationResponse, SubmissionError,
    SubmissionReceipt, WebhookUrl,
};

/// Obtains a webhook URL and access token for a candidate identity.
#[async_trait]
pub trait WebhookRequestor: Send + Sync {
    /// Performs the registration call once.
    ///
    /// Implementations must not retry and must convert every transport,
    /// status, and decoding problem into a [`RegistrationError`].
    async fn request_webhook(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, RegistrationError>;
}

/// Delivers a query to a webhook.
#[async_trait]
pub trait QuerySubmitter: Send + Sync {
    /// Posts `query` to `webhook_url` with `access_token` as the
    /// `Authorization` header value, unchanged.
    ///
    /// Any HTTP status is a successful submission; only a failure to obtain
    /// a response is a [`SubmissionError`].
    async fn submit_query(
        &self,
        webhook_url: &WebhookUrl,
        access_token: &AccessToken,
        query: &str,
    ) -> Result<SubmissionReceipt, SubmissionError>;
}
