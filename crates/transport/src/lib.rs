//! Webhook handshake HTTP adapter.
//!
//! Implements [`handshake::WebhookRequestor`] and [`handshake::QuerySubmitter`]
//! with `reqwest`.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Request building, status checks, and response decoding
//! live here. The [`handshake`] crate sees only its port traits.
//!
//! Both adapters send exactly one request per call. Nothing here retries, and
//! no timeout is set beyond the client's defaults.

use async_trait::async_trait;
use handshake::{
    AccessToken, QueryPayload, QuerySubmitter, RegistrationError, RegistrationRequest,
    RegistrationResponse, RegistrationResponseBody, SubmissionError, SubmissionReceipt,
    WebhookRequestor, WebhookUrl,
};
use reqwest::header::AUTHORIZATION;
use tracing::{debug, info, instrument};

pub use reqwest::Url;

/// `User-Agent` sent with every request.
const USER_AGENT: &str = concat!("webhook-handshake/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by both adapters.
///
/// Redirects are not followed: each call is exactly one POST, and a 3xx is
/// reported as the status it is.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::none())
        .build()
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Posts the candidate identity to a fixed registration endpoint.
#[derive(Debug, Clone)]
pub struct HttpWebhookRequestor {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpWebhookRequestor {
    /// Creates a requestor that registers against `endpoint`.
    pub fn new(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// The registration endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl WebhookRequestor for HttpWebhookRequestor {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn request_webhook(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, RegistrationError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| RegistrationError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "Registration response received");

        if !status.is_success() {
            // Diagnostic only; an unreadable body is reported as empty.
            let body = response.text().await.unwrap_or_default();
            return Err(RegistrationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: RegistrationResponseBody =
            response
                .json()
                .await
                .map_err(|e| RegistrationError::Decode {
                    message: e.to_string(),
                })?;

        RegistrationResponse::try_from(body)
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Posts a query to whatever webhook it is given.
#[derive(Debug, Clone)]
pub struct HttpQuerySubmitter {
    client: reqwest::Client,
}

impl HttpQuerySubmitter {
    /// Creates a submitter using `client`.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuerySubmitter for HttpQuerySubmitter {
    #[instrument(skip_all, fields(webhook = %webhook_url))]
    async fn submit_query(
        &self,
        webhook_url: &WebhookUrl,
        access_token: &AccessToken,
        query: &str,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        // Sent as received, whether or not it already carries a scheme.
        info!(
            authorization = %access_token.preview(),
            has_bearer_scheme = access_token.has_bearer_scheme(),
            "Using Authorization header"
        );

        let response = self
            .client
            .post(webhook_url.as_str())
            .header(AUTHORIZATION, access_token.as_str())
            .json(&QueryPayload::new(query))
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    SubmissionError::InvalidRequest {
                        message: e.to_string(),
                    }
                } else {
                    SubmissionError::Transport {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status().as_u16();
        debug!(status, "Webhook response received");

        let body = response
            .text()
            .await
            .map_err(|e| SubmissionError::Body {
                status,
                message: e.to_string(),
            })?;

        Ok(SubmissionReceipt::new(status, body))
    }
}
