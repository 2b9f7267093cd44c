//! The single-run handshake flow.
//!
//! [`Flow`] is consumed by [`Flow::run_once`], so a flow moves from
//! "not yet run" to "run" exactly once and cannot be re-entered.

use tracing::{error, info, info_span, warn, Instrument};

use crate::{
    QuerySubmitter, RegistrationError, RegistrationRequest, RunId, SubmissionError,
    SubmissionReceipt, WebhookRequestor, FINAL_QUERY,
};

/// How a run ended.
///
/// Informational only: every outcome has already been logged by the time it
/// is returned, and none of them is a process-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The query reached the webhook. The receipt may carry any status.
    Submitted(SubmissionReceipt),

    /// Registration failed; no submission was attempted.
    RegistrationFailed(RegistrationError),

    /// Registration succeeded but the webhook could not be reached.
    SubmissionFailed(SubmissionError),
}

impl FlowOutcome {
    /// Returns `true` if the query was delivered to the webhook.
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// Drives registration followed, if it succeeds, by submission.
pub struct Flow {
    identity: RegistrationRequest,
    requestor: Box<dyn WebhookRequestor>,
    submitter: Box<dyn QuerySubmitter>,
}

impl Flow {
    /// Creates a flow for `identity` using the given infrastructure.
    pub fn new(
        identity: RegistrationRequest,
        requestor: impl WebhookRequestor + 'static,
        submitter: impl QuerySubmitter + 'static,
    ) -> Self {
        Self {
            identity,
            requestor: Box::new(requestor),
            submitter: Box::new(submitter),
        }
    }

    /// Runs the handshake once.
    ///
    /// Never panics and never returns an error; failures are logged and
    /// reported through the returned [`FlowOutcome`].
    pub async fn run_once(self) -> FlowOutcome {
        let run_id = RunId::new_random();
        let span = info_span!("handshake_flow", %run_id);
        self.execute().instrument(span).await
    }

    async fn execute(self) -> FlowOutcome {
        info!("Starting webhook flow");

        let registration = match self.requestor.request_webhook(&self.identity).await {
            Ok(registration) => registration,
            Err(err) => {
                match &err {
                    RegistrationError::Status { status, body } => {
                        error!(status, body = %body, "Failed to get webhook URL or access token")
                    }
                    other => error!(error = %other, "Failed to get webhook URL or access token"),
                }
                return FlowOutcome::RegistrationFailed(err);
            }
        };

        info!(webhook = %registration.webhook_url, "Webhook URL received");
        info!(
            access_token_len = registration.access_token.len(),
            "Access token received"
        );

        let result = self
            .submitter
            .submit_query(
                &registration.webhook_url,
                &registration.access_token,
                FINAL_QUERY,
            )
            .await;

        match result {
            Ok(receipt) => {
                if receipt.is_success() {
                    info!(status = receipt.status, "Submitted final query");
                } else {
                    warn!(status = receipt.status, "Submitted final query");
                }
                info!(body = %receipt.body, "Response from webhook");
                FlowOutcome::Submitted(receipt)
            }
            Err(err) => {
                error!(error = %err, "Error submitting final query");
                FlowOutcome::SubmissionFailed(err)
            }
        }
    }
}
