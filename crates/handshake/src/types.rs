//! Wire and value types exchanged during the handshake.
//!
//! All of these live for a single run only. Field names on the wire follow
//! the registration service's JSON (`regNo`, `accessToken`, `finalQuery`).

use serde::{Deserialize, Serialize};

use crate::{
    AccessToken, CandidateName, Email, RegistrationError, RegistrationNumber, ResponseField,
    WebhookUrl,
};

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Candidate identity posted to the registration endpoint.
///
/// Serialises as `{"name": ..., "regNo": ..., "email": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    /// Candidate name.
    pub name: CandidateName,

    /// Candidate registration number.
    #[serde(rename = "regNo")]
    pub registration_number: RegistrationNumber,

    /// Candidate e-mail address.
    pub email: Email,
}

impl RegistrationRequest {
    /// Creates a [`RegistrationRequest`] from already-validated parts.
    pub fn new(name: CandidateName, registration_number: RegistrationNumber, email: Email) -> Self {
        Self {
            name,
            registration_number,
            email,
        }
    }
}

// ---------------------------------------------------------------------------

/// The registration response body as received.
///
/// Either field may be absent or `null`; use [`RegistrationResponse::try_from`]
/// to obtain the validated form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponseBody {
    /// Webhook URL (`webhook`).
    #[serde(default)]
    pub webhook: Option<String>,

    /// Access token (`accessToken`).
    #[serde(default)]
    pub access_token: Option<String>,
}

/// A complete registration response: both the webhook URL and the access
/// token are present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationResponse {
    /// Where the query is to be submitted.
    pub webhook_url: WebhookUrl,

    /// Credential for the submission call.
    pub access_token: AccessToken,
}

impl TryFrom<RegistrationResponseBody> for RegistrationResponse {
    type Error = RegistrationError;

    fn try_from(body: RegistrationResponseBody) -> Result<Self, Self::Error> {
        let webhook_url = body
            .webhook
            .and_then(WebhookUrl::new)
            .ok_or(RegistrationError::MissingField {
                field: ResponseField::Webhook,
            })?;
        let access_token = body
            .access_token
            .and_then(AccessToken::new)
            .ok_or(RegistrationError::MissingField {
                field: ResponseField::AccessToken,
            })?;

        Ok(Self {
            webhook_url,
            access_token,
        })
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Body of the submission call: `{"finalQuery": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPayload {
    /// The query text, sent unmodified.
    #[serde(rename = "finalQuery")]
    pub query: String,
}

impl QueryPayload {
    /// Wraps `query` for submission.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

// ---------------------------------------------------------------------------

/// What the webhook answered to a submission.
///
/// Any status counts as a completed submission; the receipt only records it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// HTTP status code returned by the webhook.
    pub status: u16,

    /// Response body, verbatim.
    pub body: String,
}

impl SubmissionReceipt {
    /// Creates a [`SubmissionReceipt`].
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` if the webhook answered with a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> RegistrationRequest {
        RegistrationRequest::new(
            CandidateName::new("Alice").unwrap(),
            RegistrationNumber::new("R1").unwrap(),
            Email::new("a@x.com").unwrap(),
        )
    }

    #[test]
    fn registration_request_uses_wire_keys() {
        let value = serde_json::to_value(alice()).unwrap();
        assert_eq!(
            value,
            json!({"name": "Alice", "regNo": "R1", "email": "a@x.com"})
        );
    }

    #[test]
    fn complete_response_is_accepted() {
        let body: RegistrationResponseBody = serde_json::from_value(json!({
            "webhook": "https://hook.example/abc",
            "accessToken": "tok123"
        }))
        .unwrap();

        let response = RegistrationResponse::try_from(body).unwrap();
        assert_eq!(response.webhook_url.as_str(), "https://hook.example/abc");
        assert_eq!(response.access_token.as_str(), "tok123");
    }

    #[test]
    fn null_webhook_is_missing() {
        let body: RegistrationResponseBody =
            serde_json::from_value(json!({"webhook": null, "accessToken": "tok123"})).unwrap();

        assert_eq!(
            RegistrationResponse::try_from(body),
            Err(RegistrationError::MissingField {
                field: ResponseField::Webhook
            })
        );
    }

    #[test]
    fn absent_token_is_missing() {
        let body: RegistrationResponseBody =
            serde_json::from_value(json!({"webhook": "https://hook.example/abc"})).unwrap();

        assert_eq!(
            RegistrationResponse::try_from(body),
            Err(RegistrationError::MissingField {
                field: ResponseField::AccessToken
            })
        );
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let body = RegistrationResponseBody {
            webhook: Some("https://hook.example/abc".to_string()),
            access_token: Some(String::new()),
        };
        assert!(RegistrationResponse::try_from(body).is_err());
    }

    #[test]
    fn unknown_response_keys_are_ignored() {
        let body: RegistrationResponseBody = serde_json::from_value(json!({
            "webhook": "https://hook.example/abc",
            "accessToken": "tok123",
            "expiresIn": 3600
        }))
        .unwrap();
        assert!(RegistrationResponse::try_from(body).is_ok());
    }

    #[test]
    fn query_payload_uses_final_query_key() {
        let value = serde_json::to_value(QueryPayload::new("SELECT 1;")).unwrap();
        assert_eq!(value, json!({"finalQuery": "SELECT 1;"}));
    }

    #[test]
    fn receipt_success_range() {
        assert!(SubmissionReceipt::new(200, "").is_success());
        assert!(SubmissionReceipt::new(204, "").is_success());
        assert!(!SubmissionReceipt::new(401, "unauthorized").is_success());
        assert!(!SubmissionReceipt::new(500, "").is_success());
    }
}
