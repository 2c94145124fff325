//! Contact relay client.

use gloo_net::http::Request;
use hvy_core::error::ContactError;
use hvy_core::models::{ContactRequest, ContactResponse};

use crate::config::CONTACT_ENDPOINT;

/// Validates `request` and posts it to the contact relay.
///
/// A non-JSON reply is reported as a rejection with the HTTP status.
pub async fn send_contact(request: &ContactRequest) -> Result<(), ContactError> {
    request.validate()?;

    let body = request
        .to_json()
        .map_err(|e| ContactError::Network(e.to_string()))?;
    let response = Request::post(CONTACT_ENDPOINT)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    let status = response.status();
    let reply = response
        .json::<ContactResponse>()
        .await
        .map_err(|_| ContactError::Rejected {
            status,
            reason: response.status_text(),
        })?;
    reply.into_result(status)
}
