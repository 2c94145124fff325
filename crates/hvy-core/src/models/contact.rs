//! Contact relay payloads.

use serde::{Deserialize, Serialize};

use crate::error::ContactError;

/// Message submitted through the ACCESS module.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Checks that every field is present and the address looks deliverable.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::InvalidEmail),
        }
    }

    /// Serialized request body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Relay response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl ContactResponse {
    /// Maps an HTTP status and body into the relay outcome.
    pub fn into_result(self, status: u16) -> Result<(), ContactError> {
        if self.success && (200..300).contains(&status) {
            Ok(())
        } else {
            Err(ContactError::Rejected {
                status,
                reason: self.error.unwrap_or_else(|| "unknown error".to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let req = ContactRequest::new("Ada", "ada@example.com", "Hello");
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn test_validate_missing_fields_in_order() {
        let req = ContactRequest::new("  ", "", "");
        assert_eq!(req.validate(), Err(ContactError::MissingField("name")));

        let req = ContactRequest::new("Ada", "ada@example.com", "\n");
        assert_eq!(req.validate(), Err(ContactError::MissingField("message")));
    }

    #[test]
    fn test_validate_email_shape() {
        for email in ["ada", "@example.com", "ada@"] {
            let req = ContactRequest::new("Ada", email, "Hi");
            assert_eq!(req.validate(), Err(ContactError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn test_response_mapping() {
        let ok: ContactResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(ok.into_result(200), Ok(()));

        let bad: ContactResponse =
            serde_json::from_str(r#"{"success":false,"error":"All fields are required"}"#)
                .unwrap();
        assert_eq!(
            bad.into_result(400),
            Err(ContactError::Rejected {
                status: 400,
                reason: "All fields are required".to_string()
            })
        );
    }

    #[test]
    fn test_request_json_field_names() {
        let json = ContactRequest::new("a", "b@c", "d").to_json().unwrap();
        assert_eq!(json, r#"{"name":"a","email":"b@c","message":"d"}"#);
    }
}
