//! Wire types for the `/v1/userinfo` endpoint.
//!
//! Field names follow the service's camelCase JSON. Optional profile fields
//! stay `None` when the server omits them or sends `null`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful body of `GET /v1/userinfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfoResponse {
    pub meta: Meta,
    pub session: Session,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub remaining_seconds: i32,
}

/// The authenticated subject's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub external_id: String,
    pub user_name: String,
    pub display_name: String,
    #[serde(default)]
    pub nick_name: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
    pub locale: String,
    #[serde(default)]
    pub timezone: Option<String>,
    pub active: bool,
    pub names: Names,
    pub photos: Vec<Photo>,
    /// Schema is not published by the service; kept as raw JSON.
    pub phone_numbers: Vec<Value>,
    /// Schema is not published by the service; kept as raw JSON.
    pub addresses: Vec<Value>,
    pub emails: Vec<Email>,
    pub verifications: Vec<Verification>,
    pub provider: String,
    pub created_at: String,
    pub updated_at: String,
    pub environment_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Names {
    pub id: String,
    #[serde(default)]
    pub formatted: Option<String>,
    pub family_name: String,
    pub given_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub honorific_prefix: Option<String>,
    #[serde(default)]
    pub honorific_suffix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub value: String,
    #[serde(rename = "type")]
    pub photo_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub id: String,
    pub value: String,
    #[serde(rename = "type", default)]
    pub email_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub id: String,
    pub email: String,
    pub verified: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Body the service sends alongside HTTP 500.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_uses_camel_case() {
        let session: Session = serde_json::from_value(json!({"remainingSeconds": 42})).unwrap();
        assert_eq!(session.remaining_seconds, 42);
        assert_eq!(serde_json::to_value(&session).unwrap(), json!({"remainingSeconds": 42}));
    }

    #[test]
    fn test_email_type_null_and_missing() {
        let missing: Email =
            serde_json::from_value(json!({"id": "e1", "value": "a@b.c"})).unwrap();
        let null: Email =
            serde_json::from_value(json!({"id": "e1", "value": "a@b.c", "type": null})).unwrap();
        assert_eq!(missing.email_type, None);
        assert_eq!(null, missing);
    }

    #[test]
    fn test_photo_type_rename() {
        let photo: Photo = serde_json::from_value(
            json!({"id": "p1", "value": "https://example.com/p.png", "type": "avatar"}),
        )
        .unwrap();
        assert_eq!(photo.photo_type, "avatar");
    }

    #[test]
    fn test_names_optional_fields_absent() {
        let names: Names =
            serde_json::from_value(json!({"id": "n1", "familyName": "Doe", "givenName": "Jane"}))
                .unwrap();
        assert_eq!(names.formatted, None);
        assert_eq!(names.middle_name, None);
        assert_eq!(names.honorific_prefix, None);
        assert_eq!(names.honorific_suffix, None);
    }

    #[test]
    fn test_error_response() {
        let err: ErrorResponse =
            serde_json::from_str(r#"{"error": "GraphQL query failed"}"#).unwrap();
        assert_eq!(err.error, "GraphQL query failed");
    }
}
