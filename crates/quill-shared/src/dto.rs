//! Data Transfer Objects - request/response types for the API.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Body of `POST /posts` and `PUT /posts/{id}`.
///
/// Both fields are optional on the wire so that a missing field is reported
/// as a validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Serialized post: exactly `id`, `title`, `content`, `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl PostResponse {
    pub fn new(id: i32, title: String, content: String, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            title,
            content,
            created_at: iso8601(created_at),
        }
    }
}

/// ISO-8601 without offset; the fraction is only written when non-zero.
fn iso8601(ts: NaiveDateTime) -> String {
    if ts.nanosecond() == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(micros: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_micro_opt(12, 30, 45, micros)
            .unwrap()
    }

    #[test]
    fn serializes_exactly_four_fields() {
        let response = PostResponse::new(1, "Hello".into(), "World".into(), at(123_456));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Hello",
                "content": "World",
                "created_at": "2024-05-01T12:30:45.123456",
            })
        );
    }

    #[test]
    fn whole_seconds_have_no_fraction() {
        let response = PostResponse::new(1, "t".into(), "c".into(), at(0));
        assert_eq!(response.created_at, "2024-05-01T12:30:45");
    }

    #[test]
    fn payload_fields_may_be_missing() {
        let payload: PostPayload = serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();
        assert_eq!(payload.title.as_deref(), Some("Hello"));
        assert!(payload.content.is_none());
    }
}
