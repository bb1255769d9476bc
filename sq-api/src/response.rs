//! Response envelopes returned by the SleepIQ REST API.
//!
//! Collection endpoints wrap their items in a single named array; the items
//! themselves stay raw JSON objects until a view type validates them.

use serde::{Deserialize, Serialize};

/// Body of a successful `PUT /rest/login`.
///
/// Only `key` is read; other members such as `userId` are ignored whatever
/// their type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Session token attached to later requests as `_k`.
    pub key: String,
}

/// Body of `GET /rest/sleeper`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SleeperList {
    pub sleepers: Vec<serde_json::Value>,
}

/// Body of `GET /rest/bed` and `GET /rest/bed/familyStatus`; both wrap a `beds` array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BedList {
    pub beds: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response() {
        let json = r#"{"userId":"U1","key":"abc123","registrationState":13}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.key, "abc123");
    }

    #[test]
    fn test_login_response_ignores_numeric_user_id() {
        let json = r#"{"userId":12345,"key":"abc"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.key, "abc");
    }

    #[test]
    fn test_login_response_requires_key() {
        let json = r#"{"userId":"U1"}"#;
        assert!(serde_json::from_str::<LoginResponse>(json).is_err());
    }

    #[test]
    fn test_collection_requires_array() {
        assert!(serde_json::from_str::<BedList>("{}").is_err());
        let list: SleeperList = serde_json::from_str(r#"{"sleepers":[]}"#).unwrap();
        assert!(list.sleepers.is_empty());
    }
}
