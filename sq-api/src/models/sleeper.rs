//! Sleeper profiles from `/rest/sleeper`.

use serde::Serialize;
use serde_json::Value;

use sq_core::error::SqResult;

use super::attributes::{ApiObject, Attributes};

/// One sleeper on the account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sleeper {
    pub sleeper_id: String,
    /// Bed this sleeper is assigned to, when the API reports one.
    pub bed_id: Option<String>,
    attributes: Attributes,
}

impl Sleeper {
    /// Build from a raw entry; `sleeperId` is required.
    pub fn from_raw(value: Value) -> SqResult<Self> {
        let attributes = Attributes::from_value(Self::VIEW, value)?;
        let sleeper_id = attributes.require_id(Self::VIEW, "sleeperId")?;
        let bed_id = match attributes.raw("bedId") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        Ok(Self {
            sleeper_id,
            bed_id,
            attributes,
        })
    }

    /// `firstName`, if present.
    pub fn first_name(&self) -> Option<&str> {
        self.attributes.raw("firstName").and_then(Value::as_str)
    }
}

impl ApiObject for Sleeper {
    const VIEW: &'static str = "Sleeper";

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sq_core::error::SqError;

    #[test]
    fn test_sleeper_from_raw() {
        let sleeper = Sleeper::from_raw(json!({
            "sleeperId": "S1",
            "firstName": "Alex",
            "bedId": "B1",
            "sleepGoal": 480,
        }))
        .unwrap();

        assert_eq!(sleeper.sleeper_id, "S1");
        assert_eq!(sleeper.bed_id.as_deref(), Some("B1"));
        assert_eq!(sleeper.first_name(), Some("Alex"));
        assert_eq!(sleeper.attr("sleep_goal").unwrap(), &json!(480));
    }

    #[test]
    fn test_sleeper_requires_id() {
        let err = Sleeper::from_raw(json!({"firstName": "Alex"})).unwrap_err();
        assert!(matches!(err, SqError::MissingAttribute { view: "Sleeper", .. }));
    }

    #[test]
    fn test_missing_passthrough_attribute() {
        let sleeper = Sleeper::from_raw(json!({"sleeperId": "S1"})).unwrap();
        match sleeper.attr("last_login").unwrap_err() {
            SqError::MissingAttribute { attribute, .. } => assert_eq!(attribute, "lastLogin"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
