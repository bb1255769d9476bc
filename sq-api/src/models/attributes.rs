//! Raw attribute storage and snake_case accessor lookup.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use sq_core::error::{SqError, SqResult};

/// Convert a snake_case accessor name to the API's lowerCamelCase key.
///
/// `sleeper_left_id` becomes `sleeperLeftId`. Names without underscores are
/// returned unchanged.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for (i, ch) in name.chars().enumerate() {
        if ch == '_' {
            // Leading underscores are kept verbatim.
            if out.is_empty() && i == 0 {
                out.push(ch);
            } else {
                upper_next = true;
            }
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// The raw JSON object behind a view, keyed by the API's camelCase names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    /// Wrap a JSON value, which must be an object.
    pub fn from_value(view: &'static str, value: Value) -> SqResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(SqError::Serialization(format!(
                "{view}: expected a JSON object, got {other}"
            ))),
        }
    }

    /// Look up by raw (camelCase) key.
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Raw key that must be present.
    pub(crate) fn require(&self, view: &'static str, key: &str) -> SqResult<&Value> {
        self.0.get(key).ok_or_else(|| SqError::MissingAttribute {
            view,
            attribute: key.to_string(),
        })
    }

    /// Identifier-like raw key; strings are taken as-is, numbers are rendered.
    pub(crate) fn require_id(&self, view: &'static str, key: &str) -> SqResult<String> {
        match self.require(view, key)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(SqError::Serialization(format!(
                "{view}.{key}: expected an identifier, got {other}"
            ))),
        }
    }
}

/// A view over one raw API object.
pub trait ApiObject {
    /// View name used in error messages.
    const VIEW: &'static str;

    fn attributes(&self) -> &Attributes;

    /// Raw attribute by snake_case accessor name.
    fn attr(&self, name: &str) -> SqResult<&Value> {
        let key = to_camel_case(name);
        self.attributes()
            .raw(&key)
            .ok_or(SqError::MissingAttribute {
                view: Self::VIEW,
                attribute: key,
            })
    }

    /// String attribute by snake_case accessor name.
    fn attr_str(&self, name: &str) -> SqResult<&str> {
        let value = self.attr(name)?;
        value.as_str().ok_or_else(|| {
            SqError::Serialization(format!(
                "{}.{name}: expected a string, got {value}",
                Self::VIEW
            ))
        })
    }
}
