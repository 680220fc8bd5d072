use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// One claim value, tagged by the kind of JSON it holds.
///
/// `Absent` stands for a claim name that is not in the payload at all,
/// which renders differently from an explicit `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClaimValue<'a> {
    String(&'a str),
    Number(&'a Number),
    Boolean(bool),
    Null,
    /// Object or array.
    Json(&'a Value),
    Absent,
}

impl<'a> ClaimValue<'a> {
    pub fn from_json(value: Option<&'a Value>) -> Self {
        match value {
            None => Self::Absent,
            Some(Value::Null) => Self::Null,
            Some(Value::Bool(b)) => Self::Boolean(*b),
            Some(Value::Number(n)) => Self::Number(n),
            Some(Value::String(s)) => Self::String(s),
            Some(v @ (Value::Array(_) | Value::Object(_))) => Self::Json(v),
        }
    }

    /// JavaScript truthiness: empty strings, zero, `false`, null and
    /// absent values are falsy. Objects and arrays are always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::String(s) => !s.is_empty(),
            Self::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Self::Boolean(b) => *b,
            Self::Null | Self::Absent => false,
            Self::Json(_) => true,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Seconds since the epoch, when the value is numeric.
    pub fn as_epoch_seconds(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

/// Payload claims of a decoded token, keyed by claim name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, name: &str) -> ClaimValue<'_> {
        ClaimValue::from_json(self.0.get(name))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ClaimValue<'_>)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), ClaimValue::from_json(Some(value))))
    }

    /// Two-space indented JSON of the whole claim set.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| Value::Object(self.0.clone()).to_string())
    }
}
