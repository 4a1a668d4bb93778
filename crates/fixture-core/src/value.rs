//! Value representation for generated fixture fields.

/// A value held by one field of a generated record.
///
/// `FixtureValue` is the raw value produced by the generator before JSON
/// serialization. The variants cover exactly the candidates the generator
/// draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureValue {
    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// String value
    Text(String),
}

impl FixtureValue {
    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<FixtureValue> for serde_json::Value {
    fn from(value: FixtureValue) -> Self {
        match value {
            FixtureValue::Bool(b) => serde_json::Value::Bool(b),
            FixtureValue::Int(i) => serde_json::Value::Number(i.into()),
            FixtureValue::Text(s) => serde_json::Value::String(s),
        }
    }
}

impl From<&FixtureValue> for serde_json::Value {
    fn from(value: &FixtureValue) -> Self {
        value.clone().into()
    }
}
