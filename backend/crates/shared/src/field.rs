//! Loosely Typed Request Fields
//!
//! Request bodies are forwarded to the store column by column without a
//! validation layer, so a field arrives as whatever JSON the client sent.
//! [`Field`] keeps that raw value and converts it only when a column type
//! is known:
//!
//! - text columns take any value, scalars in their JSON spelling
//! - integer columns take JSON integers and strings holding one
//! - strict string inputs (e.g. a password to hash) take strings only
//!
//! A missing field and an explicit `null` are the same: `None`.
//!
//! ```rust
//! use kernel::field::Field;
//!
//! let phone: Field = serde_json::from_str("5551234").unwrap();
//! assert_eq!(phone.into_text().as_deref(), Some("5551234"));
//!
//! let user_id: Field = serde_json::from_str(r#""5""#).unwrap();
//! assert_eq!(user_id.into_integer("user_id"), Ok(Some(5)));
//! ```

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Integral floats below this magnitude are spelled without a fraction
const MAX_WHOLE_FLOAT: f64 = 9_007_199_254_740_992.0;

/// A field that does not fit the column it is bound for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    field: &'static str,
    expected: &'static str,
    found: String,
}

impl FieldError {
    pub fn field(&self) -> &'static str {
        self.field
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field `{}`: expected {}, found {}",
            self.field, self.expected, self.found
        )
    }
}

impl std::error::Error for FieldError {}

/// Raw JSON value of one request field
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Field(Value);

impl Field {
    /// Text form for a text column
    pub fn into_text(self) -> Option<String> {
        match self.0 {
            Value::Null => None,
            Value::String(s) => Some(s),
            Value::Number(n) => Some(number_text(&n)),
            Value::Bool(b) => Some(b.to_string()),
            other => Some(other.to_string()),
        }
    }

    /// Value for an `INTEGER` column
    ///
    /// Strings are trimmed and may carry a sign; fractions, booleans and
    /// out-of-range values fail.
    pub fn into_integer(self, field: &'static str) -> Result<Option<i32>, FieldError> {
        let fail = |value: &Value| FieldError {
            field,
            expected: "an integer",
            found: value.to_string(),
        };

        match &self.0 {
            Value::Null => Ok(None),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return i32::try_from(i).map(Some).map_err(|_| fail(&self.0));
                }
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() <= i32::MAX as f64 => {
                        Ok(Some(f as i32))
                    }
                    _ => Err(fail(&self.0)),
                }
            }
            Value::String(s) => s
                .trim()
                .parse::<i32>()
                .map(Some)
                .map_err(|_| fail(&self.0)),
            _ => Err(fail(&self.0)),
        }
    }

    /// The value only if the client sent a JSON string
    pub fn into_string(self, field: &'static str) -> Result<Option<String>, FieldError> {
        match self.0 {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            other => Err(FieldError {
                field,
                expected: "a string",
                found: kind_name(&other).to_string(),
            }),
        }
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f.abs() < MAX_WHOLE_FLOAT {
                return (f as i64).to_string();
            }
        }
    }
    n.to_string()
}

// Strict conversions report the JSON kind, never the value itself
fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(json: &str) -> Field {
        serde_json::from_str(json).unwrap()
    }

    #[derive(Deserialize)]
    struct Body {
        #[serde(default)]
        name: Field,
        #[serde(default)]
        phone: Field,
    }

    #[test]
    fn test_missing_and_null_are_none() {
        let body: Body = serde_json::from_str(r#"{"phone":null}"#).unwrap();

        assert_eq!(body.name.into_text(), None);
        assert_eq!(body.phone.into_integer("phone"), Ok(None));
    }

    #[test]
    fn test_text_spelling() {
        assert_eq!(field(r#""hi""#).into_text().as_deref(), Some("hi"));
        assert_eq!(field("5551234").into_text().as_deref(), Some("5551234"));
        assert_eq!(field("5.0").into_text().as_deref(), Some("5"));
        assert_eq!(field("5.5").into_text().as_deref(), Some("5.5"));
        assert_eq!(field("-12").into_text().as_deref(), Some("-12"));
        assert_eq!(field("true").into_text().as_deref(), Some("true"));
        assert_eq!(
            field(r#"{"a":1}"#).into_text().as_deref(),
            Some(r#"{"a":1}"#)
        );
    }

    #[test]
    fn test_integer_accepts_numbers_and_numeric_strings() {
        assert_eq!(field("5").into_integer("user_id"), Ok(Some(5)));
        assert_eq!(field("5.0").into_integer("user_id"), Ok(Some(5)));
        assert_eq!(field(r#""5""#).into_integer("user_id"), Ok(Some(5)));
        assert_eq!(field(r#"" -7 ""#).into_integer("user_id"), Ok(Some(-7)));
        assert_eq!(field(r#""+3""#).into_integer("user_id"), Ok(Some(3)));
    }

    #[test]
    fn test_integer_rejects_everything_else() {
        for json in [
            r#""abc""#,
            r#""5.0""#,
            "5.5",
            "true",
            "[1]",
            r#"{"id":1}"#,
            "2147483648",
        ] {
            let err = field(json).into_integer("user_id").unwrap_err();
            assert_eq!(err.field(), "user_id", "{json}");
        }
    }

    #[test]
    fn test_strict_string() {
        assert_eq!(
            field(r#""pw123""#).into_string("password"),
            Ok(Some("pw123".to_string()))
        );
        assert_eq!(field("null").into_string("password"), Ok(None));

        let err = field("12345").into_string("password").unwrap_err();
        assert_eq!(err.field(), "password");
        assert!(!err.to_string().contains("12345"));
    }
}
