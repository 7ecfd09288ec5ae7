//! Runtime value type.

use std::fmt;

use super::error::RuntimeError;

/// Value produced by evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// Result of `()` and of empty blocks.
    #[default]
    Unit,
    /// A 64-bit signed integer.
    Integer(i64),
    /// A string, including barewords and dotted numeric literals.
    String(std::string::String),
}

impl Value {
    /// Coerces the value to a string.
    ///
    /// - `Integer` -> decimal representation.
    /// - `Unit` -> empty string.
    pub fn as_string(&self) -> std::string::String {
        match self {
            Self::String(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Unit => std::string::String::new(),
        }
    }

    /// Returns the string payload without coercion.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Coerces the value to an integer.
    ///
    /// Strings are trimmed then parsed; empty strings and `Unit` are 0.
    pub fn as_integer(&self) -> Result<i64, RuntimeError> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Unit => Ok(0),
            Self::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(0);
                }
                trimmed.parse::<i64>().map_err(|_| {
                    RuntimeError::type_mismatch(format!("cannot convert string to integer: {s:?}"))
                })
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<std::string::String> for Value {
    fn from(value: std::string::String) -> Self {
        Self::String(value)
    }
}
