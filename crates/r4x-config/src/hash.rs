//! Output filename hashing mode, driven by `CHUNK_CONTENTHASH`.

use std::fmt;

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::options::is_truthy;

const PLAIN_PATTERN: &str = "[name].js";

/// How the externals chunk filename is derived.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HashMode {
    /// Plain `[name].js`.
    #[default]
    Disabled,
    /// Caller-supplied filename pattern, used verbatim.
    Pattern(String),
    /// Content hash truncated to this many characters.
    Length(u32),
}

impl HashMode {
    /// Interpret a raw `CHUNK_CONTENTHASH` value.
    ///
    /// Falsy values (and the strings `"0"` and `"false"`) disable hashing.
    /// Non-negative integers and all-digit strings select a hash length.
    /// Other numbers, written as numbers or as strings, are rejected. Any
    /// other non-empty string is a verbatim pattern. Everything else,
    /// `true` included, is rejected instead of producing a broken pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use r4x_config::HashMode;
    /// use serde_json::json;
    ///
    /// let mode = HashMode::from_value(Some(&json!("8"))).unwrap();
    /// assert_eq!(mode.filename_pattern(), "[name].[contenthash:8].js");
    /// ```
    pub fn from_value(value: Option<&Value>) -> Result<Self> {
        if !is_truthy(value) {
            return Ok(Self::Disabled);
        }

        match value {
            Some(Value::Number(n)) => match n.as_u64() {
                Some(len) => Self::from_length(len, &n.to_string()),
                None => Err(invalid(value, "hash length must be a non-negative integer")),
            },
            Some(Value::String(s)) => Self::from_str_value(s),
            _ => Err(invalid(
                value,
                "use a filename pattern string or a hash length",
            )),
        }
    }

    fn from_str_value(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("false") {
            return Ok(Self::Disabled);
        }
        if trimmed.eq_ignore_ascii_case("true") {
            return Err(ConfigError::InvalidHashMode {
                value: raw.to_string(),
                hint: "use a filename pattern string or a hash length".to_string(),
            });
        }
        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let len = trimmed
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidHashMode {
                    value: raw.to_string(),
                    hint: e.to_string(),
                })?;
            return Self::from_length(len, raw);
        }
        if trimmed.parse::<f64>().is_ok_and(f64::is_finite) {
            return Err(ConfigError::InvalidHashMode {
                value: raw.to_string(),
                hint: "hash length must be a non-negative integer".to_string(),
            });
        }
        Ok(Self::Pattern(raw.to_string()))
    }

    fn from_length(len: u64, raw: &str) -> Result<Self> {
        if len == 0 {
            return Ok(Self::Disabled);
        }
        u32::try_from(len)
            .map(Self::Length)
            .map_err(|_| ConfigError::InvalidHashMode {
                value: raw.to_string(),
                hint: "hash length is out of range".to_string(),
            })
    }

    /// Output filename pattern handed to the bundler.
    pub fn filename_pattern(&self) -> String {
        match self {
            Self::Disabled => PLAIN_PATTERN.to_string(),
            Self::Pattern(pattern) => pattern.clone(),
            Self::Length(len) => format!("[name].[contenthash:{len}].js"),
        }
    }
}

impl fmt::Display for HashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::Pattern(pattern) => write!(f, "pattern {pattern}"),
            Self::Length(len) => write!(f, "{len} hash characters"),
        }
    }
}

fn invalid(value: Option<&Value>, hint: &str) -> ConfigError {
    ConfigError::InvalidHashMode {
        value: value.map(Value::to_string).unwrap_or_default(),
        hint: hint.to_string(),
    }
}
