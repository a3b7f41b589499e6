//! The library id to global name mapping.

use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;

use crate::error::GenerateError;

// ECMAScript IdentifierName, so non-ASCII globals like `Æsir` pass.
static GLOBAL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{ID_Start}_$][\p{ID_Continue}$\x{200C}\x{200D}]*$")
        .expect("valid identifier regex")
});

/// Why generation of the externals chunk was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The output path was empty or whitespace.
    EmptyOutputPath,
    /// No externals value was supplied.
    MissingExternals,
    /// The externals value was an array, a scalar, or JSON for one.
    NotAnObject { kind: &'static str },
    /// The externals object had no entries.
    NoEntries,
    /// A library mapped to something other than a global identifier.
    InvalidGlobal { library: String, value: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOutputPath => write!(f, "the output path must be a non-empty string"),
            Self::MissingExternals => write!(f, "no externals were configured"),
            Self::NotAnObject { kind } => write!(
                f,
                "externals must be an object (or JSON-string object), got {kind}"
            ),
            Self::NoEntries => write!(f, "externals must have at least one entry"),
            Self::InvalidGlobal { library, value } => write!(
                f,
                "'{library}' must map to a global variable name, got {value}"
            ),
        }
    }
}

/// Why a raw value couldn't become an [`ExternalsMap`].
#[derive(Debug)]
pub enum ExternalsError {
    /// Explicit JSON string that doesn't parse. Aborts the build.
    Fatal(GenerateError),
    /// Unusable but well-formed input. Generation is skipped.
    Skip(SkipReason),
}

/// Ordered library id to global name mapping.
///
/// Iteration follows the order of keys in the input document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalsMap {
    entries: IndexMap<String, String>,
}

impl ExternalsMap {
    /// Interpret a raw `EXTERNALS` value.
    ///
    /// Strings are parsed as JSON first. The result must be a non-empty
    /// object whose values are global identifiers.
    ///
    /// # Example
    ///
    /// ```
    /// use r4x_externals::ExternalsMap;
    /// use serde_json::json;
    ///
    /// let from_object = ExternalsMap::from_value(Some(&json!({ "react": "React" }))).unwrap();
    /// let from_string = ExternalsMap::from_value(Some(&json!("{\"react\":\"React\"}"))).unwrap();
    /// assert_eq!(from_object, from_string);
    /// ```
    pub fn from_value(value: Option<&Value>) -> Result<Self, ExternalsError> {
        let Some(value) = value else {
            return Err(ExternalsError::Skip(SkipReason::MissingExternals));
        };

        let parsed;
        let value = match value {
            Value::String(raw) => {
                parsed = serde_json::from_str::<Value>(raw).map_err(|source| {
                    ExternalsError::Fatal(GenerateError::InvalidExternalsJson { source })
                })?;
                &parsed
            }
            other => other,
        };

        let object = match value {
            Value::Object(object) => object,
            Value::Null => return Err(ExternalsError::Skip(SkipReason::MissingExternals)),
            other => {
                return Err(ExternalsError::Skip(SkipReason::NotAnObject {
                    kind: kind_of(other),
                }))
            }
        };

        if object.is_empty() {
            return Err(ExternalsError::Skip(SkipReason::NoEntries));
        }

        let mut entries = IndexMap::with_capacity(object.len());
        for (library, global) in object {
            match global.as_str() {
                Some(name) if GLOBAL_NAME.is_match(name) => {
                    entries.insert(library.clone(), name.to_string());
                }
                _ => {
                    return Err(ExternalsError::Skip(SkipReason::InvalidGlobal {
                        library: library.clone(),
                        value: global.to_string(),
                    }))
                }
            }
        }

        Ok(Self { entries })
    }

    /// `(library id, global name)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn global_for(&self, library: &str) -> Option<&str> {
        self.entries.get(library).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExternalsMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
