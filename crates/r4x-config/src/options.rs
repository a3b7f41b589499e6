//! The environment-like option set accepted by the configurator.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Option names recognized in the direct layer and in fallback files.
pub const RECOGNIZED_KEYS: [&str; 6] = [
    "REACT4XP_CONFIG_FILE",
    "BUILD_ENV",
    "BUILD_R4X",
    "EXTERNALS",
    "CHUNK_CONTENTHASH",
    "EXTERNALS_CHUNKS_FILENAME",
];

/// Options as supplied by the caller or read from a fallback file.
///
/// Every field is optional. Unknown keys are ignored so a shared
/// build-constants file can carry settings for other build steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RawOptions {
    /// Path to a fallback JSON or TOML file, relative to the working directory.
    #[serde(rename = "REACT4XP_CONFIG_FILE", default, skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,

    /// Compilation mode, passed through verbatim.
    #[serde(rename = "BUILD_ENV", default, skip_serializing_if = "Option::is_none")]
    pub build_env: Option<String>,

    /// Absolute output directory for the chunk and the manifest.
    #[serde(rename = "BUILD_R4X", default, skip_serializing_if = "Option::is_none")]
    pub build_r4x: Option<PathBuf>,

    /// Library id to global name mapping, as an object or a JSON string.
    #[serde(rename = "EXTERNALS", default, skip_serializing_if = "Option::is_none")]
    pub externals: Option<Value>,

    /// Falsy, a filename pattern, or a hash length.
    #[serde(rename = "CHUNK_CONTENTHASH", default, skip_serializing_if = "Option::is_none")]
    pub chunk_contenthash: Option<Value>,

    /// Filename of the chunk manifest.
    #[serde(
        rename = "EXTERNALS_CHUNKS_FILENAME",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub externals_chunks_filename: Option<String>,
}

impl RawOptions {
    /// Parse options from a JSON value (for programmatic callers).
    ///
    /// # Example
    ///
    /// ```
    /// use r4x_config::RawOptions;
    /// use serde_json::json;
    ///
    /// let options = RawOptions::from_value(json!({
    ///     "BUILD_R4X": "/out",
    ///     "EXTERNALS": { "react-dom": "ReactDOM" }
    /// }))
    /// .unwrap();
    /// assert_eq!(options.build_r4x.unwrap().to_str(), Some("/out"));
    /// ```
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// JSON Schema describing a fallback config file.
    pub fn json_schema() -> Value {
        let schema = schemars::schema_for!(RawOptions);
        serde_json::to_value(schema).unwrap_or(Value::Null)
    }
}

/// Truthiness of a loosely typed option value.
///
/// Absent, `null`, `false`, `0` and `""` are falsy. Everything else,
/// including empty objects and arrays, is truthy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&Value::Null)));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(""))));
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy(Some(&json!(true))));
        assert!(is_truthy(Some(&json!(8))));
        assert!(is_truthy(Some(&json!("0"))));
        assert!(is_truthy(Some(&json!({}))));
        assert!(is_truthy(Some(&json!([]))));
    }

    #[test]
    fn deserializes_upper_case_names() {
        let options = RawOptions::from_value(json!({
            "BUILD_ENV": "production",
            "BUILD_R4X": "/out",
            "EXTERNALS": "{\"react\":\"React\"}",
            "CHUNK_CONTENTHASH": 8,
            "EXTERNALS_CHUNKS_FILENAME": "chunks.externals.json",
            "SOMETHING_ELSE": true
        }))
        .unwrap();

        assert_eq!(options.build_env.as_deref(), Some("production"));
        assert_eq!(options.build_r4x, Some(PathBuf::from("/out")));
        assert_eq!(options.externals, Some(json!("{\"react\":\"React\"}")));
        assert_eq!(options.chunk_contenthash, Some(json!(8)));
        assert_eq!(
            options.externals_chunks_filename.as_deref(),
            Some("chunks.externals.json")
        );
        assert!(options.config_file.is_none());
    }

    #[test]
    fn serialization_skips_unset_fields() {
        let options = RawOptions {
            build_env: Some("development".into()),
            ..RawOptions::default()
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value, json!({ "BUILD_ENV": "development" }));
    }

    #[test]
    fn schema_lists_recognized_keys() {
        let schema = RawOptions::json_schema();
        let properties = schema["properties"].as_object().unwrap();
        for key in RECOGNIZED_KEYS {
            assert!(properties.contains_key(key), "missing {key}");
        }
    }
}
