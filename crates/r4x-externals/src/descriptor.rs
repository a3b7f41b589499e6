//! Serializable bundler build configuration.
//!
//! The shape mirrors a webpack configuration object so the calling
//! pipeline can hand the JSON straight to the bundler.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};

/// Name of the single entry, and so of the emitted chunk.
pub const ENTRY_NAME: &str = "externals";

/// Extensions the bundler tries when resolving imports.
pub const RESOLVE_EXTENSIONS: [&str; 3] = [".es6", ".js", ".jsx"];

const TRANSFORM_TEST: &str = r"\.((jsx?)|(es6))$";
const TRANSFORM_EXCLUDE: &str = "node_modules";
const TRANSFORM_LOADER: &str = "babel-loader";

static TRANSFORM_TEST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TRANSFORM_TEST).expect("valid transform test regex"));
static TRANSFORM_EXCLUDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TRANSFORM_EXCLUDE).expect("valid transform exclude regex"));

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDescriptor {
    /// Compilation mode (`BUILD_ENV`), verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Named entry points. Empty when generation was skipped.
    pub entry: IndexMap<String, PathBuf>,

    pub output: OutputConfig,

    pub resolve: ResolveConfig,

    pub module: ModuleConfig,

    /// `None` when generation was skipped, so no manifest is written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<PluginDescriptor>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputConfig {
    /// Base directory for the chunk and for plugin output (`BUILD_R4X`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Chunk filename pattern.
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveConfig {
    pub extensions: Vec<String>,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            extensions: RESOLVE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ModuleConfig {
    pub rules: Vec<ModuleRule>,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            rules: vec![ModuleRule::transpile()],
        }
    }
}

/// A loader rule: files matching `test` and not matching `exclude` go
/// through `loader`.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleRule {
    #[serde(serialize_with = "serialize_regex")]
    pub test: Regex,

    #[serde(serialize_with = "serialize_regex")]
    pub exclude: Regex,

    pub loader: String,

    pub options: Value,
}

impl ModuleRule {
    /// Compact transpilation of `.js`, `.jsx` and `.es6` sources outside
    /// `node_modules`.
    pub fn transpile() -> Self {
        Self {
            test: TRANSFORM_TEST_RE.clone(),
            exclude: TRANSFORM_EXCLUDE_RE.clone(),
            loader: TRANSFORM_LOADER.to_string(),
            options: json!({ "compact": true }),
        }
    }

    pub fn applies_to(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.test.is_match(&path) && !self.exclude.is_match(&path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum PluginDescriptor {
    /// Writes a JSON manifest mapping chunk names to emitted filenames.
    ChunksManifest(ChunksManifestOptions),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunksManifestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl BuildDescriptor {
    /// A descriptor that compiles nothing and writes no manifest.
    pub fn empty(mode: Option<String>, output: OutputConfig) -> Self {
        Self {
            mode,
            entry: IndexMap::new(),
            output,
            resolve: ResolveConfig::default(),
            module: ModuleConfig::default(),
            plugins: None,
        }
    }

    /// Path of the externals entry, if one was generated.
    pub fn externals_entry(&self) -> Option<&Path> {
        self.entry.get(ENTRY_NAME).map(PathBuf::as_path)
    }

    /// Manifest plugin options, if a manifest will be written.
    pub fn manifest(&self) -> Option<&ChunksManifestOptions> {
        self.plugins.as_ref()?.iter().find_map(|plugin| match plugin {
            PluginDescriptor::ChunksManifest(options) => Some(options),
        })
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn serialize_regex<S: Serializer>(regex: &Regex, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(regex.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_output() -> OutputConfig {
        OutputConfig {
            path: Some(PathBuf::from("/out")),
            filename: "[name].js".to_string(),
        }
    }

    #[test]
    fn transpile_rule_matches_sources_outside_node_modules() {
        let rule = ModuleRule::transpile();
        assert!(rule.applies_to(Path::new("/tmp/_externals_.es6")));
        assert!(rule.applies_to(Path::new("src/App.jsx")));
        assert!(rule.applies_to(Path::new("src/index.js")));
        assert!(!rule.applies_to(Path::new("node_modules/react/index.js")));
        assert!(!rule.applies_to(Path::new("src/styles.css")));
        assert!(!rule.applies_to(Path::new("src/index.ts")));
    }

    #[test]
    fn empty_descriptor_serializes_without_plugins() {
        let descriptor = BuildDescriptor::empty(None, plain_output());
        let value = descriptor.to_value().unwrap();

        assert_eq!(value["entry"], json!({}));
        assert!(value.get("plugins").is_none());
        assert!(value.get("mode").is_none());
        assert_eq!(value["output"], json!({ "path": "/out", "filename": "[name].js" }));
        assert_eq!(value["resolve"]["extensions"], json!([".es6", ".js", ".jsx"]));
        assert_eq!(
            value["module"]["rules"][0],
            json!({
                "test": "\\.((jsx?)|(es6))$",
                "exclude": "node_modules",
                "loader": "babel-loader",
                "options": { "compact": true }
            })
        );
        assert!(descriptor.manifest().is_none());
        assert!(descriptor.externals_entry().is_none());
    }

    #[test]
    fn entry_map_serializes_in_insertion_order() {
        let mut descriptor = BuildDescriptor::empty(None, plain_output());
        descriptor
            .entry
            .insert(ENTRY_NAME.to_string(), PathBuf::from("/tmp/_externals_.es6"));
        descriptor
            .entry
            .insert("another".to_string(), PathBuf::from("/tmp/another.js"));

        let json = descriptor.to_json_pretty().unwrap();
        let externals_at = json.find("\"externals\"").unwrap();
        let another_at = json.find("\"another\"").unwrap();
        assert!(externals_at < another_at);
        assert_eq!(
            descriptor.to_value().unwrap()["entry"]["externals"],
            json!("/tmp/_externals_.es6")
        );
    }

    #[test]
    fn manifest_plugin_serializes_with_name_tag() {
        let mut descriptor = BuildDescriptor::empty(Some("production".into()), plain_output());
        descriptor.plugins = Some(vec![PluginDescriptor::ChunksManifest(
            ChunksManifestOptions {
                output_dir: Some(PathBuf::from("/out")),
                filename: Some("chunks.externals.json".into()),
            },
        )]);

        let value = descriptor.to_value().unwrap();
        assert_eq!(value["mode"], json!("production"));
        assert_eq!(
            value["plugins"],
            json!([{
                "name": "chunks-manifest",
                "outputDir": "/out",
                "filename": "chunks.externals.json"
            }])
        );
        assert_eq!(
            descriptor.manifest().and_then(|m| m.filename.as_deref()),
            Some("chunks.externals.json")
        );
    }
}
