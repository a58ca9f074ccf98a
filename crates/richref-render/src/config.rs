use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// Default source fields for asset references, tried in order.
pub const DEFAULT_ASSET_SRC_FIELDS: &[&str] = &["_publishUrl", "_path"];

/// Default alt text for inline assets without an alt field.
pub const DEFAULT_ASSET_ALT: &str = "in-line reference";

/// Default href template for content-fragment references.
pub const DEFAULT_FRAGMENT_HREF: &str = "/event:{slug}";

/// Default label fields for content-fragment references.
pub const DEFAULT_FRAGMENT_LABEL_FIELDS: &[&str] = &["eventName", "capacity"];

/// Default separator between label fields.
pub const DEFAULT_LABEL_SEPARATOR: &str = ": ";

/// Renderer configuration: which type names use the built-in asset and
/// fragment rendering rules, and how those rules read their fields.
///
/// Loadable from TOML:
///
/// ```toml
/// [[assets]]
/// type_name = "ImageRef"
/// src_fields = ["_publishUrl", "_path"]
///
/// [[fragments]]
/// type_name = "EventModel"
/// href_template = "/event:{slug}"
/// label_fields = ["eventName", "capacity"]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Type names rendered as images.
    pub assets: Vec<AssetBinding>,
    /// Type names rendered as links.
    pub fragments: Vec<FragmentBinding>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            assets: vec![AssetBinding::new("ImageRef")],
            fragments: vec![FragmentBinding::new("EventModel", DEFAULT_FRAGMENT_HREF)],
        }
    }
}

impl RendererConfig {
    /// A configuration with no bindings at all.
    pub fn empty() -> Self {
        Self {
            assets: Vec::new(),
            fragments: Vec::new(),
        }
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> RenderResult<Self> {
        toml::from_str(s).map_err(|e| RenderError::Config(e.to_string()))
    }
}

/// Binding of a type name to the built-in asset rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBinding {
    pub type_name: String,
    /// Fields tried in order for the image source.
    #[serde(default = "default_src_fields")]
    pub src_fields: Vec<String>,
    /// Field holding alt text, if any.
    #[serde(default)]
    pub alt_field: Option<String>,
    /// Alt text used when `alt_field` is unset or absent.
    #[serde(default = "default_alt")]
    pub default_alt: String,
}

impl AssetBinding {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            src_fields: default_src_fields(),
            alt_field: None,
            default_alt: default_alt(),
        }
    }
}

/// Binding of a type name to the built-in fragment rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentBinding {
    pub type_name: String,
    /// Link target with `{field}` placeholders.
    pub href_template: String,
    /// Fields joined to form the link label.
    #[serde(default = "default_label_fields")]
    pub label_fields: Vec<String>,
    #[serde(default = "default_label_separator")]
    pub label_separator: String,
}

impl FragmentBinding {
    pub fn new(type_name: impl Into<String>, href_template: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            href_template: href_template.into(),
            label_fields: default_label_fields(),
            label_separator: default_label_separator(),
        }
    }
}

fn default_src_fields() -> Vec<String> {
    DEFAULT_ASSET_SRC_FIELDS.iter().map(|s| s.to_string()).collect()
}

fn default_alt() -> String {
    DEFAULT_ASSET_ALT.to_string()
}

fn default_label_fields() -> Vec<String> {
    DEFAULT_FRAGMENT_LABEL_FIELDS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_label_separator() -> String {
    DEFAULT_LABEL_SEPARATOR.to_string()
}
