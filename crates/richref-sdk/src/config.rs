use std::path::Path;

use richref_render::RendererConfig;
use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SdkResult};
use crate::query::{QueryRequest, DEFAULT_ENDPOINT, EVENTS_PAGINATED, EVENT_BY_SLUG};

/// Top-level SDK configuration.
///
/// Every section is optional in TOML and falls back to its defaults:
///
/// ```toml
/// [query]
/// endpoint = "https://publish.example/graphql/execute.json"
/// page_size = 4
///
/// [view]
/// fallback_element = "span"
///
/// [[renderers.assets]]
/// type_name = "ImageRef"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub renderers: RendererConfig,
    pub view: ViewConfig,
    pub query: QueryConfig,
}

impl EngineConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> SdkResult<Self> {
        toml::from_str(s).map_err(|e| SdkError::Config(e.to_string()))
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Element used for container kinds the view has no mapping for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackElement {
    #[default]
    Div,
    Span,
}

/// HTML view options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub fallback_element: FallbackElement,
    /// Message shown when the detail query matched no single event.
    pub missing_event_message: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fallback_element: FallbackElement::Div,
            missing_event_message: "Missing data, event could not be rendered.".to_string(),
        }
    }
}

/// Persisted-query settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub endpoint: String,
    pub detail_query: String,
    pub list_query: String,
    /// Events per page for the list query.
    pub page_size: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            detail_query: EVENT_BY_SLUG.to_string(),
            list_query: EVENTS_PAGINATED.to_string(),
            page_size: 2,
        }
    }
}

impl QueryConfig {
    /// Request path for the detail query.
    pub fn detail_path(&self, slug: &str) -> String {
        QueryRequest::new(&self.detail_query)
            .param("slug", slug)
            .path(&self.endpoint)
    }

    /// Request path for the list query.
    pub fn list_path(&self) -> String {
        QueryRequest::new(&self.list_query)
            .param("count", self.page_size)
            .path(&self.endpoint)
    }
}
