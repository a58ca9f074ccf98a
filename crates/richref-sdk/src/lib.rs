//! High-level SDK for richref.
//!
//! Ties the reference resolution engine to the event content model: query
//! response contracts, persisted-query requests, routes, and an HTML view of
//! resolved rich text. This is the main entry point for applications.
//!
//! # Quick Start
//!
//! ```rust
//! use richref_sdk::{Engine, EventDetailResponse};
//! use serde_json::json;
//!
//! let response = EventDetailResponse::from_value(json!({
//!     "data": {"eventList": {
//!         "items": [{
//!             "_path": "/content/dam/events/surf-camp",
//!             "eventName": "Surf Camp",
//!             "description": {"json": [
//!                 {"nodeType": "paragraph", "content": [
//!                     {"nodeType": "reference", "data": {"path": "/content/dam/surf.jpg"}}
//!                 ]}
//!             ]}
//!         }],
//!         "_references": [
//!             {"_path": "/content/dam/surf.jpg", "__typename": "ImageRef",
//!              "_publishUrl": "https://publish.example/surf.jpg"}
//!         ]
//!     }}
//! }))
//! .unwrap();
//!
//! let engine = Engine::default();
//! let view = engine.render_event_detail(&response).unwrap();
//! assert_eq!(view.stats.resolved, 1);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod query;
pub mod routes;
pub mod view;

pub use config::{EngineConfig, FallbackElement, QueryConfig, ViewConfig};
pub use engine::{Engine, EventDetailView};
pub use error::{SdkError, SdkResult};
pub use model::{Event, EventDetailResponse, EventList, EventsPage, ImageAsset, RichTextField};
pub use query::QueryRequest;
pub use routes::{editor_item_id, event_route, parse_event_route, slug_from_route_param};

// Re-export key types
pub use richref_index::ReferenceIndex;
pub use richref_render::{MergedFields, RenderError, RendererConfig, RendererRegistry};
pub use richref_types::{DocumentNode, ReferenceRecord, RenderOutput, RenderedNode};
pub use richref_walk::{Resolution, ResolveStats};
