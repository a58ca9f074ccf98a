//! Type renderer dispatch for richref.
//!
//! Every resolved embed is rendered by the rule registered for its record's
//! declared type. The dispatch table is data: applications register extra
//! type names without touching the walker, and a type with no registered
//! rule is simply left unrendered.
//!
//! # Quick Start
//!
//! ```rust
//! use richref_render::{MergedFields, RendererRegistry};
//! use richref_types::{FieldMap, ReferenceRecord, RenderOutput};
//!
//! let mut registry = RendererRegistry::with_defaults();
//! registry.register_fn("AssetRef", |f: &MergedFields<'_>| {
//!     Ok(RenderOutput::image(f.require_str("url")?, "asset"))
//! });
//!
//! let record = ReferenceRecord::new("/content/a", "AssetRef")
//!     .unwrap()
//!     .field("url", "http://x/a.png");
//! let node = FieldMap::new();
//! let output = registry
//!     .get("AssetRef")
//!     .unwrap()
//!     .render(&MergedFields::new(&record, &node))
//!     .unwrap();
//! assert_eq!(output, RenderOutput::image("http://x/a.png", "asset"));
//! ```

pub mod config;
pub mod error;
pub mod fields;
pub mod registry;
pub mod renderer;
pub mod renderers;

pub use config::{AssetBinding, FragmentBinding, RendererConfig};
pub use error::{RenderError, RenderResult};
pub use fields::{FieldSource, MergedFields};
pub use registry::RendererRegistry;
pub use renderer::{FnRenderer, ReferenceRenderer};
pub use renderers::{AssetRenderer, FragmentRenderer, HrefTemplate};
