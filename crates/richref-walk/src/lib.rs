//! Document walker for richref.
//!
//! Walks a rich-text [`DocumentNode`] tree depth-first, pre-order, and
//! produces a [`RenderedNode`] tree of the same shape. Text runs and
//! containers pass through unchanged; every embed is resolved against a
//! [`ReferenceIndex`] and rendered by the [`RendererRegistry`] entry for its
//! record's type.
//!
//! A dangling key, an embed without a key, or an unregistered type degrades
//! to [`RenderedNode::UnresolvedEmbed`]. The only error the walker returns
//! is one produced by a renderer, passed through as is.
//!
//! # Quick Start
//!
//! ```rust
//! use richref_index::ReferenceIndex;
//! use richref_render::{MergedFields, RendererRegistry};
//! use richref_types::{DocumentNode, ReferenceRecord, RenderOutput};
//!
//! let records = vec![ReferenceRecord::new("/content/a", "AssetRef")
//!     .unwrap()
//!     .field("url", "http://x/a.png")];
//! let index = ReferenceIndex::build(&records);
//!
//! let mut renderers = RendererRegistry::new();
//! renderers.register_fn("AssetRef", |f: &MergedFields<'_>| {
//!     Ok(RenderOutput::image(f.require_str("url")?, ""))
//! });
//!
//! let doc = DocumentNode::container("p", vec![DocumentNode::embed_path("/content/a")]);
//! let out = richref_walk::resolve(&doc, &index, &renderers).unwrap();
//! assert_eq!(out.resolved_embeds().len(), 1);
//! ```
//!
//! [`DocumentNode`]: richref_types::DocumentNode
//! [`RenderedNode`]: richref_types::RenderedNode
//! [`RenderedNode::UnresolvedEmbed`]: richref_types::RenderedNode::UnresolvedEmbed
//! [`ReferenceIndex`]: richref_index::ReferenceIndex
//! [`RendererRegistry`]: richref_render::RendererRegistry

pub mod walker;

pub use walker::{resolve, resolve_with_stats, EmbedOutcome, Resolution, ResolveStats, Walker};
