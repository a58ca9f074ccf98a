//! Foundation types for richref.
//!
//! This crate provides the data model shared by every other richref crate:
//! the reference records supplied alongside a rich-text document, the
//! document tree itself, and the render-ready tree the walker produces.
//!
//! # Key Types
//!
//! - [`ReferenceRecord`]: Metadata for an asset or content fragment, keyed by path
//! - [`DocumentNode`]: Closed rich-text AST: text runs, containers, embeds
//! - [`EmbedKey`] / [`LookupKey`]: The node-scoped key an embed is resolved by
//! - [`RenderedNode`]: Output tree, isomorphic to the input document
//! - [`RenderOutput`]: What a type renderer produces for one embed
//! - [`FieldMap`]: Ordered map of loosely typed fields

pub mod document;
pub mod error;
pub mod fields;
pub mod record;
pub mod rendered;

pub use document::{DocumentNode, EmbedKey, LookupKey};
pub use error::TypeError;
pub use fields::{value_as_text, FieldMap};
pub use record::{ReferenceRecord, PATH_FIELD, TYPE_NAME_FIELD};
pub use rendered::{RenderOutput, RenderedNode};
