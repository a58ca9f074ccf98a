//! Decoder for the CMS multi-line JSON rich-text format.
//!
//! A multi-line field arrives as an array of nodes, each tagged with a
//! `nodeType`. Text nodes carry a `value` and optional `format.variants`;
//! reference nodes carry their lookup key in `data.path` (assets) or
//! `data.href` (content fragments); every other node type is structural
//! and nests its children under `content`.
//!
//! # Modules
//!
//! - [`error`]: Error types for decoding
//! - [`decode`]: Node and document decoding
//! - [`references`]: Reference collection decoding

pub mod decode;
pub mod error;
pub mod references;

pub use decode::{decode_document, decode_document_str, decode_node, DOCUMENT_KIND};
pub use error::{JsonError, JsonResult};
pub use references::{decode_references, decode_references_lenient, decode_references_str};
