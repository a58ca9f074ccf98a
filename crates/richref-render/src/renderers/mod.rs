//! Built-in rendering rules.
//!
//! - [`asset`] -- Image output for asset references
//! - [`fragment`] -- Link output for content-fragment references

pub mod asset;
pub mod fragment;

pub use asset::AssetRenderer;
pub use fragment::{FragmentRenderer, HrefTemplate};
