//! Reference index for richref.
//!
//! Builds a read-only lookup from record path to [`ReferenceRecord`] out of
//! the flat reference collection that accompanies a rich-text document.
//! The index borrows the records; it is built once per document render and
//! discarded afterwards.
//!
//! # Key Types
//!
//! - [`ReferenceIndex`] -- BTreeMap-backed path lookup with last-wins duplicates
//!
//! [`ReferenceRecord`]: richref_types::ReferenceRecord

pub mod index;

pub use index::ReferenceIndex;
