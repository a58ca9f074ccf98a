//! The path-keyed reference index.
//!
//! [`ReferenceIndex`] maps each record's path to the record itself. When two
//! records share a path, the one appearing later in the input wins; the
//! number of overwritten entries is kept for diagnostics.

use std::collections::BTreeMap;

use richref_types::ReferenceRecord;
use tracing::debug;

/// Read-only lookup from path to reference record.
#[derive(Clone, Default)]
pub struct ReferenceIndex<'a> {
    entries: BTreeMap<&'a str, &'a ReferenceRecord>,
    shadowed: usize,
}

impl std::fmt::Debug for ReferenceIndex<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceIndex")
            .field("entries", &self.entries.len())
            .field("shadowed", &self.shadowed)
            .finish()
    }
}

impl<'a> ReferenceIndex<'a> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over a reference collection.
    ///
    /// Later records overwrite earlier ones with the same path. An empty
    /// collection yields an empty index.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ReferenceRecord>,
    {
        let mut index = Self::new();
        for record in records {
            index.insert(record);
        }
        index
    }

    /// Insert one record, replacing any record already indexed at its path.
    ///
    /// Returns the replaced record, if any.
    pub fn insert(&mut self, record: &'a ReferenceRecord) -> Option<&'a ReferenceRecord> {
        let previous = self.entries.insert(record.path(), record);
        if let Some(prev) = previous {
            self.shadowed += 1;
            debug!(
                path = record.path(),
                replaced_type = prev.type_name(),
                type_name = record.type_name(),
                "duplicate reference path, later record wins"
            );
        }
        previous
    }

    /// Look up a record by path.
    pub fn get(&self, path: &str) -> Option<&'a ReferenceRecord> {
        self.entries.get(path).copied()
    }

    /// Returns `true` if a record is indexed at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of distinct paths in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records that were overwritten by a later duplicate.
    pub fn shadowed(&self) -> usize {
        self.shadowed
    }

    /// Indexed paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.keys().copied()
    }

    /// Indexed records in path order.
    pub fn records(&self) -> impl Iterator<Item = &'a ReferenceRecord> + '_ {
        self.entries.values().copied()
    }
}

impl<'a> FromIterator<&'a ReferenceRecord> for ReferenceIndex<'a> {
    fn from_iter<I: IntoIterator<Item = &'a ReferenceRecord>>(iter: I) -> Self {
        Self::build(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn record(path: &str, type_name: &str) -> ReferenceRecord {
        ReferenceRecord::new(path, type_name).unwrap()
    }

    #[test]
    fn empty_input_yields_empty_index() {
        let records: Vec<ReferenceRecord> = Vec::new();
        let index = ReferenceIndex::build(&records);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.shadowed(), 0);
    }

    #[test]
    fn every_record_retrievable_by_path() {
        let records = vec![
            record("/content/dam/a.jpg", "ImageRef"),
            record("/content/events/surf", "EventModel"),
        ];
        let index = ReferenceIndex::build(&records);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("/content/dam/a.jpg"), Some(&records[0]));
        assert_eq!(index.get("/content/events/surf"), Some(&records[1]));
        assert!(index.get("/content/missing").is_none());
    }

    #[test]
    fn duplicate_path_last_wins() {
        let records = vec![
            record("/content/a", "ImageRef").field("v", 1),
            record("/content/b", "ImageRef"),
            record("/content/a", "EventModel").field("v", 2),
        ];
        let index = ReferenceIndex::build(&records);
        assert_eq!(index.len(), 2);
        assert_eq!(index.shadowed(), 1);
        let winner = index.get("/content/a").unwrap();
        assert_eq!(winner.type_name(), "EventModel");
        assert_eq!(winner.get("v"), Some(json!(2)));
    }

    #[test]
    fn insert_returns_replaced_record() {
        let first = record("/content/a", "ImageRef");
        let second = record("/content/a", "EventModel");
        let mut index = ReferenceIndex::new();
        assert!(index.insert(&first).is_none());
        assert_eq!(index.insert(&second), Some(&first));
    }

    #[test]
    fn paths_are_sorted() {
        let records = vec![record("/c", "T"), record("/a", "T"), record("/b", "T")];
        let index: ReferenceIndex<'_> = records.iter().collect();
        let paths: Vec<_> = index.paths().collect();
        assert_eq!(paths, vec!["/a", "/b", "/c"]);
        assert_eq!(index.records().count(), 3);
    }

    proptest! {
        #[test]
        fn unique_paths_all_retrievable(paths in prop::collection::btree_set("/[a-z]{1,8}", 0..32)) {
            let records: Vec<_> = paths.iter().map(|p| record(p, "T")).collect();
            let index = ReferenceIndex::build(&records);
            prop_assert_eq!(index.len(), records.len());
            for r in &records {
                prop_assert_eq!(index.get(r.path()), Some(r));
            }
        }

        #[test]
        fn duplicates_resolve_to_last_occurrence(paths in prop::collection::vec("/[a-c]", 1..24)) {
            let records: Vec<_> = paths
                .iter()
                .enumerate()
                .map(|(i, p)| record(p, "T").field("pos", i))
                .collect();
            let index = ReferenceIndex::build(&records);
            for path in &paths {
                let last = records.iter().rposition(|r| r.path() == path).unwrap();
                prop_assert_eq!(index.get(path), Some(&records[last]));
            }
            prop_assert_eq!(index.len() + index.shadowed(), records.len());
        }
    }
}
