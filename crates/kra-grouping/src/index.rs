//! First-occurrence index
//!
//! Provides [`FirstOccurrenceIndex`], built in a single forward pass.

use indexmap::IndexMap;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq)]
struct GroupEntry<Id> {
    first: Id,
    len: usize,
}

/// Maps each group key to the id of its first record
///
/// Keys iterate in first-seen order.
#[derive(Debug, Clone)]
pub struct FirstOccurrenceIndex<K, Id> {
    groups: IndexMap<K, GroupEntry<Id>>,
}

impl<K: Hash + Eq, Id: PartialEq> FirstOccurrenceIndex<K, Id> {
    /// Build the index over `records` in order
    pub fn build<'a, T, KF, IF>(
        records: impl IntoIterator<Item = &'a T>,
        key_fn: KF,
        id_fn: IF,
    ) -> Self
    where
        T: 'a,
        KF: Fn(&T) -> K,
        IF: Fn(&T) -> Id,
    {
        let mut groups: IndexMap<K, GroupEntry<Id>> = IndexMap::new();
        for record in records {
            groups
                .entry(key_fn(record))
                .and_modify(|entry| entry.len += 1)
                .or_insert_with(|| GroupEntry {
                    first: id_fn(record),
                    len: 1,
                });
        }
        Self { groups }
    }

    /// Id of the first record with `key`
    #[inline]
    #[must_use]
    pub fn first_id(&self, key: &K) -> Option<&Id> {
        self.groups.get(key).map(|entry| &entry.first)
    }

    /// Whether `id` is the first record of group `key`
    #[inline]
    #[must_use]
    pub fn is_first(&self, key: &K, id: &Id) -> bool {
        self.first_id(key).is_some_and(|first| first == id)
    }

    /// Whether `record` is the first of its group
    #[inline]
    pub fn is_first_for_key<T, KF, IF>(&self, record: &T, key_fn: KF, id_fn: IF) -> bool
    where
        KF: Fn(&T) -> K,
        IF: Fn(&T) -> Id,
    {
        self.is_first(&key_fn(record), &id_fn(record))
    }

    /// Number of records sharing `key`, zero if unseen
    #[inline]
    #[must_use]
    pub fn group_len(&self, key: &K) -> usize {
        self.groups.get(key).map_or(0, |entry| entry.len)
    }

    /// Group keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    /// Number of distinct groups
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no records were indexed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Free-function form of [`FirstOccurrenceIndex::build`]
pub fn build_first_occurrence_index<T, K, Id, KF, IF>(
    records: &[T],
    key_fn: KF,
    id_fn: IF,
) -> FirstOccurrenceIndex<K, Id>
where
    K: Hash + Eq,
    Id: PartialEq,
    KF: Fn(&T) -> K,
    IF: Fn(&T) -> Id,
{
    FirstOccurrenceIndex::build(records.iter(), key_fn, id_fn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct Row {
        id: u32,
        key: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, key: "A" },
            Row { id: 2, key: "A" },
            Row { id: 3, key: "B" },
        ]
    }

    #[test]
    fn first_occurrence_per_key() {
        let rows = rows();
        let index = build_first_occurrence_index(&rows, |r| r.key, |r| r.id);

        let firsts: Vec<u32> = rows
            .iter()
            .filter(|r| index.is_first_for_key(*r, |r| r.key, |r| r.id))
            .map(|r| r.id)
            .collect();
        assert_eq!(firsts, vec![1, 3]);
    }

    #[test]
    fn keys_keep_first_seen_order() {
        let rows = vec![
            Row { id: 1, key: "Z" },
            Row { id: 2, key: "A" },
            Row { id: 3, key: "Z" },
        ];
        let index = build_first_occurrence_index(&rows, |r| r.key, |r| r.id);
        assert_eq!(index.keys().copied().collect::<Vec<_>>(), vec!["Z", "A"]);
    }

    #[test]
    fn group_lengths() {
        let rows = rows();
        let index = build_first_occurrence_index(&rows, |r| r.key, |r| r.id);
        assert_eq!(index.group_len(&"A"), 2);
        assert_eq!(index.group_len(&"B"), 1);
        assert_eq!(index.group_len(&"C"), 0);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn unknown_key_is_never_first() {
        let rows = rows();
        let index = build_first_occurrence_index(&rows, |r| r.key, |r| r.id);
        assert!(!index.is_first(&"C", &1));
        assert_eq!(index.first_id(&"C"), None);
    }

    #[test]
    fn empty_input() {
        let index =
            build_first_occurrence_index::<Row, &str, u32, _, _>(&[], |r| r.key, |r| r.id);
        assert!(index.is_empty());
    }

    #[test]
    fn owned_composite_keys_clone_independently() {
        let rows = rows();
        let index = build_first_occurrence_index(
            &rows,
            |r| (r.key.to_string(), r.id % 2),
            |r| r.id,
        );
        let copy = index.clone();
        drop(index);

        assert_eq!(copy.len(), 3);
        assert!(copy.is_first(&("A".to_string(), 1), &1));
        assert!(!copy.is_first(&("A".to_string(), 1), &3));
        assert_eq!(copy.first_id(&("A".to_string(), 0)), Some(&2));
    }

    #[test]
    fn duplicate_ids_across_groups() {
        // Ids only need to be unique within a group
        let rows = vec![Row { id: 7, key: "A" }, Row { id: 7, key: "B" }];
        let index = build_first_occurrence_index(&rows, |r| r.key, |r| r.id);
        assert!(index.is_first(&"A", &7));
        assert!(index.is_first(&"B", &7));
    }
}
