//! Two-level grouping
//!
//! A group key and a subgroup key each get their own independent index. The
//! subgroup key should include the group key when subgroups may repeat across
//! groups (for example `(objective_id, title)`).

use crate::index::FirstOccurrenceIndex;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Header flags for one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupFlags {
    /// Row prints the group header
    pub first_in_group: bool,
    /// Row prints the subgroup header
    pub first_in_subgroup: bool,
}

/// Compute header flags for every record, in input order
pub fn two_level_flags<T, G, S, Id, GF, SF, IF>(
    records: &[T],
    group_key: GF,
    subgroup_key: SF,
    id_fn: IF,
) -> Vec<GroupFlags>
where
    G: Hash + Eq,
    S: Hash + Eq,
    Id: PartialEq,
    GF: Fn(&T) -> G,
    SF: Fn(&T) -> S,
    IF: Fn(&T) -> Id,
{
    let groups = FirstOccurrenceIndex::build(records, &group_key, &id_fn);
    let subgroups = FirstOccurrenceIndex::build(records, &subgroup_key, &id_fn);

    records
        .iter()
        .map(|record| GroupFlags {
            first_in_group: groups.is_first_for_key(record, &group_key, &id_fn),
            first_in_subgroup: subgroups.is_first_for_key(record, &subgroup_key, &id_fn),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Row {
        id: u32,
        objective: &'static str,
        title: &'static str,
    }

    fn flags(first_in_group: bool, first_in_subgroup: bool) -> GroupFlags {
        GroupFlags {
            first_in_group,
            first_in_subgroup,
        }
    }

    #[test]
    fn objective_and_title_levels() {
        let rows = vec![
            Row { id: 1, objective: "growth", title: "sales" },
            Row { id: 2, objective: "growth", title: "sales" },
            Row { id: 3, objective: "growth", title: "leads" },
            Row { id: 4, objective: "quality", title: "sales" },
        ];

        let result = two_level_flags(&rows, |r| r.objective, |r| (r.objective, r.title), |r| r.id);

        assert_eq!(
            result,
            vec![
                flags(true, true),
                flags(false, false),
                flags(false, true),
                flags(true, true),
            ]
        );
    }

    #[test]
    fn title_only_key_spans_groups() {
        let rows = vec![
            Row { id: 1, objective: "growth", title: "sales" },
            Row { id: 2, objective: "quality", title: "sales" },
        ];

        let result = two_level_flags(&rows, |r| r.objective, |r| r.title, |r| r.id);
        assert_eq!(result, vec![flags(true, true), flags(true, false)]);
    }

    #[test]
    fn empty_records() {
        let rows: Vec<Row> = Vec::new();
        assert!(two_level_flags(&rows, |r| r.objective, |r| r.title, |r| r.id).is_empty());
    }
}
