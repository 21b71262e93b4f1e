//! Lookup of destination users by identification number

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::records::DestinationUserRecord;

/// Destination users keyed by identification number
///
/// Built once per run. When several users share a number, the first one in
/// input order wins and later duplicates are ignored.
#[derive(Debug, Default)]
pub struct DestinationIndex<'a> {
    by_number: HashMap<&'a str, &'a DestinationUserRecord>,
    duplicates: usize,
}

impl<'a> DestinationIndex<'a> {
    pub fn build(records: &'a [DestinationUserRecord]) -> Self {
        let mut index = Self {
            by_number: HashMap::with_capacity(records.len()),
            duplicates: 0,
        };
        for record in records {
            match index.by_number.entry(record.identification_number.as_str()) {
                Entry::Occupied(_) => index.duplicates += 1,
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
            }
        }
        index
    }

    pub fn find(&self, identification_number: &str) -> Option<&'a DestinationUserRecord> {
        self.by_number.get(identification_number).copied()
    }

    /// Number of distinct identification numbers
    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }

    /// Records shadowed by an earlier record with the same number
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}
