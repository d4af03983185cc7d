//! Keyed diff between the dependency records of two file versions.

use std::collections::HashMap;

use super::types::{ChangeEntry, DependencyRecord};

/// Records keyed by `group:identifier`, in first-insertion order.
///
/// Re-inserting a key replaces the record but keeps its original position.
#[derive(Debug, Default)]
struct KeyedRecords {
    order: Vec<(String, DependencyRecord)>,
    index: HashMap<String, usize>,
}

impl KeyedRecords {
    fn from_records(records: &[DependencyRecord]) -> Self {
        let mut keyed = Self::default();
        for record in records {
            keyed.insert(record.clone());
        }
        keyed
    }

    fn insert(&mut self, record: DependencyRecord) {
        let key = record.key();
        match self.index.get(&key) {
            Some(&position) => self.order[position].1 = record,
            None => {
                self.index.insert(key.clone(), self.order.len());
                self.order.push((key, record));
            }
        }
    }

    fn get(&self, key: &str) -> Option<&DependencyRecord> {
        self.index.get(key).map(|&position| &self.order[position].1)
    }

    fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &DependencyRecord)> {
        self.order.iter().map(|(key, record)| (key.as_str(), record))
    }
}

/// Compute the classified changes between two record sets.
///
/// Output order: every pre-commit key in its first-seen order (paired with
/// its post-commit record or marked removed), then every key that only
/// exists after the commit, in its first-seen order. Duplicate keys within
/// one side keep the last record.
pub fn diff(before: &[DependencyRecord], after: &[DependencyRecord]) -> Vec<ChangeEntry> {
    let before = KeyedRecords::from_records(before);
    let after = KeyedRecords::from_records(after);

    let mut changes = Vec::with_capacity(before.order.len() + after.order.len());

    for (key, previous) in before.iter() {
        let entry = match after.get(key) {
            Some(current) => ChangeEntry::paired(previous.clone(), current.clone()),
            None => ChangeEntry::removal(previous.clone()),
        };
        changes.push(entry);
    }

    for (key, current) in after.iter() {
        if !before.contains(key) {
            changes.push(ChangeEntry::addition(current.clone()));
        }
    }

    changes
}
