//! The in-memory inventory: an ordered list of [`Record`]s that lives for the
//! whole process run. Insertion order is display order and save order.
//!
//! IDs are supplied by the user and are not unique. Deletion acts on the first
//! record with a matching ID and leaves any later duplicates alone.

use crate::model::Record;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<Record>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the inventory.
    pub fn add(&mut self, id: i64, title: impl Into<String>, artist: impl Into<String>) {
        self.records.push(Record::new(id, title, artist));
    }

    /// Remove the first record whose ID matches, returning it. `None` means
    /// nothing matched and the inventory is untouched.
    pub fn delete(&mut self, id: i64) -> Option<Record> {
        let pos = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(pos))
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Swap the whole inventory for `records`.
    pub fn replace(&mut self, records: Vec<Record>) {
        self.records.clear();
        self.records.extend(records);
    }

    /// The live records, in order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_in_order() {
        let mut inventory = Inventory::new();
        inventory.add(3, "C", "Artist C");
        inventory.add(1, "A", "Artist A");
        inventory.add(2, "B", "Artist B");

        let ids: Vec<i64> = inventory.all().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(inventory.len(), 3);
    }

    #[test]
    fn add_keeps_duplicate_ids() {
        let mut inventory = Inventory::new();
        inventory.add(1, "First", "X");
        inventory.add(1, "Second", "Y");
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn delete_removes_first_match_only() {
        let mut inventory = Inventory::new();
        inventory.add(1, "First", "X");
        inventory.add(2, "Other", "Z");
        inventory.add(1, "Second", "Y");

        let removed = inventory.delete(1).unwrap();
        assert_eq!(removed.title, "First");
        assert_eq!(
            inventory.all(),
            &[Record::new(2, "Other", "Z"), Record::new(1, "Second", "Y")]
        );
    }

    #[test]
    fn delete_missing_id_leaves_inventory_unchanged() {
        let mut inventory = Inventory::new();
        inventory.add(1, "First", "X");
        let before = inventory.clone();

        assert!(inventory.delete(42).is_none());
        assert_eq!(inventory, before);
    }

    #[test]
    fn replace_discards_previous_records() {
        let mut inventory = Inventory::new();
        inventory.add(9, "Gone", "Nobody");
        inventory.replace(vec![Record::new(1, "Kept", "Somebody")]);

        assert_eq!(inventory.all(), &[Record::new(1, "Kept", "Somebody")]);
    }

    #[test]
    fn clear_empties() {
        let mut inventory = Inventory::new();
        inventory.add(1, "A", "B");
        inventory.clear();
        assert!(inventory.is_empty());
    }
}
