use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::DataStore;

pub fn run<S: DataStore>(inventory: &Inventory, store: &mut S) -> Result<CmdResult> {
    store.save(inventory.all())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} CD(s) to {}",
        inventory.len(),
        store.path().display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn writes_full_inventory() {
        let mut store = InMemoryStore::new();
        let mut inventory = Inventory::new();
        inventory.add(1, "Abbey Road", "The Beatles");
        inventory.add(2, "Rumours", "Fleetwood Mac");

        let result = run(&inventory, &mut store).unwrap();

        assert_eq!(store.snapshot(), Some(inventory.all()));
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.starts_with("Saved 2 CD(s)"));
    }

    #[test]
    fn saves_empty_inventory() {
        let mut store = InMemoryStore::with_records(vec![Record::new(1, "Old", "Data")]);
        run(&Inventory::new(), &mut store).unwrap();
        assert_eq!(store.snapshot(), Some(&[][..]));
    }

    #[test]
    fn write_failure_propagates() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let inventory = Inventory::new();

        assert!(run(&inventory, &mut store).is_err());
        assert!(store.snapshot().is_none());
    }
}
