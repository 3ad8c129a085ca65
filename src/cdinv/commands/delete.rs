use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use tracing::debug;

pub fn run(inventory: &mut Inventory, id: i64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match inventory.delete(id) {
        Some(record) => {
            debug!(id, title = %record.title, "deleted record");
            result.add_message(CmdMessage::success("The CD was removed"));
        }
        None => {
            debug!(id, "no record to delete");
            result.add_message(CmdMessage::warning("Could not find this CD!"));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Record;

    #[test]
    fn removes_matching_record() {
        let mut inventory = Inventory::new();
        inventory.add(1, "Abbey Road", "The Beatles");
        inventory.add(2, "Rumours", "Fleetwood Mac");

        let result = run(&mut inventory, 1).unwrap();

        assert_eq!(inventory.all(), &[Record::new(2, "Rumours", "Fleetwood Mac")]);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn only_first_duplicate_goes() {
        let mut inventory = Inventory::new();
        inventory.add(7, "Early", "A");
        inventory.add(7, "Late", "B");

        run(&mut inventory, 7).unwrap();

        assert_eq!(inventory.all(), &[Record::new(7, "Late", "B")]);
    }

    #[test]
    fn reports_not_found() {
        let mut inventory = Inventory::new();
        inventory.add(1, "Abbey Road", "The Beatles");
        let before = inventory.clone();

        let result = run(&mut inventory, 99).unwrap();

        assert_eq!(inventory, before);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Could not find this CD!");
    }
}
