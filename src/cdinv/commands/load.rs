use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::{DataStore, LoadOutcome};

/// Replace the inventory with the persisted snapshot.
///
/// Unsaved records are discarded. When the data file is missing the inventory
/// ends up empty and the result carries the missing path in `missing_file`.
/// On a read error the inventory is left exactly as it was.
pub fn run<S: DataStore>(inventory: &mut Inventory, store: &S) -> Result<CmdResult> {
    let outcome = store.load()?;
    let mut result = CmdResult::default();

    if let LoadOutcome::Missing(path) = &outcome {
        result.missing_file = Some(path.clone());
    }

    inventory.replace(outcome.into_records());
    Ok(result)
}
