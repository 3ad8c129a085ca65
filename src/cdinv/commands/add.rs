use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::Inventory;
use tracing::debug;

pub fn run(inventory: &mut Inventory, id: i64, title: &str, artist: &str) -> Result<CmdResult> {
    inventory.add(id, title.trim(), artist.trim());
    debug!(id, count = inventory.len(), "added record");
    Ok(CmdResult::default())
}
