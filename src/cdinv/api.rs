//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! owner of mutable state: the in-memory [`Inventory`] and the [`DataStore`]
//! that persists it. Whoever holds an `InventoryApi` holds the inventory; there
//! are no process-wide singletons.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns** the inventory and the storage backend
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no terminal I/O and holds no business logic of its own.
//!
//! ## Generic Over DataStore
//!
//! - Production: `InventoryApi<FileStore>`
//! - Testing: `InventoryApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::DataStore;

pub struct InventoryApi<S: DataStore> {
    store: S,
    inventory: Inventory,
}

impl<S: DataStore> InventoryApi<S> {
    /// Start with an empty inventory. Call [`InventoryApi::load`] to read the
    /// persisted snapshot.
    pub fn new(store: S) -> Self {
        Self {
            store,
            inventory: Inventory::new(),
        }
    }

    /// Replace the in-memory inventory with the persisted snapshot.
    pub fn load(&mut self) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.inventory, &self.store)
    }

    pub fn add_cd(&mut self, id: i64, title: &str, artist: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.inventory, id, title, artist)
    }

    pub fn delete_cd(&mut self, id: i64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.inventory, id)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&self.inventory, &mut self.store)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
