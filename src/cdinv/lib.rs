//! # cdinv Architecture
//!
//! cdinv keeps an inventory of compact discs: an ordered list of records (ID,
//! Title, Artist) held in memory, edited through a text menu, and saved to or
//! restored from a single data file on explicit request.
//!
//! The library holds everything except the terminal. The binary (`main.rs` and
//! `cli/`) renders the menu, reads the user's input and drives the loop.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu, prompts, table rendering, the controller loop      │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Inventory and the DataStore                     │
//! │  - Thin dispatch to commands, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, delete, list, load, save                            │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, wholesale load/save                     │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Memory vs Disk
//!
//! The in-memory inventory and the data file are independent. They drift apart
//! as soon as a record is added or deleted and only meet again on an explicit
//! save (memory → disk) or reload (disk → memory, discarding unsaved changes).
//! Nothing is ever saved implicitly.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, owner of all mutable state
//! - [`commands`]: Business logic for each menu operation
//! - [`inventory`]: The ordered in-memory record list
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Record` type and its serialized form
//! - [`config`]: Optional `cdinv.json` configuration
//! - [`logging`]: Diagnostic logging setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod model;
pub mod store;
