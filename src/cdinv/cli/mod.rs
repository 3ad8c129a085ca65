//! # CLI Layer
//!
//! The terminal client for the inventory. This is the **only** place that:
//! - Reads stdin and writes stdout
//! - Decides colors and layout
//! - Turns fatal errors into an exit code (via `main.rs`)
//!
//! ## Structure
//!
//! - `run()`: Reads config, sets up logging, builds the API over a `FileStore`
//!   and hands control to the menu loop
//! - [`console`]: Menu, prompts, choice parsing, table and message rendering,
//!   generic over any `BufRead`/`Write` pair
//! - [`controller`]: The menu loop and per-command handlers
//!
//! ## Testing Strategy
//!
//! Console and controller tests feed scripted input through a byte slice and
//! inspect the captured output, with an `InMemoryStore` standing in for the
//! data file. End-to-end runs of the binary live in `tests/`.

mod console;
mod controller;

use cdinv::api::InventoryApi;
use cdinv::config::InventoryConfig;
use cdinv::error::Result;
use cdinv::logging;
use cdinv::store::fs::FileStore;
use console::Console;
use controller::Controller;
use std::io;
use std::path::PathBuf;
use tracing::info;

pub fn run() -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = InventoryConfig::load(&cwd)?;

    logging::init(&config.log_level);
    if !config.color {
        colored::control::set_override(false);
    }

    let data_path = config.data_path(&cwd);
    info!(path = %data_path.display(), "starting inventory session");

    let api = InventoryApi::new(FileStore::new(data_path));
    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    Controller::new(api, console).run()
}
