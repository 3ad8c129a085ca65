//! # cdinv binary
//!
//! The binary is intentionally thin: the terminal client lives in `cli/`, and
//! this file only invokes `cli::run()` and handles process termination.
//!
//! Everything the menu does goes through `cdinv::api::InventoryApi`. The CLI
//! layer is responsible for all user-facing concerns: reading input, rendering
//! the menu and the inventory table, and reporting fatal errors.
//!
//! Recoverable problems (a missing data file, a non-numeric ID, a bad menu
//! letter) are handled inside the loop. Only unrecoverable I/O or decoding
//! failures reach `main`, which prints them to stderr and exits with status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
