//! The menu loop.
//!
//! The controller owns the [`InventoryApi`] (and through it the inventory and
//! the data file) plus the [`Console`]. It loads the data file once on entry,
//! then renders the menu, reads a choice and dispatches until the user picks
//! exit or the input runs out. Exiting never saves.

use super::console::{Console, MenuChoice};
use cdinv::api::{CmdMessage, InventoryApi};
use cdinv::error::{CdError, Result};
use cdinv::store::DataStore;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::debug;

const RELOAD_WARNING: &str =
    "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file.";
const RELOAD_CONFIRM: &str =
    "type 'yes' to continue and reload from file. otherwise reload will be canceled: ";
const RELOAD_CANCELED: &str =
    "canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu.";
const SAVE_CONFIRM: &str = "Save this inventory to file? [y/n] ";
const SAVE_CANCELED: &str =
    "The inventory was NOT saved to file. Press [ENTER] to return to the menu.";

enum Flow {
    Continue,
    Exit,
}

pub struct Controller<S: DataStore, R, W> {
    api: InventoryApi<S>,
    console: Console<R, W>,
}

impl<S: DataStore, R: BufRead, W: Write> Controller<S, R, W> {
    pub fn new(api: InventoryApi<S>, console: Console<R, W>) -> Self {
        Self { api, console }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (InventoryApi<S>, Console<R, W>) {
        (self.api, self.console)
    }

    /// Run until exit. Closed input counts as exit; any other error is fatal.
    pub fn run(&mut self) -> Result<()> {
        match self.session() {
            Err(CdError::InputClosed) => {
                debug!("input closed, leaving menu");
                Ok(())
            }
            other => other,
        }
    }

    fn session(&mut self) -> Result<()> {
        self.load_inventory()?;

        loop {
            self.console.render_menu()?;
            let choice = self.console.read_choice()?;
            debug!(?choice, "menu choice");

            if let Flow::Exit = self.dispatch(choice)? {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Exit => return Ok(Flow::Exit),
            MenuChoice::Load => self.handle_load()?,
            MenuChoice::Add => self.handle_add()?,
            MenuChoice::Display => self.show_inventory()?,
            MenuChoice::Delete => self.handle_delete()?,
            MenuChoice::Save => self.handle_save()?,
        }
        Ok(Flow::Continue)
    }

    fn load_inventory(&mut self) -> Result<()> {
        let result = self.api.load()?;
        self.console.print_messages(&result.messages)?;
        if let Some(path) = &result.missing_file {
            self.console.print_messages(&[CmdMessage::warning(format!(
                "File not found: {} does not exist!",
                path.display()
            ))])?;
        }
        Ok(())
    }

    fn show_inventory(&mut self) -> Result<()> {
        let result = self.api.list()?;
        self.console.render_table(&result.listed_records)
    }

    fn handle_load(&mut self) -> Result<()> {
        self.console
            .print_messages(&[CmdMessage::warning(RELOAD_WARNING)])?;
        let answer = self.console.prompt(RELOAD_CONFIRM)?;

        if answer.eq_ignore_ascii_case("yes") {
            self.console.line("reloading...")?;
            self.load_inventory()?;
        } else {
            self.console.pause(RELOAD_CANCELED)?;
        }
        self.show_inventory()
    }

    fn handle_add(&mut self) -> Result<()> {
        let id = self.read_id("Enter ID: ", "This is not an integer!")?;
        let title = self.console.prompt("What is the CD's title? ")?;
        let artist = self.console.prompt("What is the Artist's name? ")?;

        let result = self.api.add_cd(id, &title, &artist)?;
        self.console.print_messages(&result.messages)?;
        self.show_inventory()
    }

    fn handle_delete(&mut self) -> Result<()> {
        self.show_inventory()?;
        let id = self.read_id(
            "Which ID would you like to delete? ",
            "This is not a valid CD ID! Please enter an integer.",
        )?;

        let result = self.api.delete_cd(id)?;
        self.console.print_messages(&result.messages)?;
        self.show_inventory()
    }

    fn handle_save(&mut self) -> Result<()> {
        self.show_inventory()?;
        let answer = self.console.prompt(SAVE_CONFIRM)?;

        if answer.trim().eq_ignore_ascii_case("y") {
            let result = self.api.save()?;
            self.console.print_messages(&result.messages)?;
        } else {
            self.console.pause(SAVE_CANCELED)?;
        }
        Ok(())
    }

    /// Prompt until the answer parses as an `i64`. No retry cap.
    fn read_id(&mut self, prompt: &str, complaint: &str) -> Result<i64> {
        loop {
            let input = self.console.prompt(prompt)?;
            let message = match input.trim().parse::<i64>() {
                Ok(id) => return Ok(id),
                Err(e) => match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => format!(
                        "ID is out of range! Enter a whole number from {} to {}.",
                        i64::MIN,
                        i64::MAX
                    ),
                    _ => format!("{} ({})", complaint, e),
                },
            };
            debug!(input = %input, "rejected ID");
            self.console.print_messages(&[CmdMessage::error(message)])?;
        }
    }
}
