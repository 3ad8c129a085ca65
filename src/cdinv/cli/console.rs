use cdinv::api::{CmdMessage, MessageLevel};
use cdinv::error::{CdError, Result};
use cdinv::model::Record;
use colored::Colorize;
use std::fmt::Display;
use std::io::{BufRead, Write};

const MENU: &str = "Menu

[l] Load Inventory from file
[a] Add CD
[i] Display Current Inventory
[d] Delete CD from Inventory
[s] Save Inventory to file
[x] Exit
";

const CHOICE_PROMPT: &str = "Which operation would you like to perform? [l, a, i, d, s or x]: ";
const TABLE_HEADER: &str = "======= The Current Inventory: =======";
const TABLE_COLUMNS: &str = "ID\tCD Title (by: Artist)";
const TABLE_FOOTER: &str = "======================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    Add,
    Display,
    Delete,
    Save,
    Exit,
}

impl MenuChoice {
    /// Accepts the six menu letters, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "l" => Some(MenuChoice::Load),
            "a" => Some(MenuChoice::Add),
            "i" => Some(MenuChoice::Display),
            "d" => Some(MenuChoice::Delete),
            "s" => Some(MenuChoice::Save),
            "x" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Line-oriented terminal I/O over any reader/writer pair.
///
/// Every read returns [`CdError::InputClosed`] once the input hits EOF, which
/// is the only way the retry loops here give up.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line without its line ending. Bytes that are not UTF-8 are
    /// replaced, so a garbled line is just bad input to the caller.
    pub fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(CdError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf)
            .trim_end_matches(['\n', '\r'])
            .to_string())
    }

    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompt and throw the answer away (press-ENTER style pauses).
    pub fn pause(&mut self, text: &str) -> Result<()> {
        self.prompt(text).map(|_| ())
    }

    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn render_menu(&mut self) -> Result<()> {
        self.line(MENU)
    }

    pub fn read_choice(&mut self) -> Result<MenuChoice> {
        loop {
            let input = self.prompt(CHOICE_PROMPT)?;
            if let Some(choice) = MenuChoice::parse(&input) {
                writeln!(self.output)?;
                return Ok(choice);
            }
            self.print_messages(&[CmdMessage::warning("Please enter a valid option!")])?;
        }
    }

    pub fn render_table(&mut self, records: &[Record]) -> Result<()> {
        writeln!(self.output, "{}", TABLE_HEADER.bold())?;
        writeln!(self.output, "{}\n", TABLE_COLUMNS)?;
        for record in records {
            writeln!(self.output, "{}", record)?;
        }
        writeln!(self.output, "{}", TABLE_FOOTER.bold())?;
        Ok(())
    }

    pub fn print_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        for message in messages {
            match message.level {
                MessageLevel::Success => writeln!(self.output, "{}", message.content.green())?,
                MessageLevel::Warning => writeln!(self.output, "{}", message.content.yellow())?,
                MessageLevel::Error => writeln!(self.output, "{}", message.content.red())?,
            }
        }
        Ok(())
    }
}
