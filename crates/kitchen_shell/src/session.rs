//! Shell session
//!
//! A session owns one fridge and executes commands against it.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use kitchen_fridge::Fridge;

use crate::command::{Command, CommandError, CommandResult};
use crate::parser::{ParseError, Parser};

/// Default number of lines kept in history
pub const MAX_HISTORY: usize = 1000;

const HELP: &[&str] = &[
    "put <name> <qty>     store food",
    "take <name>          take the whole stack",
    "take <name> <qty>    take part of a stack",
    "list [--json]        names in the fridge",
    "show                 names with quantities",
    "space                free space left",
    "empty                throw everything out",
    "help                 this text",
    "quit | exit          leave",
];

/// A shell session over one fridge
#[derive(Debug)]
pub struct Session {
    fridge: Fridge,
    parser: Parser,
    /// Most recent lines, oldest first
    history: VecDeque<String>,
    /// Maximum history entries
    max_history: usize,
}

impl Session {
    /// Create a session over `fridge`
    pub fn new(fridge: Fridge) -> Self {
        Self::with_max_history(fridge, MAX_HISTORY)
    }

    /// Create a session keeping at most `max_history` lines
    pub fn with_max_history(fridge: Fridge, max_history: usize) -> Self {
        Self {
            fridge,
            parser: Parser::new(),
            history: VecDeque::with_capacity(max_history.min(MAX_HISTORY)),
            max_history,
        }
    }

    /// Get the fridge
    pub fn fridge(&self) -> &Fridge {
        &self.fridge
    }

    /// Most recent lines, oldest first
    pub fn history(&self) -> &VecDeque<String> {
        &self.history
    }

    fn record(&mut self, line: &str) {
        if self.max_history == 0 {
            return;
        }
        while self.history.len() >= self.max_history {
            self.history.pop_front();
        }
        self.history.push_back(line.trim().to_string());
    }

    /// Parse and execute one line
    pub fn execute_line(&mut self, line: &str) -> Result<CommandResult, CommandError> {
        let cmd = match self.parser.parse(line) {
            Ok(cmd) => cmd,
            Err(ParseError::EmptyInput) => return Ok(CommandResult::empty()),
            Err(e) => return Err(e.into()),
        };
        self.record(line);
        self.execute(&cmd)
    }

    /// Execute a parsed command
    pub fn execute(&mut self, cmd: &Command) -> Result<CommandResult, CommandError> {
        log::trace!("Executing {:?}", cmd);

        match cmd.name.as_str() {
            "put" => {
                cmd.expect_at_most(2)?;
                let name = cmd.require_name(0)?;
                let quantity = cmd
                    .quantity_arg(1)?
                    .ok_or_else(|| CommandError::MissingArgument("qty".to_string()))?;
                self.fridge.deposit(name, quantity)?;
                Ok(CommandResult::with_message(format!(
                    "Stored {} {} ({} free)",
                    quantity,
                    name,
                    self.fridge.remaining_capacity()
                )))
            }

            "take" => {
                cmd.expect_at_most(2)?;
                let name = cmd.require_name(0)?;
                match cmd.quantity_arg(1)? {
                    Some(quantity) => {
                        let taken = self.fridge.withdraw_some(name, quantity)?;
                        Ok(CommandResult::with_message(format!("Took {}", taken)))
                    }
                    None => match self.fridge.withdraw_all(name) {
                        Some(taken) => Ok(CommandResult::with_message(format!("Took {}", taken))),
                        None => Ok(CommandResult::with_message(format!("No {} in fridge", name))),
                    },
                }
            }

            "list" => {
                cmd.expect_at_most(0)?;
                let names = self.fridge.list_names();
                if cmd.has_flag("json") {
                    Ok(CommandResult::with_message(serde_json::to_string(&names)?))
                } else {
                    Ok(CommandResult::empty().add_lines(names))
                }
            }

            "show" => {
                cmd.expect_at_most(0)?;
                Ok(CommandResult::empty()
                    .add_lines(self.fridge.entries().map(|entry| entry.to_string())))
            }

            "space" => {
                cmd.expect_at_most(0)?;
                Ok(CommandResult::with_message(format!(
                    "{} of {} free",
                    self.fridge.remaining_capacity(),
                    self.fridge.capacity()
                )))
            }

            "empty" => {
                cmd.expect_at_most(0)?;
                self.fridge.reset();
                Ok(CommandResult::with_message("Fridge emptied"))
            }

            "help" => Ok(CommandResult::empty().add_lines(HELP.iter().copied())),

            "quit" | "exit" => Ok(CommandResult::quit()),

            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    /// Run until end of input or `quit`
    ///
    /// Command failures are written as `error:` lines and the session goes
    /// on; only I/O errors end the loop early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W, prompt: bool) -> io::Result<()> {
        if prompt {
            write!(output, "fridge> ")?;
            output.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            match self.execute_line(&line) {
                Ok(result) => {
                    for out in result.output_lines() {
                        writeln!(output, "{}", out)?;
                    }
                    if result.is_quit() {
                        break;
                    }
                }
                Err(e) => {
                    log::debug!("Command failed: {}", e);
                    writeln!(output, "error: {}", e)?;
                }
            }

            if prompt {
                write!(output, "fridge> ")?;
                output.flush()?;
            }
        }

        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Fridge::default())
    }
}
