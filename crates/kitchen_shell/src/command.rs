//! Command representation
//!
//! Defines the parsed command, its errors and results.

use crate::parser::ParseError;
use kitchen_fridge::FridgeError;

/// Command error
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Fridge(#[from] FridgeError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Command name
    pub name: String,
    /// Positional arguments
    pub args: Vec<String>,
    /// Flags (--name)
    pub flags: Vec<String>,
}

impl Command {
    /// Create a new command
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            flags: Vec::new(),
        }
    }

    /// Add a positional argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add a flag
    pub fn flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.push(flag.into());
        self
    }

    /// Check if a flag is set
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    /// Get argument at index
    pub fn get_arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(|s| s.as_str())
    }

    /// Get required argument
    pub fn require_arg(&self, index: usize, name: &str) -> Result<&str, CommandError> {
        self.get_arg(index)
            .ok_or_else(|| CommandError::MissingArgument(name.to_string()))
    }

    /// Get a required food name, rejecting blank names
    pub fn require_name(&self, index: usize) -> Result<&str, CommandError> {
        let name = self.require_arg(index, "name")?;
        if name.trim().is_empty() {
            return Err(CommandError::InvalidArguments(
                "food name must not be empty".to_string(),
            ));
        }
        Ok(name)
    }

    /// Parse an optional quantity argument
    pub fn quantity_arg(&self, index: usize) -> Result<Option<u32>, CommandError> {
        self.get_arg(index)
            .map(|raw| {
                raw.parse::<u32>().map_err(|_| {
                    CommandError::InvalidArguments(format!("'{}' is not a quantity", raw))
                })
            })
            .transpose()
    }

    /// Fail if more than `max` arguments were given
    pub fn expect_at_most(&self, max: usize) -> Result<(), CommandError> {
        if self.args.len() > max {
            return Err(CommandError::InvalidArguments(format!(
                "{} takes at most {} argument(s)",
                self.name, max
            )));
        }
        Ok(())
    }
}

/// Result of command execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines
    output: Vec<String>,
    /// Session should end
    quit: bool,
}

impl CommandResult {
    /// Create empty result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create result with a single line
    pub fn with_message(message: impl Into<String>) -> Self {
        Self::empty().add_line(message)
    }

    /// Create a result ending the session
    pub fn quit() -> Self {
        Self {
            output: Vec::new(),
            quit: true,
        }
    }

    /// Add output line
    pub fn add_line(mut self, line: impl Into<String>) -> Self {
        self.output.push(line.into());
        self
    }

    /// Add multiple output lines
    pub fn add_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Get output lines
    pub fn output_lines(&self) -> &[String] {
        &self.output
    }

    /// Check if the session should end
    pub fn is_quit(&self) -> bool {
        self.quit
    }
}
