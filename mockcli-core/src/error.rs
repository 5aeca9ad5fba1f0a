//! Structured error types for the harness itself.
//!
//! These describe broken test fixtures (unknown command paths, bad flag
//! declarations), not failures of the commands under test. Handler errors
//! travel separately as `anyhow::Error` values returned by actions.

use thiserror::Error;

/// Errors raised while setting up or dispatching an invocation.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// No command matched the given name path.
    #[error("could not find command '{path}'")]
    UnknownCommand { path: String },

    /// An invocation was attempted with no command tokens at all.
    #[error("empty command path")]
    EmptyPath,

    /// Two sibling commands share a name, so resolution would be ambiguous.
    #[error("duplicate command name '{name}' under '{parent}'")]
    DuplicateCommand { parent: String, name: String },

    /// The resolved command declares no action callback.
    #[error("command '{path}' has no action")]
    MissingAction { path: String },

    /// The synthesized flag set rejected the input.
    #[error("failed to parse flags for '{command}': {source}")]
    FlagParse {
        command: String,
        #[source]
        source: clap::Error,
    },
}

/// Result type alias for harness-internal operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

impl HarnessError {
    pub fn unknown_command(path: impl Into<String>) -> Self {
        Self::UnknownCommand { path: path.into() }
    }

    pub fn duplicate_command(parent: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateCommand {
            parent: parent.into(),
            name: name.into(),
        }
    }

    pub fn missing_action(path: impl Into<String>) -> Self {
        Self::MissingAction { path: path.into() }
    }

    pub fn flag_parse(command: impl Into<String>, source: clap::Error) -> Self {
        Self::FlagParse {
            command: command.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_path() {
        let err = HarnessError::unknown_command("paych add-funds");
        assert_eq!(err.to_string(), "could not find command 'paych add-funds'");
    }

    #[test]
    fn duplicate_names_both_levels() {
        let err = HarnessError::duplicate_command("wallet", "balance");
        assert!(err.to_string().contains("wallet"));
        assert!(err.to_string().contains("balance"));
    }
}
