//! Text driver errors.

use rochade_core::{MoveError, SquareError, UnknownPieceName};

/// Errors that can occur while reading and parsing commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A command that needs an argument was given none.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command name.
        command: String,
    },

    /// A `set` command named an unknown option or value.
    #[error("invalid option: {name} {value}")]
    InvalidOption {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// A square argument could not be parsed.
    #[error("invalid square: {source}")]
    InvalidSquare {
        /// The underlying square error.
        #[from]
        source: SquareError,
    },

    /// A promotion piece name was not recognized.
    #[error("invalid piece: {source}")]
    InvalidPiece {
        /// The underlying piece name error.
        #[from]
        source: UnknownPieceName,
    },

    /// A move argument could not be parsed.
    #[error("invalid move: {source}")]
    InvalidMove {
        /// The underlying move error.
        #[from]
        source: MoveError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
