//! Line-oriented text driver for a rochade game.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use error::CliError;
pub use session::{Session, SessionConfig};
