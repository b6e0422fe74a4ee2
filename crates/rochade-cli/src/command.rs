//! Command parsing.

use rochade_core::{NormalMove, PieceKind, PromotionPiece, Square};

use crate::error::CliError;

/// A parsed command line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `e2e4`, `e7e8q`, `move e2e4` or `move e7e8 knight` -- play a normal move.
    Play(NormalMove),
    /// `resign` -- the side to move gives up.
    Resign,
    /// `draw` -- offer a draw, which ends the game drawn.
    Draw,
    /// `moves <square>` -- list legal destinations from a square.
    Moves(Square),
    /// `board` -- print the board.
    Board,
    /// `balance` -- print the material balance for the side to move.
    Balance,
    /// `new` -- start a new game.
    New,
    /// `set board on|off` -- print the board after every move.
    SetShowBoard(bool),
    /// `quit` -- exit the session.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match first {
        "move" => parse_move(&tokens[1..]),
        "resign" => Ok(Command::Resign),
        "draw" => Ok(Command::Draw),
        "moves" => {
            let text = tokens.get(1).ok_or_else(|| missing("moves"))?;
            Ok(Command::Moves(text.parse()?))
        }
        "board" => Ok(Command::Board),
        "balance" => Ok(Command::Balance),
        "new" => Ok(Command::New),
        "set" => parse_set(&tokens[1..]),
        "quit" => Ok(Command::Quit),
        text if looks_like_move(text) => Ok(Command::Play(text.parse()?)),
        other => Ok(Command::Unknown(other.to_string())),
    }
}

/// Parse the `move` command arguments, with an optional promotion piece name.
fn parse_move(tokens: &[&str]) -> Result<Command, CliError> {
    let text = tokens.first().ok_or_else(|| missing("move"))?;
    let mv: NormalMove = text.parse()?;
    let Some(name) = tokens.get(1) else {
        return Ok(Command::Play(mv));
    };
    let kind: PieceKind = name.parse()?;
    let promotion = PromotionPiece::try_from(kind)?;
    Ok(Command::Play(mv.with_promotion(promotion)))
}

/// Parse the `set` command arguments.
fn parse_set(tokens: &[&str]) -> Result<Command, CliError> {
    let name = tokens.first().ok_or_else(|| missing("set"))?;
    let value = tokens.get(1).ok_or_else(|| missing("set"))?;
    match (*name, *value) {
        ("board", "on") => Ok(Command::SetShowBoard(true)),
        ("board", "off") => Ok(Command::SetShowBoard(false)),
        _ => Err(CliError::InvalidOption {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

/// A bare token starting with a file letter and a rank digit.
fn looks_like_move(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 4 && (b'a'..=b'h').contains(&bytes[0]) && bytes[1].is_ascii_digit()
}

fn missing(command: &str) -> CliError {
    CliError::MissingArgument {
        command: command.to_string(),
    }
}
