//! The read-eval-print loop over one game.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use rochade_core::{Game, GameStatus, Move, MoveOutcome, NormalMove, Square};

use crate::command::{Command, parse_command};
use crate::error::CliError;

/// Options adjustable with `set`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board after every accepted move.
    pub show_board_after_move: bool,
}

/// A text session driving one game at a time.
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a session with a new game and default options.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Read commands from `input` until `quit` or end of input, writing one
    /// response per command to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), CliError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");
            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, output)?,
                Err(e) => {
                    warn!(error = %e, "parse error");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        info!("rochade shutting down");
        Ok(())
    }

    /// Execute one command, writing its response.
    pub fn execute<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<(), CliError> {
        match cmd {
            Command::Play(mv) => self.handle_play(mv, output)?,
            Command::Resign => self.handle_finish(Move::Resignation, output)?,
            Command::Draw => self.handle_finish(Move::DrawOffer, output)?,
            Command::Moves(sq) => self.handle_moves(sq, output)?,
            Command::Board => writeln!(output, "{}", self.game.board().pretty())?,
            Command::Balance => writeln!(output, "{}", self.game.material_balance())?,
            Command::New => {
                self.game = Game::new();
                writeln!(output, "ok")?;
            }
            Command::SetShowBoard(on) => {
                self.config.show_board_after_move = on;
                writeln!(output, "ok")?;
            }
            Command::Quit => {}
            Command::Unknown(text) => debug!(cmd = %text, "ignoring unknown command"),
        }
        Ok(())
    }

    fn handle_play<W: Write>(&mut self, mv: NormalMove, output: &mut W) -> Result<(), CliError> {
        let outcome = self.game.apply(Move::Normal(mv));
        if outcome.status == GameStatus::IllegalMove {
            writeln!(output, "illegal")?;
            return Ok(());
        }
        writeln!(output, "{}", describe(&outcome))?;
        if self.config.show_board_after_move && outcome.changes.is_some() {
            writeln!(output, "{}", self.game.board().pretty())?;
        }
        Ok(())
    }

    fn handle_finish<W: Write>(&mut self, mv: Move, output: &mut W) -> Result<(), CliError> {
        let outcome = self.game.apply(mv);
        match outcome.notation {
            Some(text) => writeln!(output, "{text}")?,
            None => writeln!(output, "illegal")?,
        }
        Ok(())
    }

    fn handle_moves<W: Write>(&self, sq: Square, output: &mut W) -> Result<(), CliError> {
        let destinations: Vec<String> = self
            .game
            .legal_destinations(sq)
            .into_iter()
            .map(|to| to.to_string())
            .collect();
        writeln!(output, "{}", destinations.join(" "))?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// `<notation> <status> <side-to-move>`, with `-` when nobody moves next.
fn describe(outcome: &MoveOutcome) -> String {
    let notation = outcome.notation.as_deref().unwrap_or("-");
    let to_move = outcome
        .to_move
        .map_or_else(|| "-".to_string(), |color| color.to_string());
    format!("{notation} {} {to_move}", outcome.status)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(session: &mut Session, input: &str) -> String {
        let mut output = Vec::new();
        session.run(Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn plays_moves_and_reports() {
        let mut session = Session::new();
        let out = run(&mut session, "e2e4\nmove e7e5\ng1f3\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec!["e4 playing Black", "e5 playing White", "Nf3 playing Black"]
        );
    }

    #[test]
    fn illegal_moves_are_reported() {
        let mut session = Session::new();
        assert_eq!(run(&mut session, "e2e5\n"), "illegal\n");
        assert_eq!(session.game().board().history().len(), 0);
    }

    #[test]
    fn fools_mate_result() {
        let mut session = Session::new();
        let out = run(&mut session, "f2f3\ne7e5\ng2g4\nd8h4\n");
        assert_eq!(out.lines().last(), Some("Qh4 black-won -"));
    }

    #[test]
    fn resign_and_new_game() {
        let mut session = Session::new();
        let out = run(&mut session, "resign\ne2e4\nnew\ne2e4\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["0-1", "illegal", "ok", "e4 playing Black"]);
    }

    #[test]
    fn lists_destinations_and_balance() {
        let mut session = Session::new();
        let out = run(&mut session, "moves b1\nmoves e4\nbalance\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["a3 c3", "", "0"]);
    }

    #[test]
    fn stops_at_quit_and_ignores_unknown() {
        let mut session = Session::new();
        let out = run(&mut session, "hello\nquit\ne2e4\n");
        assert_eq!(out, "");
        assert_eq!(session.game().side_to_move(), rochade_core::Color::White);
    }

    #[test]
    fn parse_errors_are_reported() {
        let mut session = Session::new();
        let out = run(&mut session, "moves z9\n");
        assert!(out.starts_with("error: invalid square"));
    }

    #[test]
    fn board_after_move_when_enabled() {
        let mut session = Session::new();
        let out = run(&mut session, "set board on\ne2e4\n");
        assert!(session.config().show_board_after_move);
        assert!(out.contains("4  . . . . P . . ."));
        assert!(out.ends_with("   a b c d e f g h\n"));
    }
}
