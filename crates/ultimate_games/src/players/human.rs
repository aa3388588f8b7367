//! Human player reading moves from a line-oriented input.

use super::Player;
use anyhow::{Result, bail};
use derive_more::{Display, Error};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use tracing::{debug, instrument};
use ultimate_tictactoe::{Board, GameSession, Position};

/// Line input shared between every human seat at one terminal.
///
/// Player vs Player mode seats two humans on the same stdin, so the reader
/// lives behind a shared handle rather than being owned by one player.
#[derive(Clone)]
pub struct SharedInput(Rc<RefCell<Box<dyn BufRead>>>);

impl SharedInput {
    /// Wraps any buffered reader.
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self(Rc::new(RefCell::new(Box::new(reader))))
    }

    /// Reads from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }

    /// Reads one line without its terminator. `None` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.0.borrow_mut().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl std::fmt::Debug for SharedInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedInput")
    }
}

/// Why a line of input was not accepted as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveInputError {
    /// Not a number 0-8 or a square name.
    #[display("{:?} is not a square; use 0-8 or a name like \"center\"", _0)]
    Unrecognized(#[error(not(source))] String),

    /// The square is taken.
    #[display("{} is already taken", _0)]
    Occupied(#[error(not(source))] Position),
}

/// Parses a typed move and checks the square is free.
#[instrument(skip(board))]
pub fn parse_move(input: &str, board: &Board) -> Result<usize, MoveInputError> {
    let position = Position::from_label_or_number(input)
        .ok_or_else(|| MoveInputError::Unrecognized(input.trim().to_string()))?;
    if !board.is_empty(position.to_index()) {
        return Err(MoveInputError::Occupied(position));
    }
    Ok(position.to_index())
}

/// Prompt naming the player and listing the free squares.
pub fn move_prompt(name: &str, board: &Board) -> String {
    let free: Vec<String> = Position::valid_moves(board)
        .iter()
        .map(|pos| pos.to_index().to_string())
        .collect();
    format!("{}, choose a square ({}): ", name, free.join(" "))
}

/// A person at the terminal.
#[derive(Debug)]
pub struct HumanPlayer {
    name: String,
    input: SharedInput,
}

impl HumanPlayer {
    /// Creates a human player reading from `input`.
    pub fn new(name: impl Into<String>, input: SharedInput) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl Player for HumanPlayer {
    #[instrument(skip(self, session), fields(player = %self.name))]
    fn get_move(&mut self, session: &GameSession) -> Result<usize> {
        loop {
            print!("{}", move_prompt(&self.name, session.board()));
            io::stdout().flush()?;

            let Some(line) = self.input.read_line()? else {
                bail!("Input closed before {} moved", self.name);
            };

            match parse_move(&line, session.board()) {
                Ok(index) => {
                    debug!(position = index, "Human chose position");
                    return Ok(index);
                }
                Err(e) => println!("{}. Try again.", e),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
