pub mod tic_tac_toe;

mod error;
mod grid;

use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};

pub use error::GameError;
pub use grid::{Grid, GridIndex};
pub use tic_tac_toe::TicTacToe;

pub type GameResult<T> = Result<T, GameError>;

pub const DEFAULT_BOARD_SIZE: usize = 3;

/// A mark placed on the board by one of the players.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the mark of the other player.
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::O => f.write_str("O"),
        }
    }
}

/// Content of a single board cell, `None` means the cell is empty.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoardCell<T>(pub Option<T>);

impl<T> Default for BoardCell<T> {
    fn default() -> Self {
        Self(Option::default())
    }
}

impl<T: Display> Display for BoardCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(val) => write!(f, "[{}]", val),
            None => f.write_str("[ ]"),
        }
    }
}

impl<T> From<T> for BoardCell<T> {
    fn from(value: T) -> Self {
        Self(Option::from(value))
    }
}

impl<T> Deref for BoardCell<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for BoardCell<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

pub type Cell = BoardCell<Mark>;
pub type Board = Grid<Cell>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FinishedState {
    Win(Mark),
    Draw,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameState {
    Turn(Mark),
    Finished(FinishedState),
}

/// Returns every line that wins the game on a `size`×`size` board:
/// all rows, all columns and both diagonals.
pub fn winning_lines(size: usize) -> impl Iterator<Item = Vec<GridIndex>> {
    let rows = (0..size)
        .map(move |row| (0..size).map(|col| GridIndex::new(row, col)).collect::<Vec<_>>());
    let cols = (0..size)
        .map(move |col| (0..size).map(|row| GridIndex::new(row, col)).collect::<Vec<_>>());
    let main_diagonal: Vec<_> = (0..size).map(|i| GridIndex::new(i, i)).collect();
    let anti_diagonal: Vec<_> = (0..size).map(|i| GridIndex::new(i, size - i - 1)).collect();
    rows.chain(cols)
        .chain(std::iter::once(main_diagonal))
        .chain(std::iter::once(anti_diagonal))
}
