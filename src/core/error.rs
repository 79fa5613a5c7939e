#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("cell ({row}, {col}) is occupied")]
    CellIsOccupied { row: usize, col: usize },
    #[error("can't make a move in a finished game")]
    GameIsFinished,
}

impl GameError {
    pub fn cell_is_occupied(row: usize, col: usize) -> Self {
        Self::CellIsOccupied { row, col }
    }
}
