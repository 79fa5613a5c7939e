use super::{
    winning_lines, Board, FinishedState, GameError, GameResult, GameState, Grid, GridIndex, Mark,
    DEFAULT_BOARD_SIZE,
};

/// One playthrough of the game: the board plus turn and status state.
///
/// The session is an explicit value owned by the presentation layer,
/// nothing about it is process-wide.
#[derive(Clone, Debug, PartialEq)]
pub struct TicTacToe {
    board: Board,
    state: GameState,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl TicTacToe {
    /// Creates a fresh session with an empty `size`×`size` board and X to move.
    pub fn new(size: usize) -> Self {
        Self {
            board: Grid::new(size),
            state: GameState::Turn(Mark::X),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the dimension of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished(_))
    }

    /// Returns the mark that moves next, or `None` once the game is finished.
    pub fn current_player(&self) -> Option<Mark> {
        match self.state {
            GameState::Turn(mark) => Some(mark),
            GameState::Finished(_) => None,
        }
    }

    /// Starts the session over: empties the board and gives the turn to X.
    pub fn reset(&mut self) {
        *self = Self::new(self.size());
    }

    /// Places the current player's mark into the cell at `pos` and evaluates
    /// the new state: win first, then draw, otherwise the turn passes.
    ///
    /// Moves into occupied cells and moves in a finished game are rejected
    /// and leave the session untouched.
    pub fn make_move(&mut self, pos: GridIndex) -> GameResult<GameState> {
        let GameState::Turn(player) = self.state else {
            return Err(GameError::GameIsFinished);
        };
        let cell = &mut self.board[pos];
        if cell.is_some() {
            return Err(GameError::cell_is_occupied(pos.row(), pos.col()));
        }
        **cell = Some(player);
        Ok(self.update_state(player))
    }

    /// Returns the completed line of a won game, if there is one.
    pub fn winning_line(&self) -> Option<Vec<GridIndex>> {
        winning_lines(self.size()).find(|line| {
            let mut cells = line.iter().map(|&idx| *self.board[idx]);
            match cells.next() {
                Some(Some(first)) => cells.all(|cell| cell == Some(first)),
                _ => false,
            }
        })
    }

    fn update_state(&mut self, player: Mark) -> GameState {
        let line_won = winning_lines(self.size())
            .any(|line| line.iter().all(|&idx| *self.board[idx] == Some(player)));
        if line_won {
            self.state = GameState::Finished(FinishedState::Win(player));
        } else if self.board.all_indexed().all(|(_, cell)| cell.is_some()) {
            self.state = GameState::Finished(FinishedState::Draw);
        } else {
            self.state = GameState::Turn(player.opponent());
        }
        self.state
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn make_moves(game: &mut TicTacToe, moves: &[(usize, usize)]) {
        for &pos in moves {
            game.make_move(pos.into()).expect("move failed");
        }
    }

    #[test]
    fn fresh_session() {
        let game = TicTacToe::default();
        assert_eq!(game.size(), 3);
        assert!(game.board().all_indexed().all(|(_, cell)| cell.is_none()));
        assert_eq!(game.current_player(), Some(Mark::X));
        assert_eq!(game.state(), GameState::Turn(Mark::X));
        assert!(!game.is_finished());
    }

    #[test]
    fn move_toggles_player() {
        let mut game = TicTacToe::default();
        let state = game.make_move((1, 1).into()).unwrap();
        assert_eq!(*game.board()[(1, 1).into()], Some(Mark::X));
        assert_eq!(state, GameState::Turn(Mark::O));

        let state = game.make_move((0, 2).into()).unwrap();
        assert_eq!(*game.board()[(0, 2).into()], Some(Mark::O));
        assert_eq!(state, GameState::Turn(Mark::X));
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let mut game = TicTacToe::default();
        game.make_move((2, 2).into()).unwrap();
        let before = game.clone();

        // the second click on the same cell changes nothing
        assert_eq!(
            game.make_move((2, 2).into()),
            Err(GameError::cell_is_occupied(2, 2))
        );
        assert_eq!(game, before);
        assert_eq!(game.current_player(), Some(Mark::O));
    }

    #[test]
    fn row_win() {
        let mut game = TicTacToe::default();
        make_moves(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0)]);
        let state = game.make_move((0, 2).into()).unwrap();
        for col in 0..3 {
            assert_eq!(*game.board()[(0, col).into()], Some(Mark::X));
        }
        assert_eq!(state, GameState::Finished(FinishedState::Win(Mark::X)));
        assert!(game.is_finished());
        assert_eq!(game.current_player(), None);
    }

    #[test]
    fn column_win() {
        let mut game = TicTacToe::default();
        make_moves(&mut game, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let state = game.make_move((2, 0).into()).unwrap();
        assert_eq!(state, GameState::Finished(FinishedState::Win(Mark::X)));
    }

    #[test]
    fn diagonal_win() {
        let mut game = TicTacToe::default();
        make_moves(&mut game, &[(0, 0), (0, 1), (1, 1), (0, 2)]);
        let state = game.make_move((2, 2).into()).unwrap();
        assert_eq!(state, GameState::Finished(FinishedState::Win(Mark::X)));
        assert_eq!(
            game.winning_line(),
            Some(vec![(0, 0).into(), (1, 1).into(), (2, 2).into()])
        );
    }

    #[test]
    fn draw() {
        // X X O
        // O O X
        // X X O  <- (2, 1) played last
        let mut game = TicTacToe::default();
        make_moves(
            &mut game,
            &[
                (0, 0),
                (0, 2),
                (0, 1),
                (1, 0),
                (1, 2),
                (1, 1),
                (2, 0),
                (2, 2),
            ],
        );
        assert!(!game.is_finished());
        let state = game.make_move((2, 1).into()).unwrap();
        assert_eq!(state, GameState::Finished(FinishedState::Draw));
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn win_takes_precedence_over_draw() {
        // the last move fills the board and completes the left column
        // X O X
        // X O O
        // X X O  <- (2, 0) played last
        let mut game = TicTacToe::default();
        make_moves(
            &mut game,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 1),
                (2, 1),
                (1, 2),
                (1, 0),
                (2, 2),
            ],
        );
        let state = game.make_move((2, 0).into()).unwrap();
        assert_eq!(state, GameState::Finished(FinishedState::Win(Mark::X)));
        assert!(game.board().all_indexed().all(|(_, cell)| cell.is_some()));
    }

    #[test]
    fn no_moves_after_finish() {
        let mut game = TicTacToe::default();
        make_moves(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
        assert!(game.is_finished());
        let before = game.clone();

        assert_eq!(game.make_move((2, 2).into()), Err(GameError::GameIsFinished));
        assert_eq!(game, before);
    }

    #[test]
    fn reset_restores_fresh_session() {
        let mut game = TicTacToe::default();
        make_moves(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
        assert!(game.is_finished());

        game.reset();
        assert_eq!(game, TicTacToe::default());
        assert_eq!(game.current_player(), Some(Mark::X));
    }

    #[test]
    fn custom_board_size() {
        let mut game = TicTacToe::new(4);
        assert_eq!(game.size(), 4);
        // a three-in-a-row does not win on a 4x4 board
        make_moves(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 2), (0, 2), (1, 3)]);
        assert!(!game.is_finished());
        let state = game.make_move((0, 3).into()).unwrap();
        assert_eq!(state, GameState::Finished(FinishedState::Win(Mark::X)));
    }
}
