use std::ops::Range;

use super::{
    board::Board,
    cell::{Cell, Player},
};

/// Orientation of a [`Window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Bottom to top along a column.
    Vertical,
    /// Up and to the right (`↗`).
    DiagonalUp,
    /// Down and to the right (`↘`).
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Self; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// Ranges of starting `(row, col)` coordinates for windows of `length`
    /// cells that fit on a `rows`×`cols` board.
    fn start_ranges(
        self,
        rows: usize,
        cols: usize,
        length: usize,
    ) -> Option<(Range<usize>, Range<usize>)> {
        if length == 0 {
            return None;
        }
        // each direction is bounded only by the dimensions it spans
        let starts = |size: usize| (size + 1).checked_sub(length);
        let ranges = match self {
            Direction::Horizontal => (0..rows, 0..starts(cols)?),
            Direction::Vertical => (0..starts(rows)?, 0..cols),
            Direction::DiagonalUp => (0..starts(rows)?, 0..starts(cols)?),
            Direction::DiagonalDown => {
                starts(rows)?;
                (length - 1..rows, 0..starts(cols)?)
            }
        };
        Some(ranges)
    }

    fn windows(self, rows: usize, cols: usize, length: usize) -> impl Iterator<Item = Window> {
        let (row_range, col_range) = self
            .start_ranges(rows, cols, length)
            .unwrap_or((0..0, 0..0));
        row_range.flat_map(move |row| {
            col_range.clone().map(move |col| Window {
                row,
                col,
                direction: self,
                length,
            })
        })
    }
}

/// A straight run of `length` cells starting at `(row, col)`.
///
/// Windows are lightweight descriptors; the cells are read from a board on
/// demand with [`Window::cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    row: usize,
    col: usize,
    direction: Direction,
    length: usize,
}

impl Window {
    #[must_use]
    pub fn start(self) -> (usize, usize) {
        (self.row, self.col)
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.length == 0
    }

    /// Board coordinates `(row, col)` covered by this window, in window order.
    pub fn positions(self) -> impl Iterator<Item = (usize, usize)> {
        let Window {
            row,
            col,
            direction,
            length,
        } = self;
        (0..length).map(move |i| match direction {
            Direction::Horizontal => (row, col + i),
            Direction::Vertical => (row + i, col),
            Direction::DiagonalUp => (row + i, col + i),
            Direction::DiagonalDown => (row - i, col + i),
        })
    }

    pub fn cells(self, board: &Board) -> impl Iterator<Item = Cell> + '_ {
        self.positions().map(move |(row, col)| board.cell(row, col))
    }
}

impl Board {
    /// Enumerates every window of `length` cells on this board.
    ///
    /// Windows are produced direction by direction (horizontal, vertical,
    /// `↗`, `↘`); within a direction each window appears exactly once. No
    /// windows are produced when `length` is zero or exceeds the board in
    /// that direction.
    pub fn windows(&self, length: usize) -> impl Iterator<Item = Window> {
        let (rows, cols) = (self.rows(), self.cols());
        Direction::ALL
            .into_iter()
            .flat_map(move |direction| direction.windows(rows, cols, length))
    }

    /// Returns `true` if `player` owns every cell of some window of `length`
    /// cells in any of the four directions.
    #[must_use]
    pub fn has_run(&self, player: Player, length: usize) -> bool {
        self.windows(length)
            .any(|window| window.cells(self).all(|cell| cell.is_owned_by(player)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    fn count_by_direction(board: &Board, length: usize, direction: Direction) -> usize {
        board
            .windows(length)
            .filter(|w| w.direction() == direction)
            .count()
    }

    #[test]
    fn test_window_counts_standard_board() {
        let board = Board::new(6, 7).unwrap();
        assert_eq!(count_by_direction(&board, 4, Direction::Horizontal), 24);
        assert_eq!(count_by_direction(&board, 4, Direction::Vertical), 21);
        assert_eq!(count_by_direction(&board, 4, Direction::DiagonalUp), 12);
        assert_eq!(count_by_direction(&board, 4, Direction::DiagonalDown), 12);
        assert_eq!(board.windows(4).count(), 69);
    }

    #[test]
    fn test_windows_are_unique_and_in_bounds() {
        let board = Board::new(5, 6).unwrap();
        let windows = board.windows(3).collect::<Vec<_>>();
        for (i, window) in windows.iter().enumerate() {
            assert_eq!(window.len(), 3);
            assert!(!windows[..i].contains(window), "duplicate {window:?}");
            for (row, col) in window.positions() {
                assert!(row < 5 && col < 6, "{window:?} leaves the board");
            }
        }
    }

    #[test]
    fn test_no_windows_when_length_does_not_fit() {
        let board = Board::new(3, 5).unwrap();
        assert_eq!(count_by_direction(&board, 4, Direction::Horizontal), 3);
        assert_eq!(count_by_direction(&board, 4, Direction::Vertical), 0);
        assert_eq!(count_by_direction(&board, 4, Direction::DiagonalUp), 0);
        assert_eq!(count_by_direction(&board, 4, Direction::DiagonalDown), 0);
        assert_eq!(board.windows(0).count(), 0);
        assert_eq!(board.windows(6).count(), 0);
    }

    #[test]
    fn test_short_board_keeps_horizontal_windows() {
        let board = board(
            "
            . . . . . . .
            X X X X . . .
            ",
        );
        assert_eq!(count_by_direction(&board, 4, Direction::Horizontal), 8);
        assert_eq!(count_by_direction(&board, 4, Direction::Vertical), 0);
        assert_eq!(count_by_direction(&board, 4, Direction::DiagonalUp), 0);
        assert_eq!(count_by_direction(&board, 4, Direction::DiagonalDown), 0);
        assert!(board.has_run(Player::A, 4));
    }

    #[test]
    fn test_narrow_board_keeps_vertical_windows() {
        let board = board(
            "
            . .
            . .
            O .
            O .
            O .
            O X
            ",
        );
        assert_eq!(count_by_direction(&board, 4, Direction::Horizontal), 0);
        assert_eq!(count_by_direction(&board, 4, Direction::Vertical), 6);
        assert_eq!(count_by_direction(&board, 4, Direction::DiagonalUp), 0);
        assert_eq!(count_by_direction(&board, 4, Direction::DiagonalDown), 0);
        assert!(board.has_run(Player::B, 4));
        assert!(!board.has_run(Player::A, 4));
    }

    #[test]
    fn test_diagonal_down_positions() {
        let board = Board::new(4, 4).unwrap();
        let window = board
            .windows(4)
            .find(|w| w.direction() == Direction::DiagonalDown)
            .unwrap();
        assert_eq!(
            window.positions().collect::<Vec<_>>(),
            vec![(3, 0), (2, 1), (1, 2), (0, 3)]
        );
    }

    #[test]
    fn test_has_run_horizontal_at_right_edge() {
        let mut board = board(
            "
            . . . . . . .
            O O O . X X X
            ",
        );
        assert!(!board.has_run(Player::A, 4));
        board.drop_piece(3, Player::A).unwrap();
        assert!(board.has_run(Player::A, 4));
        assert!(!board.has_run(Player::B, 4));
    }

    #[test]
    fn test_has_run_vertical_at_top() {
        let board = board(
            "
            O .
            O .
            O .
            O .
            X X
            ",
        );
        assert!(board.has_run(Player::B, 4));
        assert!(!board.has_run(Player::B, 5));
        assert!(board.has_run(Player::A, 2));
        assert!(!board.has_run(Player::A, 3));
    }

    #[test]
    fn test_has_run_diagonals() {
        let up = board(
            "
            . . . O
            . . O X
            . O X X
            O X X X
            ",
        );
        assert!(up.has_run(Player::B, 4));
        assert!(!up.has_run(Player::A, 4));

        let down = board(
            "
            O . . .
            X O . .
            X X O .
            X X X O
            ",
        );
        assert!(down.has_run(Player::B, 4));
        assert!(!down.has_run(Player::A, 4));
    }

    #[test]
    fn test_has_run_ignores_shorter_runs() {
        let board = board(
            "
            . . . . . .
            . . . . . .
            O . . . . .
            O . . . . .
            O X X X . X
            ",
        );
        assert!(!board.has_run(Player::A, 4));
        assert!(!board.has_run(Player::B, 4));
        assert!(board.has_run(Player::A, 3));
        assert!(board.has_run(Player::B, 3));
    }

    #[test]
    fn test_empty_board_has_no_run() {
        let board = Board::new(6, 7).unwrap();
        for player in Player::ALL {
            assert!(!board.has_run(player, 4));
        }
    }
}
