use std::{fmt, str::FromStr};

use super::cell::{Cell, Player};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    #[display("invalid board dimensions {rows}x{cols}: rows and columns must be positive")]
    InvalidDimensions { rows: usize, cols: usize },
    #[display("column {column} is out of range (board has {cols} columns)")]
    ColumnOutOfRange { column: usize, cols: usize },
    #[display("column {column} is full")]
    ColumnFull { column: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    #[display("board text contains no rows")]
    Empty,
    #[display("line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[display("unknown cell character {symbol:?} on line {line}")]
    UnknownCell { line: usize, symbol: char },
    #[display("stone at row {row}, column {column} has an empty cell beneath it")]
    FloatingStone { row: usize, column: usize },
}

/// Fixed-size Connect-N grid with gravity placement.
///
/// Row 0 is the bottom row. Stones are always stacked contiguously from row 0
/// upward in every column: [`Board::drop_piece`] places a stone on top of its
/// column and [`Board::lift_piece`] removes the topmost one, so no empty cell
/// ever sits beneath a stone.
///
/// # Example
///
/// ```
/// use connectn_engine::{Board, Cell, Player};
///
/// let mut board = Board::new(6, 7).unwrap();
/// assert_eq!(board.drop_piece(3, Player::A).unwrap(), 0);
/// assert_eq!(board.drop_piece(3, Player::B).unwrap(), 1);
/// assert_eq!(board.cell(1, 3), Cell::Stone(Player::B));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Returns `true` if a stone can be dropped into `col`.
    ///
    /// Out-of-range columns are never valid; otherwise the column is playable
    /// while its top cell is empty.
    #[must_use]
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < self.cols && self.cell(self.rows - 1, col).is_empty()
    }

    /// Iterates playable columns in ascending order.
    pub fn valid_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cols).filter(|&col| self.is_valid_move(col))
    }

    #[must_use]
    pub fn has_valid_moves(&self) -> bool {
        self.valid_moves().next().is_some()
    }

    /// Returns `true` if every cell of the top row is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.cell(self.rows - 1, col).is_empty())
    }

    /// Number of stones stacked in `col`.
    #[must_use]
    pub fn column_height(&self, col: usize) -> usize {
        (0..self.rows)
            .position(|row| self.cell(row, col).is_empty())
            .unwrap_or(self.rows)
    }

    /// Drops a stone for `player` into `col` and returns the landing row.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, BoardError> {
        if col >= self.cols {
            return Err(BoardError::ColumnOutOfRange {
                column: col,
                cols: self.cols,
            });
        }
        let row = (0..self.rows)
            .find(|&row| self.cell(row, col).is_empty())
            .ok_or(BoardError::ColumnFull { column: col })?;
        self.set(row, col, Cell::Stone(player));
        Ok(row)
    }

    /// Returns a copy of this board with a stone dropped into `col`, along
    /// with the landing row. `self` is left untouched.
    pub fn dropped(&self, col: usize, player: Player) -> Result<(Self, usize), BoardError> {
        let mut board = self.clone();
        let row = board.drop_piece(col, player)?;
        Ok((board, row))
    }

    /// Removes the topmost stone of `col` and returns its owner.
    ///
    /// Returns `None` if the column is empty or out of range.
    pub fn lift_piece(&mut self, col: usize) -> Option<Player> {
        if col >= self.cols {
            return None;
        }
        let row = self.column_height(col).checked_sub(1)?;
        let Cell::Stone(player) = self.cell(row, col) else {
            return None;
        };
        self.set(row, col, Cell::Empty);
        Some(player)
    }

    /// Iterates rows from the top of the board down, as they are displayed.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols).rev()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_top_down() {
            let line = row
                .iter()
                .map(|cell| cell.symbol().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{}", "-".repeat(2 * self.cols - 1))?;
        let indices = (0..self.cols)
            .map(|col| col.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{indices}")
    }
}

/// Parses the text layout produced by [`Board`]'s `Display` implementation.
///
/// Rows are listed top row first; whitespace between cells is ignored, blank
/// lines are skipped and a line made of dashes ends the grid (the column
/// footer after it is ignored).
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows_top_down: Vec<Vec<Cell>> = vec![];
        for (index, line) in s.lines().enumerate() {
            let line_no = index + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.chars().all(|c| c == '-') {
                break;
            }
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|symbol| {
                    Cell::from_symbol(symbol).ok_or(BoardParseError::UnknownCell {
                        line: line_no,
                        symbol,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(first) = rows_top_down.first()
                && first.len() != row.len()
            {
                return Err(BoardParseError::RaggedRow {
                    line: line_no,
                    expected: first.len(),
                    found: row.len(),
                });
            }
            rows_top_down.push(row);
        }

        let rows = rows_top_down.len();
        let cols = rows_top_down.first().map_or(0, Vec::len);
        let mut board = Board::new(rows, cols).map_err(|_| BoardParseError::Empty)?;
        for (row, cells) in rows_top_down.into_iter().rev().enumerate() {
            for (col, cell) in cells.into_iter().enumerate() {
                board.set(row, col, cell);
            }
        }

        for col in 0..cols {
            let height = board.column_height(col);
            if let Some(row) = (height..rows).find(|&row| !board.cell(row, col).is_empty()) {
                return Err(BoardParseError::FloatingStone { row, column: col });
            }
        }

        Ok(board)
    }
}
