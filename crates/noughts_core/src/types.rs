//! Core domain types for tic-tac-toe.

use super::error::BoardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Cross, written `X`.
    #[serde(rename = "X")]
    #[strum(serialize = "X")]
    Cross,
    /// Naught, written `O`.
    #[serde(rename = "O")]
    #[strum(serialize = "O")]
    Naught,
}

impl Mark {
    /// Returns the opposite mark.
    pub fn other(self) -> Self {
        match self {
            Mark::Cross => Mark::Naught,
            Mark::Naught => Mark::Cross,
        }
    }

    /// Returns the board symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Naught => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the board symbol for this cell (`X`, `O` or a space).
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(mark) => mark.symbol(),
        }
    }

    /// Parses a board symbol.
    pub fn from_symbol(symbol: char) -> Result<Self, BoardError> {
        match symbol {
            ' ' => Ok(Cell::Empty),
            'X' => Ok(Cell::Occupied(Mark::Cross)),
            'O' => Ok(Cell::Occupied(Mark::Naught)),
            other => Err(BoardError::InvalidSymbol(other)),
        }
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are immutable. Mark counts are computed once at construction
/// and stored alongside the cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
    x_count: usize,
    o_count: usize,
    empty_count: usize,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::from_cells([Cell::Empty; CELL_COUNT])
    }

    /// Creates a board from exactly nine cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        let count = |wanted: Cell| cells.iter().filter(|&&cell| cell == wanted).count();
        Self {
            x_count: count(Cell::Occupied(Mark::Cross)),
            o_count: count(Cell::Occupied(Mark::Naught)),
            empty_count: count(Cell::Empty),
            cells,
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of cells holding `X`.
    pub fn x_count(&self) -> usize {
        self.x_count
    }

    /// Number of cells holding `O`.
    pub fn o_count(&self) -> usize {
        self.o_count
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// Number of cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        match mark {
            Mark::Cross => self.x_count,
            Mark::Naught => self.o_count,
        }
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// The caller guarantees `index` is in range.
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[index] = Cell::Occupied(mark);
        Self::from_cells(cells)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[Cell]> for Board {
    type Error = BoardError;

    #[instrument(skip(cells), fields(len = cells.len()))]
    fn try_from(cells: &[Cell]) -> Result<Self, Self::Error> {
        let cells: [Cell; CELL_COUNT] = cells
            .try_into()
            .map_err(|_| BoardError::WrongCellCount(cells.len()))?;
        Ok(Self::from_cells(cells))
    }
}

impl FromStr for Board {
    type Err = BoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != CELL_COUNT {
            return Err(BoardError::WrongCellCount(len));
        }
        let cells = s
            .chars()
            .map(Cell::from_symbol)
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(cells.as_slice())
    }
}

impl TryFrom<String> for Board {
    type Error = BoardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_other() {
        assert_eq!(Mark::Cross.other(), Mark::Naught);
        assert_eq!(Mark::Naught.other(), Mark::Cross);
    }

    #[test]
    fn test_mark_parses_case_insensitively() {
        assert_eq!("x".parse::<Mark>(), Ok(Mark::Cross));
        assert_eq!("O".parse::<Mark>(), Ok(Mark::Naught));
        assert!("Z".parse::<Mark>().is_err());
        assert_eq!(Mark::Naught.to_string(), "O");
    }

    #[test]
    fn test_default_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.empty_count(), 9);
        assert_eq!(board.x_count(), 0);
        assert_eq!(board.o_count(), 0);
        assert_eq!(board.to_string(), "         ");
    }

    #[test]
    fn test_counts() {
        let board: Board = "XXOXO  O ".parse().unwrap();
        assert_eq!(board.x_count(), 3);
        assert_eq!(board.o_count(), 3);
        assert_eq!(board.empty_count(), 3);
        assert_eq!(board.empty_indices().collect::<Vec<_>>(), vec![5, 6, 8]);
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!("XO".parse::<Board>(), Err(BoardError::WrongCellCount(2)));
        assert_eq!(
            "          ".parse::<Board>(),
            Err(BoardError::WrongCellCount(10))
        );
        assert_eq!("".parse::<Board>(), Err(BoardError::WrongCellCount(0)));
    }

    #[test]
    fn test_invalid_symbol_rejected() {
        assert_eq!(
            "XXOXO O a".parse::<Board>(),
            Err(BoardError::InvalidSymbol('a'))
        );
        assert_eq!(
            "xxoxo o  ".parse::<Board>(),
            Err(BoardError::InvalidSymbol('x'))
        );
    }

    #[test]
    fn test_from_cell_slice() {
        let cells = [Cell::Empty; 8];
        assert_eq!(
            Board::try_from(&cells[..]),
            Err(BoardError::WrongCellCount(8))
        );
        let cells = [Cell::Occupied(Mark::Naught); 9];
        assert_eq!(Board::try_from(&cells[..]).unwrap().o_count(), 9);
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::Cross);
        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Cell::Occupied(Mark::Cross)));
        assert_eq!(next.x_count(), 1);
        assert_eq!(next.empty_count(), 8);
    }
}
