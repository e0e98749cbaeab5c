use alloc::collections::BTreeSet;
use core::fmt::{self, Write};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Selected,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Selected => true,
        }
    }
}

/// The 3x3 grid. Cells can only go from empty to taken, or all back to
/// empty through [`Board::reset`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub fn validate_index(index: CellIndex) -> Result<usize> {
        let position = usize::from(index);
        if position < CELL_COUNT {
            Ok(position)
        } else {
            Err(GameError::InvalidIndex(index))
        }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell_at(&self, index: CellIndex) -> Result<Cell> {
        Ok(self.cells[Self::validate_index(index)?])
    }

    /// Places `token` on an empty cell. Taken cells are left alone.
    pub fn select_cell(&mut self, index: CellIndex, token: Token) -> Result<SelectOutcome> {
        use SelectOutcome::*;

        let position = Self::validate_index(index)?;

        Ok(match self.cells[position] {
            Cell::Empty => {
                self.cells[position] = token.into();
                Selected
            }
            Cell::Player1 | Cell::Player2 => NoChange,
        })
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_empty())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn occupied_by(&self, token: Token) -> BTreeSet<CellIndex> {
        let target = Cell::from(token);
        (0..)
            .zip(&self.cells)
            .filter(|&(_, &cell)| cell == target)
            .map(|(index, _)| index)
            .collect()
    }

    /// First of [`WINNING_LINES`] fully contained in the cells held by `token`.
    pub fn winning_line(&self, token: Token) -> Option<Line> {
        let occupied = self.occupied_by(token);
        WINNING_LINES
            .into_iter()
            .find(|line| line.iter().all(|index| occupied.contains(index)))
    }

    pub fn has_line(&self, token: Token) -> bool {
        self.winning_line(token).is_some()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(usize::from(SIDE)).enumerate() {
            if row > 0 {
                f.write_char('\n')?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    f.write_char('|')?;
                }
                f.write_char(cell.symbol())?;
            }
        }
        Ok(())
    }
}
