/// Position of a cell on the board, row-major from the top-left corner:
///
/// ```text
/// 0 | 1 | 2
/// 3 | 4 | 5
/// 6 | 7 | 8
/// ```
pub type CellIndex = u8;

/// Three cell indices forming a row, column or diagonal.
pub type Line = [CellIndex; 3];

/// Cells per row and per column.
pub const SIDE: CellIndex = 3;

pub const CELL_COUNT: usize = 9;

/// Every line that wins the game when a single player holds all three cells.
pub const WINNING_LINES: [Line; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

pub const fn cell_index(row: CellIndex, col: CellIndex) -> CellIndex {
    row * SIDE + col
}
