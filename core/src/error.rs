use thiserror::Error;

use crate::CellIndex;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell index {0}, expected 0 to 8")]
    InvalidIndex(CellIndex),
    #[error("Game already decided, no new moves are accepted")]
    AlreadyDecided,
}

pub type Result<T> = core::result::Result<T, GameError>;
