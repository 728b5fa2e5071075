use crate::Position;
use thiserror::Error;

/// A game that cannot be set up. Raised before any grid exists.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Too many mines ({mines}) for board size {width}x{height}")]
    TooManyMines { width: u32, height: u32, mines: u32 },
    #[error("Board size {width}x{height} has no cells")]
    EmptyGrid { width: u32, height: u32 },
    #[error("Mine at {0:?} lies outside the board")]
    MineOutOfBounds(Position),
}
