use crate::Position;

/// One square of the board. Mine placement and the adjacency count are fixed
/// when the grid is built; only the revealed and flagged bits change in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    is_mine: bool,
    is_revealed: bool,
    is_flagged: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub(crate) fn new(position: Position, is_mine: bool, adjacent_mines: u8) -> Self {
        Self {
            position,
            is_mine,
            is_revealed: false,
            is_flagged: false,
            adjacent_mines,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    /// Opens the cell. Returns `false` when it was already open or is flagged.
    pub fn reveal(&mut self) -> bool {
        if self.is_revealed || self.is_flagged {
            return false;
        }
        self.is_revealed = true;
        true
    }

    /// Returns `false` when the cell is already open.
    pub fn toggle_flag(&mut self) -> bool {
        if self.is_revealed {
            return false;
        }
        self.is_flagged = !self.is_flagged;
        true
    }
}
