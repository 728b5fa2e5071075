use itertools::iproduct;

/// Column/row coordinates of a grid cell. Signed so that neighbours of edge
/// cells and clicks past the board can be expressed and then bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The Moore neighbourhood, unclipped. Callers filter by bounds.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        iproduct!(-1..=1, -1..=1)
            .filter(|&(dy, dx)| dx != 0 || dy != 0)
            .map(move |(dy, dx)| Position::new(self.x + dx, self.y + dy))
    }

    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && (self.x as i64) < width as i64
            && (self.y as i64) < height as i64
    }

    /// `[row, column]` index into a grid array. Only meaningful in bounds.
    pub(crate) fn to_index(self) -> (usize, usize) {
        (self.y as usize, self.x as usize)
    }
}
