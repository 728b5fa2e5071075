use crate::{Cell, ConfigurationError, GameConfig, Position};
use itertools::iproduct;
use log::debug;
use ndarray::Array2;
use rand::{seq::index, Rng};

/// The board: a `height x width` array of cells, indexed `[row, column]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Array2<Cell>,
    width: u32,
    height: u32,
    mine_count: u32,
}

impl Grid {
    /// Builds a board with exactly `mine_count` mines, sampled without
    /// replacement from every cell of the board.
    pub fn generate<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        mine_count: u32,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        GameConfig::new(width, height, mine_count).validate()?;

        let total = width as usize * height as usize;
        let mines = index::sample(rng, total, mine_count as usize)
            .into_iter()
            .map(|i| Position::new((i % width as usize) as i32, (i / width as usize) as i32));

        let grid = Self::with_mines(width, height, mines)?;
        debug!(
            "Generated {}x{} grid with {} mines",
            width, height, grid.mine_count
        );
        Ok(grid)
    }

    /// Builds a board with mines at the given positions. Duplicates count once.
    pub fn with_mines<I>(width: u32, height: u32, mines: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = Position>,
    {
        GameConfig::new(width, height, 0).validate()?;

        let shape = (height as usize, width as usize);
        let mut layout = Array2::from_elem(shape, false);
        for pos in mines {
            if !pos.is_within(width, height) {
                return Err(ConfigurationError::MineOutOfBounds(pos));
            }
            layout[pos.to_index()] = true;
        }

        let cells = Array2::from_shape_fn(shape, |(row, column)| {
            let position = Position::new(column as i32, row as i32);
            let adjacent = position
                .neighbors()
                .filter(|n| n.is_within(width, height) && layout[n.to_index()])
                .count() as u8;
            Cell::new(position, layout[(row, column)], adjacent)
        });
        let mine_count = layout.iter().filter(|&&mine| mine).count() as u32;

        Ok(Self {
            cells,
            width,
            height,
            mine_count,
        })
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.width, self.height)
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(pos.to_index())
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get_mut(pos.to_index())
    }

    /// In-bounds Moore neighbours of `pos`.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.neighbors().filter(move |n| self.contains(*n))
    }

    /// Every position on the board, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.height as i32, 0..self.width as i32).map(|(y, x)| Position::new(x, y))
    }

    /// Every cell on the board, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn mine_count(&self) -> u32 {
        self.mine_count
    }

    pub fn unrevealed_count(&self) -> u32 {
        self.cells.iter().filter(|c| !c.is_revealed()).count() as u32
    }

    pub fn flagged_count(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_flagged()).count() as u32
    }
}
