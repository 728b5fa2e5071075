use crate::ConfigurationError;

pub const DEFAULT_WIDTH: u32 = 15;
pub const DEFAULT_HEIGHT: u32 = 15;
pub const DEFAULT_MINES: u32 = 15;
pub const DEFAULT_FPS: u32 = 30;

/// Board dimensions and mine count, fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub mines: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mines: DEFAULT_MINES,
        }
    }
}

impl GameConfig {
    pub fn new(width: u32, height: u32, mines: u32) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub fn total_cells(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let Self {
            width,
            height,
            mines,
        } = *self;

        if self.total_cells() == 0 {
            return Err(ConfigurationError::EmptyGrid { width, height });
        }
        if mines as u64 > self.total_cells() {
            return Err(ConfigurationError::TooManyMines {
                width,
                height,
                mines,
            });
        }
        Ok(())
    }
}
