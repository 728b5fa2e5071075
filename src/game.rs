use crate::{reveal, ConfigurationError, GameConfig, Grid, Position};
use log::{debug, info, trace, warn};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Feedback emitted by a move, for the frontend to turn into sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Click,
    Flag,
    Explosion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Secondary,
}

/// One game: owns the grid and the `Playing -> Won | Lost` state machine.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    config: GameConfig,
    state: GameState,
}

impl Game {
    pub fn new<R: Rng + ?Sized>(
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        let grid = Grid::generate(config.width, config.height, config.mines, rng)?;
        Ok(Self::from_grid(grid))
    }

    /// Starts a game on a prepared board. Restarts keep its size and mine count.
    ///
    /// A board with nothing but mines is already won.
    pub fn from_grid(grid: Grid) -> Self {
        let (width, height) = grid.dimensions();
        let config = GameConfig::new(width, height, grid.mine_count());
        let mut game = Self {
            grid,
            config,
            state: GameState::Playing,
        };
        game.check_win();
        game
    }

    /// Throws the current board away and deals a fresh one.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ConfigurationError> {
        *self = Self::new(self.config, rng)?;
        info!("New game started");
        Ok(())
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn handle_click(&mut self, button: Button, pos: Position) -> Option<Signal> {
        trace!("{:?} click at {:?}", button, pos);
        if !self.grid.contains(pos) {
            warn!("Ignoring click outside the board at {:?}", pos);
            return None;
        }

        match button {
            Button::Primary => self.handle_primary_click(pos),
            Button::Secondary => self.handle_secondary_click(pos),
        }
    }

    /// Opens a cell. A flagged cell, mine or not, ignores the click without a
    /// signal and must be unflagged before it can be opened.
    pub fn handle_primary_click(&mut self, pos: Position) -> Option<Signal> {
        if self.state.is_over() {
            return None;
        }
        let cell = self.grid.cell_mut(pos)?;
        if cell.is_flagged() {
            return None;
        }

        if cell.is_mine() {
            cell.reveal();
            self.transition(GameState::Lost);
            return Some(Signal::Explosion);
        }

        reveal::reveal(&mut self.grid, pos);
        self.check_win();
        Some(Signal::Click)
    }

    pub fn handle_secondary_click(&mut self, pos: Position) -> Option<Signal> {
        if self.state.is_over() {
            return None;
        }
        self.grid
            .cell_mut(pos)?
            .toggle_flag()
            .then_some(Signal::Flag)
    }

    /// Wins once the only cells left closed are the mines. Flags play no part.
    pub fn check_win(&mut self) -> GameState {
        if self.state == GameState::Playing
            && self.grid.unrevealed_count() == self.grid.mine_count()
        {
            self.transition(GameState::Won);
        }
        self.state
    }

    fn transition(&mut self, next: GameState) {
        debug!("Game state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
