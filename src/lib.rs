pub mod cell;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod position;
pub mod presentation;
pub mod reveal;

pub use cell::Cell;
pub use config::GameConfig;
pub use error::ConfigurationError;
pub use game::{Button, Game, GameState, Signal};
pub use grid::Grid;
pub use position::Position;
pub use presentation::{Canvas, Color, Presentation, Rect, SoundSink, TileSize};
