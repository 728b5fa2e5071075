//! The boundary between the game and whatever draws it.
//!
//! A frontend provides a [`Canvas`] to draw on and a [`SoundSink`] for
//! feedback cues, wraps them in a [`Presentation`], and feeds it clicks in
//! screen coordinates. Nothing here touches a real screen, so the whole
//! loop can be driven headless.

use crate::{Button, Cell, Game, GameState, Position, Signal};
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const GRAY: Color = Color::rgb(200, 200, 200);
pub const DARK_GRAY: Color = Color::rgb(150, 150, 150);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 150, 0);

pub const FLAG: &str = "⚑";
pub const WIN_MESSAGE: &str = "🎉 Victory!";
pub const LOSS_MESSAGE: &str = "💥 You lost!";

/// Screen-space rectangle, in whatever unit the canvas counts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// Screen size of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    pub width: u32,
    pub height: u32,
}

impl TileSize {
    /// Zero dimensions are bumped to one so click translation never divides by zero.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width: if width == 0 { 1 } else { width },
            height: if height == 0 { 1 } else { height },
        }
    }

    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }
}

pub trait Canvas {
    fn fill(&mut self, color: Color);

    /// A `border` of zero fills the rectangle, anything else outlines it.
    fn draw_rect(&mut self, rect: Rect, color: Color, border: u32);

    fn draw_circle(&mut self, center: (u32, u32), radius: u32, color: Color);

    /// Draws `text` centred on `center`.
    fn draw_text(&mut self, text: &str, center: (u32, u32), color: Color);
}

pub trait SoundSink {
    fn play(&mut self, signal: Signal);
}

/// A sink that drops every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _signal: Signal) {}
}

/// Everything the game needs from a frontend, built once and handed to the loop.
#[derive(Debug)]
pub struct Presentation<S> {
    tile: TileSize,
    sound: S,
}

impl<S: SoundSink> Presentation<S> {
    pub fn new(tile: TileSize, sound: S) -> Self {
        Self { tile, sound }
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    /// Screen size needed to show the whole board.
    pub fn window_size(&self, game: &Game) -> (u32, u32) {
        let (width, height) = game.grid().dimensions();
        (width * self.tile.width, height * self.tile.height)
    }

    /// Grid position under a screen point. May lie outside the board.
    pub fn locate(&self, x: u32, y: u32) -> Position {
        let column = (x / self.tile.width) as i32;
        let row = (y / self.tile.height) as i32;
        Position::new(column, row)
    }

    /// Routes a click at screen coordinates into the game and plays whatever
    /// cue the move produced.
    pub fn click(&mut self, game: &mut Game, button: Button, x: u32, y: u32) -> Option<Signal> {
        let signal = game.handle_click(button, self.locate(x, y))?;
        trace!("Playing {:?}", signal);
        self.sound.play(signal);
        Some(signal)
    }

    pub fn render<C: Canvas + ?Sized>(&self, game: &Game, canvas: &mut C) {
        canvas.fill(WHITE);
        for cell in game.grid().cells() {
            self.draw_cell(cell, canvas);
        }

        let message = match game.state() {
            GameState::Playing => return,
            GameState::Won => (WIN_MESSAGE, GREEN),
            GameState::Lost => (LOSS_MESSAGE, RED),
        };
        let (width, height) = self.window_size(game);
        canvas.draw_text(message.0, (width / 2, height / 2), message.1);
    }

    fn tile_rect(&self, pos: Position) -> Rect {
        Rect::new(
            pos.x as u32 * self.tile.width,
            pos.y as u32 * self.tile.height,
            self.tile.width,
            self.tile.height,
        )
    }

    fn draw_cell<C: Canvas + ?Sized>(&self, cell: &Cell, canvas: &mut C) {
        let rect = self.tile_rect(cell.position());
        let center = rect.center();

        if cell.is_revealed() {
            canvas.draw_rect(rect, GRAY, 0);
            canvas.draw_rect(rect, DARK_GRAY, 1);
            if cell.is_mine() {
                let radius = self.tile.width.min(self.tile.height) / 4;
                canvas.draw_circle(center, radius, RED);
            } else if cell.adjacent_mines() > 0 {
                canvas.draw_text(&cell.adjacent_mines().to_string(), center, BLACK);
            }
        } else {
            canvas.draw_rect(rect, DARK_GRAY, 0);
            canvas.draw_rect(rect, BLACK, 2);
            if cell.is_flagged() {
                canvas.draw_text(FLAG, center, RED);
            }
        }
    }
}
