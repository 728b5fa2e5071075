//! Terminal frontend: a ratatui buffer as the canvas, the bell as the speaker,
//! crossterm mouse events as input.

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, buffer::Buffer, style::Style, Terminal};
use sapper::{Button, Canvas, Color, Game, Presentation, Rect, Signal, SoundSink, TileSize};
use std::{
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};
use unicode_width::UnicodeWidthStr;

/// Three columns by one row reads roughly square in most terminal fonts.
pub const TILE_SIZE: TileSize = TileSize::new(3, 1);

type Backend = CrosstermBackend<Stdout>;

/// Rings the terminal bell for every cue. The terminal only has the one sound.
#[derive(Debug)]
pub struct Bell {
    muted: bool,
}

impl Bell {
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }
}

impl SoundSink for Bell {
    fn play(&mut self, signal: Signal) {
        if self.muted {
            return;
        }
        let mut out = io::stdout();
        if let Err(err) = out.write_all(b"\x07").and_then(|()| out.flush()) {
            log::warn!("Could not play {:?}: {}", signal, err);
        }
    }
}

fn tui_color(color: Color) -> ratatui::style::Color {
    ratatui::style::Color::Rgb(color.r, color.g, color.b)
}

/// Draws into a frame buffer, one terminal cell per unit. Anything off the
/// buffer is clipped.
struct BufferCanvas<'a> {
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(buf: &'a mut Buffer) -> Self {
        Self { buf }
    }

    fn cell(&mut self, x: u32, y: u32) -> Option<&mut ratatui::buffer::Cell> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        self.buf.cell_mut((x, y))
    }

    fn put(&mut self, x: u32, y: u32, symbol: &str, color: Color) {
        if let Some(cell) = self.cell(x, y) {
            cell.set_symbol(symbol).set_fg(tui_color(color));
        }
    }
}

impl Canvas for BufferCanvas<'_> {
    fn fill(&mut self, color: Color) {
        let area = self.buf.area;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_bg(tui_color(color));
                }
            }
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, border: u32) {
        let (left, top) = (rect.x, rect.y);
        let right = rect.x + rect.width.saturating_sub(1);
        let bottom = rect.y + rect.height.saturating_sub(1);

        if border == 0 {
            for y in top..=bottom {
                for x in left..=right {
                    if let Some(cell) = self.cell(x, y) {
                        cell.set_symbol(" ").set_bg(tui_color(color));
                    }
                }
            }
            return;
        }

        // A terminal cell is the thinnest line available, so every border
        // width draws the same outline.
        if rect.height < 2 {
            for y in top..=bottom {
                self.put(left, y, "[", color);
                self.put(right, y, "]", color);
            }
            return;
        }
        for x in left + 1..right {
            self.put(x, top, "─", color);
            self.put(x, bottom, "─", color);
        }
        for y in top + 1..bottom {
            self.put(left, y, "│", color);
            self.put(right, y, "│", color);
        }
        self.put(left, top, "┌", color);
        self.put(right, top, "┐", color);
        self.put(left, bottom, "└", color);
        self.put(right, bottom, "┘", color);
    }

    fn draw_circle(&mut self, center: (u32, u32), radius: u32, color: Color) {
        let (cx, cy) = (center.0 as i64, center.1 as i64);
        if radius == 0 {
            self.put(cx as u32, cy as u32, "●", color);
            return;
        }

        // Cells are about twice as tall as they are wide.
        let r = radius as i64;
        for dy in -r..=r {
            for dx in -2 * r..=2 * r {
                let (x, y) = (cx + dx, cy + dy);
                if x < 0 || y < 0 {
                    continue;
                }
                let (fx, fy) = (dx as f64 / 2.0, dy as f64);
                if fx * fx + fy * fy <= (r * r) as f64 {
                    self.put(x as u32, y as u32, "█", color);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, center: (u32, u32), color: Color) {
        let half = (text.width() / 2) as u32;
        let (Ok(x), Ok(y)) = (
            u16::try_from(center.0.saturating_sub(half)),
            u16::try_from(center.1),
        ) else {
            return;
        };
        let area = self.buf.area;
        if x < area.left() || x >= area.right() || y < area.top() || y >= area.bottom() {
            return;
        }
        self.buf.set_string(x, y, text, Style::default().fg(tui_color(color)));
    }
}

/// Takes over the terminal, plays until the player quits, then restores it.
pub fn run<S, R>(game: Game, presentation: Presentation<S>, rng: &mut R, fps: u32) -> Result<()>
where
    S: SoundSink,
    R: Rng + ?Sized,
{
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, game, presentation, rng, fps);

    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    terminal.show_cursor()?;

    result
}

fn event_loop<S, R>(
    terminal: &mut Terminal<Backend>,
    mut game: Game,
    mut presentation: Presentation<S>,
    rng: &mut R,
    fps: u32,
) -> Result<()>
where
    S: SoundSink,
    R: Rng + ?Sized,
{
    let frame_budget = Duration::from_secs(1) / fps.max(1);

    loop {
        let frame_start = Instant::now();
        terminal.draw(|frame| {
            presentation.render(&game, &mut BufferCanvas::new(frame.buffer_mut()));
        })?;

        while let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            if !event::poll(remaining)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(())
                    }
                    KeyCode::Char('r') => game.restart(rng)?,
                    _ => {}
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(button),
                    column,
                    row,
                    ..
                }) => {
                    let button = match button {
                        MouseButton::Left => Button::Primary,
                        MouseButton::Right => Button::Secondary,
                        MouseButton::Middle => continue,
                    };
                    presentation.click(&mut game, button, column.into(), row.into());
                }
                _ => {}
            }
        }
    }
}
