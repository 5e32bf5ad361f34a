//! Terminal driver for the interactive browser
//!
//! Owns raw mode and the alternate screen, paints frames and feeds key events
//! back into the view state.

use crate::config::Config;
use crate::core::data::RecipeCatalog;
use crate::ui::frame::Frame;
use crate::ui::input::map_key;
use crate::ui::render::{self, Viewport};
use crate::ui::state::{Screen, ViewState};
use crate::utils::error::{AppError, AppResult};
use crate::utils::image::ImageCache;
use crossterm::{
    cursor, event::{self, Event}, queue,
    style::{self, Attribute, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, Write};

fn terminal_error(e: io::Error) -> AppError {
    AppError::Terminal(e.to_string())
}

/// Puts the terminal in raw mode on the alternate screen, and restores it on drop
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> AppResult<Self> {
        terminal::enable_raw_mode().map_err(terminal_error)?;
        let mut stdout = io::stdout();
        if let Err(e) = crossterm::execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(terminal_error(e));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the Listing/Detail browser until the user closes it
pub fn run(catalog: &RecipeCatalog, config: &Config) -> AppResult<()> {
    let _guard = TerminalGuard::new()?;
    let mut stdout = io::stdout();

    let mut state = ViewState::new(catalog, &config.facets);
    let mut images = ImageCache::new();
    let (width, height) = terminal::size().map_err(terminal_error)?;
    let mut viewport = Viewport::new(width, height);

    tracing::info!(width, height, recipes = catalog.len(), "Opened recipe browser");

    loop {
        state.set_layout(render::measure(&state, catalog, &config.display, viewport));
        let frame = render::render(&state, catalog, config, viewport, &mut images);
        draw(&mut stdout, &frame, viewport).map_err(terminal_error)?;

        match event::read().map_err(terminal_error)? {
            Event::Key(key) => {
                if let Some(action) = map_key(key, &state) {
                    let before = state.screen();
                    state.apply(action, catalog);
                    if before != state.screen() {
                        log_transition(before, state.screen(), catalog);
                    }
                }
            }
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "Terminal resized");
                viewport = Viewport::new(width, height);
            }
            _ => {}
        }

        if state.should_quit() {
            break;
        }
    }

    tracing::info!(cached_images = images.len(), "Closed recipe browser");
    Ok(())
}

fn log_transition(from: Screen, to: Screen, catalog: &RecipeCatalog) {
    match to {
        Screen::Detail(index) => {
            let name = catalog.get(index).map(|r| r.name()).unwrap_or_default();
            tracing::info!(recipe = name, "Showing recipe detail");
        }
        Screen::Listing => tracing::info!(?from, "Back to recipe listing"),
    }
}

/// Paint a frame row by row, clipping to the viewport
fn draw(out: &mut impl Write, frame: &Frame, viewport: Viewport) -> io::Result<()> {
    for row in 0..viewport.height {
        queue!(out, cursor::MoveTo(0, row as u16))?;

        if let Some(line) = frame.lines.get(row) {
            let mut remaining = viewport.width;
            for span in &line.spans {
                if remaining == 0 {
                    break;
                }
                let text: String = span.text.chars().take(remaining).collect();
                remaining -= text.chars().count();

                if let Some(fg) = span.fg {
                    queue!(out, SetForegroundColor(fg))?;
                }
                if let Some(bg) = span.bg {
                    queue!(out, SetBackgroundColor(bg))?;
                }
                if span.bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                queue!(out, style::Print(text), SetAttribute(Attribute::Reset), style::ResetColor)?;
            }
        }

        queue!(out, terminal::Clear(ClearType::UntilNewLine))?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::frame::{Line, Span};
    use crossterm::style::Color;

    #[test]
    fn test_draw_clips_to_viewport() {
        let mut frame = Frame::new();
        frame.push(Line::raw("abcdefghij"));
        frame.push(Line::from_spans(vec![Span::raw("red").fg(Color::Red), Span::raw("tail")]));
        frame.push(Line::raw("dropped row"));

        let mut out = Vec::new();
        draw(&mut out, &frame, Viewport { width: 5, height: 2 }).unwrap();
        let painted = String::from_utf8(out).unwrap();

        assert!(painted.contains("abcde"));
        assert!(!painted.contains("abcdef"));
        assert!(painted.contains("red"));
        assert!(painted.contains("ta"));
        assert!(!painted.contains("tail"));
        assert!(!painted.contains("dropped"));
    }
}
