//! Key bindings
//!
//! Translates terminal key events into `Action`s for the current screen and focus.

use crate::ui::state::{Action, Focus, Screen, ViewState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn map_key(key: KeyEvent, state: &ViewState) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match state.screen() {
        Screen::Detail(_) => map_detail_key(key),
        Screen::Listing => map_listing_key(key, state.focus()),
    }
}

fn map_detail_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => Some(Action::Dismiss),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
        KeyCode::PageUp => Some(Action::ScrollPageUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::ScrollPageDown),
        _ => None,
    }
}

fn map_listing_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        _ => {}
    }

    match focus {
        Focus::Search => match key.code {
            KeyCode::Enter => Some(Action::Search),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Action::Input(c))
            }
            _ => None,
        },
        Focus::Facet(_) => match key.code {
            KeyCode::Enter => Some(Action::Search),
            KeyCode::Left => Some(Action::PrevOption),
            KeyCode::Right => Some(Action::NextOption),
            _ => None,
        },
        Focus::Results => match key.code {
            KeyCode::Enter => Some(Action::OpenDetail),
            KeyCode::Up => Some(Action::SelectPrevious),
            KeyCode::Down => Some(Action::SelectNext),
            KeyCode::PageUp => Some(Action::SelectPageUp),
            KeyCode::PageDown => Some(Action::SelectPageDown),
            KeyCode::Home => Some(Action::SelectFirst),
            KeyCode::End => Some(Action::SelectLast),
            _ => None,
        },
    }
}
