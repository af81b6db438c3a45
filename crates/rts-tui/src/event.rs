//! Semantic application events — crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Keybindings
//!
//! The search input always has focus, so every printable key types.
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `Ctrl+c`                | `Quit`                     |
//! | `Esc`                   | `Escape`                   |
//! | `F1`                    | `Help`                     |
//! | `Ctrl+u`                | `ClearQuery`               |
//! | `PageUp`                | `PageUp`                   |
//! | `PageDown`              | `PageDown`                 |
//! | `↑` `↓` `←` `→`         | `Nav(..)`                  |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | terminal resize         | `Resize(w, h)`             |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Arrow direction. Up/Down move the result highlight, Left/Right move the
/// text cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Close the help popup, or exit when nothing is open.
    Escape,
    /// Toggle the help popup.
    Help,
    /// Erase the whole query.
    ClearQuery,
    PageUp,
    PageDown,
    Nav(Direction),
    /// A printable character forwarded to the search input.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`].
///
/// Returns `None` for events that carry no meaning for the application
/// (mouse events, focus changes, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ClearQuery),
        Esc => Some(AppEvent::Escape),
        F(1) => Some(AppEvent::Help),

        PageUp => Some(AppEvent::PageUp),
        PageDown => Some(AppEvent::PageDown),
        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        // Shifted characters arrive with SHIFT set on most terminals
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }
        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
