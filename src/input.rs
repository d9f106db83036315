//! Keyboard mapping from crossterm events to game inputs.

use crate::core::GameInput;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a single key press.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return GameInput::Quit;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('k') => GameInput::Jump,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::Other,
    }
}

/// Map any terminal event. Only key presses matter: releases, repeats,
/// mouse and resize events yield nothing.
pub fn map_event(event: &Event) -> Option<GameInput> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(map_key(*key)),
        _ => None,
    }
}
