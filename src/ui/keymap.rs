//! Keyboard mapping from terminal input to application events.
//!
//! The gesture surface of the original (tap a card, tap back) becomes keyboard
//! driven here: arrows or vim keys move the deck focus, Enter "taps" the focused
//! card, Esc/Backspace activate the back affordance.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Event;

/// Maps a key event to an application event, if any.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Event> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(Event::Quit);
        }
        return None;
    }

    match key.code {
        KeyCode::Char('q') => Some(Event::Quit),
        KeyCode::Right | KeyCode::Char('l') => Some(Event::FocusNext),
        KeyCode::Left | KeyCode::Char('h') => Some(Event::FocusPrev),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Event::OpenFocused),
        KeyCode::Esc | KeyCode::Backspace => Some(Event::CloseDetail),
        KeyCode::Char('p') => Some(Event::ProfilePressed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_navigation_and_taps() {
        assert_eq!(map_key(key(KeyCode::Right)), Some(Event::FocusNext));
        assert_eq!(map_key(key(KeyCode::Char('h'))), Some(Event::FocusPrev));
        assert_eq!(map_key(key(KeyCode::Enter)), Some(Event::OpenFocused));
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Event::CloseDetail));
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Event::Quit));
        assert_eq!(map_key(key(KeyCode::Tab)), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let event = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(map_key(event), Some(Event::Quit));
    }
}
