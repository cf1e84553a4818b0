use super::action::Action;
use super::state::DialogKind;
use crate::domain::models::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

pub const CHORD_PREFIX: char = 'g';

pub struct KeyMap {
    // Keys are stored lowercased; lookups lowercase the incoming key.
    pub chord_prefix: char,
    pub chords: HashMap<char, Route>,
    pub global: HashMap<char, Action>,
    pub meeting_room: HashMap<char, Action>,
}

impl KeyMap {
    #[must_use]
    pub fn new() -> Self {
        let mut chords = HashMap::new();
        let mut global = HashMap::new();
        let mut meeting_room = HashMap::new();

        // --- G + key navigation ---
        chords.insert('h', Route::Home);
        chords.insert('u', Route::Upcoming);
        chords.insert('p', Route::Previous);
        chords.insert('r', Route::Recordings);
        chords.insert('m', Route::PersonalRoom);

        // --- Global ---
        global.insert('n', Action::OpenDialog(DialogKind::InstantMeeting));
        global.insert('j', Action::OpenDialog(DialogKind::JoinMeeting));
        global.insert('s', Action::OpenDialog(DialogKind::ScheduleMeeting));
        global.insert('?', Action::ToggleHelp);

        // --- Meeting room overrides ---
        meeting_room.insert('m', Action::ToggleMicrophone);
        meeting_room.insert('v', Action::ToggleCamera);
        meeting_room.insert('h', Action::ToggleHand);
        meeting_room.insert('i', Action::ToggleStats);

        Self {
            chord_prefix: CHORD_PREFIX,
            chords,
            global,
            meeting_room,
        }
    }

    #[must_use]
    pub fn chord(&self, c: char) -> Option<&Route> {
        self.chords.get(&c.to_ascii_lowercase())
    }

    #[must_use]
    pub fn is_chord_prefix(&self, c: char) -> bool {
        c.eq_ignore_ascii_case(&self.chord_prefix)
    }

    pub fn get_action(&self, c: char, in_meeting_room: bool) -> Option<Action> {
        let c = c.to_ascii_lowercase();
        if in_meeting_room {
            if let Some(action) = self.meeting_room.get(&c) {
                return Some(action.clone());
            }
        }
        self.global.get(&c).cloned()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Platform modifier + K. Both the "meta" family and plain Ctrl count.
#[must_use]
pub fn is_palette_toggle(key: &KeyEvent) -> bool {
    let platform = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META);
    platform && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&'k'))
}

#[must_use]
pub fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// The character of a key press carrying no modifier other than Shift.
#[must_use]
pub fn plain_char(key: &KeyEvent) -> Option<char> {
    if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_toggle_accepts_ctrl_and_super() {
        let ctrl = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);
        let cmd = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER);
        let meta = KeyEvent::new(KeyCode::Char('K'), KeyModifiers::META | KeyModifiers::SHIFT);
        let bare = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);

        assert!(is_palette_toggle(&ctrl));
        assert!(is_palette_toggle(&cmd));
        assert!(is_palette_toggle(&meta));
        assert!(!is_palette_toggle(&bare));
    }

    #[test]
    fn test_plain_char_rejects_modifiers() {
        let shifted = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        let alt = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::ALT);
        assert_eq!(plain_char(&shifted), Some('?'));
        assert_eq!(plain_char(&alt), None);
        assert_eq!(
            plain_char(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_meeting_room_table_shadows_global() {
        let keymap = KeyMap::new();
        assert_eq!(keymap.get_action('m', true), Some(Action::ToggleMicrophone));
        assert_eq!(keymap.get_action('M', true), Some(Action::ToggleMicrophone));
        assert_eq!(keymap.get_action('m', false), None);
        assert_eq!(
            keymap.get_action('N', true),
            Some(Action::OpenDialog(DialogKind::InstantMeeting))
        );
        assert_eq!(keymap.chord('H'), Some(&Route::Home));
    }
}
