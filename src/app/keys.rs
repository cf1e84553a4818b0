//! Key sequence interpreter: turns raw key presses into actions, including the
//! two-key `G` chords with a bounded completion window.

use super::action::Action;
use super::keymap::{self, KeyMap};
use crossterm::event::KeyEvent;
use std::time::Duration;
use tokio::time::Instant;

pub const DEFAULT_CHORD_TIMEOUT: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyContext {
    /// A text field owns the keyboard; shortcuts must not fire.
    pub text_input_focused: bool,
    pub in_meeting_room: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChordState {
    #[default]
    Idle,
    Pending { prefix: char, deadline: Instant },
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// The key resolved to an action and is consumed.
    Handled(Action),
    /// A chord prefix was recorded; the key itself is not consumed.
    Pending,
    /// Nothing matched. The key passes through untouched.
    Ignored,
}

impl KeyOutcome {
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        matches!(self, KeyOutcome::Handled(_))
    }

    #[must_use]
    pub fn into_action(self) -> Option<Action> {
        match self {
            KeyOutcome::Handled(action) => Some(action),
            KeyOutcome::Pending | KeyOutcome::Ignored => None,
        }
    }
}

pub struct KeySequenceInterpreter {
    keymap: KeyMap,
    timeout: Duration,
    chord: ChordState,
}

impl KeySequenceInterpreter {
    #[must_use]
    pub fn new(keymap: KeyMap, timeout: Duration) -> Self {
        Self {
            keymap,
            timeout,
            chord: ChordState::Idle,
        }
    }

    #[must_use]
    pub fn chord_state(&self) -> ChordState {
        self.chord
    }

    pub fn handle_key(&mut self, key: &KeyEvent, ctx: KeyContext, now: Instant) -> KeyOutcome {
        if ctx.text_input_focused {
            return KeyOutcome::Ignored;
        }

        if keymap::is_palette_toggle(key) {
            // A toggle drops any pending chord.
            self.cancel();
            return KeyOutcome::Handled(Action::TogglePalette);
        }

        self.expire(now);
        let pending = std::mem::take(&mut self.chord);
        let c = keymap::plain_char(key);

        if let ChordState::Pending { prefix, .. } = pending {
            // Any key closes the window. Only a continuation resolves it, and only
            // the prefix itself re-arms it.
            if let Some(route) = c.and_then(|c| self.keymap.chord(c)) {
                tracing::debug!(prefix = %prefix, path = %route.path(), "chord resolved");
                return KeyOutcome::Handled(Action::Navigate(route.clone()));
            }
            match c {
                Some(c) if self.keymap.is_chord_prefix(c) => {
                    self.arm(c, now);
                    return KeyOutcome::Pending;
                }
                _ => {
                    tracing::debug!(prefix = %prefix, "chord abandoned");
                    return KeyOutcome::Ignored;
                }
            }
        }

        let Some(c) = c else {
            return KeyOutcome::Ignored;
        };

        if self.keymap.is_chord_prefix(c) {
            self.arm(c, now);
            return KeyOutcome::Pending;
        }

        match self.keymap.get_action(c, ctx.in_meeting_room) {
            Some(action) => KeyOutcome::Handled(action),
            None => KeyOutcome::Ignored,
        }
    }

    /// Drops a pending chord whose window has elapsed. Returns true if one was dropped.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.chord {
            ChordState::Pending { deadline, .. } if now >= deadline => {
                tracing::debug!("chord window elapsed");
                self.chord = ChordState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.chord = ChordState::Idle;
    }

    fn arm(&mut self, prefix: char, now: Instant) {
        self.chord = ChordState::Pending {
            prefix: prefix.to_ascii_lowercase(),
            deadline: now + self.timeout,
        };
    }
}

impl Default for KeySequenceInterpreter {
    fn default() -> Self {
        Self::new(KeyMap::new(), DEFAULT_CHORD_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::DialogKind;
    use crate::domain::models::Route;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    const NORMAL: KeyContext = KeyContext {
        text_input_focused: false,
        in_meeting_room: false,
    };

    const ROOM: KeyContext = KeyContext {
        text_input_focused: false,
        in_meeting_room: true,
    };

    #[test]
    fn test_g_then_h_navigates_home() {
        let mut keys = KeySequenceInterpreter::default();
        let t0 = Instant::now();

        assert_eq!(keys.handle_key(&key('g'), NORMAL, t0), KeyOutcome::Pending);
        let outcome = keys.handle_key(&key('h'), NORMAL, t0 + ms(200));

        assert!(outcome.prevents_default());
        assert_eq!(outcome, KeyOutcome::Handled(Action::Navigate(Route::Home)));
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(keys.chord_state(), ChordState::Idle);
    }

    #[test]
    fn test_every_chord_continuation() {
        let cases = [
            ('h', "/"),
            ('u', "/upcoming"),
            ('p', "/previous"),
            ('r', "/recordings"),
            ('m', "/personal-room"),
        ];
        let mut keys = KeySequenceInterpreter::default();
        let t0 = Instant::now();

        for (c, path) in cases {
            keys.handle_key(&key('G'), NORMAL, t0);
            match keys.handle_key(&key(c), NORMAL, t0 + ms(10)) {
                KeyOutcome::Handled(Action::Navigate(route)) => assert_eq!(route.path(), path),
                other => panic!("expected navigation for {c}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_late_continuation_does_nothing() {
        let mut keys = KeySequenceInterpreter::default();
        let t0 = Instant::now();

        keys.handle_key(&key('g'), NORMAL, t0);
        let outcome = keys.handle_key(&key('h'), NORMAL, t0 + ms(600));

        assert_eq!(outcome, KeyOutcome::Ignored);
        assert!(!outcome.prevents_default());
        assert_eq!(keys.chord_state(), ChordState::Idle);
    }

    #[test]
    fn test_double_prefix_restarts_window() {
        let mut keys = KeySequenceInterpreter::default();
        let t0 = Instant::now();

        keys.handle_key(&key('g'), NORMAL, t0);
        let t1 = t0 + ms(400);
        assert_eq!(keys.handle_key(&key('g'), NORMAL, t1), KeyOutcome::Pending);
        assert_eq!(
            keys.chord_state(),
            ChordState::Pending {
                prefix: 'g',
                deadline: t1 + DEFAULT_CHORD_TIMEOUT
            }
        );

        // 700ms after the first G but within the restarted window.
        assert_eq!(
            keys.handle_key(&key('u'), NORMAL, t0 + ms(700)),
            KeyOutcome::Handled(Action::Navigate(Route::Upcoming))
        );
    }

    #[test]
    fn test_non_matching_key_abandons_chord() {
        let mut keys = KeySequenceInterpreter::default();
        let t0 = Instant::now();

        keys.handle_key(&key('g'), NORMAL, t0);
        assert_eq!(keys.handle_key(&key('n'), NORMAL, t0 + ms(50)), KeyOutcome::Ignored);
        assert_eq!(keys.chord_state(), ChordState::Idle);

        // The window is gone: a following H is just an unbound key.
        assert_eq!(keys.handle_key(&key('h'), NORMAL, t0 + ms(100)), KeyOutcome::Ignored);
    }

    #[test]
    fn test_expire_clears_pending_chord() {
        let mut keys = KeySequenceInterpreter::default();
        let t0 = Instant::now();

        keys.handle_key(&key('g'), NORMAL, t0);
        assert!(!keys.expire(t0 + ms(499)));
        assert!(keys.expire(t0 + ms(500)));
        assert_eq!(keys.chord_state(), ChordState::Idle);
    }

    #[test]
    fn test_single_keys() {
        let mut keys = KeySequenceInterpreter::default();
        let now = Instant::now();

        assert_eq!(
            keys.handle_key(&key('n'), NORMAL, now),
            KeyOutcome::Handled(Action::OpenDialog(DialogKind::InstantMeeting))
        );
        assert_eq!(
            keys.handle_key(&key('J'), NORMAL, now),
            KeyOutcome::Handled(Action::OpenDialog(DialogKind::JoinMeeting))
        );
        assert_eq!(
            keys.handle_key(&key('s'), NORMAL, now),
            KeyOutcome::Handled(Action::OpenDialog(DialogKind::ScheduleMeeting))
        );
        let help = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(
            keys.handle_key(&help, NORMAL, now),
            KeyOutcome::Handled(Action::ToggleHelp)
        );
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut keys = KeySequenceInterpreter::default();
        let now = Instant::now();

        for c in ['x', 'z', '1', ' ', 'q'] {
            let outcome = keys.handle_key(&key(c), NORMAL, now);
            assert_eq!(outcome, KeyOutcome::Ignored);
            assert!(!outcome.prevents_default());
        }
        let arrow = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(keys.handle_key(&arrow, NORMAL, now), KeyOutcome::Ignored);
        let alt_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::ALT);
        assert_eq!(keys.handle_key(&alt_n, NORMAL, now), KeyOutcome::Ignored);
    }

    #[test]
    fn test_meeting_room_keys_need_room_context() {
        let mut keys = KeySequenceInterpreter::default();
        let now = Instant::now();

        assert_eq!(keys.handle_key(&key('v'), NORMAL, now), KeyOutcome::Ignored);
        assert_eq!(
            keys.handle_key(&key('v'), ROOM, now),
            KeyOutcome::Handled(Action::ToggleCamera)
        );
        assert_eq!(
            keys.handle_key(&key('m'), ROOM, now),
            KeyOutcome::Handled(Action::ToggleMicrophone)
        );
        assert_eq!(
            keys.handle_key(&key('h'), ROOM, now),
            KeyOutcome::Handled(Action::ToggleHand)
        );
        assert_eq!(
            keys.handle_key(&key('i'), ROOM, now),
            KeyOutcome::Handled(Action::ToggleStats)
        );
    }

    #[test]
    fn test_chord_wins_over_room_key() {
        let mut keys = KeySequenceInterpreter::default();
        let t0 = Instant::now();

        keys.handle_key(&key('g'), ROOM, t0);
        assert_eq!(
            keys.handle_key(&key('m'), ROOM, t0 + ms(100)),
            KeyOutcome::Handled(Action::Navigate(Route::PersonalRoom))
        );
    }

    #[test]
    fn test_palette_toggle_closes_pending_chord() {
        let mut keys = KeySequenceInterpreter::default();
        let t0 = Instant::now();
        let ctrl_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);
        let super_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER);

        keys.handle_key(&key('g'), NORMAL, t0);
        assert_eq!(
            keys.handle_key(&ctrl_k, NORMAL, t0 + ms(10)),
            KeyOutcome::Handled(Action::TogglePalette)
        );
        assert_eq!(keys.chord_state(), ChordState::Idle);
        assert_eq!(
            keys.handle_key(&super_k, ROOM, t0 + ms(20)),
            KeyOutcome::Handled(Action::TogglePalette)
        );
    }

    #[test]
    fn test_chord_does_not_survive_palette_round_trip() {
        let mut keys = KeySequenceInterpreter::default();
        let t0 = Instant::now();
        let ctrl_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);

        assert_eq!(keys.handle_key(&key('g'), NORMAL, t0), KeyOutcome::Pending);
        keys.handle_key(&ctrl_k, NORMAL, t0 + ms(50));
        keys.handle_key(&ctrl_k, NORMAL, t0 + ms(100));
        assert_eq!(
            keys.handle_key(&key('h'), NORMAL, t0 + ms(150)),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn test_text_input_bypasses_everything() {
        let mut keys = KeySequenceInterpreter::default();
        let now = Instant::now();
        let typing = KeyContext {
            text_input_focused: true,
            in_meeting_room: true,
        };

        for event in [
            key('g'),
            key('n'),
            key('m'),
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(keys.handle_key(&event, typing, now), KeyOutcome::Ignored);
        }
        assert_eq!(keys.chord_state(), ChordState::Idle);
    }
}
