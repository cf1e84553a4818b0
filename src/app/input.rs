use crate::app::{
    action::Action,
    keymap,
    keys::{KeyOutcome, KeySequenceInterpreter},
    state::{AppMode, AppState},
};
use crate::components::modals::command_palette;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};
use tokio::time::Instant;

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    keys: &mut KeySequenceInterpreter,
    terminal_size: Size,
    now: Instant,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if keymap::is_quit(key) {
            return Some(Action::Quit);
        }
    }
    if let Event::Resize(w, h) = event {
        return Some(Action::Resize(w, h));
    }

    match app_state.mode {
        AppMode::CommandPalette => match event {
            Event::Key(key) => palette_key(key),
            Event::Mouse(mouse) => {
                let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                let hit = command_palette::item_at(
                    area,
                    &app_state.command_palette,
                    mouse.column,
                    mouse.row,
                );
                match mouse.kind {
                    MouseEventKind::Moved => hit.map(Action::PaletteHover),
                    MouseEventKind::Down(MouseButton::Left) => match hit {
                        Some(index) => Some(Action::PaletteClick(index)),
                        None if !command_palette::modal_area(area)
                            .contains((mouse.column, mouse.row).into()) =>
                        {
                            Some(Action::CancelMode)
                        }
                        None => None,
                    },
                    MouseEventKind::ScrollUp => Some(Action::PalettePrev),
                    MouseEventKind::ScrollDown => Some(Action::PaletteNext),
                    _ => None,
                }
            }
            _ => None,
        },
        AppMode::Help => match event {
            Event::Key(key) if keymap::is_palette_toggle(&key) => Some(Action::TogglePalette),
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },
        AppMode::Dialog => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Enter => Some(Action::SubmitDialog),
                _ => match keys.handle_key(&key, app_state.key_context(), now) {
                    KeyOutcome::Handled(action) => Some(action),
                    KeyOutcome::Ignored if app_state.text_input_focused() => {
                        Some(Action::TextAreaInput(key))
                    }
                    KeyOutcome::Pending | KeyOutcome::Ignored => None,
                },
            },
            _ => None,
        },
        AppMode::Normal => match event {
            Event::Key(key) => keys
                .handle_key(&key, app_state.key_context(), now)
                .into_action(),
            _ => None,
        },
    }
}

fn palette_key(key: KeyEvent) -> Option<Action> {
    if keymap::is_palette_toggle(&key) {
        return Some(Action::TogglePalette);
    }
    match key.code {
        KeyCode::Esc => Some(Action::CancelMode),
        KeyCode::Up => Some(Action::PalettePrev),
        KeyCode::Down | KeyCode::Tab => Some(Action::PaletteNext),
        KeyCode::BackTab => Some(Action::PalettePrev),
        KeyCode::Enter => Some(Action::PaletteSelect),
        KeyCode::Backspace => Some(Action::PaletteInput(key)),
        KeyCode::Char(_) if keymap::plain_char(&key).is_some() => Some(Action::PaletteInput(key)),
        _ => None,
    }
}
