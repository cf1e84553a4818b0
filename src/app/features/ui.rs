use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    reducer,
    state::{AppMode, AppState, Direction},
};
use crate::theme::Theme;
use crossterm::event::KeyCode;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TogglePalette => {
            if state.command_palette.is_open() {
                close_palette(state);
            } else {
                state.dialog = None;
                state.mode = AppMode::CommandPalette;
                state.command_palette.open();
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteInput(key) => {
            match key.code {
                KeyCode::Char(c) => state.command_palette.push_char(c),
                KeyCode::Backspace => state.command_palette.pop_char(),
                _ => {}
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteNext => {
            state.command_palette.move_selection(Direction::Next);
            UpdateResult::Handled(None)
        }
        Action::PalettePrev => {
            state.command_palette.move_selection(Direction::Previous);
            UpdateResult::Handled(None)
        }
        Action::PaletteHover(index) => {
            state.command_palette.hover(*index);
            UpdateResult::Handled(None)
        }
        Action::PaletteClick(index) => {
            if state.command_palette.hover(*index) {
                return activate(state);
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteSelect => activate(state),
        Action::ToggleHelp => {
            state.command_palette.close();
            state.dialog = None;
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.command_palette.close();
            state.dialog = None;
            UpdateResult::Handled(None)
        }
        Action::SwitchTheme(mode) => {
            state.settings.theme = *mode;
            state.theme = Theme::from_mode(*mode);
            tracing::info!(theme = mode.label(), "theme switched");
            let persist = state
                .settings_path
                .clone()
                .map(|path| Command::PersistSettings(path, state.settings.clone()));
            UpdateResult::Handled(persist)
        }
        Action::Resize(_, _) => UpdateResult::Handled(None),
        _ => UpdateResult::NotHandled,
    }
}

fn close_palette(state: &mut AppState) {
    state.command_palette.close();
    if state.mode == AppMode::CommandPalette {
        state.mode = AppMode::Normal;
    }
}

/// Runs the highlighted command exactly once, after the palette has closed.
fn activate(state: &mut AppState) -> UpdateResult {
    let Some(action) = state.command_palette.activate_selected() else {
        return UpdateResult::Handled(None);
    };
    state.mode = AppMode::Normal;
    tracing::debug!(?action, "palette command");
    UpdateResult::Handled(reducer::update(state, action))
}
