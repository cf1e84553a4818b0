use super::bus::{NotificationBus, NotificationEvent, NotificationKind};
use super::config::Settings;
use super::keys::KeyContext;
use super::presenter::Presenter;
use crate::domain::models::{MeetingInfo, Route};
use crate::theme::Theme;
use std::path::PathBuf;

pub mod command_palette;
pub mod dialog;
pub mod input;
pub mod meeting;

// Re-exports
pub use command_palette::{CommandPaletteState, Direction};
pub use dialog::{DialogKind, DialogState};
pub use input::{AppTextArea, InputState};
pub use meeting::MeetingRoomState;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,         // Browsing pages (or sitting in a call)
    CommandPalette, // Searching commands
    Help,           // Showing the shortcuts overlay
    Dialog,         // A meeting dialog owns the keyboard
}

#[derive(Debug)]
pub struct AppState<'a> {
    pub should_quit: bool,
    pub mode: AppMode,

    // --- Routing ---
    pub route: Route,
    pub signed_in: bool,

    // --- Overlays ---
    pub command_palette: CommandPaletteState,
    pub dialog: Option<DialogState<'a>>,

    // --- Meetings ---
    pub meeting: Option<MeetingRoomState>,
    pub scheduled: Vec<MeetingInfo>,
    pub previous: Vec<MeetingInfo>,

    // --- Notifications ---
    pub bus: NotificationBus,
    pub hud: Presenter,
    pub island: Presenter,

    // --- Config ---
    pub settings: Settings,
    /// Where theme changes are saved. `None` keeps everything in memory.
    pub settings_path: Option<PathBuf>,
    pub theme: Theme,

    // --- Animation ---
    pub frame_count: u64,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(settings: Settings, settings_path: Option<PathBuf>) -> Self {
        let bus = NotificationBus::new();
        let hud = Presenter::attach(&bus, NotificationKind::Hud, settings.hud_duration());
        let island = Presenter::attach(&bus, NotificationKind::Island, settings.island_duration());

        Self {
            should_quit: false,
            mode: AppMode::Normal,
            route: Route::Home,
            signed_in: true,
            command_palette: CommandPaletteState::default(),
            dialog: None,
            meeting: None,
            scheduled: Vec::new(),
            previous: Vec::new(),
            bus,
            hud,
            island,
            theme: Theme::from_mode(settings.theme),
            settings,
            settings_path,
            frame_count: 0,
        }
    }

    #[must_use]
    pub fn in_meeting_room(&self) -> bool {
        matches!(self.route, Route::Meeting(_)) && self.meeting.is_some()
    }

    /// Whether keystrokes belong to a text field rather than to shortcuts.
    #[must_use]
    pub fn text_input_focused(&self) -> bool {
        self.mode == AppMode::Dialog
            && self
                .dialog
                .as_ref()
                .is_some_and(|dialog| dialog.input.is_some())
    }

    #[must_use]
    pub fn key_context(&self) -> KeyContext {
        KeyContext {
            text_input_focused: self.text_input_focused(),
            in_meeting_room: self.in_meeting_room(),
        }
    }

    pub fn notify(&self, event: impl Into<NotificationEvent>) {
        self.bus.publish(event);
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self::new(Settings::default(), None)
    }
}
