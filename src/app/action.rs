use crate::app::command::Command;
use crate::app::state::DialogKind;
use crate::domain::models::{CallEvent, MeetingInfo, Route};
use crate::theme::ThemeMode;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Navigation ---
    Navigate(Route), // G + H/U/P/R/M, palette navigation

    // --- Command Palette ---
    TogglePalette,          // Ctrl/⌘ + K
    PaletteInput(KeyEvent), // Typing into the search field
    PaletteNext,            // ↓
    PalettePrev,            // ↑
    PaletteHover(usize),    // Mouse over a result
    PaletteClick(usize),    // Mouse click on a result
    PaletteSelect,          // Enter

    // --- Overlays & Dialogs ---
    ToggleHelp,              // ?
    OpenDialog(DialogKind),  // N / J / S
    SubmitDialog,            // Enter inside a dialog
    TextAreaInput(KeyEvent), // Keys passed through to a focused text field
    CancelMode,              // Esc closes whatever is open

    // --- Theme & Account ---
    SwitchTheme(ThemeMode),
    SignOut,

    // --- Meeting Room (room context only) ---
    ToggleMicrophone, // M
    ToggleCamera,     // V
    ToggleHand,       // H
    ToggleStats,      // I

    // --- Async Results ---
    MicrophoneToggled(Result<bool, String>),
    CameraToggled(Result<bool, String>),
    MeetingStarted(Result<MeetingInfo, String>),
    MeetingJoined(Result<MeetingInfo, String>),
    MeetingScheduled(Result<MeetingInfo, String>),
    MeetingLeft(Result<(), String>),
    SignedOut(Result<(), String>),
    CallEvent(CallEvent),
}
