use crate::domain::models::Icon;

pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const DOT: &str = "●";
pub const POINTER: &str = "›";

#[must_use]
pub fn icon(icon: Icon) -> &'static str {
    match icon {
        Icon::Bell => "🔔",
        Icon::Home => "⌂",
        Icon::Calendar => "▦",
        Icon::Clock => "◷",
        Icon::Video => "▶",
        Icon::VideoOff => "▷",
        Icon::Users => "☺",
        Icon::Plus => "+",
        Icon::Link => "⛓",
        Icon::Sun => "☀",
        Icon::Moon => "☾",
        Icon::Monitor => "▭",
        Icon::LogOut => "⇥",
        Icon::Mic => "🎙",
        Icon::MicOff => "✕",
        Icon::Hand => "✋",
        Icon::AlertCircle => "⚠",
        Icon::Radio => "◉",
        Icon::Check => "✓",
    }
}
