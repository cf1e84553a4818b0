use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod glyphs;
pub mod latte;
pub mod mocha;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_route: Style,
    pub header: Style,

    pub island_idle: Style,
    pub island: Style,
    pub island_live: Style,
    pub island_badge: Style,

    pub tint_info: Style,
    pub tint_success: Style,
    pub tint_warning: Style,
    pub tint_error: Style,
    pub tint_recording: Style,

    pub hud: Style,
    pub hud_label: Style,

    pub page_title: Style,
    pub text: Style,
    pub dimmed: Style,
    pub key_cap: Style,
    pub key_cap_selected: Style,
    pub category: Style,
    pub list_item: Style,
    pub list_selected: Style,

    pub status_live: Style,
    pub status_muted: Style,

    pub footer: Style,
    pub footer_key: Style,
    pub footer_val: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    /// Whether this mode renders with the light palette on the current terminal.
    #[must_use]
    pub fn is_light(&self) -> bool {
        match self {
            ThemeMode::Light => true,
            ThemeMode::Dark => false,
            ThemeMode::System => std::env::var("COLORFGBG")
                .ok()
                .and_then(|value| background_is_light(&value))
                .unwrap_or(false),
        }
    }
}

/// Reads the background slot of a `COLORFGBG` value such as `15;0` or `0;default;15`.
fn background_is_light(colorfgbg: &str) -> Option<bool> {
    let bg = colorfgbg.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    Some(matches!(bg, 7 | 15))
}

impl Theme {
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        if mode.is_light() {
            Self::from_palette(&latte::LATTE)
        } else {
            Self::from_palette(&mocha::MOCHA)
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_route: Style::default()
                .bg(p.surface1)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.base).fg(p.text),

            island_idle: Style::default().bg(p.crust).fg(p.overlay0),
            island: Style::default().bg(p.crust).fg(p.text),
            island_live: Style::default().bg(p.crust).fg(p.green),
            island_badge: Style::default()
                .bg(dim_color(p.red, 0.3))
                .fg(p.red)
                .add_modifier(Modifier::BOLD),

            tint_info: Style::default().fg(p.text),
            tint_success: Style::default().fg(p.green),
            tint_warning: Style::default().fg(p.yellow),
            tint_error: Style::default().fg(p.red),
            tint_recording: Style::default()
                .fg(p.red)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),

            hud: Style::default().bg(p.mantle).fg(p.text),
            hud_label: Style::default()
                .bg(p.mantle)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),

            page_title: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            text: Style::default().fg(p.subtext1),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
            key_cap: Style::default()
                .bg(p.surface0)
                .fg(p.overlay1)
                .add_modifier(Modifier::BOLD),
            key_cap_selected: Style::default()
                .bg(dim_color(p.crust, 0.8))
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            category: Style::default()
                .fg(p.subtext0)
                .add_modifier(Modifier::BOLD | Modifier::DIM),
            list_item: Style::default().fg(p.subtext1),
            list_selected: Style::default()
                .bg(p.text)
                .fg(p.base)
                .add_modifier(Modifier::BOLD),

            status_live: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            status_muted: Style::default().fg(p.red).add_modifier(Modifier::BOLD),

            footer: Style::default().bg(p.crust).fg(p.subtext0),
            footer_key: Style::default()
                .bg(p.surface0)
                .fg(p.peach)
                .add_modifier(Modifier::BOLD),
            footer_val: Style::default().bg(p.crust).fg(p.subtext0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&mocha::MOCHA)
    }
}
