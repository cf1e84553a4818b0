pub mod command_palette;
pub mod dialog;
pub mod help;
pub mod helpers;

use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use command_palette::CommandPaletteModal;
use dialog::DialogModal;
use help::HelpModal;
use helpers::dim_area;

pub struct ModalManager<'a> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState<'a>,
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.app_state.mode == AppMode::Normal {
            return;
        }

        // --- Visual Dimming ---
        dim_area(buf, area);

        match self.app_state.mode {
            AppMode::Help => HelpModal { theme: self.theme }.render(area, buf),
            AppMode::Dialog => {
                if let Some(dialog) = &self.app_state.dialog {
                    DialogModal {
                        theme: self.theme,
                        dialog,
                    }
                    .render(area, buf);
                }
            }
            AppMode::CommandPalette => CommandPaletteModal {
                theme: self.theme,
                state: &self.app_state.command_palette,
            }
            .render(area, buf),
            AppMode::Normal => {}
        }
    }
}
