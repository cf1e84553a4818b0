use crate::app::bus::NotificationEvent;
use crate::components::modals::helpers::centered_fixed;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Centered confirmation of a toggle the user just applied.
pub struct Hud<'a> {
    pub event: &'a NotificationEvent,
    pub theme: &'a Theme,
}

impl Widget for Hud<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let active = match self.event {
            NotificationEvent::Hud(notice) => notice.active,
            NotificationEvent::Island(_) => None,
        };
        let icon_style = match active {
            Some(false) => self.theme.hud.patch(self.theme.tint_error),
            Some(true) => self.theme.hud.patch(self.theme.tint_success),
            None => self.theme.hud,
        };

        let line = Line::from(vec![
            Span::styled(glyphs::icon(self.event.icon()), icon_style),
            Span::styled("  ", self.theme.hud),
            Span::styled(self.event.label().to_string(), self.theme.hud_label),
        ]);

        let width = line.width() as u16 + 6;
        let hud_area = centered_fixed(width, 3, area);
        if hud_area.width < 3 || hud_area.height < 3 {
            return;
        }

        Clear.render(hud_area, buf);
        Paragraph::new(line)
            .alignment(ratatui::layout::Alignment::Center)
            .style(self.theme.hud)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.hud.patch(self.theme.border)),
            )
            .render(hud_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::bus::HudNotice;
    use crate::domain::models::Icon;

    #[test]
    fn test_off_toggle_is_tinted() {
        let theme = Theme::default();
        let event: NotificationEvent = HudNotice::new("Microphone Off")
            .icon(Icon::MicOff)
            .active(false)
            .into();
        let area = Rect::new(0, 0, 60, 11);
        let mut buf = Buffer::empty(area);
        Hud {
            event: &event,
            theme: &theme,
        }
        .render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 5)].symbol().to_string()).collect();
        assert!(row.contains("Microphone Off"));

        let icon_cell = (0..area.width)
            .map(|x| &buf[(x, 5)])
            .find(|cell| cell.symbol() == glyphs::icon(Icon::MicOff))
            .unwrap();
        assert_eq!(Some(icon_cell.fg), theme.tint_error.fg);
    }
}
