use crate::app::state::DialogState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

pub struct DialogModal<'a> {
    pub theme: &'a Theme,
    pub dialog: &'a DialogState<'a>,
}

impl Widget for DialogModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Prompt, gap, field, gap, error/hint
        let height = if self.dialog.input.is_some() { 7 } else { 5 };
        let modal_area = centered_rect_fixed_height(60, height, area);

        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.dialog.kind.title(), self.theme.header_logo),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let padded_area = Rect {
            x: inner_area.x + 1,
            width: inner_area.width.saturating_sub(2),
            ..inner_area
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(padded_area);

        buf.set_line(
            rows[0].x,
            rows[0].y,
            &Line::from(Span::styled(self.dialog.kind.prompt(), self.theme.text)),
            rows[0].width,
        );

        let hint = Line::from(vec![
            Span::styled(" Enter ", self.theme.key_cap),
            Span::styled(" confirm  ", self.theme.dimmed),
            Span::styled(" Esc ", self.theme.key_cap),
            Span::styled(" cancel", self.theme.dimmed),
        ]);

        match &self.dialog.input {
            Some(input) => {
                if rows[2].width > 0 {
                    Widget::render(&input.text_area, rows[2], buf);
                }
                let footer = match &self.dialog.error {
                    Some(error) => Line::from(Span::styled(error.as_str(), self.theme.tint_error)),
                    None => hint,
                };
                buf.set_line(rows[4].x, rows[4].y, &footer, rows[4].width);
            }
            None => {
                buf.set_line(rows[2].x, rows[2].y, &hint, rows[2].width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::DialogKind;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(dialog: &DialogState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| f.render_widget(DialogModal { theme: &theme, dialog }, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
            .map(|pos| buffer[pos].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_join_dialog_shows_validation_error() {
        let mut dialog = DialogState::new(DialogKind::JoinMeeting);
        assert!(render(&dialog).contains("Type the link here"));

        dialog.error = Some("Enter a valid meeting link".to_string());
        let screen = render(&dialog);
        assert!(screen.contains("Enter a valid meeting link"));
        assert!(!screen.contains("confirm"));
    }

    #[test]
    fn test_instant_dialog_has_no_field() {
        let screen = render(&DialogState::new(DialogKind::InstantMeeting));
        assert!(screen.contains("Press Enter to start the meeting now."));
        assert!(screen.contains("cancel"));
    }
}
