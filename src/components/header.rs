use crate::app::state::AppState;
use crate::components::island::Island;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tokio::time::Instant;

pub struct Header<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
    pub now: Instant,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Segment background colors for separator transitions
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let route_bg = self.theme.header_route.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        // Separator styles: fg = current segment bg, bg = next segment bg
        let sep_logo_route = Style::default().fg(logo_bg).bg(route_bg);
        let sep_route_base = Style::default().fg(route_bg).bg(base_bg);

        let route = &self.state.route;
        let spans = vec![
            Span::styled(" RO0M ", self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, sep_logo_route),
            Span::styled(
                format!(" {}  {} ", route.title(), route.path()),
                self.theme.header_route,
            ),
            Span::styled(glyphs::SEP_RIGHT, sep_route_base),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);

        let visible = self.state.island.visible();
        Island {
            event: visible.as_ref(),
            room: self
                .state
                .meeting
                .as_ref()
                .filter(|_| self.state.in_meeting_room()),
            theme: self.theme,
            now: self.now,
        }
        .render(area, buf);
    }
}
