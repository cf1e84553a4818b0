use crate::app::bus::{NotificationEvent, Severity};
use crate::app::state::MeetingRoomState;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use tokio::time::Instant;

/// Banner centered in the header: the visible island event, or an idle pill.
pub struct Island<'a> {
    pub event: Option<&'a NotificationEvent>,
    pub room: Option<&'a MeetingRoomState>,
    pub theme: &'a Theme,
    pub now: Instant,
}

impl Island<'_> {
    fn tint(&self, severity: Option<Severity>) -> Style {
        match severity {
            None | Some(Severity::Info) => self.theme.tint_info,
            Some(Severity::Success) => self.theme.tint_success,
            Some(Severity::Warning) => self.theme.tint_warning,
            Some(Severity::Error) => self.theme.tint_error,
            Some(Severity::Recording) => self.theme.tint_recording,
        }
    }

    #[must_use]
    pub fn line(&self) -> Line<'static> {
        if let Some(event) = self.event {
            let severity = match event {
                NotificationEvent::Island(notice) => notice.severity,
                NotificationEvent::Hud(_) => None,
            };
            let base = self.theme.island;
            return Line::from(vec![
                Span::styled("  ", base),
                Span::styled(glyphs::icon(event.icon()), base.patch(self.tint(severity))),
                Span::styled(format!("  {}  ", event.label()), base),
            ]);
        }

        match self.room {
            Some(room) => {
                let mut spans = vec![
                    Span::styled(format!("  {} ", glyphs::DOT), self.theme.island_live),
                    Span::styled(
                        format!("Live {}  ", room.elapsed(self.now)),
                        self.theme.island,
                    ),
                ];
                if room.recording {
                    spans.push(Span::styled(" REC ", self.theme.island_badge));
                    spans.push(Span::styled(" ", self.theme.island));
                }
                Line::from(spans)
            }
            None => Line::from(vec![
                Span::styled(format!("  {} ", glyphs::DOT), self.theme.island_idle),
                Span::styled("Ro0m Live  ", self.theme.island_idle),
            ]),
        }
    }
}

impl Widget for Island<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let line = self.line();
        let width = (line.width() as u16).min(area.width);
        let x = area.x + (area.width - width) / 2;
        buf.set_line(x, area.y, &line, width);
    }
}
