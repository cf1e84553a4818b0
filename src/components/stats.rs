use crate::app::state::MeetingRoomState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use tokio::time::Instant;

const WIDTH: u16 = 34;

/// Call details pinned to the top-right corner of the body.
pub struct StatsOverlay<'a> {
    pub room: &'a MeetingRoomState,
    pub theme: &'a Theme,
    pub now: Instant,
}

impl StatsOverlay<'_> {
    fn row(&self, label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!(" {label:<13}"), self.theme.dimmed),
            Span::styled(value, self.theme.text),
        ])
    }
}

impl Widget for StatsOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let on_off = |flag: bool| String::from(if flag { "on" } else { "off" });
        let lines = vec![
            self.row("Meeting ID", self.room.info.id.to_string()),
            self.row(
                "Started",
                self.room.info.starts_at.format("%H:%M").to_string(),
            ),
            self.row("Elapsed", self.room.elapsed(self.now)),
            self.row("Participants", (self.room.participants.len() + 1).to_string()),
            self.row("Microphone", on_off(self.room.microphone_on)),
            self.row("Camera", on_off(self.room.camera_on)),
            self.row(
                "Recording",
                String::from(if self.room.recording { "yes" } else { "no" }),
            ),
        ];

        let height = lines.len() as u16 + 2;
        let width = WIDTH.min(area.width);
        let overlay = Rect {
            x: area.right().saturating_sub(width + 1).max(area.x),
            y: area.y + 1,
            width,
            height: height.min(area.height.saturating_sub(1)),
        };
        if overlay.width < 4 || overlay.height < 3 {
            return;
        }

        Clear.render(overlay, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(Span::styled(" Stats ", self.theme.category))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.border_focus),
            )
            .style(self.theme.hud)
            .render(overlay, buf);
    }
}
