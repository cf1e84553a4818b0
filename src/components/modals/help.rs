use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("G H", "Go to Home"),
            ("G U", "Go to Upcoming"),
            ("G P", "Go to Previous"),
            ("G R", "View Recordings"),
            ("G M", "Go to Personal Room"),
        ],
    ),
    (
        "Actions",
        &[
            ("N", "New instant meeting"),
            ("J", "Join meeting by link"),
            ("S", "Schedule a meeting"),
        ],
    ),
    (
        "Meeting Room",
        &[
            ("M", "Toggle microphone"),
            ("V", "Toggle camera"),
            ("H", "Raise / lower hand"),
            ("I", "Show call stats"),
        ],
    ),
    (
        "General",
        &[
            ("Ctrl K", "Command palette (⌘K on macOS)"),
            ("?", "Show this help"),
            ("Esc", "Close overlay"),
            ("Ctrl C", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" KEYBOARD SHORTCUTS ", self.theme.header_logo),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let mut rows = Vec::new();
        for (i, (title, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*title, self.theme.category)),
                Cell::from(""),
            ]));
            for (keys, description) in *bindings {
                let caps: Vec<Span> = keys
                    .split(' ')
                    .flat_map(|key| {
                        [
                            Span::raw(" "),
                            Span::styled(format!(" {key} "), self.theme.key_cap),
                        ]
                    })
                    .collect();
                rows.push(Row::new(vec![
                    Cell::from(Line::from(caps)),
                    Cell::from(Span::styled(*description, self.theme.list_item)),
                ]));
            }
        }

        let table = Table::new(
            rows,
            [Constraint::Percentage(30), Constraint::Percentage(70)],
        )
        .block(block);

        table.render(help_area, buf);
    }
}
