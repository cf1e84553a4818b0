use crate::app::state::{AppState, MeetingRoomState};
use crate::domain::models::{Icon, MeetingInfo, Route};
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use tokio::time::Instant;

pub const PERSONAL_ROOM_LINK: &str = "https://ro0m.app/meeting/personal";

/// Body content for the current route.
pub struct Page<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
    pub now: Instant,
}

impl Page<'_> {
    fn action_card(&self, keys: &'static str, title: &'static str, icon: Icon) -> Line<'static> {
        let mut spans = vec![Span::raw("  ")];
        for key in keys.split(' ') {
            spans.push(Span::styled(format!(" {key} "), self.theme.key_cap));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {}  {title}", glyphs::icon(icon)), self.theme.list_item));
        Line::from(spans)
    }

    fn meeting_list(&self, meetings: &[MeetingInfo], empty: &'static str) -> Vec<Line<'static>> {
        if meetings.is_empty() {
            return vec![Line::from(Span::styled(format!("  {empty}"), self.theme.dimmed))];
        }
        meetings
            .iter()
            .map(|meeting| {
                Line::from(vec![
                    Span::styled(
                        format!("  {}  ", glyphs::icon(Icon::Calendar)),
                        self.theme.dimmed,
                    ),
                    Span::styled(meeting.description.clone(), self.theme.list_item),
                    Span::styled(
                        format!("  {}  ", meeting.starts_at.format("%a %d %b, %H:%M")),
                        self.theme.dimmed,
                    ),
                    Span::styled(format!("/meeting/{}", meeting.id), self.theme.dimmed),
                ])
            })
            .collect()
    }

    fn home(&self) -> Vec<Line<'static>> {
        let clock = chrono::Local::now();
        let mut lines = vec![
            Line::from(Span::styled(
                format!("  {}", clock.format("%H:%M")),
                self.theme.page_title,
            )),
            Line::from(Span::styled(
                format!("  {}", clock.format("%A, %d %B %Y")),
                self.theme.text,
            )),
            Line::from(""),
        ];
        if let Some(next) = self.state.scheduled.first() {
            lines.push(Line::from(Span::styled(
                format!(
                    "  Upcoming meeting at {}: {}",
                    next.starts_at.format("%H:%M"),
                    next.description
                ),
                self.theme.text,
            )));
            lines.push(Line::from(""));
        }
        lines.push(self.action_card("N", "New Meeting", Icon::Plus));
        lines.push(self.action_card("J", "Join Meeting", Icon::Link));
        lines.push(self.action_card("S", "Schedule Meeting", Icon::Calendar));
        lines.push(self.action_card("G R", "View Recordings", Icon::Video));
        lines
    }

    fn personal_room(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled("  Personal Meeting Room", self.theme.page_title)),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Topic:       ", self.theme.dimmed),
                Span::styled("My Meeting Room", self.theme.text),
            ]),
            Line::from(vec![
                Span::styled("  Meeting ID:  ", self.theme.dimmed),
                Span::styled("personal", self.theme.text),
            ]),
            Line::from(vec![
                Span::styled("  Invite Link: ", self.theme.dimmed),
                Span::styled(PERSONAL_ROOM_LINK, self.theme.text),
            ]),
            Line::from(""),
            self.action_card("J", "Join with the link above", Icon::Link),
        ]
    }

    fn meeting_room(&self, room: &MeetingRoomState) -> Vec<Line<'static>> {
        let on_off = |on: bool, label: &'static str, icon_on: Icon, icon_off: Icon| {
            let (icon, style, state) = if on {
                (icon_on, self.theme.status_live, "on")
            } else {
                (icon_off, self.theme.status_muted, "off")
            };
            Span::styled(format!("{} {label} {state}   ", glyphs::icon(icon)), style)
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("  {}", room.info.description), self.theme.page_title),
                Span::styled(format!("   {}", room.elapsed(self.now)), self.theme.dimmed),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::raw("  "),
                on_off(room.microphone_on, "Mic", Icon::Mic, Icon::MicOff),
                on_off(room.camera_on, "Camera", Icon::Video, Icon::VideoOff),
                if room.hand_raised {
                    Span::styled(format!("{} Hand raised", glyphs::icon(Icon::Hand)), self.theme.tint_warning)
                } else {
                    Span::raw("")
                },
            ]),
        ];
        if room.recording {
            lines.push(Line::from(Span::styled(
                format!("  {} Recording", glyphs::icon(Icon::Radio)),
                self.theme.tint_recording,
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  Participants ({})", room.participants.len() + 1),
            self.theme.category,
        )));
        lines.push(Line::from(Span::styled("    You", self.theme.list_item)));
        lines.extend(
            room.participants
                .iter()
                .map(|name| Line::from(Span::styled(format!("    {name}"), self.theme.list_item))),
        );
        lines
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match &self.state.route {
            Route::Home => self.home(),
            Route::Upcoming => self.meeting_list(&self.state.scheduled, "No upcoming meetings"),
            Route::Previous => self.meeting_list(&self.state.previous, "No previous meetings"),
            Route::Recordings => vec![Line::from(Span::styled(
                "  No recordings",
                self.theme.dimmed,
            ))],
            Route::PersonalRoom => self.personal_room(),
            Route::SignIn => vec![
                Line::from(Span::styled("  You are signed out.", self.theme.page_title)),
                Line::from(Span::styled(
                    "  Restart ro0m to sign in again.",
                    self.theme.dimmed,
                )),
            ],
            Route::Meeting(id) => match &self.state.meeting {
                Some(room) => self.meeting_room(room),
                None => vec![Line::from(Span::styled(
                    format!("  Meeting {id} has ended"),
                    self.theme.dimmed,
                ))],
            },
        }
    }
}

impl Widget for Page<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.state.route.title(), self.theme.page_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
