mod groups;
pub mod types;

use crate::app::state::AppState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let theme = self.theme;

        // Status segment
        let status_span = match &state.meeting {
            Some(room) if state.in_meeting_room() => Span::styled(
                format!("  LIVE {}  ", room.info.id),
                theme.status_live,
            ),
            _ if !state.signed_in => Span::styled("  SIGNED OUT  ", theme.status_muted),
            _ => Span::styled(
                format!("  {}  ", state.route.title().to_uppercase()),
                theme.footer_val.add_modifier(Modifier::BOLD),
            ),
        };

        let mut spans = vec![status_span, Span::raw("  ")];

        let available_width = area.width.saturating_sub(4); // Margin
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in groups::get_groups(state) {
            let Some(first_item) = group.items.first() else {
                continue;
            };

            // Check if we can fit at least the first item of the group
            let first_item_width = first_item.key.len() + first_item.desc.len() + 4;
            if current_width + first_item_width > available_width as usize {
                break;
            }

            // Group name as a subtle label when there's plenty of space
            if area.width > 100 {
                let group_label = Span::styled(format!("{}: ", group.name), theme.dimmed);
                if current_width + group_label.width() + first_item_width < available_width as usize
                {
                    current_width += group_label.width();
                    spans.push(group_label);
                }
            }

            for item in group.items {
                let key = Span::styled(
                    format!(" {} ", item.key),
                    if item.highlighted {
                        theme.header_logo
                    } else {
                        theme.footer_key
                    },
                );
                let desc = Span::styled(
                    format!(" {} ", item.desc),
                    if item.highlighted {
                        theme.footer_val.add_modifier(Modifier::BOLD)
                    } else {
                        theme.footer_val
                    },
                );

                let item_width = key.width() + desc.width();
                if current_width + item_width + 1 > available_width as usize {
                    break;
                }
                spans.push(key);
                spans.push(desc);
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw("  "));
            current_width += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
