use crate::app::command_palette::{Category, CommandDefinition};
use crate::app::state::CommandPaletteState;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a CommandPaletteState,
}

enum PaletteRow {
    Category(Category),
    Command {
        position: usize,
        command: &'static CommandDefinition,
    },
}

#[must_use]
pub fn modal_area(area: Rect) -> Rect {
    centered_rect(60, 60, area)
}

/// Query line, separator, results.
fn sections(modal: Rect) -> (Rect, Rect, Rect) {
    let inner = Block::default().borders(Borders::ALL).inner(modal);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Query input
            Constraint::Length(1), // Separator
            Constraint::Min(0),    // Results
        ])
        .split(inner);
    (layout[0], layout[1], layout[2])
}

fn rows(state: &CommandPaletteState) -> Vec<PaletteRow> {
    let mut rows = Vec::new();
    for (category, entries) in state.grouped() {
        rows.push(PaletteRow::Category(category));
        rows.extend(
            entries
                .into_iter()
                .map(|(position, command)| PaletteRow::Command { position, command }),
        );
    }
    rows
}

/// First visible row, chosen so the highlighted command stays on screen.
fn scroll_offset(rows: &[PaletteRow], selected: usize, height: usize) -> usize {
    let selected_row = rows
        .iter()
        .position(|row| {
            matches!(row, PaletteRow::Command { position, .. } if *position == selected)
        })
        .unwrap_or(0);
    (selected_row + 1).saturating_sub(height)
}

/// Filtered-list position of the command drawn at (`column`, `row`), if any.
#[must_use]
pub fn item_at(area: Rect, state: &CommandPaletteState, column: u16, row: u16) -> Option<usize> {
    let (_, _, results) = sections(modal_area(area));
    if !results.contains(Position::new(column, row)) {
        return None;
    }
    let rows = rows(state);
    let offset = scroll_offset(&rows, state.selected_index(), results.height as usize);
    match rows.get(offset + (row - results.y) as usize) {
        Some(PaletteRow::Command { position, .. }) => Some(*position),
        _ => None,
    }
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_area(area);
        if modal_area.width < 4 || modal_area.height < 4 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMAND PALETTE ", self.theme.header_logo),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        block.render(modal_area, buf);

        let (query_area, separator_area, results_area) = sections(modal_area);

        // Render Query
        let query_line = Line::from(vec![
            Span::styled(format!(" {} ", glyphs::POINTER), self.theme.key_cap),
            Span::raw(" "),
            Span::styled(self.state.query(), self.theme.text),
            Span::styled("_", self.theme.text.add_modifier(Modifier::SLOW_BLINK)),
            if self.state.query().is_empty() {
                Span::styled("Type a command or search...", self.theme.dimmed)
            } else {
                Span::raw("")
            },
        ]);
        buf.set_line(query_area.x, query_area.y, &query_line, query_area.width);

        // Render Separator
        let separator = "─".repeat(separator_area.width as usize);
        buf.set_string(separator_area.x, separator_area.y, separator, self.theme.border);

        if results_area.height == 0 {
            return;
        }

        if self.state.is_empty_result() {
            let no_results = Line::from(Span::styled(
                format!("  No commands found for \"{}\"", self.state.query()),
                self.theme.dimmed,
            ));
            buf.set_line(results_area.x, results_area.y, &no_results, results_area.width);
            return;
        }

        let rows = rows(self.state);
        let selected = self.state.selected_index();
        let offset = scroll_offset(&rows, selected, results_area.height as usize);

        let visible_rows = rows.iter().skip(offset);
        for (y, row) in (results_area.top()..results_area.bottom()).zip(visible_rows) {
            match row {
                PaletteRow::Category(category) => {
                    let header = Line::from(Span::styled(
                        format!(" {}", category.title().to_uppercase()),
                        self.theme.category,
                    ));
                    buf.set_line(results_area.x, y, &header, results_area.width);
                }
                PaletteRow::Command { position, command } => {
                    let line = Rect::new(results_area.x, y, results_area.width, 1);
                    self.render_command(command, *position == selected, line, buf);
                }
            }
        }
    }
}

impl CommandPaletteModal<'_> {
    fn render_command(
        &self,
        command: &CommandDefinition,
        is_selected: bool,
        line: Rect,
        buf: &mut Buffer,
    ) {
        let (style, cap_style) = if is_selected {
            (self.theme.list_selected, self.theme.key_cap_selected)
        } else {
            (self.theme.list_item, self.theme.key_cap)
        };
        if is_selected {
            buf.set_style(line, style);
        }

        let icon = command.icon.map_or(" ", glyphs::icon);
        let label = Line::from(vec![
            Span::styled(if is_selected { " › " } else { "   " }, style),
            Span::styled(format!("{icon}  "), style),
            Span::styled(command.label, style),
        ]);
        buf.set_line(line.x, line.y, &label, line.width);

        // Shortcut key caps, right aligned
        let mut caps: Vec<Span> = Vec::new();
        for key in command.shortcut_keys() {
            caps.push(Span::styled(format!(" {key} "), cap_style));
            caps.push(Span::styled(" ", style));
        }
        let caps = Line::from(caps);
        let caps_width = caps.width() as u16;
        if caps_width > 0 && caps_width < line.width {
            buf.set_line(line.right() - caps_width, line.y, &caps, caps_width);
        }
    }
}
