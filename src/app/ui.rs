use crate::app::state::AppState;
use crate::components::{
    footer::Footer, header::Header, hud::Hud, modals::ModalManager, page::Page,
    stats::StatsOverlay,
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use tokio::time::Instant;

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = &app_state.theme;
    let now = Instant::now();
    let layout = get_layout(f.area());

    // --- Header (with island) ---
    if layout.header.height > 0 {
        f.render_widget(
            Header {
                state: app_state,
                theme,
                now,
            },
            layout.header,
        );
    }

    // --- Body ---
    if layout.body.width > 0 && layout.body.height > 0 {
        f.render_widget(
            Page {
                state: app_state,
                theme,
                now,
            },
            layout.body,
        );

        if let Some(room) = app_state.meeting.as_ref().filter(|r| r.show_stats) {
            if app_state.in_meeting_room() {
                f.render_widget(StatsOverlay { room, theme, now }, layout.body);
            }
        }

        if let Some(event) = app_state.hud.visible() {
            f.render_widget(Hud { event: &event, theme }, layout.body);
        }
    }

    // --- Footer ---
    if layout.footer.height > 0 {
        f.render_widget(
            Footer {
                state: app_state,
                theme,
            },
            layout.footer,
        );
    }

    // --- Modals ---
    f.render_widget(
        ModalManager {
            theme,
            app_state,
        },
        f.area(),
    );
}
