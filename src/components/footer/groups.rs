use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    match state.mode {
        AppMode::Normal => {
            let mut groups = Vec::new();

            if let Some(room) = &state.meeting {
                if state.in_meeting_room() {
                    groups.push(FooterGroup {
                        name: "CALL",
                        items: vec![
                            FooterItem::new("M", "mic").highlighted(!room.microphone_on),
                            FooterItem::new("V", "cam").highlighted(!room.camera_on),
                            FooterItem::new("H", "hand").highlighted(room.hand_raised),
                            FooterItem::new("I", "stats").highlighted(room.show_stats),
                        ],
                    });
                }
            }

            groups.push(FooterGroup {
                name: "GO",
                items: vec![
                    FooterItem::new("G H", "home"),
                    FooterItem::new("G U", "upcoming"),
                    FooterItem::new("G P", "previous"),
                    FooterItem::new("G R", "recordings"),
                    FooterItem::new("G M", "room"),
                ],
            });
            groups.push(FooterGroup {
                name: "MEET",
                items: vec![
                    FooterItem::new("N", "new"),
                    FooterItem::new("J", "join"),
                    FooterItem::new("S", "schedule"),
                ],
            });
            groups.push(FooterGroup {
                name: "APP",
                items: vec![
                    FooterItem::new("^K", "commands"),
                    FooterItem::new("?", "help"),
                    FooterItem::new("^C", "quit"),
                ],
            });
            groups
        }
        AppMode::CommandPalette => vec![FooterGroup {
            name: "PALETTE",
            items: vec![
                FooterItem::new("↑/↓", "select"),
                FooterItem::new("Enter", "run"),
                FooterItem::new("Esc", "close"),
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![FooterItem::new("Esc", "close")],
        }],
        AppMode::Dialog => vec![FooterGroup {
            name: "DIALOG",
            items: vec![
                FooterItem::new("Enter", "confirm"),
                FooterItem::new("Esc", "cancel"),
            ],
        }],
    }
}
