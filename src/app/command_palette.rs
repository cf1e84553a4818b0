use super::action::Action;
use super::state::DialogKind;
use crate::domain::models::{Icon, Route};
use crate::theme::ThemeMode;
use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Navigation,
    Actions,
    Theme,
    Account,
}

impl Category {
    /// Display order of palette groups.
    pub const ORDER: [Category; 4] = [
        Category::Navigation,
        Category::Actions,
        Category::Theme,
        Category::Account,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Category::Navigation => "Navigation",
            Category::Actions => "Actions",
            Category::Theme => "Theme",
            Category::Account => "Account",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommandDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Option<Icon>,
    /// Space-separated key tokens, e.g. "G H" for a chord.
    pub shortcut: Option<&'static str>,
    pub action: Action,
    pub category: Category,
}

impl CommandDefinition {
    pub fn shortcut_keys(&self) -> impl Iterator<Item = &'static str> {
        self.shortcut.into_iter().flat_map(str::split_whitespace)
    }
}

static COMMANDS: Lazy<Vec<CommandDefinition>> = Lazy::new(|| {
    vec![
        CommandDefinition {
            id: "home",
            label: "Go to Home",
            icon: Some(Icon::Home),
            shortcut: Some("G H"),
            action: Action::Navigate(Route::Home),
            category: Category::Navigation,
        },
        CommandDefinition {
            id: "upcoming",
            label: "View Upcoming Meetings",
            icon: Some(Icon::Calendar),
            shortcut: Some("G U"),
            action: Action::Navigate(Route::Upcoming),
            category: Category::Navigation,
        },
        CommandDefinition {
            id: "previous",
            label: "View Previous Meetings",
            icon: Some(Icon::Clock),
            shortcut: Some("G P"),
            action: Action::Navigate(Route::Previous),
            category: Category::Navigation,
        },
        CommandDefinition {
            id: "recordings",
            label: "View Recordings",
            icon: Some(Icon::Video),
            shortcut: Some("G R"),
            action: Action::Navigate(Route::Recordings),
            category: Category::Navigation,
        },
        CommandDefinition {
            id: "personal-room",
            label: "Personal Room",
            icon: Some(Icon::Users),
            shortcut: Some("G M"),
            action: Action::Navigate(Route::PersonalRoom),
            category: Category::Navigation,
        },
        CommandDefinition {
            id: "new-meeting",
            label: "Start Instant Meeting",
            icon: Some(Icon::Plus),
            shortcut: Some("N"),
            action: Action::OpenDialog(DialogKind::InstantMeeting),
            category: Category::Actions,
        },
        CommandDefinition {
            id: "join-meeting",
            label: "Join Meeting",
            icon: Some(Icon::Link),
            shortcut: Some("J"),
            action: Action::OpenDialog(DialogKind::JoinMeeting),
            category: Category::Actions,
        },
        CommandDefinition {
            id: "schedule-meeting",
            label: "Schedule Meeting",
            icon: Some(Icon::Calendar),
            shortcut: Some("S"),
            action: Action::OpenDialog(DialogKind::ScheduleMeeting),
            category: Category::Actions,
        },
        CommandDefinition {
            id: "theme-light",
            label: "Switch to Light Mode",
            icon: Some(Icon::Sun),
            shortcut: None,
            action: Action::SwitchTheme(ThemeMode::Light),
            category: Category::Theme,
        },
        CommandDefinition {
            id: "theme-dark",
            label: "Switch to Dark Mode",
            icon: Some(Icon::Moon),
            shortcut: None,
            action: Action::SwitchTheme(ThemeMode::Dark),
            category: Category::Theme,
        },
        CommandDefinition {
            id: "theme-system",
            label: "Use System Theme",
            icon: Some(Icon::Monitor),
            shortcut: None,
            action: Action::SwitchTheme(ThemeMode::System),
            category: Category::Theme,
        },
        CommandDefinition {
            id: "sign-out",
            label: "Sign Out",
            icon: Some(Icon::LogOut),
            shortcut: None,
            action: Action::SignOut,
            category: Category::Account,
        },
    ]
});

#[must_use]
pub fn get_commands() -> &'static [CommandDefinition] {
    &COMMANDS
}

#[must_use]
pub fn get_command(index: usize) -> Option<&'static CommandDefinition> {
    COMMANDS.get(index)
}

/// Registry indices whose label contains `query`, ignoring case.
///
/// Results come back in display order: grouped by category, registry order within a
/// group. There is no relevance ranking.
#[must_use]
pub fn search_commands(query: &str) -> Vec<usize> {
    let query_lower = query.to_lowercase();
    let mut results: Vec<usize> = get_commands()
        .iter()
        .enumerate()
        .filter(|(_, cmd)| cmd.label.to_lowercase().contains(&query_lower))
        .map(|(i, _)| i)
        .collect();

    // Stable, so registry order survives inside each category.
    results.sort_by_key(|&i| category_rank(COMMANDS[i].category));
    results
}

/// Splits display-ordered matches into non-empty category groups.
#[must_use]
pub fn group_matches(matches: &[usize]) -> Vec<(Category, Vec<usize>)> {
    Category::ORDER
        .iter()
        .filter_map(|&category| {
            let members: Vec<usize> = matches
                .iter()
                .copied()
                .filter(|&i| get_command(i).is_some_and(|cmd| cmd.category == category))
                .collect();
            (!members.is_empty()).then_some((category, members))
        })
        .collect()
}

fn category_rank(category: Category) -> usize {
    Category::ORDER
        .iter()
        .position(|&c| c == category)
        .unwrap_or(Category::ORDER.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(matches: &[usize]) -> Vec<&'static str> {
        matches.iter().map(|&i| get_commands()[i].label).collect()
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = get_commands().iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), get_commands().len());
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let all = search_commands("");
        assert_eq!(all, (0..get_commands().len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_rec_matches_only_recordings() {
        assert_eq!(labels(&search_commands("rec")), vec!["View Recordings"]);
        assert_eq!(labels(&search_commands("REC")), vec!["View Recordings"]);
    }

    #[test]
    fn test_substring_without_ranking() {
        // "meeting" appears mid-label in several commands; order stays registry order.
        assert_eq!(
            labels(&search_commands("meeting")),
            vec![
                "View Upcoming Meetings",
                "View Previous Meetings",
                "Start Instant Meeting",
                "Join Meeting",
                "Schedule Meeting",
            ]
        );
        assert!(search_commands("zzz").is_empty());
    }

    #[test]
    fn test_grouping_omits_empty_categories() {
        let groups = group_matches(&search_commands("mode"));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, Category::Theme);
        assert_eq!(labels(&groups[0].1), vec!["Switch to Light Mode", "Switch to Dark Mode"]);

        let all = group_matches(&search_commands(""));
        let order: Vec<_> = all.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, Category::ORDER.to_vec());
    }

    #[test]
    fn test_shortcut_tokens() {
        let home = &get_commands()[0];
        assert_eq!(home.shortcut_keys().collect::<Vec<_>>(), vec!["G", "H"]);
        let sign_out = get_commands().iter().find(|c| c.id == "sign-out").unwrap();
        assert_eq!(sign_out.shortcut_keys().count(), 0);
    }
}
