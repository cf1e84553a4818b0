use crate::app::action::Action;
use crate::app::command_palette::{self, Category, CommandDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Session state of the command palette.
///
/// `selected_index` always points into `matches`, or is 0 when nothing matches.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandPaletteState {
    open: bool,
    query: String,
    matches: Vec<usize>, // Indices into the command registry, in display order
    selected_index: usize,
}

impl Default for CommandPaletteState {
    fn default() -> Self {
        Self {
            open: false,
            query: String::new(),
            matches: command_palette::search_commands(""),
            selected_index: 0,
        }
    }
}

impl CommandPaletteState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn selected_command(&self) -> Option<&'static CommandDefinition> {
        self.matches
            .get(self.selected_index)
            .and_then(|&i| command_palette::get_command(i))
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.selected_index = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.set_search("");
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn set_search(&mut self, text: &str) {
        self.query = text.to_string();
        self.refresh();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refresh();
        }
    }

    pub fn move_selection(&mut self, direction: Direction) {
        let len = self.matches.len();
        if len == 0 {
            return;
        }
        self.selected_index = match direction {
            Direction::Next => (self.selected_index + 1) % len,
            Direction::Previous if self.selected_index == 0 => len - 1,
            Direction::Previous => self.selected_index - 1,
        };
    }

    /// Highlights `index` if it is inside the filtered list. Returns whether it moved.
    pub fn hover(&mut self, index: usize) -> bool {
        if index >= self.matches.len() {
            return false;
        }
        self.selected_index = index;
        true
    }

    /// Closes the palette and hands back the highlighted command's action.
    /// Does nothing when the filtered list is empty.
    pub fn activate_selected(&mut self) -> Option<Action> {
        let action = self.selected_command()?.action.clone();
        self.close();
        Some(action)
    }

    /// Filtered commands split into category groups, empty groups omitted.
    /// Each entry carries its position in the filtered list.
    #[must_use]
    pub fn grouped(&self) -> Vec<(Category, Vec<(usize, &'static CommandDefinition)>)> {
        let mut position = 0;
        command_palette::group_matches(&self.matches)
            .into_iter()
            .map(|(category, members)| {
                let entries = members
                    .into_iter()
                    .filter_map(|i| command_palette::get_command(i))
                    .map(|cmd| {
                        let entry = (position, cmd);
                        position += 1;
                        entry
                    })
                    .collect();
                (category, entries)
            })
            .collect()
    }

    fn refresh(&mut self) {
        self.matches = command_palette::search_commands(&self.query);
        self.selected_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Route;

    fn opened() -> CommandPaletteState {
        let mut palette = CommandPaletteState::default();
        palette.open();
        palette
    }

    #[test]
    fn test_open_close_idempotent() {
        let mut palette = opened();
        palette.move_selection(Direction::Next);
        palette.open();
        assert!(palette.is_open());
        assert_eq!(palette.selected_index(), 1);

        palette.set_search("view");
        palette.close();
        palette.close();
        assert!(!palette.is_open());
        assert_eq!(palette.query(), "");
        assert_eq!(palette.selected_index(), 0);
    }

    #[test]
    fn test_search_rec_resets_index() {
        let mut palette = opened();
        palette.move_selection(Direction::Next);
        palette.move_selection(Direction::Next);

        palette.set_search("rec");

        assert_eq!(palette.selected_index(), 0);
        assert_eq!(palette.matches().len(), 1);
        assert_eq!(
            palette.selected_command().map(|c| c.label),
            Some("View Recordings")
        );
    }

    #[test]
    fn test_next_wraps_from_last_to_zero() {
        let mut palette = opened();
        palette.set_search("meetings");
        let n = palette.matches().len();
        assert_eq!(n, 2);

        palette.move_selection(Direction::Next);
        assert_eq!(palette.selected_index(), n - 1);
        palette.move_selection(Direction::Next);
        assert_eq!(palette.selected_index(), 0);
    }

    #[test]
    fn test_previous_wraps_from_zero_to_last() {
        let mut palette = opened();
        let last = palette.matches().len() - 1;
        palette.move_selection(Direction::Previous);
        assert_eq!(palette.selected_index(), last);
        assert_eq!(palette.selected_command().map(|c| c.id), Some("sign-out"));
    }

    #[test]
    fn test_empty_result_is_inert() {
        let mut palette = opened();
        palette.set_search("xyzzy");
        assert!(palette.is_empty_result());

        palette.move_selection(Direction::Next);
        palette.move_selection(Direction::Previous);
        assert_eq!(palette.selected_index(), 0);
        assert!(!palette.hover(0));
        assert_eq!(palette.activate_selected(), None);
        assert!(palette.is_open());
    }

    #[test]
    fn test_activate_returns_action_and_closes() {
        let mut palette = opened();
        palette.set_search("upcoming");
        let action = palette.activate_selected();
        assert_eq!(action, Some(Action::Navigate(Route::Upcoming)));
        assert!(!palette.is_open());
        assert_eq!(palette.query(), "");
    }

    #[test]
    fn test_hover_is_bounds_checked() {
        let mut palette = opened();
        let len = palette.matches().len();
        assert!(palette.hover(len - 1));
        assert_eq!(palette.selected_index(), len - 1);
        assert!(!palette.hover(len));
        assert_eq!(palette.selected_index(), len - 1);
    }

    #[test]
    fn test_backspace_refilters() {
        let mut palette = opened();
        palette.push_char('z');
        assert!(palette.is_empty_result());
        palette.pop_char();
        assert_eq!(palette.matches().len(), command_palette::get_commands().len());
    }

    #[test]
    fn test_grouped_positions_follow_display_order() {
        let mut palette = opened();
        palette.set_search("o");
        let positions: Vec<usize> = palette
            .grouped()
            .iter()
            .flat_map(|(_, entries)| entries.iter().map(|(pos, _)| *pos))
            .collect();
        assert_eq!(positions, (0..palette.matches().len()).collect::<Vec<_>>());
    }
}
