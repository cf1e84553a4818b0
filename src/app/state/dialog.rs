use super::input::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    InstantMeeting,
    JoinMeeting,
    ScheduleMeeting,
}

impl DialogKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            DialogKind::InstantMeeting => " Start an Instant Meeting ",
            DialogKind::JoinMeeting => " Type the link here ",
            DialogKind::ScheduleMeeting => " Create Meeting ",
        }
    }

    #[must_use]
    pub fn prompt(self) -> &'static str {
        match self {
            DialogKind::InstantMeeting => "Press Enter to start the meeting now.",
            DialogKind::JoinMeeting => "Paste an invitation link or a meeting id.",
            DialogKind::ScheduleMeeting => "Add a description for the meeting.",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            DialogKind::InstantMeeting => "",
            DialogKind::JoinMeeting => "Meeting link",
            DialogKind::ScheduleMeeting => "Description",
        }
    }

    #[must_use]
    pub fn has_text_input(self) -> bool {
        !matches!(self, DialogKind::InstantMeeting)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogState<'a> {
    pub kind: DialogKind,
    pub input: Option<InputState<'a>>,
    /// Validation message shown under the field; cleared on the next keystroke.
    pub error: Option<String>,
}

impl DialogState<'_> {
    #[must_use]
    pub fn new(kind: DialogKind) -> Self {
        Self {
            kind,
            input: kind
                .has_text_input()
                .then(|| InputState::with_placeholder(kind.placeholder())),
            error: None,
        }
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.input.as_ref().map(InputState::value).unwrap_or_default()
    }
}
