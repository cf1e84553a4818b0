use chrono::{DateTime, Local};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MeetingId(pub String);

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl MeetingId {
    /// Accepts either a bare id or a full invitation link ending in `/meeting/<id>`.
    #[must_use]
    pub fn from_link(link: &str) -> Option<Self> {
        let trimmed = link.trim().trim_end_matches('/');
        let id = trimmed
            .rsplit_once("/meeting/")
            .map_or(trimmed, |(_, id)| id);

        if id.is_empty() || id.contains('/') || id.contains(char::is_whitespace) {
            return None;
        }
        Some(Self(id.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Upcoming,
    Previous,
    Recordings,
    PersonalRoom,
    SignIn,
    Meeting(MeetingId),
}

impl Route {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Upcoming => "/upcoming".to_string(),
            Route::Previous => "/previous".to_string(),
            Route::Recordings => "/recordings".to_string(),
            Route::PersonalRoom => "/personal-room".to_string(),
            Route::SignIn => "/sign-in".to_string(),
            Route::Meeting(id) => format!("/meeting/{id}"),
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Upcoming => "Upcoming",
            Route::Previous => "Previous",
            Route::Recordings => "Recordings",
            Route::PersonalRoom => "Personal Room",
            Route::SignIn => "Sign In",
            Route::Meeting(_) => "Meeting",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeetingInfo {
    pub id: MeetingId,
    pub description: String,
    pub starts_at: DateTime<Local>,
}

/// Ambient call activity reported by the meeting backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallEvent {
    ParticipantJoined(String),
    ParticipantLeft(String),
    RecordingStarted,
    RecordingStopped,
    CallEnded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Bell,
    Home,
    Calendar,
    Clock,
    Video,
    VideoOff,
    Users,
    Plus,
    Link,
    Sun,
    Moon,
    Monitor,
    LogOut,
    Mic,
    MicOff,
    Hand,
    AlertCircle,
    Radio,
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_id_from_link() {
        assert_eq!(
            MeetingId::from_link("https://ro0m.app/meeting/abc-123"),
            Some(MeetingId("abc-123".to_string()))
        );
        assert_eq!(
            MeetingId::from_link("  abc-123/ "),
            Some(MeetingId("abc-123".to_string()))
        );
        assert_eq!(MeetingId::from_link(""), None);
        assert_eq!(MeetingId::from_link("two words"), None);
        assert_eq!(MeetingId::from_link("https://ro0m.app/meeting/"), None);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Upcoming.path(), "/upcoming");
        assert_eq!(Route::Previous.path(), "/previous");
        assert_eq!(Route::Recordings.path(), "/recordings");
        assert_eq!(Route::PersonalRoom.path(), "/personal-room");
        assert_eq!(
            Route::Meeting(MeetingId("x1".to_string())).path(),
            "/meeting/x1"
        );
    }
}
