use crate::app::config::Settings;
use crate::domain::models::MeetingId;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ToggleMicrophone,
    ToggleCamera,
    StartInstantMeeting,
    JoinMeeting(MeetingId),
    ScheduleMeeting(String),
    LeaveMeeting,
    SignOut,
    PersistSettings(PathBuf, Settings),
}
