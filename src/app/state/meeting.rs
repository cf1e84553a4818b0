use crate::domain::models::MeetingInfo;
use tokio::time::Instant;

/// Local view of the call the user is in.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingRoomState {
    pub info: MeetingInfo,
    pub joined_at: Instant,
    pub microphone_on: bool,
    pub camera_on: bool,
    pub hand_raised: bool,
    pub show_stats: bool,
    pub participants: Vec<String>,
    pub recording: bool,
}

impl MeetingRoomState {
    #[must_use]
    pub fn new(info: MeetingInfo, joined_at: Instant) -> Self {
        Self {
            info,
            joined_at,
            microphone_on: true,
            camera_on: true,
            hand_raised: false,
            show_stats: false,
            participants: Vec::new(),
            recording: false,
        }
    }

    /// Call duration as `MM:SS`, or `H:MM:SS` past the hour.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> String {
        let secs = now.saturating_duration_since(self.joined_at).as_secs();
        let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
        if h > 0 {
            format!("{h}:{m:02}:{s:02}")
        } else {
            format!("{m:02}:{s:02}")
        }
    }

    pub fn participant_joined(&mut self, name: &str) {
        if !self.participants.iter().any(|p| p == name) {
            self.participants.push(name.to_string());
        }
    }

    pub fn participant_left(&mut self, name: &str) {
        self.participants.retain(|p| p != name);
    }
}
