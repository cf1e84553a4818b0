use crate::app::{
    action::{Action, UpdateResult},
    bus::{HudNotice, IslandNotice, Severity},
    command::Command,
    state::{AppMode, AppState, DialogKind, DialogState, MeetingRoomState},
};
use crate::domain::models::{CallEvent, Icon, MeetingId, MeetingInfo, Route};
use tokio::time::Instant;

pub const DEFAULT_DESCRIPTION: &str = "Instant Meeting";

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        // --- Dialogs ---
        Action::OpenDialog(kind) => {
            state.command_palette.close();
            state.dialog = Some(DialogState::new(*kind));
            state.mode = AppMode::Dialog;
            UpdateResult::Handled(None)
        }
        Action::TextAreaInput(key) => {
            if let Some(dialog) = &mut state.dialog {
                if let Some(input) = &mut dialog.input {
                    input.text_area.input(*key);
                    dialog.error = None;
                }
            }
            UpdateResult::Handled(None)
        }
        Action::SubmitDialog => UpdateResult::Handled(submit_dialog(state)),

        // --- In-call toggles ---
        Action::ToggleMicrophone if state.in_meeting_room() => {
            UpdateResult::Handled(Some(Command::ToggleMicrophone))
        }
        Action::ToggleCamera if state.in_meeting_room() => {
            UpdateResult::Handled(Some(Command::ToggleCamera))
        }
        Action::ToggleHand => {
            if let Some(room) = state.meeting.as_mut() {
                room.hand_raised = !room.hand_raised;
                let raised = room.hand_raised;
                state.notify(
                    HudNotice::new(if raised { "Hand Raised" } else { "Hand Lowered" })
                        .icon(Icon::Hand)
                        .active(raised),
                );
            }
            UpdateResult::Handled(None)
        }
        Action::ToggleStats => {
            if let Some(room) = state.meeting.as_mut() {
                room.show_stats = !room.show_stats;
            }
            UpdateResult::Handled(None)
        }
        Action::ToggleMicrophone | Action::ToggleCamera => UpdateResult::Handled(None),

        // --- Async results ---
        Action::MicrophoneToggled(result) => {
            match result {
                Ok(on) => {
                    // A result landing after the call ended has nothing to confirm.
                    if let Some(room) = state.meeting.as_mut() {
                        room.microphone_on = *on;
                        let (label, icon) = if *on {
                            ("Microphone On", Icon::Mic)
                        } else {
                            ("Microphone Off", Icon::MicOff)
                        };
                        state.notify(HudNotice::new(label).icon(icon).active(*on));
                    }
                }
                // Failures are only logged; there is no failure HUD.
                Err(e) => tracing::warn!(error = %e, "microphone toggle failed"),
            }
            UpdateResult::Handled(None)
        }
        Action::CameraToggled(result) => {
            match result {
                Ok(on) => {
                    // A result landing after the call ended has nothing to confirm.
                    if let Some(room) = state.meeting.as_mut() {
                        room.camera_on = *on;
                        let (label, icon) = if *on {
                            ("Camera On", Icon::Video)
                        } else {
                            ("Camera Off", Icon::VideoOff)
                        };
                        state.notify(HudNotice::new(label).icon(icon).active(*on));
                    }
                }
                Err(e) => tracing::warn!(error = %e, "camera toggle failed"),
            }
            UpdateResult::Handled(None)
        }
        Action::MeetingStarted(result) => {
            match result {
                Ok(info) => {
                    enter_room(state, info.clone());
                    state.notify(
                        IslandNotice::new("Meeting Created")
                            .icon(Icon::Video)
                            .severity(Severity::Success),
                    );
                }
                Err(e) => failed(state, "Failed to create Meeting", e),
            }
            UpdateResult::Handled(None)
        }
        Action::MeetingJoined(result) => {
            match result {
                Ok(info) => {
                    enter_room(state, info.clone());
                    state.notify(
                        IslandNotice::new("Joined Meeting")
                            .icon(Icon::Link)
                            .severity(Severity::Success),
                    );
                }
                Err(e) => failed(state, "Failed to join Meeting", e),
            }
            UpdateResult::Handled(None)
        }
        Action::MeetingScheduled(result) => {
            match result {
                Ok(info) => {
                    state.scheduled.push(info.clone());
                    state.scheduled.sort_by_key(|m| m.starts_at);
                    state.notify(
                        IslandNotice::new("Meeting Created")
                            .icon(Icon::Calendar)
                            .severity(Severity::Success),
                    );
                }
                Err(e) => failed(state, "Failed to create Meeting", e),
            }
            UpdateResult::Handled(None)
        }
        Action::MeetingLeft(result) => {
            if let Err(e) = result {
                tracing::warn!(error = %e, "leaving meeting failed");
            }
            UpdateResult::Handled(None)
        }
        Action::CallEvent(event) => {
            call_event(state, event);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn submit_dialog(state: &mut AppState) -> Option<Command> {
    let dialog = state.dialog.as_mut()?;
    let command = match dialog.kind {
        DialogKind::InstantMeeting => Command::StartInstantMeeting,
        DialogKind::JoinMeeting => match MeetingId::from_link(&dialog.value()) {
            Some(id) => Command::JoinMeeting(id),
            None => {
                dialog.error = Some("Enter a valid meeting link".to_string());
                return None;
            }
        },
        DialogKind::ScheduleMeeting => {
            let value = dialog.value();
            let description = if value.is_empty() {
                DEFAULT_DESCRIPTION.to_string()
            } else {
                value
            };
            Command::ScheduleMeeting(description)
        }
    };
    state.dialog = None;
    state.mode = AppMode::Normal;
    Some(command)
}

fn enter_room(state: &mut AppState, info: MeetingInfo) {
    if let Some(previous) = state.meeting.take() {
        state.previous.push(previous.info);
    }
    tracing::info!(id = %info.id, "entered meeting");
    state.route = Route::Meeting(info.id.clone());
    state.meeting = Some(MeetingRoomState::new(info, Instant::now()));
    state.mode = AppMode::Normal;
}

fn failed(state: &AppState, label: &str, error: &str) {
    tracing::warn!(error = %error, "{label}");
    state.notify(
        IslandNotice::new(label)
            .icon(Icon::AlertCircle)
            .severity(Severity::Error),
    );
}

fn call_event(state: &mut AppState, event: &CallEvent) {
    let Some(room) = state.meeting.as_mut() else {
        tracing::debug!(?event, "call event without an active call");
        return;
    };

    let notice = match event {
        CallEvent::ParticipantJoined(name) => {
            room.participant_joined(name);
            IslandNotice::new(format!("{name} joined")).icon(Icon::Users)
        }
        CallEvent::ParticipantLeft(name) => {
            room.participant_left(name);
            IslandNotice::new(format!("{name} left")).icon(Icon::Users)
        }
        CallEvent::RecordingStarted => {
            room.recording = true;
            IslandNotice::new("Recording started")
                .icon(Icon::Radio)
                .severity(Severity::Recording)
        }
        CallEvent::RecordingStopped => {
            room.recording = false;
            IslandNotice::new("Recording stopped")
                .icon(Icon::Radio)
                .severity(Severity::Info)
        }
        CallEvent::CallEnded => {
            if let Some(room) = state.meeting.take() {
                state.previous.push(room.info);
            }
            state.route = Route::Home;
            IslandNotice::new("Call ended")
                .icon(Icon::VideoOff)
                .severity(Severity::Warning)
        }
    };
    state.notify(notice);
}
