use crate::app::{action::Action, command::Command, config};
use crate::domain::meeting::MeetingFacade;
use anyhow::Result;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn handle_command(
    command: Command,
    facade: Arc<dyn MeetingFacade>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::ToggleMicrophone => {
            spawn_result(tx, Action::MicrophoneToggled, async move {
                facade.toggle_microphone().await
            });
        }
        Command::ToggleCamera => {
            spawn_result(tx, Action::CameraToggled, async move {
                facade.toggle_camera().await
            });
        }
        Command::StartInstantMeeting => {
            spawn_result(tx, Action::MeetingStarted, async move {
                facade.start_instant_meeting().await
            });
        }
        Command::JoinMeeting(id) => {
            spawn_result(tx, Action::MeetingJoined, async move {
                facade.join_meeting(&id).await
            });
        }
        Command::ScheduleMeeting(description) => {
            spawn_result(tx, Action::MeetingScheduled, async move {
                facade.schedule_meeting(&description).await
            });
        }
        Command::LeaveMeeting => {
            spawn_result(tx, Action::MeetingLeft, async move {
                facade.leave_meeting().await
            });
        }
        Command::SignOut => {
            spawn_result(tx, Action::SignedOut, async move { facade.sign_out().await });
        }
        Command::PersistSettings(path, settings) => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = config::save_settings(&path, &settings) {
                    tracing::warn!(path = %path.display(), error = %e, "failed to save settings");
                }
            });
        }
    }
    Ok(())
}

/// Awaits `fut` on a background task and reports its outcome as an action.
fn spawn_result<T, F>(
    tx: mpsc::Sender<Action>,
    to_action: fn(Result<T, String>) -> Action,
    fut: F,
) where
    T: Send + 'static,
    F: Future<Output = Result<T>> + Send + 'static,
{
    tokio::spawn(async move {
        let result = fut.await.map_err(|e| format!("{e:#}"));
        let _ = tx.send(to_action(result)).await;
    });
}
