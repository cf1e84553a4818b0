use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState},
};
use crate::domain::models::Route;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Navigate(route) => {
            close_overlays(state);
            UpdateResult::Handled(navigate(state, route.clone()))
        }
        Action::SignOut => {
            if state.signed_in {
                UpdateResult::Handled(Some(Command::SignOut))
            } else {
                UpdateResult::Handled(None)
            }
        }
        Action::SignedOut(Ok(())) => {
            state.signed_in = false;
            if let Some(room) = state.meeting.take() {
                state.previous.push(room.info);
            }
            state.route = Route::SignIn;
            state.mode = AppMode::Normal;
            tracing::info!("signed out");
            UpdateResult::Handled(None)
        }
        Action::SignedOut(Err(e)) => {
            tracing::warn!(error = %e, "sign out failed");
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn close_overlays(state: &mut AppState) {
    state.command_palette.close();
    state.dialog = None;
    state.mode = AppMode::Normal;
}

/// Moves to `route`, leaving the active call first if the route is elsewhere.
fn navigate(state: &mut AppState, route: Route) -> Option<Command> {
    let route = if state.signed_in { route } else { Route::SignIn };
    if route == state.route {
        return None;
    }

    tracing::debug!(from = %state.route.path(), to = %route.path(), "navigate");
    let leave = match state.meeting.take() {
        Some(room) if route != Route::Meeting(room.info.id.clone()) => {
            state.previous.push(room.info);
            Some(Command::LeaveMeeting)
        }
        other => {
            state.meeting = other;
            None
        }
    };
    state.route = route;
    leave
}
