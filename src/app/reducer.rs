use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};
use tokio::time::Instant;

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            let now = Instant::now();
            state.hud.expire(now);
            state.island.expire(now);
            return None;
        }
        Action::Quit => {
            state.should_quit = true;
            return None;
        }
        _ => {}
    }

    if let UpdateResult::Handled(command) = features::ui::update(state, &action) {
        return command;
    }
    if let UpdateResult::Handled(command) = features::navigation::update(state, &action) {
        return command;
    }
    if let UpdateResult::Handled(command) = features::meeting::update(state, &action) {
        return command;
    }

    tracing::debug!(?action, "unhandled action");
    None
}
