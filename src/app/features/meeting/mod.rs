mod actions;
mod handler;

pub use actions::update;
pub use handler::handle_command;
