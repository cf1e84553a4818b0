pub mod action;
pub mod bus;
pub mod command;
pub mod command_palette;
pub mod config;
pub mod features;
pub mod input;
pub mod keymap;
pub mod keys;
pub mod r#loop;
pub mod presenter;
pub mod reducer;
pub mod state;
pub mod ui;
