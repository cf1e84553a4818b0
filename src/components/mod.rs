pub mod footer;
pub mod header;
pub mod hud;
pub mod island;
pub mod modals;
pub mod page;
pub mod stats;
