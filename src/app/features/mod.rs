pub mod meeting;
pub mod navigation;
pub mod ui;
