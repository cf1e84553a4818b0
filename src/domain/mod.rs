pub mod error;
pub mod meeting;
pub mod models;
