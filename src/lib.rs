pub mod api;
pub mod app;
pub mod drawer;
pub mod error;
pub mod jobs;
