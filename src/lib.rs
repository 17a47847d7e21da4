pub mod app;
pub mod config;
pub mod handlers;
pub mod models;
pub mod utils;

// Re-export commonly used items
pub use app::{create_app, ApiDoc, AppState};
pub use config::Config;
pub use models::{
    Author, Citation, Seminar, SeminarSummary, Talk, TalkSummary,
    MIN_AUTHORS, MIN_CITATIONS, MIN_TALKS, DEFAULT_ROOM,
};
pub use utils::slug;
