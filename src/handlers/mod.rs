pub mod status;
pub mod seminars;
pub mod talks;
pub mod web;

pub use status::*;
pub use seminars::*;
pub use talks::*;
