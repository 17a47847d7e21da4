pub mod citation;
pub mod author;
pub mod talk;
pub mod seminar;
pub mod summary;

pub use citation::*;
pub use author::*;
pub use talk::*;
pub use seminar::*;
pub use summary::*;
