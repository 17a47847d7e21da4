pub mod seminar;

pub use seminar::*;
