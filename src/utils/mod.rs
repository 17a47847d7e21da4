pub mod record;
pub mod slug;

pub use record::*;
pub use slug::*;
