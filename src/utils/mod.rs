pub mod formatting;
pub mod table;
pub mod time;

pub use time::format_duration;
