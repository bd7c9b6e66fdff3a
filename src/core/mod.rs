pub mod backup;
pub mod clock;
pub mod config;
pub mod del;
pub mod history;
pub mod log;
pub mod ticker;
pub mod timer;
