pub mod notice;
pub mod step;
pub mod ticket;
