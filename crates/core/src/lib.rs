#![forbid(unsafe_code)]

pub mod instructions;
pub mod model;
pub mod time;

pub use time::Clock;
