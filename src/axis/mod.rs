pub mod config;
pub mod ticks;
