pub mod calendar;
pub mod format;
pub mod nearest;
pub mod point;
