pub mod annotation;
pub mod time_series;
