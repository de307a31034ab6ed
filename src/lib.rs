//! Tick-label and lookup helpers for time-series charts.
//!
//! Everything here is a pure function over caller-owned data: picking a
//! readable label for an axis tick, finding the sample nearest to the
//! cursor, and scanning a column for its maximum.

pub mod axis;
pub mod data;
pub mod error;
pub mod processing;
pub mod state;
pub mod time;

pub use axis::config::AxisConfig;
pub use axis::ticks::{AxisRole, ColorTicks, SecondaryTicks, TickFormatter, TimeTicks};
pub use error::{Error, Result};
pub use processing::statistics::{max_of_column, try_max_of_column};
pub use state::annotation::{Annotation, AnnotationHelperPosition};
pub use state::time_series::TimeSeries;
pub use time::format::{format_label, LabelGranularity, LabelZone, TimeLabelFormatter};
pub use time::nearest::{find_closest, find_closest_by};
pub use time::point::{EpochValue, PointInTime};
