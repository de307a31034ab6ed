use serde::{Deserialize, Serialize};

use super::config::{AxisConfig, MAX_SECONDARY_DECIMALS};
use crate::time::format::TimeLabelFormatter;
use crate::time::point::PointInTime;

/// The axes of a chart that share the same tick positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisRole {
    /// Main time axis.
    Time,
    /// Secondary x-axis (depth) drawn below the time axis.
    Secondary,
    /// Time labels of the colour-legend chart.
    Color,
}

impl AxisRole {
    pub fn label(&self) -> &'static str {
        match self {
            AxisRole::Time => "Time",
            AxisRole::Secondary => "Depth",
            AxisRole::Color => "Color",
        }
    }

    /// Build the labelling strategy for this role. `lookup` maps a tick
    /// instant to the secondary-axis value (for `Secondary`) or to the value
    /// of the nearest data row (for `Color`); the time axis ignores it.
    pub fn labeler<'a, F>(self, config: &AxisConfig, lookup: F) -> Box<dyn TickFormatter + 'a>
    where
        F: Fn(PointInTime) -> Option<f64> + 'a,
    {
        match self {
            AxisRole::Time => Box::new(TimeTicks::new(config)),
            AxisRole::Secondary => Box::new(SecondaryTicks::new(config, lookup)),
            AxisRole::Color => Box::new(ColorTicks::new(config, lookup)),
        }
    }
}

/// Produces the label for one tick of an axis. An empty string means the
/// tick is drawn without a label.
pub trait TickFormatter {
    fn role(&self) -> AxisRole;

    fn format_tick(&self, instant: PointInTime, tick_index: usize) -> String;

    /// Labels for a whole row of ticks, indexed from zero.
    fn format_ticks(&self, ticks: &[PointInTime]) -> Vec<String> {
        ticks
            .iter()
            .enumerate()
            .map(|(i, &t)| self.format_tick(t, i))
            .collect()
    }
}

/// Labels for the main time axis. In dual-axis mode the ticks reserved for
/// the secondary axis are left blank.
#[derive(Debug, Clone)]
pub struct TimeTicks {
    config: AxisConfig,
    formatter: TimeLabelFormatter,
}

impl TimeTicks {
    pub fn new(config: &AxisConfig) -> Self {
        Self {
            config: config.clone(),
            formatter: TimeLabelFormatter::new(config.zone),
        }
    }
}

impl TickFormatter for TimeTicks {
    fn role(&self) -> AxisRole {
        AxisRole::Time
    }

    fn format_tick(&self, instant: PointInTime, tick_index: usize) -> String {
        if self.config.is_secondary_tick(tick_index) {
            return String::new();
        }
        self.formatter.format(instant)
    }
}

/// Labels for the secondary axis: only the reserved ticks get a label, the
/// looked-up value with its unit.
pub struct SecondaryTicks<F> {
    config: AxisConfig,
    lookup: F,
}

impl<F> SecondaryTicks<F>
where
    F: Fn(PointInTime) -> Option<f64>,
{
    pub fn new(config: &AxisConfig, lookup: F) -> Self {
        Self {
            config: config.clone(),
            lookup,
        }
    }
}

impl<F> TickFormatter for SecondaryTicks<F>
where
    F: Fn(PointInTime) -> Option<f64>,
{
    fn role(&self) -> AxisRole {
        AxisRole::Secondary
    }

    fn format_tick(&self, instant: PointInTime, tick_index: usize) -> String {
        if !self.config.is_secondary_tick(tick_index) {
            return String::new();
        }
        match (self.lookup)(instant) {
            Some(value) if value.is_finite() => format_value(
                value,
                self.config.secondary_decimals,
                &self.config.secondary_unit,
            ),
            _ => String::new(),
        }
    }
}

/// Time labels for the colour-legend chart. Blank on reserved ticks and
/// wherever the nearest data row holds a sentinel value.
pub struct ColorTicks<F> {
    config: AxisConfig,
    formatter: TimeLabelFormatter,
    lookup: F,
}

impl<F> ColorTicks<F>
where
    F: Fn(PointInTime) -> Option<f64>,
{
    pub fn new(config: &AxisConfig, lookup: F) -> Self {
        Self {
            config: config.clone(),
            formatter: TimeLabelFormatter::new(config.zone),
            lookup,
        }
    }

    fn is_sentinel(&self, value: f64) -> bool {
        self.config.color_sentinels.iter().any(|&s| s == value)
    }
}

impl<F> TickFormatter for ColorTicks<F>
where
    F: Fn(PointInTime) -> Option<f64>,
{
    fn role(&self) -> AxisRole {
        AxisRole::Color
    }

    fn format_tick(&self, instant: PointInTime, tick_index: usize) -> String {
        if self.config.is_secondary_tick(tick_index) {
            return String::new();
        }
        if (self.lookup)(instant).is_some_and(|v| self.is_sentinel(v)) {
            return String::new();
        }
        self.formatter.format(instant)
    }
}

/// Round half away from zero to `decimals` places and append the unit.
/// Values too large to scale already have no fractional digits and are
/// printed as they are.
fn format_value(value: f64, decimals: usize, unit: &str) -> String {
    let decimals = decimals.min(MAX_SECONDARY_DECIMALS);
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    let rounded = if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    };
    if unit.is_empty() {
        format!("{rounded:.decimals$}")
    } else {
        format!("{rounded:.decimals$} {unit}")
    }
}
