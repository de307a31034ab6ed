use std::path::Path;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::time::format::LabelZone;

/// Upper bound on `secondary_decimals`, the range `toFixed`-style
/// formatting accepts.
pub const MAX_SECONDARY_DECIMALS: usize = 100;

/// Tick-labelling configuration supplied by the host chart.
///
/// Missing fields take their defaults, so `{}` is a valid config for a
/// single-axis chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// A secondary x-axis (e.g. depth) shares the tick positions of the
    /// time axis.
    pub dual_axis: bool,
    /// In dual-axis mode every Nth tick belongs to the secondary axis.
    pub every_tick_count: usize,
    /// Unit appended to secondary-axis labels.
    pub secondary_unit: String,
    /// Decimal places of secondary-axis labels.
    pub secondary_decimals: usize,
    /// Row values meaning "no reading" / "out of range"; ticks over such rows
    /// get no colour-axis label.
    pub color_sentinels: Vec<f64>,
    pub zone: LabelZone,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            dual_axis: false,
            every_tick_count: 5,
            secondary_unit: "ft".to_string(),
            secondary_decimals: 0,
            color_sentinels: vec![1.0, 2.0],
            zone: LabelZone::Utc,
        }
    }
}

impl AxisConfig {
    pub fn dual(mut self, enabled: bool) -> Self {
        self.dual_axis = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.every_tick_count == 0 {
            return Err(Error::InvalidConfig("every_tick_count must be at least 1".to_string()));
        }
        if self.secondary_decimals > MAX_SECONDARY_DECIMALS {
            return Err(Error::InvalidConfig(format!(
                "secondary_decimals must be at most {MAX_SECONDARY_DECIMALS}, got {}",
                self.secondary_decimals
            )));
        }
        if let LabelZone::Fixed { offset_seconds } = self.zone {
            if FixedOffset::east_opt(offset_seconds).is_none() {
                return Err(Error::InvalidConfig(format!(
                    "fixed zone offset {offset_seconds}s is outside one day"
                )));
            }
        }
        if let Some(bad) = self.color_sentinels.iter().find(|v| !v.is_finite()) {
            return Err(Error::InvalidConfig(format!("color sentinel {bad} is not finite")));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AxisConfig = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            tracing::warn!("Rejected axis config: {e}");
            return Err(e);
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!("Loaded axis config from {:?}", path);
        Ok(config)
    }

    /// Whether `tick_index` is one of the ticks reserved for the secondary
    /// axis.
    pub fn is_secondary_tick(&self, tick_index: usize) -> bool {
        self.dual_axis && tick_index % self.every_tick_count.max(1) == 0
    }
}
