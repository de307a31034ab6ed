use serde::{Deserialize, Serialize};

use crate::time::point::PointInTime;

/// A text note pinned to an instant on the time axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub text: String,
}

impl Annotation {
    pub fn new(at: impl Into<PointInTime>, text: impl Into<String>) -> Self {
        Self {
            timestamp: at.into().millis(),
            text: text.into(),
        }
    }

    pub fn at(&self) -> PointInTime {
        PointInTime::from_millis(self.timestamp)
    }
}

/// Which side of the cursor the annotation helper is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnnotationHelperPosition {
    #[serde(rename = "left-side")]
    Left,
    #[serde(rename = "right-side")]
    Right,
    #[default]
    #[serde(rename = "none")]
    None,
}

impl AnnotationHelperPosition {
    pub fn label(&self) -> &'static str {
        match self {
            AnnotationHelperPosition::Left => "left-side",
            AnnotationHelperPosition::Right => "right-side",
            AnnotationHelperPosition::None => "none",
        }
    }
}
