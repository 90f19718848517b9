use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{CandleGeometry, FrameLayout, ViewWindow, Viewport};
use crate::error::{ChartError, ChartResult};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub window: ViewWindow,
    /// Layout of the last drawn frame; `None` before the first frame or
    /// after a blank one.
    pub layout: Option<FrameLayout>,
    pub series_lengths: IndexMap<String, usize>,
    pub primary_geometry: Vec<CandleGeometry>,
}

impl EngineSnapshot {
    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidData(format!("snapshot serialization failed: {err}")))
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("snapshot deserialization failed: {err}")))
    }
}
