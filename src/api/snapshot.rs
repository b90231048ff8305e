use serde::{Deserialize, Serialize};

use crate::core::{AxisScale, ChartLayout};
use crate::error::{ChartError, ChartResult};
use crate::interaction::DragState;

use super::{AxisLabels, NavigationView};

pub const NAVIGATION_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Owned copy of the navigation state used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationSnapshot {
    pub layout: ChartLayout,
    pub x: AxisScale,
    pub y: AxisScale,
    pub drag: DragState,
    pub labels: AxisLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: NavigationSnapshot,
}

impl NavigationSnapshot {
    #[must_use]
    pub fn from_view(view: &NavigationView<'_>) -> Self {
        Self {
            layout: *view.layout,
            x: view.x.clone(),
            y: view.y.clone(),
            drag: view.drag,
            labels: view.labels.clone(),
        }
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = NavigationSnapshotJsonContractV1 {
            schema_version: NAVIGATION_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_contract_str(input: &str) -> ChartResult<Self> {
        let payload: NavigationSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != NAVIGATION_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        payload.snapshot.layout.validate()?;
        Ok(payload.snapshot)
    }
}
