use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::interaction::DisplayState;
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig};

pub const DISPLAY_STATE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayStateJsonContractV1 {
    pub schema_version: u32,
    pub display: DisplayState,
}

impl ChartEngineConfig {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let input = fs::read_to_string(path)?;
        Self::from_json_str(&input)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl DisplayState {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = DisplayStateJsonContractV1 {
            schema_version: DISPLAY_STATE_JSON_SCHEMA_V1,
            display: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize display contract v1: {e}"))
        })
    }

    /// Accepts either a bare display state or a versioned v1 payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(display) = serde_json::from_str::<DisplayState>(input) {
            return Ok(display);
        }
        let payload: DisplayStateJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse display json payload: {e}"))
        })?;
        if payload.schema_version != DISPLAY_STATE_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported display schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.display)
    }
}

impl<R: Renderer> ChartEngine<R> {
    pub fn display_state_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.display_state().to_json_contract_v1_pretty()
    }
}
