use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult};

use super::ChartSpec;

pub const CHART_SPEC_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope handed to out-of-process chart renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpecJsonContractV1 {
    pub schema_version: u32,
    pub spec: ChartSpec,
}

impl ChartSpec {
    pub fn to_json_pretty(&self) -> ViewResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ViewError::InvalidData(format!("failed to serialize chart spec: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ViewResult<String> {
        let payload = ChartSpecJsonContractV1 {
            schema_version: CHART_SPEC_JSON_SCHEMA_V1,
            spec: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ViewError::InvalidData(format!("failed to serialize chart spec contract v1: {e}"))
        })
    }

    /// Parses either a bare spec or a v1 envelope, then validates it.
    pub fn from_json_compat_str(input: &str) -> ViewResult<Self> {
        let spec = match serde_json::from_str::<ChartSpec>(input) {
            Ok(spec) => spec,
            Err(_) => {
                let payload: ChartSpecJsonContractV1 =
                    serde_json::from_str(input).map_err(|e| {
                        ViewError::InvalidData(format!("failed to parse chart spec json payload: {e}"))
                    })?;
                if payload.schema_version != CHART_SPEC_JSON_SCHEMA_V1 {
                    return Err(ViewError::InvalidData(format!(
                        "unsupported chart spec schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.spec
            }
        };
        spec.validate()?;
        Ok(spec)
    }
}
