use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::DrawPlan;

pub const DRAW_PLAN_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for handing draw plans to out-of-process renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawPlanJsonContractV1 {
    pub schema_version: u32,
    pub plan: DrawPlan,
}

impl DrawPlan {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = DrawPlanJsonContractV1 {
            schema_version: DRAW_PLAN_JSON_SCHEMA_V1,
            plan: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize draw plan contract v1: {e}"))
        })
    }

    /// Accepts either a bare plan or a v1 contract envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(plan) = serde_json::from_str::<DrawPlan>(input) {
            return Ok(plan);
        }
        let payload: DrawPlanJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse draw plan json payload: {e}"))
        })?;
        if payload.schema_version != DRAW_PLAN_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported draw plan schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.plan)
    }
}
