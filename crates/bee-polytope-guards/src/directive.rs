use crate::guard::BeePolytopeGuard;
use bee_core::actuation::ActuationLimits;
use bee_core::hazard::HazardState;
use bee_core::state::EnvironmentalState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DirectiveError {
    #[error("serialize directive: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One sensing snapshot for a node, as produced by state estimation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReading {
    pub node_id: String,
    pub state: EnvironmentalState,
    #[serde(default)]
    pub voc_ug_m3: f64,
}

/// Actuation record handed to the swarm controller for one node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActuationDirective {
    pub directive_id: Uuid,
    pub node_id: String,
    pub issued_at: DateTime<Utc>,
    pub state: EnvironmentalState,
    pub voc_ug_m3: f64,
    pub hazard: HazardState,
    pub limits: ActuationLimits,
}

impl ActuationDirective {
    pub fn to_json_line(&self) -> Result<String, DirectiveError> {
        Ok(serde_json::to_string(self)?)
    }
}

pub fn issue_directive(guard: &BeePolytopeGuard, reading: &SensorReading) -> ActuationDirective {
    let (hazard, limits) = guard.evaluate(&reading.state, reading.voc_ug_m3);

    ActuationDirective {
        directive_id: Uuid::new_v4(),
        node_id: reading.node_id.clone(),
        issued_at: Utc::now(),
        state: reading.state,
        voc_ug_m3: reading.voc_ug_m3,
        hazard,
        limits,
    }
}
