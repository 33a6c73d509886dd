use serde::{Deserialize, Serialize};

use crate::domain::agents::{Agent, AgentFeature};

#[derive(Debug, Serialize)]
pub struct AgentResponse {
    #[serde(flatten)]
    pub agent: Agent,
    pub features: &'static [AgentFeature],
}

#[derive(Debug, Serialize)]
pub struct SelectedAgentResponse {
    pub agent: Option<Agent>,
    pub features: &'static [AgentFeature],
}

/// `agent_id: null` clears the selection
#[derive(Debug, Deserialize)]
pub struct SelectAgentRequest {
    pub agent_id: Option<u32>,
}
