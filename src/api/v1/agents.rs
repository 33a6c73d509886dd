use axum::{extract::State, Json};
use tracing::info;

use crate::api::dto::{AgentResponse, SelectAgentRequest, SelectedAgentResponse};
use crate::api::errors::{ApiError, ApiResult};
use crate::domain::agents::{agent_catalog, agent_features, find_agent};
use crate::handlers::AppState;

pub async fn list_agents() -> Json<Vec<AgentResponse>> {
    let agents = agent_catalog()
        .iter()
        .map(|agent| AgentResponse {
            agent: agent.clone(),
            features: agent_features(Some(agent)),
        })
        .collect();
    Json(agents)
}

pub async fn get_selected_agent(State(app_state): State<AppState>) -> Json<SelectedAgentResponse> {
    let agent = app_state.session.selected_agent();
    let features = agent_features(agent.as_ref());
    Json(SelectedAgentResponse { agent, features })
}

pub async fn select_agent(
    State(app_state): State<AppState>,
    Json(request): Json<SelectAgentRequest>,
) -> ApiResult<Json<SelectedAgentResponse>> {
    let agent = match request.agent_id {
        Some(id) => Some(
            find_agent(id)
                .cloned()
                .ok_or_else(|| ApiError::not_found(format!("Unknown agent {}", id)))?,
        ),
        None => None,
    };

    match &agent {
        Some(agent) => info!("Agent {} deployed", agent.name),
        None => info!("Agent selection cleared"),
    }
    app_state.session.select_agent(agent.clone());

    let features = agent_features(agent.as_ref());
    Ok(Json(SelectedAgentResponse { agent, features }))
}
