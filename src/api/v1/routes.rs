use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::AppState;
use super::{
    // Dashboard endpoints
    get_chains, get_dao_token, get_eth_token, get_strategies, get_treasury, get_voting_power, health_check,
    // Governance endpoints
    cast_vote, clear_selected_proposal, draft_proposal, execute_proposal, get_latest_proposal,
    get_proposal_by_index, get_proposal_votes, get_selected_proposal, select_proposal,
    // Agent endpoints
    get_selected_agent, list_agents, select_agent,
};

pub fn create_v1_router(app_state: AppState) -> Router {
    // Read-only views of one chain
    let chain_routes = Router::new()
        .route("/tokens/dao", get(get_dao_token))
        .route("/tokens/eth", get(get_eth_token))
        .route("/treasury", get(get_treasury))
        .route("/strategies", get(get_strategies))
        .route("/voting-power/:account", get(get_voting_power))
        .route("/proposals/latest", get(get_latest_proposal))
        .route("/proposals/index/:index", get(get_proposal_by_index))
        .route("/proposals/:proposal_id/votes", get(get_proposal_votes))
        .route("/proposals/:proposal_id/vote", post(cast_vote))
        .route("/proposals/draft", post(draft_proposal))
        .route("/proposals/execute", post(execute_proposal));

    let agent_routes = Router::new()
        .route("/", get(list_agents))
        .route("/selected", get(get_selected_agent).put(select_agent));

    Router::new()
        .route("/health", get(health_check))
        .route("/chains", get(get_chains))
        .nest("/chains/:chain_id", chain_routes)
        .route(
            "/proposals/selected",
            get(get_selected_proposal)
                .put(select_proposal)
                .delete(clear_selected_proposal),
        )
        .nest("/agents", agent_routes)
        .with_state(app_state)
}
