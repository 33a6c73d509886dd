use ethers::types::U256;
use serde::Serialize;
use tokio::sync::watch;

use crate::domain::agents::Agent;
use crate::domain::models::serialize_decimal;

/// Proposal currently opened in the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedProposal {
    pub chain_id: u64,
    pub index: u64,
    #[serde(serialize_with = "serialize_decimal")]
    pub proposal_id: U256,
}

/// Application-wide selection state. Observers subscribe to a field and are
/// woken with the latest value whenever it changes.
#[derive(Debug)]
pub struct AppSession {
    agent: watch::Sender<Option<Agent>>,
    proposal: watch::Sender<Option<SelectedProposal>>,
}

impl Default for AppSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AppSession {
    pub fn new() -> Self {
        let (agent, _) = watch::channel(None);
        let (proposal, _) = watch::channel(None);
        Self { agent, proposal }
    }

    pub fn selected_agent(&self) -> Option<Agent> {
        self.agent.borrow().clone()
    }

    /// Replace the selected agent; `None` returns to agent selection
    pub fn select_agent(&self, agent: Option<Agent>) {
        self.agent.send_if_modified(|current| {
            if *current == agent {
                return false;
            }
            *current = agent;
            true
        });
    }

    pub fn subscribe_agent(&self) -> watch::Receiver<Option<Agent>> {
        self.agent.subscribe()
    }

    pub fn selected_proposal(&self) -> Option<SelectedProposal> {
        self.proposal.borrow().clone()
    }

    pub fn select_proposal(&self, proposal: Option<SelectedProposal>) {
        self.proposal.send_if_modified(|current| {
            if *current == proposal {
                return false;
            }
            *current = proposal;
            true
        });
    }

    pub fn subscribe_proposal(&self) -> watch::Receiver<Option<SelectedProposal>> {
        self.proposal.subscribe()
    }
}
