use serde::Serialize;

/// An autonomous agent persona that can be deployed to manage the DAO
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agent {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub strategy: &'static str,
    pub risk: &'static str,
}

/// A focus area shown for an agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentFeature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

static AGENTS: [Agent; 3] = [
    Agent {
        id: 1,
        name: "Distractive Agent 🐱",
        description: "Gets distracted by cat videos, memes, and shiny objects. Will probably forget your portfolio exists but hey, at least you'll have fun! 😅✨",
        status: "Distracted",
        strategy: "Chaos Theory Trading 🌪️",
        risk: "Chaotic",
    },
    Agent {
        id: 2,
        name: "Communist Agent ☭",
        description: "OUR portfolio comrade! Redistributes your gains to everyone. No private keys, only WE keys! 🤝🔴",
        status: "Sharing",
        strategy: "Collective Ownership 🤝",
        risk: "Collective",
    },
    Agent {
        id: 3,
        name: "Capitalist Agent 💎",
        description: "Diamond hands 💎🙌 Number go up! Will sell your house to buy more crypto. To the moon! 🚀📈",
        status: "Pumping",
        strategy: "Moon Mission 🚀",
        risk: "YOLO",
    },
];

static DEFAULT_FEATURES: [AgentFeature; 4] = [
    AgentFeature {
        icon: "💰",
        title: "Treasury Analysis",
        description: "Current holdings, yield opportunities, and liquidity needs",
    },
    AgentFeature {
        icon: "🗳️",
        title: "Governance Health",
        description: "Participation rates, voting patterns, and engagement metrics",
    },
    AgentFeature {
        icon: "👥",
        title: "Community Needs",
        description: "Member feedback, growth opportunities, and pain points",
    },
    AgentFeature {
        icon: "🔧",
        title: "Technical State",
        description: "Protocol performance, upgrades needed, and security status",
    },
];

static DISTRACTIVE_FEATURES: [AgentFeature; 4] = [
    AgentFeature {
        icon: "😈",
        title: "Meme Potential",
        description: "Viral content opportunities and community engagement through humor",
    },
    AgentFeature {
        icon: "🎲",
        title: "Chaos Theory",
        description: "Random market movements and unpredictable opportunities",
    },
    AgentFeature {
        icon: "🍕",
        title: "Comfort Breaks",
        description: "Optimal timing for pizza breaks and cat video sessions",
    },
    AgentFeature {
        icon: "✨",
        title: "Shiny Objects",
        description: "New trending tokens and whatever catches our attention",
    },
];

static COMMUNIST_FEATURES: [AgentFeature; 4] = [
    AgentFeature {
        icon: "🤝",
        title: "Collective Ownership",
        description: "Shared treasury management and community-owned assets",
    },
    AgentFeature {
        icon: "⚖️",
        title: "Wealth Distribution",
        description: "Fair allocation of resources and equal opportunity access",
    },
    AgentFeature {
        icon: "🏛️",
        title: "Democratic Governance",
        description: "Community consensus and collective decision-making processes",
    },
    AgentFeature {
        icon: "🌍",
        title: "Social Impact",
        description: "Projects that benefit the greater good and community welfare",
    },
];

static CAPITALIST_FEATURES: [AgentFeature; 4] = [
    AgentFeature {
        icon: "💵",
        title: "Diamond Hands",
        description: "Long-term HODL strategies and conviction-based investing",
    },
    AgentFeature {
        icon: "🚀",
        title: "Moon Missions",
        description: "High-growth potential and exponential return opportunities",
    },
    AgentFeature {
        icon: "📈",
        title: "Number Go Up",
        description: "Maximum profit optimization and aggressive growth targets",
    },
    AgentFeature {
        icon: "🔥",
        title: "YOLO Energy",
        description: "High-risk, high-reward plays and market domination",
    },
];

pub fn agent_catalog() -> &'static [Agent] {
    &AGENTS
}

pub fn find_agent(id: u32) -> Option<&'static Agent> {
    AGENTS.iter().find(|agent| agent.id == id)
}

/// Feature cards for an agent; the default set when none is selected
pub fn agent_features(agent: Option<&Agent>) -> &'static [AgentFeature] {
    match agent.map(|a| a.id) {
        Some(1) => &DISTRACTIVE_FEATURES,
        Some(2) => &COMMUNIST_FEATURES,
        Some(3) => &CAPITALIST_FEATURES,
        _ => &DEFAULT_FEATURES,
    }
}
