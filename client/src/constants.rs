//! Central repository for endpoint paths, polling defaults and HTTP limits
//!
//! This module organizes constants by category to provide a single source
//! of truth for the wire-level conventions of the agent bank API.

use std::time::Duration;

/// API endpoint paths
///
/// Async endpoints return a `task_id`; their `*_RESULT` counterparts are
/// templates polled with that id substituted for `{task_id}`.
pub mod endpoints {
    /// Submit agent creation (async)
    pub const CREATE_AGENT: &str = "/create_single_agent/";

    /// Result endpoint template for agent creation
    pub const CREATE_AGENT_RESULT: &str = "/create_single_agent_result/{task_id}/";

    /// Fetch agent details (sync)
    pub const AGENT_DETAILS: &str = "/get_agent_details/";

    /// Delete an agent (sync)
    pub const DELETE_AGENT: &str = "/delete_agent/";

    /// Submit agent response generation (async)
    pub const GENERATE_RESPONSE: &str = "/generate_agent_response/";

    /// Result endpoint template for response generation
    pub const GENERATE_RESPONSE_RESULT: &str = "/generate_agent_response_result/{task_id}/";

    /// Create a population (sync)
    pub const CREATE_POPULATION: &str = "/create_population/";

    /// List agents in a population (sync)
    pub const POPULATION_AGENTS: &str = "/get_population_agents/";

    /// Add an agent to a population (sync)
    pub const POPULATION_ADD_AGENT: &str = "/population_add_agent/";

    /// Remove an agent from a population (sync)
    pub const POPULATION_REMOVE_AGENT: &str = "/population_remove_agent/";

    /// Delete a population (sync)
    pub const DELETE_POPULATION: &str = "/delete_population/";

    /// Submit sub-population sampling (async)
    pub const SUB_POPULATION: &str = "/get_sub_population/";

    /// Result endpoint template for sub-population sampling
    pub const SUB_POPULATION_RESULT: &str = "/get_sub_population_result/{task_id}/";
}

/// Task polling constants
pub mod polling {
    use super::Duration;

    /// Interval between polls of a task's result endpoint
    pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

    /// Maximum time to wait for a task to reach a terminal status
    pub const WAIT_TIMEOUT: Duration = Duration::from_secs(300);
}

/// Default configuration values
pub mod defaults {
    /// Production API base address; override via `ClientConfig`
    pub const API_BASE: &str = "https://agentbank-f515f1977c64.herokuapp.com/agents/api";

    /// Default timeout for a single HTTP round trip, in seconds
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;
}
