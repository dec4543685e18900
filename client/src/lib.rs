pub mod agent;
pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod population;
pub mod requestor;
pub mod task;

// Re-export commonly used types
pub use agent::{CreateAgentRequest, QuestionType};
pub use client::AgentBankClient;
pub use config::ClientConfig;
pub use errors::{Error, Result};
pub use population::CreatePopulationRequest;
pub use requestor::ApiRequestor;
pub use task::Task;
