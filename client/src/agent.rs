//! Agent resource operations
//!
//! Agent creation and response generation are queued jobs server-side; the
//! plain methods hide that by waiting on the task with the library defaults,
//! while the `start_*` variants hand the [`Task`] back to the caller.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::client::AgentBankClient;
use crate::constants::endpoints;
use crate::errors::{Error, Result};
use crate::task::Task;

/// Arguments for creating an agent.
#[derive(Debug, Clone)]
pub struct CreateAgentRequest {
    pub first_name: String,
    pub last_name: String,
    pub forked_agent_id: String,
    pub speech_pattern: String,
    pub self_description: String,
    pub population_id: String,
    pub read_permission: String,
    pub write_permission: String,
    pub agent_data: Vec<Value>,
}

impl CreateAgentRequest {
    /// Required fields only; permissions default to `private`.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        population_id: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            forked_agent_id: String::new(),
            speech_pattern: String::new(),
            self_description: String::new(),
            population_id: population_id.into(),
            read_permission: "private".to_string(),
            write_permission: "private".to_string(),
            agent_data: Vec::new(),
        }
    }

    fn validate(&self) -> Result<()> {
        require_non_empty("first_name", &self.first_name)?;
        require_non_empty("last_name", &self.last_name)?;
        require_non_empty("population_id", &self.population_id)?;
        require_non_empty("read_permission", &self.read_permission)?;
        require_non_empty("write_permission", &self.write_permission)?;
        Ok(())
    }
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Validation {
            field: field.to_string(),
            reason: "is required".to_string(),
        });
    }
    Ok(())
}

/// Kinds of questions an agent can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Categorical,
    Numerical,
    Chat,
}

impl AgentBankClient {
    /// Submit agent creation and return the task without waiting.
    pub async fn start_create_agent(&self, request: &CreateAgentRequest) -> Result<Task> {
        request.validate()?;

        let payload = json!({
            "first_name": request.first_name,
            "last_name": request.last_name,
            "forked_agent_id": request.forked_agent_id,
            "speech_pattern": request.speech_pattern,
            "self_description": request.self_description,
            "population_id": request.population_id,
            "read_permission": request.read_permission,
            "write_permission": request.write_permission,
            "agent_data": request.agent_data,
        });

        let response = self.requestor().post(endpoints::CREATE_AGENT, &payload).await?;
        Task::from_submission(
            self.requestor(),
            &response,
            endpoints::CREATE_AGENT,
            endpoints::CREATE_AGENT_RESULT,
        )
    }

    /// Create an agent and wait until creation is fully done server-side.
    ///
    /// Returns the new agent's id.
    pub async fn create_agent(&self, request: &CreateAgentRequest) -> Result<String> {
        let mut task = self.start_create_agent(request).await?;
        let final_data = task.wait_default().await?;

        let agent_id = final_data
            .get("agent_id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::Protocol {
                reason: "no 'agent_id' returned in final result".to_string(),
            })?;

        info!("Agent {} created", agent_id);
        Ok(agent_id.to_string())
    }

    /// Fetch agent details.
    pub async fn get_agent_details(&self, agent_id: &str) -> Result<Value> {
        self.requestor()
            .get(endpoints::AGENT_DETAILS, Some(&[("agent_id", agent_id)]))
            .await
    }

    /// Delete an agent. Returns the server's status/message payload.
    pub async fn delete_agent(&self, agent_id: &str) -> Result<Value> {
        let payload = json!({"agent_id": agent_id});
        self.requestor().post(endpoints::DELETE_AGENT, &payload).await
    }

    /// Submit response generation and return the task without waiting.
    pub async fn start_generate_response(
        &self,
        agent_id: &str,
        question_type: QuestionType,
        question: Value,
    ) -> Result<Task> {
        require_non_empty("agent_id", agent_id)?;

        let payload = json!({
            "agent_id": agent_id,
            "question_type": question_type,
            "question": question,
        });

        let response = self
            .requestor()
            .post(endpoints::GENERATE_RESPONSE, &payload)
            .await?;
        Task::from_submission(
            self.requestor(),
            &response,
            endpoints::GENERATE_RESPONSE,
            endpoints::GENERATE_RESPONSE_RESULT,
        )
    }

    /// Generate an agent's response to a question, waiting for the result.
    ///
    /// `question` is the question payload for the given type, e.g.
    /// `{"question": "...", "options": [...]}` for categorical questions.
    pub async fn generate_response(
        &self,
        agent_id: &str,
        question_type: QuestionType,
        question: Value,
    ) -> Result<Value> {
        let mut task = self
            .start_generate_response(agent_id, question_type, question)
            .await?;
        task.wait_default().await
    }
}
