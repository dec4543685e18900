//! Population resource operations
//!
//! Most population calls are synchronous CRUD; sub-population sampling is a
//! queued job handled through [`Task`] like agent creation.

use serde_json::{json, Value};
use tracing::info;

use crate::agent::require_non_empty;
use crate::client::AgentBankClient;
use crate::constants::endpoints;
use crate::errors::{Error, Result};
use crate::task::Task;

/// Arguments for creating a population.
#[derive(Debug, Clone)]
pub struct CreatePopulationRequest {
    pub name: String,
    pub read_permission: String,
    pub write_permission: String,
    pub readme: String,
}

impl CreatePopulationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            read_permission: "private".to_string(),
            write_permission: "private".to_string(),
            readme: String::new(),
        }
    }

    fn validate(&self) -> Result<()> {
        require_non_empty("name", &self.name)?;
        require_non_empty("read_permission", &self.read_permission)?;
        require_non_empty("write_permission", &self.write_permission)?;
        Ok(())
    }
}

impl AgentBankClient {
    /// Create a population. Returns the new population's id.
    pub async fn create_population(&self, request: &CreatePopulationRequest) -> Result<String> {
        request.validate()?;

        let payload = json!({
            "name": request.name,
            "read_permission": request.read_permission,
            "write_permission": request.write_permission,
            "readme": request.readme,
        });

        let response = self
            .requestor()
            .post(endpoints::CREATE_POPULATION, &payload)
            .await?;

        let population_id = response
            .get("population_id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::Protocol {
                reason: "no 'population_id' returned from create_population endpoint".to_string(),
            })?;

        info!("Population {} created", population_id);
        Ok(population_id.to_string())
    }

    /// List the ids of the agents in a population.
    pub async fn get_population_agents(&self, population_id: &str) -> Result<Vec<String>> {
        let response = self
            .requestor()
            .get(
                endpoints::POPULATION_AGENTS,
                Some(&[("population_id", population_id)]),
            )
            .await?;

        let agent_ids = response
            .get("agent_ids")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::Protocol {
                reason: "no 'agent_ids' returned from get_population_agents endpoint".to_string(),
            })?;

        Ok(agent_ids
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect())
    }

    /// Add an agent to a population. Returns the server's status/message payload.
    pub async fn add_agent_to_population(
        &self,
        population_id: &str,
        agent_id: &str,
    ) -> Result<Value> {
        let payload = json!({
            "population_id": population_id,
            "agent_id": agent_id,
        });
        self.requestor()
            .post(endpoints::POPULATION_ADD_AGENT, &payload)
            .await
    }

    /// Remove an agent from a population. Returns the server's status/message payload.
    pub async fn remove_agent_from_population(
        &self,
        population_id: &str,
        agent_id: &str,
    ) -> Result<Value> {
        let payload = json!({
            "population_id": population_id,
            "agent_id": agent_id,
        });
        self.requestor()
            .delete(endpoints::POPULATION_REMOVE_AGENT, &payload)
            .await
    }

    /// Delete a population. Returns the server's status/message payload.
    pub async fn delete_population(&self, population_id: &str) -> Result<Value> {
        let payload = json!({"population_id": population_id});
        self.requestor()
            .delete(endpoints::DELETE_POPULATION, &payload)
            .await
    }

    /// Submit sub-population sampling and return the task without waiting.
    ///
    /// With no `population_id` the server samples from all agents.
    pub async fn start_get_sub_population(
        &self,
        population_id: Option<&str>,
        n: usize,
    ) -> Result<Task> {
        let payload = json!({
            "population_id": population_id.unwrap_or(""),
            "n": n,
        });

        let response = self
            .requestor()
            .post(endpoints::SUB_POPULATION, &payload)
            .await?;
        Task::from_submission(
            self.requestor(),
            &response,
            endpoints::SUB_POPULATION,
            endpoints::SUB_POPULATION_RESULT,
        )
    }

    /// Sample a sub-population and wait for the result.
    ///
    /// The final payload typically carries `new_population_id`.
    pub async fn get_sub_population(
        &self,
        population_id: Option<&str>,
        n: usize,
    ) -> Result<Value> {
        let mut task = self.start_get_sub_population(population_id, n).await?;
        task.wait_default().await
    }
}
