//! Mock agent bank API server for testing
//!
//! This provides a fake API that responds to submission and task result
//! endpoints without requiring the real service.

use serde_json::{json, Value};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use agentbank_client::{AgentBankClient, ClientConfig};

use super::TEST_API_KEY;

/// Mock API server that simulates agent bank HTTP responses
pub struct MockApiServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockApiServer {
    /// Create a new mock API server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Client pointed at this mock with the standard test key
    pub fn client(&self) -> AgentBankClient {
        AgentBankClient::with_config(ClientConfig {
            api_key: Some(TEST_API_KEY.to_string()),
            api_base: self.base_url.clone(),
            request_timeout_seconds: 5,
        })
    }

    /// Mock a submission endpoint returning a task id
    pub async fn mock_submission(&self, endpoint: &str, task_id: &str) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "task_id": task_id
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a submission endpoint whose response lacks a task id
    pub async fn mock_submission_without_task_id(&self, endpoint: &str) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "queued"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a task result endpoint reporting PENDING for the first `times` polls
    pub async fn mock_task_pending(&self, result_path: &str, times: u64) {
        Mock::given(method("GET"))
            .and(path(result_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "PENDING"
            })))
            .up_to_n_times(times)
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Mock a task result endpoint reporting SUCCESS with the given result payload
    pub async fn mock_task_success(&self, result_path: &str, result: Value) {
        Mock::given(method("GET"))
            .and(path(result_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "SUCCESS",
                "result": result
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a task result endpoint reporting FAILURE with the given error detail
    pub async fn mock_task_failure(&self, result_path: &str, error: Value) {
        Mock::given(method("GET"))
            .and(path(result_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "FAILURE",
                "error": error
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a task result endpoint reporting an arbitrary status body
    pub async fn mock_task_status(&self, result_path: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(result_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Assert that no request of any kind reaches this server
    pub async fn expect_no_requests(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&self.server)
            .await;
    }
}
