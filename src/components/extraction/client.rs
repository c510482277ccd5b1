use super::models::{ExtractedEvent, ExtractedSchedule};
use super::schema;
use crate::components::google_calendar::CalendarEvent;
use crate::config::Config;
use crate::error::{extraction_error, AppResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

const CREATE_PROMPT_TEMPLATE: &str = "Extract event details and attendee emails from this \
prompt. Include all mentioned email addresses as attendees: {prompt}";

const MODIFY_PROMPT_TEMPLATE: &str = "Modify this event according to these changes. Return a \
complete event object with all required fields and preserve existing attendees unless \
explicitly modified:

Current event: {event}

Requested changes: {prompt}";

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    functions: Vec<Value>,
    function_call: Value,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    function_call: Option<FunctionCall>,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    arguments: String,
}

/// Client for the language extraction service (OpenAI chat completions)
#[derive(Clone)]
pub struct ExtractionClient {
    config: Arc<RwLock<Config>>,
    client: Client,
}

impl ExtractionClient {
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Extract a list of events from a free-text prompt
    pub async fn generate_schedule(&self, prompt: &str) -> AppResult<ExtractedSchedule> {
        let content = CREATE_PROMPT_TEMPLATE.replace("{prompt}", prompt);
        let arguments = self
            .call_function(content, schema::create_schedule_function(), "create_schedule")
            .await?;

        let schedule: ExtractedSchedule = serde_json::from_str(&arguments).map_err(|e| {
            extraction_error(&format!("Model arguments did not match schema: {}", e))
        })?;

        info!(event_count = schedule.events.len(), "Extracted schedule from prompt");
        Ok(schedule)
    }

    /// Extract a complete replacement for an existing event from a change prompt
    pub async fn modify_event(
        &self,
        existing: &CalendarEvent,
        prompt: &str,
    ) -> AppResult<ExtractedEvent> {
        let existing_json = serde_json::to_string(existing)?;
        let content = MODIFY_PROMPT_TEMPLATE
            .replace("{event}", &existing_json)
            .replace("{prompt}", prompt);

        let arguments = self
            .call_function(content, schema::modify_event_function(), "modify_event")
            .await?;

        serde_json::from_str(&arguments).map_err(|e| {
            extraction_error(&format!("Model arguments did not match schema: {}", e))
        })
    }

    /// Send one completion request forcing the named function call, and return
    /// the raw arguments string
    async fn call_function(
        &self,
        content: String,
        function: Value,
        function_name: &str,
    ) -> AppResult<String> {
        let (api_base, api_key, model) = {
            let config_read = self.config.read().await;
            (
                config_read.openai_api_base.clone(),
                config_read.openai_api_key.clone(),
                config_read.openai_model.clone(),
            )
        };

        let request = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content,
            }],
            functions: vec![function],
            function_call: json!({ "name": function_name }),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", api_base))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| extraction_error(&format!("OpenAI request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(extraction_error(&format!(
                "OpenAI request failed: HTTP {} - {}",
                status, error_body
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| extraction_error(&format!("Failed to parse OpenAI response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.function_call)
            .map(|call| call.arguments)
            .ok_or_else(|| extraction_error("Invalid response from OpenAI: no function call"))
    }
}
