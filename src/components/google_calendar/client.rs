use super::models::{CalendarEvent, EventListResponse};
use super::token::TokenManager;
use crate::config::Config;
use crate::error::{calendar_error, AppResult};
use chrono::Utc;
use reqwest::{Client, Response};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use url::Url;

/// Days of upcoming events returned by the list operation
const LIST_WINDOW_DAYS: i64 = 30;

/// Authenticated client for the Google Calendar REST API
#[derive(Clone)]
pub struct CalendarClient {
    config: Arc<RwLock<Config>>,
    token_manager: TokenManager,
    client: Client,
}

impl CalendarClient {
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        Self {
            token_manager: TokenManager::new(Arc::clone(&config)),
            config,
            client: Client::new(),
        }
    }

    /// Base URL for event operations on the configured calendar
    async fn events_url(&self) -> AppResult<Url> {
        let (api_base, calendar_id) = {
            let config_read = self.config.read().await;
            (
                config_read.calendar_api_base.clone(),
                config_read.google_calendar_id.clone(),
            )
        };

        let url_str = format!("{}/calendars/{}/events", api_base, calendar_id);
        Url::parse(&url_str).map_err(|e| calendar_error(&format!("Failed to parse URL: {}", e)))
    }

    async fn bearer_token(&self) -> AppResult<String> {
        let access_token = self.token_manager.get_access_token().await?;
        Ok(format!("Bearer {}", access_token))
    }

    /// Turn a non-success response into an error naming the failed operation
    async fn check_response(response: Response, operation: &str) -> AppResult<Response> {
        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(calendar_error(&format!(
                "{}: HTTP {} - {}",
                operation, status, error_body
            )));
        }
        Ok(response)
    }

    /// List events in the 30-day forward window, ordered by start time
    pub async fn list_events(&self) -> AppResult<Vec<CalendarEvent>> {
        let mut url = self.events_url().await?;

        let now = Utc::now();
        let time_min = now.to_rfc3339();
        let time_max = (now + chrono::Duration::days(LIST_WINDOW_DAYS)).to_rfc3339();

        url.query_pairs_mut()
            .append_pair("timeMin", &time_min)
            .append_pair("timeMax", &time_max)
            .append_pair("singleEvents", "true")
            .append_pair("orderBy", "startTime");

        let response = self
            .client
            .get(url)
            .header("Authorization", self.bearer_token().await?)
            .send()
            .await
            .map_err(|e| calendar_error(&format!("Failed to fetch events: {}", e)))?;

        let response = Self::check_response(response, "Failed to fetch events").await?;

        let list: EventListResponse = response
            .json()
            .await
            .map_err(|e| calendar_error(&format!("Failed to parse events response: {}", e)))?;

        Ok(list.items)
    }

    /// Get a single event by identifier
    pub async fn get_event(&self, event_id: &str) -> AppResult<CalendarEvent> {
        let mut url = self.events_url().await?;
        url.path_segments_mut()
            .map_err(|_| calendar_error("Invalid calendar API base URL"))?
            .push(event_id);

        let response = self
            .client
            .get(url)
            .header("Authorization", self.bearer_token().await?)
            .send()
            .await
            .map_err(|e| calendar_error(&format!("Failed to get event {}: {}", event_id, e)))?;

        let response = Self::check_response(response, "Failed to get event").await?;

        response
            .json()
            .await
            .map_err(|e| calendar_error(&format!("Failed to parse event response: {}", e)))
    }

    /// Insert one event, notifying its attendees
    pub async fn insert_event(&self, event: &CalendarEvent) -> AppResult<CalendarEvent> {
        let mut url = self.events_url().await?;
        url.query_pairs_mut().append_pair("sendUpdates", "all");

        let response = self
            .client
            .post(url)
            .header("Authorization", self.bearer_token().await?)
            .json(event)
            .send()
            .await
            .map_err(|e| calendar_error(&format!("Failed to insert event: {}", e)))?;

        let response = Self::check_response(response, "Failed to insert event").await?;

        let created: CalendarEvent = response
            .json()
            .await
            .map_err(|e| calendar_error(&format!("Failed to parse insert response: {}", e)))?;

        info!(event_id = ?created.id, "Inserted calendar event");
        Ok(created)
    }

    /// Replace an event's fields by identifier (full replacement)
    pub async fn update_event(
        &self,
        event_id: &str,
        event: &CalendarEvent,
    ) -> AppResult<CalendarEvent> {
        let mut url = self.events_url().await?;
        url.path_segments_mut()
            .map_err(|_| calendar_error("Invalid calendar API base URL"))?
            .push(event_id);
        url.query_pairs_mut().append_pair("sendUpdates", "all");

        let response = self
            .client
            .put(url)
            .header("Authorization", self.bearer_token().await?)
            .json(event)
            .send()
            .await
            .map_err(|e| calendar_error(&format!("Failed to update event {}: {}", event_id, e)))?;

        let response = Self::check_response(response, "Failed to update event").await?;

        let updated: CalendarEvent = response
            .json()
            .await
            .map_err(|e| calendar_error(&format!("Failed to parse update response: {}", e)))?;

        info!(event_id = %event_id, "Updated calendar event");
        Ok(updated)
    }

    /// Delete an event by identifier
    pub async fn delete_event(&self, event_id: &str) -> AppResult<()> {
        let mut url = self.events_url().await?;
        url.path_segments_mut()
            .map_err(|_| calendar_error("Invalid calendar API base URL"))?
            .push(event_id);

        let response = self
            .client
            .delete(url)
            .header("Authorization", self.bearer_token().await?)
            .send()
            .await
            .map_err(|e| calendar_error(&format!("Failed to delete event {}: {}", event_id, e)))?;

        Self::check_response(response, "Failed to delete event").await?;

        info!(event_id = %event_id, "Deleted calendar event");
        Ok(())
    }
}
