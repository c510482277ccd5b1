use crate::error::{env_error, AppResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Default Google Calendar REST endpoint
pub const DEFAULT_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";
/// Default Google OAuth token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
/// Default OpenAI REST endpoint
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
/// Default completion model for extraction
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Main configuration structure for the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Google Calendar API client ID
    pub google_client_id: String,
    /// Google Calendar API client secret
    pub google_client_secret: String,
    /// Google Calendar ID to manage
    pub google_calendar_id: String,
    /// OpenAI API key for the extraction service
    pub openai_api_key: String,
    /// Completion model used for extraction
    pub openai_model: String,
    /// Path to the persisted OAuth token file
    pub token_path: String,
    /// Directory with the static frontend
    pub assets_dir: String,
    /// Port for the HTTP server
    pub port: u16,
    /// Base URL of the Google Calendar API (overridable for tests)
    pub calendar_api_base: String,
    /// URL of the Google OAuth token endpoint (overridable for tests)
    pub token_url: String,
    /// Base URL of the OpenAI API (overridable for tests)
    pub openai_api_base: String,
}

impl Config {
    /// Load configuration from the environment
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let google_client_id =
            env::var("GOOGLE_CLIENT_ID").map_err(|_| env_error("GOOGLE_CLIENT_ID"))?;
        let google_client_secret =
            env::var("GOOGLE_CLIENT_SECRET").map_err(|_| env_error("GOOGLE_CLIENT_SECRET"))?;
        let openai_api_key =
            env::var("OPENAI_API_KEY").map_err(|_| env_error("OPENAI_API_KEY"))?;

        // Optional settings with defaults
        let google_calendar_id =
            env::var("GOOGLE_CALENDAR_ID").unwrap_or_else(|_| String::from("primary"));
        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| String::from(DEFAULT_OPENAI_MODEL));
        let token_path = env::var("TOKEN_PATH").unwrap_or_else(|_| String::from("token.json"));
        let assets_dir = env::var("ASSETS_DIR").unwrap_or_else(|_| String::from("assets"));

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3001);

        let calendar_api_base = env::var("GOOGLE_CALENDAR_API_BASE")
            .unwrap_or_else(|_| String::from(DEFAULT_CALENDAR_API_BASE));
        let token_url =
            env::var("GOOGLE_TOKEN_URL").unwrap_or_else(|_| String::from(DEFAULT_TOKEN_URL));
        let openai_api_base = env::var("OPENAI_API_BASE")
            .unwrap_or_else(|_| String::from(DEFAULT_OPENAI_API_BASE));

        Ok(Config {
            google_client_id,
            google_client_secret,
            google_calendar_id,
            openai_api_key,
            openai_model,
            token_path,
            assets_dir,
            port,
            calendar_api_base,
            token_url,
            openai_api_base,
        })
    }
}
