// Work-description parser backed by the Gemini generateContent API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use super::parser_trait::WorkDescriptionParser;
use crate::config::AssistantConfig;
use crate::core::{AppError, Result};
use crate::modules::assistant::models::ParsedItem;

/// Gemini-backed parser
pub struct GeminiParser {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiParser {
    pub fn new(config: &AssistantConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn prompt(description: &str) -> String {
        format!(
            "You are a helper for a Marathi painting contractor. Convert this rough description: \"{}\" into a list of items. \
             Translate everything to simple Marathi. \
             Example: \"2 room color\" -> description: \"हॉल व बेडरूम ऑईल पेंट\", quantity: 2. \
             Return JSON array.",
            description
        )
    }

    fn request_body(description: &str) -> serde_json::Value {
        json!({
            "contents": [{ "parts": [{ "text": Self::prompt(description) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "description": { "type": "STRING" },
                            "quantity": { "type": "NUMBER" }
                        },
                        "required": ["description", "quantity"]
                    }
                }
            }
        })
    }

    async fn request(&self, api_key: &str, description: &str) -> Result<Vec<ParsedItem>> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&Self::request_body(description))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::internal(format!(
                "Assistant API error {}: {}",
                status, error_body
            )));
        }

        let body: GenerateContentResponse = response.json().await?;
        extract_items(body)
    }
}

/// Pull the JSON array of items out of the first candidate's text
fn extract_items(response: GenerateContentResponse) -> Result<Vec<ParsedItem>> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let items: Vec<ParsedItem> = serde_json::from_str(text.trim())?;
    Ok(items
        .into_iter()
        .filter(|item| !item.description.trim().is_empty())
        .collect())
}

#[async_trait]
impl WorkDescriptionParser for GeminiParser {
    async fn parse(&self, description: &str) -> Vec<ParsedItem> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!(
                parser = self.name(),
                "Assistant API key is missing, work-description parsing disabled"
            );
            return Vec::new();
        };

        if description.trim().is_empty() {
            return Vec::new();
        }

        match self.request(api_key, description).await {
            Ok(items) => {
                debug!(parser = self.name(), count = items.len(), "Assistant returned items");
                items
            }
            Err(err) => {
                warn!(
                    parser = self.name(),
                    error = %err,
                    "Assistant request failed, returning no items"
                );
                Vec::new()
            }
        }
    }

    fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
