//! Ollama client - local model serving over HTTP, blocking only.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;
use crate::llm::QueryCompletion;

/// Probe timeout for the availability check; generation gets the configured
/// timeout instead.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Client for a local Ollama server.
pub struct OllamaClient {
    config: LlmConfig,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Deserialize)]
struct ModelTag {
    #[serde(default)]
    name: String,
}

impl OllamaClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }
}

impl QueryCompletion for OllamaClient {
    /// Server reachable and the configured model pulled. Matches the bare
    /// model name, a `name:tag` variant, or any tag containing the name.
    fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.config.base_url);
        let response = match self.client.get(&url).timeout(PROBE_TIMEOUT).send() {
            Ok(r) => r,
            Err(_) => return false,
        };
        if !response.status().is_success() {
            return false;
        }
        let tags: TagsResponse = match response.json() {
            Ok(t) => t,
            Err(_) => return false,
        };

        tags.models.iter().any(|m| {
            m.name == self.config.model
                || m.name
                    .strip_suffix(":latest")
                    .is_some_and(|base| base == self.config.model)
                || m.name.contains(&self.config.model)
        })
    }

    fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.config.base_url);
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.config.temperature,
                num_predict: self.config.max_tokens,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .context("LLM request failed")?;

        if !response.status().is_success() {
            bail!("LLM request failed with status {}", response.status());
        }

        let body: GenerateResponse = response.json().context("Malformed LLM response")?;
        let text = body.response.trim().to_string();
        if text.is_empty() {
            bail!("LLM returned empty response");
        }

        Ok(text)
    }
}
