// Dweve FMTBench - Format Token & Accuracy Benchmark
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Text-completion calls.
//!
//! The runner only sees [`Completion::ask`]: a blocking call that never
//! hangs indefinitely and never fails outright. Transient errors are
//! retried with exponential backoff; once retries are exhausted a
//! sentinel error string is returned so the question is scored incorrect
//! instead of aborting the run.

use std::fmt;
use std::time::Duration;

use crate::config::BenchConfig;

/// Prefix marking a completion that exhausted its retries
pub const ERROR_SENTINEL: &str = "ERROR:";

/// Returns true if a response is the failure sentinel rather than model output
pub fn is_error_response(response: &str) -> bool {
    response.starts_with(ERROR_SENTINEL)
}

/// A completion backend
pub trait Completion {
    /// Send a prompt and return the model's response text.
    ///
    /// Implementations must return an `ERROR:`-prefixed string on
    /// unrecoverable failure rather than panicking or blocking forever.
    fn ask(&self, prompt: &str) -> String;
}

/// Supported chat-completion providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    DeepSeek,
    Mistral,
    OpenAI,
}

impl Provider {
    /// API base URL for this provider
    pub fn api_base(&self) -> &'static str {
        match self {
            Provider::DeepSeek => "https://api.deepseek.com/v1",
            Provider::Mistral => "https://api.mistral.ai/v1",
            Provider::OpenAI => "https://api.openai.com/v1",
        }
    }

    /// Environment variable holding the API key
    pub fn env_var(&self) -> &'static str {
        match self {
            Provider::DeepSeek => "DEEPSEEK_API_KEY",
            Provider::Mistral => "MISTRAL_API_KEY",
            Provider::OpenAI => "OPENAI_API_KEY",
        }
    }

    /// Default model name
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::DeepSeek => "deepseek-chat",
            Provider::Mistral => "mistral-small-latest",
            Provider::OpenAI => "gpt-4o-mini",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::DeepSeek => "DeepSeek",
            Provider::Mistral => "Mistral",
            Provider::OpenAI => "OpenAI",
        };
        write!(f, "{}", name)
    }
}

/// HTTP chat-completion client with retry and backoff
pub struct ChatClient {
    provider: Provider,
    model: String,
    api_key: String,
    max_retries: u32,
    agent: ureq::Agent,
}

impl ChatClient {
    /// Create a client for the given provider and model
    pub fn new(provider: Provider, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_config(provider, model, api_key, &BenchConfig::default())
    }

    /// Create a client with timeout and retry settings taken from config
    pub fn with_config(
        provider: Provider,
        model: impl Into<String>,
        api_key: impl Into<String>,
        config: &BenchConfig,
    ) -> Self {
        // Reuse one agent so sequential calls share connections.
        let agent = ureq::AgentBuilder::new()
            .timeout(config.completion_timeout)
            .build();
        ChatClient {
            provider,
            model: model.into(),
            api_key: api_key.into(),
            max_retries: config.max_completion_retries,
            agent,
        }
    }

    fn call_once(&self, prompt: &str) -> Result<String, String> {
        let url = format!("{}/chat/completions", self.provider.api_base());
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": prompt}
            ],
            "stream": false,
            "temperature": 0.0
        });

        let response = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(&body)
            .map_err(|e| format!("HTTP error: {}", e))?;

        let json: serde_json::Value = response
            .into_json()
            .map_err(|e| format!("JSON parse error: {}", e))?;

        Ok(json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .trim()
            .to_string())
    }
}

impl Completion for ChatClient {
    fn ask(&self, prompt: &str) -> String {
        let mut last_error = String::new();
        for attempt in 0..self.max_retries {
            match self.call_once(prompt) {
                Ok(response) => return response,
                Err(e) => {
                    last_error = e;
                    if attempt + 1 < self.max_retries {
                        std::thread::sleep(Duration::from_secs(1 << attempt));
                    }
                }
            }
        }
        format!("{} {}", ERROR_SENTINEL, last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_metadata() {
        assert_eq!(Provider::DeepSeek.env_var(), "DEEPSEEK_API_KEY");
        assert_eq!(Provider::DeepSeek.default_model(), "deepseek-chat");
        assert!(Provider::OpenAI.api_base().starts_with("https://"));
        assert_eq!(Provider::Mistral.to_string(), "Mistral");
    }

    #[test]
    fn test_error_sentinel_detection() {
        assert!(is_error_response("ERROR: HTTP error: timeout"));
        assert!(!is_error_response("the answer is 42"));
        assert!(!is_error_response(""));
    }
}
