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

//! Benchmark run configuration.

use std::time::Duration;

use crate::error::{BenchError, Result};
use crate::token_counter::TokenEncoding;

/// Configuration for a benchmark run.
///
/// Defaults match the reference run: accuracy measurement on, full
/// question set, o200k_base token encoding, 300ms pacing between
/// completion calls, and 3 retries per call.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Whether to run LLM accuracy measurement (token counting always runs)
    pub run_accuracy: bool,

    /// Dry-run mode: cap questions per dataset/format pair
    pub dry_run: bool,

    /// Maximum questions per dataset/format pair in dry-run mode
    pub dry_run_question_cap: usize,

    /// Pause between consecutive completion calls
    pub question_pacing: Duration,

    /// Per-request timeout for completion calls
    pub completion_timeout: Duration,

    /// Maximum attempts per completion call
    pub max_completion_retries: u32,

    /// Token encoding used for token counting
    pub encoding: TokenEncoding,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            run_accuracy: true,
            dry_run: false,
            dry_run_question_cap: 3,
            question_pacing: Duration::from_millis(300),
            completion_timeout: Duration::from_secs(60),
            max_completion_retries: 3,
            encoding: TokenEncoding::O200kBase,
        }
    }
}

impl BenchConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable accuracy measurement
    pub fn with_accuracy(mut self, run_accuracy: bool) -> Self {
        self.run_accuracy = run_accuracy;
        self
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set the pause between completion calls
    pub fn with_question_pacing(mut self, pacing: Duration) -> Self {
        self.question_pacing = pacing;
        self
    }

    /// Set the per-request completion timeout
    pub fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = timeout;
        self
    }

    /// Set the token encoding
    pub fn with_encoding(mut self, encoding: TokenEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.dry_run && self.dry_run_question_cap == 0 {
            return Err(BenchError::InvalidConfig {
                parameter: "dry_run_question_cap".to_string(),
                reason: "must be at least 1 in dry-run mode".to_string(),
            });
        }
        if self.max_completion_retries == 0 {
            return Err(BenchError::InvalidConfig {
                parameter: "max_completion_retries".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.completion_timeout.is_zero() {
            return Err(BenchError::InvalidConfig {
                parameter: "completion_timeout".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BenchConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.run_accuracy);
        assert!(!config.dry_run);
        assert_eq!(config.dry_run_question_cap, 3);
        assert_eq!(config.max_completion_retries, 3);
    }

    #[test]
    fn test_builder_chain() {
        let config = BenchConfig::new()
            .with_accuracy(false)
            .with_dry_run(true)
            .with_question_pacing(Duration::from_millis(0))
            .with_encoding(TokenEncoding::Cl100kBase);
        assert!(!config.run_accuracy);
        assert!(config.dry_run);
        assert_eq!(config.question_pacing, Duration::ZERO);
        assert_eq!(config.encoding, TokenEncoding::Cl100kBase);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = BenchConfig::default().with_dry_run(true);
        config.dry_run_question_cap = 0;
        assert!(config.validate().is_err());

        let mut config = BenchConfig::default();
        config.max_completion_retries = 0;
        assert!(config.validate().is_err());

        let config = BenchConfig::default().with_completion_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
