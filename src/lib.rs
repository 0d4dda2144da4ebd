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

//! FMTBench - Format Token & Accuracy Benchmark
//!
//! Measures how data serialization formats trade token cost against LLM
//! answer accuracy. Every registered format encodes the same datasets, the
//! encodings are token-counted, and the same questions are asked over each
//! encoding; per-format, per-dataset and per-category statistics are
//! accumulated and rendered as text tables plus a JSON report.
//!
//! ## Features
//!
//! - **Type-aware validation**: Deterministic scoring of free-text LLM
//!   answers against typed expected values (number tolerance, boolean
//!   vocabularies, list membership, null handling)
//! - **Token counting**: tiktoken encodings (o200k_base, cl100k_base)
//! - **Tie-aware winners**: All formats sharing the best token count or
//!   accuracy in a dataset share the win
//!
//! ## Usage
//!
//! Count tokens and run accuracy against a provider:
//! ```bash
//! cargo run --bin benchmark -- --provider deepseek
//! ```
//!
//! Token-only dry run, no API key needed:
//! ```bash
//! cargo run --bin benchmark -- --dry-run --no-accuracy
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod fixtures;
pub mod formats;
pub mod llm;
pub mod question;
pub mod report;
pub mod runner;
pub mod token_counter;
pub mod validator;

// Re-export key types for convenience
pub use config::BenchConfig;
pub use dataset::Dataset;
pub use error::{BenchError, Result};
pub use fixtures::create_datasets;
pub use formats::{FormatEncoder, FormatRegistry, JsonCompact, JsonPretty, Yaml};
pub use llm::{is_error_response, ChatClient, Completion, Provider, ERROR_SENTINEL};
pub use question::{AnswerType, Question};
pub use report::{render_report, results_json, write_json, RunLog};
pub use runner::{
    AggregateResult, BenchmarkRunner, DatasetOutcome, FormatResult, RunResults,
    ENCODE_FAILURE_TOKENS,
};
pub use token_counter::{count_tokens, TokenEncoding};
pub use validator::{validate, Verdict};
