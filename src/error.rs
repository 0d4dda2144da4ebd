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

//! Error types for benchmark operations.
//!
//! Only configuration-level problems are surfaced as errors to the caller.
//! Per-item failures (a format failing to encode, a completion call
//! exhausting its retries) are converted into recorded sentinel outcomes by
//! the runner so a single bad cell never aborts the run.

use std::fmt;

/// Result type for benchmark operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during benchmark operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Invalid configuration parameter
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// No formats registered; nothing to benchmark
    NoFormats,

    /// No datasets provided; nothing to benchmark
    NoDatasets,

    /// An answer type string outside the supported enumeration
    UnsupportedAnswerType {
        /// The offending type name
        value: String,
    },

    /// A format's encoder failed for a dataset
    EncodeFailed {
        /// Format display name
        format: String,
        /// Error message from the encoder
        message: String,
    },

    /// Token counting operation failed
    TokenCountFailed {
        /// Reason for failure
        reason: String,
    },

    /// I/O error (log or report file)
    IoError(String),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::InvalidConfig { parameter, reason } => {
                write!(
                    f,
                    "Invalid configuration parameter '{}': {}",
                    parameter, reason
                )
            }
            BenchError::NoFormats => {
                write!(f, "No formats registered")
            }
            BenchError::NoDatasets => {
                write!(f, "No datasets provided")
            }
            BenchError::UnsupportedAnswerType { value } => {
                write!(
                    f,
                    "Unsupported answer type '{}' (expected one of: string, number, boolean, list, null, email, date)",
                    value
                )
            }
            BenchError::EncodeFailed { format, message } => {
                write!(f, "Format '{}' failed to encode: {}", format, message)
            }
            BenchError::TokenCountFailed { reason } => {
                write!(f, "Token counting failed: {}", reason)
            }
            BenchError::IoError(msg) => {
                write!(f, "I/O error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BenchError {}

impl From<std::io::Error> for BenchError {
    fn from(e: std::io::Error) -> Self {
        BenchError::IoError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BenchError::InvalidConfig {
            parameter: "question_pacing".to_string(),
            reason: "must be non-negative".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("question_pacing"));
        assert!(msg.contains("must be non-negative"));

        let err = BenchError::UnsupportedAnswerType {
            value: "uuid".to_string(),
        };
        assert!(format!("{}", err).contains("uuid"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = BenchError::EncodeFailed {
            format: "YAML".to_string(),
            message: "bad value".to_string(),
        };
        let err2 = BenchError::EncodeFailed {
            format: "YAML".to_string(),
            message: "bad value".to_string(),
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, BenchError::NoFormats);
    }
}
