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

//! Benchmark questions and answer typing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BenchError;

/// How a question's expected value should be compared against a response.
///
/// The enumeration is closed: validation dispatches exhaustively over it,
/// so an unsupported type is rejected at parse time rather than silently
/// marked incorrect at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerType {
    /// Free-text answer, matched by containment and word overlap
    String,
    /// Numeric answer with absolute/relative tolerance
    Number,
    /// Boolean answer matched against truthy/falsy vocabularies
    Boolean,
    /// List answer requiring every element to appear
    List,
    /// Null/absent answer
    Null,
    /// Email address, matched verbatim or by local-part + domain
    Email,
    /// ISO date (YYYY-MM-DD)
    Date,
}

impl FromStr for AnswerType {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "string" => Ok(AnswerType::String),
            "number" => Ok(AnswerType::Number),
            "boolean" | "bool" => Ok(AnswerType::Boolean),
            "list" => Ok(AnswerType::List),
            "null" => Ok(AnswerType::Null),
            "email" => Ok(AnswerType::Email),
            "date" => Ok(AnswerType::Date),
            other => Err(BenchError::UnsupportedAnswerType {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnswerType::String => "string",
            AnswerType::Number => "number",
            AnswerType::Boolean => "boolean",
            AnswerType::List => "list",
            AnswerType::Null => "null",
            AnswerType::Email => "email",
            AnswerType::Date => "date",
        };
        write!(f, "{}", name)
    }
}

/// A single benchmark question with its ground-truth answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Question text presented to the model
    pub text: String,
    /// Expected answer value
    pub expected: Value,
    /// How the expected value is compared
    pub answer_type: AnswerType,
    /// Free-form classification label used only for reporting (e.g.
    /// "retrieval", "counting"); categories are discovered from the
    /// fixtures at accumulation time, never predeclared
    pub category: String,
}

impl Question {
    /// Create a question
    pub fn new(
        text: impl Into<String>,
        expected: Value,
        answer_type: AnswerType,
        category: impl Into<String>,
    ) -> Self {
        Question {
            text: text.into(),
            expected,
            answer_type,
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_type_parsing() {
        assert_eq!("string".parse::<AnswerType>().unwrap(), AnswerType::String);
        assert_eq!("Number".parse::<AnswerType>().unwrap(), AnswerType::Number);
        assert_eq!("bool".parse::<AnswerType>().unwrap(), AnswerType::Boolean);
        assert_eq!("EMAIL".parse::<AnswerType>().unwrap(), AnswerType::Email);
        assert!("uuid".parse::<AnswerType>().is_err());
    }

    #[test]
    fn test_answer_type_roundtrip_display() {
        for ty in [
            AnswerType::String,
            AnswerType::Number,
            AnswerType::Boolean,
            AnswerType::List,
            AnswerType::Null,
            AnswerType::Email,
            AnswerType::Date,
        ] {
            assert_eq!(ty.to_string().parse::<AnswerType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_question_construction() {
        let q = Question::new(
            "What is the total revenue?",
            json!(1520.5),
            AnswerType::Number,
            "aggregation",
        );
        assert_eq!(q.expected, json!(1520.5));
        assert_eq!(q.category, "aggregation");
    }
}
