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

//! Benchmark datasets.

use serde_json::Value;

use crate::question::Question;

/// A named dataset paired with the questions asked over it.
///
/// The payload is format-neutral JSON; each registered format encodes it
/// into its own serialization before token counting and prompting.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Dataset identifier (e.g. "users_25", "org_hierarchy")
    pub name: String,
    /// One-line description for logs and reports
    pub description: String,
    /// Format-neutral payload
    pub data: Value,
    /// Questions asked over the payload
    pub questions: Vec<Question>,
}

impl Dataset {
    /// Create a dataset
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        data: Value,
        questions: Vec<Question>,
    ) -> Self {
        Dataset {
            name: name.into(),
            description: description.into(),
            data,
            questions,
        }
    }

    /// Number of questions in this dataset
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::AnswerType;
    use serde_json::json;

    #[test]
    fn test_dataset_construction() {
        let ds = Dataset::new(
            "minimal",
            "one-item sanity set",
            json!({"items": [{"id": 1}]}),
            vec![Question::new(
                "How many items are there?",
                json!(1),
                AnswerType::Number,
                "counting",
            )],
        );
        assert_eq!(ds.name, "minimal");
        assert_eq!(ds.description, "one-item sanity set");
        assert_eq!(ds.question_count(), 1);
    }
}
