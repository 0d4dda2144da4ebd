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

//! Benchmark orchestration.
//!
//! Drives datasets x formats x questions through encode, token count,
//! completion, and validation, folding verdicts into per-format
//! aggregates and per-dataset outcomes. Per-item failures are recorded
//! as sentinel outcomes; only configuration problems abort a run.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::config::BenchConfig;
use crate::dataset::Dataset;
use crate::error::{BenchError, Result};
use crate::formats::FormatRegistry;
use crate::llm::Completion;
use crate::question::Question;
use crate::report::{dataset_table, RunLog};
use crate::validator::validate;

/// Token count recorded when a format fails to encode a dataset
pub const ENCODE_FAILURE_TOKENS: i64 = -1;

/// Per (dataset, format) outcome. Created once per pass, never mutated
/// after the pass completes.
#[derive(Debug, Clone)]
pub struct FormatResult {
    /// Format display name
    pub format: String,
    /// Token count of the encoded payload, or [`ENCODE_FAILURE_TOKENS`]
    pub tokens: i64,
    /// The encoded payload text (empty if encoding failed)
    pub encoded: String,
    /// Time spent encoding
    pub encode_time: Duration,
    /// Questions answered correctly
    pub correct: usize,
    /// Questions asked
    pub total: usize,
    /// Encode error message, if the encoding failed
    pub error: Option<String>,
}

impl FormatResult {
    /// Whether this cell holds a usable encoding (excluded from winner
    /// computation otherwise)
    pub fn is_valid(&self) -> bool {
        self.tokens > 0
    }

    /// Accuracy percentage over asked questions
    pub fn accuracy(&self) -> f64 {
        if self.total > 0 {
            self.correct as f64 / self.total as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Correct/total pair for one question category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTally {
    pub correct: usize,
    pub total: usize,
}

/// Per-format running totals across all datasets
#[derive(Debug, Clone, Default)]
pub struct AggregateResult {
    /// Total tokens across datasets that encoded successfully
    pub tokens: i64,
    /// Total correct answers
    pub correct: usize,
    /// Total questions asked
    pub total: usize,
    /// Datasets where this format had the (possibly tied) minimum tokens
    pub token_wins: usize,
    /// Datasets where this format had the (possibly tied) maximum correct count
    pub accuracy_wins: usize,
    /// Correct/total per question category, discovered from the fixtures
    pub categories: BTreeMap<String, CategoryTally>,
    /// Total encode time across datasets
    pub encode_time: Duration,
}

impl AggregateResult {
    /// Accuracy percentage across all asked questions
    pub fn accuracy(&self) -> f64 {
        if self.total > 0 {
            self.correct as f64 / self.total as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Accuracy points per 1000 tokens, the efficiency metric
    pub fn acc_per_1k(&self) -> f64 {
        if self.tokens > 0 {
            self.accuracy() / self.tokens as f64 * 1000.0
        } else {
            0.0
        }
    }

    /// Fold another aggregate into this one. Supports parallel
    /// accumulation via fold-after-join.
    pub fn merge(&mut self, other: &AggregateResult) {
        self.tokens += other.tokens;
        self.correct += other.correct;
        self.total += other.total;
        self.token_wins += other.token_wins;
        self.accuracy_wins += other.accuracy_wins;
        self.encode_time += other.encode_time;
        for (cat, tally) in &other.categories {
            let entry = self.categories.entry(cat.clone()).or_default();
            entry.correct += tally.correct;
            entry.total += tally.total;
        }
    }

    fn record_verdict(&mut self, category: &str, is_correct: bool) {
        self.total += 1;
        let entry = self.categories.entry(category.to_string()).or_default();
        entry.total += 1;
        if is_correct {
            self.correct += 1;
            entry.correct += 1;
        }
    }
}

/// One dataset's results across all formats, with its winner sets
#[derive(Debug, Clone)]
pub struct DatasetOutcome {
    /// Dataset name
    pub dataset: String,
    /// One result per registered format, in registration order
    pub formats: Vec<FormatResult>,
    /// Formats tied at the minimum token count (empty if nothing encoded)
    pub token_winners: Vec<String>,
    /// Formats tied at the maximum correct count (empty without accuracy)
    pub accuracy_winners: Vec<String>,
}

/// Complete results of one benchmark run
#[derive(Debug, Clone)]
pub struct RunResults {
    /// When the run started
    pub timestamp: DateTime<Local>,
    /// Tokenizer encoding name
    pub tokenizer: String,
    /// Per-format aggregates, in registration order
    pub aggregates: Vec<(String, AggregateResult)>,
    /// Per-dataset outcomes, in dataset order
    pub datasets: Vec<DatasetOutcome>,
    /// Number of datasets in the fixture set
    pub dataset_count: usize,
    /// Number of questions in the fixture set
    pub question_count: usize,
}

impl RunResults {
    /// Look up a format's aggregate by display name
    pub fn aggregate(&self, format: &str) -> Option<&AggregateResult> {
        self.aggregates
            .iter()
            .find(|(name, _)| name == format)
            .map(|(_, agg)| agg)
    }
}

/// Build the prompt sent for one question
pub fn build_prompt(format: &str, encoded: &str, question: &Question) -> String {
    format!(
        "Here is data in {} format:\n\n{}\n\nQuestion: {}\nAnswer with just the value, no explanation.",
        format, encoded, question.text
    )
}

/// Sequential benchmark orchestrator
pub struct BenchmarkRunner {
    config: BenchConfig,
    registry: FormatRegistry,
}

impl BenchmarkRunner {
    /// Create a runner over a format registry
    pub fn new(config: BenchConfig, registry: FormatRegistry) -> Self {
        BenchmarkRunner { config, registry }
    }

    /// Registered format names in registration order
    pub fn format_names(&self) -> Vec<String> {
        self.registry
            .formats()
            .iter()
            .map(|f| f.name().to_string())
            .collect()
    }

    /// Run the full benchmark over the given datasets.
    ///
    /// Always produces a complete result matrix: failed cells carry
    /// sentinel markers instead of being dropped.
    pub fn run(
        &self,
        datasets: &[Dataset],
        completion: &dyn Completion,
        log: &mut RunLog,
    ) -> Result<RunResults> {
        self.config.validate()?;
        if self.registry.is_empty() {
            return Err(BenchError::NoFormats);
        }
        if datasets.is_empty() {
            return Err(BenchError::NoDatasets);
        }

        let timestamp = Local::now();
        let question_count: usize = datasets.iter().map(|d| d.question_count()).sum();

        let mut aggregates: Vec<(String, AggregateResult)> = self
            .registry
            .formats()
            .iter()
            .map(|f| (f.name().to_string(), AggregateResult::default()))
            .collect();
        let mut outcomes = Vec::new();

        let cap = self.config.dry_run_question_cap;
        let mut questions_run = 0usize;

        for dataset in datasets {
            // Dry runs only need enough datasets to prove the wiring.
            if self.config.dry_run && questions_run >= self.registry.len() * cap * 2 {
                break;
            }

            log.line("");
            log.line(&"-".repeat(100));
            log.line(&format!("DATASET: {}", dataset.name.to_uppercase()));
            log.line(&format!(
                "{} | Questions: {}",
                dataset.description,
                dataset.question_count()
            ));
            log.line(&"-".repeat(100));

            let mut format_results = Vec::new();

            for (idx, format) in self.registry.formats().iter().enumerate() {
                let start = Instant::now();
                let encoded = format.encode(&dataset.data);
                let encode_time = start.elapsed();

                let result = match encoded {
                    Ok(text) => {
                        let tokens = self.config.encoding.count(&text) as i64;
                        let agg = &mut aggregates[idx].1;
                        agg.tokens += tokens;
                        agg.encode_time += encode_time;

                        log.line(&format!(
                            "\n--- {} ({} tokens, {:.1}ms) ---",
                            format.name(),
                            tokens,
                            encode_time.as_secs_f64() * 1000.0
                        ));

                        let mut result = FormatResult {
                            format: format.name().to_string(),
                            tokens,
                            encoded: text.clone(),
                            encode_time,
                            correct: 0,
                            total: 0,
                            error: None,
                        };

                        if self.config.run_accuracy {
                            self.ask_questions(
                                dataset,
                                format.name(),
                                &text,
                                completion,
                                &mut aggregates[idx].1,
                                &mut result,
                                &mut questions_run,
                                log,
                            );
                            log.line(&format!(
                                "  Accuracy: {}/{} ({:.1}%)",
                                result.correct,
                                result.total,
                                result.accuracy()
                            ));
                        }
                        result
                    }
                    Err(e) => {
                        log.line(&format!("  {}: ERROR - {}", format.name(), e));
                        FormatResult {
                            format: format.name().to_string(),
                            tokens: ENCODE_FAILURE_TOKENS,
                            encoded: String::new(),
                            encode_time,
                            correct: 0,
                            total: 0,
                            error: Some(e.to_string()),
                        }
                    }
                };
                format_results.push(result);
            }

            let outcome = determine_winners(
                &dataset.name,
                format_results,
                self.config.run_accuracy,
            );
            for (name, agg) in aggregates.iter_mut() {
                if outcome.token_winners.contains(name) {
                    agg.token_wins += 1;
                }
                if outcome.accuracy_winners.contains(name) {
                    agg.accuracy_wins += 1;
                }
            }

            log.line("");
            log.line(&dataset_table(&outcome));
            outcomes.push(outcome);
        }

        Ok(RunResults {
            timestamp,
            tokenizer: self.config.encoding.name().to_string(),
            aggregates,
            datasets: outcomes,
            dataset_count: datasets.len(),
            question_count,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn ask_questions(
        &self,
        dataset: &Dataset,
        format_name: &str,
        encoded: &str,
        completion: &dyn Completion,
        aggregate: &mut AggregateResult,
        result: &mut FormatResult,
        questions_run: &mut usize,
        log: &mut RunLog,
    ) {
        for question in &dataset.questions {
            if self.config.dry_run && result.total >= self.config.dry_run_question_cap {
                break;
            }

            let prompt = build_prompt(format_name, encoded, question);
            let response = completion.ask(&prompt);
            let verdict = validate(&response, &question.expected, question.answer_type);

            result.total += 1;
            if verdict.is_correct {
                result.correct += 1;
            }
            aggregate.record_verdict(&question.category, verdict.is_correct);

            let status = if verdict.is_correct { "OK" } else { "WRONG" };
            log.detail(&format!(
                "  [{}] {} => {}",
                status,
                truncate(&question.text, 60),
                question.expected
            ));
            log.detail(&format!(
                "         Got: {} | {}",
                truncate(&response, 60),
                verdict.reason
            ));

            *questions_run += 1;
            if !self.config.question_pacing.is_zero() {
                std::thread::sleep(self.config.question_pacing);
            }
        }
    }
}

/// Compute the tie-aware winner sets for one dataset.
///
/// Only formats with a valid encoding participate; ties all win.
fn determine_winners(
    dataset: &str,
    formats: Vec<FormatResult>,
    run_accuracy: bool,
) -> DatasetOutcome {
    let valid: Vec<&FormatResult> = formats.iter().filter(|r| r.is_valid()).collect();

    let token_winners = match valid.iter().map(|r| r.tokens).min() {
        Some(min_tokens) => valid
            .iter()
            .filter(|r| r.tokens == min_tokens)
            .map(|r| r.format.clone())
            .collect(),
        None => Vec::new(),
    };

    let accuracy_winners = if run_accuracy && !valid.is_empty() {
        let max_correct = valid.iter().map(|r| r.correct).max().unwrap_or(0);
        valid
            .iter()
            .filter(|r| r.correct == max_correct)
            .map(|r| r.format.clone())
            .collect()
    } else {
        Vec::new()
    };

    DatasetOutcome {
        dataset: dataset.to_string(),
        formats,
        token_winners,
        accuracy_winners,
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(format: &str, tokens: i64, correct: usize) -> FormatResult {
        FormatResult {
            format: format.to_string(),
            tokens,
            encoded: String::new(),
            encode_time: Duration::ZERO,
            correct,
            total: 10,
            error: None,
        }
    }

    #[test]
    fn test_tied_token_winners_all_win() {
        let outcome = determine_winners(
            "ds",
            vec![result("A", 100, 5), result("B", 100, 7), result("C", 150, 7)],
            true,
        );
        assert_eq!(outcome.token_winners, vec!["A", "B"]);
        assert_eq!(outcome.accuracy_winners, vec!["B", "C"]);
    }

    #[test]
    fn test_failed_encoding_excluded_from_winners() {
        let mut failed = result("A", ENCODE_FAILURE_TOKENS, 0);
        failed.error = Some("boom".to_string());
        let outcome = determine_winners("ds", vec![failed, result("B", 200, 3)], true);
        assert_eq!(outcome.token_winners, vec!["B"]);
        assert_eq!(outcome.accuracy_winners, vec!["B"]);
    }

    #[test]
    fn test_no_valid_encodings_no_winners() {
        let outcome = determine_winners("ds", vec![result("A", -1, 0)], true);
        assert!(outcome.token_winners.is_empty());
        assert!(outcome.accuracy_winners.is_empty());
    }

    #[test]
    fn test_accuracy_winners_skipped_without_accuracy() {
        let outcome = determine_winners("ds", vec![result("A", 100, 0)], false);
        assert_eq!(outcome.token_winners, vec!["A"]);
        assert!(outcome.accuracy_winners.is_empty());
    }

    #[test]
    fn test_aggregate_merge() {
        let mut a = AggregateResult {
            tokens: 100,
            correct: 3,
            total: 5,
            token_wins: 1,
            accuracy_wins: 0,
            categories: BTreeMap::from([(
                "retrieval".to_string(),
                CategoryTally {
                    correct: 3,
                    total: 5,
                },
            )]),
            encode_time: Duration::from_millis(5),
        };
        let b = AggregateResult {
            tokens: 50,
            correct: 2,
            total: 4,
            token_wins: 0,
            accuracy_wins: 1,
            categories: BTreeMap::from([
                (
                    "retrieval".to_string(),
                    CategoryTally {
                        correct: 1,
                        total: 2,
                    },
                ),
                (
                    "edge".to_string(),
                    CategoryTally {
                        correct: 1,
                        total: 2,
                    },
                ),
            ]),
            encode_time: Duration::from_millis(3),
        };
        a.merge(&b);
        assert_eq!(a.tokens, 150);
        assert_eq!(a.correct, 5);
        assert_eq!(a.total, 9);
        assert_eq!(a.token_wins, 1);
        assert_eq!(a.accuracy_wins, 1);
        assert_eq!(
            a.categories["retrieval"],
            CategoryTally {
                correct: 4,
                total: 7
            }
        );
        assert_eq!(
            a.categories["edge"],
            CategoryTally {
                correct: 1,
                total: 2
            }
        );
        assert_eq!(a.encode_time, Duration::from_millis(8));
    }

    #[test]
    fn test_acc_per_1k() {
        let agg = AggregateResult {
            tokens: 2000,
            correct: 8,
            total: 10,
            ..Default::default()
        };
        // 80% accuracy over 2000 tokens = 40 points per 1k
        assert!((agg.acc_per_1k() - 40.0).abs() < 1e-9);

        let empty = AggregateResult::default();
        assert_eq!(empty.acc_per_1k(), 0.0);
    }

    #[test]
    fn test_build_prompt_shape() {
        let q = Question::new(
            "What is the name?",
            serde_json::json!("Alice"),
            crate::question::AnswerType::String,
            "retrieval",
        );
        let prompt = build_prompt("JSON", "{\"name\":\"Alice\"}", &q);
        assert!(prompt.starts_with("Here is data in JSON format:"));
        assert!(prompt.contains("{\"name\":\"Alice\"}"));
        assert!(prompt.contains("Question: What is the name?"));
        assert!(prompt.ends_with("Answer with just the value, no explanation."));
    }
}
