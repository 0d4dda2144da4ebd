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

//! Run logging and report generation.
//!
//! Reports are pure projections over [`RunResults`]; nothing here
//! re-runs an encode or a completion.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde_json::json;

use crate::error::Result;
use crate::runner::{DatasetOutcome, RunResults};

/// Baseline format for token-savings comparison
const BASELINE_FORMAT: &str = "JSON";

/// Append-only run log, mirrored to a timestamped file, a "latest" file,
/// and optionally stdout.
pub struct RunLog {
    files: Vec<File>,
    echo: bool,
    /// Path of the timestamped log file, if file logging is active
    log_path: Option<PathBuf>,
}

impl RunLog {
    /// Log to `benchmark_<timestamp>.log` and `benchmark_latest.log`
    /// under the given directory, echoing to stdout. The latest file is
    /// truncated; the timestamped file is fresh by construction.
    pub fn to_dir(dir: &Path) -> Result<Self> {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let log_path = dir.join(format!("benchmark_{}.log", stamp));
        let latest_path = dir.join("benchmark_latest.log");

        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;
        let latest_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(latest_path)?;

        Ok(RunLog {
            files: vec![log_file, latest_file],
            echo: true,
            log_path: Some(log_path),
        })
    }

    /// Discard everything; used by tests and library callers that only
    /// want the result tree
    pub fn quiet() -> Self {
        RunLog {
            files: Vec::new(),
            echo: false,
            log_path: None,
        }
    }

    /// Path of the timestamped log file, if any
    pub fn path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    /// Write a line to the log files and stdout
    pub fn line(&mut self, message: &str) {
        self.write(message, true);
    }

    /// Write a line to the log files only (per-question detail)
    pub fn detail(&mut self, message: &str) {
        self.write(message, false);
    }

    fn write(&mut self, message: &str, echo: bool) {
        for file in &mut self.files {
            // A failed log write never aborts the run.
            let _ = writeln!(file, "{}", message);
        }
        if echo && self.echo {
            println!("{}", message);
        }
    }
}

/// Render the run header block
pub fn run_header(results_hint: &RunHeader) -> String {
    let mut out = String::new();
    out.push_str(&"=".repeat(100));
    out.push('\n');
    out.push_str("FORMAT BENCHMARK - TOKEN EFFICIENCY AND LLM ACCURACY\n");
    out.push_str(&"=".repeat(100));
    out.push('\n');
    out.push('\n');
    out.push_str(&format!("Timestamp:       {}\n", results_hint.timestamp));
    out.push_str(&format!("Tokenizer:       {}\n", results_hint.tokenizer));
    out.push_str(&format!("LLM:             {}\n", results_hint.model));
    out.push_str(&format!("Datasets:        {}\n", results_hint.datasets));
    out.push_str(&format!("Questions:       {}\n", results_hint.questions));
    out.push_str(&format!("Formats:         {}\n", results_hint.formats.join(", ")));
    out.push_str(&format!(
        "Accuracy Tests:  {}\n",
        if results_hint.run_accuracy {
            "Enabled"
        } else {
            "Disabled"
        }
    ));
    out.push_str(&format!(
        "Dry Run:         {}\n",
        if results_hint.dry_run { "Yes" } else { "No" }
    ));
    out
}

/// Header facts printed at the start of a run
pub struct RunHeader {
    pub timestamp: String,
    pub tokenizer: String,
    pub model: String,
    pub datasets: usize,
    pub questions: usize,
    pub formats: Vec<String>,
    pub run_accuracy: bool,
    pub dry_run: bool,
}

/// Render one dataset's per-format summary table, ranked by token count.
/// Failed encodings are listed last with an ERR marker so the comparison
/// matrix keeps its shape.
pub fn dataset_table(outcome: &DatasetOutcome) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<15} {:>10} {:>12} {:>14} {:>10} {:>11}\n",
        "Format", "Tokens", "vs JSON", "Accuracy", "Acc/1K", "Encode(ms)"
    ));
    out.push_str(&"-".repeat(76));
    out.push('\n');

    let baseline_tokens = outcome
        .formats
        .iter()
        .find(|r| r.format == BASELINE_FORMAT && r.is_valid())
        .map(|r| r.tokens);

    let mut ranked: Vec<_> = outcome.formats.iter().filter(|r| r.is_valid()).collect();
    ranked.sort_by_key(|r| r.tokens);

    for (rank, res) in ranked.iter().enumerate() {
        let marker = if rank == 0 { ">>>" } else { "   " };
        let savings = match baseline_tokens {
            Some(base) if res.format != BASELINE_FORMAT && base > 0 => {
                format!("{:+.1}%", (base - res.tokens) as f64 / base as f64 * 100.0)
            }
            Some(_) => "baseline".to_string(),
            None => "N/A".to_string(),
        };
        let acc_str = if res.total > 0 {
            format!("{}/{} ({:.1}%)", res.correct, res.total, res.accuracy())
        } else {
            "N/A".to_string()
        };
        let acc_per_1k = if res.tokens > 0 && res.total > 0 {
            res.accuracy() / res.tokens as f64 * 1000.0
        } else {
            0.0
        };
        out.push_str(&format!(
            "{} {:<12} {:>10} {:>12} {:>14} {:>10.2} {:>11.1}\n",
            marker,
            res.format,
            res.tokens,
            savings,
            acc_str,
            acc_per_1k,
            res.encode_time.as_secs_f64() * 1000.0
        ));
    }

    for res in outcome.formats.iter().filter(|r| !r.is_valid()) {
        out.push_str(&format!(
            "ERR {:<12} {:>10} ({})\n",
            res.format,
            "-",
            res.error.as_deref().unwrap_or("encode failed")
        ));
    }

    out
}

/// Render the overall per-format summary table
pub fn overall_table(results: &RunResults) -> String {
    let mut out = String::new();
    out.push_str(&"=".repeat(100));
    out.push('\n');
    out.push_str(&format!(
        "OVERALL RESULTS - {} DATASETS, {} QUESTIONS\n",
        results.dataset_count, results.question_count
    ));
    out.push_str(&"=".repeat(100));
    out.push('\n');
    out.push('\n');
    out.push_str(&format!(
        "{:<15} {:>12} {:>12} {:>17} {:>10} {:>8} {:>8}\n",
        "Format", "Tokens", "vs JSON", "Accuracy", "Acc/1K", "TokWins", "AccWins"
    ));
    out.push_str(&"-".repeat(88));
    out.push('\n');

    let baseline_tokens = results.aggregate(BASELINE_FORMAT).map(|a| a.tokens);

    let mut ranked: Vec<_> = results.aggregates.iter().collect();
    ranked.sort_by_key(|(_, agg)| agg.tokens);

    for (rank, (name, agg)) in ranked.iter().enumerate() {
        let marker = if rank == 0 { ">>>" } else { "   " };
        let savings = match baseline_tokens {
            Some(base) if name != BASELINE_FORMAT && base > 0 => {
                format!("{:+.1}%", (base - agg.tokens) as f64 / base as f64 * 100.0)
            }
            Some(_) => "baseline".to_string(),
            None => "N/A".to_string(),
        };
        out.push_str(&format!(
            "{} {:<12} {:>12} {:>12} {:>6}/{:<5}({:>5.1}%) {:>10.2} {:>8} {:>8}\n",
            marker,
            name,
            agg.tokens,
            savings,
            agg.correct,
            agg.total,
            agg.accuracy(),
            agg.acc_per_1k(),
            agg.token_wins,
            agg.accuracy_wins
        ));
    }

    out
}

/// Render the per-category accuracy matrix (categories x formats)
pub fn category_table(results: &RunResults) -> String {
    let mut out = String::new();
    out.push_str(&"=".repeat(100));
    out.push('\n');
    out.push_str("ACCURACY BY QUESTION CATEGORY\n");
    out.push_str(&"=".repeat(100));
    out.push('\n');
    out.push('\n');

    // Categories are discovered from the data actually accumulated.
    let mut categories: Vec<_> = results
        .aggregates
        .iter()
        .flat_map(|(_, agg)| agg.categories.keys().cloned())
        .collect();
    categories.sort();
    categories.dedup();

    out.push_str(&format!("{:<15}", "Category"));
    for (name, _) in &results.aggregates {
        out.push_str(&format!(" {:>18}", name));
    }
    out.push('\n');
    out.push_str(&"-".repeat(15 + 19 * results.aggregates.len()));
    out.push('\n');

    for cat in categories {
        out.push_str(&format!("{:<15}", cat));
        for (_, agg) in &results.aggregates {
            match agg.categories.get(&cat) {
                Some(tally) if tally.total > 0 => {
                    let acc = tally.correct as f64 / tally.total as f64 * 100.0;
                    out.push_str(&format!(
                        " {:>3}/{:<3} ({:>5.1}%)",
                        tally.correct, tally.total, acc
                    ));
                }
                _ => out.push_str(&format!(" {:>18}", "N/A")),
            }
        }
        out.push('\n');
    }

    out
}

/// Render the complete textual report
pub fn render_report(results: &RunResults) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&overall_table(results));
    out.push('\n');
    out.push_str(&category_table(results));
    out
}

/// Build the structured result tree for serialization.
///
/// Shape: run metadata plus a per-format mapping of totals, win counts,
/// and category tallies.
pub fn results_json(results: &RunResults) -> serde_json::Value {
    let mut formats = serde_json::Map::new();
    for (name, agg) in &results.aggregates {
        let mut categories = serde_json::Map::new();
        for (cat, tally) in &agg.categories {
            categories.insert(
                cat.clone(),
                json!({"correct": tally.correct, "total": tally.total}),
            );
        }
        formats.insert(
            name.clone(),
            json!({
                "tokens": agg.tokens,
                "correct": agg.correct,
                "total": agg.total,
                "accuracy": agg.accuracy(),
                "acc_per_1k": agg.acc_per_1k(),
                "wins_tokens": agg.token_wins,
                "wins_accuracy": agg.accuracy_wins,
                "encode_time_ms": agg.encode_time.as_secs_f64() * 1000.0,
                "categories": categories,
            }),
        );
    }

    json!({
        "timestamp": results.timestamp.to_rfc3339(),
        "tokenizer": results.tokenizer,
        "datasets": results.dataset_count,
        "questions": results.question_count,
        "formats": formats,
    })
}

/// Write the structured results as pretty-printed JSON
pub fn write_json(results: &RunResults, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&results_json(results))
        .map_err(|e| crate::error::BenchError::IoError(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{AggregateResult, CategoryTally, FormatResult};
    use chrono::Local;
    use std::collections::BTreeMap;
    use std::time::Duration;

    fn sample_results() -> RunResults {
        let agg_a = AggregateResult {
            tokens: 1000,
            correct: 8,
            total: 10,
            token_wins: 1,
            accuracy_wins: 1,
            categories: BTreeMap::from([(
                "retrieval".to_string(),
                CategoryTally {
                    correct: 8,
                    total: 10,
                },
            )]),
            encode_time: Duration::from_millis(2),
        };
        let agg_json = AggregateResult {
            tokens: 1500,
            correct: 9,
            total: 10,
            token_wins: 0,
            accuracy_wins: 0,
            categories: BTreeMap::from([(
                "retrieval".to_string(),
                CategoryTally {
                    correct: 9,
                    total: 10,
                },
            )]),
            encode_time: Duration::from_millis(1),
        };
        RunResults {
            timestamp: Local::now(),
            tokenizer: "o200k_base (GPT-4o/GPT-5)".to_string(),
            aggregates: vec![
                ("YAML".to_string(), agg_a),
                ("JSON".to_string(), agg_json),
            ],
            datasets: vec![DatasetOutcome {
                dataset: "users".to_string(),
                formats: vec![
                    FormatResult {
                        format: "YAML".to_string(),
                        tokens: 1000,
                        encoded: "users:\n- name: a\n".to_string(),
                        encode_time: Duration::from_millis(2),
                        correct: 8,
                        total: 10,
                        error: None,
                    },
                    FormatResult {
                        format: "JSON".to_string(),
                        tokens: 1500,
                        encoded: "{\"users\":[{\"name\":\"a\"}]}".to_string(),
                        encode_time: Duration::from_millis(1),
                        correct: 9,
                        total: 10,
                        error: None,
                    },
                ],
                token_winners: vec!["YAML".to_string()],
                accuracy_winners: vec!["JSON".to_string()],
            }],
            dataset_count: 1,
            question_count: 10,
        }
    }

    #[test]
    fn test_dataset_table_ranks_by_tokens() {
        let results = sample_results();
        let table = dataset_table(&results.datasets[0]);
        let yaml_pos = table.find(">>> YAML").unwrap();
        let json_pos = table.find("    JSON").unwrap();
        assert!(yaml_pos < json_pos);
        assert!(table.contains("baseline"));
        // YAML saves a third of the JSON tokens
        assert!(table.contains("+33.3%"));
    }

    #[test]
    fn test_dataset_table_marks_failed_encoding() {
        let mut results = sample_results();
        results.datasets[0].formats.push(FormatResult {
            format: "XML".to_string(),
            tokens: -1,
            encoded: String::new(),
            encode_time: Duration::ZERO,
            correct: 0,
            total: 0,
            error: Some("unsupported value".to_string()),
        });
        let table = dataset_table(&results.datasets[0]);
        assert!(table.contains("ERR XML"));
        assert!(table.contains("unsupported value"));
    }

    #[test]
    fn test_overall_table_contents() {
        let results = sample_results();
        let table = overall_table(&results);
        assert!(table.contains("OVERALL RESULTS - 1 DATASETS, 10 QUESTIONS"));
        assert!(table.contains("YAML"));
        assert!(table.contains("JSON"));
        assert!(table.contains("TokWins"));
    }

    #[test]
    fn test_category_table_contents() {
        let results = sample_results();
        let table = category_table(&results);
        assert!(table.contains("retrieval"));
        assert!(table.contains("8/10"));
        assert!(table.contains("9/10"));
    }

    #[test]
    fn test_results_json_shape() {
        let results = sample_results();
        let json = results_json(&results);
        assert_eq!(json["datasets"], 1);
        assert_eq!(json["questions"], 10);
        assert_eq!(json["formats"]["YAML"]["tokens"], 1000);
        assert_eq!(json["formats"]["YAML"]["wins_tokens"], 1);
        assert_eq!(json["formats"]["JSON"]["wins_accuracy"], 0);
        assert_eq!(
            json["formats"]["YAML"]["categories"]["retrieval"]["correct"],
            8
        );
        let acc = json["formats"]["JSON"]["accuracy"].as_f64().unwrap();
        assert!((acc - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_write_json_to_file() {
        let results = sample_results();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        write_json(&results, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["formats"]["JSON"]["correct"], 9);
    }

    #[test]
    fn test_run_log_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = RunLog::to_dir(dir.path()).unwrap();
        log.line("summary line");
        log.detail("detail line");
        drop(log);

        let latest = std::fs::read_to_string(dir.path().join("benchmark_latest.log")).unwrap();
        assert!(latest.contains("summary line"));
        assert!(latest.contains("detail line"));
    }

    #[test]
    fn test_quiet_log_is_silent() {
        let mut log = RunLog::quiet();
        log.line("nothing happens");
        assert!(log.path().is_none());
    }

    #[test]
    fn test_run_header() {
        let header = run_header(&RunHeader {
            timestamp: "2025-01-01T00:00:00".to_string(),
            tokenizer: "o200k_base (GPT-4o/GPT-5)".to_string(),
            model: "DeepSeek (deepseek-chat)".to_string(),
            datasets: 20,
            questions: 300,
            formats: vec!["JSON".to_string(), "YAML".to_string()],
            run_accuracy: true,
            dry_run: false,
        });
        assert!(header.contains("Datasets:        20"));
        assert!(header.contains("JSON, YAML"));
        assert!(header.contains("Accuracy Tests:  Enabled"));
    }
}
