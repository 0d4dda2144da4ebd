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

//! Format Benchmark Binary
//!
//! Encodes the built-in datasets in every registered format, counts tokens,
//! and optionally asks an LLM the benchmark questions over each encoding.
//!
//! Usage:
//! ```bash
//! # Full run with DeepSeek
//! DEEPSEEK_API_KEY=... cargo run --bin benchmark
//!
//! # Token counts only, no API calls
//! cargo run --bin benchmark -- --no-accuracy
//!
//! # Quick wiring check (few questions per dataset/format)
//! DEEPSEEK_API_KEY=... cargo run --bin benchmark -- --dry-run
//!
//! # Restrict to specific formats
//! cargo run --bin benchmark -- --no-accuracy --format json --format yaml
//! ```

use std::env;
use std::path::{Path, PathBuf};

use chrono::Local;

use fmtbench::report::{run_header, RunHeader};
use fmtbench::{
    create_datasets, render_report, write_json, BenchConfig, BenchmarkRunner, ChatClient,
    Completion, FormatRegistry, Provider, RunLog, TokenEncoding,
};

/// Command line arguments
struct Args {
    provider: Provider,
    model: Option<String>,
    formats: Vec<String>,
    encoding: TokenEncoding,
    run_accuracy: bool,
    dry_run: bool,
    output_dir: PathBuf,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            provider: Provider::DeepSeek,
            model: None,
            formats: Vec::new(),
            encoding: TokenEncoding::O200kBase,
            run_accuracy: true,
            dry_run: false,
            output_dir: PathBuf::from("."),
        }
    }
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut argv: Vec<String> = env::args().skip(1).collect();

    while !argv.is_empty() {
        let arg = argv.remove(0);
        match arg.as_str() {
            "--provider" | "-p" => {
                if let Some(val) = argv.first() {
                    args.provider = match val.to_lowercase().as_str() {
                        "deepseek" => Provider::DeepSeek,
                        "mistral" => Provider::Mistral,
                        "openai" => Provider::OpenAI,
                        _ => {
                            eprintln!(
                                "Unknown provider: {}. Use 'deepseek', 'mistral', or 'openai'",
                                val
                            );
                            std::process::exit(1);
                        }
                    };
                    argv.remove(0);
                }
            }
            "--model" | "-m" => {
                if let Some(val) = argv.first() {
                    args.model = Some(val.clone());
                    argv.remove(0);
                }
            }
            "--format" | "-f" => {
                if let Some(val) = argv.first() {
                    args.formats.push(val.clone());
                    argv.remove(0);
                }
            }
            "--encoding" | "-e" => {
                if let Some(val) = argv.first() {
                    args.encoding = match val.to_lowercase().as_str() {
                        "o200k" | "o200k_base" => TokenEncoding::O200kBase,
                        "cl100k" | "cl100k_base" => TokenEncoding::Cl100kBase,
                        _ => {
                            eprintln!("Unknown encoding: {}. Use 'o200k' or 'cl100k'", val);
                            std::process::exit(1);
                        }
                    };
                    argv.remove(0);
                }
            }
            "--output-dir" | "-o" => {
                if let Some(val) = argv.first() {
                    args.output_dir = PathBuf::from(val);
                    argv.remove(0);
                }
            }
            "--no-accuracy" => {
                args.run_accuracy = false;
            }
            "--dry-run" | "-d" => {
                args.dry_run = true;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
    }

    args
}

fn print_help() {
    println!(
        r#"FMTBench - Format Token & Accuracy Benchmark

USAGE:
    cargo run --bin benchmark [OPTIONS]

OPTIONS:
    -p, --provider <PROVIDER>   LLM provider: deepseek, mistral, openai [default: deepseek]
    -m, --model <MODEL>         Model name [default: provider's default]
    -f, --format <FORMAT>       Format to test (can repeat): json, "json compact", yaml
                                [default: all registered formats]
    -e, --encoding <ENCODING>   Tokenizer: o200k, cl100k [default: o200k]
    -o, --output-dir <DIR>      Directory for logs and JSON results [default: .]
        --no-accuracy           Skip LLM calls, count tokens only
    -d, --dry-run               Ask only a few questions per dataset/format
    -h, --help                  Print help

ENVIRONMENT:
    DEEPSEEK_API_KEY            Required for DeepSeek provider
    MISTRAL_API_KEY             Required for Mistral provider
    OPENAI_API_KEY              Required for OpenAI provider

EXAMPLES:
    # Full benchmark with DeepSeek
    DEEPSEEK_API_KEY=sk-... cargo run --bin benchmark

    # Token efficiency only, no API key needed
    cargo run --bin benchmark -- --no-accuracy

    # Quick wiring check
    DEEPSEEK_API_KEY=sk-... cargo run --bin benchmark -- --dry-run

    # Compare JSON vs YAML with the GPT-4 tokenizer
    cargo run --bin benchmark -- --no-accuracy -f json -f yaml -e cl100k
"#
    );
}

/// Completion stand-in for token-only runs; never called when accuracy
/// testing is disabled.
struct NoCompletion;

impl Completion for NoCompletion {
    fn ask(&self, _prompt: &str) -> String {
        "ERROR: accuracy testing disabled".to_string()
    }
}

fn main() {
    let args = parse_args();

    let model = args
        .model
        .clone()
        .unwrap_or_else(|| args.provider.default_model().to_string());

    let config = BenchConfig::new()
        .with_accuracy(args.run_accuracy)
        .with_dry_run(args.dry_run)
        .with_encoding(args.encoding);

    let mut registry = FormatRegistry::with_builtin_formats();
    registry.retain_named(&args.formats);
    if registry.is_empty() {
        eprintln!(
            "No registered format matches {:?}. Use json, \"json compact\", yaml",
            args.formats
        );
        std::process::exit(1);
    }

    // Token-only runs never touch the network, so no key is needed
    let completion: Box<dyn Completion> = if args.run_accuracy {
        let api_key = match env::var(args.provider.env_var()) {
            Ok(key) => key,
            Err(_) => {
                eprintln!(
                    "ERROR: {} environment variable not set.\n\
                     Set it or use --no-accuracy to count tokens without API calls.",
                    args.provider.env_var()
                );
                std::process::exit(1);
            }
        };
        Box::new(ChatClient::with_config(
            args.provider,
            model.clone(),
            api_key,
            &config,
        ))
    } else {
        Box::new(NoCompletion)
    };

    let mut log = match RunLog::to_dir(&args.output_dir) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("ERROR: cannot open log files: {}", e);
            std::process::exit(1);
        }
    };

    let datasets = create_datasets();
    let runner = BenchmarkRunner::new(config, registry);

    log.line(&run_header(&RunHeader {
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        tokenizer: args.encoding.name().to_string(),
        model: model.clone(),
        datasets: datasets.len(),
        questions: datasets.iter().map(|d| d.question_count()).sum(),
        formats: runner.format_names(),
        run_accuracy: args.run_accuracy,
        dry_run: args.dry_run,
    }));

    let results = match runner.run(&datasets, completion.as_ref(), &mut log) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("ERROR: benchmark failed: {}", e);
            std::process::exit(1);
        }
    };

    log.line(&render_report(&results));

    let json_path = results_path(&args.output_dir, &results.timestamp.format("%Y%m%d_%H%M%S"));
    match write_json(&results, &json_path) {
        Ok(()) => log.line(&format!("\nResults saved to: {}", json_path.display())),
        Err(e) => eprintln!("Warning: failed to write JSON results: {}", e),
    }
    if let Some(path) = log.path() {
        println!("Full log: {}", path.display());
    }
}

fn results_path(dir: &Path, stamp: &impl std::fmt::Display) -> PathBuf {
    dir.join(format!("benchmark_results_{}.json", stamp))
}
