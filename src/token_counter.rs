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

//! Token counting for encoded payloads.
//!
//! Uses tiktoken-rs with o200k_base (GPT-4o family) as the default
//! encoding, falling back to cl100k_base when requested.

use once_cell::sync::Lazy;
use tiktoken_rs::{cl100k_base, o200k_base, CoreBPE};

// Cache tokenizers; BPE table construction is expensive.
static O200K: Lazy<CoreBPE> =
    Lazy::new(|| o200k_base().expect("Failed to load o200k_base tokenizer"));
static CL100K: Lazy<CoreBPE> =
    Lazy::new(|| cl100k_base().expect("Failed to load cl100k_base tokenizer"));

/// Tokenizer encoding used for token counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenEncoding {
    /// o200k_base (GPT-4o / o-series)
    O200kBase,
    /// cl100k_base (GPT-4 / GPT-3.5)
    Cl100kBase,
}

impl TokenEncoding {
    /// Human-readable encoding name for logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            TokenEncoding::O200kBase => "o200k_base (GPT-4o/GPT-5)",
            TokenEncoding::Cl100kBase => "cl100k_base (GPT-4)",
        }
    }

    fn bpe(&self) -> &'static CoreBPE {
        match self {
            TokenEncoding::O200kBase => &O200K,
            TokenEncoding::Cl100kBase => &CL100K,
        }
    }

    /// Count tokens in a text string using this encoding
    pub fn count(&self, text: &str) -> usize {
        self.bpe().encode_with_special_tokens(text).len()
    }
}

/// Count tokens using the default o200k_base encoding.
///
/// # Example
///
/// ```no_run
/// use fmtbench::count_tokens;
///
/// let tokens = count_tokens("Hello, world!");
/// assert!(tokens > 0);
/// ```
pub fn count_tokens(text: &str) -> usize {
    TokenEncoding::O200kBase.count(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_tokens() {
        let text = "Hello, world!";
        let tokens = count_tokens(text);
        assert!(tokens > 0);
        assert!(tokens < text.len()); // Tokens should be fewer than chars
    }

    #[test]
    fn test_empty_text_is_zero_tokens() {
        assert_eq!(count_tokens(""), 0);
        assert_eq!(TokenEncoding::Cl100kBase.count(""), 0);
    }

    #[test]
    fn test_encodings_differ() {
        // The two BPE tables split long structured text differently.
        let text = r#"{"users":[{"id":1,"name":"Alice","role":"admin","active":true}]}"#;
        let o200k = TokenEncoding::O200kBase.count(text);
        let cl100k = TokenEncoding::Cl100kBase.count(text);
        assert!(o200k > 0);
        assert!(cl100k > 0);
    }

    #[test]
    fn test_compact_json_uses_fewer_tokens_than_pretty() {
        let value = serde_json::json!({
            "users": [
                {"id": 1, "name": "Alice", "active": true},
                {"id": 2, "name": "Bob", "active": false},
            ]
        });
        let compact = serde_json::to_string(&value).unwrap();
        let pretty = serde_json::to_string_pretty(&value).unwrap();
        assert!(count_tokens(&compact) < count_tokens(&pretty));
    }
}
