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

//! Type-aware answer validation.
//!
//! Pure scoring of free-text model responses against typed expected
//! values. No I/O, no randomness: two calls with identical arguments
//! always produce the same verdict.
//!
//! Dispatch checks the expected value for null-ness before anything else,
//! because boolean null-check questions reinterpret a "null" reply as an
//! affirmative answer rather than an unknown.

use serde_json::Value;

use crate::question::AnswerType;

/// Truthy vocabulary for boolean answers
const TRUE_SET: [&str; 8] = [
    "true", "yes", "active", "enabled", "1", "correct", "premium", "verified",
];

/// Falsy vocabulary for boolean answers
const FALSE_SET: [&str; 8] = [
    "false",
    "no",
    "inactive",
    "disabled",
    "0",
    "incorrect",
    "not premium",
    "not verified",
];

/// Responses that, taken whole, affirm a yes/no null-check question
const NULL_AFFIRM_SET: [&str; 5] = ["null", "none", "missing", "n/a", "empty"];

/// Substrings that acknowledge a null expected value
const NULL_INDICATORS: [&str; 8] = [
    "null",
    "none",
    "n/a",
    "missing",
    "not present",
    "~",
    "empty",
    "no value",
];

/// Absolute tolerance for numeric comparison
const ABS_TOLERANCE: f64 = 0.01;

/// Relative tolerance for nonzero expected numbers
const REL_TOLERANCE: f64 = 0.01;

/// Characters echoed from the response in diagnostic reasons
const PREVIEW_CHARS: usize = 50;

/// Outcome of validating one response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the response matches the expected value
    pub is_correct: bool,
    /// Which rule fired or why it failed. Diagnostic only, never
    /// inspected for control flow.
    pub reason: String,
}

impl Verdict {
    fn correct(reason: impl Into<String>) -> Self {
        Verdict {
            is_correct: true,
            reason: reason.into(),
        }
    }

    fn incorrect(reason: impl Into<String>) -> Self {
        Verdict {
            is_correct: false,
            reason: reason.into(),
        }
    }
}

/// Validate a raw model response against a typed expected value.
///
/// Total over the supported answer types: every input produces a verdict,
/// never a panic or an error.
pub fn validate(response: &str, expected: &Value, answer_type: AnswerType) -> Verdict {
    let response_clean = response.trim();
    let response_norm = normalize(response);
    let expected_str = expected_text(expected);
    let expected_norm = normalize(&expected_str);

    // Null-ness of the expected value wins over the declared type.
    if answer_type == AnswerType::Null
        || expected.is_null()
        || matches!(expected_norm.as_str(), "null" | "none" | "~")
    {
        return validate_null(&response_norm, response_clean);
    }

    match answer_type {
        AnswerType::Boolean => {
            validate_boolean(&response_norm, response_clean, &expected_norm, &expected_str)
        }
        AnswerType::Number => validate_number(response_clean, &expected_str),
        AnswerType::List => validate_list(&response_norm, response_clean, &expected_str),
        AnswerType::Email => {
            validate_email(&response_norm, response_clean, &expected_norm, &expected_str)
        }
        AnswerType::Date => validate_date(
            response_clean,
            &response_norm,
            &expected_str,
            &expected_norm,
        ),
        AnswerType::String | AnswerType::Null => {
            validate_string(&response_norm, response_clean, &expected_norm, &expected_str)
        }
    }
}

fn validate_null(response_norm: &str, response_clean: &str) -> Verdict {
    if NULL_INDICATORS
        .iter()
        .any(|ind| response_norm.contains(ind))
    {
        Verdict::correct("Null correctly identified")
    } else {
        Verdict::incorrect(format!(
            "Expected null, got: {}",
            preview(response_clean, PREVIEW_CHARS)
        ))
    }
}

fn validate_boolean(
    response_norm: &str,
    response_clean: &str,
    expected_norm: &str,
    expected_str: &str,
) -> Verdict {
    let expected_bool = TRUE_SET.contains(&expected_norm);

    let has_true = TRUE_SET.iter().any(|v| response_norm.contains(v));
    let has_false = FALSE_SET.iter().any(|v| response_norm.contains(v));
    // Any falsy token poisons a true verdict ("not active" contains "active").
    let response_is_true = has_true && !has_false;
    let response_is_false = has_false;
    // Only an exact null reply counts as affirming a null-check question.
    let response_is_null_confirm = NULL_AFFIRM_SET.contains(&response_norm);

    if expected_bool && response_is_true {
        return Verdict::correct("Boolean true matched");
    }
    if expected_bool && response_is_null_confirm {
        return Verdict::correct("Boolean true matched (null confirmation)");
    }
    if !expected_bool && response_is_false {
        return Verdict::correct("Boolean false matched");
    }
    Verdict::incorrect(format!(
        "Boolean mismatch: expected {}, got: {}",
        expected_str,
        preview(response_clean, PREVIEW_CHARS)
    ))
}

fn validate_number(response_clean: &str, expected_str: &str) -> Verdict {
    let expected_num = match extract_number(expected_str) {
        Some(n) => n,
        None => {
            // Fixture-authoring defect, not a response error.
            return Verdict::incorrect(format!(
                "Could not parse expected number: {}",
                expected_str
            ));
        }
    };

    for candidate in scan_numbers(response_clean) {
        if (candidate - expected_num).abs() < ABS_TOLERANCE {
            return Verdict::correct(format!("Number matched exactly: {}", candidate));
        }
        if expected_num != 0.0
            && ((candidate - expected_num) / expected_num).abs() < REL_TOLERANCE
        {
            return Verdict::correct(format!(
                "Number matched within tolerance: {} ~= {}",
                candidate, expected_num
            ));
        }
    }
    Verdict::incorrect(format!(
        "Number not found: expected {}, got: {}",
        expected_num,
        preview(response_clean, PREVIEW_CHARS)
    ))
}

fn validate_list(response_norm: &str, response_clean: &str, expected_str: &str) -> Verdict {
    let items: Vec<String> = expected_str.split(',').map(normalize).collect();
    if items.iter().all(|item| response_norm.contains(item)) {
        Verdict::correct(format!("All list items found: {:?}", items))
    } else {
        Verdict::incorrect(format!(
            "Missing list items: expected {:?}, got: {}",
            items,
            preview(response_clean, 100)
        ))
    }
}

fn validate_email(
    response_norm: &str,
    response_clean: &str,
    expected_norm: &str,
    expected_str: &str,
) -> Verdict {
    if response_norm.contains(expected_norm) {
        return Verdict::correct("Email matched");
    }
    // Models sometimes reformat addresses; accept local-part and domain
    // appearing independently.
    if let Some((local, domain)) = expected_norm.split_once('@') {
        if !domain.is_empty()
            && response_norm.contains(domain)
            && response_norm.contains(local)
        {
            return Verdict::correct("Email components matched");
        }
    }
    Verdict::incorrect(format!(
        "Email mismatch: expected {}, got: {}",
        expected_str,
        preview(response_clean, PREVIEW_CHARS)
    ))
}

fn validate_date(
    response_clean: &str,
    response_norm: &str,
    expected_str: &str,
    expected_norm: &str,
) -> Verdict {
    // Exact ISO date match first, against the raw response so digit
    // grouping is preserved.
    if let Some(iso) = find_iso_date(expected_str) {
        if response_clean.contains(&iso) {
            return Verdict::correct("Date matched");
        }
    }
    if response_norm.contains(expected_norm) {
        return Verdict::correct("Date string matched");
    }
    Verdict::incorrect(format!(
        "Date mismatch: expected {}, got: {}",
        expected_str,
        preview(response_clean, PREVIEW_CHARS)
    ))
}

fn validate_string(
    response_norm: &str,
    response_clean: &str,
    expected_norm: &str,
    expected_str: &str,
) -> Verdict {
    if response_norm.contains(expected_norm) {
        return Verdict::correct("String contained in response");
    }

    if word_boundary_match(response_norm, expected_norm) {
        return Verdict::correct("String matched at word boundary");
    }

    // Tolerate partial phrasing for multi-word answers.
    let words: Vec<&str> = expected_norm.split(' ').collect();
    if words.len() > 1 {
        let significant = words.iter().filter(|w| w.chars().count() > 2);
        let mut any = false;
        let mut all = true;
        for word in significant {
            any = true;
            if !response_norm.contains(word) {
                all = false;
                break;
            }
        }
        if any && all {
            return Verdict::correct("All significant words matched");
        }
    }

    Verdict::incorrect(format!(
        "String mismatch: expected '{}', got: '{}'",
        expected_str,
        preview(response_clean, PREVIEW_CHARS)
    ))
}

/// Render an expected value as comparison text.
///
/// Strings are taken verbatim (no JSON quoting); null becomes "null".
fn expected_text(expected: &Value) -> String {
    match expected {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Shared normalization: trim, strip one surrounding quote pair,
/// collapse whitespace runs, lowercase.
pub(crate) fn normalize(text: &str) -> String {
    let trimmed = text.trim();
    let chars: Vec<char> = trimmed.chars().collect();
    let unquoted = if chars.len() >= 2
        && (chars[0] == '"' || chars[0] == '\'')
        && chars[chars.len() - 1] == chars[0]
    {
        chars[1..chars.len() - 1].iter().collect::<String>()
    } else {
        trimmed.to_string()
    };
    unquoted
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Extract the first signed decimal from text after stripping currency
/// symbols, commas, percent signs, and whitespace
fn extract_number(text: &str) -> Option<f64> {
    let cleaned: Vec<char> = text
        .chars()
        .filter(|c| !matches!(c, '$' | '\u{20ac}' | '\u{a3}' | '\u{a5}' | ',' | '%') && !c.is_whitespace())
        .collect();
    let mut i = 0;
    while i < cleaned.len() {
        if cleaned[i].is_ascii_digit() {
            let start = if i > 0 && cleaned[i - 1] == '-' { i - 1 } else { i };
            let mut j = i;
            while j < cleaned.len() && cleaned[j].is_ascii_digit() {
                j += 1;
            }
            if j < cleaned.len() && cleaned[j] == '.' {
                j += 1;
                while j < cleaned.len() && cleaned[j].is_ascii_digit() {
                    j += 1;
                }
            }
            let token: String = cleaned[start..j].iter().collect();
            return token.trim_end_matches('.').parse::<f64>().ok();
        }
        i += 1;
    }
    None
}

/// Scan a raw response for every signed-decimal substring, left to right.
/// Commas are permitted as thousands separators and stripped before parsing.
fn scan_numbers(raw: &str) -> Vec<f64> {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_digit() || chars[i] == ',' {
            let start = if i > 0 && chars[i - 1] == '-' { i - 1 } else { i };
            let mut j = i;
            while j < chars.len() && (chars[j].is_ascii_digit() || chars[j] == ',') {
                j += 1;
            }
            if j < chars.len() && chars[j] == '.' {
                j += 1;
                while j < chars.len() && chars[j].is_ascii_digit() {
                    j += 1;
                }
            }
            let token: String = chars[start..j].iter().filter(|c| **c != ',').collect();
            if let Ok(n) = token.trim_end_matches('.').parse::<f64>() {
                out.push(n);
            }
            i = j;
        } else {
            i += 1;
        }
    }
    out
}

/// Find the first YYYY-MM-DD pattern in text
fn find_iso_date(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < 10 {
        return None;
    }
    for i in 0..=chars.len() - 10 {
        let window = &chars[i..i + 10];
        let shape_ok = window.iter().enumerate().all(|(k, c)| match k {
            4 | 7 => *c == '-',
            _ => c.is_ascii_digit(),
        });
        if shape_ok {
            return Some(window.iter().collect());
        }
    }
    None
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whole-word occurrence of needle inside haystack
fn word_boundary_match(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let first_is_word = match needle.chars().next() {
        Some(c) => is_word_char(c),
        None => return false,
    };
    let last_is_word = needle.chars().last().map(is_word_char).unwrap_or(false);

    let mut search_from = 0;
    while let Some(pos) = haystack[search_from..].find(needle) {
        let start = search_from + pos;
        let end = start + needle.len();
        let before_ok = match haystack[..start].chars().next_back() {
            Some(prev) => is_word_char(prev) != first_is_word,
            None => first_is_word,
        };
        let after_ok = match haystack[end..].chars().next() {
            Some(next) => is_word_char(next) != last_is_word,
            None => last_is_word,
        };
        if before_ok && after_ok {
            return true;
        }
        match haystack[start..].char_indices().nth(1) {
            Some((off, _)) => search_from = start + off,
            None => break,
        }
    }
    false
}

/// Truncate text to a character count, safe on multi-byte boundaries
fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello   World  "), "hello world");
        assert_eq!(normalize("\"Quoted\""), "quoted");
        assert_eq!(normalize("'single'"), "single");
        assert_eq!(normalize("plain"), "plain");
        // Quote stripping needs a matching surrounding pair
        assert_eq!(normalize("\"mismatched'"), "\"mismatched'");
    }

    #[test]
    fn test_null_substring_indicators() {
        for resp in [
            "null",
            "The value is None",
            "N/A",
            "that field is missing from the data",
            "not present",
            "~",
            "it appears to be empty",
            "no value was given",
        ] {
            let v = validate(resp, &Value::Null, AnswerType::Null);
            assert!(v.is_correct, "expected correct for {:?}: {}", resp, v.reason);
        }
        let v = validate("42", &Value::Null, AnswerType::Null);
        assert!(!v.is_correct);
    }

    #[test]
    fn test_null_dispatch_overrides_declared_type() {
        // Expected text "None" routes to null handling even for strings.
        let v = validate("the field is null", &json!("None"), AnswerType::String);
        assert!(v.is_correct);
        // A null expected value does the same under a number type.
        let v = validate("missing", &Value::Null, AnswerType::Number);
        assert!(v.is_correct);
    }

    #[test]
    fn test_boolean_true() {
        let v = validate("yes, the user is active", &json!(true), AnswerType::Boolean);
        assert!(v.is_correct);
        let v = validate("true", &json!("true"), AnswerType::Boolean);
        assert!(v.is_correct);
    }

    #[test]
    fn test_boolean_false_token_wins() {
        // "not active" carries both "active" and falsy markers; falsy wins.
        let v = validate("She is not active", &json!(true), AnswerType::Boolean);
        assert!(!v.is_correct);
        let v = validate("inactive", &json!(false), AnswerType::Boolean);
        assert!(v.is_correct);
    }

    #[test]
    fn test_boolean_null_as_affirmation_exact_only() {
        // "Is field X null?" answered with exactly "null" affirms the question.
        let v = validate("null", &json!(true), AnswerType::Boolean);
        assert!(v.is_correct);
        let v = validate("  None  ", &json!(true), AnswerType::Boolean);
        assert!(v.is_correct);
        // A longer sentence does not trigger the affirmation fallback.
        let v = validate(
            "the value is null somewhere",
            &json!(true),
            AnswerType::Boolean,
        );
        assert!(!v.is_correct);
    }

    #[test]
    fn test_number_exact() {
        let v = validate("28", &json!(28), AnswerType::Number);
        assert!(v.is_correct);
        let v = validate("The answer is 1,520.5 dollars", &json!(1520.5), AnswerType::Number);
        assert!(v.is_correct);
    }

    #[test]
    fn test_number_relative_tolerance() {
        // Within 1% of 1000
        let v = validate("1005", &json!(1000), AnswerType::Number);
        assert!(v.is_correct);
        // Clearly outside both tolerances
        let v = validate("1020", &json!(1000), AnswerType::Number);
        assert!(!v.is_correct);
    }

    #[test]
    fn test_number_zero_has_no_relative_tolerance() {
        let v = validate("0", &json!(0), AnswerType::Number);
        assert!(v.is_correct);
        let v = validate("0.5", &json!(0), AnswerType::Number);
        assert!(!v.is_correct);
    }

    #[test]
    fn test_number_negative_and_currency() {
        let v = validate("a drop of -12.5 points", &json!(-12.5), AnswerType::Number);
        assert!(v.is_correct);
        let v = validate("the price is 99.99", &json!("$99.99"), AnswerType::Number);
        assert!(v.is_correct);
    }

    #[test]
    fn test_number_malformed_expected() {
        let v = validate("42", &json!("not a number"), AnswerType::Number);
        assert!(!v.is_correct);
        assert!(v.reason.contains("Could not parse expected number"));
    }

    #[test]
    fn test_number_first_candidate_short_circuits() {
        let v = validate("either 28 or 30", &json!(28), AnswerType::Number);
        assert!(v.is_correct);
        assert!(v.reason.contains("28"));
    }

    #[test]
    fn test_list_all_or_nothing() {
        let v = validate("Alice and David", &json!("Alice, David"), AnswerType::List);
        assert!(v.is_correct);
        let v = validate(
            "The answer is A and also B",
            &json!("A, B, C"),
            AnswerType::List,
        );
        assert!(!v.is_correct);
        // Order-independent, case-insensitive
        let v = validate("c, b, a", &json!("A, B, C"), AnswerType::List);
        assert!(v.is_correct);
    }

    #[test]
    fn test_email_verbatim_and_components() {
        let v = validate(
            "carol@startup.dev",
            &json!("carol@startup.dev"),
            AnswerType::Email,
        );
        assert!(v.is_correct);
        // Components present but address reformatted
        let v = validate(
            "local part carol at domain startup.dev",
            &json!("carol@startup.dev"),
            AnswerType::Email,
        );
        assert!(v.is_correct);
        let v = validate("dave@startup.dev", &json!("carol@other.io"), AnswerType::Email);
        assert!(!v.is_correct);
    }

    #[test]
    fn test_date_iso_and_fallback() {
        let v = validate(
            "The order was placed 2024-03-15.",
            &json!("2024-03-15"),
            AnswerType::Date,
        );
        assert!(v.is_correct);
        // No ISO pattern in the expectation; falls back to containment
        let v = validate("March 2024", &json!("march 2024"), AnswerType::Date);
        assert!(v.is_correct);
        let v = validate("2024-03-16", &json!("2024-03-15"), AnswerType::Date);
        assert!(!v.is_correct);
    }

    #[test]
    fn test_string_containment() {
        let v = validate("The name is Alice Smith.", &json!("alice"), AnswerType::String);
        assert!(v.is_correct);
    }

    #[test]
    fn test_string_significant_words() {
        // Word order differs; all words longer than 2 chars present.
        let v = validate(
            "Smith, Alice (engineering)",
            &json!("Alice Smith"),
            AnswerType::String,
        );
        assert!(v.is_correct);
        let v = validate("Alice Jones", &json!("Alice Smith"), AnswerType::String);
        assert!(!v.is_correct);
    }

    #[test]
    fn test_string_mismatch_reason_has_preview() {
        let v = validate("Bob", &json!("Alice"), AnswerType::String);
        assert!(!v.is_correct);
        assert!(v.reason.contains("Alice"));
        assert!(v.reason.contains("Bob"));
    }

    #[test]
    fn test_error_sentinel_scores_incorrect() {
        let v = validate("ERROR: API failed", &json!("Alice"), AnswerType::String);
        assert!(!v.is_correct);
        let v = validate("ERROR: API failed", &json!(28), AnswerType::Number);
        assert!(!v.is_correct);
    }

    #[test]
    fn test_validate_is_deterministic() {
        let a = validate("yes it is active", &json!(true), AnswerType::Boolean);
        let b = validate("yes it is active", &json!(true), AnswerType::Boolean);
        assert_eq!(a, b);
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let text = "\u{e9}".repeat(60);
        let p = preview(&text, 50);
        assert_eq!(p.chars().count(), 50);
    }

    #[test]
    fn test_find_iso_date() {
        assert_eq!(find_iso_date("2024-01-02"), Some("2024-01-02".to_string()));
        assert_eq!(
            find_iso_date("shipped 2023-12-31 late"),
            Some("2023-12-31".to_string())
        );
        assert_eq!(find_iso_date("12/31/2023"), None);
        assert_eq!(find_iso_date("short"), None);
    }

    #[test]
    fn test_word_boundary_match() {
        assert!(word_boundary_match("the cat sat", "cat"));
        assert!(!word_boundary_match("concatenate", "cat"));
        assert!(word_boundary_match("cat", "cat"));
    }

    #[test]
    fn test_scan_numbers() {
        assert_eq!(scan_numbers("28"), vec![28.0]);
        assert_eq!(scan_numbers("between 1,000 and 2,500.75"), vec![1000.0, 2500.75]);
        assert_eq!(scan_numbers("range 3-5"), vec![3.0, -5.0]);
        assert!(scan_numbers("no digits here").is_empty());
    }

    #[test]
    fn test_extract_number() {
        assert_eq!(extract_number("$1,520.50"), Some(1520.5));
        assert_eq!(extract_number("-42"), Some(-42.0));
        assert_eq!(extract_number("85%"), Some(85.0));
        assert_eq!(extract_number("nothing"), None);
    }
}
