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

//! Format adapters: each encoding under evaluation is a pure function
//! from a structured payload to text.
//!
//! The runner treats every format identically through [`FormatEncoder`];
//! an encoder never observes another encoder's output.

use serde_json::Value;

use crate::error::{BenchError, Result};

/// A serialization format under evaluation
pub trait FormatEncoder {
    /// Display name used in logs, reports, and winner sets
    fn name(&self) -> &str;

    /// Encode a structured payload into this format's text
    fn encode(&self, data: &Value) -> Result<String>;
}

/// Pretty-printed JSON (2-space indentation)
pub struct JsonPretty;

impl FormatEncoder for JsonPretty {
    fn name(&self) -> &str {
        "JSON"
    }

    fn encode(&self, data: &Value) -> Result<String> {
        serde_json::to_string_pretty(data).map_err(|e| BenchError::EncodeFailed {
            format: self.name().to_string(),
            message: e.to_string(),
        })
    }
}

/// Compact single-line JSON
pub struct JsonCompact;

impl FormatEncoder for JsonCompact {
    fn name(&self) -> &str {
        "JSON Compact"
    }

    fn encode(&self, data: &Value) -> Result<String> {
        serde_json::to_string(data).map_err(|e| BenchError::EncodeFailed {
            format: self.name().to_string(),
            message: e.to_string(),
        })
    }
}

/// YAML block style
pub struct Yaml;

impl FormatEncoder for Yaml {
    fn name(&self) -> &str {
        "YAML"
    }

    fn encode(&self, data: &Value) -> Result<String> {
        serde_yaml::to_string(data).map_err(|e| BenchError::EncodeFailed {
            format: self.name().to_string(),
            message: e.to_string(),
        })
    }
}

/// Registered formats for a run.
///
/// Any nonempty subset of formats works without code changes; an empty
/// registry is a configuration error surfaced at run start.
pub struct FormatRegistry {
    formats: Vec<Box<dyn FormatEncoder>>,
}

impl FormatRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: Vec::new(),
        }
    }

    /// Registry with the built-in formats: JSON, JSON Compact, YAML
    pub fn with_builtin_formats() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(JsonPretty));
        registry.register(Box::new(JsonCompact));
        registry.register(Box::new(Yaml));
        registry
    }

    /// Register a format
    pub fn register(&mut self, format: Box<dyn FormatEncoder>) {
        self.formats.push(format);
    }

    /// Keep only formats whose names are in the given list (case-insensitive).
    /// An empty filter keeps everything.
    pub fn retain_named(&mut self, names: &[String]) {
        if names.is_empty() {
            return;
        }
        self.formats
            .retain(|f| names.iter().any(|n| n.eq_ignore_ascii_case(f.name())));
    }

    /// Registered formats in registration order
    pub fn formats(&self) -> &[Box<dyn FormatEncoder>] {
        &self.formats
    }

    /// Number of registered formats
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether no formats are registered
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_builtin_formats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_formats() {
        let registry = FormatRegistry::with_builtin_formats();
        assert_eq!(registry.len(), 3);
        let names: Vec<&str> = registry.formats().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["JSON", "JSON Compact", "YAML"]);
    }

    #[test]
    fn test_json_compact_is_smaller_than_pretty() {
        let data = json!({"users": [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]});
        let pretty = JsonPretty.encode(&data).unwrap();
        let compact = JsonCompact.encode(&data).unwrap();
        assert!(compact.len() < pretty.len());
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_yaml_encoding() {
        let data = json!({"name": "Alice", "active": true, "score": 95.5});
        let yaml = Yaml.encode(&data).unwrap();
        assert!(yaml.contains("name: Alice"));
        assert!(yaml.contains("active: true"));
    }

    #[test]
    fn test_retain_named() {
        let mut registry = FormatRegistry::with_builtin_formats();
        registry.retain_named(&["yaml".to_string(), "JSON".to_string()]);
        let names: Vec<&str> = registry.formats().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["JSON", "YAML"]);
    }

    #[test]
    fn test_retain_with_empty_filter_keeps_all() {
        let mut registry = FormatRegistry::with_builtin_formats();
        registry.retain_named(&[]);
        assert_eq!(registry.len(), 3);
    }
}
