//! Auto-enhancement of the raw prompt text.
//!
//! Independent of the structure mapper: rules append clarifying clauses to
//! the text itself. All conditions are evaluated against the original input,
//! and applicable clauses are appended in table order.

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::rules::mentions_any;

#[derive(Debug, Clone, Copy)]
pub struct EnhanceRule {
    pub name: &'static str,
    /// Empty means the rule is always considered.
    pub requires: &'static [&'static str],
    pub unless: &'static [&'static str],
    pub clause: &'static str,
}

impl EnhanceRule {
    #[must_use]
    pub fn applies(&self, lowered: &str) -> bool {
        let required = self.requires.is_empty() || mentions_any(lowered, self.requires);
        required && !mentions_any(lowered, self.unless)
    }
}

pub const ENHANCE_RULES: &[EnhanceRule] = &[
    EnhanceRule {
        name: "conversation_context",
        requires: &["chatbot", "bot"],
        unless: &["context", "conversation"],
        clause: "The chatbot should maintain conversation context and remember previous interactions.",
    },
    EnhanceRule {
        name: "analysis_insights",
        requires: &["analyze", "analysis"],
        unless: &["insight", "report"],
        clause: "Provide detailed insights and a summary report of the findings.",
    },
    EnhanceRule {
        name: "output_format",
        requires: &["generate", "create"],
        unless: &["format", "style"],
        clause: "Specify the desired output format and style.",
    },
    EnhanceRule {
        name: "search_filters",
        requires: &["find", "search"],
        unless: &["filter", "sort"],
        clause: "Include filtering and sorting options for the results.",
    },
    EnhanceRule {
        name: "error_handling",
        requires: &[],
        unless: &["error", "validation"],
        clause: "Include error handling and input validation.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enhancement {
    pub text: String,
    pub applied: Vec<&'static str>,
}

impl Enhancement {
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Append every applicable clause to the trimmed input.
///
/// # Errors
/// Returns [`ConvertError::EmptyInput`] for blank input.
pub fn enhance(input: &str) -> Result<Enhancement> {
    let base = input.trim();
    if base.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let lowered = base.to_lowercase();
    let mut text = base.to_string();
    let mut applied = Vec::new();

    for rule in ENHANCE_RULES.iter().filter(|r| r.applies(&lowered)) {
        text.push(' ');
        text.push_str(rule.clause);
        applied.push(rule.name);
    }

    debug!("Enhanced prompt with rules: {applied:?}");
    Ok(Enhancement { text, applied })
}
