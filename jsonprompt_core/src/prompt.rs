//! The structured prompt produced by the mapper.
//!
//! Field order in these types is the key order of the exported JSON, and the
//! `parameters`/`output_format` maps keep insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Fixed vocabulary of task labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskName {
    ChatbotAssistant,
    SearchAssistant,
    AnalysisTool,
    ContentGenerator,
    RecommendationEngine,
    ClassificationTool,
    #[default]
    CustomPrompt,
}

impl TaskName {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ChatbotAssistant => "chatbot_assistant",
            Self::SearchAssistant => "search_assistant",
            Self::AnalysisTool => "analysis_tool",
            Self::ContentGenerator => "content_generator",
            Self::RecommendationEngine => "recommendation_engine",
            Self::ClassificationTool => "classification_tool",
            Self::CustomPrompt => "custom_prompt",
        }
    }
}

impl std::fmt::Display for TaskName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON type label used in parameter descriptors and the output format block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    #[serde(rename = "type")]
    pub kind: ParamType,
    pub description: String,
    pub required: bool,
}

impl ParameterDescriptor {
    #[must_use]
    pub fn new(kind: ParamType, description: impl Into<String>, required: bool) -> Self {
        Self {
            kind,
            description: description.into(),
            required,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    pub max_results: u32,
    pub response_format: String,
    pub include_metadata: bool,
    pub timeout_seconds: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintain_context: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_conversation_turns: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_visualizations: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    pub required_fields: Vec<String>,
    pub strict_types: bool,
    pub allow_additional_properties: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            required_fields: vec![
                "task".to_string(),
                "purpose".to_string(),
                "parameters".to_string(),
            ],
            strict_types: true,
            allow_additional_properties: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptStructure {
    pub task: TaskName,
    pub purpose: String,
    pub parameters: IndexMap<String, ParameterDescriptor>,
    pub constraints: Constraints,
    pub output_format: IndexMap<String, ParamType>,
    pub validation_rules: ValidationRules,
}

impl PromptStructure {
    /// Serialize with 2-space indentation, the export format.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_name_serializes_as_label() {
        let json = serde_json::to_string(&TaskName::RecommendationEngine).unwrap();
        assert_eq!(json, "\"recommendation_engine\"");
        assert_eq!(TaskName::CustomPrompt.to_string(), "custom_prompt");
    }

    #[test]
    fn test_descriptor_uses_type_key() {
        let d = ParameterDescriptor::new(ParamType::Object, "Options", false);
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["type"], "object");
        assert_eq!(value["required"], false);
    }

    #[test]
    fn test_absent_optional_constraints_are_omitted() {
        let c = Constraints {
            max_results: 10,
            response_format: "structured_data".to_string(),
            include_metadata: true,
            timeout_seconds: 30,
            maintain_context: None,
            max_conversation_turns: None,
            confidence_threshold: None,
            include_visualizations: None,
        };
        let value = serde_json::to_value(&c).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(!obj.contains_key("maintain_context"));
    }
}
