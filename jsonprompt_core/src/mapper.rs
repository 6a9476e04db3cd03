//! Prompt-to-structure mapping.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::prompt::{
    Constraints, ParamType, ParameterDescriptor, PromptStructure, TaskName, ValidationRules,
};
use crate::rules::{PARAMETER_RULES, default_parameters, select_task};
use crate::validate::{ValidationResult, validate_json};

pub const RESPONSE_FORMAT: &str = "structured_data";
pub const DEFAULT_MAX_RESULTS: u32 = 10;
pub const SEARCH_MAX_RESULTS: u32 = 20;
pub const TIMEOUT_SECONDS: u32 = 30;
pub const CHATBOT_MAX_TURNS: u32 = 50;
pub const ANALYSIS_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Result of one conversion: the structure, its exported text and the
/// validation of that text.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub structure: PromptStructure,
    pub json: String,
    pub validation: ValidationResult,
}

/// Stateless mapper over the built-in rule tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptMapper;

impl PromptMapper {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Build the structure for `input`.
    ///
    /// # Errors
    /// Returns [`ConvertError::EmptyInput`] for blank input.
    pub fn map(&self, input: &str) -> Result<PromptStructure> {
        let purpose = input.trim();
        if purpose.is_empty() {
            return Err(ConvertError::EmptyInput);
        }

        let lowered = purpose.to_lowercase();
        let task = select_task(&lowered);
        let parameters = collect_parameters(&lowered);

        debug!(
            "Mapped prompt to task={} with {} parameter(s)",
            task,
            parameters.len()
        );

        Ok(PromptStructure {
            task,
            purpose: purpose.to_string(),
            parameters,
            constraints: derive_constraints(task),
            output_format: output_format(),
            validation_rules: ValidationRules::default(),
        })
    }

    /// Map, serialize and validate in one step.
    pub fn convert(&self, input: &str) -> Result<Conversion> {
        let structure = self.map(input)?;
        let json = structure.to_pretty_json()?;
        let validation = validate_json(&json);
        Ok(Conversion {
            structure,
            json,
            validation,
        })
    }
}

fn collect_parameters(lowered: &str) -> IndexMap<String, ParameterDescriptor> {
    let mut parameters: IndexMap<String, ParameterDescriptor> = PARAMETER_RULES
        .iter()
        .filter(|rule| rule.matches(lowered))
        .map(|rule| (rule.name.to_string(), rule.descriptor()))
        .collect();

    if parameters.is_empty() {
        parameters.extend(
            default_parameters()
                .into_iter()
                .map(|(name, descriptor)| (name.to_string(), descriptor)),
        );
    }
    parameters
}

fn derive_constraints(task: TaskName) -> Constraints {
    let label = task.as_str();
    let is_chatbot = label.contains("chatbot");
    let is_analysis = label.contains("analysis");

    Constraints {
        max_results: if label.contains("search") {
            SEARCH_MAX_RESULTS
        } else {
            DEFAULT_MAX_RESULTS
        },
        response_format: RESPONSE_FORMAT.to_string(),
        include_metadata: true,
        timeout_seconds: TIMEOUT_SECONDS,
        maintain_context: is_chatbot.then_some(true),
        max_conversation_turns: is_chatbot.then_some(CHATBOT_MAX_TURNS),
        confidence_threshold: is_analysis.then_some(ANALYSIS_CONFIDENCE_THRESHOLD),
        include_visualizations: is_analysis.then_some(true),
    }
}

fn output_format() -> IndexMap<String, ParamType> {
    [
        ("result", ParamType::String),
        ("confidence", ParamType::Number),
        ("metadata", ParamType::Object),
        ("timestamp", ParamType::String),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}
