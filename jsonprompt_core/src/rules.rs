//! Keyword rule tables.
//!
//! Every trigger is a plain substring test against the lowercased input.
//! Table order matters: task rules are a priority chain, parameter rules are
//! applied in order and all matching ones fire.

use crate::prompt::{ParamType, ParameterDescriptor, TaskName};

/// Returns true if any trigger occurs in `lowered`.
#[must_use]
pub fn mentions_any(lowered: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|t| lowered.contains(t))
}

/// Selects a task label when any trigger matches.
#[derive(Debug, Clone, Copy)]
pub struct TaskRule {
    pub triggers: &'static [&'static str],
    pub task: TaskName,
}

impl TaskRule {
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        mentions_any(lowered, self.triggers)
    }
}

/// Adds one named parameter when any trigger matches.
#[derive(Debug, Clone, Copy)]
pub struct ParameterRule {
    pub triggers: &'static [&'static str],
    pub name: &'static str,
    pub kind: ParamType,
    pub description: &'static str,
    pub required: bool,
}

impl ParameterRule {
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        mentions_any(lowered, self.triggers)
    }

    #[must_use]
    pub fn descriptor(&self) -> ParameterDescriptor {
        ParameterDescriptor::new(self.kind, self.description, self.required)
    }
}

/// Task chain, highest priority first.
pub const TASK_RULES: &[TaskRule] = &[
    TaskRule {
        triggers: &["chatbot", "bot"],
        task: TaskName::ChatbotAssistant,
    },
    TaskRule {
        triggers: &["find", "search"],
        task: TaskName::SearchAssistant,
    },
    TaskRule {
        triggers: &["analyze", "analysis"],
        task: TaskName::AnalysisTool,
    },
    TaskRule {
        triggers: &["generate", "create"],
        task: TaskName::ContentGenerator,
    },
    TaskRule {
        triggers: &["recommend", "suggest"],
        task: TaskName::RecommendationEngine,
    },
    TaskRule {
        triggers: &["classify", "categorize"],
        task: TaskName::ClassificationTool,
    },
];

pub const PARAMETER_RULES: &[ParameterRule] = &[
    ParameterRule {
        triggers: &["location", "geographic"],
        name: "location",
        kind: ParamType::String,
        description: "Geographic location or area",
        required: true,
    },
    ParameterRule {
        triggers: &["user", "people", "person"],
        name: "user_preferences",
        kind: ParamType::Object,
        description: "User preferences and requirements",
        required: false,
    },
    ParameterRule {
        triggers: &["type", "category", "classification"],
        name: "category",
        kind: ParamType::String,
        description: "Category or type specification",
        required: false,
    },
    ParameterRule {
        triggers: &["price", "cost", "budget"],
        name: "price_range",
        kind: ParamType::Object,
        description: "Price range or budget constraints",
        required: false,
    },
    ParameterRule {
        triggers: &["time", "date", "schedule"],
        name: "time_frame",
        kind: ParamType::String,
        description: "Time period, date, or schedule",
        required: false,
    },
];

/// Used when no parameter rule matched.
#[must_use]
pub fn default_parameters() -> [(&'static str, ParameterDescriptor); 2] {
    [
        (
            "input_data",
            ParameterDescriptor::new(ParamType::String, "Primary input for processing", true),
        ),
        (
            "options",
            ParameterDescriptor::new(ParamType::Object, "Additional configuration options", false),
        ),
    ]
}

/// First matching task rule, or `custom_prompt`.
#[must_use]
pub fn select_task(lowered: &str) -> TaskName {
    TASK_RULES
        .iter()
        .find(|rule| rule.matches(lowered))
        .map_or(TaskName::CustomPrompt, |rule| rule.task)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_is_first_match_wins() {
        // "search" would match the second rule, but "bot" comes first.
        assert_eq!(
            select_task("a bot that can search menus"),
            TaskName::ChatbotAssistant
        );
        assert_eq!(
            select_task("create an analysis of sales"),
            TaskName::AnalysisTool
        );
        assert_eq!(
            select_task("suggest and categorize songs"),
            TaskName::RecommendationEngine
        );
    }

    #[test]
    fn test_unmatched_text_is_custom_prompt() {
        assert_eq!(select_task("hello world"), TaskName::CustomPrompt);
    }

    #[test]
    fn test_triggers_are_substrings() {
        // Known looseness: "robot" contains "bot".
        assert_eq!(select_task("a robot arm"), TaskName::ChatbotAssistant);
        assert!(PARAMETER_RULES[2].matches("a prototype"));
    }

    #[test]
    fn test_parameter_names_are_unique() {
        let mut names: Vec<_> = PARAMETER_RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PARAMETER_RULES.len());
    }
}
