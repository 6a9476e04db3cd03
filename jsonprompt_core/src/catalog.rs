//! Built-in tool catalog and case-insensitive substring search.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolCategory {
    Converter,
    Generator,
    Utility,
}

impl ToolCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Converter => "Converter",
            Self::Generator => "Generator",
            Self::Utility => "Utility",
        }
    }
}

impl std::str::FromStr for ToolCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "converter" => Ok(Self::Converter),
            "generator" => Ok(Self::Generator),
            "utility" => Ok(Self::Utility),
            other => Err(format!("unknown tool category: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolStatus {
    Available,
    ComingSoon,
}

impl ToolStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::ComingSoon => "Coming Soon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub status: ToolStatus,
    pub category: ToolCategory,
    pub features: &'static [&'static str],
}

/// Anything that can be filtered by a free-text query.
pub trait Searchable {
    /// Text fields the query is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for ToolEntry {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title, self.description];
        fields.extend_from_slice(self.features);
        fields
    }
}

pub const TOOLS: &[ToolEntry] = &[
    ToolEntry {
        title: "Text to JSON Converter",
        description: "Transform natural language descriptions into structured JSON prompts with intelligent parsing and validation.",
        status: ToolStatus::Available,
        category: ToolCategory::Converter,
        features: &[
            "Real-time validation",
            "Copy to clipboard",
            "Download JSON",
            "Smart parsing",
        ],
    },
    ToolEntry {
        title: "JSON Schema Generator",
        description: "Generate comprehensive JSON schemas from your existing JSON data with validation rules.",
        status: ToolStatus::ComingSoon,
        category: ToolCategory::Generator,
        features: &[
            "Auto-generate schemas",
            "Validation rules",
            "Type inference",
            "Documentation",
        ],
    },
    ToolEntry {
        title: "JSON Validator & Formatter",
        description: "Validate, format, and beautify your JSON with detailed error reporting and syntax highlighting.",
        status: ToolStatus::ComingSoon,
        category: ToolCategory::Utility,
        features: &[
            "Syntax validation",
            "Pretty formatting",
            "Error highlighting",
            "Multiple formats",
        ],
    },
    ToolEntry {
        title: "API Mock Generator",
        description: "Generate realistic API mocks from JSON schemas for rapid prototyping and testing.",
        status: ToolStatus::ComingSoon,
        category: ToolCategory::Generator,
        features: &[
            "Realistic data",
            "Multiple endpoints",
            "Custom rules",
            "Export options",
        ],
    },
    ToolEntry {
        title: "JSON to Code Generator",
        description: "Convert JSON structures to type definitions in multiple programming languages.",
        status: ToolStatus::ComingSoon,
        category: ToolCategory::Generator,
        features: &["TypeScript types", "Python classes", "Java models", "Go structs"],
    },
    ToolEntry {
        title: "JSON Diff & Merge",
        description: "Compare JSON objects, visualize differences, and merge changes with conflict resolution.",
        status: ToolStatus::ComingSoon,
        category: ToolCategory::Utility,
        features: &[
            "Visual diff",
            "Merge conflicts",
            "History tracking",
            "Export patches",
        ],
    },
];

/// Entries with any field containing `query`, ignoring case.
///
/// A blank query returns every entry.
#[must_use]
pub fn search<'a, T: Searchable>(entries: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.iter().collect();
    }
    entries
        .iter()
        .filter(|e| {
            e.search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains(&needle))
        })
        .collect()
}

#[must_use]
pub fn by_category(entries: &[ToolEntry], category: ToolCategory) -> Vec<&ToolEntry> {
    entries.iter().filter(|e| e.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_returns_all() {
        assert_eq!(search(TOOLS, "  ").len(), TOOLS.len());
    }

    #[test]
    fn test_search_ignores_case_and_checks_features() {
        let hits = search(TOOLS, "CLIPBOARD");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Text to JSON Converter");

        let hits = search(TOOLS, "go structs");
        assert_eq!(hits[0].title, "JSON to Code Generator");
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(search(TOOLS, "spreadsheet").is_empty());
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(by_category(TOOLS, ToolCategory::Generator).len(), 3);
        assert_eq!("utility".parse::<ToolCategory>(), Ok(ToolCategory::Utility));
        assert!("other".parse::<ToolCategory>().is_err());
    }

    #[test]
    fn test_only_converter_is_available() {
        let available: Vec<_> = TOOLS
            .iter()
            .filter(|t| t.status == ToolStatus::Available)
            .collect();
        assert_eq!(available.len(), 1);
    }
}
