#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod catalog;
pub mod enhance;
pub mod error;
pub mod mapper;
pub mod prompt;
pub mod rules;
pub mod validate;

pub use catalog::{ToolCategory, ToolEntry, ToolStatus};
pub use enhance::{Enhancement, enhance};
pub use error::{ConvertError, Result};
pub use mapper::{Conversion, PromptMapper};
pub use prompt::{Constraints, ParamType, ParameterDescriptor, PromptStructure, TaskName};
pub use validate::{ValidationResult, validate_json};
