//! Presentation of lookup results.
//!
//! Renderers receive full-precision amounts and truncate to whole yen
//! themselves.

pub mod json;
pub mod report;
pub mod text;

use crate::error::PayoutError;

/// How a statement is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The line shown to the end user for a recoverable lookup failure.
pub fn user_message(err: &PayoutError) -> Option<&'static str> {
    match err {
        PayoutError::EmptyInput => Some("Please enter a student id."),
        PayoutError::NotFound(_) => {
            Some("That id was not found. Check it for typos; it may also be missing from the list.")
        }
        _ => None,
    }
}
