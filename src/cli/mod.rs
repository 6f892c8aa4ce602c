//! CLI support for dsc-expression
//!
//! Provides programmatic access to the `dscexpr` commands so other tools can
//! embed them without going through a process boundary.

mod check;
mod docs;

pub use check::{Command, CommandOptions, CommandOutput, execute, strip_line_break};
pub use docs::{DocTopic, get_doc_topic, get_docs_overview};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Statement failed to parse; `rendered` points at the failure
    #[error("Parse error:\n{rendered}")]
    Parse {
        #[source]
        error: crate::ParseError,
        rendered: String,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No statement provided
    #[error("No statement provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,

    /// Unknown documentation topic
    #[error("Unknown topic: '{0}'\nRun 'dscexpr docs' to see available topics.")]
    UnknownTopic(String),
}

impl CliError {
    /// Wraps a parse failure together with its diagnostic for `input`.
    pub fn parse(error: crate::ParseError, input: &str) -> Self {
        let rendered = error.render(input);
        CliError::Parse { error, rendered }
    }
}
