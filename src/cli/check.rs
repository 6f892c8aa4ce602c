//! Run dscexpr commands against a single statement

use tracing::{debug, trace};

use super::CliError;
use crate::{Classifier, ParserConfig, Statement, output};

/// What to do with the classified statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Print the statement tree as JSON
    #[default]
    Parse,
    /// Only validate syntax
    Check,
    /// Print the canonical form
    Format,
    /// List referenced function names
    Functions,
}

/// Options for a single command run
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    pub command: Command,
    /// The statement text; `None` when nothing was given
    pub statement: Option<String>,
    /// Nesting limit for the parser
    pub config: ParserConfig,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Statement tree rendered as JSON
    Json(String),
    /// Syntax validation passed
    SyntaxValid,
    /// Canonical statement text
    Formatted(String),
    /// Function names in pre-order; empty for literals
    FunctionNames(Vec<String>),
}

/// Removes one trailing `\n` or `\r\n`, as left by `echo` or a text file.
pub fn strip_line_break(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input)
}

/// Execute a dscexpr command
pub fn execute(options: &CommandOptions) -> Result<CommandOutput, CliError> {
    let input = options.statement.as_deref().ok_or(CliError::NoInput)?;
    debug!(len = input.len(), max_depth = options.config.max_depth, "classifying statement");

    let classifier = Classifier::new(options.config);
    let statement = classifier
        .classify(input)
        .map_err(|e| CliError::parse(e, input))?;
    debug!(kind = statement_kind(&statement), "classified statement");

    let output = match options.command {
        Command::Parse => {
            let json = if options.pretty {
                output::to_json_pretty(&statement)
            } else {
                output::to_json(&statement)
            }?;
            CommandOutput::Json(json)
        }
        Command::Check => CommandOutput::SyntaxValid,
        Command::Format => CommandOutput::Formatted(statement.to_string()),
        Command::Functions => {
            let names: Vec<String> = statement
                .as_expression()
                .map(|node| node.function_names().into_iter().map(String::from).collect())
                .unwrap_or_default();
            trace!(?names, "referenced functions");
            CommandOutput::FunctionNames(names)
        }
    };
    Ok(output)
}

fn statement_kind(statement: &Statement) -> &'static str {
    match statement {
        Statement::EscapedLiteral(_) => "escapedLiteral",
        Statement::Expression(_) => "expression",
        Statement::StringLiteral(_) => "stringLiteral",
    }
}
