//! Top-level entry point: decides what a configuration string value is.

use crate::{
    ast::Statement,
    config::ParserConfig,
    error::ParseError,
    lexer::Lexer,
    parser::Parser,
};

/// Classifies string values with a fixed configuration.
///
/// Holds no per-call state, so one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    config: ParserConfig,
}

impl Classifier {
    pub fn new(config: ParserConfig) -> Self {
        Classifier { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Classifies `input` as an escaped literal, an expression, or a plain
    /// string literal, in that order of precedence.
    ///
    /// - `[[...` is an escaped literal holding everything after the first `[`.
    /// - `[...` must be exactly one bracketed expression; anything else is an
    ///   error, never a literal.
    /// - Everything else, the empty string included, is returned verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsc_expression::{Classifier, Statement};
    ///
    /// let classifier = Classifier::default();
    /// assert_eq!(
    ///     classifier.classify("[[escaped]").unwrap(),
    ///     Statement::EscapedLiteral("[escaped]".to_string())
    /// );
    /// assert_eq!(
    ///     classifier.classify("plain").unwrap(),
    ///     Statement::StringLiteral("plain".to_string())
    /// );
    /// assert!(classifier.classify("[not valid]").is_err());
    /// ```
    pub fn classify(&self, input: &str) -> Result<Statement, ParseError> {
        if let Some(escaped) = input.strip_prefix('[') {
            if escaped.starts_with('[') {
                Ok(Statement::EscapedLiteral(escaped.to_string()))
            } else {
                let mut lexer = Lexer::new(input);
                lexer.advance();
                let mut parser = Parser::with_config(lexer, &self.config);
                let node = parser.parse_enclosed_expression()?;
                Ok(Statement::Expression(node))
            }
        } else {
            Ok(Statement::StringLiteral(input.to_string()))
        }
    }
}

/// Classifies `input` with the default [`ParserConfig`].
///
/// ```
/// use dsc_expression::{classify, Argument, Statement};
///
/// let Statement::Expression(node) = classify("[foo('it''s')]").unwrap() else {
///     panic!("expected an expression");
/// };
/// assert_eq!(node.call.args, vec![Argument::Str("it's".to_string())]);
/// ```
pub fn classify(input: &str) -> Result<Statement, ParseError> {
    Classifier::default().classify(input)
}
