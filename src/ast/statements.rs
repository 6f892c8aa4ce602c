use serde::Serialize;

use crate::ast::ExpressionNode;

/// The classified form of one configuration string value.
///
/// Exactly one variant comes out of every successful classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum Statement {
    /// Input that began with `[[`; holds the input minus its first `[`.
    ///
    /// # Example
    /// ```text
    /// [[not an expression]   =>   "[not an expression]"
    /// ```
    EscapedLiteral(String),

    /// A bracketed expression
    ///
    /// # Example
    /// ```text
    /// [resourceId('Microsoft.Compute', 'vm')]
    /// ```
    Expression(ExpressionNode),

    /// Anything not starting with `[`, kept verbatim
    StringLiteral(String),
}

impl Statement {
    pub fn as_expression(&self) -> Option<&ExpressionNode> {
        match self {
            Statement::Expression(node) => Some(node),
            _ => None,
        }
    }

    /// True for the two variants that carry text rather than a call.
    pub fn is_literal(&self) -> bool {
        !matches!(self, Statement::Expression(_))
    }
}
