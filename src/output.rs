//! Canonical text and JSON output for parsed statements.
//!
//! The canonical expression form is what [`classify`](crate::classify) reads
//! back into an equal tree:
//!
//! - arguments separated by `", "`
//! - strings in single quotes with embedded `'` doubled
//! - members as `.name`, indices as `[value]`
//! - no other whitespace
//!
//! # Examples
//!
//! ```
//! use dsc_expression::{classify, Statement};
//! use dsc_expression::output::pretty_print;
//!
//! let Statement::Expression(node) = classify("[ concat( 'it''s',1 ).x ]").unwrap() else {
//!     panic!("expected an expression");
//! };
//! assert_eq!(pretty_print(&node), "[concat('it''s', 1).x]");
//! ```

use std::fmt::{self, Display, Formatter, Write};

use crate::ast::{Accessor, AccessorStep, Argument, ExpressionNode, FunctionCall, IndexValue, Statement};

/// Writes `value` as a single-quoted string, doubling embedded quotes.
fn write_quoted(f: &mut impl Write, value: &str) -> fmt::Result {
    f.write_char('\'')?;
    for ch in value.chars() {
        if ch == '\'' {
            f.write_str("''")?;
        } else {
            f.write_char(ch)?;
        }
    }
    f.write_char('\'')
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            // the text still starts with the second `[` of the escape marker
            Statement::EscapedLiteral(text) => write!(f, "[{}", text),
            Statement::Expression(node) => write!(f, "[{}]", node),
            Statement::StringLiteral(text) => f.write_str(text),
        }
    }
}

impl Display for ExpressionNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.call)?;
        if let Some(accessor) = &self.accessor {
            write!(f, "{}", accessor)?;
        }
        Ok(())
    }
}

impl Display for FunctionCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_char(')')
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Expr(node) => write!(f, "{}", node),
            Argument::Str(value) => write_quoted(f, value),
            Argument::Num(n) => write!(f, "{}", n),
            Argument::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Display for Accessor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for step in self {
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl Display for AccessorStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AccessorStep::Member(name) => write!(f, ".{}", name),
            AccessorStep::Index(value) => write!(f, "[{}]", value),
        }
    }
}

impl Display for IndexValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IndexValue::Expr(node) => write!(f, "{}", node),
            IndexValue::Num(n) => write!(f, "{}", n),
            IndexValue::PropertyName(name) => write_quoted(f, name),
        }
    }
}

// Convenience functions

/// Canonical unbracketed form, e.g. `parameters('a').b`.
pub fn to_expression_string(node: &ExpressionNode) -> String {
    node.to_string()
}

/// Canonical bracketed form, e.g. `[parameters('a').b]`.
///
/// Classifying the result yields a tree equal to `node`.
pub fn pretty_print(node: &ExpressionNode) -> String {
    format!("[{}]", node)
}

/// Compact JSON rendering of a statement tree.
///
/// ```
/// use dsc_expression::classify;
/// use dsc_expression::output::to_json;
///
/// let statement = classify("[foo(1)]").unwrap();
/// assert_eq!(
///     to_json(&statement).unwrap(),
///     r#"{"type":"expression","value":{"call":{"name":"foo","args":[{"type":"num","value":1}]}}}"#
/// );
/// ```
pub fn to_json(statement: &Statement) -> Result<String, serde_json::Error> {
    serde_json::to_string(statement)
}

/// Pretty JSON rendering of a statement tree, 2-space indented.
pub fn to_json_pretty(statement: &Statement) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(statement)
}
