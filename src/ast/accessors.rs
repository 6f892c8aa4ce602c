use serde::Serialize;

use crate::ast::ExpressionNode;

/// A non-empty chain of member and index steps applied to a call's result.
///
/// # Example
/// ```text
/// .properties.servers[0]['host-name']
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Accessor {
    steps: Vec<AccessorStep>,
}

/// One `.member` or `[index]` step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum AccessorStep {
    /// `.name`, where name is `[A-Za-z0-9_-]+`
    Member(String),

    /// `[value]`
    Index(IndexValue),
}

/// What may appear between the brackets of an index step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum IndexValue {
    /// `[variables('idx')]`
    Expr(ExpressionNode),

    /// `[0]`, `[-1]`
    Num(i64),

    /// `['key']`, unescaped
    PropertyName(String),
}

impl Accessor {
    /// Returns `None` for an empty chain; absence is spelled `Option::None`.
    pub fn new(steps: Vec<AccessorStep>) -> Option<Self> {
        if steps.is_empty() {
            None
        } else {
            Some(Accessor { steps })
        }
    }

    pub fn steps(&self) -> &[AccessorStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AccessorStep> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Accessor {
    type Item = &'a AccessorStep;
    type IntoIter = std::slice::Iter<'a, AccessorStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
