use serde::Serialize;

use crate::ast::{Accessor, AccessorStep, IndexValue};

/// One bracketed expression: a function call, optionally followed by accessors.
///
/// # Example
/// ```text
/// parameters('config').servers[0]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionNode {
    pub call: FunctionCall,

    /// `None` when the call isn't followed by `.member` or `[index]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessor: Option<Accessor>,
}

/// A function name with its positional arguments.
///
/// The name is purely syntactic; nothing here knows which functions exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionCall {
    /// `name` or `namespace.name`
    pub name: String,

    /// Arguments in call order, possibly empty
    pub args: Vec<Argument>,
}

/// A single function argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum Argument {
    /// Nested call, written without brackets
    ///
    /// # Example
    /// ```text
    /// concat(parameters('prefix'), 'suffix')
    /// ```
    Expr(ExpressionNode),

    /// Quoted string, already unescaped (`'it''s'` holds `it's`)
    Str(String),

    /// Integer literal
    Num(i64),

    /// `true` or `false`
    Bool(bool),
}

impl ExpressionNode {
    pub fn new(call: FunctionCall, accessor: Option<Accessor>) -> Self {
        ExpressionNode { call, accessor }
    }

    /// Every function name in the tree, in pre-order.
    ///
    /// The call comes first, then its arguments left to right, then any
    /// expressions used as index values.
    ///
    /// ```
    /// use dsc_expression::{classify, Statement};
    ///
    /// let Ok(Statement::Expression(node)) =
    ///     classify("[concat(parameters('a'), variables('b'))[first('c')]]")
    /// else {
    ///     panic!("not an expression");
    /// };
    /// assert_eq!(
    ///     node.function_names(),
    ///     vec!["concat", "parameters", "variables", "first"]
    /// );
    /// ```
    pub fn function_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_function_names(&mut names);
        names
    }

    fn collect_function_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        names.push(&self.call.name);
        for arg in &self.call.args {
            if let Argument::Expr(nested) = arg {
                nested.collect_function_names(names);
            }
        }
        for nested in self.index_expressions() {
            nested.collect_function_names(names);
        }
    }

    /// How deeply expressions nest; a call with no nested calls has depth 1.
    pub fn depth(&self) -> usize {
        let args = self.call.args.iter().filter_map(|arg| match arg {
            Argument::Expr(nested) => Some(nested),
            _ => None,
        });
        let deepest = args
            .chain(self.index_expressions())
            .map(ExpressionNode::depth)
            .max()
            .unwrap_or(0);
        deepest + 1
    }

    fn index_expressions(&self) -> impl Iterator<Item = &ExpressionNode> {
        self.accessor
            .iter()
            .flat_map(Accessor::iter)
            .filter_map(|step| match step {
                AccessorStep::Index(IndexValue::Expr(nested)) => Some(nested),
                _ => None,
            })
    }
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, args: Vec<Argument>) -> Self {
        FunctionCall {
            name: name.into(),
            args,
        }
    }
}
