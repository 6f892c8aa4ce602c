//! # DSC Expression Language - Abstract Syntax Tree
//!
//! Configuration string values may carry a live expression instead of plain
//! text. This module defines the tree the classifier hands to an evaluator.
//!
//! ## Architecture Overview
//!
//! - **[statements]** - The top-level classification of a whole string value
//! - **[expressions]** - Function calls and their arguments
//! - **[accessors]** - Member and index chains applied to a call result
//!
//! ## The Three Statement Forms
//!
//! ```text
//! [[literal text]                 escaped literal, value is "[literal text]"
//! [parameters('name').first]      expression
//! plain text                      string literal
//! ```
//!
//! A single leading `[` commits the value to expression syntax; there is no
//! fallback to plain text once it has been seen.
//!
//! ## Expressions
//!
//! An expression is always a call, optionally followed by accessors:
//!
//! ```text
//! concat('a', 'b')
//! parameters('config').servers[0]['host-name']
//! variables('list')[variables('index')]
//! ```
//!
//! Arguments are integers, booleans, single-quoted strings (`''` stands for
//! one `'`), or nested calls written without brackets.
//!
//! All nodes own their children and hold no parent links. Consumers walk the
//! tree top-down with exhaustive `match`es.
pub mod accessors;
pub mod expressions;
pub mod statements;

pub use accessors::{Accessor, AccessorStep, IndexValue};
pub use expressions::{Argument, ExpressionNode, FunctionCall};
pub use statements::Statement;
