pub mod ast;
pub mod classifier;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;

pub use ast::{Accessor, AccessorStep, Argument, ExpressionNode, FunctionCall, IndexValue, Statement};
pub use classifier::{Classifier, classify};
pub use config::{DEFAULT_MAX_DEPTH, ParserConfig};
pub use error::{ParseError, ParseErrorKind};
pub use lexer::Lexer;
pub use output::{pretty_print, to_expression_string, to_json, to_json_pretty};
pub use parser::Parser;
