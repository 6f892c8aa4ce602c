//! Documentation content for the dscexpr CLI

use super::CliError;

/// Available documentation topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTopic {
    Statements,
    Functions,
    Strings,
    Accessors,
}

impl DocTopic {
    /// Parse topic name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "statements" | "statement" | "escaping" => Some(Self::Statements),
            "functions" | "function" | "calls" | "arguments" => Some(Self::Functions),
            "strings" | "string" | "quotes" => Some(Self::Strings),
            "accessors" | "accessor" | "members" | "indexing" => Some(Self::Accessors),
            _ => None,
        }
    }
}

/// Get the docs overview (topic listing)
pub fn get_docs_overview() -> &'static str {
    r#"DSC EXPRESSION DOCUMENTATION

Configuration string values are either plain text or a bracketed expression
that an evaluator resolves at run time.

DOCUMENTATION TOPICS

  statements        Plain strings, expressions, and the [[ escape
  functions         Function calls and argument kinds
  strings           Quoted strings and the doubled-quote escape
  accessors         Member access and indexing on call results

QUICK REFERENCE

  plain text                    String literal, used verbatim
  [[text]                       Escaped literal, value is "[text]"
  [name(args)]                  Expression
  'it''s'                       Quoted string holding it's
  .member   [0]   ['key']       Accessors

Run 'dscexpr docs <topic>' for detailed documentation.
"#
}

/// Get documentation for a specific topic
pub fn get_doc_topic(name: &str) -> Result<&'static str, CliError> {
    match DocTopic::from_name(name) {
        Some(DocTopic::Statements) => Ok(STATEMENTS_DOC),
        Some(DocTopic::Functions) => Ok(FUNCTIONS_DOC),
        Some(DocTopic::Strings) => Ok(STRINGS_DOC),
        Some(DocTopic::Accessors) => Ok(ACCESSORS_DOC),
        None => Err(CliError::UnknownTopic(name.to_string())),
    }
}

const STATEMENTS_DOC: &str = r#"STATEMENTS - How a String Value Is Classified

The first characters decide, in this order:

ESCAPED LITERAL
  [[text]
    Starts with two '['. The first '[' is dropped and the rest is kept as is,
    whatever it contains.

    Example:
      Value:  [[resourceId('not', 'evaluated')]
      Result: "[resourceId('not', 'evaluated')]"

EXPRESSION
  [expression]
    Starts with a single '['. Everything up to a final ']' must be one
    expression, and nothing may follow the ']'. A value that starts with '['
    but isn't a valid expression is an error; it never falls back to text.

    Example:
      Value:  [parameters('location')]

STRING LITERAL
  anything else
    Used verbatim, including leading and trailing whitespace. The empty
    string is a string literal.
"#;

const FUNCTIONS_DOC: &str = r#"FUNCTIONS - Calls and Arguments

FUNCTION NAMES
  name(...)   namespace.name(...)
    A letter followed by letters or digits, with at most one dotted suffix.
    Which names exist is up to the evaluator; the parser accepts any name of
    this shape.

ARGUMENTS
  Separated by commas, in call order. Each argument is one of:

    42, -1              integer
    'text'              quoted string
    true, false         boolean
    other('x')          nested call, without brackets

    Example:
      [concat(parameters('prefix'), '-', string(3))]

WHITESPACE
  Spaces and line breaks may appear between tokens inside the brackets.
"#;

const STRINGS_DOC: &str = r#"STRINGS - Quoted Strings

  'text'
    Single quotes only. A quote inside the text is written twice.

    Example:
      'it''s'           holds: it's
      ''''              holds: '
      ''                holds the empty string

    Strings may span lines. A string with no closing quote is an error.
"#;

const ACCESSORS_DOC: &str = r#"ACCESSORS - Reaching Into Call Results

MEMBER ACCESS
  call().member
    Member names use letters, digits, '_' and '-'.

    Example:
      [parameters('config').servers.primary]

INDEXING
  call()[0]   call()['key']   call()[other('x')]
    An index holds an integer, a quoted property name, or a nested call.

    Example:
      [variables('list')[variables('index')]]
      [parameters('tags')['cost-center']]

CHAINING
  Any number of member and index steps may follow a call, in any order.

    Example:
      [parameters('config').servers[0].name]
"#;
