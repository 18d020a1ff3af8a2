//! AST types for FCT fixture files.
//!
//! Produced by the parser and consumed by the renderer, the interchange
//! serializer, and the external funcon evaluator. They live here so that
//! those consumers can import them without depending on the parser.

/// A funcon term.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `name(a, b, c)` — parenthesized argument list, possibly empty
    Call { name: String, args: Vec<Expr> },
    /// `name x` — single argument without parentheses
    UnaryApply { name: String, arg: Box<Expr> },
    /// A lone funcon name with no arguments (a nullary funcon reference)
    Name(String),
    Literal(Value),
    /// `( expr )` — kept in the tree only for faithful re-printing;
    /// evaluators treat it identically to the inner expression
    Grouped(Box<Expr>),
}

/// A literal value form.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Ident(String),
    /// Integer literal. The original lexeme is kept so rendering
    /// reproduces the source spelling (e.g. leading zeros).
    Num { value: i64, lexeme: String },
    /// Ordered key/value pairs. Duplicate keys are legal; order is
    /// preserved for re-serialization and the last pair wins on lookup.
    Map(Vec<(String, Value)>),
    Tuple(Vec<Expr>),
}

impl Value {
    /// Integer value with its canonical lexeme.
    pub fn int(value: i64) -> Self {
        Value::Num {
            value,
            lexeme: value.to_string(),
        }
    }

    /// Last-wins lookup over a map's ordered pair list.
    /// Returns `None` for non-map values and missing keys.
    pub fn map_get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(pairs) => pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// A parsed fixture: one program term plus its behavior assertions.
/// Immutable once constructed; `assertions` is non-empty by construction
/// (the grammar requires at least one test clause).
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub program: Expr,
    pub assertions: Vec<Assertion>,
}

/// A typed expectation to be checked against the evaluator's outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Assertion {
    /// `result-term: null-value;`
    ///
    /// The grammar admits only the literal `null-value` here, never a
    /// general expression — an asymmetry with `standard-out` that awaits
    /// product-owner clarification. Kept literal-only on purpose.
    ExpectedResult,
    /// `standard-out: [ v, ... ];` — at least one expected line
    ExpectedStdout(Vec<Value>),
}
