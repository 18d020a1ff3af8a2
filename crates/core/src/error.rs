use serde::{Deserialize, Serialize};
use std::fmt;

/// Which stage produced the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Lex,
    Parse,
}

/// A lexing or parsing error with 1-based source position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FctError {
    pub kind: ErrorKind,
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub message: String,
    /// Token kinds that would have been accepted at this position.
    /// Empty for lex errors.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub expected: Vec<String>,
}

impl FctError {
    pub fn lex(file: &str, line: u32, column: u32, message: impl Into<String>) -> Self {
        FctError {
            kind: ErrorKind::Lex,
            file: file.to_owned(),
            line,
            column,
            message: message.into(),
            expected: Vec::new(),
        }
    }

    pub fn parse(file: &str, line: u32, column: u32, message: impl Into<String>) -> Self {
        FctError {
            kind: ErrorKind::Parse,
            file: file.to_owned(),
            line,
            column,
            message: message.into(),
            expected: Vec::new(),
        }
    }

    /// Serialize to JSON with every field present, so tooling consumers
    /// see a fixed shape regardless of error kind.
    pub fn to_json_value(&self) -> serde_json::Value {
        let kind = match self.kind {
            ErrorKind::Lex => "lex",
            ErrorKind::Parse => "parse",
        };
        serde_json::json!({
            "kind":     kind,
            "file":     self.file,
            "line":     self.line,
            "column":   self.column,
            "message":  self.message,
            "expected": self.expected,
        })
    }
}

impl fmt::Display for FctError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.file, self.line, self.column, self.message
        )
    }
}

impl std::error::Error for FctError {}
