//! fct-core: parsing core for FCT (Funcon-Component Test) fixture files.
//!
//! An `.fct` fixture pairs a program under test — a funcon term, i.e. an
//! expression in a component-based-semantics term language — with a set
//! of executable-behavior assertions (expected final result, expected
//! captured standard-output lines):
//!
//! ```text
//! general { funcon-term: add(1, 2); }
//! tests { result-term: null-value; standard-out: ["3"]; }
//! ```
//!
//! This crate tokenizes and parses that format into a typed [`Document`]
//! and normalizes the tests block into [`Assertion`] values. It does not
//! evaluate anything: running the funcon term and comparing its outcome
//! against the assertions belongs to an external evaluator, which
//! consumes the [`Document`] (or its [`serialize::to_json`] form).
//!
//! Parsing is a pure, terminating function of the source text: no shared
//! state, no caching, safe to call from concurrent threads. The first
//! structural failure aborts the parse with a positioned [`FctError`].
//!
//! # Public API
//!
//! - [`parse_fixture()`] — source text -> [`Document`]
//! - [`lexer::lex`] / [`parser::parse`] — the two stages individually
//! - [`render::render`] — canonical printer ([`parse_fixture`] is its
//!   structural inverse modulo formatting)
//! - [`serialize::to_json`] — evaluator-facing interchange form
//! - [`FctError`] — structured lex/parse error

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod serialize;

pub use ast::{Assertion, Document, Expr, Value};
pub use error::{ErrorKind, FctError};

/// Parse a complete `.fct` source text into a [`Document`].
///
/// `filename` feeds error provenance only; locating and reading fixture
/// files is the caller's job.
pub fn parse_fixture(src: &str, filename: &str) -> Result<Document, FctError> {
    let tokens = lexer::lex(src, filename)?;
    parser::parse(&tokens, filename)
}
