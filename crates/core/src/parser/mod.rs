//! Recursive-descent parser for FCT fixture files.
//!
//! Consumes the token stream produced by [`crate::lexer::lex`] in a single
//! forward pass with one token of lookahead (two at the Call/UnaryApply
//! decision point). The first structural failure aborts the parse; there
//! is no recovery and no partial AST.

use crate::ast::Document;
use crate::error::FctError;
use crate::lexer::{Spanned, Token};

mod assertions;
mod expressions;

struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    filename: String,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Spanned], filename: &str) -> Self {
        Parser {
            tokens,
            pos: 0,
            filename: filename.to_owned(),
        }
    }

    fn cur(&self) -> &Spanned {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek(&self) -> &Token {
        &self.cur().token
    }

    /// Token `n` positions ahead; saturates at `Eof`.
    fn peek_ahead(&self, n: usize) -> &Token {
        let idx = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[idx].token
    }

    fn advance(&mut self) -> &Spanned {
        let t = &self.tokens[self.pos.min(self.tokens.len() - 1)];
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        t
    }

    fn err(&self, msg: impl Into<String>) -> FctError {
        let s = self.cur();
        FctError::parse(&self.filename, s.line, s.column, msg)
    }

    /// Error carrying the set of token kinds that were acceptable here.
    fn err_expecting(&self, expected: &[&str]) -> FctError {
        let wanted = match expected {
            [one] => (*one).to_owned(),
            [init @ .., last] => format!("{} or {}", init.join(", "), last),
            [] => unreachable!("empty expectation set"),
        };
        let mut e = self.err(format!("expected {}, got {}", wanted, self.peek().describe()));
        e.expected = expected.iter().map(|s| (*s).to_owned()).collect();
        e
    }

    fn expect(&mut self, want: &Token, desc: &str) -> Result<(), FctError> {
        if self.peek() == want {
            self.advance();
            Ok(())
        } else {
            Err(self.err_expecting(&[desc]))
        }
    }

    fn take_str(&mut self) -> Result<String, FctError> {
        if let Token::Str(s) = self.peek().clone() {
            self.advance();
            Ok(s)
        } else {
            Err(self.err_expecting(&["string"]))
        }
    }

    // -- Document parsing ----------------------------------------

    /// `general { funcon-term: <expr>; } tests { <clause>+ }` then EOF.
    fn parse_document(&mut self) -> Result<Document, FctError> {
        self.expect(&Token::General, "'general'")?;
        self.expect(&Token::LBrace, "'{'")?;
        self.expect(&Token::FunconTerm, "'funcon-term'")?;
        self.expect(&Token::Colon, "':'")?;
        let program = self.parse_expr()?;
        self.expect(&Token::Semi, "';'")?;
        self.expect(&Token::RBrace, "'}'")?;

        self.expect(&Token::Tests, "'tests'")?;
        self.expect(&Token::LBrace, "'{'")?;
        let mut assertions = Vec::new();
        loop {
            // An immediate '}' means zero clauses, which the grammar
            // forbids; the clause parser reports the expected keywords.
            assertions.push(self.parse_test_clause()?);
            if self.peek() == &Token::RBrace {
                break;
            }
        }
        self.advance(); // '}'

        // The document ends with the tests block; trailing content is an error.
        self.expect(&Token::Eof, "end of input")?;

        Ok(Document {
            program,
            assertions,
        })
    }
}

/// Parse a lexed token stream into a [`Document`].
pub fn parse(tokens: &[Spanned], filename: &str) -> Result<Document, FctError> {
    let mut p = Parser::new(tokens, filename);
    p.parse_document()
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Assertion, Expr, Value};
    use crate::lexer;

    fn parse_src(src: &str) -> Result<Document, FctError> {
        let tokens = lexer::lex(src, "test.fct")?;
        parse(&tokens, "test.fct")
    }

    fn parse_expr_src(src: &str) -> Expr {
        let doc = parse_src(&format!(
            "general {{ funcon-term: {}; }} tests {{ result-term: null-value; }}",
            src
        ))
        .expect("parse should succeed");
        doc.program
    }

    #[test]
    fn end_to_end_example() {
        let doc = parse_src(
            "general { funcon-term: add(1, 2); }\n\
             tests { result-term: null-value; standard-out: [\"3\"]; }\n",
        )
        .expect("parse should succeed");
        assert_eq!(
            doc.program,
            Expr::Call {
                name: "add".to_owned(),
                args: vec![
                    Expr::Literal(Value::int(1)),
                    Expr::Literal(Value::int(2)),
                ],
            }
        );
        assert_eq!(
            doc.assertions,
            vec![
                Assertion::ExpectedResult,
                Assertion::ExpectedStdout(vec![Value::Str("3".to_owned())]),
            ]
        );
    }

    #[test]
    fn call_and_unary_apply_are_distinct() {
        assert_eq!(
            parse_expr_src("f(a, b, c)"),
            Expr::Call {
                name: "f".to_owned(),
                args: vec![
                    Expr::Name("a".to_owned()),
                    Expr::Name("b".to_owned()),
                    Expr::Name("c".to_owned()),
                ],
            }
        );
        assert_eq!(
            parse_expr_src("f a"),
            Expr::UnaryApply {
                name: "f".to_owned(),
                arg: Box::new(Expr::Name("a".to_owned())),
            }
        );
    }

    #[test]
    fn name_followed_by_parens_is_always_a_call() {
        // Whitespace between the name and '(' makes no difference at the
        // token level: this is a one-argument call, not `f (1)` as a
        // unary application of a grouped expression.
        assert_eq!(
            parse_expr_src("f (1)"),
            Expr::Call {
                name: "f".to_owned(),
                args: vec![Expr::Literal(Value::int(1))],
            }
        );
    }

    #[test]
    fn zero_argument_call() {
        assert_eq!(
            parse_expr_src("f()"),
            Expr::Call {
                name: "f".to_owned(),
                args: vec![],
            }
        );
    }

    #[test]
    fn unary_apply_chains_right() {
        assert_eq!(
            parse_expr_src("f g h"),
            Expr::UnaryApply {
                name: "f".to_owned(),
                arg: Box::new(Expr::UnaryApply {
                    name: "g".to_owned(),
                    arg: Box::new(Expr::Name("h".to_owned())),
                }),
            }
        );
    }

    #[test]
    fn lone_identifier_is_a_name() {
        assert_eq!(parse_expr_src("stuck"), Expr::Name("stuck".to_owned()));
    }

    #[test]
    fn grouped_expression_is_preserved() {
        assert_eq!(
            parse_expr_src("(f a)"),
            Expr::Grouped(Box::new(Expr::UnaryApply {
                name: "f".to_owned(),
                arg: Box::new(Expr::Name("a".to_owned())),
            }))
        );
    }

    #[test]
    fn empty_map_and_empty_tuple() {
        assert_eq!(parse_expr_src("{}"), Expr::Literal(Value::Map(vec![])));
        assert_eq!(
            parse_expr_src("tuple()"),
            Expr::Literal(Value::Tuple(vec![]))
        );
    }

    #[test]
    fn map_pairs_preserve_order_and_duplicates() {
        let expr = parse_expr_src("{\"k\" |-> 1, \"k\" |-> 2}");
        let Expr::Literal(map) = &expr else {
            panic!("expected literal, got {:?}", expr);
        };
        assert_eq!(
            *map,
            Value::Map(vec![
                ("k".to_owned(), Value::int(1)),
                ("k".to_owned(), Value::int(2)),
            ])
        );
        // last-listed pair wins on lookup
        assert_eq!(map.map_get("k"), Some(&Value::int(2)));
        assert_eq!(map.map_get("missing"), None);
    }

    #[test]
    fn tuple_of_numbers() {
        assert_eq!(
            parse_expr_src("tuple(1,2,3)"),
            Expr::Literal(Value::Tuple(vec![
                Expr::Literal(Value::int(1)),
                Expr::Literal(Value::int(2)),
                Expr::Literal(Value::int(3)),
            ]))
        );
    }

    #[test]
    fn nested_values_in_maps() {
        assert_eq!(
            parse_expr_src("{\"outer\" |-> {\"inner\" |-> \"v\"}}"),
            Expr::Literal(Value::Map(vec![(
                "outer".to_owned(),
                Value::Map(vec![("inner".to_owned(), Value::Str("v".to_owned()))]),
            )]))
        );
    }

    #[test]
    fn map_value_identifier_stays_a_value() {
        assert_eq!(
            parse_expr_src("{\"k\" |-> id}"),
            Expr::Literal(Value::Map(vec![(
                "k".to_owned(),
                Value::Ident("id".to_owned()),
            )]))
        );
    }

    #[test]
    fn number_lexeme_is_preserved() {
        assert_eq!(
            parse_expr_src("007"),
            Expr::Literal(Value::Num {
                value: 7,
                lexeme: "007".to_owned(),
            })
        );
    }

    #[test]
    fn oversized_integer_is_rejected() {
        let err = parse_src(
            "general { funcon-term: 99999999999999999999; } tests { result-term: null-value; }",
        )
        .expect_err("should fail");
        assert!(err.message.contains("out of range"), "{}", err.message);
    }

    #[test]
    fn missing_expression_reports_expected_starters() {
        let err = parse_src("general { funcon-term: ; } tests { result-term: null-value; }")
            .expect_err("should fail");
        // positioned at the ';'
        assert_eq!((err.line, err.column), (1, 24));
        assert_eq!(
            err.expected,
            vec!["identifier", "string", "number", "'{'", "'tuple('", "'('"]
        );
    }

    #[test]
    fn empty_tests_block_is_an_error() {
        let err =
            parse_src("general { funcon-term: f; }\ntests {}").expect_err("should fail");
        // positioned at the '}'
        assert_eq!((err.line, err.column), (2, 8));
        assert_eq!(err.expected, vec!["'result-term'", "'standard-out'"]);
    }

    #[test]
    fn empty_standard_out_list_is_an_error() {
        let err = parse_src(
            "general { funcon-term: f; } tests { standard-out: [ ] ; }",
        )
        .expect_err("should fail");
        assert!(err.expected.contains(&"string".to_owned()), "{:?}", err.expected);
    }

    #[test]
    fn trailing_content_after_tests_block_is_an_error() {
        let err = parse_src(
            "general { funcon-term: f; } tests { result-term: null-value; } extra",
        )
        .expect_err("should fail");
        assert_eq!(err.expected, vec!["end of input"]);
    }

    #[test]
    fn result_term_requires_the_null_value_literal() {
        let err = parse_src(
            "general { funcon-term: f; } tests { result-term: f(1); }",
        )
        .expect_err("should fail");
        assert_eq!(err.expected, vec!["'null-value'"]);
    }

    #[test]
    fn premature_end_of_input() {
        let err = parse_src("general { funcon-term: f(1,").expect_err("should fail");
        assert!(err.message.contains("end of input"), "{}", err.message);
    }

    #[test]
    fn multiline_standard_out_values() {
        let doc = parse_src(
            "general {\n  funcon-term: print(\"a\", \"b\");\n}\n\
             tests {\n  standard-out: [\"a\", \"b\"];\n}\n",
        )
        .expect("parse should succeed");
        assert_eq!(
            doc.assertions,
            vec![Assertion::ExpectedStdout(vec![
                Value::Str("a".to_owned()),
                Value::Str("b".to_owned()),
            ])]
        );
    }
}
