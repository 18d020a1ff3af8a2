use super::Parser;
use crate::ast::{Expr, Value};
use crate::error::FctError;
use crate::lexer::Token;

/// Token-kind names reported when an expression was required but the
/// current token cannot start one.
const EXPR_START: &[&str] = &["identifier", "string", "number", "'{'", "'tuple('", "'('"];

/// Token-kind names reported when a value was required.
const VALUE_START: &[&str] = &["string", "identifier", "number", "'{'", "'tuple('"];

fn starts_expr(tok: &Token) -> bool {
    matches!(
        tok,
        Token::Ident(_)
            | Token::Str(_)
            | Token::Num(_)
            | Token::LBrace
            | Token::TupleOpen
            | Token::LParen
    )
}

impl<'a> Parser<'a> {
    // -- Expression parsing --------------------------------------
    //
    // The grammar admits several derivations for an identifier at
    // expression position; one token of lookahead past the identifier
    // settles it:
    //   ident '('   -> Call (parenthesized argument list)
    //   ident expr  -> UnaryApply (single argument, no parentheses)
    //   ident       -> Name (nullary funcon reference)

    pub(super) fn parse_expr(&mut self) -> Result<Expr, FctError> {
        match self.peek().clone() {
            Token::Ident(name) => match self.peek_ahead(1).clone() {
                Token::LParen => {
                    self.advance(); // name
                    self.advance(); // '('
                    let mut args = Vec::new();
                    if self.peek() != &Token::RParen {
                        args.push(self.parse_expr()?);
                        while self.peek() == &Token::Comma {
                            self.advance();
                            args.push(self.parse_expr()?);
                        }
                    }
                    self.expect(&Token::RParen, "')'")?;
                    Ok(Expr::Call { name, args })
                }
                ref t if starts_expr(t) => {
                    self.advance();
                    let arg = self.parse_expr()?;
                    Ok(Expr::UnaryApply {
                        name,
                        arg: Box::new(arg),
                    })
                }
                _ => {
                    self.advance();
                    Ok(Expr::Name(name))
                }
            },
            Token::Str(_) | Token::Num(_) | Token::LBrace | Token::TupleOpen => {
                Ok(Expr::Literal(self.parse_value()?))
            }
            Token::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&Token::RParen, "')'")?;
                Ok(Expr::Grouped(Box::new(inner)))
            }
            _ => Err(self.err_expecting(EXPR_START)),
        }
    }

    // -- Value parsing --------------------------------------------

    pub(super) fn parse_value(&mut self) -> Result<Value, FctError> {
        match self.peek().clone() {
            Token::Str(s) => {
                self.advance();
                Ok(Value::Str(s))
            }
            Token::Ident(w) => {
                self.advance();
                Ok(Value::Ident(w))
            }
            Token::Num(lexeme) => {
                let value: i64 = lexeme
                    .parse()
                    .map_err(|_| self.err(format!("integer literal out of range: {}", lexeme)))?;
                self.advance();
                Ok(Value::Num { value, lexeme })
            }
            Token::LBrace => self.parse_map(),
            Token::TupleOpen => self.parse_tuple(),
            _ => Err(self.err_expecting(VALUE_START)),
        }
    }

    /// `{ pair (, pair)* }` with zero pairs allowed; keys are strings.
    fn parse_map(&mut self) -> Result<Value, FctError> {
        self.advance(); // '{'
        let mut pairs = Vec::new();
        if self.peek() != &Token::RBrace {
            pairs.push(self.parse_pair()?);
            while self.peek() == &Token::Comma {
                self.advance();
                pairs.push(self.parse_pair()?);
            }
        }
        self.expect(&Token::RBrace, "'}'")?;
        Ok(Value::Map(pairs))
    }

    fn parse_pair(&mut self) -> Result<(String, Value), FctError> {
        let key = self.take_str()?;
        self.expect(&Token::MapsTo, "'|->'")?;
        let value = self.parse_value()?;
        Ok((key, value))
    }

    /// `tuple( expr (, expr)* )` with zero elements allowed.
    fn parse_tuple(&mut self) -> Result<Value, FctError> {
        self.advance(); // 'tuple('
        let mut items = Vec::new();
        if self.peek() != &Token::RParen {
            items.push(self.parse_expr()?);
            while self.peek() == &Token::Comma {
                self.advance();
                items.push(self.parse_expr()?);
            }
        }
        self.expect(&Token::RParen, "')'")?;
        Ok(Value::Tuple(items))
    }
}
