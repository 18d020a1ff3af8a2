use super::Parser;
use crate::ast::Assertion;
use crate::error::FctError;
use crate::lexer::Token;

impl<'a> Parser<'a> {
    /// Parse one clause of the `tests` block into a typed assertion.
    /// Dispatch is on the leading keyword.
    pub(super) fn parse_test_clause(&mut self) -> Result<Assertion, FctError> {
        match self.peek() {
            Token::ResultTerm => {
                self.advance();
                self.expect(&Token::Colon, "':'")?;
                self.expect(&Token::NullValue, "'null-value'")?;
                self.expect(&Token::Semi, "';'")?;
                Ok(Assertion::ExpectedResult)
            }
            Token::StandardOut => {
                self.advance();
                self.expect(&Token::Colon, "':'")?;
                self.expect(&Token::LBracket, "'['")?;
                // at least one value before the repetition
                let mut lines = vec![self.parse_value()?];
                while self.peek() == &Token::Comma {
                    self.advance();
                    lines.push(self.parse_value()?);
                }
                self.expect(&Token::RBracket, "']'")?;
                self.expect(&Token::Semi, "';'")?;
                Ok(Assertion::ExpectedStdout(lines))
            }
            _ => Err(self.err_expecting(&["'result-term'", "'standard-out'"])),
        }
    }
}
