use crate::error::FctError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Keywords
    General,
    Tests,
    FunconTerm,
    ResultTerm,
    NullValue,
    StandardOut,
    // Punctuation
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Colon,
    Semi,
    Comma,
    /// `|->`
    MapsTo,
    /// `tuple(` — the opening paren is part of the token; `tuple` with
    /// whitespace before `(` is an ordinary identifier
    TupleOpen,
    /// Quoted string literal. No escape processing: every character
    /// between the quotes, newlines included, is taken verbatim.
    Str(String),
    /// `[A-Za-z_][A-Za-z0-9_]*`
    Ident(String),
    /// Decimal integer literal, lexeme preserved verbatim
    Num(String),
    // End of input
    Eof,
}

impl Token {
    /// Human-readable token-kind name for error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::General => "'general'".to_owned(),
            Token::Tests => "'tests'".to_owned(),
            Token::FunconTerm => "'funcon-term'".to_owned(),
            Token::ResultTerm => "'result-term'".to_owned(),
            Token::NullValue => "'null-value'".to_owned(),
            Token::StandardOut => "'standard-out'".to_owned(),
            Token::LBrace => "'{'".to_owned(),
            Token::RBrace => "'}'".to_owned(),
            Token::LParen => "'('".to_owned(),
            Token::RParen => "')'".to_owned(),
            Token::LBracket => "'['".to_owned(),
            Token::RBracket => "']'".to_owned(),
            Token::Colon => "':'".to_owned(),
            Token::Semi => "';'".to_owned(),
            Token::Comma => "','".to_owned(),
            Token::MapsTo => "'|->'".to_owned(),
            Token::TupleOpen => "'tuple('".to_owned(),
            Token::Str(_) => "string".to_owned(),
            Token::Ident(w) => format!("identifier '{}'", w),
            Token::Num(n) => format!("number '{}'", n),
            Token::Eof => "end of input".to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Spanned {
    pub token: Token,
    pub line: u32,
    pub column: u32,
}

/// Hyphenated keywords and `|->` are matched by prefix before identifier
/// scanning. An identifier cannot contain `-`, so the longer literal
/// always wins — `null-valuex` lexes as `null-value` then `x`.
const COMPOUND: &[(&str, Token)] = &[
    ("|->", Token::MapsTo),
    ("funcon-term", Token::FunconTerm),
    ("result-term", Token::ResultTerm),
    ("null-value", Token::NullValue),
    ("standard-out", Token::StandardOut),
];

fn starts_with(chars: &[char], lit: &str) -> bool {
    lit.chars().enumerate().all(|(i, lc)| chars.get(i) == Some(&lc))
}

pub fn lex(src: &str, filename: &str) -> Result<Vec<Spanned>, FctError> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = src.chars().collect();
    let mut pos = 0usize;
    let mut line: u32 = 1;
    let mut column: u32 = 1;

    while pos < chars.len() {
        let c = chars[pos];

        // Whitespace
        if c == ' ' || c == '\t' || c == '\r' || c == '\n' {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
            pos += 1;
            continue;
        }

        let tok_line = line;
        let tok_col = column;

        // String literal: everything up to the next '"' is taken
        // literally; there is no escape mechanism.
        if c == '"' {
            pos += 1;
            column += 1;
            let mut s = String::new();
            loop {
                if pos >= chars.len() {
                    return Err(FctError::lex(
                        filename,
                        tok_line,
                        tok_col,
                        "unterminated string literal",
                    ));
                }
                let sc = chars[pos];
                pos += 1;
                if sc == '"' {
                    column += 1;
                    break;
                }
                if sc == '\n' {
                    line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
                s.push(sc);
            }
            tokens.push(Spanned {
                token: Token::Str(s),
                line: tok_line,
                column: tok_col,
            });
            continue;
        }

        // Number: one or more decimal digits, no sign, no fraction
        if c.is_ascii_digit() {
            let start = pos;
            while pos < chars.len() && chars[pos].is_ascii_digit() {
                pos += 1;
            }
            let lexeme: String = chars[start..pos].iter().collect();
            column += (pos - start) as u32;
            tokens.push(Spanned {
                token: Token::Num(lexeme),
                line: tok_line,
                column: tok_col,
            });
            continue;
        }

        // Compound literals before single punctuation and identifiers
        if let Some((lit, token)) = COMPOUND
            .iter()
            .find(|(lit, _)| starts_with(&chars[pos..], lit))
        {
            pos += lit.chars().count();
            column += lit.chars().count() as u32;
            tokens.push(Spanned {
                token: token.clone(),
                line: tok_line,
                column: tok_col,
            });
            continue;
        }

        // Single-character punctuation
        let punct = match c {
            '{' => Some(Token::LBrace),
            '}' => Some(Token::RBrace),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            '[' => Some(Token::LBracket),
            ']' => Some(Token::RBracket),
            ':' => Some(Token::Colon),
            ';' => Some(Token::Semi),
            ',' => Some(Token::Comma),
            _ => None,
        };
        if let Some(token) = punct {
            pos += 1;
            column += 1;
            tokens.push(Spanned {
                token,
                line: tok_line,
                column: tok_col,
            });
            continue;
        }

        // Identifier / word keyword
        if c.is_ascii_alphabetic() || c == '_' {
            let start = pos;
            while pos < chars.len()
                && (chars[pos].is_ascii_alphanumeric() || chars[pos] == '_')
            {
                pos += 1;
            }
            let word: String = chars[start..pos].iter().collect();
            column += (pos - start) as u32;
            let token = match word.as_str() {
                "general" => Token::General,
                "tests" => Token::Tests,
                // 'tuple(' is a single token only with the paren adjacent
                "tuple" if chars.get(pos) == Some(&'(') => {
                    pos += 1;
                    column += 1;
                    Token::TupleOpen
                }
                _ => Token::Ident(word),
            };
            tokens.push(Spanned {
                token,
                line: tok_line,
                column: tok_col,
            });
            continue;
        }

        return Err(FctError::lex(
            filename,
            tok_line,
            tok_col,
            format!("unexpected character '{}'", c),
        ));
    }

    tokens.push(Spanned {
        token: Token::Eof,
        line,
        column,
    });
    Ok(tokens)
}
