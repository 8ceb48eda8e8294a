use std::fmt;

use crate::token;
use crate::token::Token;

type Result<T> = std::result::Result<T, LexError>;

#[derive(Debug, PartialEq, Eq)]
pub enum LexError {
    MalformedIntegerLiteral(String),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LexError::MalformedIntegerLiteral(text) => {
                write!(f, "Malformed integer literal: '_{}_'", text)
            }
        }
    }
}

/// Capture mode toggled by the literal delimiters.
enum Capture {
    None,
    Str,
    Int,
}

pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &str) -> Lexer {
        Lexer { input }
    }

    /// Tokenizes the whole input. Lexing is best-effort: unterminated
    /// captures and a trailing unflushed word are dropped, not rejected.
    /// The only failure is a non-integer sequence between underscores.
    pub fn tokenize(self) -> Result<Vec<Token>> {
        let mut tokens = vec![];
        let mut buffer = String::new();
        let mut capture = Capture::None;

        for c in self.input.chars() {
            match capture {
                Capture::Str => {
                    if c == '"' {
                        tokens.push(Token::Str(std::mem::take(&mut buffer)));
                        capture = Capture::None;
                    } else {
                        buffer.push(c);
                    }
                }
                Capture::Int => match c {
                    '_' => {
                        let text = std::mem::take(&mut buffer);
                        let value = text
                            .parse()
                            .map_err(|_| LexError::MalformedIntegerLiteral(text))?;
                        tokens.push(Token::Int(value));
                        capture = Capture::None;
                    }
                    ' ' | '\t' | '\r' => {}
                    _ => buffer.push(c),
                },
                Capture::None => match c {
                    '"' => {
                        buffer.clear();
                        capture = Capture::Str;
                    }
                    '_' => {
                        buffer.clear();
                        capture = Capture::Int;
                    }
                    ':' => {
                        tokens.push(Token::Label(std::mem::take(&mut buffer)));
                    }
                    '\n' => {
                        if !buffer.is_empty() {
                            tokens.push(Token::Word(std::mem::take(&mut buffer)));
                        }
                    }
                    ' ' | '\t' | '\r' => {}
                    _ => {
                        buffer.push(c);

                        // Reserved words are recognised as soon as the
                        // buffer completes one, without waiting for a
                        // delimiter.
                        if let Some(keyword) = token::lookup_keyword(&buffer) {
                            tokens.push(Token::Keyword(keyword));
                            buffer.clear();
                        }
                    }
                },
            }
        }

        Ok(tokens)
    }
}
