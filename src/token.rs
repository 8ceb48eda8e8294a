/// Enum representing the token kinds the lexer produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// One of the reserved operation words.
    Keyword(Keyword),
    /// A word terminated by ':', naming a block.
    Label(String),
    /// A '"'-delimited string literal.
    Str(String),
    /// A '_'-delimited integer literal.
    Int(i64),
    /// A bare word closed by a line break, used as a generic argument.
    Word(String),
}

/// The three operations the language supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    Dump,
    Call,
    End,
}

impl Keyword {
    /// Returns the reserved word as it appears in source.
    pub fn name(&self) -> &str {
        match self {
            Keyword::Dump => "dump",
            Keyword::Call => "call",
            Keyword::End => "end",
        }
    }
}

pub fn lookup_keyword(word: &str) -> Option<Keyword> {
    match word {
        "dump" => Some(Keyword::Dump),
        "call" => Some(Keyword::Call),
        "end" => Some(Keyword::End),
        _ => None,
    }
}
