use crate::ast::{Program, Statement, Value};
use crate::token::{Keyword, Token};

/// Groups the token sequence into a label-addressed statement tree.
///
/// Parsing never fails: tokens arriving before the first label and pairs
/// with no typed meaning are dropped, matching the permissive notation.
pub struct Parser {
    tokens: Vec<Token>,
    current: Option<String>,
    pending: Option<Token>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            current: None,
            pending: None,
        }
    }

    pub fn parse_program(mut self) -> Program {
        let mut program = Program::new();
        let tokens = std::mem::take(&mut self.tokens);

        for token in tokens {
            match token {
                Token::Label(name) => {
                    // A re-declared label re-opens its block, so statements
                    // merge by name rather than forming a second unreachable
                    // block.
                    program.blocks.entry(name.clone()).or_default();
                    self.current = Some(name);
                }
                Token::Keyword(Keyword::End) => {
                    // `end` takes no argument and bypasses the pairing
                    // protocol.
                    self.append(&mut program, Statement::End);
                }
                token => match self.pending.take() {
                    None => self.pending = Some(token),
                    Some(first) => {
                        if let Some(statement) = pair_statement(first, token) {
                            self.append(&mut program, statement);
                        }
                    }
                },
            }
        }

        program
    }

    fn append(&self, program: &mut Program, statement: Statement) {
        if let Some(label) = &self.current {
            if let Some(block) = program.blocks.get_mut(label) {
                block.push(statement);
            }
        }
    }
}

/// Combines an operation token with its argument token. Pairs whose first
/// token is not `dump` or `call` have no statement form and yield `None`.
fn pair_statement(first: Token, second: Token) -> Option<Statement> {
    match first {
        Token::Keyword(Keyword::Dump) => Some(Statement::Dump(token_value(second))),
        Token::Keyword(Keyword::Call) => Some(Statement::Call(token_text(second))),
        _ => None,
    }
}

fn token_value(token: Token) -> Value {
    match token {
        Token::Str(s) => Value::Str(s),
        Token::Int(v) => Value::Int(v),
        Token::Word(w) => Value::Word(w),
        Token::Label(name) => Value::Word(name),
        Token::Keyword(keyword) => Value::Word(keyword.name().to_owned()),
    }
}

fn token_text(token: Token) -> String {
    match token_value(token) {
        Value::Str(s) => s,
        Value::Int(v) => v.to_string(),
        Value::Word(w) => w,
    }
}

#[cfg(test)]
mod test {
    use crate::ast::{Statement, Value};
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn parse(input: &str) -> crate::ast::Program {
        let tokens = Lexer::new(input).tokenize().expect("lexing failed");
        Parser::new(tokens).parse_program()
    }

    #[test]
    fn dump_and_end_statements() {
        let program = parse("start:\n    dump \"hi\"\n    dump _42_\n    end\n");

        assert_eq!(1, program.blocks.len());
        assert_eq!(
            program.blocks["start"],
            vec![
                Statement::Dump(Value::Str("hi".to_owned())),
                Statement::Dump(Value::Int(42)),
                Statement::End,
            ]
        );
    }

    #[test]
    fn call_statement_takes_a_bare_word_target() {
        let program = parse("a:\n    call b\nb:\n    end\n");

        assert_eq!(
            program.blocks["a"],
            vec![Statement::Call("b".to_owned())]
        );
        assert_eq!(program.blocks["b"], vec![Statement::End]);
    }

    #[test]
    fn blocks_keep_declaration_order() {
        let program = parse("one:\n    end\ntwo:\n    end\nthree:\n    end\n");

        let labels: Vec<&String> = program.blocks.keys().collect();
        assert_eq!(labels, vec!["one", "two", "three"]);
    }

    #[test]
    fn redeclared_label_merges_by_name() {
        let program = parse("a:\n    dump _1_\nb:\n    end\na:\n    dump _2_\n");

        assert_eq!(2, program.blocks.len());
        assert_eq!(
            program.blocks["a"],
            vec![
                Statement::Dump(Value::Int(1)),
                Statement::Dump(Value::Int(2)),
            ]
        );
    }

    #[test]
    fn statements_before_any_label_are_dropped() {
        let program = parse("dump \"orphan\"\na:\n    end\n");

        assert_eq!(1, program.blocks.len());
        assert_eq!(program.blocks["a"], vec![Statement::End]);
    }

    #[test]
    fn trailing_unpaired_operation_is_dropped() {
        let program = parse("a:\n    dump\n");

        assert!(program.blocks["a"].is_empty());
    }

    #[test]
    fn literal_pairs_without_an_operation_are_dropped() {
        let program = parse("a:\n    _1_ _2_\n    end\n");

        assert_eq!(program.blocks["a"], vec![Statement::End]);
    }
}
