use std::env;
use std::fs;
use std::io;
use std::io::Read;
use std::process;

use rbasic::evaluator::Evaluator;
use rbasic::lexer::Lexer;
use rbasic::parser::Parser;

fn main() {
    let source = match read_source() {
        Ok(source) => source,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            process::exit(1);
        }
    };

    let tokens = match Lexer::new(&source).tokenize() {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            process::exit(1);
        }
    };

    let program = Parser::new(tokens).parse_program();

    let stdout = io::stdout();
    let mut evaluator = Evaluator::new(&program, stdout.lock());

    // `end` and running off the last statement both exit successfully.
    if let Err(err) = evaluator.run() {
        eprintln!("ERROR: {}", err);
        process::exit(1);
    }
}

/// Reads the script from the path argument, or from stdin when none is
/// given.
fn read_source() -> io::Result<String> {
    match env::args().nth(1) {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
