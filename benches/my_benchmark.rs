use criterion::{criterion_group, criterion_main, Criterion};
use rbasic::{
    ast::Program,
    evaluator::{Evaluator, Signal},
    lexer::Lexer,
    parser::Parser,
};
use std::io;

fn parse() -> Program {
    let mut source = String::new();

    for i in 0..50 {
        source.push_str(&format!(
            "step{}:\n    dump _{}_\n    call step{}\n",
            i,
            i,
            i + 1
        ));
    }
    source.push_str("step50:\n    dump \"done\"\n    end\n");

    let tokens = Lexer::new(&source).tokenize().expect("lexing failed");
    Parser::new(tokens).parse_program()
}

fn criterion_benchmark(c: &mut Criterion) {
    let program = parse();

    c.bench_function("call chain 50", |b| {
        b.iter(|| {
            let mut evaluator = Evaluator::new(&program, io::sink());

            match evaluator.run() {
                Ok(Signal::Halt) => {}
                Ok(signal) => println!("Unexpected result: {:?}", signal),
                Err(e) => println!("Unexpected error: {}", e),
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
