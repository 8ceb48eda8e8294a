use std::fmt;
use std::io;
use std::io::Write;

use crate::ast::{Block, Program, Statement};

type EvalResult = std::result::Result<Signal, EvalError>;

/// Guard against runaway `call` chains. The notation has no cycle
/// detection, so a self-referential label would otherwise recurse until
/// the stack is exhausted.
pub const MAX_CALL_DEPTH: usize = 256;

/// Control signal returned up the evaluation call chain. `Halt` is the
/// effect of `end`: it unwinds every active call at once, and the driver
/// interprets it as "stop with a successful status".
#[derive(Debug, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Halt,
}

#[derive(Debug)]
pub enum EvalError {
    RecursionLimitExceeded(String),
    Output(io::Error),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::RecursionLimitExceeded(label) => write!(
                f,
                "Recursion limit exceeded ({} nested calls) calling '{}'",
                MAX_CALL_DEPTH, label
            ),
            EvalError::Output(err) => write!(f, "Failed writing output: {}", err),
        }
    }
}

impl From<io::Error> for EvalError {
    fn from(err: io::Error) -> Self {
        EvalError::Output(err)
    }
}

/// Walks the parsed program depth-first, writing the `dump` trace to the
/// sink. The program itself is never mutated; the only evaluator state is
/// the implicit position in the walk and the call depth.
pub struct Evaluator<'a, W> {
    program: &'a Program,
    out: W,
    depth: usize,
}

impl<'a, W: Write> Evaluator<'a, W> {
    pub fn new(program: &'a Program, out: W) -> Self {
        Evaluator {
            program,
            out,
            depth: 0,
        }
    }

    /// Executes from the first declared block. An empty program completes
    /// immediately.
    pub fn run(&mut self) -> EvalResult {
        let program = self.program;

        match program.entry() {
            Some(block) => self.run_block(block),
            None => Ok(Signal::Continue),
        }
    }

    fn run_block(&mut self, block: &Block) -> EvalResult {
        for statement in block {
            if let Signal::Halt = self.execute(statement)? {
                return Ok(Signal::Halt);
            }
        }

        Ok(Signal::Continue)
    }

    fn execute(&mut self, statement: &Statement) -> EvalResult {
        match statement {
            Statement::Dump(value) => {
                writeln!(self.out, "{}", value)?;
                Ok(Signal::Continue)
            }
            Statement::Call(label) => self.call(label),
            Statement::End => Ok(Signal::Halt),
            Statement::Block(block) => self.run_block(block),
        }
    }

    fn call(&mut self, label: &str) -> EvalResult {
        let program = self.program;

        let block = match program.lookup(label) {
            Some(block) => block,
            // An unresolved target falls through with no effect.
            None => return Ok(Signal::Continue),
        };

        if self.depth >= MAX_CALL_DEPTH {
            return Err(EvalError::RecursionLimitExceeded(label.to_owned()));
        }

        self.depth += 1;
        let result = self.run_block(block);
        self.depth -= 1;

        result
    }
}
