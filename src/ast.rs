use indexmap::IndexMap;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Word(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(v) => write!(f, "{}", v),
            Value::Word(w) => write!(f, "{}", w),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Statement {
    Dump(Value),
    Call(String),
    End,
    Block(Block),
}

/// Block is the ordered statement sequence belonging to one label.
pub type Block = Vec<Statement>;

/// The parsed program: blocks in declaration order, keyed by label name.
/// Insertion order gives deterministic iteration; the map gives O(1) jump
/// resolution for `call`.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Program {
    pub blocks: IndexMap<String, Block>,
}

impl Program {
    pub fn new() -> Self {
        Default::default()
    }

    /// The first declared block, where execution starts.
    pub fn entry(&self) -> Option<&Block> {
        self.blocks.values().next()
    }

    pub fn lookup(&self, label: &str) -> Option<&Block> {
        self.blocks.get(label)
    }
}
