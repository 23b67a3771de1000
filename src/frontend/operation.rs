//! The operation table: every keyword of the language together with the
//! number of arguments it takes.
//!
//! The standard table is built at compile time with `phf` and never changes.
//! It is handed to the lexer through an `OperationTable` handle instead of
//! being looked up globally, so a different (static) table can be injected.

use phf::phf_map;
use std::fmt;

/// A keyword of the language.
#[derive(Debug, PartialEq, Eq)]
pub struct Operation {
    /// Exact spelling matched by the lexer.
    pub name: &'static str,
    /// Required operands (identifiers or literals).
    pub positional_arity: usize,
    /// Required boolean modifiers, following the operands.
    pub flag_arity: usize,
    /// Whether the keyword may govern a statement.
    pub statement_root: bool,
}

impl Operation {
    pub const fn new(
        name: &'static str,
        positional_arity: usize,
        flag_arity: usize,
        statement_root: bool,
    ) -> Self {
        Self {
            name,
            positional_arity,
            flag_arity,
            statement_root,
        }
    }

    /// A gate taking one operand and one modifier.
    const fn gate(name: &'static str) -> Self {
        Self::new(name, 1, 1, false)
    }

    /// Total number of argument tokens the operation consumes.
    pub fn arity(&self) -> usize {
        self.positional_arity + self.flag_arity
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

static OPERATIONS: phf::Map<&'static str, Operation> = phf_map! {
    "OUT" => Operation::new("OUT", 1, 0, true),
    "NOT" => Operation::new("NOT", 1, 0, false),
    "AND" => Operation::gate("AND"),
    "NAND" => Operation::gate("NAND"),
    "OR" => Operation::gate("OR"),
    "NOR" => Operation::gate("NOR"),
    "XOR" => Operation::gate("XOR"),
    "XNOR" => Operation::gate("XNOR"),
};

/// Read-only handle to a static keyword table.
#[derive(Clone, Copy)]
pub struct OperationTable {
    entries: &'static phf::Map<&'static str, Operation>,
}

impl OperationTable {
    pub fn new(entries: &'static phf::Map<&'static str, Operation>) -> Self {
        Self { entries }
    }

    /// The keywords of the circuit language.
    pub fn standard() -> Self {
        Self::new(&OPERATIONS)
    }

    /// Case-sensitive lookup by exact name.
    pub fn get(&self, name: &str) -> Option<&'static Operation> {
        let entries: &'static phf::Map<&'static str, Operation> = self.entries;
        entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Operation> {
        let entries: &'static phf::Map<&'static str, Operation> = self.entries;
        entries.values()
    }
}

impl Default for OperationTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for OperationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
