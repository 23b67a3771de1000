//! Turns the token sequence into a `Program`.
//!
//! Every statement is parsed on its own in two steps. First its root is located:
//! the single `:` or root keyword (currently only `OUT`) in the statement. Then the
//! node is built around the root, taking the argument counts from the keyword's
//! table entry.

use log::{debug, trace};

use super::{
    ast::{AstNode, Program, RootKind},
    operation::Operation,
    segmenter::{segment, split, Statement},
    token::{Token, Type},
};
use crate::{
    config::{ErrorPolicy, ParseOptions},
    error::{ClcError, SyntaxError},
};

/// The `Parser` struct is responsible for parsing a vector of tokens to the AST.
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    options: ParseOptions,
}

/// The validated root of a statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root<'a> {
    pub token: Token<'a>,
    pub kind: RootKind,
    /// 0-based position of the root in its statement.
    pub index: usize,
}

type ParserResult<'a> = Result<AstNode<'a>, SyntaxError>;

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    pub fn with_options(tokens: Vec<Token<'a>>, options: ParseOptions) -> Self {
        Self { tokens, options }
    }

    /// Parse the tokens into a program, one node per statement.
    pub fn parse(&self) -> Result<Program<'a>, ClcError> {
        let program = match self.options.error_policy {
            ErrorPolicy::AbortOnFirst => self.parse_all()?,
            ErrorPolicy::CollectAll => self.parse_collecting()?,
        };
        debug!("parsed {} statements", program.len());
        Ok(program)
    }

    /// Stops at the first error.
    fn parse_all(&self) -> Result<Program<'a>, SyntaxError> {
        let statements = segment(&self.tokens, self.options.segment_mode)?;
        let nodes = statements
            .iter()
            .map(parse_statement)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Program::new(nodes))
    }

    /// Parses every statement and reports all errors together.
    fn parse_collecting(&self) -> Result<Program<'a>, ClcError> {
        let segments = split(&self.tokens);
        let mut nodes = Vec::with_capacity(segments.statements.len());
        let mut errors = Vec::new();
        for statement in &segments.statements {
            match parse_statement(statement) {
                Ok(node) => nodes.push(node),
                Err(err) => errors.push(err),
            }
        }
        if let Err(err) = segments.check(self.options.segment_mode) {
            errors.push(err);
        }
        match errors.len() {
            0 => Ok(Program::new(nodes)),
            1 => Err(errors.remove(0).into()),
            _ => Err(ClcError::Multiple(errors)),
        }
    }
}

/// Parse a single statement.
pub fn parse_statement<'a>(statement: &Statement<'_, 'a>) -> ParserResult<'a> {
    let root = validate_root(statement)?;
    trace!("statement {} has root {}", statement.ordinal, root.token);
    build_node(statement, root)
}

/// Find the single root of a statement.
pub fn validate_root<'a>(statement: &Statement<'_, 'a>) -> Result<Root<'a>, SyntaxError> {
    let mut root: Option<Root<'a>> = None;
    for (index, token) in statement.tokens.iter().enumerate() {
        let kind = match token.root_kind() {
            Some(kind) => kind,
            None => continue,
        };
        if root.is_some() {
            return Err(SyntaxError::MultipleRoots {
                statement: statement.ordinal,
                index: index + 1,
            });
        }
        root = Some(Root {
            token: *token,
            kind,
            index,
        });
    }
    root.ok_or(SyntaxError::NoRoot {
        statement: statement.ordinal,
    })
}

/// Build the node of a statement around its validated root.
pub fn build_node<'a>(statement: &Statement<'_, 'a>, root: Root<'a>) -> ParserResult<'a> {
    match root.kind {
        RootKind::VariableDefinition => build_definition(statement, root),
        RootKind::Operation(op) => build_operation(statement, root, op),
    }
}

/// `<name> : <value>`
fn build_definition<'a>(statement: &Statement<'_, 'a>, root: Root<'a>) -> ParserResult<'a> {
    let missing_name = SyntaxError::ExpectedNameBeforeDefinition {
        statement: statement.ordinal,
        index: root.index + 1,
    };
    let name = match root.index.checked_sub(1).map(|idx| statement.tokens[idx]) {
        Some(token) if matches!(token.typ, Type::Identifier(_)) => token,
        _ => return Err(missing_name),
    };
    if root.index > 1 {
        return Err(SyntaxError::UnexpectedToken {
            statement: statement.ordinal,
            index: 1,
        });
    }
    let value = statement.tokens[root.index + 1..].to_vec();
    Ok(AstNode::definition(root.token, name, value))
}

/// `<keyword> <positional arguments> <flag arguments>`
fn build_operation<'a>(
    statement: &Statement<'_, 'a>,
    root: Root<'a>,
    op: &'static Operation,
) -> ParserResult<'a> {
    if root.index > 0 {
        return Err(SyntaxError::UnexpectedToken {
            statement: statement.ordinal,
            index: 1,
        });
    }
    let arguments = &statement.tokens[root.index + 1..];
    if arguments.len() != op.arity() {
        return Err(SyntaxError::ArityMismatch {
            statement: statement.ordinal,
            index: root.index + 1,
            operation: op.name,
            expected: op.arity(),
            found: arguments.len(),
        });
    }

    for (i, argument) in arguments.iter().enumerate() {
        let (valid, expected) = if i < op.positional_arity {
            (argument.is_operand(), "an identifier or literal")
        } else {
            (matches!(argument.typ, Type::Boolean(_)), "a boolean flag")
        };
        if !valid {
            return Err(SyntaxError::InvalidArgument {
                statement: statement.ordinal,
                index: root.index + i + 2,
                operation: op.name,
                expected,
            });
        }
    }

    let target = arguments
        .iter()
        .take(op.positional_arity)
        .find(|token| matches!(token.typ, Type::Identifier(_)))
        .copied();
    Ok(AstNode::operation(op, root.token, target, arguments.to_vec()))
}
