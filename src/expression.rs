// src/expression.rs
use crate::context::Context;
use crate::errors::{HelperError, Result};
use crate::functions::Registry;
use crate::parser::{ParseError, Parser};
use serde_json::Value;
use tracing::trace;

/// Expression AST: literals and helper calls, e.g. `pad_left(substr('abc', 1, 1), 3)`.
#[derive(Debug, Clone, PartialEq)]
pub enum ENode {
    Call { name: String, args: Vec<ENode> },
    Literal(Value),
}

pub fn parse_expr(input: &str) -> std::result::Result<ENode, ParseError> {
    let mut p = EParser::new(input);
    let node = p.parse_node()?;
    p.parser.skip_ws();
    if !p.parser.eof() {
        return Err(p.parser.error("trailing input"));
    }
    Ok(node)
}

/// Deepest call nesting accepted by the parser.
pub const MAX_DEPTH: usize = 64;

struct EParser<'a> {
    parser: Parser<'a>,
    depth: usize,
}

impl<'a> EParser<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            parser: Parser::new(s),
            depth: 0,
        }
    }

    fn parse_node(&mut self) -> std::result::Result<ENode, ParseError> {
        self.parser.skip_ws();
        match self.parser.peek_char() {
            Some('"') | Some('\'') => {
                return Ok(ENode::Literal(Value::String(self.parser.parse_quoted_string()?)));
            }
            Some(c) if c == '-' || c.is_ascii_digit() => {
                return Ok(ENode::Literal(self.parser.parse_number_literal()?));
            }
            _ => {}
        }
        let name = self.parser.parse_identifier()?;
        match name.as_str() {
            "true" => return Ok(ENode::Literal(Value::Bool(true))),
            "false" => return Ok(ENode::Literal(Value::Bool(false))),
            "null" => return Ok(ENode::Literal(Value::Null)),
            _ => {}
        }
        self.parser.skip_ws();
        self.parser.expect('(')?;
        if self.depth >= MAX_DEPTH {
            return Err(self.parser.error("expression nested too deeply"));
        }
        self.depth += 1;
        let args = self.parse_args()?;
        self.depth -= 1;
        self.parser.expect(')')?;
        Ok(ENode::Call { name, args })
    }

    fn parse_args(&mut self) -> std::result::Result<Vec<ENode>, ParseError> {
        let mut out = Vec::new();
        self.parser.skip_ws();
        if self.parser.peek_char() == Some(')') {
            return Ok(out);
        }
        loop {
            out.push(self.parse_node()?);
            self.parser.skip_ws();
            if !self.parser.consume_char(',') {
                break;
            }
        }
        Ok(out)
    }
}

/// Evaluate AST node → Value, resolving calls through `registry`.
pub fn eval_ast(node: &ENode, registry: &Registry, ctx: &Context) -> Result<Value> {
    match node {
        ENode::Literal(v) => Ok(v.clone()),
        ENode::Call { name, args } => {
            let args = args
                .iter()
                .map(|a| eval_ast(a, registry, ctx))
                .collect::<Result<Vec<_>>>()?;
            trace!(function = %name, "eval call");
            registry.call(name, ctx, &args)
        }
    }
}

impl From<ParseError> for HelperError {
    fn from(e: ParseError) -> Self {
        HelperError::Parse(e.to_string())
    }
}
