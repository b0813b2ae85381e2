// src/parser.rs
use serde_json::Value;

#[derive(Debug)]
pub enum ParseError {
    InvalidSyntax { pos: usize, msg: String },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidSyntax { pos, msg } => write!(f, "{msg} at offset {pos}"),
        }
    }
}

/// Character cursor over an expression string.
pub struct Parser<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn error(&self, msg: impl Into<String>) -> ParseError {
        ParseError::InvalidSyntax { pos: self.i, msg: msg.into() }
    }

    fn bump(&mut self, c: char) {
        self.i += c.len_utf8();
    }

    pub fn parse_identifier(&mut self) -> Result<String, ParseError> {
        let start = self.i;
        while let Some(c) = self.peek_char() {
            if c == '_' || c.is_ascii_alphanumeric() {
                self.bump(c);
            } else {
                break;
            }
        }
        if self.i == start {
            return Err(self.error("identifier expected"));
        }
        Ok(self.s[start..self.i].to_string())
    }

    fn eat_digits(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                self.bump(c);
            } else {
                break;
            }
        }
    }

    pub fn parse_number_literal(&mut self) -> Result<Value, ParseError> {
        let start = self.i;
        self.consume_char('-');
        self.eat_digits();
        if self.consume_char('.') {
            self.eat_digits();
        }
        let s = &self.s[start..self.i];
        if s.is_empty() || s == "-" {
            return Err(self.error("number expected"));
        }
        if s.contains('.') {
            s.parse::<f64>()
                .map(Value::from)
                .map_err(|_| self.error("bad float"))
        } else {
            s.parse::<i64>()
                .map(Value::from)
                .map_err(|_| self.error("bad int"))
        }
    }

    pub fn parse_quoted_string(&mut self) -> Result<String, ParseError> {
        let quote = self.peek_char().ok_or_else(|| self.error("string expected"))?;
        if quote != '\'' && quote != '"' {
            return Err(self.error("expected quoted string"));
        }
        self.bump(quote);
        let mut out = String::new();
        while let Some(c) = self.peek_char() {
            self.bump(c);
            if c == quote {
                return Ok(out);
            }
            if c == '\\' {
                let Some(nc) = self.peek_char() else { break };
                self.bump(nc);
                match nc {
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    'r' => out.push('\r'),
                    '\\' | '"' | '\'' => out.push(nc),
                    _ => {
                        out.push('\\');
                        out.push(nc);
                    }
                }
            } else {
                out.push(c);
            }
        }
        Err(self.error("unterminated string"))
    }

    pub fn expect(&mut self, c: char) -> Result<(), ParseError> {
        if self.consume_char(c) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{c}'")))
        }
    }

    pub fn consume_char(&mut self, c: char) -> bool {
        if self.peek_char() == Some(c) {
            self.bump(c);
            true
        } else {
            false
        }
    }

    pub fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    pub fn skip_ws(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.bump(c);
            } else {
                break;
            }
        }
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }
}
