//! Minimal evaluator for the store's textual filter language.
//!
//! The fixture consumes rendered predicates as text, the way the real
//! store does, so restriction behavior is exercised end to end instead of
//! by string comparison. Supported forms: parentheses, AND/OR/NOT,
//! `IN`/`NOT IN` lists, `IS [NOT] NULL`, comparisons against numbers,
//! quoted strings (with doubled-quote escapes), and positional `?`
//! arguments. Keywords match case-insensitively.

use crate::store::Value;
use std::collections::BTreeMap;

pub(crate) type Row = BTreeMap<String, Value>;

/// Evaluate a filter expression against one row.
///
/// Panics on malformed input; fixture predicates are produced by the
/// renderer or written by tests, so a parse failure is a bug worth
/// surfacing loudly.
pub(crate) fn eval(expr: &str, row: &Row, args: &[String]) -> bool {
    let tokens = tokenize(expr);
    let mut parser = Parser {
        tokens,
        pos: 0,
        row,
        args,
        next_arg: 0,
    };

    let value = parser.parse_or();
    assert!(
        parser.pos == parser.tokens.len(),
        "unconsumed filter input: {expr}"
    );

    value
}

#[derive(Clone, Debug, PartialEq)]
enum Tok {
    Ident(String),
    Num(i64),
    Str(String),
    LParen,
    RParen,
    Comma,
    Question,
    Op(String),
}

fn tokenize(expr: &str) -> Vec<Tok> {
    let bytes = expr.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i] as char;
        match c {
            ' ' | '\t' | '\n' => i += 1,
            '(' => {
                tokens.push(Tok::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Tok::RParen);
                i += 1;
            }
            ',' => {
                tokens.push(Tok::Comma);
                i += 1;
            }
            '?' => {
                tokens.push(Tok::Question);
                i += 1;
            }
            '\'' => {
                let mut out = String::new();
                i += 1;
                loop {
                    assert!(i < bytes.len(), "unterminated string in filter: {expr}");
                    if bytes[i] == b'\'' {
                        if bytes.get(i + 1) == Some(&b'\'') {
                            out.push('\'');
                            i += 2;
                        } else {
                            i += 1;
                            break;
                        }
                    } else {
                        out.push(bytes[i] as char);
                        i += 1;
                    }
                }
                tokens.push(Tok::Str(out));
            }
            '=' | '!' | '<' | '>' => {
                let mut op = String::new();
                while i < bytes.len() && matches!(bytes[i], b'=' | b'!' | b'<' | b'>') {
                    op.push(bytes[i] as char);
                    i += 1;
                }
                tokens.push(Tok::Op(op));
            }
            '-' | '0'..='9' => {
                let start = i;
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                let text = &expr[start..i];
                tokens.push(Tok::Num(text.parse().expect("numeric token")));
            }
            'a'..='z' | 'A'..='Z' | '_' => {
                let start = i;
                while i < bytes.len()
                    && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_')
                {
                    i += 1;
                }
                tokens.push(Tok::Ident(expr[start..i].to_string()));
            }
            other => panic!("unexpected character '{other}' in filter: {expr}"),
        }
    }

    tokens
}

struct Parser<'a> {
    tokens: Vec<Tok>,
    pos: usize,
    row: &'a Row,
    args: &'a [String],
    next_arg: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Tok {
        let tok = self.tokens[self.pos].clone();
        self.pos += 1;
        tok
    }

    fn peek_keyword(&self, word: &str) -> bool {
        matches!(self.peek(), Some(Tok::Ident(s)) if s.eq_ignore_ascii_case(word))
    }

    fn expect_keyword(&mut self, word: &str) {
        assert!(self.peek_keyword(word), "expected {word} in filter");
        self.pos += 1;
    }

    // Both operands always evaluate; positional `?` arguments bind in
    // parse order, so short-circuiting would skip bindings.
    fn parse_or(&mut self) -> bool {
        let mut value = self.parse_and();
        while self.peek_keyword("OR") {
            self.pos += 1;
            let rhs = self.parse_and();
            value = value || rhs;
        }
        value
    }

    fn parse_and(&mut self) -> bool {
        let mut value = self.parse_not();
        while self.peek_keyword("AND") {
            self.pos += 1;
            let rhs = self.parse_not();
            value = value && rhs;
        }
        value
    }

    fn parse_not(&mut self) -> bool {
        if self.peek_keyword("NOT") {
            self.pos += 1;
            return !self.parse_not();
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> bool {
        match self.bump() {
            Tok::LParen => {
                let value = self.parse_or();
                assert_eq!(self.bump(), Tok::RParen, "expected ) in filter");
                value
            }
            Tok::Num(n) => n != 0,
            Tok::Ident(column) => self.parse_predicate(&column),
            other => panic!("unexpected token {other:?} in filter"),
        }
    }

    fn parse_predicate(&mut self, column: &str) -> bool {
        let cell = self.row.get(column).cloned().unwrap_or(Value::Null);

        if self.peek_keyword("IS") {
            self.pos += 1;
            let negated = self.peek_keyword("NOT");
            if negated {
                self.pos += 1;
            }
            self.expect_keyword("NULL");
            return cell.is_null() != negated;
        }

        if self.peek_keyword("NOT") {
            self.pos += 1;
            self.expect_keyword("IN");
            return !self.parse_in_list(&cell);
        }

        if self.peek_keyword("IN") {
            self.pos += 1;
            return self.parse_in_list(&cell);
        }

        let Tok::Op(op) = self.bump() else {
            panic!("expected operator after column {column}");
        };
        let rhs = self.parse_value();
        compare(&cell, &op, &rhs)
    }

    fn parse_in_list(&mut self, cell: &Value) -> bool {
        assert_eq!(self.bump(), Tok::LParen, "expected ( after IN");

        let mut found = false;
        if self.peek() == Some(&Tok::RParen) {
            self.pos += 1;
            return false;
        }

        loop {
            let value = self.parse_value();
            found = found || values_equal(cell, &value);

            match self.bump() {
                Tok::Comma => {}
                Tok::RParen => break,
                other => panic!("unexpected token {other:?} in IN list"),
            }
        }

        found
    }

    fn parse_value(&mut self) -> Value {
        match self.bump() {
            Tok::Num(n) => Value::Integer(n),
            Tok::Str(s) => Value::Text(s),
            Tok::Question => {
                let arg = self
                    .args
                    .get(self.next_arg)
                    .expect("missing positional filter argument")
                    .clone();
                self.next_arg += 1;
                Value::Text(arg)
            }
            other => panic!("unexpected value token {other:?} in filter"),
        }
    }
}

// Null cells never compare equal; integer cells tolerate textual operands
// (positional arguments arrive as text).
fn values_equal(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::Integer(a), Value::Text(b)) | (Value::Text(b), Value::Integer(a)) => {
            b.parse::<i64>().is_ok_and(|parsed| parsed == *a)
        }
        (Value::Float(a), Value::Float(b)) => (a - b).abs() < f64::EPSILON,
        _ => false,
    }
}

fn compare(cell: &Value, op: &str, rhs: &Value) -> bool {
    if cell.is_null() || rhs.is_null() {
        return false;
    }

    match op {
        "=" => values_equal(cell, rhs),
        "!=" | "<>" => !values_equal(cell, rhs),
        "<" | "<=" | ">" | ">=" => {
            let (Some(a), Some(b)) = (numeric(cell), numeric(rhs)) else {
                return false;
            };
            match op {
                "<" => a < b,
                "<=" => a <= b,
                ">" => a > b,
                _ => a >= b,
            }
        }
        other => panic!("unsupported operator {other} in filter"),
    }
}

#[expect(clippy::cast_precision_loss)]
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(v) => Some(*v as f64),
        Value::Float(v) => Some(*v),
        Value::Text(v) => v.parse().ok(),
        _ => None,
    }
}
