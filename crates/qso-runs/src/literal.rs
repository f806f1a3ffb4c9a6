//! Safe decoding of numeric literal expressions.
//!
//! Older run logs store `params` as a stringified literal such as
//! `"[0.1, (2, 3.5)]"`.  This module parses that grammar — numbers and
//! arbitrarily nested `[..]` / `(..)` sequences — without evaluating
//! anything else, and flattens the result to a flat number list.

use crate::error::{RunsError, RunsResult};

/// Decode a literal expression into a flat list of numbers.
pub fn decode_literal(text: &str) -> RunsResult<Vec<f64>> {
    let mut parser = Parser {
        bytes: text.as_bytes(),
        pos: 0,
        source: text,
    };
    let mut out = Vec::new();
    parser.skip_whitespace();
    parser.value(&mut out)?;
    parser.skip_whitespace();
    if parser.pos != parser.bytes.len() {
        return Err(parser.fail("trailing input"));
    }
    Ok(out)
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    source: &'a str,
}

impl Parser<'_> {
    fn value(&mut self, out: &mut Vec<f64>) -> RunsResult<()> {
        match self.peek() {
            Some(b'[') => self.sequence(b']', out),
            Some(b'(') => self.sequence(b')', out),
            Some(_) => self.number(out),
            None => Err(self.fail("unexpected end of input")),
        }
    }

    fn sequence(&mut self, close: u8, out: &mut Vec<f64>) -> RunsResult<()> {
        self.pos += 1;
        self.skip_whitespace();
        if self.peek() == Some(close) {
            self.pos += 1;
            return Ok(());
        }
        loop {
            self.value(out)?;
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    // A trailing comma before the closer is legal.
                    if self.peek() == Some(close) {
                        self.pos += 1;
                        return Ok(());
                    }
                }
                Some(c) if c == close => {
                    self.pos += 1;
                    return Ok(());
                }
                _ => return Err(self.fail("expected ',' or closing bracket")),
            }
        }
    }

    fn number(&mut self, out: &mut Vec<f64>) -> RunsResult<()> {
        let start = self.pos;
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        while matches!(
            self.peek(),
            Some(b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-')
        ) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.fail("expected a number"));
        }
        let text = &self.source[start..self.pos];
        let value: f64 = text
            .parse()
            .map_err(|_| self.fail("expected a number"))?;
        out.push(value);
        Ok(())
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn fail(&self, reason: &str) -> RunsError {
        RunsError::LiteralDecode(format!("{reason} at byte {} in {:?}", self.pos, self.source))
    }
}
