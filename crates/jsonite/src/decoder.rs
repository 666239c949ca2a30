//! Recursive-descent JSON parser with strict and comment-tolerant modes.

use std::collections::BTreeMap;

use crate::error::{MultiParseError, ParseError};
use crate::value::Value;

/// Nesting cap for arrays and objects; bounds parser recursion on
/// adversarial input.
const MAX_DEPTH: usize = 200;

/// Parsing dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Standard JSON (RFC 8259); `//` and `/* */` are syntax errors.
    #[default]
    Strict,
    /// Standard JSON plus `//` line comments and `/* */` block comments
    /// anywhere whitespace is allowed.
    Comments,
}

/// Parses `text` as exactly one JSON document.
///
/// Whitespace (and comments, in [`ParseMode::Comments`]) may surround the
/// value; any other leftover input is a trailing-garbage error. Top-level
/// scalars are valid documents.
///
/// # Example
///
/// ```
/// use jsonite::{parse, ParseMode};
///
/// let v = parse(r#"{"a": [1, 2]}"#, ParseMode::Strict).unwrap();
/// assert_eq!(v["a"][1].number_value(), 2.0);
///
/// assert!(parse("[1] x", ParseMode::Strict).is_err());
/// ```
pub fn parse(text: &str, mode: ParseMode) -> Result<Value, ParseError> {
    let mut parser = Parser::new(text, mode);
    let value = parser.parse_value(0)?;
    parser.consume_garbage()?;
    match parser.peek() {
        None => Ok(value),
        Some(_) => Err(ParseError::TrailingGarbage {
            line: parser.line(),
            found: parser.current_char(),
        }),
    }
}

/// Parses a sequence of whitespace-separated JSON documents.
///
/// Documents are appended in parse order until the input is exhausted. On
/// the first failing attempt the successes so far are returned inside
/// [`MultiParseError`] along with `stop_offset`, the byte offset at which
/// the failed attempt began.
///
/// # Example
///
/// ```
/// use jsonite::{parse_multi, ParseMode};
///
/// let values = parse_multi("1 2 3", ParseMode::Strict).unwrap();
/// assert_eq!(values.len(), 3);
///
/// let err = parse_multi(r#"{"a":1} ["#, ParseMode::Strict).unwrap_err();
/// assert_eq!(err.values.len(), 1);
/// assert_eq!(err.stop_offset, 8);
/// ```
pub fn parse_multi(text: &str, mode: ParseMode) -> Result<Vec<Value>, MultiParseError> {
    let mut parser = Parser::new(text, mode);
    let mut values = Vec::new();
    let mut stop_offset = 0;
    while parser.pos != text.len() {
        match parser.parse_value(0) {
            Ok(value) => values.push(value),
            Err(error) => {
                return Err(MultiParseError {
                    values,
                    stop_offset,
                    error,
                })
            }
        }
        // The offset only advances once the document and the garbage after
        // it have both been consumed.
        if let Err(error) = parser.consume_garbage() {
            return Err(MultiParseError {
                values,
                stop_offset,
                error,
            });
        }
        stop_offset = parser.pos;
    }
    Ok(values)
}

struct Parser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    mode: ParseMode,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, mode: ParseMode) -> Parser<'a> {
        Parser {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            mode,
        }
    }

    /// 1-based line number at the cursor, for error reporting.
    fn line(&self) -> usize {
        self.bytes[..self.pos].iter().filter(|&&b| b == b'\n').count() + 1
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Character at the cursor, for error messages.
    fn current_char(&self) -> char {
        self.text[self.pos..].chars().next().unwrap_or('\0')
    }

    /// Character starting at the byte just consumed, for error messages.
    fn prev_char(&self) -> char {
        self.text[self.pos - 1..].chars().next().unwrap_or('\0')
    }

    fn consume_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.pos += 1;
        }
    }

    /// Consumes one comment if the cursor sits on one; `Ok(true)` when it
    /// did. A `/` not starting `//` or `/*` is an error, not whitespace.
    fn consume_comment(&mut self) -> Result<bool, ParseError> {
        if self.peek() != Some(b'/') {
            return Ok(false);
        }
        self.pos += 1;
        match self.peek() {
            Some(b'/') => {
                while let Some(b) = self.peek() {
                    if b == b'\n' {
                        break;
                    }
                    self.pos += 1;
                }
                Ok(true)
            }
            Some(b'*') => {
                self.pos += 1;
                loop {
                    if self.pos + 1 >= self.bytes.len() {
                        return Err(ParseError::UnterminatedComment { line: self.line() });
                    }
                    if self.bytes[self.pos] == b'*' && self.bytes[self.pos + 1] == b'/' {
                        self.pos += 2;
                        return Ok(true);
                    }
                    self.pos += 1;
                }
            }
            _ => Err(ParseError::MalformedComment { line: self.line() }),
        }
    }

    /// Skips whitespace, plus comments when the mode allows them.
    fn consume_garbage(&mut self) -> Result<(), ParseError> {
        self.consume_whitespace();
        if self.mode == ParseMode::Comments {
            while self.consume_comment()? {
                self.consume_whitespace();
            }
        }
        Ok(())
    }

    /// Skips garbage and consumes the next byte.
    fn next_token(&mut self, expected: &'static str) -> Result<u8, ParseError> {
        self.consume_garbage()?;
        match self.peek() {
            Some(b) => {
                self.pos += 1;
                Ok(b)
            }
            None => Err(ParseError::Eof {
                line: self.line(),
                expected,
            }),
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, ParseError> {
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { line: self.line() });
        }
        let ch = self.next_token("value")?;
        match ch {
            b'-' | b'0'..=b'9' => {
                self.pos -= 1;
                self.parse_number()
            }
            b't' => self.expect_keyword("true", Value::Bool(true)),
            b'f' => self.expect_keyword("false", Value::Bool(false)),
            b'n' => self.expect_keyword("null", Value::Null),
            b'"' => self.parse_string().map(Value::String),
            b'{' => self.parse_object(depth),
            b'[' => self.parse_array(depth),
            _ => Err(ParseError::Unexpected {
                line: self.line(),
                expected: "value",
                found: self.prev_char(),
            }),
        }
    }

    /// Re-reads the keyword starting at the byte just consumed.
    fn expect_keyword(
        &mut self,
        keyword: &'static str,
        value: Value,
    ) -> Result<Value, ParseError> {
        self.pos -= 1;
        if self.bytes[self.pos..].starts_with(keyword.as_bytes()) {
            self.pos += keyword.len();
            Ok(value)
        } else {
            let found: String = self.text[self.pos..].chars().take(keyword.len()).collect();
            Err(ParseError::Keyword {
                line: self.line(),
                keyword,
                found,
            })
        }
    }

    /// Parses string contents; the opening `"` is already consumed.
    ///
    /// A decoded `\u` code unit is held back until the next character
    /// decides whether it forms a surrogate pair. Unpaired surrogates are
    /// not scalar values and decode to U+FFFD.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        let mut out = String::new();
        let mut pending: Option<u32> = None;
        loop {
            // Copy the plain span up to the next quote, escape, or control
            // byte in one slice. The boundaries are ASCII, so the slice
            // stays on UTF-8 char boundaries.
            let start = self.pos;
            while let Some(b) = self.peek() {
                if b == b'"' || b == b'\\' || b < 0x20 {
                    break;
                }
                self.pos += 1;
            }
            if self.pos > start {
                flush_pending(&mut pending, &mut out);
                out.push_str(&self.text[start..self.pos]);
            }
            match self.peek() {
                None => {
                    return Err(ParseError::Eof {
                        line: self.line(),
                        expected: "closing '\"'",
                    })
                }
                Some(b'"') => {
                    self.pos += 1;
                    flush_pending(&mut pending, &mut out);
                    return Ok(out);
                }
                Some(b'\\') => {
                    self.pos += 1;
                    self.parse_escape(&mut pending, &mut out)?;
                }
                Some(byte) => {
                    return Err(ParseError::ControlCharacter {
                        line: self.line(),
                        byte,
                    })
                }
            }
        }
    }

    /// Parses one escape; the backslash is already consumed.
    fn parse_escape(
        &mut self,
        pending: &mut Option<u32>,
        out: &mut String,
    ) -> Result<(), ParseError> {
        let b = match self.peek() {
            Some(b) => b,
            None => {
                return Err(ParseError::Eof {
                    line: self.line(),
                    expected: "escape character",
                })
            }
        };
        self.pos += 1;
        if b == b'u' {
            let code = self.parse_hex4()?;
            if let Some(high) = *pending {
                if (0xD800..=0xDBFF).contains(&high) && (0xDC00..=0xDFFF).contains(&code) {
                    let combined = 0x10000 + ((high - 0xD800) << 10) + (code - 0xDC00);
                    out.push(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER));
                    *pending = None;
                    return Ok(());
                }
            }
            flush_pending(pending, out);
            *pending = Some(code);
            return Ok(());
        }
        flush_pending(pending, out);
        match b {
            b'b' => out.push('\u{8}'),
            b'f' => out.push('\u{c}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            _ => {
                return Err(ParseError::InvalidEscape {
                    line: self.line(),
                    escape: self.prev_char(),
                })
            }
        }
        Ok(())
    }

    fn parse_hex4(&mut self) -> Result<u32, ParseError> {
        let mut code: u32 = 0;
        for _ in 0..4 {
            let digit = match self.peek() {
                None => {
                    return Err(ParseError::Eof {
                        line: self.line(),
                        expected: "four hex digits",
                    })
                }
                Some(b) => match (b as char).to_digit(16) {
                    Some(digit) => digit,
                    None => return Err(ParseError::InvalidUnicodeEscape { line: self.line() }),
                },
            };
            self.pos += 1;
            code = code * 16 + digit;
        }
        Ok(code)
    }

    /// Parses a number token starting at the cursor, RFC 8259 grammar.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                if matches!(self.peek(), Some(b'0'..=b'9')) {
                    return Err(ParseError::LeadingZeros { line: self.line() });
                }
            }
            Some(b'1'..=b'9') => {
                self.pos += 1;
                while matches!(self.peek(), Some(b'0'..=b'9')) {
                    self.pos += 1;
                }
            }
            Some(_) => {
                return Err(ParseError::InvalidNumber {
                    line: self.line(),
                    found: self.current_char(),
                })
            }
            None => {
                return Err(ParseError::Eof {
                    line: self.line(),
                    expected: "digit in number",
                })
            }
        }
        if self.peek() == Some(b'.') {
            self.pos += 1;
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(ParseError::MissingFractionDigits { line: self.line() });
            }
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(ParseError::MissingExponentDigits { line: self.line() });
            }
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }
        let literal = &self.text[start..self.pos];
        literal
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| ParseError::InvalidNumber {
                line: self.line(),
                found: literal.chars().next().unwrap_or('0'),
            })
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value, ParseError> {
        let mut items = Vec::new();
        let mut ch = self.next_token("value or ']'")?;
        if ch == b']' {
            return Ok(Value::Array(items));
        }
        loop {
            self.pos -= 1;
            items.push(self.parse_value(depth + 1)?);
            ch = self.next_token("',' or ']'")?;
            if ch == b']' {
                break;
            }
            if ch != b',' {
                return Err(ParseError::Unexpected {
                    line: self.line(),
                    expected: "',' in array",
                    found: self.prev_char(),
                });
            }
            self.next_token("value")?;
        }
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value, ParseError> {
        let mut items = BTreeMap::new();
        let mut ch = self.next_token("object key or '}'")?;
        if ch == b'}' {
            return Ok(Value::Object(items));
        }
        loop {
            if ch != b'"' {
                return Err(ParseError::Unexpected {
                    line: self.line(),
                    expected: "'\"' in object",
                    found: self.prev_char(),
                });
            }
            let key = self.parse_string()?;
            ch = self.next_token("':'")?;
            if ch != b':' {
                return Err(ParseError::Unexpected {
                    line: self.line(),
                    expected: "':' in object",
                    found: self.prev_char(),
                });
            }
            // Duplicate keys: the last occurrence wins.
            items.insert(key, self.parse_value(depth + 1)?);
            ch = self.next_token("',' or '}'")?;
            if ch == b'}' {
                break;
            }
            if ch != b',' {
                return Err(ParseError::Unexpected {
                    line: self.line(),
                    expected: "',' in object",
                    found: self.prev_char(),
                });
            }
            ch = self.next_token("object key")?;
        }
        Ok(Value::Object(items))
    }
}

/// Emits a held `\u` code unit; unpaired surrogates become U+FFFD.
fn flush_pending(pending: &mut Option<u32>, out: &mut String) {
    if let Some(code) = pending.take() {
        out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
    }
}

impl std::str::FromStr for Value {
    type Err = ParseError;

    /// Strict-mode parse; use [`parse`] to pick the mode.
    fn from_str(s: &str) -> Result<Value, ParseError> {
        parse(s, ParseMode::Strict)
    }
}
