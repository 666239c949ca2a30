//! Parser and shape-check error types.

use thiserror::Error;

use crate::value::{Kind, Value};

/// Syntax error reported by [`parse`](crate::parse) and
/// [`parse_multi`](crate::parse_multi).
///
/// Every variant carries the 1-based line number of the failure point.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected {expected}, got end of input")]
    Eof { line: usize, expected: &'static str },
    #[error("line {line}: expected {expected}, got '{found}'")]
    Unexpected {
        line: usize,
        expected: &'static str,
        found: char,
    },
    #[error("line {line}: expected '{keyword}', got '{found}'")]
    Keyword {
        line: usize,
        keyword: &'static str,
        found: String,
    },
    #[error("line {line}: unexpected trailing '{found}'")]
    TrailingGarbage { line: usize, found: char },
    #[error("line {line}: malformed comment")]
    MalformedComment { line: usize },
    #[error("line {line}: unterminated block comment")]
    UnterminatedComment { line: usize },
    #[error("line {line}: unescaped control character {byte:#04x} in string")]
    ControlCharacter { line: usize, byte: u8 },
    #[error("line {line}: invalid escape character '{escape}'")]
    InvalidEscape { line: usize, escape: char },
    #[error("line {line}: bad \\u escape")]
    InvalidUnicodeEscape { line: usize },
    #[error("line {line}: invalid '{found}' in number")]
    InvalidNumber { line: usize, found: char },
    #[error("line {line}: leading zeros are not permitted in numbers")]
    LeadingZeros { line: usize },
    #[error("line {line}: at least one digit required in fractional part")]
    MissingFractionDigits { line: usize },
    #[error("line {line}: at least one digit required in exponent part")]
    MissingExponentDigits { line: usize },
    #[error("line {line}: exceeded maximum nesting depth")]
    TooDeep { line: usize },
}

impl ParseError {
    /// 1-based line number at the point of failure.
    pub fn line(&self) -> usize {
        match self {
            ParseError::Eof { line, .. }
            | ParseError::Unexpected { line, .. }
            | ParseError::Keyword { line, .. }
            | ParseError::TrailingGarbage { line, .. }
            | ParseError::MalformedComment { line }
            | ParseError::UnterminatedComment { line }
            | ParseError::ControlCharacter { line, .. }
            | ParseError::InvalidEscape { line, .. }
            | ParseError::InvalidUnicodeEscape { line }
            | ParseError::InvalidNumber { line, .. }
            | ParseError::LeadingZeros { line }
            | ParseError::MissingFractionDigits { line }
            | ParseError::MissingExponentDigits { line }
            | ParseError::TooDeep { line } => *line,
        }
    }
}

/// Failure of [`parse_multi`](crate::parse_multi).
///
/// Documents parsed before the failing attempt are retained in `values`;
/// nothing is appended for the attempt that failed. `stop_offset` is the
/// byte offset at which that attempt began.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("stopped at byte {stop_offset}: {error}")]
pub struct MultiParseError {
    pub values: Vec<Value>,
    pub stop_offset: usize,
    #[source]
    pub error: ParseError,
}

/// Shape-check failure from [`Value::has_shape`](crate::Value::has_shape).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("expected an object, got {0}")]
    NotAnObject(Kind),
    #[error("missing key '{key}'")]
    MissingKey { key: String },
    #[error("bad type for '{key}': expected {expected}, got {found}")]
    Mismatch {
        key: String,
        expected: Kind,
        found: Kind,
    },
}
