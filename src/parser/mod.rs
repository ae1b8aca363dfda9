//! Decode results and the scanners the field variants are built on.
//!
//! A value span handed to a field holds one or more groups. A group is
//! either `(body)` or a bare body that runs up to the next parenthesis, so
//! both `001.234*kWh` and `(001.234*kWh)` are accepted, as is a timestamped
//! `150117180000W(00473.789*m3)`.

use thiserror::Error;

pub mod utils;

pub use utils::{NumParser, StringParser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// String length outside of the declared bounds, or a number that does
    /// not fit its storage.
    OutOfRange,
    /// Text does not match the number/unit grammar.
    InvalidFormat,
}

/// Why and where a decode stopped. `at` is a byte offset into the span that
/// was handed to the decode call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{reason} at offset {at}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub at: usize,
    pub reason: &'static str,
}

impl ParseError {
    pub(crate) fn invalid(reason: &'static str, at: usize) -> Self {
        Self { kind: ErrorKind::InvalidFormat, at, reason }
    }

    pub(crate) fn out_of_range(reason: &'static str, at: usize) -> Self {
        Self { kind: ErrorKind::OutOfRange, at, reason }
    }

    /// Rebase the position onto an enclosing span that starts `offset`
    /// bytes earlier.
    pub(crate) fn shifted(self, offset: usize) -> Self {
        Self { at: self.at + offset, ..self }
    }
}

/// A successfully scanned value and the cursor one past the last byte
/// consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    pub next: usize,
}

impl<T> Parsed<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed { value: f(self.value), next: self.next }
    }

    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Parsed<U>, E> {
        Ok(Parsed { value: f(self.value)?, next: self.next })
    }
}

pub type ParseResult<T> = Result<Parsed<T>, ParseError>;

/// One group split off the front of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Group<'a> {
    pub body: &'a str,
    /// Offset of `body` within the span.
    pub start: usize,
    pub next: usize,
}

/// Offset of the first group's body within `span`.
pub(crate) fn body_start(span: &str) -> usize {
    usize::from(span.starts_with('('))
}

/// Split the first group off `span`. A bare body ends at the span end or at
/// the `(` of the following group.
pub(crate) fn next_group(span: &str) -> Result<Group<'_>, ParseError> {
    if let Some(inner) = span.strip_prefix('(') {
        let close = inner
            .find(')')
            .ok_or(ParseError::invalid("Missing )", span.len()))?;
        return Ok(Group {
            body: &inner[..close],
            start: body_start(span),
            next: close + 2,
        });
    }

    let end = span.find(['(', ')']).unwrap_or(span.len());
    if span[end..].starts_with(')') {
        return Err(ParseError::invalid("Unexpected )", end));
    }
    Ok(Group { body: &span[..end], start: 0, next: end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_group_runs_to_end() {
        let group = next_group("001.234*kWh").unwrap();
        assert_eq!(group.body, "001.234*kWh");
        assert_eq!(group.start, 0);
        assert_eq!(group.next, 11);
    }

    #[test]
    fn test_parenthesized_group() {
        let group = next_group("(150117180000W)(00473.789*m3)").unwrap();
        assert_eq!(group.body, "150117180000W");
        assert_eq!(group.start, 1);
        assert_eq!(group.next, 15);
    }

    #[test]
    fn test_bare_group_stops_at_parenthesis() {
        let group = next_group("150117180000W(00473.789*m3)").unwrap();
        assert_eq!(group.body, "150117180000W");
        assert_eq!(group.next, 13);
    }

    #[test]
    fn test_stray_close_in_bare_group() {
        let err = next_group("ab)cd").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidFormat);
        assert_eq!(err.reason, "Unexpected )");
        assert_eq!(err.at, 2);

        assert_eq!(body_start("(0002)"), 1);
        assert_eq!(body_start("0002"), 0);
    }

    #[test]
    fn test_unclosed_group() {
        let err = next_group("(001.234*kWh").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidFormat);
        assert_eq!(err.at, 12);
    }

    #[test]
    fn test_error_display() {
        let err = ParseError::invalid("Missing unit", 7);
        assert_eq!(err.to_string(), "Missing unit at offset 7");
        assert_eq!(err.shifted(13).at, 20);
    }
}
