use super::{next_group, ParseError, ParseResult, Parsed};

pub struct StringParser;

impl StringParser {
    /// Scan one group whose body is between `min` and `max` bytes long.
    pub fn parse_string(min: usize, max: usize, span: &str) -> ParseResult<&str> {
        let group = next_group(span)?;
        let len = group.body.len();
        if len < min || len > max {
            return Err(ParseError::out_of_range("Invalid string length", group.start));
        }
        Ok(Parsed { value: group.body, next: group.next })
    }
}

pub struct NumParser;

impl NumParser {
    /// Scan one group holding a number with up to `max_decimals` fraction
    /// digits, followed by `*unit` unless `unit` is empty.
    ///
    /// The result is scaled by `10^max_decimals`, so `001.234` with three
    /// decimals scans as `1234` and `1.2` as `1200`.
    pub fn parse(max_decimals: usize, unit: &str, span: &str) -> ParseResult<i64> {
        let group = next_group(span)?;
        let text = group.body;
        let body = text.as_bytes();
        let at = |pos: usize| group.start + pos;

        let mut pos = 0;
        let negative = match body.first() {
            Some(b'-') => {
                pos += 1;
                true
            }
            Some(b'+') => {
                pos += 1;
                false
            }
            _ => false,
        };

        let digits_start = pos;
        let mut value: i64 = 0;
        while pos < body.len() && body[pos] != b'*' && body[pos] != b'.' {
            value = push_digit(value, body[pos], at(pos), at(digits_start))?;
            pos += 1;
        }
        if pos == digits_start {
            return Err(ParseError::invalid("Missing number", at(pos)));
        }

        let mut decimals = max_decimals;
        if max_decimals > 0 && pos < body.len() && body[pos] == b'.' {
            pos += 1;
            while pos < body.len() && body[pos] != b'*' && decimals > 0 {
                value = push_digit(value, body[pos], at(pos), at(digits_start))?;
                decimals -= 1;
                pos += 1;
            }
        }
        // Fill in missing decimals with zeroes
        for _ in 0..decimals {
            value = value
                .checked_mul(10)
                .ok_or(ParseError::out_of_range("Number too large", at(digits_start)))?;
        }

        if !unit.is_empty() {
            if pos >= body.len() || body[pos] != b'*' {
                return Err(ParseError::invalid("Missing unit", at(pos)));
            }
            let unit_start = pos + 1;
            if &text[unit_start..] != unit {
                return Err(ParseError::invalid("Invalid unit", at(unit_start)));
            }
            pos = body.len();
        }

        if pos != body.len() {
            return Err(ParseError::invalid("Extra data", at(pos)));
        }

        Ok(Parsed {
            value: if negative { -value } else { value },
            next: group.next,
        })
    }
}

fn push_digit(value: i64, byte: u8, at: usize, number_start: usize) -> Result<i64, ParseError> {
    if !byte.is_ascii_digit() {
        return Err(ParseError::invalid("Invalid number", at));
    }
    value
        .checked_mul(10)
        .and_then(|v| v.checked_add(i64::from(byte - b'0')))
        .ok_or(ParseError::out_of_range("Number too large", number_start))
}
