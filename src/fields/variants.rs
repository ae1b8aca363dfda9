use core::fmt;
use core::marker::PhantomData;

use log::{trace, warn};

use super::structs::{FixedValue, TimestampedFixedValue, TIMESTAMP_LEN};
use super::units::Unit;
use crate::parser::{body_start, NumParser, ParseError, ParseResult, Parsed, StringParser};

/// Decoding strategy of a field.
///
/// `parse` builds a complete value or fails; it never sees the field's
/// storage, so a failed decode cannot leave anything half written.
pub trait Variant: 'static {
    type Value: Default + Clone + fmt::Debug + fmt::Display;

    const UNIT: &'static str = "";
    /// Unit of the scaled integer, when it differs in kind from [`Self::UNIT`].
    const INT_UNIT: &'static str = "";

    fn parse(span: &str) -> ParseResult<Self::Value>;
}

/// String of `MIN..=MAX` bytes, stored verbatim.
///
/// A bare span is taken whole; one that does not end with its only group
/// is rejected rather than cut short.
pub struct StringField<const MIN: usize, const MAX: usize>;

impl<const MIN: usize, const MAX: usize> Variant for StringField<MIN, MAX> {
    type Value = heapless::String<MAX>;

    fn parse(span: &str) -> ParseResult<Self::Value> {
        let res = StringParser::parse_string(MIN, MAX, span)?;
        if body_start(span) == 0 && res.next < span.len() {
            return Err(ParseError::invalid("Extra data", res.next));
        }
        res.try_map(bounded::<MAX>)
    }
}

fn bounded<const N: usize>(text: &str) -> Result<heapless::String<N>, ParseError> {
    heapless::String::try_from(text)
        .map_err(|_| ParseError::out_of_range("Invalid string length", 0))
}

// A timestamp is kept as its packed YYMMDDhhmmssX text. Turning it into
// epoch seconds depends on the P1 version and isn't useful for
// calculations anyway.
pub type TimestampField = StringField<TIMESTAMP_LEN, TIMESTAMP_LEN>;

/// Three-decimal number with unit `U`, or an integer with unit `I`.
///
/// Most meters send `1-0:1.8.0(000441.879*kWh)`, some firmware sends
/// `1-0:1.8.0(000441879*Wh)` instead. The integer form is taken as is: it is
/// already in thousandths of `U`.
pub struct FixedField<U, I>(PhantomData<(U, I)>);

impl<U: Unit, I: Unit> Variant for FixedField<U, I> {
    type Value = FixedValue;

    const UNIT: &'static str = U::TAG;
    const INT_UNIT: &'static str = I::TAG;

    fn parse(span: &str) -> ParseResult<FixedValue> {
        let decimal_err = match NumParser::parse(3, U::TAG, span) {
            Ok(res) => return fixed(res, span),
            Err(e) => e,
        };

        match NumParser::parse(0, I::TAG, span) {
            Ok(res) => {
                trace!("'{}' decoded through the integer unit {}", span, I::TAG);
                fixed(res, span)
            }
            // Report why the decimal form did not match
            Err(_) => Err(decimal_err),
        }
    }
}

fn fixed(res: Parsed<i64>, span: &str) -> ParseResult<FixedValue> {
    let value = i32::try_from(res.value)
        .map_err(|_| ParseError::out_of_range("Number too large", body_start(span)))?;
    Ok(res.map(|_| FixedValue::from_scaled(value)))
}

/// Capture timestamp directly followed by a [`FixedField`] value, as in
/// `0-1:24.2.1(150117180000W)(00473.789*m3)`.
pub struct TimestampedFixedField<U, I>(PhantomData<(U, I)>);

impl<U: Unit, I: Unit> Variant for TimestampedFixedField<U, I> {
    type Value = TimestampedFixedValue;

    const UNIT: &'static str = U::TAG;
    const INT_UNIT: &'static str = I::TAG;

    fn parse(span: &str) -> ParseResult<TimestampedFixedValue> {
        let ts = StringParser::parse_string(TIMESTAMP_LEN, TIMESTAMP_LEN, span)?;
        let timestamp = bounded::<TIMESTAMP_LEN>(ts.value)?;

        let rest = &span[ts.next..];
        let res = FixedField::<U, I>::parse(rest).map_err(|e| e.shifted(ts.next))?;

        Ok(Parsed {
            value: TimestampedFixedValue { timestamp, fixed: res.value },
            next: ts.next + res.next,
        })
    }
}

/// Unsigned integer with unit `U`, stored as `T`.
pub struct IntField<U, T>(PhantomData<(U, T)>);

impl<U, T> Variant for IntField<U, T>
where
    U: Unit,
    T: TryFrom<i64> + Default + Clone + fmt::Debug + fmt::Display + 'static,
{
    type Value = T;

    const UNIT: &'static str = U::TAG;

    fn parse(span: &str) -> ParseResult<T> {
        let res = NumParser::parse(0, U::TAG, span)?;
        let at = body_start(span);
        if res.value < 0 {
            return Err(ParseError::invalid("Negative number", at));
        }
        let value = T::try_from(res.value)
            .map_err(|_| ParseError::out_of_range("Number too large", at))?;
        Ok(res.map(|_| value))
    }
}

/// Span copied verbatim, parentheses included. Never fails; a span longer
/// than `N` bytes is cut at the last character that fits.
pub struct RawField<const N: usize>;

impl<const N: usize> Variant for RawField<N> {
    type Value = heapless::String<N>;

    fn parse(span: &str) -> ParseResult<Self::Value> {
        let mut cut = span.len().min(N);
        while !span.is_char_boundary(cut) {
            cut -= 1;
        }
        if cut < span.len() {
            warn!("Raw value of {} bytes truncated to {}", span.len(), cut);
        }

        let value = bounded::<N>(&span[..cut])?;
        Ok(Parsed { value, next: span.len() })
    }
}
