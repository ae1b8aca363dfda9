use core::fmt;

/// Length of a packed `YYMMDDhhmmssX` timestamp, X being `S` (summer) or
/// `W` (winter).
pub const TIMESTAMP_LEN: usize = 13;

pub type PackedTimestamp = heapless::String<TIMESTAMP_LEN>;

/// Decimal stored as an integer in thousandths.
///
/// Telegram decimals never carry more than three fraction digits, so
/// `1.234 kWh` is kept as `1234`. That integer is the value in the field's
/// integer unit (Wh for a kWh field).
///
/// The integer is signed, so the largest value is 2,147,483.647 in the
/// field's unit; larger readings decode as out of range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FixedValue(i32);

impl FixedValue {
    pub const fn from_scaled(value: i32) -> Self {
        Self(value)
    }

    pub const fn int_val(&self) -> i32 {
        self.0
    }

    pub fn val(&self) -> f32 {
        self.0 as f32 / 1000.0
    }
}

impl From<FixedValue> for f32 {
    fn from(value: FixedValue) -> f32 {
        value.val()
    }
}

impl fmt::Display for FixedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:03}", sign, abs / 1000, abs % 1000)
    }
}

/// Fixed-point value together with the capture time the meter sent with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimestampedFixedValue {
    pub(crate) timestamp: PackedTimestamp,
    pub(crate) fixed: FixedValue,
}

impl TimestampedFixedValue {
    pub fn timestamp(&self) -> &str {
        self.timestamp.as_str()
    }

    pub fn fixed(&self) -> FixedValue {
        self.fixed
    }

    pub fn int_val(&self) -> i32 {
        self.fixed.int_val()
    }

    pub fn val(&self) -> f32 {
        self.fixed.val()
    }
}

impl fmt::Display for TimestampedFixedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.timestamp, self.fixed)
    }
}
