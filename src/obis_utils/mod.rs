use core::fmt;
use core::str::FromStr;
use thiserror::Error;

/// Value of an OBIS group that is not part of the identifier.
pub const OMITTED: u8 = 255;

/// OBIS identifier in the A-B:C.D.E*F notation used on P1 lines.
///
/// Groups that a line does not carry are stored as [`OMITTED`], so
/// `1-0:1.8.0` and `1-0:1.8.0*255` are the same identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ObisId {
    v: [u8; 6],
}

impl ObisId {
    pub const fn new(a: u8, b: u8, c: u8, d: u8, e: u8) -> Self {
        Self { v: [a, b, c, d, e, OMITTED] }
    }

    pub const fn from_bytes(v: [u8; 6]) -> Self {
        Self { v }
    }

    /// Same identifier with the F (storage) group set.
    pub const fn with_f(self, f: u8) -> Self {
        let mut v = self.v;
        v[5] = f;
        Self { v }
    }

    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.v
    }

    pub const fn medium(&self) -> u8 {
        self.v[0]
    }

    pub const fn channel(&self) -> u8 {
        self.v[1]
    }

    pub const fn indicator(&self) -> u8 {
        self.v[2]
    }

    pub const fn mode(&self) -> u8 {
        self.v[3]
    }

    pub const fn tariff(&self) -> u8 {
        self.v[4]
    }

    pub const fn previous(&self) -> u8 {
        self.v[5]
    }
}

impl fmt::Display for ObisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}:{}.{}.{}", self.v[0], self.v[1], self.v[2], self.v[3], self.v[4])?;
        if self.v[5] != OMITTED {
            write!(f, "*{}", self.v[5])?;
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObisParseError {
    #[error("Missing A-B separator")]
    MissingMediumSeparator,
    #[error("Missing B:C separator")]
    MissingChannelSeparator,
    #[error("Expected three C.D.E groups")]
    WrongGroupCount,
    #[error("Invalid OBIS group value")]
    InvalidGroup,
}

fn parse_group(part: &str) -> Result<u8, ObisParseError> {
    part.parse::<u8>().map_err(|_| ObisParseError::InvalidGroup)
}

impl FromStr for ObisId {
    type Err = ObisParseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        // A-B:C.D.E with an optional *F storage suffix
        let code = code.trim();

        let (ab, cdef) = code.split_once(':').ok_or(ObisParseError::MissingChannelSeparator)?;
        let (a, b) = ab.split_once('-').ok_or(ObisParseError::MissingMediumSeparator)?;

        let (cde, f) = match cdef.split_once('*') {
            Some((cde, f)) => (cde, parse_group(f)?),
            None => (cdef, OMITTED),
        };

        let mut groups = cde.split('.');
        let mut cde_values = [0u8; 3];
        for slot in cde_values.iter_mut() {
            let part = groups.next().ok_or(ObisParseError::WrongGroupCount)?;
            *slot = parse_group(part)?;
        }
        if groups.next().is_some() {
            return Err(ObisParseError::WrongGroupCount);
        }

        Ok(ObisId::from_bytes([
            parse_group(a)?,
            parse_group(b)?,
            cde_values[0],
            cde_values[1],
            cde_values[2],
            f,
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ObisId::new(1, 0, 1, 8, 0).to_string(), "1-0:1.8.0");
        assert_eq!(ObisId::new(0, 1, 24, 2, 1).with_f(3).to_string(), "0-1:24.2.1*3");
    }

    #[test]
    fn test_parse_obis_code() {
        assert_eq!("1-0:1.8.1".parse::<ObisId>(), Ok(ObisId::new(1, 0, 1, 8, 1)));
        assert_eq!(" 0-0:96.1.0 ".parse::<ObisId>(), Ok(ObisId::new(0, 0, 96, 1, 0)));
        assert_eq!("1-0:1.8.0*255".parse::<ObisId>(), Ok(ObisId::new(1, 0, 1, 8, 0)));
        assert_eq!("1-0:1.8.0*2".parse::<ObisId>(), Ok(ObisId::new(1, 0, 1, 8, 0).with_f(2)));
    }

    #[test]
    fn test_parse_invalid_obis_code() {
        assert_eq!("invalid".parse::<ObisId>(), Err(ObisParseError::MissingChannelSeparator));
        assert_eq!("1:2.3.4".parse::<ObisId>(), Err(ObisParseError::MissingMediumSeparator));
        assert_eq!("1-0:1.8".parse::<ObisId>(), Err(ObisParseError::WrongGroupCount));
        assert_eq!("1-0:1.8.0.1".parse::<ObisId>(), Err(ObisParseError::WrongGroupCount));
        assert_eq!("1-0:1.8.256".parse::<ObisId>(), Err(ObisParseError::InvalidGroup));
    }

    #[test]
    fn test_accessors() {
        let id = ObisId::new(0, 1, 24, 2, 1);
        assert_eq!(id.medium(), 0);
        assert_eq!(id.channel(), 1);
        assert_eq!(id.indicator(), 24);
        assert_eq!(id.mode(), 2);
        assert_eq!(id.tariff(), 1);
        assert_eq!(id.previous(), OMITTED);
    }
}
