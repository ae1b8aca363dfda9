//! Build-time settings.
//!
//! Sub-meters hang off the electricity meter on an M-Bus channel that ends
//! up as the B group of their OBIS ids (`0-1:24.2.1` is gas on channel 1).
//! The channels below are the usual assignment; installations that wire
//! them differently set `DSMR_GAS_MBUS_ID`, `DSMR_WATER_MBUS_ID`,
//! `DSMR_THERMAL_MBUS_ID` or `DSMR_SUB_MBUS_ID` when building.

pub const GAS_MBUS_ID: u8 = mbus_id(option_env!("DSMR_GAS_MBUS_ID"), 1);
pub const WATER_MBUS_ID: u8 = mbus_id(option_env!("DSMR_WATER_MBUS_ID"), 2);
pub const THERMAL_MBUS_ID: u8 = mbus_id(option_env!("DSMR_THERMAL_MBUS_ID"), 3);
pub const SUB_MBUS_ID: u8 = mbus_id(option_env!("DSMR_SUB_MBUS_ID"), 4);

const fn mbus_id(setting: Option<&str>, default: u8) -> u8 {
    match setting {
        Some(text) => parse_u8(text),
        None => default,
    }
}

// Evaluated at compile time, so a bad setting fails the build
const fn parse_u8(text: &str) -> u8 {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        panic!("M-Bus channel setting is empty");
    }

    let mut value: u16 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            panic!("M-Bus channel setting must be a decimal number");
        }
        value = value * 10 + (b - b'0') as u16;
        if value > u8::MAX as u16 {
            panic!("M-Bus channel setting must be at most 255");
        }
        i += 1;
    }
    value as u8
}
