//! Typed data items of DSMR P1 smart meter telegrams
//!
//! This library describes the lines of a P1 telegram as typed fields: each
//! OBIS id gets its own descriptor that decodes the value part of a line and
//! stores it without heap allocation. Reading the serial port, framing and
//! CRC checks are left to the caller.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod config;
pub mod fields;
pub mod obis_utils;
pub mod parser;

// Re-export common types for easier access
pub use fields::{AllFields, Descriptor, Entry, FieldSet, Visitor, VisitorMut};
pub use obis_utils::ObisId;
pub use parser::{ErrorKind, ParseError};
