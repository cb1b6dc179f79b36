//! RustQR mode table - QR data mode indicators and count field widths
//!
//! Every segment of a QR bitstream starts with a 4-bit mode indicator followed
//! by a character count field whose width depends on the symbol version. This
//! crate holds that table for the numeric, alphanumeric, byte, ECI and Kanji
//! modes, for use by encoders packing segments and decoders unpacking them.
//!
//! ```
//! use rust_qr_modes::{ModeKind, Version, descriptor_for};
//!
//! let byte = descriptor_for(ModeKind::Byte);
//! assert_eq!(byte.bits(), 0x4);
//! assert_eq!(byte.character_count_bits(Version::new(15).unwrap()), 16);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod debug;
/// Contract violation errors
pub mod error;
/// Data mode table (indicators, count field widths)
pub mod modes;
/// Core data structures (Version)
pub mod models;

pub use error::ModeError;
pub use models::{Version, VersionClass};
pub use modes::{
    INDICATOR_LEN, Mode, ModeKind, character_count_bits, descriptor_for, indicator_bits,
};
