//! QR data mode table
//!
//! Mode indicators and character count field widths for the five data modes,
//! per ISO/IEC 18004:2006 section 6.4.1, tables 2 and 3:
//! - Numeric: digits 0-9
//! - Alphanumeric: 0-9, A-Z, space, $%*+-./:
//! - Byte: 8-bit data
//! - ECI: Extended Channel Interpretation designator (no count field)
//! - Kanji: Shift JIS double-byte characters

use core::fmt;

use crate::error::ModeError;
use crate::models::Version;

/// Width of the mode indicator in bits
pub const INDICATOR_LEN: usize = 4;

/// QR data mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    /// Mode 0001
    Numeric,
    /// Mode 0010
    Alphanumeric,
    /// Mode 0100
    Byte,
    /// Mode 0111
    Eci,
    /// Mode 1000
    Kanji,
}

impl ModeKind {
    /// Every mode, in table order
    pub const ALL: [ModeKind; 5] = [
        ModeKind::Numeric,
        ModeKind::Alphanumeric,
        ModeKind::Byte,
        ModeKind::Eci,
        ModeKind::Kanji,
    ];
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModeKind::Numeric => "numeric",
            ModeKind::Alphanumeric => "alphanumeric",
            ModeKind::Byte => "byte",
            ModeKind::Eci => "ECI",
            ModeKind::Kanji => "kanji",
        };
        f.write_str(name)
    }
}

/// Immutable descriptor for one data mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode {
    kind: ModeKind,
    bits: u8,
    count_bits: [u8; 3],
}

const NUMERIC: Mode = Mode::new(ModeKind::Numeric, 0x1, [10, 12, 14]);
const ALPHANUMERIC: Mode = Mode::new(ModeKind::Alphanumeric, 0x2, [9, 11, 13]);
const BYTE: Mode = Mode::new(ModeKind::Byte, 0x4, [8, 16, 16]);
const ECI: Mode = Mode::new(ModeKind::Eci, 0x7, [0, 0, 0]);
const KANJI: Mode = Mode::new(ModeKind::Kanji, 0x8, [8, 10, 12]);

impl Mode {
    const fn new(kind: ModeKind, bits: u8, count_bits: [u8; 3]) -> Self {
        Self {
            kind,
            bits,
            count_bits,
        }
    }

    /// Descriptor for a mode
    pub const fn for_kind(kind: ModeKind) -> Self {
        match kind {
            ModeKind::Numeric => NUMERIC,
            ModeKind::Alphanumeric => ALPHANUMERIC,
            ModeKind::Byte => BYTE,
            ModeKind::Eci => ECI,
            ModeKind::Kanji => KANJI,
        }
    }

    /// Interpret a 4-bit mode indicator read from a bitstream.
    ///
    /// Indicators outside the supported set (terminator, structured append,
    /// FNC1, Hanzi, anything above 0xF) are rejected rather than mapped to a
    /// default mode.
    pub fn from_bits(bits: u8) -> Result<Self, ModeError> {
        match bits {
            0x1 => Ok(NUMERIC),
            0x2 => Ok(ALPHANUMERIC),
            0x4 => Ok(BYTE),
            0x7 => Ok(ECI),
            0x8 => Ok(KANJI),
            _ => {
                if cfg!(debug_assertions) && crate::debug::debug_enabled() {
                    eprintln!("DEBUG: Unknown mode indicator 0x{:X}", bits);
                }
                Err(ModeError::UnknownIndicator(bits))
            }
        }
    }

    /// Which mode this descriptor describes
    pub const fn kind(&self) -> ModeKind {
        self.kind
    }

    /// The 4-bit indicator written before a segment of this mode
    pub const fn bits(&self) -> u8 {
        self.bits
    }

    /// Count field widths for versions 1-9, 10-26 and 27-40
    pub const fn count_field_widths(&self) -> [u8; 3] {
        self.count_bits
    }

    /// Number of bits used, in a symbol of `version`, to encode the count of
    /// characters that follow in this mode
    pub const fn character_count_bits(&self, version: Version) -> u8 {
        self.count_bits[version.class().index()]
    }

    /// Bits taken by a segment header: indicator plus count field
    pub const fn header_len(&self, version: Version) -> usize {
        INDICATOR_LEN + self.character_count_bits(version) as usize
    }

    /// Largest character count the count field can hold at `version`
    pub const fn max_character_count(&self, version: Version) -> usize {
        (1usize << self.character_count_bits(version)) - 1
    }
}

impl From<ModeKind> for Mode {
    fn from(kind: ModeKind) -> Self {
        Mode::for_kind(kind)
    }
}

/// Descriptor for `kind`
pub const fn descriptor_for(kind: ModeKind) -> Mode {
    Mode::for_kind(kind)
}

/// Count field width for `mode` at a raw version number.
///
/// Returns [`ModeError::InvalidVersion`] for numbers outside 1..=40; the width
/// is never clamped to the nearest bucket.
pub fn character_count_bits(mode: &Mode, version_number: u32) -> Result<u8, ModeError> {
    let version = Version::new(version_number)?;
    Ok(mode.character_count_bits(version))
}

/// The 4-bit indicator to emit for `mode`
pub const fn indicator_bits(mode: &Mode) -> u8 {
    mode.bits()
}
