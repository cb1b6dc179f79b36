//! Errors raised when a caller hands the mode table a value outside its domain.

use core::fmt;

/// Contract violations rejected by the mode table.
///
/// Both variants carry the offending input so the caller can see exactly
/// which value was refused. Nothing is clamped or defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeError {
    /// Symbol version outside 1..=40.
    InvalidVersion(u32),
    /// A 4-bit mode indicator that names none of the supported modes.
    UnknownIndicator(u8),
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidVersion(v) => {
                write!(f, "invalid QR version {}: expected 1..=40", v)
            }
            Self::UnknownIndicator(bits) => {
                write!(f, "unknown QR mode indicator 0x{:X}", bits)
            }
        }
    }
}

impl std::error::Error for ModeError {}
