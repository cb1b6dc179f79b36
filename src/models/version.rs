use crate::error::ModeError;

/// QR Code Model 2 symbol version (1-40)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

/// Version bucket that selects a character count field width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionClass {
    /// Versions 1-9
    Low = 0,
    /// Versions 10-26
    Mid = 1,
    /// Versions 27-40
    High = 2,
}

impl Version {
    /// Smallest Model 2 version
    pub const MIN: Version = Version(1);
    /// Largest Model 2 version
    pub const MAX: Version = Version(40);

    /// Validate a raw version number
    pub fn new(number: u32) -> Result<Self, ModeError> {
        if !(1..=40).contains(&number) {
            if cfg!(debug_assertions) && crate::debug::debug_enabled() {
                eprintln!("DEBUG: Rejected version {} (expected 1..=40)", number);
            }
            return Err(ModeError::InvalidVersion(number));
        }
        Ok(Version(number as u8))
    }

    /// Get the version number (1-40)
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub const fn size(self) -> usize {
        4 * (self.0 as usize) + 17
    }

    /// Count field bucket for this version
    pub const fn class(self) -> VersionClass {
        if self.0 <= 9 {
            VersionClass::Low
        } else if self.0 <= 26 {
            VersionClass::Mid
        } else {
            VersionClass::High
        }
    }
}

impl TryFrom<u8> for Version {
    type Error = ModeError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Version::new(number as u32)
    }
}

impl VersionClass {
    /// Index into a mode's count width triple
    pub const fn index(self) -> usize {
        self as usize
    }
}
