#![cfg_attr(not(any(feature = "std", test)), no_std)]

use core::fmt::{Debug, Display, Formatter};

pub mod ensure;
pub mod error;
#[cfg(feature = "semver")]
mod semver_compat;

use ensure::ensure_component;
pub use error::{Component, OutOfRange};

#[cfg(feature = "semver")]
pub use semver;
#[cfg(feature = "semver")]
pub use semver_compat::SemverError;

/// Three-component version: major, minor and revision.
///
/// Immutable once constructed. Equality, hashing and ordering consider all three components,
/// ordering is lexicographic starting from major.
/// Textual form is always `major.minor.revision`, there is intentionally no parser for it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Version {
    // field order defines the derived ordering
    major: u32,
    minor: u32,
    revision: u32,
}

impl Version {
    pub const ZERO: Version = Version::new(0, 0, 0);

    pub const fn new(major: u32, minor: u32, revision: u32) -> Self {
        Version {
            major,
            minor,
            revision,
        }
    }

    /// Same as `new(major, minor, 0)`.
    pub const fn new_major_minor(major: u32, minor: u32) -> Self {
        Version::new(major, minor, 0)
    }

    /// Validates every component to be within `0..=u32::MAX`.
    /// The first offending component is reported, checked in order major, minor, revision.
    pub fn try_new(major: i64, minor: i64, revision: i64) -> Result<Self, OutOfRange> {
        Ok(Version {
            major: ensure_component(Component::Major, major)?,
            minor: ensure_component(Component::Minor, minor)?,
            revision: ensure_component(Component::Revision, revision)?,
        })
    }

    /// Same as `try_new(major, minor, 0)`.
    pub fn try_new_major_minor(major: i64, minor: i64) -> Result<Self, OutOfRange> {
        Version::try_new(major, minor, 0)
    }

    pub const fn major(&self) -> u32 {
        self.major
    }

    pub const fn minor(&self) -> u32 {
        self.minor
    }

    pub const fn revision(&self) -> u32 {
        self.revision
    }

    /// Hash that does not depend on the process or the hasher implementation,
    /// suitable for storing alongside serialized data.
    /// Equal versions always produce equal values.
    pub const fn stable_hash(&self) -> u32 {
        const MIX: u32 = 397;
        let mut acc = self.major;
        acc = acc.wrapping_mul(MIX) ^ self.minor;
        acc = acc.wrapping_mul(MIX) ^ self.revision;
        acc
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::ZERO
    }
}

impl From<(u32, u32, u32)> for Version {
    fn from((major, minor, revision): (u32, u32, u32)) -> Self {
        Version::new(major, minor, revision)
    }
}

impl From<(u32, u32)> for Version {
    fn from((major, minor): (u32, u32)) -> Self {
        Version::new_major_minor(major, minor)
    }
}

impl TryFrom<(i64, i64, i64)> for Version {
    type Error = OutOfRange;

    fn try_from((major, minor, revision): (i64, i64, i64)) -> Result<Self, Self::Error> {
        Version::try_new(major, minor, revision)
    }
}

impl TryFrom<(i64, i64)> for Version {
    type Error = OutOfRange;

    fn try_from((major, minor): (i64, i64)) -> Result<Self, Self::Error> {
        Version::try_new_major_minor(major, minor)
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

impl Debug for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self)
    }
}
