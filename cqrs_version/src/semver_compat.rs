use crate::ensure::ensure_component;
use crate::error::{Component, OutOfRange};
use crate::Version;
use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SemverError {
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
    #[error("pre-release identifier cannot be represented")]
    PreRelease,
    #[error("build metadata cannot be represented")]
    BuildMetadata,
}

impl From<Version> for semver::Version {
    fn from(value: Version) -> Self {
        semver::Version::new(
            value.major() as u64,
            value.minor() as u64,
            value.revision() as u64,
        )
    }
}

impl TryFrom<&semver::Version> for Version {
    type Error = SemverError;

    fn try_from(value: &semver::Version) -> Result<Self, Self::Error> {
        let major = ensure_component(Component::Major, widen(value.major))?;
        let minor = ensure_component(Component::Minor, widen(value.minor))?;
        let revision = ensure_component(Component::Revision, widen(value.patch))?;
        if !value.pre.is_empty() {
            return Err(SemverError::PreRelease);
        }
        if !value.build.is_empty() {
            return Err(SemverError::BuildMetadata);
        }
        Ok(Version::new(major, minor, revision))
    }
}

impl TryFrom<semver::Version> for Version {
    type Error = SemverError;

    fn try_from(value: semver::Version) -> Result<Self, Self::Error> {
        Version::try_from(&value)
    }
}

// values above i64::MAX are clamped, they are out of range either way
fn widen(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
