use core::fmt::{Display, Formatter};
use thiserror::Error;

/// One of the three numeric parts of a [Version](crate::Version).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Component {
    Major,
    Minor,
    Revision,
}

/// Construction precondition violated: a component was outside of `min..=max`.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("{component} must be in range {min}..={max}, got {value}")]
pub struct OutOfRange {
    pub component: Component,
    pub value: i64,
    pub min: i64,
    pub max: i64,
}

impl Component {
    pub const fn name(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Revision => "revision",
        }
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_component_and_value() {
        let err = OutOfRange {
            component: Component::Minor,
            value: -3,
            min: 0,
            max: 10,
        };
        assert_eq!(err.to_string(), "minor must be in range 0..=10, got -3");
    }
}
