//! Range preconditions checked while constructing a [Version](crate::Version).

use crate::error::{Component, OutOfRange};

/// Returns `value` unchanged if it lies within `min..=max`.
pub const fn ensure_range(
    component: Component,
    value: i64,
    min: i64,
    max: i64,
) -> Result<i64, OutOfRange> {
    if value < min || value > max {
        return Err(OutOfRange {
            component,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Checks that `value` fits a version component (`0..=u32::MAX`) and narrows it.
pub fn ensure_component(component: Component, value: i64) -> Result<u32, OutOfRange> {
    match ensure_range(component, value, 0, u32::MAX as i64) {
        Ok(value) => Ok(value as u32),
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                component = e.component.name(),
                value = e.value,
                "rejected version component"
            );
            Err(e)
        }
    }
}
