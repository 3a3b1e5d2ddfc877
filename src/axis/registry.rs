use std::collections::BTreeMap;

use crate::axis::axis::{Axis, AxisId, Transition};
use crate::dynamics::filter::DynamicConstants;
use crate::foundation::core::{CHANNEL_COUNT, MAX_DELTA, MIN_DELTA};
use crate::foundation::error::{ChoreoError, ChoreoResult};

/// Deduplicating map from axis identity to axis instance.
///
/// The registry is an explicit context object: every animation instance
/// (a running sketch, a test) owns its own, so independent instances never
/// share smoothing state. Within one registry, at most one [`Axis`] exists
/// per id; attributes declaring identical axis semantics collapse onto the
/// same instance. Entries are never removed.
#[derive(Debug, Default)]
pub struct AxisRegistry {
    axes: BTreeMap<AxisId, Axis>,
    /// Last raw value seen per channel; seeds newly created axes.
    channels: [f64; CHANNEL_COUNT],
}

impl AxisRegistry {
    /// Create an empty registry with all channels at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or reuse) the axis for the given semantics and return its id.
    pub fn ensure(
        &mut self,
        index: usize,
        transition: Transition,
        constants: DynamicConstants,
        projected_positions: &[f64],
    ) -> ChoreoResult<AxisId> {
        if index >= CHANNEL_COUNT {
            return Err(ChoreoError::config(format!(
                "axis channel {index} out of range (0..{CHANNEL_COUNT})"
            )));
        }
        let axis = Axis::new(
            index,
            transition,
            constants,
            projected_positions,
            self.channels[index],
        )?;
        let id = axis.id().clone();
        self.axes.entry(id.clone()).or_insert(axis);
        Ok(id)
    }

    /// Advance every registered axis by `delta` seconds, exactly once.
    ///
    /// Invalid deltas (non-finite or non-positive) are rejected with a
    /// warning; valid deltas are clamped to `[`[`MIN_DELTA`]`, `[`MAX_DELTA`]`]`.
    #[tracing::instrument(skip(self), fields(axes = self.axes.len()))]
    pub fn update_axes(&mut self, delta: f64) {
        if !delta.is_finite() || delta <= 0.0 {
            tracing::warn!(delta, "ignoring invalid frame delta");
            return;
        }
        let delta = delta.clamp(MIN_DELTA, MAX_DELTA);
        for axis in self.axes.values_mut() {
            axis.update(delta);
        }
    }

    /// Broadcast a raw control value to every axis listening on `channel`.
    ///
    /// Axes with different transition styles or constants on the same
    /// channel each receive the value and diverge in their smoothed output.
    pub fn update_axes_value(&mut self, channel: usize, value: f64) -> ChoreoResult<()> {
        if channel >= CHANNEL_COUNT {
            return Err(ChoreoError::config(format!(
                "channel {channel} out of range (0..{CHANNEL_COUNT})"
            )));
        }
        if !value.is_finite() {
            return Err(ChoreoError::value(format!(
                "control value for channel {channel} must be finite, got {value}"
            )));
        }
        self.channels[channel] = value;
        for axis in self.axes.values_mut() {
            if axis.index() == channel {
                axis.update_value(value);
            }
        }
        Ok(())
    }

    /// Current smoothed value of the axis with the given id.
    pub fn value_of(&self, id: &AxisId) -> Option<f64> {
        self.axes.get(id).map(Axis::value)
    }

    /// The axis with the given id.
    pub fn get(&self, id: &AxisId) -> Option<&Axis> {
        self.axes.get(id)
    }

    /// Number of distinct registered axes.
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Whether no axes are registered yet.
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/axis/registry.rs"]
mod tests;
