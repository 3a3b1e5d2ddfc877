use std::fmt;

use crate::dynamics::filter::{DynamicConstants, SecondOrderDynamics};
use crate::foundation::core::{CHANNEL_COUNT, SETTLE_EPSILON};
use crate::foundation::error::{ChoreoError, ChoreoResult};
use crate::value::model::Value;

/// How an axis tracks its raw control channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// Continuously eased toward the clamped control value.
    Smooth,
    /// Snapped down to a configured position, then eased.
    Threshold,
    /// Snapped down to a configured position, applied instantaneously.
    Steps,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Smooth => write!(f, "smooth"),
            Self::Threshold => write!(f, "threshold"),
            Self::Steps => write!(f, "steps"),
        }
    }
}

/// Deterministic identity of an axis; the dedup key in the registry.
///
/// Two attributes declaring the same channel, transition style, smoothing
/// constants, and control-point projection produce the same id and therefore
/// share one axis and one smoothing state.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AxisId(String);

impl AxisId {
    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, shared scalar animation channel.
///
/// An axis owns the smoothing state for one `(channel, transition,
/// constants, positions)` combination. Raw control values set its target via
/// [`Axis::update_value`]; the per-tick [`Axis::update`] advances the eased
/// current value toward that target.
#[derive(Clone, Debug)]
pub struct Axis {
    index: usize,
    transition: Transition,
    /// Distinct projected positions, ascending; used for threshold snapping.
    snap_points: Vec<f64>,
    min: f64,
    max: f64,
    dynamics: Option<SecondOrderDynamics>,
    value: f64,
    target: f64,
    id: AxisId,
}

impl Axis {
    /// Build an axis for `index`, seeded from `initial_control` (the last
    /// raw value seen on the channel). `projected_positions` are the control
    /// points' coordinates along this channel.
    pub fn new(
        index: usize,
        transition: Transition,
        constants: DynamicConstants,
        projected_positions: &[f64],
        initial_control: f64,
    ) -> ChoreoResult<Self> {
        if index >= CHANNEL_COUNT {
            return Err(ChoreoError::config(format!(
                "axis channel {index} out of range (0..{CHANNEL_COUNT})"
            )));
        }
        if projected_positions.is_empty() {
            return Err(ChoreoError::config(
                "axis needs at least one projected control-point position",
            ));
        }
        if projected_positions.iter().any(|p| !p.is_finite()) {
            return Err(ChoreoError::config(
                "axis positions must all be finite numbers",
            ));
        }
        constants.validate()?;

        let min = projected_positions.iter().copied().fold(f64::INFINITY, f64::min);
        let max = projected_positions
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        let mut snap_points = projected_positions.to_vec();
        snap_points.sort_by(f64::total_cmp);
        snap_points.dedup();

        let id = match transition {
            Transition::Smooth => format!(
                "axis-{index}-{transition}-{}-{min}-{max}",
                constants.id_fragment()
            ),
            Transition::Threshold | Transition::Steps => {
                let joined = projected_positions
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join("-");
                format!("axis-{index}-{transition}-{}-{joined}", constants.id_fragment())
            }
        };

        let mut axis = Self {
            index,
            transition,
            snap_points,
            min,
            max,
            dynamics: None,
            value: 0.0,
            target: 0.0,
            id: AxisId(id),
        };

        // Seed through the snap/clamp logic so value starts within bounds
        // and already settled on its target.
        axis.update_value(initial_control);
        axis.value = axis.target;
        if transition != Transition::Steps {
            axis.dynamics = Some(SecondOrderDynamics::new_scalar(axis.value, constants)?);
        }
        Ok(axis)
    }

    /// The raw control channel this axis listens on.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The transition style.
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// The deduplicating identity.
    pub fn id(&self) -> &AxisId {
        &self.id
    }

    /// Current smoothed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current target value.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Smallest projected position.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest projected position.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Set the target from a raw control value.
    ///
    /// `Smooth` axes clamp to `[min, max]`; `Threshold` and `Steps` axes
    /// snap down to the largest configured position not above the clamped
    /// control value, defaulting to the smallest position. `Steps` axes also
    /// apply the target immediately.
    pub fn update_value(&mut self, control: f64) {
        if !control.is_finite() {
            tracing::warn!(control, axis = %self.id, "ignoring non-finite control value");
            return;
        }
        let clamped = control.clamp(self.min, self.max);
        self.target = match self.transition {
            Transition::Smooth => clamped,
            Transition::Threshold | Transition::Steps => {
                match self.snap_points.partition_point(|p| *p <= clamped) {
                    0 => self.snap_points[0],
                    i => self.snap_points[i - 1],
                }
            }
        };
        if self.transition == Transition::Steps {
            self.value = self.target;
        }
    }

    /// Advance the smoothed value by `delta` seconds toward the target.
    ///
    /// Skips the filter entirely once the value is within [`SETTLE_EPSILON`]
    /// of the target.
    pub fn update(&mut self, delta: f64) -> f64 {
        if (self.value - self.target).abs() < SETTLE_EPSILON {
            self.value = self.target;
            return self.value;
        }
        if let Some(dynamics) = &mut self.dynamics {
            let eased = dynamics.update(delta, &Value::Scalar(self.target));
            self.value = eased
                .as_scalar()
                .unwrap_or(self.value)
                .clamp(self.min, self.max);
        }
        self.value
    }
}

#[cfg(test)]
#[path = "../../tests/unit/axis/axis.rs"]
mod tests;
