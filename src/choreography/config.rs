use crate::axis::axis::Transition;
use crate::dynamics::filter::DynamicConstants;
use crate::foundation::core::CHANNEL_COUNT;
use crate::foundation::error::{ChoreoError, ChoreoResult};
use crate::interp::knn::ControlPoint;
use crate::value::model::ValueShape;

/// Declarative configuration for one choreographed attribute.
///
/// Position tuples are conventionally 4-dimensional (one slot per control
/// channel); only the dimensions named in `axes` are consulted during
/// interpolation. `transitions` and `dynamic_constants` are per-axis-slot
/// and may be left empty to take defaults (`smooth`, `{f: 2.25, z: 1, r: 0}`).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSpec {
    /// Attribute name, unique within one choreography (e.g. `"width"`).
    pub attribute: String,
    /// Control channel indices this attribute reads, in query order.
    pub axes: Vec<usize>,
    /// Transition style per axis slot; empty for all-`smooth`.
    #[serde(default)]
    pub transitions: Vec<Transition>,
    /// Smoothing constants per axis slot; empty for defaults. Accepts the
    /// legacy `dynamicContants` spelling.
    #[serde(default, alias = "dynamicContants")]
    pub dynamic_constants: Vec<DynamicConstants>,
    /// Scattered interpolation samples; values must share one shape.
    pub control_points: Vec<ControlPoint>,
}

impl AttributeSpec {
    /// Validate the configuration, failing fast on the first problem.
    pub fn validate(&self) -> ChoreoResult<()> {
        if self.attribute.trim().is_empty() {
            return Err(ChoreoError::config("attribute name must be non-empty"));
        }
        if self.axes.is_empty() {
            return Err(ChoreoError::config(format!(
                "attribute {:?} must read at least one axis",
                self.attribute
            )));
        }
        for &channel in &self.axes {
            if channel >= CHANNEL_COUNT {
                return Err(ChoreoError::config(format!(
                    "attribute {:?} references channel {channel}, valid range is 0..{CHANNEL_COUNT}",
                    self.attribute
                )));
            }
        }
        if !self.transitions.is_empty() && self.transitions.len() != self.axes.len() {
            return Err(ChoreoError::config(format!(
                "attribute {:?} declares {} transitions for {} axes",
                self.attribute,
                self.transitions.len(),
                self.axes.len()
            )));
        }
        if !self.dynamic_constants.is_empty()
            && self.dynamic_constants.len() != self.axes.len()
        {
            return Err(ChoreoError::config(format!(
                "attribute {:?} declares {} dynamic constants for {} axes",
                self.attribute,
                self.dynamic_constants.len(),
                self.axes.len()
            )));
        }
        for constants in &self.dynamic_constants {
            constants.validate()?;
        }
        if self.control_points.is_empty() {
            return Err(ChoreoError::config(format!(
                "attribute {:?} needs at least one control point",
                self.attribute
            )));
        }

        let needed = self.axes.iter().copied().max().unwrap_or(0) + 1;
        let shape = self.value_shape()?;
        for (i, point) in self.control_points.iter().enumerate() {
            if point.position.len() < needed {
                return Err(ChoreoError::config(format!(
                    "attribute {:?} control point {i} has {} position dimensions, needs {needed}",
                    self.attribute,
                    point.position.len()
                )));
            }
            if point.position.as_slice().iter().any(|p| !p.is_finite()) {
                return Err(ChoreoError::config(format!(
                    "attribute {:?} control point {i} has a non-finite position",
                    self.attribute
                )));
            }
            let point_shape = point.value.shape();
            if point_shape != shape {
                return Err(ChoreoError::config(format!(
                    "attribute {:?} control point {i} has value shape {point_shape}, expected {shape}",
                    self.attribute
                )));
            }
        }
        Ok(())
    }

    /// The uniform value shape of this attribute's control points.
    pub fn value_shape(&self) -> ChoreoResult<ValueShape> {
        self.control_points
            .first()
            .map(|p| p.value.shape())
            .ok_or_else(|| {
                ChoreoError::config(format!(
                    "attribute {:?} needs at least one control point",
                    self.attribute
                ))
            })
    }

    /// Transition style for an axis slot, defaulting to `smooth`.
    pub fn transition_for(&self, slot: usize) -> Transition {
        self.transitions
            .get(slot)
            .copied()
            .unwrap_or(Transition::Smooth)
    }

    /// Smoothing constants for an axis slot, defaulting per the filter.
    pub fn constants_for(&self, slot: usize) -> DynamicConstants {
        self.dynamic_constants
            .get(slot)
            .copied()
            .unwrap_or_default()
    }

    /// Control-point coordinates projected onto one control channel.
    pub fn projected_positions(&self, channel: usize) -> Vec<f64> {
        self.control_points
            .iter()
            .map(|p| p.position.get(channel).unwrap_or(0.0))
            .collect()
    }
}
