use crate::axis::axis::AxisId;
use crate::axis::registry::AxisRegistry;
use crate::choreography::config::AttributeSpec;
use crate::foundation::core::VecN;
use crate::foundation::error::{ChoreoError, ChoreoResult};
use crate::interp::knn::{interpolate, ControlPoint, IdwParams};
use crate::value::model::Value;

/// A live choreographed attribute: its axes, its projected control points,
/// and the value interpolated at the current axis position.
///
/// Control-point positions are projected down to the declared axes once,
/// at construction; per-frame work is a registry lookup per axis followed
/// by one interpolation.
#[derive(Debug)]
pub(crate) struct Attribute {
    name: String,
    axis_ids: Vec<AxisId>,
    points: Vec<ControlPoint>,
    params: IdwParams,
    position: VecN,
    value: Value,
}

impl Attribute {
    /// Build an attribute from its configuration, registering (or reusing)
    /// one axis per declared channel.
    pub(crate) fn new(spec: &AttributeSpec, registry: &mut AxisRegistry) -> ChoreoResult<Self> {
        spec.validate()?;

        let mut axis_ids = Vec::with_capacity(spec.axes.len());
        for (slot, &channel) in spec.axes.iter().enumerate() {
            let id = registry.ensure(
                channel,
                spec.transition_for(slot),
                spec.constants_for(slot),
                &spec.projected_positions(channel),
            )?;
            axis_ids.push(id);
        }

        let points = spec
            .control_points
            .iter()
            .map(|point| {
                let projected: Vec<f64> = spec
                    .axes
                    .iter()
                    .map(|&channel| point.position.get(channel).unwrap_or(0.0))
                    .collect();
                ControlPoint {
                    position: VecN::from_components(projected),
                    value: point.value.clone(),
                }
            })
            .collect::<Vec<_>>();

        // Safe: validate() rejects empty control point sets.
        let value = points
            .first()
            .map(|p| p.value.clone())
            .ok_or_else(|| ChoreoError::config("attribute has no control points"))?;

        Ok(Self {
            name: spec.attribute.clone(),
            axis_ids,
            points,
            params: IdwParams::for_axes(spec.axes.len()),
            position: VecN::zeros(spec.axes.len()),
            value,
        })
    }

    /// Re-read the axes and interpolate the value at their current position.
    pub(crate) fn refresh(&mut self, registry: &AxisRegistry) -> ChoreoResult<()> {
        let mut coordinates = Vec::with_capacity(self.axis_ids.len());
        for id in &self.axis_ids {
            let value = registry.value_of(id).ok_or_else(|| {
                ChoreoError::interpolation(format!(
                    "attribute {:?} references unregistered axis {id}",
                    self.name
                ))
            })?;
            coordinates.push(value);
        }
        self.position = VecN::from_components(coordinates);
        self.value = interpolate(&self.points, &self.position, &self.params)?;
        Ok(())
    }

    /// The attribute's name.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// The most recently interpolated value.
    pub(crate) fn value(&self) -> &Value {
        &self.value
    }
}
