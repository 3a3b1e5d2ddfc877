use crate::foundation::core::VecN;
use crate::foundation::error::{ChoreoError, ChoreoResult};
use crate::value::model::Value;

/// One interpolation sample: a position in axis space and the value there.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlPoint {
    /// Coordinates in the (projected) axis position space.
    pub position: VecN,
    /// The value this sample carries; all points in one set share a shape.
    pub value: Value,
}

/// Weighting parameters for KNN inverse-distance interpolation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IdwParams {
    /// Exponent applied to distances when weighting.
    pub power: f64,
    /// Exact-match threshold and weight regularizer.
    pub epsilon: f64,
    /// Number of nearest neighbors consulted.
    pub k: usize,
}

impl Default for IdwParams {
    fn default() -> Self {
        Self {
            power: 2.0,
            epsilon: 1e-6,
            k: 3,
        }
    }
}

impl IdwParams {
    /// Default parameters for a query of `axes` dimensions (`k = axes + 2`).
    pub fn for_axes(axes: usize) -> Self {
        Self {
            k: axes + 2,
            ..Self::default()
        }
    }
}

/// Interpolate a value at `query` from scattered control points.
///
/// A pure function of its inputs: distances are Euclidean in the projected
/// position space, the `k` nearest neighbors (stable sort; ties keep
/// control-point order) are weighted by `1 / (distance + epsilon)^power`,
/// and the weighted component sums are normalized by the total weight.
/// A neighbor closer than `epsilon` short-circuits to its exact value; a
/// total weight of zero degenerates to a zero value of the matching shape.
pub fn interpolate(
    points: &[ControlPoint],
    query: &VecN,
    params: &IdwParams,
) -> ChoreoResult<Value> {
    let Some(first) = points.first() else {
        return Err(ChoreoError::interpolation("control point set is empty"));
    };
    let shape = first.value.shape();

    let mut ranked: Vec<(f64, usize)> = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        let point_shape = point.value.shape();
        if point_shape != shape {
            return Err(ChoreoError::interpolation(format!(
                "control point {i} has shape {point_shape}, expected {shape}"
            )));
        }
        ranked.push((query.distance_to(&point.position)?, i));
    }

    // Stable: equidistant points keep their original order.
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    let k = params.k.max(1).min(ranked.len());
    let (nearest_distance, nearest_index) = ranked[0];
    if nearest_distance < params.epsilon {
        return Ok(points[nearest_index].value.clone());
    }

    let mut accumulated = vec![0.0; shape.component_len()];
    let mut total_weight = 0.0;
    for &(distance, index) in &ranked[..k] {
        let weight = 1.0 / (distance + params.epsilon).powf(params.power);
        let components = points[index].value.components();
        for (acc, component) in accumulated.iter_mut().zip(&components) {
            *acc += component * weight;
        }
        total_weight += weight;
    }

    if total_weight == 0.0 {
        return Ok(Value::zero(&shape));
    }
    for acc in &mut accumulated {
        *acc /= total_weight;
    }
    Value::from_components(&shape, &accumulated)
}

#[cfg(test)]
#[path = "../../tests/unit/interp/knn.rs"]
mod tests;
