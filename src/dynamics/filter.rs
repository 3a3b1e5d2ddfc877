use std::f64::consts::PI;

use crate::foundation::core::MIN_DELTA;
use crate::foundation::error::{ChoreoError, ChoreoResult};
use crate::value::model::{Value, ValueShape};

/// Tuning constants for the second-order filter.
///
/// `f` is the natural frequency (how fast the system reacts), `z` the damping
/// ratio (`1` is critically damped), and `r` the responsiveness to target
/// velocity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DynamicConstants {
    /// Natural frequency in Hz; must be finite and `> 0`.
    pub f: f64,
    /// Damping ratio; must be finite and `>= 0`.
    pub z: f64,
    /// Responsiveness to target velocity; must be finite.
    pub r: f64,
}

impl Default for DynamicConstants {
    fn default() -> Self {
        Self {
            f: 2.25,
            z: 1.0,
            r: 0.0,
        }
    }
}

impl DynamicConstants {
    /// Validate the constants' numeric domain.
    pub fn validate(&self) -> ChoreoResult<()> {
        if !self.f.is_finite() || self.f <= 0.0 {
            return Err(ChoreoError::config(format!(
                "dynamic constant f must be finite and > 0, got {}",
                self.f
            )));
        }
        if !self.z.is_finite() || self.z < 0.0 {
            return Err(ChoreoError::config(format!(
                "dynamic constant z must be finite and >= 0, got {}",
                self.z
            )));
        }
        if !self.r.is_finite() {
            return Err(ChoreoError::config(format!(
                "dynamic constant r must be finite, got {}",
                self.r
            )));
        }
        Ok(())
    }

    /// Deterministic fragment used inside axis id strings.
    pub(crate) fn id_fragment(&self) -> String {
        format!("{}-{}-{}", self.f, self.z, self.r)
    }
}

/// Derived integration gains shared by every component filter.
#[derive(Clone, Copy, Debug)]
struct Gains {
    k1: f64,
    k2: f64,
    k3: f64,
    /// Largest stable step; bigger deltas are subdivided.
    t_crit: f64,
}

impl Gains {
    fn derive(constants: DynamicConstants) -> Self {
        let two_pi_f = 2.0 * PI * constants.f;
        let k1 = constants.z / (PI * constants.f);
        let k2 = 1.0 / (two_pi_f * two_pi_f);
        let k3 = constants.r * constants.z / two_pi_f;
        let t_crit = 0.8 * ((4.0 * k2 + k1 * k1).sqrt() - k1);
        Self { k1, k2, k3, t_crit }
    }
}

/// Per-component integration state.
#[derive(Clone, Copy, Debug)]
struct ScalarFilter {
    /// Previous target, for velocity estimation.
    xp: f64,
    /// Simulated position.
    y: f64,
    /// Simulated velocity.
    yd: f64,
}

impl ScalarFilter {
    fn new(x0: f64) -> Self {
        Self {
            xp: x0,
            y: x0,
            yd: 0.0,
        }
    }

    fn step(&mut self, t: f64, x: f64, xd: Option<f64>, gains: Gains) -> f64 {
        let xd = match xd {
            Some(v) => v,
            None => {
                let estimate = (x - self.xp) / t;
                self.xp = x;
                estimate
            }
        };

        // Subdivide steps larger than the critical step for stability.
        let iterations = (t / gains.t_crit).ceil().max(1.0) as usize;
        let dt = t / iterations as f64;
        for _ in 0..iterations {
            self.y += dt * self.yd;
            self.yd += dt * (x + gains.k3 * xd - self.y - gains.k1 * self.yd) / gains.k2;
        }
        self.y
    }
}

/// Critically-dampable second-order smoothing of a [`Value`] toward a moving
/// target.
///
/// The filter integrates the spring ODE `y'' = (x + k3·x' − y − k1·y') / k2`
/// with semi-implicit Euler. Composite values (vectors, keyed maps, colors)
/// advance one independent scalar filter per component, all with the same
/// step in the same call. The value's shape is fixed at construction;
/// updating with a differently-shaped target is a logged no-op that returns
/// the last stable output.
#[derive(Clone, Debug)]
pub struct SecondOrderDynamics {
    gains: Gains,
    shape: ValueShape,
    filters: Vec<ScalarFilter>,
}

impl SecondOrderDynamics {
    /// Build a filter at rest on `initial`, with the given constants.
    pub fn new(initial: &Value, constants: DynamicConstants) -> ChoreoResult<Self> {
        constants.validate()?;
        let shape = initial.shape();
        let filters = initial
            .components()
            .into_iter()
            .map(ScalarFilter::new)
            .collect();
        Ok(Self {
            gains: Gains::derive(constants),
            shape,
            filters,
        })
    }

    /// Build a scalar filter at rest on `initial`.
    pub fn new_scalar(initial: f64, constants: DynamicConstants) -> ChoreoResult<Self> {
        Self::new(&Value::Scalar(initial), constants)
    }

    /// The shape this filter was constructed for.
    pub fn shape(&self) -> &ValueShape {
        &self.shape
    }

    /// The last computed output without advancing.
    pub fn current(&self) -> Value {
        let components: Vec<f64> = self.filters.iter().map(|f| f.y).collect();
        Value::from_components(&self.shape, &components).unwrap_or(Value::Scalar(0.0))
    }

    /// Advance one step of size `delta` seconds toward `target`, estimating
    /// the target velocity from the previous input.
    pub fn update(&mut self, delta: f64, target: &Value) -> Value {
        self.update_with_velocity(delta, target, None)
    }

    /// Advance one step with an explicitly supplied target velocity.
    pub fn update_with_velocity(
        &mut self,
        delta: f64,
        target: &Value,
        target_velocity: Option<&Value>,
    ) -> Value {
        if target.shape() != self.shape {
            tracing::debug!(
                expected = %self.shape,
                got = %target.shape(),
                "target shape drifted; holding last stable value"
            );
            return self.current();
        }
        if let Some(velocity) = target_velocity {
            if velocity.shape() != self.shape {
                tracing::debug!(
                    expected = %self.shape,
                    got = %velocity.shape(),
                    "velocity shape drifted; holding last stable value"
                );
                return self.current();
            }
        }

        let t = delta.max(MIN_DELTA);
        let targets = target.components();
        let velocities = target_velocity.map(Value::components);
        for (i, filter) in self.filters.iter_mut().enumerate() {
            let xd = velocities.as_ref().map(|v| v[i]);
            filter.step(t, targets[i], xd, self.gains);
        }
        self.current()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dynamics/filter.rs"]
mod tests;
