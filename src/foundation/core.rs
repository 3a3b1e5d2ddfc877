use crate::foundation::error::{ChoreoError, ChoreoResult};

/// Number of raw control channels exposed by the host (MIDI-like CC inputs).
pub const CHANNEL_COUNT: usize = 4;

/// Lowest raw value a control channel can carry.
pub const CONTROL_MIN: f64 = 0.0;

/// Highest raw value a control channel can carry.
pub const CONTROL_MAX: f64 = 127.0;

/// Largest frame delta (seconds) accepted per tick; guards tab-suspend gaps.
pub const MAX_DELTA: f64 = 0.16;

/// Smallest positive frame delta (seconds); smaller deltas are floored.
pub const MIN_DELTA: f64 = 1e-6;

/// Distance below which an axis counts as settled on its target.
pub const SETTLE_EPSILON: f64 = 1e-6;

/// Fixed-length vector of `f64` components.
///
/// The length is immutable after creation and every elementwise binary
/// operation requires equal-length operands, failing with
/// [`ChoreoError::Value`] otherwise.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct VecN(Vec<f64>);

impl VecN {
    /// Build a zero-filled vector of the given length.
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    /// Build a vector from its components.
    pub fn from_components(components: impl Into<Vec<f64>>) -> Self {
        Self(components.into())
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has zero components.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Component at `index`, if present.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Components as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    fn check_len(&self, other: &Self, op: &str) -> ChoreoResult<()> {
        if self.0.len() != other.0.len() {
            return Err(ChoreoError::value(format!(
                "{op} requires equal lengths, got {} and {}",
                self.0.len(),
                other.0.len()
            )));
        }
        Ok(())
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Self) -> ChoreoResult<Self> {
        self.check_len(other, "add")?;
        Ok(Self(
            self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect(),
        ))
    }

    /// Elementwise difference.
    pub fn sub(&self, other: &Self) -> ChoreoResult<Self> {
        self.check_len(other, "sub")?;
        Ok(Self(
            self.0.iter().zip(&other.0).map(|(a, b)| a - b).collect(),
        ))
    }

    /// Elementwise product.
    pub fn mul(&self, other: &Self) -> ChoreoResult<Self> {
        self.check_len(other, "mul")?;
        Ok(Self(
            self.0.iter().zip(&other.0).map(|(a, b)| a * b).collect(),
        ))
    }

    /// Every component multiplied by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self(self.0.iter().map(|a| a * factor).collect())
    }

    /// Linear interpolation toward `other` with factor `t`.
    pub fn lerp(&self, other: &Self, t: f64) -> ChoreoResult<Self> {
        self.check_len(other, "lerp")?;
        Ok(Self(
            self.0
                .iter()
                .zip(&other.0)
                .map(|(a, b)| a + (b - a) * t)
                .collect(),
        ))
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Self) -> ChoreoResult<f64> {
        self.check_len(other, "distance")?;
        Ok(self
            .0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt())
    }
}
