use std::collections::BTreeMap;
use std::fmt;

use crate::foundation::error::{ChoreoError, ChoreoResult};
use crate::value::color::Rgb;

/// A typed attribute value: scalar, vector, keyed map, or color.
///
/// The variant is decided once, at construction, and stays structurally
/// stable for the lifetime of whatever owns it. Smoothing and interpolation
/// share one code path by flattening a value to an ordered component slice
/// ([`Value::components`]) and rebuilding it ([`Value::from_components`]);
/// colors decode to RGB `f64` triples on the way out and re-encode with
/// round-to-nearest and clamp on the way back.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A single number.
    Scalar(f64),
    /// An ordered list of numbers; the length is part of the shape.
    Vector(Vec<f64>),
    /// Named scalar channels; the key set is part of the shape.
    Keyed(BTreeMap<String, f64>),
    /// A 6-hex-digit color.
    Color(Rgb),
}

/// Structural shape of a [`Value`], used for uniformity and drift checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueShape {
    /// A single number.
    Scalar,
    /// A vector of the given length.
    Vector(usize),
    /// A keyed map with exactly these keys (sorted).
    Keyed(Vec<String>),
    /// An RGB color.
    Color,
}

impl Value {
    /// The structural shape of this value.
    pub fn shape(&self) -> ValueShape {
        match self {
            Self::Scalar(_) => ValueShape::Scalar,
            Self::Vector(v) => ValueShape::Vector(v.len()),
            Self::Keyed(m) => ValueShape::Keyed(m.keys().cloned().collect()),
            Self::Color(_) => ValueShape::Color,
        }
    }

    /// The scalar payload, when this value is a scalar.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    /// Flatten to an ordered component list (keyed maps in key order,
    /// colors as RGB `f64` triples).
    pub fn components(&self) -> Vec<f64> {
        match self {
            Self::Scalar(v) => vec![*v],
            Self::Vector(v) => v.clone(),
            Self::Keyed(m) => m.values().copied().collect(),
            Self::Color(c) => c.channels_f64().to_vec(),
        }
    }

    /// Rebuild a value of `shape` from an ordered component list.
    pub fn from_components(shape: &ValueShape, components: &[f64]) -> ChoreoResult<Self> {
        if components.len() != shape.component_len() {
            return Err(ChoreoError::value(format!(
                "shape {shape} expects {} components, got {}",
                shape.component_len(),
                components.len()
            )));
        }
        Ok(match shape {
            ValueShape::Scalar => Self::Scalar(components[0]),
            ValueShape::Vector(_) => Self::Vector(components.to_vec()),
            ValueShape::Keyed(keys) => Self::Keyed(
                keys.iter()
                    .cloned()
                    .zip(components.iter().copied())
                    .collect(),
            ),
            ValueShape::Color => Self::Color(Rgb::from_channels_f64([
                components[0],
                components[1],
                components[2],
            ])),
        })
    }

    /// A zero-valued result of the given shape (black for colors).
    pub fn zero(shape: &ValueShape) -> Self {
        let zeros = vec![0.0; shape.component_len()];
        // Component count matches by construction.
        Self::from_components(shape, &zeros).unwrap_or(Self::Scalar(0.0))
    }
}

impl ValueShape {
    /// Number of scalar components a value of this shape flattens to.
    pub fn component_len(&self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vector(len) => *len,
            Self::Keyed(keys) => keys.len(),
            Self::Color => 3,
        }
    }
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Vector(len) => write!(f, "vector[{len}]"),
            Self::Keyed(keys) => write!(f, "keyed[{}]", keys.join(",")),
            Self::Color => write!(f, "color"),
        }
    }
}

impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Scalar(v) => serializer.serialize_f64(*v),
            Self::Vector(v) => v.serialize(serializer),
            Self::Keyed(m) => m.serialize(serializer),
            Self::Color(c) => serializer.serialize_str(&c.to_hex()),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Hex(String),
            Arr(Vec<f64>),
            Map(BTreeMap<String, f64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(v) => Ok(Self::Scalar(v)),
            Repr::Hex(s) => Rgb::parse_hex(&s)
                .map(Self::Color)
                .map_err(serde::de::Error::custom),
            Repr::Arr(v) => Ok(Self::Vector(v)),
            Repr::Map(m) => Ok(Self::Keyed(m)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/model.rs"]
mod tests;
