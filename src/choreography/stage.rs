use std::collections::BTreeMap;

use crate::axis::registry::AxisRegistry;
use crate::choreography::attribute::Attribute;
use crate::choreography::config::AttributeSpec;
use crate::foundation::error::{ChoreoError, ChoreoResult};
use crate::value::color::Rgb;
use crate::value::model::Value;

/// A set of choreographed attributes updated together and handed to one
/// render callback per frame.
pub struct Choreography {
    attributes: Vec<Attribute>,
    render: Box<dyn FnMut(&AttributeValues<'_>)>,
}

impl Choreography {
    /// Build a choreography from attribute configurations, registering the
    /// axes they need and installing the render callback.
    ///
    /// Attribute names must be unique within one choreography.
    pub fn new(
        specs: &[AttributeSpec],
        registry: &mut AxisRegistry,
        render: impl FnMut(&AttributeValues<'_>) + 'static,
    ) -> ChoreoResult<Self> {
        let mut attributes = Vec::with_capacity(specs.len());
        for spec in specs {
            if attributes
                .iter()
                .any(|a: &Attribute| a.name() == spec.attribute)
            {
                return Err(ChoreoError::config(format!(
                    "duplicate attribute name {:?}",
                    spec.attribute
                )));
            }
            attributes.push(Attribute::new(spec, registry)?);
        }
        Ok(Self {
            attributes,
            render: Box::new(render),
        })
    }

    /// Refresh every attribute from the registry's current axis values and
    /// invoke the render callback once with the result.
    #[tracing::instrument(skip(self, registry), fields(attributes = self.attributes.len()))]
    pub fn update(&mut self, registry: &AxisRegistry) -> ChoreoResult<()> {
        for attribute in &mut self.attributes {
            attribute.refresh(registry)?;
        }
        let view = AttributeValues {
            attributes: &self.attributes,
        };
        (self.render)(&view);
        Ok(())
    }

    /// A read-only view of the current attribute values.
    pub fn values(&self) -> AttributeValues<'_> {
        AttributeValues {
            attributes: &self.attributes,
        }
    }
}

impl std::fmt::Debug for Choreography {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Choreography")
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

/// Read-only, name-addressed view of a choreography's current values.
///
/// Handed to the render callback each frame; the typed accessors return
/// `None` when the attribute is missing or holds a different shape.
#[derive(Clone, Copy, Debug)]
pub struct AttributeValues<'a> {
    attributes: &'a [Attribute],
}

impl AttributeValues<'_> {
    /// The raw value of the named attribute.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|a| a.name() == name)
            .map(Attribute::value)
    }

    /// The named attribute as a scalar.
    pub fn scalar(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            Value::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    /// The named attribute as a vector.
    pub fn vector(&self, name: &str) -> Option<&[f64]> {
        match self.get(name)? {
            Value::Vector(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// The named attribute as a keyed map.
    pub fn keyed(&self, name: &str) -> Option<&BTreeMap<String, f64>> {
        match self.get(name)? {
            Value::Keyed(m) => Some(m),
            _ => None,
        }
    }

    /// The named attribute as a color.
    pub fn color(&self, name: &str) -> Option<Rgb> {
        match self.get(name)? {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Attribute names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(Attribute::name)
    }

    /// Number of attributes in the view.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the view holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// A named group of choreographies that can be paused and resumed as a unit.
///
/// A paused scene skips attribute refresh and render entirely; the axes it
/// reads keep advancing in the registry, so resuming picks up the present
/// control state rather than replaying the gap.
pub struct Scene {
    name: String,
    choreographies: Vec<Choreography>,
    paused: bool,
}

impl Scene {
    /// Create an empty, active scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            choreographies: Vec::new(),
            paused: false,
        }
    }

    /// Add a choreography to the scene.
    pub fn push(&mut self, choreography: Choreography) {
        self.choreographies.push(choreography);
    }

    /// Update every choreography in the scene; a no-op while paused.
    pub fn update(&mut self, registry: &AxisRegistry) -> ChoreoResult<()> {
        if self.paused {
            return Ok(());
        }
        for choreography in &mut self.choreographies {
            choreography.update(registry)?;
        }
        Ok(())
    }

    /// Stop updating until [`Scene::resume`].
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume updating.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Whether the scene is currently paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The scene's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("choreographies", &self.choreographies.len())
            .field("paused", &self.paused)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/stage.rs"]
mod tests;
