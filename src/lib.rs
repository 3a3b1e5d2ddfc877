//! Choreo turns a handful of raw control channels into smoothly animated,
//! multi-dimensional visual attribute values.
//!
//! The crate is the value-computation core of a generative-art toolkit: four
//! virtual MIDI-like control channels (raw values 0–127) drive named, shared
//! axes; each axis eases its raw input through a critically-damped
//! second-order filter; per-element attributes interpolate arbitrary-typed
//! values (scalars, vectors, keyed maps, hex colors) over the live axis
//! positions using K-nearest-neighbor inverse-distance weighting.
//!
//! # Tick pipeline
//!
//! 1. **Broadcast**: [`AxisRegistry::update_axes_value`] feeds a raw control
//!    value to every axis listening on that channel.
//! 2. **Advance**: [`AxisRegistry::update_axes`] steps every distinct axis's
//!    smoothing filter by the elapsed time, exactly once per tick.
//! 3. **Interpolate**: each [`Choreography`] gathers its axes' current values
//!    into a query position and recomputes every attribute via KNN-IDW.
//! 4. **Render**: the caller-supplied render callback runs once per
//!    choreography with the refreshed [`AttributeValues`] view. It is the
//!    only integration point with the outside graphics world.
//!
//! ```no_run
//! # fn main() -> choreo::ChoreoResult<()> {
//! use choreo::{AttributeSpec, AxisRegistry, Choreography, Scene};
//!
//! let specs: Vec<AttributeSpec> = serde_json::from_str(
//!     r##"[{ "attribute": "radius", "axes": [0], "transitions": ["smooth"],
//!            "controlPoints": [ { "position": [0, 0, 0, 0], "value": 10.0 },
//!                               { "position": [127, 0, 0, 0], "value": 240.0 } ] }]"##,
//! ).map_err(|e| choreo::ChoreoError::config(e.to_string()))?;
//!
//! let mut registry = AxisRegistry::new();
//! let mut scene = Scene::new("demo");
//! scene.push(Choreography::new(&specs, &mut registry, |values| {
//!     if let Some(radius) = values.scalar("radius") {
//!         // draw with `radius` ...
//!         let _ = radius;
//!     }
//! })?);
//!
//! // per frame:
//! registry.update_axes_value(0, 96.0)?;
//! registry.update_axes(1.0 / 60.0);
//! scene.update(&registry)?;
//! # Ok(()) }
//! ```
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: interpolation is a pure function of its
//!   inputs; axis ids are stable strings, so identical attribute configs
//!   share one axis and one smoothing state.
//! - **Single-threaded, frame-driven**: every operation completes within the
//!   calling tick. Nothing blocks, awaits, or holds OS resources.
//! - **Degrade, don't stall**: numeric degeneracies and shape drift recover
//!   locally with defined values; only construction fails fast.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod axis;
mod choreography;
mod dynamics;
mod foundation;
mod interp;
mod value;

pub use axis::axis::{Axis, AxisId, Transition};
pub use axis::registry::AxisRegistry;
pub use choreography::config::AttributeSpec;
pub use choreography::stage::{AttributeValues, Choreography, Scene};
pub use dynamics::filter::{DynamicConstants, SecondOrderDynamics};
pub use foundation::core::{
    CHANNEL_COUNT, CONTROL_MAX, CONTROL_MIN, MAX_DELTA, MIN_DELTA, SETTLE_EPSILON, VecN,
};
pub use foundation::error::{ChoreoError, ChoreoResult};
pub use interp::knn::{ControlPoint, IdwParams, interpolate};
pub use value::color::Rgb;
pub use value::model::{Value, ValueShape};
