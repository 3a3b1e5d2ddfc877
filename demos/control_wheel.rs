//! Drives two choreographed attributes from sinusoidal control sweeps and
//! prints the values the render callback sees each frame.
//!
//! Run with `cargo run --example control_wheel`.

use std::cell::RefCell;
use std::rc::Rc;

use choreo::{
    AttributeSpec, AxisRegistry, ChoreoError, ChoreoResult, Choreography, CONTROL_MAX, Scene,
};

const FRAME: f64 = 1.0 / 60.0;
const FRAMES: u64 = 240;

fn main() -> ChoreoResult<()> {
    tracing_subscriber::fmt().init();

    let specs: Vec<AttributeSpec> = serde_json::from_str(
        r##"[
            {
                "attribute": "radius",
                "axes": [0],
                "controlPoints": [
                    { "position": [0, 0, 0, 0], "value": 12.0 },
                    { "position": [64, 0, 0, 0], "value": 80.0 },
                    { "position": [127, 0, 0, 0], "value": 240.0 }
                ]
            },
            {
                "attribute": "tint",
                "axes": [0, 1],
                "transitions": ["smooth", "threshold"],
                "controlPoints": [
                    { "position": [0, 0, 0, 0], "value": "#14093d" },
                    { "position": [127, 0, 0, 0], "value": "#ff1493" },
                    { "position": [0, 127, 0, 0], "value": "#0fb8ad" },
                    { "position": [127, 127, 0, 0], "value": "#fff6d5" }
                ]
            }
        ]"##,
    )
    .map_err(|e| ChoreoError::config(e.to_string()))?;

    let mut registry = AxisRegistry::new();
    let frame = Rc::new(RefCell::new(0u64));
    let frame_view = Rc::clone(&frame);

    let mut scene = Scene::new("control-wheel");
    scene.push(Choreography::new(&specs, &mut registry, move |values| {
        let frame = *frame_view.borrow();
        if frame % 12 != 0 {
            return;
        }
        let radius = values.scalar("radius").unwrap_or_default();
        let tint = values
            .color("tint")
            .map(|c| c.to_hex())
            .unwrap_or_default();
        println!("frame {frame:>3}  radius {radius:>8.3}  tint {tint}");
    })?);

    for n in 0..FRAMES {
        *frame.borrow_mut() = n;
        let t = n as f64 * FRAME;

        // Two slow wheels, out of phase, swept over the raw control range.
        let wheel_a = (t * 0.7 * std::f64::consts::TAU).sin() * 0.5 + 0.5;
        let wheel_b = (t * 0.23 * std::f64::consts::TAU).cos() * 0.5 + 0.5;
        registry.update_axes_value(0, wheel_a * CONTROL_MAX)?;
        registry.update_axes_value(1, wheel_b * CONTROL_MAX)?;

        registry.update_axes(FRAME);
        scene.update(&registry)?;
    }

    Ok(())
}
