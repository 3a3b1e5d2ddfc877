use super::*;

const FRAME: f64 = 1.0 / 60.0;
const POSITIONS: [f64; 2] = [0.0, 127.0];

#[test]
fn identical_declarations_share_one_axis() {
    let mut registry = AxisRegistry::new();
    let a = registry
        .ensure(0, Transition::Smooth, DynamicConstants::default(), &POSITIONS)
        .unwrap();
    let b = registry
        .ensure(0, Transition::Smooth, DynamicConstants::default(), &POSITIONS)
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(registry.len(), 1);
}

#[test]
fn differing_declarations_get_their_own_axes() {
    let mut registry = AxisRegistry::new();
    registry
        .ensure(0, Transition::Smooth, DynamicConstants::default(), &POSITIONS)
        .unwrap();
    registry
        .ensure(
            0,
            Transition::Smooth,
            DynamicConstants {
                f: 4.0,
                ..Default::default()
            },
            &POSITIONS,
        )
        .unwrap();
    registry
        .ensure(1, Transition::Smooth, DynamicConstants::default(), &POSITIONS)
        .unwrap();
    assert_eq!(registry.len(), 3);
}

#[test]
fn control_values_broadcast_to_every_listener_on_the_channel() {
    let mut registry = AxisRegistry::new();
    let smooth = registry
        .ensure(0, Transition::Smooth, DynamicConstants::default(), &POSITIONS)
        .unwrap();
    let threshold = registry
        .ensure(
            0,
            Transition::Threshold,
            DynamicConstants::default(),
            &[0.0, 40.0, 80.0, 127.0],
        )
        .unwrap();
    let other_channel = registry
        .ensure(1, Transition::Smooth, DynamicConstants::default(), &POSITIONS)
        .unwrap();

    registry.update_axes_value(0, 100.0).unwrap();
    assert_eq!(registry.get(&smooth).unwrap().target(), 100.0);
    assert_eq!(registry.get(&threshold).unwrap().target(), 80.0);
    assert_eq!(registry.get(&other_channel).unwrap().target(), 0.0);
}

#[test]
fn axes_created_after_a_control_change_seed_from_it() {
    let mut registry = AxisRegistry::new();
    registry.update_axes_value(2, 100.0).unwrap();
    let id = registry
        .ensure(
            2,
            Transition::Threshold,
            DynamicConstants::default(),
            &[0.0, 40.0, 80.0, 127.0],
        )
        .unwrap();
    assert_eq!(registry.value_of(&id), Some(80.0));
}

#[test]
fn invalid_channels_and_values_are_rejected() {
    let mut registry = AxisRegistry::new();
    assert!(matches!(
        registry.update_axes_value(4, 1.0),
        Err(ChoreoError::Config(_))
    ));
    assert!(matches!(
        registry.update_axes_value(0, f64::NAN),
        Err(ChoreoError::Value(_))
    ));
    assert!(registry
        .ensure(9, Transition::Smooth, DynamicConstants::default(), &POSITIONS)
        .is_err());
}

#[test]
fn invalid_deltas_leave_the_axes_untouched() {
    let mut registry = AxisRegistry::new();
    let id = registry
        .ensure(0, Transition::Smooth, DynamicConstants::default(), &POSITIONS)
        .unwrap();
    registry.update_axes_value(0, 64.0).unwrap();

    for delta in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        registry.update_axes(delta);
        assert_eq!(registry.value_of(&id), Some(0.0), "delta {delta}");
    }
    // Two valid ticks: position only starts moving once velocity builds up.
    registry.update_axes(FRAME);
    registry.update_axes(FRAME);
    assert!(registry.value_of(&id).unwrap() > 0.0);
}

#[test]
fn every_axis_advances_once_per_tick() {
    let mut registry = AxisRegistry::new();
    let slow = registry
        .ensure(0, Transition::Smooth, DynamicConstants::default(), &POSITIONS)
        .unwrap();
    let fast = registry
        .ensure(
            0,
            Transition::Smooth,
            DynamicConstants {
                f: 6.0,
                ..Default::default()
            },
            &POSITIONS,
        )
        .unwrap();

    registry.update_axes_value(0, 127.0).unwrap();
    for _ in 0..30 {
        registry.update_axes(FRAME);
    }
    let slow_value = registry.value_of(&slow).unwrap();
    let fast_value = registry.value_of(&fast).unwrap();
    assert!(slow_value > 0.0);
    // Same target, higher natural frequency, further along after half a second.
    assert!(fast_value > slow_value);
}
