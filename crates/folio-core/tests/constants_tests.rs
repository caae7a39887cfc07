// Sanity checks on the tuning constants and their relationships.

use folio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_weights_keep_the_chains_contracting() {
    // Every per-frame weight below one, so each step is a contraction
    assert!(MOUSE_SMOOTHING > 0.0 && MOUSE_SMOOTHING < 1.0);
    assert!(HEAD_LERP > 0.0 && HEAD_LERP < 1.0);
    assert!(FOLLOW_GAIN > 0.0 && FOLLOW_GAIN < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tube_geometry_is_well_formed() {
    assert!(POINTS_PER_TUBE > 1);
    assert_eq!(TUBE_COUNT, TUBE_COLORS.len());
    assert_eq!(TUBE_COUNT, HEAD_LIGHT_COLORS.len());
    // The dead zone must sit well inside the orbit radius or the chains
    // would freeze mid-gesture
    assert!(DEAD_ZONE > 0.0 && DEAD_ZONE < ORBIT_RADIUS);
    assert!(ORBIT_RATE > 0.0 && CHAIN_PHASE_STEP > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shape_rates_are_positive_and_slow_for_particles() {
    for r in ICOSA_ROT.iter().chain(TORUS_ROT.iter()).chain(OCTA_ROT.iter()) {
        assert!(*r > 0.0 && *r <= 1.0);
    }
    // The particle cloud drifts far slower than any shape spins
    assert!(PARTICLE_ROT[0] < ICOSA_ROT.iter().fold(f32::MAX, |a, b| a.min(*b)));
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_SPREAD > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_constants_are_within_reasonable_bounds() {
    assert!(TILT_MAX_DEG > 0.0 && TILT_MAX_DEG < 90.0);
    assert!(CARD_REVEAL_STEP_MS > 0);
    assert!(BG_CAMERA_Z > TUBE_CAMERA_Z);
    assert!(BG_CAMERA_FOVY_DEG < TUBE_CAMERA_FOVY_DEG);
}
