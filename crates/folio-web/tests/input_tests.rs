// Host-side tests for pure input mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn ndc_centre_and_corners() {
    assert_eq!(pointer_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    // top-left of the viewport is (-1, 1) with y up
    assert_eq!(pointer_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(
        pointer_ndc(800.0, 600.0, 800.0, 600.0),
        Vec2::new(1.0, -1.0)
    );
}

#[test]
fn ndc_clamps_out_of_viewport_events() {
    let v = pointer_ndc(-50.0, 900.0, 800.0, 600.0);
    assert_eq!(v, Vec2::new(-1.0, -1.0));
}

#[test]
fn ndc_degenerate_viewport_is_safe() {
    assert_eq!(pointer_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
}

#[test]
fn card_uv_covers_the_bounds() {
    assert_eq!(card_uv(0.0, 0.0, 200.0, 100.0), (0.0, 0.0));
    assert_eq!(card_uv(200.0, 100.0, 200.0, 100.0), (1.0, 1.0));
    assert_eq!(card_uv(100.0, 50.0, 200.0, 100.0), (0.5, 0.5));
}

#[test]
fn card_uv_clamps_stale_events() {
    assert_eq!(card_uv(-5.0, 120.0, 200.0, 100.0), (0.0, 1.0));
    assert_eq!(card_uv(1.0, 1.0, 0.0, 0.0), (0.5, 0.5));
}
