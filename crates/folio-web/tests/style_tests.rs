// Host-side tests for pure frontend helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use folio_core::CardTilt;
use style::*;

#[test]
fn hovered_transform_carries_tilt_and_lift() {
    let mut tilt = CardTilt::default();
    tilt.pointer_move(0.0, 0.0); // top-left corner
    let s = card_transform(&tilt);
    assert!(s.starts_with("perspective(800px)"));
    assert!(s.contains("rotateX(15.00deg)"));
    assert!(s.contains("rotateY(-15.00deg)"));
    assert!(s.contains("translateY(-8px)"));
    assert!(s.contains("scale(1.02)"));
}

#[test]
fn rest_transform_is_flat_but_keeps_perspective() {
    let tilt = CardTilt::default();
    let s = card_transform(&tilt);
    assert_eq!(s, "perspective(800px) rotateX(0deg) rotateY(0deg)");
}

#[test]
fn leave_resets_transform_and_glow() {
    let mut tilt = CardTilt::default();
    tilt.pointer_move(0.8, 0.2);
    assert_eq!(glow_opacity(&tilt), 1.0);
    tilt.pointer_leave();
    assert_eq!(glow_opacity(&tilt), 0.0);
    assert_eq!(
        card_transform(&tilt),
        "perspective(800px) rotateX(0deg) rotateY(0deg)"
    );
}

#[test]
fn accent_classes_cover_all_variants() {
    assert_eq!(
        accent_class(folio_core::Accent::Cyan),
        "project-card accent-cyan"
    );
    assert_eq!(
        accent_class(folio_core::Accent::Magenta),
        "project-card accent-magenta"
    );
    assert_eq!(
        accent_class(folio_core::Accent::Purple),
        "project-card accent-purple"
    );
}
