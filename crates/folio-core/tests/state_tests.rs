use folio_core::state::{pointer_to_world, Camera};
use glam::Vec2;

#[test]
fn cameras_match_the_page_setup() {
    let bg = Camera::background(16.0 / 9.0);
    assert_eq!(bg.eye.z, 8.0);
    assert!((bg.fovy_radians - 60.0f32.to_radians()).abs() < 1e-6);

    let fx = Camera::tube_overlay(16.0 / 9.0);
    assert_eq!(fx.eye.z, 5.0);
    assert!((fx.fovy_radians - 75.0f32.to_radians()).abs() < 1e-6);
}

#[test]
fn viewport_extent_follows_fov_and_aspect() {
    let cam = Camera::tube_overlay(2.0);
    let extent = cam.viewport_extent();
    let expect_h = 2.0 * 5.0 * (cam.fovy_radians * 0.5).tan();
    assert!((extent.y - expect_h).abs() < 1e-4);
    assert!((extent.x - expect_h * 2.0).abs() < 1e-4);
}

#[test]
fn pointer_maps_to_half_extent_at_the_edges() {
    let cam = Camera::tube_overlay(1.5);
    let extent = cam.viewport_extent();

    let centre = pointer_to_world(Vec2::ZERO, &cam);
    assert_eq!(centre, glam::Vec3::ZERO);

    let corner = pointer_to_world(Vec2::new(1.0, 1.0), &cam);
    assert!((corner.x - extent.x * 0.5).abs() < 1e-4);
    assert!((corner.y - extent.y * 0.5).abs() < 1e-4);
    assert_eq!(corner.z, 0.0);

    let left = pointer_to_world(Vec2::new(-1.0, 0.0), &cam);
    assert!((left.x + extent.x * 0.5).abs() < 1e-4);
}

#[test]
fn matrices_are_finite_and_invertible() {
    let cam = Camera::background(1.0);
    let vp = cam.projection_matrix() * cam.view_matrix();
    assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    assert!(vp.determinant().abs() > 1e-9);
}
