use folio_core::constants::*;
use folio_core::tube::{orbit_offset, TubeField};
use glam::Vec3;

// Hold time at zero so the head target is stationary; orbit_offset(0, 0) is
// (0, ORBIT_RADIUS, 0), so a mouse at -that cancels it exactly.

#[test]
fn field_starts_at_origin() {
    let field = TubeField::new();
    assert_eq!(field.mouse, Vec3::ZERO);
    for c in 0..TUBE_COUNT {
        for p in field.chain_positions(c) {
            assert_eq!(p, Vec3::ZERO);
        }
    }
}

#[test]
fn mouse_eases_toward_target() {
    let mut field = TubeField::new();
    let target = Vec3::new(4.0, -2.0, 0.0);
    field.step(target, 0.0);
    assert!((field.mouse - target * MOUSE_SMOOTHING).length() < 1e-6);
    let before = field.mouse.distance(target);
    field.step(target, 0.0);
    assert!(field.mouse.distance(target) < before);
}

#[test]
fn head_converges_to_mouse_plus_orbit() {
    let mut field = TubeField::new();
    let target = Vec3::new(2.0, 1.0, 0.0);
    for _ in 0..400 {
        field.step(target, 0.0);
    }
    assert!(field.mouse.distance(target) < 1e-3);
    for i in 0..TUBE_COUNT {
        let expect = target + orbit_offset(i, 0.0);
        assert!(
            field.head(i).distance(expect) < 1e-3,
            "chain {i} head did not settle"
        );
    }
}

#[test]
fn chain_contracts_to_fixed_configuration() {
    let mut field = TubeField::new();
    let target = Vec3::new(3.0, -1.5, 0.0);
    for _ in 0..600 {
        field.step(target, 0.0);
    }
    // At steady state every trailing gap has fallen inside the dead zone and
    // a further step moves nothing measurably.
    let snapshot: Vec<Vec3> = field.chain_positions(0).collect();
    for w in snapshot.windows(2) {
        assert!(
            w[0].distance(w[1]) <= DEAD_ZONE + 1e-3,
            "gap above dead zone at steady state"
        );
    }
    field.step(target, 0.0);
    for (a, b) in field.chain_positions(0).zip(snapshot.iter()) {
        assert!(a.distance(*b) < 1e-3, "field still moving at steady state");
    }
}

#[test]
fn trailing_point_inside_dead_zone_stays_put() {
    let mut field = TubeField::new();
    // Park the head exactly on its target: mouse cancels the orbit offset.
    let mouse = -orbit_offset(0, 0.0);
    field.mouse = mouse;
    field.chains[0].points[1].position = Vec3::new(0.05, 0.0, 0.0);
    field.chains[0].points[2].position = Vec3::new(0.3, 0.0, 0.0);
    field.step(mouse, 0.0);
    assert_eq!(field.chains[0].points[0].position, Vec3::ZERO);
    // 0.05 from the head: frozen
    assert_eq!(
        field.chains[0].points[1].position,
        Vec3::new(0.05, 0.0, 0.0)
    );
    // 0.25 from its predecessor: closes FOLLOW_GAIN of the gap
    let moved = field.chains[0].points[2].position;
    assert!((moved.x - (0.3 - 0.25 * FOLLOW_GAIN)).abs() < 1e-6);
    assert!(field.chains[0].points[2].velocity.x < 0.0);
}

#[test]
fn orbit_offsets_differ_per_chain_and_stay_on_radius() {
    for i in 0..TUBE_COUNT {
        let o = orbit_offset(i, 1.25);
        assert!((o.truncate().length() - ORBIT_RADIUS).abs() < 1e-6);
        assert_eq!(o.z, 0.0);
    }
    assert!(orbit_offset(0, 1.0).distance(orbit_offset(1, 1.0)) > 1e-3);
}

#[test]
fn field_never_diverges_under_moving_target() {
    let mut field = TubeField::new();
    for frame in 0..1000 {
        let t = frame as f32 / 60.0;
        let target = Vec3::new((t * 3.0).sin() * 5.0, (t * 2.0).cos() * 3.0, 0.0);
        field.step(target, t);
    }
    let bound = 5.0 + 3.0 + ORBIT_RADIUS + 1.0;
    for c in 0..TUBE_COUNT {
        for p in field.chain_positions(c) {
            assert!(p.length() < bound, "chain escaped the target envelope");
        }
    }
}

#[test]
fn chain_vertices_fade_toward_tail() {
    let mut field = TubeField::new();
    for _ in 0..50 {
        field.step(Vec3::new(1.0, 1.0, 0.0), 0.5);
    }
    let verts = field.chain_vertices(2, [0.0, 1.0, 1.0]);
    assert_eq!(verts.len(), POINTS_PER_TUBE);
    assert!((verts[0].color[3] - 0.7).abs() < 1e-6);
    for w in verts.windows(2) {
        assert!(w[1].color[3] < w[0].color[3]);
    }
}
