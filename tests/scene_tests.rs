// Host-side tests for the mesh scene simulation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod scene {
    include!("../src/core/scene.rs");
}

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::*;

fn make_scene(count: usize, seed: u64) -> MeshScene {
    let mut rng = StdRng::seed_from_u64(seed);
    MeshScene::new(count, &mut rng)
}

#[test]
fn node_count_is_constant_across_steps() {
    let mut scene = make_scene(NODE_COUNT, 1);
    for _ in 0..200 {
        scene.step();
        assert_eq!(scene.nodes.len(), NODE_COUNT);
    }
}

#[test]
fn nodes_stay_within_wrap_margin() {
    let mut scene = make_scene(NODE_COUNT, 7);
    for _ in 0..2000 {
        scene.step();
        for (i, node) in scene.nodes.iter().enumerate() {
            assert!(
                node.pos.x >= -WRAP_MARGIN && node.pos.x <= 1.0 + WRAP_MARGIN,
                "node {i} x out of bounds: {}",
                node.pos.x
            );
            assert!(
                node.pos.y >= -WRAP_MARGIN && node.pos.y <= 1.0 + WRAP_MARGIN,
                "node {i} y out of bounds: {}",
                node.pos.y
            );
        }
    }
}

#[test]
fn wrap_invariant_holds_for_empty_and_single_node_scenes() {
    for count in [0, 1] {
        let mut scene = make_scene(count, 3);
        for _ in 0..100 {
            scene.step();
        }
        assert_eq!(scene.nodes.len(), count);
        assert!(scene.connections.is_empty());
    }
}

#[test]
fn fast_node_wraps_to_opposite_edge() {
    let mut scene = make_scene(1, 0);
    scene.nodes[0].pos = Vec2::new(1.0 + WRAP_MARGIN - 0.001, 0.5);
    scene.nodes[0].vel = Vec2::new(0.01, 0.0);
    // Park the pointer far away so attraction does not interfere.
    scene.pointer.current = Vec2::new(-10.0, -10.0);
    scene.pointer.target = scene.pointer.current;
    scene.step();
    assert!(
        (scene.nodes[0].pos.x - -WRAP_MARGIN).abs() < 1e-6,
        "expected wrap to the left margin, got {}",
        scene.nodes[0].pos.x
    );
}

#[test]
fn connections_match_pairwise_distances() {
    let mut scene = make_scene(12, 42);
    scene.step();
    // Re-derive the expected set from positions alone.
    let mut expected = 0usize;
    for i in 0..scene.nodes.len() {
        for j in (i + 1)..scene.nodes.len() {
            let d = scene.nodes[i].pos.distance(scene.nodes[j].pos);
            if d < CONNECTION_DISTANCE {
                expected += 1;
            }
        }
    }
    assert_eq!(scene.connections.len(), expected);
    for conn in &scene.connections {
        let d = conn.a.distance(conn.b);
        assert!(d < CONNECTION_DISTANCE);
        assert!((conn.alpha - (1.0 - d / CONNECTION_DISTANCE)).abs() < 1e-6);
        assert!(conn.alpha > 0.0 && conn.alpha <= 1.0);
    }
}

#[test]
fn connection_count_never_exceeds_pair_bound() {
    // Cram all nodes together so every pair connects.
    let mut scene = make_scene(10, 9);
    for node in &mut scene.nodes {
        node.pos = Vec2::new(0.5, 0.5);
    }
    scene.rebuild_connections();
    assert_eq!(scene.connections.len(), 10 * 9 / 2);

    // Spread them far apart: no pair connects.
    for (i, node) in scene.nodes.iter_mut().enumerate() {
        node.pos = Vec2::new(i as f32 * 10.0, 0.0);
    }
    scene.rebuild_connections();
    assert!(scene.connections.is_empty());
}

#[test]
fn pointer_step_is_exact_lerp() {
    let mut pointer = PointerState {
        current: Vec2::new(0.2, 0.8),
        target: Vec2::new(0.9, 0.1),
    };
    let prev = pointer.current;
    pointer.smooth_step();
    let expected = prev + (pointer.target - prev) * POINTER_SMOOTHING;
    assert!((pointer.current - expected).length() < 1e-7);
}

#[test]
fn pointer_converges_monotonically_without_overshoot() {
    let mut pointer = PointerState {
        current: Vec2::new(0.0, 0.0),
        target: Vec2::new(1.0, 0.5),
    };
    let mut prev_dist = pointer.current.distance(pointer.target);
    for _ in 0..500 {
        let before = pointer.current;
        pointer.smooth_step();
        let dist = pointer.current.distance(pointer.target);
        assert!(dist <= prev_dist, "distance to target increased");
        // The new position lies between the old one and the target.
        assert!((before.x..=pointer.target.x).contains(&pointer.current.x));
        assert!(pointer.current.y >= before.y && pointer.current.y <= pointer.target.y);
        prev_dist = dist;
    }
    assert!(prev_dist < 1e-4);
}

#[test]
fn pulse_stays_within_amplitude_band() {
    let scene = make_scene(5, 11);
    for node in &scene.nodes {
        for step in 0..1000 {
            let p = node.pulse(step as f32 * FIXED_STEP);
            assert!((0.7..=1.3).contains(&p));
        }
    }
}

#[test]
fn brightness_peaks_at_pointer_and_floors_far_away() {
    let scene = make_scene(1, 2);
    let node = &scene.nodes[0];
    assert!((node.brightness(node.pos) - 1.0).abs() < 1e-6);
    let far = node.pos + Vec2::new(5.0, 0.0);
    assert!((node.brightness(far) - 0.4).abs() < 1e-6);
}

#[test]
fn time_advances_by_fixed_step() {
    let mut scene = make_scene(3, 4);
    assert_eq!(scene.time, 0.0);
    scene.step();
    assert!((scene.time - FIXED_STEP).abs() < 1e-7);
    for _ in 0..99 {
        scene.step();
    }
    assert!((scene.time - 100.0 * FIXED_STEP).abs() < 1e-4);
}
