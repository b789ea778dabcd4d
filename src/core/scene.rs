use glam::Vec2;
use rand::prelude::*;

// All positions live in normalized surface space: [0,1] x [0,1] with the
// origin at the top-left, independent of canvas pixel dimensions.

/// Default size of the node batch. Kept modest so the O(n^2) connection scan
/// stays cheap (<= C(40,2) = 780 pairs per frame).
pub const NODE_COUNT: usize = 40;

/// Nominal per-frame time increment. The simulation deliberately advances by
/// a fixed step rather than wall-clock time, matching a 60 Hz display.
pub const FIXED_STEP: f32 = 0.016;

/// Pairs closer than this (normalized units) are drawn as connections.
pub const CONNECTION_DISTANCE: f32 = 0.15;

/// Pointer lerp factor per frame; a simple low-pass, not a spring.
pub const POINTER_SMOOTHING: f32 = 0.05;

/// Nodes wrap to the opposite edge once they drift past this margin, so they
/// re-enter the surface smoothly instead of popping at the border.
pub const WRAP_MARGIN: f32 = 0.05;

/// Radius of the pointer attraction field, normalized units.
pub const ATTRACT_RADIUS: f32 = 0.3;

/// Attraction force coefficient; scales linearly with pointer proximity.
pub const ATTRACT_STRENGTH: f32 = 0.0001;

/// Amplitude of the per-node sinusoidal drift added onto the base velocity.
pub const DRIFT_AMPLITUDE: f32 = 0.0002;

/// A drifting particle of the mesh. Created once at scene construction and
/// mutated every frame; never destroyed.
#[derive(Clone, Debug)]
pub struct MeshNode {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Visual radius in logical pixels, before pulsing and DPR scaling.
    pub size: f32,
    /// Phase offset desynchronizing this node's oscillation from the others.
    pub phase: f32,
    /// Per-node speed multiplier for the oscillation term.
    pub speed: f32,
}

impl MeshNode {
    /// Pulsing size multiplier, oscillating 1.0 +/- 0.3.
    pub fn pulse(&self, time: f32) -> f32 {
        (time * 2.0 + self.phase).sin() * 0.3 + 1.0
    }

    /// Sprite brightness: a 0.4 base, boosted up to 1.0 near the pointer.
    pub fn brightness(&self, pointer: Vec2) -> f32 {
        0.4 + (0.6 - pointer.distance(self.pos) * 2.0).max(0.0)
    }
}

/// An ephemeral link between two nearby nodes. Rebuilt from scratch every
/// frame; holds plain endpoint copies, never references into the node batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: Vec2,
    pub b: Vec2,
    /// 1 at zero distance, fading to 0 at `CONNECTION_DISTANCE`.
    pub alpha: f32,
}

/// Smoothed pointer position plus the latest raw target written by input
/// events. Input writes are last-value-wins; the frame step consumes them.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub current: Vec2,
    pub target: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        let center = Vec2::splat(0.5);
        Self {
            current: center,
            target: center,
        }
    }
}

impl PointerState {
    /// One smoothing step: move 5% of the remaining way toward the target.
    /// Converges monotonically and never overshoots.
    pub fn smooth_step(&mut self) {
        self.current += (self.target - self.current) * POINTER_SMOOTHING;
    }
}

/// The whole mutable state of the background animation. Owned by one frame
/// loop; nothing else holds references into it.
pub struct MeshScene {
    pub nodes: Vec<MeshNode>,
    pub connections: Vec<Connection>,
    pub pointer: PointerState,
    pub time: f32,
}

impl MeshScene {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let nodes = (0..count)
            .map(|_| MeshNode {
                pos: Vec2::new(rng.gen::<f32>(), rng.gen::<f32>()),
                vel: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * 0.0003,
                    (rng.gen::<f32>() - 0.5) * 0.0003,
                ),
                size: rng.gen::<f32>() * 3.0 + 1.5,
                phase: rng.gen::<f32>() * std::f32::consts::TAU,
                speed: rng.gen::<f32>() * 0.5 + 0.5,
            })
            .collect();
        Self {
            nodes,
            connections: Vec::with_capacity(count * (count.saturating_sub(1)) / 2),
            pointer: PointerState::default(),
            time: 0.0,
        }
    }

    /// Advance the simulation by one fixed step: smooth the pointer, move
    /// every node, and rebuild the connection list.
    pub fn step(&mut self) {
        self.time += FIXED_STEP;
        self.pointer.smooth_step();

        let pointer = self.pointer.current;
        for node in &mut self.nodes {
            // Gentle floating drift on top of the base velocity. The y term
            // runs at 0.7x speed so the path traces a slow Lissajous figure.
            node.pos.x += node.vel.x + (self.time * node.speed + node.phase).sin() * DRIFT_AMPLITUDE;
            node.pos.y +=
                node.vel.y + (self.time * node.speed * 0.7 + node.phase).cos() * DRIFT_AMPLITUDE;

            let offset = pointer - node.pos;
            let dist = offset.length();
            if dist < ATTRACT_RADIUS {
                node.pos += offset * ((ATTRACT_RADIUS - dist) * ATTRACT_STRENGTH);
            }

            // Wrap, never clamp: a node drifting off one edge re-enters from
            // the opposite one.
            if node.pos.x < -WRAP_MARGIN {
                node.pos.x = 1.0 + WRAP_MARGIN;
            }
            if node.pos.x > 1.0 + WRAP_MARGIN {
                node.pos.x = -WRAP_MARGIN;
            }
            if node.pos.y < -WRAP_MARGIN {
                node.pos.y = 1.0 + WRAP_MARGIN;
            }
            if node.pos.y > 1.0 + WRAP_MARGIN {
                node.pos.y = -WRAP_MARGIN;
            }
        }

        self.rebuild_connections();
    }

    /// O(n^2) proximity scan over all pairs, `i < j` order. Insertion order
    /// is also draw order; no further sorting happens downstream.
    pub fn rebuild_connections(&mut self) {
        self.connections.clear();
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let dist = self.nodes[i].pos.distance(self.nodes[j].pos);
                if dist < CONNECTION_DISTANCE {
                    self.connections.push(Connection {
                        a: self.nodes[i].pos,
                        b: self.nodes[j].pos,
                        alpha: 1.0 - dist / CONNECTION_DISTANCE,
                    });
                }
            }
        }
    }
}
