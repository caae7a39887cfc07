//! Cursor-following point chains.
//!
//! Each tube is a fixed-length chain of (position, velocity) points. The
//! shared `mouse` position eases toward the pointer target, each chain head
//! eases toward the mouse plus a per-chain circular orbit, and every trailing
//! point closes a fixed fraction of the gap to its predecessor once the gap
//! exceeds a small dead zone. All weights are below one, so for a held target
//! the whole field contracts to a fixed configuration.

use crate::constants::{
    CHAIN_PHASE_STEP, DEAD_ZONE, FOLLOW_GAIN, HEAD_LERP, MOUSE_SMOOTHING, ORBIT_RADIUS,
    ORBIT_RATE, POINTS_PER_TUBE, TUBE_COUNT,
};
use glam::Vec3;

#[derive(Clone, Copy, Debug, Default)]
pub struct TubePoint {
    pub position: Vec3,
    pub velocity: Vec3,
}

#[derive(Clone, Debug)]
pub struct TubeChain {
    pub points: [TubePoint; POINTS_PER_TUBE],
}

impl Default for TubeChain {
    fn default() -> Self {
        Self {
            points: [TubePoint::default(); POINTS_PER_TUBE],
        }
    }
}

/// All chains plus the shared smoothed mouse position.
///
/// Chains start at the origin on construction and carry no state beyond the
/// point arrays; dropping the field discards everything.
#[derive(Clone, Debug, Default)]
pub struct TubeField {
    pub mouse: Vec3,
    pub chains: [TubeChain; TUBE_COUNT],
}

/// Head oscillation offset for chain `index` at time `t_sec`.
pub fn orbit_offset(index: usize, t_sec: f32) -> Vec3 {
    let phase = t_sec * ORBIT_RATE + index as f32 * CHAIN_PHASE_STEP;
    Vec3::new(phase.sin(), phase.cos(), 0.0) * ORBIT_RADIUS
}

impl TubeField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every chain one frame toward `target` (world space, z = 0).
    ///
    /// The update is intentionally per-frame rather than dt-scaled: the
    /// weights were tuned against a display-rate loop and double as the
    /// contraction factors the convergence tests rely on.
    pub fn step(&mut self, target: Vec3, t_sec: f32) {
        self.mouse = self.mouse.lerp(target, MOUSE_SMOOTHING);
        for (i, chain) in self.chains.iter_mut().enumerate() {
            let head_target = self.mouse + orbit_offset(i, t_sec);
            chain.points[0].position = chain.points[0].position.lerp(head_target, HEAD_LERP);
            for p in 1..POINTS_PER_TUBE {
                let prev = chain.points[p - 1].position;
                let point = &mut chain.points[p];
                if point.position.distance(prev) > DEAD_ZONE {
                    point.velocity = (prev - point.position) * FOLLOW_GAIN;
                    point.position += point.velocity;
                }
            }
        }
    }

    /// Positions of chain `index`, head first.
    pub fn chain_positions(&self, index: usize) -> impl Iterator<Item = Vec3> + '_ {
        self.chains[index].points.iter().map(|p| p.position)
    }

    /// Head position of chain `index`, where the matching light sits.
    pub fn head(&self, index: usize) -> Vec3 {
        self.chains[index].points[0].position
    }

    /// Fill one chain's strip vertices for the renderer, head first, fading
    /// out toward the tail.
    pub fn chain_vertices(&self, index: usize, color: [f32; 3]) -> [TubeVertex; POINTS_PER_TUBE] {
        let mut out = [TubeVertex::default(); POINTS_PER_TUBE];
        for (i, (v, p)) in out
            .iter_mut()
            .zip(self.chains[index].points.iter())
            .enumerate()
        {
            let fade = 1.0 - i as f32 / POINTS_PER_TUBE as f32;
            v.position = p.position.to_array();
            v.color = [color[0], color[1], color[2], 0.7 * fade];
        }
        out
    }
}

/// One vertex of a tube line strip, laid out for direct GPU upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TubeVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}
