//! Decorative background shapes and the particle cloud.
//!
//! Every transform here is a pure function of elapsed time and per-shape
//! constants, which keeps the whole scene testable without a surface.

use crate::color::palette_color;
use crate::constants::{
    ACCENT_CYAN, ACCENT_MAGENTA, ACCENT_PURPLE, FLOAT_AMPLITUDE, ICOSA_ROT, OCTA_ROT,
    PARTICLE_COUNT, PARTICLE_ROT, PARTICLE_SPREAD, TORUS_ROT,
};
use glam::Vec3;
use rand::prelude::*;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Icosahedron,
    Torus,
    Octahedron,
}

#[derive(Clone, Debug)]
pub struct ShapeDesc {
    pub kind: ShapeKind,
    pub position: Vec3,
    pub color: [f32; 3],
    pub speed: f32,
    /// Distortion factor for the icosahedra; zero for the rigid shapes.
    pub distort: f32,
    /// Bobbing strength of the float wrapper.
    pub float_intensity: f32,
}

impl ShapeDesc {
    /// Euler rotation at elapsed time `t_sec`. Which two axes spin depends on
    /// the kind, matching the per-kind coefficients of the original scene.
    pub fn rotation_at(&self, t_sec: f32) -> Vec3 {
        let s = t_sec * self.speed;
        match self.kind {
            ShapeKind::Icosahedron => Vec3::new(s * ICOSA_ROT[0], s * ICOSA_ROT[1], 0.0),
            ShapeKind::Torus => Vec3::new(s * TORUS_ROT[0], 0.0, s * TORUS_ROT[1]),
            ShapeKind::Octahedron => Vec3::new(0.0, s * OCTA_ROT[0], s * OCTA_ROT[1]),
        }
    }

    /// Vertical bobbing offset of the float wrapper.
    pub fn float_offset(&self, t_sec: f32) -> f32 {
        (t_sec * self.speed).sin() * FLOAT_AMPLITUDE * self.float_intensity
    }

    /// Scalar distortion pulse in `[1 - d/4, 1 + d/4]`.
    pub fn distort_pulse(&self, t_sec: f32) -> f32 {
        1.0 + (t_sec * 2.0).sin() * self.distort * 0.25
    }
}

/// Light descriptors, carried as data; the renderer folds them into the
/// clear color and per-instance glow.
#[derive(Clone, Debug)]
pub enum Light {
    Ambient { intensity: f32 },
    Point { position: Vec3, intensity: f32, color: [f32; 3] },
    Spot { position: Vec3, intensity: f32, color: [f32; 3], angle: f32 },
}

/// Seeded random particle scatter, rotated as one rigid group.
#[derive(Clone, Debug)]
pub struct Particles {
    pub positions: Vec<Vec3>,
}

impl Particles {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = (0..PARTICLE_COUNT)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                )
            })
            .collect();
        Self { positions }
    }

    /// Group rotation at elapsed time `t_sec`.
    pub fn group_rotation_at(t_sec: f32) -> Vec3 {
        Vec3::new(t_sec * PARTICLE_ROT[0], t_sec * PARTICLE_ROT[1], 0.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("shape {index} has non-positive speed {speed}")]
    BadSpeed { index: usize, speed: f32 },
    #[error("shape {index} has distort {distort} outside [0, 1]")]
    BadDistort { index: usize, distort: f32 },
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub shapes: Vec<ShapeDesc>,
    pub lights: Vec<Light>,
    pub particles: Particles,
}

impl Scene {
    /// The layout of the original page: three distorted icosahedra, two tori,
    /// two wireframe octahedra, a particle cloud, and four lights.
    pub fn default_scene(seed: u64) -> Self {
        let cyan = palette_color(ACCENT_CYAN);
        let magenta = palette_color(ACCENT_MAGENTA);
        let purple = palette_color(ACCENT_PURPLE);
        let shape = |kind, position, color, speed, distort, float_intensity| ShapeDesc {
            kind,
            position,
            color,
            speed,
            distort,
            float_intensity,
        };
        let shapes = vec![
            shape(ShapeKind::Icosahedron, Vec3::new(-4.0, 2.0, -3.0), cyan, 1.5, 0.4, 1.0),
            shape(ShapeKind::Icosahedron, Vec3::new(4.0, -1.0, -4.0), magenta, 1.2, 0.3, 1.0),
            shape(ShapeKind::Icosahedron, Vec3::new(0.0, 3.0, -5.0), purple, 1.0, 0.5, 1.0),
            shape(ShapeKind::Torus, Vec3::new(-3.0, -2.0, -2.0), cyan, 0.8, 0.0, 1.5),
            shape(ShapeKind::Torus, Vec3::new(5.0, 1.0, -3.0), magenta, 1.1, 0.0, 1.5),
            shape(ShapeKind::Octahedron, Vec3::new(2.0, -3.0, -4.0), purple, 0.9, 0.0, 1.2),
            shape(ShapeKind::Octahedron, Vec3::new(-5.0, 0.0, -5.0), cyan, 0.7, 0.0, 1.2),
        ];
        let lights = vec![
            Light::Ambient { intensity: 0.2 },
            Light::Point {
                position: Vec3::new(10.0, 10.0, 10.0),
                intensity: 1.0,
                color: cyan,
            },
            Light::Point {
                position: Vec3::new(-10.0, -10.0, -10.0),
                intensity: 0.5,
                color: magenta,
            },
            Light::Spot {
                position: Vec3::new(0.0, 10.0, 0.0),
                intensity: 0.8,
                color: purple,
                angle: 0.5,
            },
        ];
        Self {
            shapes,
            lights,
            particles: Particles::new(seed),
        }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, s) in self.shapes.iter().enumerate() {
            if s.speed <= 0.0 {
                return Err(SceneError::BadSpeed {
                    index,
                    speed: s.speed,
                });
            }
            if !(0.0..=1.0).contains(&s.distort) {
                return Err(SceneError::BadDistort {
                    index,
                    distort: s.distort,
                });
            }
        }
        Ok(())
    }

    /// Total ambient contribution of the light set, used as a clear tint.
    pub fn ambient_level(&self) -> f32 {
        self.lights
            .iter()
            .map(|l| match l {
                Light::Ambient { intensity } => *intensity,
                _ => 0.0,
            })
            .sum()
    }
}
