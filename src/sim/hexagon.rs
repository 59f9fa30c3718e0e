//! Rotating hexagon geometry
//!
//! The container is a regular hexagon given by center, circumradius, and a
//! rotation angle. Vertices and edges are cheap to recompute, so every query
//! derives them fresh; nothing persists between ticks except the rotation
//! angle itself.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_3;

use crate::polar_to_cartesian;

/// Number of sides of the container polygon
pub const HEX_SIDES: usize = 6;

/// A wall segment between two consecutive hexagon vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Unit normal pointing away from the hexagon interior.
    ///
    /// Valid for edges wound counter-clockwise (increasing vertex angle):
    /// the interior lies to the left of the edge direction, so the outward
    /// side is the right-hand perpendicular. Collision response derives its
    /// contact normal from the closest-point vector instead, which stays
    /// correct when the ball center passes an edge near a vertex.
    pub fn outward_normal(&self) -> Vec2 {
        let d = self.end - self.start;
        Vec2::new(d.y, -d.x).normalize_or_zero()
    }
}

/// The rotating container
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hexagon {
    pub center: Vec2,
    /// Circumradius (center to vertex)
    pub radius: f32,
    /// Rotation in radians; unbounded, wraps implicitly via trig
    pub rotation: f32,
}

impl Hexagon {
    pub fn new(center: Vec2, radius: f32, rotation: f32) -> Self {
        Self {
            center,
            radius,
            rotation,
        }
    }

    /// The six vertices, counter-clockwise, vertex `i` at angle
    /// `rotation + i * 60 degrees` from the center.
    pub fn vertices(&self) -> [Vec2; HEX_SIDES] {
        std::array::from_fn(|i| {
            let angle = self.rotation + i as f32 * FRAC_PI_3;
            self.center + polar_to_cartesian(self.radius, angle)
        })
    }

    /// The six wall segments between consecutive vertices, same winding as
    /// [`Self::vertices`].
    pub fn edges(&self) -> [LineSegment; HEX_SIDES] {
        let v = self.vertices();
        std::array::from_fn(|i| LineSegment::new(v[i], v[(i + 1) % HEX_SIDES]))
    }

    /// Convex containment test: the point must sit on the interior side of
    /// every edge (cross product >= 0 for this winding).
    ///
    /// This is the post-collision safety net, not the primary collision
    /// test; containment alone says nothing about bounce dynamics.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let v = self.vertices();
        (0..HEX_SIDES).all(|i| {
            let edge = v[(i + 1) % HEX_SIDES] - v[i];
            edge.perp_dot(point - v[i]) >= 0.0
        })
    }
}
