use glam::Vec3;

use crate::params::Params;

/// Table geometry.
///
/// X runs along the length with a goal line at each end, Z across the width
/// between the rims, and Y is the fixed surface height every tracked point
/// and entity sits at.
#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub half_length: f32,
    pub half_width: f32,
    pub surface_y: f32,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lift a planar point onto the table surface.
    pub fn surface_point(&self, x: f32, z: f32) -> Vec3 {
        Vec3::new(x, self.surface_y, z)
    }

    /// Rest pose for a freshly created puck.
    pub fn puck_spawn(&self) -> Vec3 {
        Vec3::new(0.0, self.surface_y, 0.0)
    }

    /// True when `x` is past the goal line at side one's end.
    pub fn past_goal_one(&self, x: f32) -> bool {
        x < -self.half_length
    }

    /// True when `x` is past the goal line at side two's end.
    pub fn past_goal_two(&self, x: f32) -> bool {
        x > self.half_length
    }
}

impl Default for Table {
    fn default() -> Self {
        Self {
            half_length: Params::TABLE_HALF_LENGTH,
            half_width: Params::TABLE_HALF_WIDTH,
            surface_y: Params::TABLE_HEIGHT,
        }
    }
}
