use glam::Vec3;
use hecs::World;

use crate::components::{Puck, Transform};
use crate::params::Config;
use crate::resources::Time;
use crate::table::Table;

/// Integrate the puck: accumulated contact forces become velocity, velocity
/// becomes position, with linear damping and rim bounces along the width
/// axis. The length axis is left to the goal check. Kinematic pucks drop
/// their accumulated force and stay put.
pub fn step_puck(world: &mut World, time: &Time, table: &Table, config: &Config) {
    for (_entity, (puck, tf)) in world.query_mut::<(&mut Puck, &mut Transform)>() {
        if puck.kinematic {
            puck.force = Vec3::ZERO;
            continue;
        }

        puck.vel += puck.force / config.puck_mass * time.dt;
        puck.force = Vec3::ZERO;
        puck.vel /= 1.0 + config.puck_damping * time.dt;
        tf.pos += puck.vel * time.dt;

        let limit = table.half_width - config.puck_radius;
        if tf.pos.z.abs() >= limit {
            puck.vel.z = -puck.vel.z;
            tf.pos.z = tf.pos.z.clamp(-limit, limit);
        }
    }
}
