use hecs::World;

use crate::components::{MotionTracker, Paddle, Transform};
use crate::params::Config;
use crate::resources::Time;

/// Feed each paddle's position into its speed history. The 50 ms admission
/// gate lives inside the tracker, so this runs every frame.
pub fn sample_motion(world: &mut World, time: &Time) {
    for (_entity, (tf, tracker)) in world.query_mut::<(&Transform, &mut MotionTracker)>() {
        tracker.observe(tf.pos, time.now, time.dt);
    }
}

/// Glide paddles toward their tracked target at fixed speed, clamped so they
/// never overshoot.
pub fn seek_targets(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (paddle, tf)) in world.query_mut::<(&Paddle, &mut Transform)>() {
        let to_target = paddle.target - tf.pos;
        let dist = to_target.length();
        let max_step = config.paddle_speed * time.dt;
        if dist <= max_step {
            tf.pos = paddle.target;
        } else {
            tf.pos += to_target / dist * max_step;
        }
    }
}
