use glam::Vec3;
use hecs::World;

use crate::components::{ContactSession, MotionSource, MotionTracker, Paddle, Puck, Transform};
use crate::params::Config;
use crate::resources::{Events, Time};

/// Resolve paddle-puck contact for this frame.
///
/// A paddle is in contact while the planar separation is inside the contact
/// radius. Overlapping contacts (separation below the proximity threshold)
/// relocate the puck onto the proximity ring around the paddle and kick it
/// outward; separated contacts transfer only the component of the paddle's
/// estimated momentum that is aimed at the puck. Contact-enter edges are
/// recorded on the paddle's session counter.
pub fn resolve_contacts(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    // Collect puck state without holding borrows across the paddle loop.
    let puck_data = {
        let mut puck_query = world.query::<(&Puck, &Transform)>();
        puck_query
            .iter()
            .next()
            .map(|(entity, (puck, tf))| (entity, tf.pos, puck.kinematic))
    };

    let (puck_entity, mut puck_pos, kinematic) = match puck_data {
        Some(data) => data,
        None => return, // No puck in world
    };

    let mut force = Vec3::ZERO;
    let mut relocated = false;

    for (_entity, (_paddle, tf, tracker, session)) in
        world.query_mut::<(&Paddle, &Transform, &MotionTracker, &mut ContactSession)>()
    {
        let mut d = puck_pos - tf.pos;
        d.y = 0.0; // table plane only
        let dist = d.length();
        let in_contact = dist < config.contact_radius;

        if in_contact && !session.touching {
            session.record(time.now);
            events.contact_started = true;
        }
        session.touching = in_contact;

        if !in_contact || kinematic {
            continue;
        }

        if dist < config.proximity_threshold {
            // Penetration correction: a zero-length separation has no
            // direction to push along, so it contributes nothing.
            let dir = match d.try_normalize() {
                Some(dir) => dir,
                None => continue,
            };
            puck_pos = Vec3::new(tf.pos.x, puck_pos.y, tf.pos.z)
                + dir * config.proximity_threshold;
            relocated = true;
            force += d * config.force_multiplier * config.correction_boost;
        } else {
            // Momentum transfer: project the paddle's momentum estimate onto
            // the separation direction.
            let heading = match tracker.motion_dir(tf.pos) {
                Some(heading) => heading,
                None => continue,
            };
            let normal = d / dist;
            let momentum = heading * config.paddle_mass * tracker.acceleration();
            force += momentum.dot(normal) * normal * config.force_multiplier;
        }
    }

    if relocated || force != Vec3::ZERO {
        if let Ok((puck, tf)) = world.query_one_mut::<(&mut Puck, &mut Transform)>(puck_entity) {
            if relocated {
                tf.pos = puck_pos;
            }
            puck.force += force;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Side;
    use crate::{create_paddle, create_puck, Config, Params, Table, Time};

    fn setup() -> (World, Config, Table, Events) {
        (World::new(), Config::new(), Table::new(), Events::new())
    }

    fn puck_state(world: &mut World) -> (Vec3, Vec3) {
        let mut query = world.query::<(&Puck, &Transform)>();
        let (_e, (puck, tf)) = query.iter().next().unwrap();
        (tf.pos, puck.force)
    }

    /// Builds a tracker with rising speeds (positive acceleration) whose last
    /// admitted position sits half a unit behind `end` along +X, so a body at
    /// `end` reads a +X heading.
    fn moving_tracker(end: Vec3) -> MotionTracker {
        let start = end - Vec3::new(3.0, 0.0, 0.0);
        let mut tracker = MotionTracker::new(start, 0.0);
        for tick in 1..=4usize {
            let now = Params::SAMPLE_INTERVAL * tick as f32;
            let x = (tick * tick) as f32 * (2.5 / 16.0);
            tracker.observe(start + Vec3::new(x, 0.0, 0.0), now, Params::SAMPLE_INTERVAL);
        }
        tracker
    }

    #[test]
    fn test_overlap_relocates_puck_to_proximity_ring() {
        let (mut world, config, table, mut events) = setup();
        let paddle_pos = table.surface_point(10.0, 10.0);
        create_paddle(&mut world, Side::One, paddle_pos, 0.0);
        let puck = create_puck(&mut world, &table);
        world.get::<&mut Transform>(puck).unwrap().pos = table.surface_point(10.8, 10.0);

        resolve_contacts(&mut world, &Time::new(0.016, 0.1), &config, &mut events);

        let (pos, force) = puck_state(&mut world);
        let planar = Vec3::new(pos.x - paddle_pos.x, 0.0, pos.z - paddle_pos.z);
        assert!(
            (planar.length() - config.proximity_threshold).abs() < 1e-4,
            "Puck must sit exactly on the proximity ring, got {}",
            planar.length()
        );
        assert_eq!(pos.y, table.surface_y, "Table height preserved");
        assert!(force.x > 0.0, "Kick points along the separation");
        assert!(events.contact_started);
    }

    #[test]
    fn test_overlap_impulse_magnitude() {
        let (mut world, config, table, mut events) = setup();
        create_paddle(&mut world, Side::One, table.surface_point(0.0, 0.0), 0.0);
        let puck = create_puck(&mut world, &table);
        world.get::<&mut Transform>(puck).unwrap().pos = table.surface_point(0.5, 0.0);

        resolve_contacts(&mut world, &Time::new(0.016, 0.1), &config, &mut events);

        let (_pos, force) = puck_state(&mut world);
        let expected = 0.5 * config.force_multiplier * config.correction_boost;
        assert!((force.x - expected).abs() < 1e-3);
        assert_eq!(force.z, 0.0);
    }

    #[test]
    fn test_zero_separation_is_a_no_op() {
        let (mut world, config, table, mut events) = setup();
        let spot = table.surface_point(0.0, 0.0);
        create_paddle(&mut world, Side::One, spot, 0.0);
        create_puck(&mut world, &table); // spawns exactly at the same planar point

        resolve_contacts(&mut world, &Time::new(0.016, 0.1), &config, &mut events);

        let (pos, force) = puck_state(&mut world);
        assert_eq!(pos, table.puck_spawn(), "No relocation without a direction");
        assert_eq!(force, Vec3::ZERO, "No force without a direction");
    }

    #[test]
    fn test_momentum_regime_projects_onto_separation() {
        let (mut world, config, table, mut events) = setup();
        let paddle_pos = table.surface_point(0.0, 0.0);
        let entity = create_paddle(&mut world, Side::One, paddle_pos, 0.0);
        let tracker = moving_tracker(paddle_pos);
        let accel = tracker.acceleration();
        assert!(accel > 0.0);
        *world.get::<&mut MotionTracker>(entity).unwrap() = tracker;

        // Separated but inside the contact radius, offset at 45 degrees so
        // the projection is a strict fraction of the momentum estimate.
        let offset = 2.5 / 2.0_f32.sqrt();
        let puck = create_puck(&mut world, &table);
        world.get::<&mut Transform>(puck).unwrap().pos = table.surface_point(offset, offset);

        resolve_contacts(&mut world, &Time::new(0.016, 0.3), &config, &mut events);

        let (_pos, force) = puck_state(&mut world);
        let momentum_mag = config.paddle_mass * accel;
        assert!(force.length() > 0.0, "Aimed motion must transfer force");
        assert!(
            force.length() <= momentum_mag * config.force_multiplier + 1e-3,
            "Projection never exceeds the momentum estimate"
        );
        // The force lies along the separation direction.
        let n = Vec3::new(1.0, 0.0, 1.0).normalize();
        let along = force.dot(n);
        assert!((force - n * along).length() < 1e-3);
    }

    #[test]
    fn test_contact_enter_counts_once_while_touching() {
        let (mut world, config, table, mut events) = setup();
        let entity = create_paddle(&mut world, Side::One, table.surface_point(0.0, 0.0), 0.0);
        let puck = create_puck(&mut world, &table);
        world.get::<&mut Transform>(puck).unwrap().pos = table.surface_point(2.5, 0.0);

        for frame in 0..5 {
            let now = 0.016 * frame as f32;
            resolve_contacts(&mut world, &Time::new(0.016, now), &config, &mut events);
        }

        let session = world.get::<&ContactSession>(entity).unwrap();
        assert_eq!(session.count, 1, "Persisting contact is a single session event");
    }

    #[test]
    fn test_kinematic_puck_receives_no_force() {
        let (mut world, config, table, mut events) = setup();
        create_paddle(&mut world, Side::One, table.surface_point(0.0, 0.0), 0.0);
        let puck = create_puck(&mut world, &table);
        {
            let (p, tf) = world
                .query_one_mut::<(&mut Puck, &mut Transform)>(puck)
                .unwrap();
            p.kinematic = true;
            tf.pos = table.surface_point(0.5, 0.0);
        }

        resolve_contacts(&mut world, &Time::new(0.016, 0.1), &config, &mut events);

        let (pos, force) = puck_state(&mut world);
        assert_eq!(pos, table.surface_point(0.5, 0.0));
        assert_eq!(force, Vec3::ZERO);
    }
}
