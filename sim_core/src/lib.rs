pub mod components;
pub mod params;
pub mod resources;
pub mod systems;
pub mod table;

pub use components::*;
pub use params::*;
pub use resources::*;
pub use table::*;

use hecs::World;
use systems::*;

/// Advance the simulation by one frame.
///
/// The tracking ingest sub-step only runs once the polling interval has
/// elapsed since the last ingest; everything else (motion sampling, paddle
/// seeking, contact resolution, session bookkeeping, puck integration, goal
/// checks) runs every frame. `time.now` advances by the clamped dt at the
/// end of the frame.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    table: &Table,
    config: &Config,
    registry: &mut TrackerRegistry,
    frame: &FeedFrame,
    score: &mut Score,
    board: &mut ScoreBoard,
    events: &mut Events,
) {
    // Clamp dt to prevent large jumps
    let dt = time.dt.min(Params::MAX_DT);
    let tick = Time::new(dt, time.now);

    events.clear();

    // 1. Ingest the tracking frame (interval-gated)
    if tick.now - registry.last_ingest >= config.poll_interval {
        ingest(world, frame, registry, table, score, board, events, &tick);
        registry.last_ingest = tick.now;
    }

    // 2. Sample paddle motion into the speed histories
    sample_motion(world, &tick);

    // 3. Glide paddles toward their targets
    seek_targets(world, &tick, config);

    // 4. Resolve paddle-puck contact
    resolve_contacts(world, &tick, config, events);

    // 5. Session bookkeeping (may toggle pause)
    update_sessions(world, &tick, config, board, events);

    // 6. Integrate the puck
    step_puck(world, &tick, table, config);

    // 7. Goal check
    check_goals(world, table, score, board, events);

    time.now += dt;
}

/// Helper to create the puck entity at the table's rest pose
pub fn create_puck(world: &mut World, table: &Table) -> hecs::Entity {
    world.spawn((
        Puck::new(),
        Transform {
            pos: table.puck_spawn(),
        },
    ))
}

/// Helper to create a paddle entity directly. Live play spawns paddles
/// through the tracking ingest; this exists for tests and tools.
pub fn create_paddle(world: &mut World, side: Side, pos: glam::Vec3, now: f32) -> hecs::Entity {
    world.spawn((
        Paddle { side, target: pos },
        Transform { pos },
        MotionTracker::new(pos, now),
        ContactSession::new(),
    ))
}
