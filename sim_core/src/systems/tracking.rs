use glam::Vec3;
use hecs::World;

use crate::components::{ContactSession, MotionTracker, Paddle, Side, Transform, WallSegment};
use crate::params::Params;
use crate::resources::{Events, FeedFrame, Score, ScoreBoard, Time, TrackerRegistry};
use crate::table::Table;

/// Reconcile the latest tracking frame against the per-side entities.
///
/// Both sides flooding the feed (>= 5 points each) is the full-reset gesture:
/// scores are zeroed, the puck is replaced, and both sides are torn down
/// before the frame is reconciled as usual.
#[allow(clippy::too_many_arguments)]
pub fn ingest(
    world: &mut World,
    frame: &FeedFrame,
    registry: &mut TrackerRegistry,
    table: &Table,
    score: &mut Score,
    board: &mut ScoreBoard,
    events: &mut Events,
    time: &Time,
) {
    if frame.one.len() >= Params::RESET_POINT_COUNT && frame.two.len() >= Params::RESET_POINT_COUNT
    {
        super::scoring::reset_game(world, table, score, board, events);
        for side in [Side::One, Side::Two] {
            despawn_paddle(world, registry, side);
            despawn_walls(world, registry, side);
        }
    }
    reconcile_side(world, registry, Side::One, &frame.one, table, time);
    reconcile_side(world, registry, Side::Two, &frame.two, table, time);
}

/// Drive one side toward the reported point count: exactly one point means a
/// mobile paddle, several points mean a static wall set, none means inactive.
/// Wall sets are compared by count only and rebuilt wholesale on any change.
fn reconcile_side(
    world: &mut World,
    registry: &mut TrackerRegistry,
    side: Side,
    points: &[Vec3],
    table: &Table,
    time: &Time,
) {
    match points.len() {
        0 => {
            despawn_paddle(world, registry, side);
            despawn_walls(world, registry, side);
        }
        1 => {
            despawn_walls(world, registry, side);
            let target = table.surface_point(points[0].x, points[0].z);
            match registry.side(side).paddle {
                Some(entity) => {
                    if let Ok(mut paddle) = world.get::<&mut Paddle>(entity) {
                        paddle.target = target;
                    }
                }
                None => {
                    // First activation snaps straight to the point.
                    let entity = world.spawn((
                        Paddle { side, target },
                        Transform { pos: target },
                        MotionTracker::new(target, time.now),
                        ContactSession::new(),
                    ));
                    registry.side_mut(side).paddle = Some(entity);
                }
            }
        }
        count => {
            despawn_paddle(world, registry, side);
            if count != registry.side(side).walls.len() {
                despawn_walls(world, registry, side);
                for point in points {
                    let entity = world.spawn((
                        WallSegment { side },
                        Transform {
                            pos: table.surface_point(point.x, point.z),
                        },
                    ));
                    registry.side_mut(side).walls.push(entity);
                }
            }
        }
    }
}

fn despawn_paddle(world: &mut World, registry: &mut TrackerRegistry, side: Side) {
    if let Some(entity) = registry.side_mut(side).paddle.take() {
        let _ = world.despawn(entity);
    }
}

fn despawn_walls(world: &mut World, registry: &mut TrackerRegistry, side: Side) {
    for entity in registry.side_mut(side).walls.drain(..) {
        let _ = world.despawn(entity);
    }
}
