use hecs::World;

use crate::components::{Puck, Side, Transform};
use crate::resources::{Events, Score, ScoreBoard};
use crate::table::Table;

/// Check whether the puck crossed either goal line. Crossing the line at
/// side one's end scores for side two and vice versa.
pub fn check_goals(
    world: &mut World,
    table: &Table,
    score: &mut Score,
    board: &mut ScoreBoard,
    events: &mut Events,
) {
    let scored = {
        let mut puck_query = world.query::<(&Puck, &Transform)>();
        puck_query.iter().next().and_then(|(_entity, (_puck, tf))| {
            if table.past_goal_one(tf.pos.x) {
                Some(Side::Two)
            } else if table.past_goal_two(tf.pos.x) {
                Some(Side::One)
            } else {
                None
            }
        })
    };

    if let Some(side) = scored {
        match side {
            Side::One => events.goal_one = true,
            Side::Two => events.goal_two = true,
        }
        goal(world, table, side, score, board);
    }
}

/// Award a goal: bump that side's counter, refresh the display, and hand out
/// a fresh puck.
pub fn goal(world: &mut World, table: &Table, side: Side, score: &mut Score, board: &mut ScoreBoard) {
    score.increment(side);
    board.refresh(score);
    replace_puck(world, table);
}

/// Zero both counters and replace the puck.
pub fn reset_game(
    world: &mut World,
    table: &Table,
    score: &mut Score,
    board: &mut ScoreBoard,
    events: &mut Events,
) {
    score.reset();
    board.refresh(score);
    replace_puck(world, table);
    events.game_reset = true;
}

/// Destroy and recreate the puck at the rest pose. A fresh body guarantees
/// the next round starts without residual velocity or accumulated force.
pub fn replace_puck(world: &mut World, table: &Table) {
    let existing: Vec<hecs::Entity> = world.query::<&Puck>().iter().map(|(e, _)| e).collect();
    for entity in existing {
        let _ = world.despawn(entity);
    }
    world.spawn((
        Puck::new(),
        Transform {
            pos: table.puck_spawn(),
        },
    ));
}

/// Flip the puck between force-responsive and kinematic and swap the score
/// display with the pause placeholder.
pub fn toggle_pause(world: &mut World, board: &mut ScoreBoard) {
    let mut paused = board.paused;
    for (_entity, puck) in world.query_mut::<&mut Puck>() {
        puck.kinematic = !puck.kinematic;
        paused = puck.kinematic;
    }
    if paused {
        board.pause();
    } else {
        board.unpause();
    }
}
