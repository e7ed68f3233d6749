use hecs::World;

use crate::components::ContactSession;
use crate::params::Config;
use crate::resources::{Events, ScoreBoard, Time};

/// Tick every contact session: a counter past the threshold toggles pause and
/// clears itself, a non-empty counter with no contact inside the window
/// decays back to zero.
pub fn update_sessions(
    world: &mut World,
    time: &Time,
    config: &Config,
    board: &mut ScoreBoard,
    events: &mut Events,
) {
    let mut toggle = false;
    for (_entity, session) in world.query_mut::<&mut ContactSession>() {
        if session.count > config.session_threshold {
            session.count = 0;
            toggle = true;
        } else if session.count != 0 && time.now > session.last_contact + config.session_window {
            session.count = 0;
        }
    }
    if toggle {
        super::scoring::toggle_pause(world, board);
        events.pause_toggled = true;
    }
}
