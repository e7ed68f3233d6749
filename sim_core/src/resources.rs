use glam::Vec3;
use hecs::Entity;

use crate::components::Side;
use crate::params::Params;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this frame
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Goal counters, one per side.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub one: u32,
    pub two: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::One => self.one += 1,
            Side::Two => self.two += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::One => self.one,
            Side::Two => self.two,
        }
    }

    pub fn reset(&mut self) {
        self.one = 0;
        self.two = 0;
    }
}

/// The score display line, plus the cached text swapped out while paused.
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    pub text: String,
    pub paused: bool,
    prev_text: String,
}

impl ScoreBoard {
    pub const PAUSED_TEXT: &'static str = "Paused";

    pub fn new() -> Self {
        Self {
            text: "0 : 0".to_owned(),
            paused: false,
            prev_text: String::new(),
        }
    }

    /// Rebuild the "scoreTwo : scoreOne" line. While paused the refreshed
    /// line is parked behind the placeholder and restored on unpause.
    pub fn refresh(&mut self, score: &Score) {
        let line = format!("{} : {}", score.two, score.one);
        if self.paused {
            self.prev_text = line;
        } else {
            self.text = line;
        }
    }

    pub fn pause(&mut self) {
        self.prev_text = std::mem::replace(&mut self.text, Self::PAUSED_TEXT.to_owned());
        self.paused = true;
    }

    pub fn unpause(&mut self) {
        self.text = std::mem::take(&mut self.prev_text);
        self.paused = false;
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub contact_started: bool,
    pub goal_one: bool,
    pub goal_two: bool,
    pub pause_toggled: bool,
    pub game_reset: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The latest parsed tracking frame, replaced by the host on every poll.
/// Points are already partitioned by side and lifted to the table surface.
#[derive(Debug, Clone, Default)]
pub struct FeedFrame {
    pub one: Vec<Vec3>,
    pub two: Vec<Vec3>,
}

impl FeedFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(&self, side: Side) -> &[Vec3] {
        match side {
            Side::One => &self.one,
            Side::Two => &self.two,
        }
    }
}

/// Entities currently realized for one side: a mobile paddle xor a set of
/// static wall segments, never both.
#[derive(Debug, Default)]
pub struct SideEntities {
    pub paddle: Option<Entity>,
    pub walls: Vec<Entity>,
}

/// Registry mapping each side to its tracked entities, plus the ingest gate
/// timestamp. Contact resolution finds the current paddle through this
/// registry rather than by probing entities at runtime.
#[derive(Debug)]
pub struct TrackerRegistry {
    sides: [SideEntities; 2],
    pub last_ingest: f32,
}

impl TrackerRegistry {
    pub fn new() -> Self {
        Self {
            sides: [SideEntities::default(), SideEntities::default()],
            // Lets the very first frame ingest immediately.
            last_ingest: -Params::POLL_INTERVAL,
        }
    }

    pub fn side(&self, side: Side) -> &SideEntities {
        &self.sides[side.index()]
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideEntities {
        &mut self.sides[side.index()]
    }
}

impl Default for TrackerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
