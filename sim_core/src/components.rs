use std::collections::VecDeque;

use glam::Vec3;

use crate::params::Params;

/// Which end of the table an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

/// World position of an entity.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub pos: Vec3,
}

/// Paddle component - the single mobile tracked entity for a side.
///
/// The paddle glides toward `target` at fixed speed rather than teleporting;
/// the target is refreshed on every tracking ingest.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub target: Vec3,
}

/// One static obstacle in a side's wall set.
#[derive(Debug, Clone, Copy)]
pub struct WallSegment {
    pub side: Side,
}

/// The puck - the single reactive body.
#[derive(Debug, Clone, Copy)]
pub struct Puck {
    pub vel: Vec3,
    /// Force accumulated this frame, cleared by integration.
    pub force: Vec3,
    /// Kinematic pucks ignore forces entirely (pause mode).
    pub kinematic: bool,
}

impl Puck {
    pub fn new() -> Self {
        Self {
            vel: Vec3::ZERO,
            force: Vec3::ZERO,
            kinematic: false,
        }
    }
}

impl Default for Puck {
    fn default() -> Self {
        Self::new()
    }
}

/// Source of estimated motion for a contact controller.
pub trait MotionSource {
    /// Average of consecutive forward differences over the speed history.
    /// Returns 0.0 with fewer than two samples; never faults.
    fn acceleration(&self) -> f32;

    /// Unit vector from the last admitted sample position toward `current`.
    /// `None` when the body has not moved, i.e. there is no directional
    /// contribution to transfer.
    fn motion_dir(&self, current: Vec3) -> Option<Vec3>;
}

/// Bounded speed history for a tracked body.
///
/// Positions are observed every frame but only admitted once the sample
/// interval has elapsed since the previous admission, decoupling the
/// estimation rate from the frame rate.
#[derive(Debug, Clone)]
pub struct MotionTracker {
    speeds: VecDeque<f32>,
    prev_pos: Vec3,
    last_admit: f32,
}

impl MotionTracker {
    pub fn new(pos: Vec3, now: f32) -> Self {
        Self {
            speeds: VecDeque::with_capacity(Params::SPEED_HISTORY_CAP),
            prev_pos: pos,
            last_admit: now,
        }
    }

    /// Observe the body's current position. Admits a speed sample when the
    /// interval gate passes: speed = distance from the last admitted position
    /// divided by the elapsed frame time, oldest sample evicted at capacity.
    pub fn observe(&mut self, pos: Vec3, now: f32, dt: f32) {
        if now < self.last_admit + Params::SAMPLE_INTERVAL || dt <= 0.0 {
            return;
        }
        if self.speeds.len() >= Params::SPEED_HISTORY_CAP {
            self.speeds.pop_front();
        }
        self.speeds.push_back((pos - self.prev_pos).length() / dt);
        self.prev_pos = pos;
        self.last_admit = now;
    }

    pub fn sample_count(&self) -> usize {
        self.speeds.len()
    }

    #[cfg(test)]
    pub(crate) fn speeds(&self) -> impl Iterator<Item = f32> + '_ {
        self.speeds.iter().copied()
    }
}

impl MotionSource for MotionTracker {
    fn acceleration(&self) -> f32 {
        if self.speeds.len() < 2 {
            return 0.0;
        }
        let sum: f32 = self
            .speeds
            .iter()
            .zip(self.speeds.iter().skip(1))
            .map(|(a, b)| b - a)
            .sum();
        sum / (self.speeds.len() - 1) as f32
    }

    fn motion_dir(&self, current: Vec3) -> Option<Vec3> {
        (current - self.prev_pos).try_normalize()
    }
}

/// Per-paddle counter of repeated contacts driving the pause toggle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactSession {
    pub count: u32,
    pub last_contact: f32,
    /// Whether the paddle was in contact last frame (enter-edge detection).
    pub touching: bool,
}

impl ContactSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, now: f32) {
        self.count += 1;
        self.last_contact = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admit(tracker: &mut MotionTracker, step: Vec3, tick: usize) {
        // Each call lands exactly on the admission interval.
        let now = Params::SAMPLE_INTERVAL * tick as f32;
        let pos = step * tick as f32;
        tracker.observe(pos, now, Params::SAMPLE_INTERVAL);
    }

    #[test]
    fn test_history_never_exceeds_capacity() {
        let mut tracker = MotionTracker::new(Vec3::ZERO, 0.0);
        for tick in 1..=12 {
            admit(&mut tracker, Vec3::new(1.0, 0.0, 0.0), tick);
        }
        assert_eq!(tracker.sample_count(), Params::SPEED_HISTORY_CAP);
    }

    #[test]
    fn test_oldest_sample_evicted_first() {
        let mut tracker = MotionTracker::new(Vec3::ZERO, 0.0);
        // Quadratic position => strictly increasing per-tick speeds.
        for tick in 1..=7usize {
            let now = Params::SAMPLE_INTERVAL * tick as f32;
            let x = (tick * tick) as f32;
            tracker.observe(Vec3::new(x, 0.0, 0.0), now, Params::SAMPLE_INTERVAL);
        }
        let speeds: Vec<f32> = tracker.speeds().collect();
        assert_eq!(speeds.len(), 5);
        for pair in speeds.windows(2) {
            assert!(pair[1] > pair[0], "Eviction must keep insertion order");
        }
        // The two oldest samples (ticks 1 and 2) are gone.
        let expected_oldest = ((3 * 3 - 2 * 2) as f32) / Params::SAMPLE_INTERVAL;
        assert!((speeds[0] - expected_oldest).abs() < 1e-3);
    }

    #[test]
    fn test_sample_gate_rejects_early_observations() {
        let mut tracker = MotionTracker::new(Vec3::ZERO, 0.0);
        tracker.observe(Vec3::new(1.0, 0.0, 0.0), 0.016, 0.016);
        tracker.observe(Vec3::new(2.0, 0.0, 0.0), 0.033, 0.016);
        assert_eq!(tracker.sample_count(), 0, "Samples before the interval gate");
        tracker.observe(Vec3::new(3.0, 0.0, 0.0), 0.051, 0.016);
        assert_eq!(tracker.sample_count(), 1);
    }

    #[test]
    fn test_acceleration_is_mean_of_consecutive_deltas() {
        let mut tracker = MotionTracker::new(Vec3::ZERO, 0.0);
        // Constant step per admitted sample => speeds 20, 20, 20 => accel 0.
        for tick in 1..=3 {
            admit(&mut tracker, Vec3::new(1.0, 0.0, 0.0), tick);
        }
        assert!(tracker.acceleration().abs() < 1e-4);

        // Quadratic position: speeds rise linearly, deltas are constant.
        let mut tracker = MotionTracker::new(Vec3::ZERO, 0.0);
        for tick in 1..=4usize {
            let now = Params::SAMPLE_INTERVAL * tick as f32;
            let x = (tick * tick) as f32;
            tracker.observe(Vec3::new(x, 0.0, 0.0), now, Params::SAMPLE_INTERVAL);
        }
        // Speeds: 1/dt, 3/dt, 5/dt, 7/dt => every delta is 2/dt.
        let expected = 2.0 / Params::SAMPLE_INTERVAL;
        assert!((tracker.acceleration() - expected).abs() < 1e-2);
    }

    #[test]
    fn test_acceleration_neutral_below_two_samples() {
        let mut tracker = MotionTracker::new(Vec3::ZERO, 0.0);
        assert_eq!(tracker.acceleration(), 0.0);
        admit(&mut tracker, Vec3::new(1.0, 0.0, 0.0), 1);
        assert_eq!(tracker.acceleration(), 0.0, "One sample is not enough");
    }

    #[test]
    fn test_motion_dir_none_when_stationary() {
        let tracker = MotionTracker::new(Vec3::new(3.0, 5.0, 1.0), 0.0);
        assert!(tracker.motion_dir(Vec3::new(3.0, 5.0, 1.0)).is_none());
        let dir = tracker.motion_dir(Vec3::new(4.0, 5.0, 1.0)).unwrap();
        assert!((dir - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_session_record_and_default() {
        let mut session = ContactSession::new();
        assert_eq!(session.count, 0);
        session.record(1.5);
        session.record(2.0);
        assert_eq!(session.count, 2);
        assert_eq!(session.last_contact, 2.0);
    }
}
