/// Tuning parameters for the table simulation
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table (feed units: raw tracker coords times the per-axis multipliers)
    pub const TABLE_HALF_LENGTH: f32 = 1200.0;
    pub const TABLE_HALF_WIDTH: f32 = 480.0;
    pub const TABLE_HEIGHT: f32 = 5.0;

    // Tracking ingest
    pub const POLL_INTERVAL: f32 = 0.05;
    pub const RESET_POINT_COUNT: usize = 5;

    // Paddle
    pub const PADDLE_SPEED: f32 = 100.0; // units per second
    pub const PADDLE_MASS: f32 = 5.0;
    pub const PADDLE_RADIUS: f32 = 1.5;

    // Motion estimation
    pub const SPEED_HISTORY_CAP: usize = 5;
    pub const SAMPLE_INTERVAL: f32 = 0.05;

    // Contact
    pub const PROXIMITY_THRESHOLD: f32 = 2.0;
    pub const FORCE_MULTIPLIER: f32 = 50.0;
    pub const CORRECTION_BOOST: f32 = 10.0; // overlap impulse scale-up

    // Puck
    pub const PUCK_RADIUS: f32 = 1.5;
    pub const PUCK_MASS: f32 = 1.0;
    pub const PUCK_DAMPING: f32 = 0.5; // linear, per second

    // Session gate
    pub const SESSION_WINDOW: f32 = 5.0;
    pub const SESSION_THRESHOLD: u32 = 8; // pause once count exceeds this

    // Frame
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}

/// Simulation configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub poll_interval: f32,
    pub paddle_speed: f32,
    pub paddle_mass: f32,
    pub contact_radius: f32,
    pub proximity_threshold: f32,
    pub force_multiplier: f32,
    pub correction_boost: f32,
    pub puck_radius: f32,
    pub puck_mass: f32,
    pub puck_damping: f32,
    pub session_window: f32,
    pub session_threshold: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval: Params::POLL_INTERVAL,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_mass: Params::PADDLE_MASS,
            contact_radius: Params::PADDLE_RADIUS + Params::PUCK_RADIUS,
            proximity_threshold: Params::PROXIMITY_THRESHOLD,
            force_multiplier: Params::FORCE_MULTIPLIER,
            correction_boost: Params::CORRECTION_BOOST,
            puck_radius: Params::PUCK_RADIUS,
            puck_mass: Params::PUCK_MASS,
            puck_damping: Params::PUCK_DAMPING,
            session_window: Params::SESSION_WINDOW,
            session_threshold: Params::SESSION_THRESHOLD,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}
