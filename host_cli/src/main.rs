//! Native host for the air-hockey table.
//!
//! Polls the tracking feed file, steps the simulation at a fixed frame rate,
//! and logs goals, pauses, and resets. Runs until externally stopped.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use sim_core::{
    create_puck, step, Config, Events, FeedFrame, Score, ScoreBoard, Table, Time, TrackerRegistry,
};
use track_feed::FeedScale;

#[derive(Parser, Debug)]
#[command(name = "airpuck", version, about = "Tracked-paddle air-hockey table")]
struct Args {
    /// Tracking feed file, rewritten by the tracker between polls
    feed: PathBuf,

    /// Simulation frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f32,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    std::fs::metadata(&args.feed)
        .with_context(|| format!("tracking feed {} not readable", args.feed.display()))?;

    let table = Table::new();
    let config = Config::new();
    let scale = FeedScale {
        surface_y: table.surface_y,
        ..FeedScale::default()
    };

    let mut world = hecs::World::new();
    let mut time = Time::new(0.0, 0.0);
    let mut registry = TrackerRegistry::new();
    let mut frame = FeedFrame::new();
    let mut score = Score::new();
    let mut board = ScoreBoard::new();
    let mut events = Events::new();
    create_puck(&mut world, &table);

    info!(feed = %args.feed.display(), fps = args.fps, "starting table");

    let frame_budget = Duration::from_secs_f32(1.0 / args.fps);
    let started = Instant::now();
    let mut last_poll = f32::NEG_INFINITY;
    let mut prev = 0.0f32;

    loop {
        let frame_start = Instant::now();
        let elapsed = started.elapsed().as_secs_f32();
        time.dt = elapsed - prev;
        prev = elapsed;

        // The feed poll shares the ingest interval; the sim applies its own
        // gate on top, so an extra read costs nothing.
        if time.now - last_poll >= config.poll_interval {
            poll_feed(&args.feed, &scale, &mut frame);
            last_poll = time.now;
        }

        step(
            &mut world,
            &mut time,
            &table,
            &config,
            &mut registry,
            &frame,
            &mut score,
            &mut board,
            &mut events,
        );

        if events.goal_one || events.goal_two {
            info!(score = %board.text, "goal");
        }
        if events.pause_toggled {
            info!(paused = board.paused, "pause toggled");
        }
        if events.game_reset {
            info!("game reset");
        }
        if events.contact_started {
            debug!("paddle contact");
        }

        std::thread::sleep(frame_budget.saturating_sub(frame_start.elapsed()));
    }
}

/// Read and parse the latest feed snapshot, keeping the previous frame on
/// any failure.
fn poll_feed(path: &std::path::Path, scale: &FeedScale, frame: &mut FeedFrame) {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(%err, "feed read failed, keeping previous frame");
            return;
        }
    };
    match track_feed::parse_frame(&text, scale) {
        Ok(parsed) => {
            frame.one = parsed.one;
            frame.two = parsed.two;
        }
        Err(err) => warn!(%err, "malformed feed frame skipped"),
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
