mod astro;
mod brightness;
mod catalog;
mod chart;
mod composer;
mod config;
mod data;
mod ephemeris;
mod error;
mod geometry;
mod layers;
mod layout;
mod motion;
mod projector;
mod scene;
mod time;
mod types;

use crate::chart::SvgRenderer;
use crate::composer::{ChartComposer, Datasets};
use crate::config::{BodyTable, ChartConfig, RenderConfig};
use crate::data::{load_body_table, load_constellations, load_stars};
use crate::ephemeris::KeplerEphemeris;
use crate::time::{parse_timestamp, SystemClock, TimeProvider};
use crate::types::Frame;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "skyband")]
#[command(
    about = "Sun, Moon and planets against the background stars, in ecliptic or equatorial coordinates",
    version
)]
struct Args {
    /// Time to chart, UTC: RFC 3339 ("2024-03-20T03:06:00Z") or "YYYY-MM-DD[ HH:MM[:SS]]". Defaults to now
    #[arg(long)]
    time: Option<String>,

    /// Coordinate frame: ecliptic, equatorial, or both (stacked panels)
    #[arg(long, default_value = "both")]
    frame: String,

    /// Dimmest magnitude stars to draw (constellation stars are always drawn)
    #[arg(long, default_value_t = 3.0)]
    limit_mag: f64,

    /// Hipparcos main catalog (hip_main.dat, optionally gzipped)
    #[arg(long, default_value = "data/hip_main.dat")]
    hip_path: PathBuf,

    /// Stellarium constellationship.fab
    #[arg(long, default_value = "data/constellationship.fab")]
    constellations_path: PathBuf,

    /// Optional CSV body table: id,color,marker_size,label,show_motion_vector
    #[arg(long)]
    bodies: Option<PathBuf>,

    /// Days between the two samples of a motion arrow (at most one century either way)
    #[arg(long, default_value_t = 7.0, value_parser = parse_motion_days, allow_negative_numbers = true)]
    motion_days: f64,

    /// Output image width in pixels
    #[arg(long, default_value_t = 1900)]
    width: u32,

    /// Output SVG path
    #[arg(short = 'o', long = "out")]
    out: String,

    /// Optional CSS override file path; if omitted embedded CSS is used
    #[arg(long)]
    css: Option<String>,

    /// Also write the computed scenes as JSON
    #[arg(long)]
    scene_json: Option<PathBuf>,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const MAX_MOTION_DAYS: f64 = 36_525.0;

fn parse_motion_days(s: &str) -> std::result::Result<f64, String> {
    let days: f64 = s.trim().parse().map_err(|e| format!("{e}"))?;
    if !days.is_finite() || days.abs() > MAX_MOTION_DAYS {
        return Err(format!("must be a number of days within ±{MAX_MOTION_DAYS}"));
    }
    Ok(days)
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

fn parse_time_arg(s: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    match s.map(str::trim) {
        None | Some("now") => Ok(None),
        Some(t) => parse_timestamp(t)
            .map(Some)
            .ok_or_else(|| anyhow!("bad time '{t}'. Use RFC 3339 or YYYY-MM-DD[ HH:MM[:SS]]")),
    }
}

/// Frame names to build, in panel order.
fn parse_frames(s: &str) -> Result<Vec<&'static str>> {
    if s.trim().eq_ignore_ascii_case("both") {
        return Ok(vec![Frame::Ecliptic.name(), Frame::Equatorial.name()]);
    }
    let frame: Frame = s.parse()?;
    Ok(vec![frame.name()])
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(std::io::stderr)
        .init();

    let frames = parse_frames(&args.frame)?;
    let when = parse_time_arg(args.time.as_deref())?;
    let t = SystemClock.resolve(when);
    info!(time = %t.utc_label(), "charting");

    let stars = load_stars(&args.hip_path)
        .with_context(|| format!("loading {}", args.hip_path.display()))?;
    let constellations = load_constellations(&args.constellations_path)
        .with_context(|| format!("loading {}", args.constellations_path.display()))?;
    let bodies = match &args.bodies {
        Some(p) => load_body_table(p).with_context(|| format!("loading {}", p.display()))?,
        None => BodyTable::default(),
    };
    let ephemeris = KeplerEphemeris::new();

    let cfg = ChartConfig {
        limiting_magnitude: args.limit_mag,
        motion_offset_days: args.motion_days,
        bodies,
        ..ChartConfig::default()
    };

    let data = Datasets {
        stars: &stars,
        constellations: &constellations,
        ephemeris: &ephemeris,
    };
    let composer = ChartComposer::new(data, cfg);

    let scenes = frames
        .iter()
        .map(|f| composer.build_chart(&t, f, composer.cfg.limiting_magnitude))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if let Some(path) = &args.scene_json {
        let json = serde_json::to_string_pretty(&scenes)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    }

    let renderer = SvgRenderer::new(
        RenderConfig {
            width: args.width,
            ..RenderConfig::default()
        },
        args.css,
    );
    renderer
        .to_file(&scenes, &args.out)
        .with_context(|| format!("writing {}", args.out))?;

    info!(out = %args.out, panels = scenes.len(), "chart written");
    Ok(())
}

#[cfg(test)]
mod test_utils;
