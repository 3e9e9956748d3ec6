use tracing::debug;

use crate::astro::periodic_delta;
use crate::ephemeris::EphemerisSource;
use crate::error::Result;
use crate::projector::project_body;
use crate::time::ChartTime;
use crate::types::{Frame, MotionVector};

/// Where `body` is at `t`, and how far it moves over the next `offset_days`.
///
/// The longitude step is taken the short way round, so a body crossing the
/// 0/P boundary during the interval still gets a short arrow.
pub fn motion_vector(
    ephemeris: &dyn EphemerisSource,
    body: &str,
    t: &ChartTime,
    frame: Frame,
    offset_days: f64,
) -> Result<MotionVector> {
    let period = frame.period();
    let now = project_body(ephemeris, body, t, frame)?;
    let later = project_body(ephemeris, body, &t.add_days(offset_days), frame)?;

    let raw = later.lon - now.lon;
    let dlon = periodic_delta(now.lon, later.lon, period);
    if (raw - dlon).abs() > period / 2.0 {
        debug!(body, raw, dlon, "motion vector crossed the longitude boundary");
    }

    Ok(MotionVector {
        origin: now,
        dlon,
        dlat: later.lat - now.lat,
    })
}
