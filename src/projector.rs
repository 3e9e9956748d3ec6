use crate::astro::{normalize_period, Direction};
use crate::ephemeris::EphemerisSource;
use crate::error::Result;
use crate::time::ChartTime;
use crate::types::{Frame, ProjectedPoint};

/// Place a sky direction on the chart axes of `frame`.
///
/// Longitude comes back in `[0, P)`: degrees for ecliptic, hours of right
/// ascension for equatorial. Latitude (or declination) is always degrees.
pub fn project(direction: &Direction, frame: Frame) -> ProjectedPoint {
    let period = frame.period();
    match frame {
        Frame::Ecliptic => ProjectedPoint {
            lon: normalize_period(direction.lon_deg, period),
            lat: direction.lat_deg,
        },
        Frame::Equatorial => ProjectedPoint {
            lon: normalize_period(direction.ra_hours, period),
            lat: direction.dec_deg,
        },
    }
}

/// Look up a body and project it; unknown ids surface the ephemeris error.
pub fn project_body(
    ephemeris: &dyn EphemerisSource,
    body: &str,
    t: &ChartTime,
    frame: Frame,
) -> Result<ProjectedPoint> {
    let direction = ephemeris.direction(body, t)?;
    Ok(project(&direction, frame))
}
