use chrono::{TimeZone, Utc};
use std::collections::HashMap;

use crate::astro::Direction;
use crate::catalog::Star;
use crate::ephemeris::EphemerisSource;
use crate::error::{ChartError, Result};
use crate::time::ChartTime;

// Check that the error between a and b is close enough
pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Midnight UTC on the given day.
pub fn time_at(year: i32, month: u32, day: u32) -> ChartTime {
    ChartTime::from_utc(Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap())
}

pub fn star(hip: u32, magnitude: f64, ra_deg: f64, dec_deg: f64) -> Star {
    Star {
        hip,
        magnitude,
        ra_deg,
        dec_deg,
        pm_ra_mas_yr: 0.0,
        pm_dec_mas_yr: 0.0,
    }
}

/// Bodies moving uniformly in ecliptic longitude and latitude from an epoch.
pub struct FixedEphemeris {
    epoch_jd: f64,
    bodies: HashMap<String, [f64; 4]>,
}

impl FixedEphemeris {
    pub fn new() -> Self {
        Self {
            epoch_jd: crate::time::J2000_JD,
            bodies: HashMap::new(),
        }
    }

    /// Rates are measured from `t`.
    pub fn at(t: &ChartTime) -> Self {
        Self {
            epoch_jd: t.jd_tt,
            bodies: HashMap::new(),
        }
    }

    pub fn with(self, id: &str, lon: f64, lat: f64) -> Self {
        self.with_rate(id, lon, lat, 0.0, 0.0)
    }

    pub fn with_rate(mut self, id: &str, lon: f64, lat: f64, dlon: f64, dlat: f64) -> Self {
        self.bodies.insert(id.to_string(), [lon, lat, dlon, dlat]);
        self
    }
}

impl EphemerisSource for FixedEphemeris {
    fn direction(&self, body: &str, t: &ChartTime) -> Result<Direction> {
        let [lon, lat, dlon, dlat] = *self
            .bodies
            .get(body)
            .ok_or_else(|| ChartError::UnknownObject(body.to_string()))?;
        let days = t.jd_tt - self.epoch_jd;
        Ok(Direction::from_ecliptic(lon + dlon * days, lat + dlat * days))
    }
}
