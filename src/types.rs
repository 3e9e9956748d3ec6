use serde::Serialize;
use std::str::FromStr;

use crate::error::ChartError;

/// Coordinate frame of a chart panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    Ecliptic,
    Equatorial,
}

impl Frame {
    /// Period of the longitude axis: degrees for ecliptic, hours for equatorial.
    pub fn period(self) -> f64 {
        match self {
            Self::Ecliptic => 360.0,
            Self::Equatorial => 24.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ecliptic => "ecliptic",
            Self::Equatorial => "equatorial",
        }
    }

    pub fn x_label(self) -> &'static str {
        match self {
            Self::Ecliptic => "Ecliptic Longitude (degrees)",
            Self::Equatorial => "Right Ascension (hours)",
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            Self::Ecliptic => "Ecliptic Latitude (degrees)",
            Self::Equatorial => "Declination (degrees)",
        }
    }

    /// Spacing of the major longitude ticks, in axis units.
    pub fn tick_step(self) -> f64 {
        match self {
            Self::Ecliptic => 30.0,
            Self::Equatorial => 2.0,
        }
    }
}

impl FromStr for Frame {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ecliptic" => Ok(Self::Ecliptic),
            "equatorial" => Ok(Self::Equatorial),
            _ => Err(ChartError::InvalidFrame(s.to_string())),
        }
    }
}

/// A position on the chart: longitude in axis units (degrees or hours),
/// latitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedPoint {
    pub lon: f64,
    pub lat: f64,
}

impl ProjectedPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Same point moved along the longitude axis. Latitude never changes.
    pub fn shifted(self, dlon: f64) -> Self {
        Self {
            lon: self.lon + dlon,
            lat: self.lat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSegment {
    pub a: ProjectedPoint,
    pub b: ProjectedPoint,
}

impl LineSegment {
    pub fn new(a: ProjectedPoint, b: ProjectedPoint) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f64 {
        let dlon = self.b.lon - self.a.lon;
        let dlat = self.b.lat - self.a.lat;
        (dlon * dlon + dlat * dlat).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionVector {
    pub origin: ProjectedPoint,
    pub dlon: f64,
    pub dlat: f64,
}

impl MotionVector {
    pub fn tip(&self) -> ProjectedPoint {
        ProjectedPoint {
            lon: self.origin.lon + self.dlon,
            lat: self.origin.lat + self.dlat,
        }
    }
}

// Small helpers used by multiple modules
pub fn parse_or<T: std::str::FromStr>(s: &str, default: T) -> T {
    s.trim().parse::<T>().unwrap_or(default)
}

#[cfg(test)]
pub fn hours_to_degrees(hours: f64) -> f64 {
    hours * 15.0
}

pub fn degrees_to_hours(degrees: f64) -> f64 {
    degrees / 15.0
}
