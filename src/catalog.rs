use std::collections::{BTreeMap, BTreeSet};

use crate::astro::Direction;
use crate::error::{ChartError, Result};
use crate::time::ChartTime;

/// Julian date of the Hipparcos catalog epoch, J1991.25.
pub const HIPPARCOS_EPOCH_JD: f64 = 2_448_349.062_5;

const MAS_PER_DEGREE: f64 = 3_600_000.0;
const DAYS_PER_YEAR: f64 = 365.25;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub hip: u32,
    pub magnitude: f64,
    pub ra_deg: f64,
    pub dec_deg: f64,
    /// Proper motion in RA, already multiplied by cos(dec).
    pub pm_ra_mas_yr: f64,
    pub pm_dec_mas_yr: f64,
}

impl Star {
    /// Catalog position carried forward linearly by proper motion.
    pub fn direction_at(&self, t: &ChartTime) -> Direction {
        let years = (t.jd_tt - HIPPARCOS_EPOCH_JD) / DAYS_PER_YEAR;
        let cos_dec = self.dec_deg.to_radians().cos();

        let dra = if cos_dec.abs() > 1e-9 {
            self.pm_ra_mas_yr / cos_dec / MAS_PER_DEGREE * years
        } else {
            0.0
        };
        let dec = (self.dec_deg + self.pm_dec_mas_yr / MAS_PER_DEGREE * years).clamp(-90.0, 90.0);

        Direction::from_equatorial(self.ra_deg + dra, dec)
    }
}

/// Stars keyed by Hipparcos number.
#[derive(Debug, Clone, Default)]
pub struct StarCatalog {
    stars: BTreeMap<u32, Star>,
}

impl StarCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a star; a later entry with the same number replaces the earlier one.
    pub fn insert(&mut self, star: Star) {
        self.stars.insert(star.hip, star);
    }

    pub fn get(&self, hip: u32) -> Result<&Star> {
        self.stars
            .get(&hip)
            .ok_or_else(|| ChartError::UnknownObject(format!("HIP {hip}")))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.values()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

impl FromIterator<Star> for StarCatalog {
    fn from_iter<I: IntoIterator<Item = Star>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for star in iter {
            catalog.insert(star);
        }
        catalog
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstellationEdge {
    pub a: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationFigure {
    pub abbr: String,
    pub name: String,
    pub edges: Vec<ConstellationEdge>,
}

/// Every star that some figure draws a line to or from.
pub fn edge_endpoints(figures: &[ConstellationFigure]) -> BTreeSet<u32> {
    figures
        .iter()
        .flat_map(|f| f.edges.iter())
        .flat_map(|e| [e.a, e.b])
        .collect()
}
