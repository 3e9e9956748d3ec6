//! Frame conversions between J2000 equatorial and J2000 ecliptic coordinates.

use crate::types::degrees_to_hours;

/// Mean obliquity of the ecliptic at J2000, in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_1;

/// Reduce `x` into `[0, period)`.
///
/// `rem_euclid` can return exactly `period` for tiny negative inputs, which
/// would put a point on the wrong edge of the chart.
pub fn normalize_period(x: f64, period: f64) -> f64 {
    let r = x.rem_euclid(period);
    if r >= period { 0.0 } else { r }
}

/// Shortest signed difference `b - a` on a periodic axis, in `[-period/2, period/2)`.
pub fn periodic_delta(a: f64, b: f64, period: f64) -> f64 {
    let half = period / 2.0;
    (b - a + half).rem_euclid(period) - half
}

/// One apparent direction on the sky, expressed in both supported frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    pub ra_hours: f64,
    pub dec_deg: f64,
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl Direction {
    pub fn from_equatorial(ra_deg: f64, dec_deg: f64) -> Self {
        let eps = OBLIQUITY_J2000_DEG.to_radians();
        let ra = ra_deg.to_radians();
        let dec = dec_deg.to_radians();

        let lon = (ra.sin() * eps.cos() + dec.tan() * eps.sin()).atan2(ra.cos());
        let lat = (dec.sin() * eps.cos() - dec.cos() * eps.sin() * ra.sin())
            .clamp(-1.0, 1.0)
            .asin();

        Self {
            ra_hours: normalize_period(degrees_to_hours(ra_deg), 24.0),
            dec_deg,
            lon_deg: normalize_period(lon.to_degrees(), 360.0),
            lat_deg: lat.to_degrees(),
        }
    }

    pub fn from_ecliptic(lon_deg: f64, lat_deg: f64) -> Self {
        let eps = OBLIQUITY_J2000_DEG.to_radians();
        let lon = lon_deg.to_radians();
        let lat = lat_deg.to_radians();

        let ra = (lon.sin() * eps.cos() - lat.tan() * eps.sin()).atan2(lon.cos());
        let dec = (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin())
            .clamp(-1.0, 1.0)
            .asin();

        Self {
            ra_hours: normalize_period(degrees_to_hours(ra.to_degrees()), 24.0),
            dec_deg: dec.to_degrees(),
            lon_deg: normalize_period(lon_deg, 360.0),
            lat_deg,
        }
    }

    /// Direction of a Cartesian vector given in J2000 ecliptic axes.
    pub fn from_ecliptic_vector(x: f64, y: f64, z: f64) -> Self {
        let lon = y.atan2(x).to_degrees();
        let lat = z.atan2((x * x + y * y).sqrt()).to_degrees();
        Self::from_ecliptic(lon, lat)
    }

    #[cfg(test)]
    pub fn ra_deg(&self) -> f64 {
        crate::types::hours_to_degrees(self.ra_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;

    #[test]
    fn normalize_period_stays_half_open() {
        assert!(approx(normalize_period(-30.0, 360.0), 330.0, 1e-12));
        assert!(approx(normalize_period(720.0, 360.0), 0.0, 1e-12));
        assert!(approx(normalize_period(25.5, 24.0), 1.5, 1e-12));
        let r = normalize_period(-1e-18, 360.0);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn periodic_delta_takes_short_way() {
        assert!(approx(periodic_delta(358.0, 5.0, 360.0), 7.0, 1e-12));
        assert!(approx(periodic_delta(5.0, 358.0, 360.0), -7.0, 1e-12));
        assert!(approx(periodic_delta(23.5, 0.25, 24.0), 0.75, 1e-12));
        assert!(approx(periodic_delta(10.0, 20.0, 360.0), 10.0, 1e-12));
    }

    #[test]
    fn equinox_is_origin_in_both_frames() {
        let d = Direction::from_equatorial(0.0, 0.0);
        assert!(approx(d.lon_deg, 0.0, 1e-12));
        assert!(approx(d.lat_deg, 0.0, 1e-12));
    }

    #[test]
    fn summer_solstice_point() {
        // Ecliptic longitude 90 lies at RA 6h, Dec = obliquity
        let d = Direction::from_ecliptic(90.0, 0.0);
        assert!(approx(d.ra_hours, 6.0, 1e-9));
        assert!(approx(d.dec_deg, OBLIQUITY_J2000_DEG, 1e-9));
    }

    #[test]
    fn north_celestial_pole_in_ecliptic_frame() {
        let d = Direction::from_equatorial(0.0, 90.0);
        assert!(approx(d.lon_deg, 90.0, 1e-9));
        assert!(approx(d.lat_deg, 90.0 - OBLIQUITY_J2000_DEG, 1e-9));
    }

    #[test]
    fn conversions_agree_both_ways() {
        for &(ra, dec) in &[(83.8, -5.4), (279.2, 38.8), (201.3, -11.2), (10.0, 60.0)] {
            let fwd = Direction::from_equatorial(ra, dec);
            let back = Direction::from_ecliptic(fwd.lon_deg, fwd.lat_deg);
            assert!(approx(back.ra_deg(), ra, 1e-8), "ra {ra} -> {}", back.ra_deg());
            assert!(approx(back.dec_deg, dec, 1e-8));
        }
    }

    #[test]
    fn vector_direction() {
        let d = Direction::from_ecliptic_vector(0.0, -2.0, 0.0);
        assert!(approx(d.lon_deg, 270.0, 1e-12));
        assert!(approx(d.lat_deg, 0.0, 1e-12));
    }
}
