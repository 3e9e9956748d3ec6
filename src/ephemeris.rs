//! Geocentric directions of the Sun, Moon and planets.
//!
//! Planets follow J2000 mean Keplerian elements with linear rates
//! (E. M. Standish, "Approximate Positions of the Planets", table 1, valid
//! 1800-2050), which is good to a fraction of a degree as seen from Earth.
//! The Moon uses the short low-precision series from the Astronomical Almanac.

use std::f64::consts::PI;

use crate::astro::Direction;
use crate::error::{ChartError, Result};
use crate::time::ChartTime;

/// Anything that can say where a named body appears from Earth at an instant.
pub trait EphemerisSource {
    fn direction(&self, body: &str, t: &ChartTime) -> Result<Direction>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    /// Accepts plain names and the `<planet>_barycenter` spelling used by JPL kernels.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().to_lowercase();
        let name = id.strip_suffix("_barycenter").unwrap_or(&id);
        match name {
            "sun" => Some(Self::Sun),
            "moon" => Some(Self::Moon),
            "mercury" => Some(Self::Mercury),
            "venus" => Some(Self::Venus),
            "mars" => Some(Self::Mars),
            "jupiter" => Some(Self::Jupiter),
            "saturn" => Some(Self::Saturn),
            "uranus" => Some(Self::Uranus),
            "neptune" => Some(Self::Neptune),
            _ => None,
        }
    }
}

/// Mean elements at J2000 and their rates per Julian century.
#[derive(Debug, Clone, Copy)]
struct OrbitalElements {
    a: [f64; 2],
    e: [f64; 2],
    incl: [f64; 2],
    mean_long: [f64; 2],
    long_peri: [f64; 2],
    long_node: [f64; 2],
}

const MERCURY: OrbitalElements = OrbitalElements {
    a: [0.387_099_27, 0.000_000_37],
    e: [0.205_635_93, 0.000_019_06],
    incl: [7.004_979_02, -0.005_947_49],
    mean_long: [252.250_323_50, 149_472.674_111_75],
    long_peri: [77.457_796_28, 0.160_476_89],
    long_node: [48.330_765_93, -0.125_340_81],
};

const VENUS: OrbitalElements = OrbitalElements {
    a: [0.723_335_66, 0.000_003_90],
    e: [0.006_776_72, -0.000_041_07],
    incl: [3.394_676_05, -0.000_788_90],
    mean_long: [181.979_099_50, 58_517.815_387_29],
    long_peri: [131.602_467_18, 0.002_683_29],
    long_node: [76.679_842_55, -0.277_694_18],
};

const EARTH_MOON_BARYCENTER: OrbitalElements = OrbitalElements {
    a: [1.000_002_61, 0.000_005_62],
    e: [0.016_711_23, -0.000_043_92],
    incl: [-0.000_015_31, -0.012_946_68],
    mean_long: [100.464_571_66, 35_999.372_449_81],
    long_peri: [102.937_681_93, 0.323_273_64],
    long_node: [0.0, 0.0],
};

const MARS: OrbitalElements = OrbitalElements {
    a: [1.523_710_34, 0.000_018_47],
    e: [0.093_394_10, 0.000_078_82],
    incl: [1.849_691_42, -0.008_131_31],
    mean_long: [-4.553_432_05, 19_140.302_684_99],
    long_peri: [-23.943_629_59, 0.444_410_88],
    long_node: [49.559_538_91, -0.292_573_43],
};

const JUPITER: OrbitalElements = OrbitalElements {
    a: [5.202_887_00, -0.000_116_07],
    e: [0.048_386_24, -0.000_132_53],
    incl: [1.304_396_95, -0.001_837_14],
    mean_long: [34.396_440_51, 3_034.746_127_75],
    long_peri: [14.728_479_83, 0.212_526_68],
    long_node: [100.473_909_09, 0.204_691_06],
};

const SATURN: OrbitalElements = OrbitalElements {
    a: [9.536_675_94, -0.001_250_60],
    e: [0.053_861_79, -0.000_509_91],
    incl: [2.485_991_87, 0.001_936_09],
    mean_long: [49.954_244_23, 1_222.493_622_01],
    long_peri: [92.598_878_31, -0.418_972_16],
    long_node: [113.662_424_48, -0.288_677_94],
};

const URANUS: OrbitalElements = OrbitalElements {
    a: [19.189_164_64, -0.001_961_76],
    e: [0.047_257_44, -0.000_043_97],
    incl: [0.772_637_83, -0.002_429_39],
    mean_long: [313.238_104_51, 428.482_027_85],
    long_peri: [170.954_276_30, 0.408_052_81],
    long_node: [74.016_925_03, 0.042_405_89],
};

const NEPTUNE: OrbitalElements = OrbitalElements {
    a: [30.069_922_76, 0.000_262_91],
    e: [0.008_590_48, 0.000_051_05],
    incl: [1.770_043_47, 0.000_353_72],
    mean_long: [-55.120_029_69, 218.459_453_25],
    long_peri: [44.964_762_27, -0.322_414_64],
    long_node: [131.784_225_74, -0.011_834_82],
};

// Speed of light in AU per day
const LIGHT_AU_PER_DAY: f64 = 173.144_632_7;

// General precession in ecliptic longitude, degrees per Julian century
const PRECESSION_DEG_PER_CENTURY: f64 = 1.396_971_3;

fn solve_kepler(m: f64, e: f64) -> f64 {
    let mut ea = m + e * m.sin();
    for _ in 0..10 {
        let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
        ea -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ea
}

/// Heliocentric position in J2000 ecliptic axes, AU.
fn heliocentric(el: &OrbitalElements, centuries: f64) -> [f64; 3] {
    let at = |v: [f64; 2]| v[0] + v[1] * centuries;

    let a = at(el.a);
    let e = at(el.e);
    let incl = at(el.incl).to_radians();
    let long_peri = at(el.long_peri);
    let long_node = at(el.long_node);
    let omega = (long_peri - long_node).to_radians();
    let node = long_node.to_radians();

    // Mean anomaly into [-pi, pi)
    let m = ((at(el.mean_long) - long_peri).to_radians() + PI).rem_euclid(2.0 * PI) - PI;
    let ea = solve_kepler(m, e);

    let x_orb = a * (ea.cos() - e);
    let y_orb = a * (1.0 - e * e).sqrt() * ea.sin();

    let (sw, cw) = omega.sin_cos();
    let (so, co) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    [
        (cw * co - sw * so * ci) * x_orb + (-sw * co - cw * so * ci) * y_orb,
        (cw * so + sw * co * ci) * x_orb + (-sw * so + cw * co * ci) * y_orb,
        (sw * si) * x_orb + (cw * si) * y_orb,
    ]
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Ecliptic longitude and latitude of the Moon, degrees, J2000 ecliptic.
fn moon_ecliptic(centuries: f64) -> (f64, f64) {
    let s = |deg: f64| deg.to_radians().sin();
    let t = centuries;

    let lon = 218.32 + 481_267.881 * t
        + 6.29 * s(135.0 + 477_198.87 * t)
        - 1.27 * s(259.3 - 413_335.36 * t)
        + 0.66 * s(235.7 + 890_534.22 * t)
        + 0.21 * s(269.9 + 954_397.74 * t)
        - 0.19 * s(357.5 + 35_999.05 * t)
        - 0.11 * s(186.5 + 966_404.03 * t);
    let lat = 5.13 * s(93.3 + 483_202.02 * t)
        + 0.28 * s(228.2 + 960_400.89 * t)
        - 0.28 * s(318.3 + 6_003.15 * t)
        - 0.17 * s(217.6 - 407_332.21 * t);

    // The series is referred to the equinox of date
    (lon - PRECESSION_DEG_PER_CENTURY * t, lat)
}

/// Analytic ephemeris; needs no data files.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeplerEphemeris;

impl KeplerEphemeris {
    pub fn new() -> Self {
        Self
    }

    fn body_direction(&self, body: Body, t: &ChartTime) -> Direction {
        let centuries = t.julian_centuries();
        if body == Body::Moon {
            let (lon, lat) = moon_ecliptic(centuries);
            return Direction::from_ecliptic(lon, lat);
        }

        let earth = heliocentric(&EARTH_MOON_BARYCENTER, centuries);
        let elements = match body {
            Body::Mercury => Some(&MERCURY),
            Body::Venus => Some(&VENUS),
            Body::Mars => Some(&MARS),
            Body::Jupiter => Some(&JUPITER),
            Body::Saturn => Some(&SATURN),
            Body::Uranus => Some(&URANUS),
            Body::Neptune => Some(&NEPTUNE),
            Body::Sun | Body::Moon => None,
        };

        let at = |c: f64| elements.map_or([0.0; 3], |el| heliocentric(el, c));

        // One light-time iteration: see the body where it was when the light left
        let first = sub(at(centuries), earth);
        let delay_centuries = norm(first) / LIGHT_AU_PER_DAY / 36_525.0;
        let v = sub(at(centuries - delay_centuries), earth);

        Direction::from_ecliptic_vector(v[0], v[1], v[2])
    }
}

impl EphemerisSource for KeplerEphemeris {
    fn direction(&self, body: &str, t: &ChartTime) -> Result<Direction> {
        let b = Body::from_id(body).ok_or_else(|| ChartError::UnknownObject(body.to_string()))?;
        Ok(self.body_direction(b, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astro::periodic_delta;
    use crate::test_utils::{approx, time_at};

    fn elongation(eph: &KeplerEphemeris, body: &str, t: &ChartTime) -> f64 {
        let sun = eph.direction("sun", t).unwrap();
        let p = eph.direction(body, t).unwrap();
        let (l1, b1) = (sun.lon_deg.to_radians(), sun.lat_deg.to_radians());
        let (l2, b2) = (p.lon_deg.to_radians(), p.lat_deg.to_radians());
        (b1.sin() * b2.sin() + b1.cos() * b2.cos() * (l1 - l2).cos())
            .clamp(-1.0, 1.0)
            .acos()
            .to_degrees()
    }

    #[test]
    fn body_ids_accept_barycenter_aliases() {
        assert_eq!(Body::from_id("jupiter_barycenter"), Some(Body::Jupiter));
        assert_eq!(Body::from_id("Saturn"), Some(Body::Saturn));
        assert_eq!(Body::from_id("sun"), Some(Body::Sun));
        assert_eq!(Body::from_id("pluto"), None);
        assert_eq!(Body::from_id("sun_barycenter_x"), None);
    }

    #[test]
    fn unknown_body_fails_fast() {
        let err = KeplerEphemeris::new()
            .direction("vulcan", &time_at(2024, 1, 1))
            .unwrap_err();
        assert!(matches!(err, ChartError::UnknownObject(ref s) if s == "vulcan"));
    }

    #[test]
    fn kepler_solver_converges() {
        for &(m, e) in &[(0.1, 0.0167), (2.5, 0.2056), (-3.0, 0.5)] {
            let ea = solve_kepler(m, e);
            assert!(approx(ea - e * ea.sin(), m, 1e-10));
        }
    }

    #[test]
    fn sun_at_j2000() {
        let t = ChartTime::from_utc(
            chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2000, 1, 1, 12, 0, 0).unwrap(),
        );
        let sun = KeplerEphemeris::new().direction("sun", &t).unwrap();
        assert!(approx(sun.lon_deg, 280.38, 0.1), "lon {}", sun.lon_deg);
        assert!(sun.lat_deg.abs() < 0.01);
    }

    #[test]
    fn sun_near_march_equinox() {
        // 2024-03-20 03:06 UTC; J2000 longitude sits a third of a degree short of 0
        let t = ChartTime::from_utc(
            chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2024, 3, 20, 3, 6, 0).unwrap(),
        );
        let sun = KeplerEphemeris::new().direction("sun", &t).unwrap();
        let off = periodic_delta(0.0, sun.lon_deg, 360.0);
        assert!(off.abs() < 1.0, "offset {off}");
        assert!(sun.dec_deg.abs() < 0.5);
    }

    #[test]
    fn moon_at_j2000() {
        let t = ChartTime::from_utc(
            chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2000, 1, 1, 12, 0, 0).unwrap(),
        );
        let moon = KeplerEphemeris::new().direction("moon", &t).unwrap();
        assert!(approx(moon.lon_deg, 223.3, 1.0), "lon {}", moon.lon_deg);
        assert!(approx(moon.lat_deg, 5.2, 0.5), "lat {}", moon.lat_deg);
    }

    #[test]
    fn inner_planets_stay_near_the_sun() {
        let eph = KeplerEphemeris::new();
        for (y, m) in [(2001, 5), (2010, 9), (2019, 2), (2024, 11), (2031, 7)] {
            let t = time_at(y, m, 15);
            assert!(elongation(&eph, "mercury", &t) <= 28.5);
            assert!(elongation(&eph, "venus", &t) <= 47.5);
        }
    }

    #[test]
    fn planets_hug_the_ecliptic() {
        let eph = KeplerEphemeris::new();
        let t = time_at(2025, 6, 1);
        for id in [
            "mars",
            "jupiter_barycenter",
            "saturn_barycenter",
            "uranus_barycenter",
            "neptune_barycenter",
        ] {
            let d = eph.direction(id, &t).unwrap();
            assert!(d.lat_deg.abs() < 8.0, "{id} lat {}", d.lat_deg);
            assert!((0.0..360.0).contains(&d.lon_deg));
        }
    }

    #[test]
    fn sun_advances_about_a_degree_a_day() {
        let eph = KeplerEphemeris::new();
        let t = time_at(2023, 8, 1);
        let a = eph.direction("sun", &t).unwrap();
        let b = eph.direction("sun", &t.add_days(7.0)).unwrap();
        let d = periodic_delta(a.lon_deg, b.lon_deg, 360.0);
        assert!(d > 6.5 && d < 7.5, "moved {d}");
    }
}
