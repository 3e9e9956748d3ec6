use crate::types::{LineSegment, ProjectedPoint};

/// Plain straight-line distance in axis units; knows nothing of the period.
#[inline]
pub fn dist(a: ProjectedPoint, b: ProjectedPoint) -> f64 {
    let dlon = a.lon - b.lon;
    let dlat = a.lat - b.lat;
    (dlon * dlon + dlat * dlat).sqrt()
}

/// Outcome of fitting one line onto a periodic longitude axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wrapped {
    /// The direct line is already the short way round.
    Direct(LineSegment),
    /// The short way crosses the boundary; the line is drawn twice, once
    /// running off each edge of the chart.
    Split(LineSegment, LineSegment),
}

impl Wrapped {
    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split(..))
    }

    pub fn into_vec(self) -> Vec<LineSegment> {
        match self {
            Self::Direct(s) => vec![s],
            Self::Split(a, b) => vec![a, b],
        }
    }
}

/// Decide whether `line` should wrap across the longitude boundary of `period`.
///
/// The direct line is compared with the two lines obtained by moving one end a
/// whole period to the right. Comparisons are strict, so on a tie the direct
/// line wins, and a right shift of the start point is preferred over a right
/// shift of the end point. Latitude is never touched.
pub fn wrap_segment(line: LineSegment, period: f64) -> Wrapped {
    let (p0, p1) = (line.a, line.b);
    let d_plain = line.length();
    let d_shift_right = dist(p0.shifted(period), p1);
    let d_shift_left = dist(p0, p1.shifted(period));

    if d_shift_right < d_plain {
        Wrapped::Split(
            LineSegment::new(p0.shifted(period), p1),
            LineSegment::new(p0, p1.shifted(-period)),
        )
    } else if d_shift_left < d_plain {
        Wrapped::Split(
            LineSegment::new(p0.shifted(-period), p1),
            LineSegment::new(p0, p1.shifted(period)),
        )
    } else {
        Wrapped::Direct(line)
    }
}

/// Wrap every line independently. Returns the drawable segments and how many
/// of the inputs had to be split.
pub fn wrap_segments<I>(lines: I, period: f64) -> (Vec<LineSegment>, usize)
where
    I: IntoIterator<Item = LineSegment>,
{
    let mut out = Vec::new();
    let mut split = 0usize;
    for line in lines {
        let w = wrap_segment(line, period);
        if w.is_split() {
            split += 1;
        }
        out.extend(w.into_vec());
    }
    (out, split)
}

/// Break a sampled curve into consecutive pairs and wrap each.
pub fn wrap_polyline(points: &[ProjectedPoint], period: f64) -> Vec<LineSegment> {
    let pairs = points.windows(2).map(|w| LineSegment::new(w[0], w[1]));
    wrap_segments(pairs, period).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astro::periodic_delta;
    use crate::test_utils::approx;

    fn pt(lon: f64, lat: f64) -> ProjectedPoint {
        ProjectedPoint::new(lon, lat)
    }

    fn seg(a: (f64, f64), b: (f64, f64)) -> LineSegment {
        LineSegment::new(pt(a.0, a.1), pt(b.0, b.1))
    }

    #[test]
    fn crossing_zero_from_the_right_splits_leftward_copy() {
        // p1 shifted right is closest
        let w = wrap_segment(seg((359.0, 10.0), (2.0, -5.0)), 360.0);
        assert_eq!(
            w,
            Wrapped::Split(seg((-1.0, 10.0), (2.0, -5.0)), seg((359.0, 10.0), (362.0, -5.0)))
        );
    }

    #[test]
    fn crossing_zero_from_the_left_splits_rightward_copy() {
        let w = wrap_segment(seg((2.0, -5.0), (359.0, 10.0)), 360.0);
        assert_eq!(
            w,
            Wrapped::Split(seg((362.0, -5.0), (359.0, 10.0)), seg((2.0, -5.0), (-1.0, 10.0)))
        );
    }

    #[test]
    fn short_line_is_untouched() {
        let line = seg((10.0, 0.0), (20.0, 5.0));
        assert_eq!(wrap_segment(line, 360.0), Wrapped::Direct(line));
    }

    #[test]
    fn hours_axis_wraps_at_24() {
        let w = wrap_segment(seg((23.8, 5.0), (0.1, 6.0)), 24.0);
        let segs = w.into_vec();
        assert_eq!(segs.len(), 2);
        assert!(approx(segs[0].a.lon, -0.2, 1e-12));
        assert!(approx(segs[1].b.lon, 24.1, 1e-12));
        // latitudes survive unchanged
        assert_eq!(segs[0].a.lat, 5.0);
        assert_eq!(segs[1].b.lat, 6.0);
    }

    #[test]
    fn tie_keeps_direct_line() {
        // Exactly half a period apart: every option has the same length
        let line = seg((0.0, 0.0), (180.0, 0.0));
        assert_eq!(wrap_segment(line, 360.0), Wrapped::Direct(line));
        let line = seg((180.0, 0.0), (0.0, 0.0));
        assert_eq!(wrap_segment(line, 360.0), Wrapped::Direct(line));
    }

    #[test]
    fn drawn_length_matches_shortest_option() {
        let period = 360.0;
        let lons = [0.0, 0.5, 17.0, 90.0, 179.0, 181.0, 270.0, 340.0, 359.9];
        let lats = [(-20.0, 25.0), (0.0, 0.0), (10.0, -5.0)];
        for &a in &lons {
            for &b in &lons {
                for &(la, lb) in &lats {
                    let line = seg((a, la), (b, lb));
                    let shortest = dist(line.a, line.b)
                        .min(dist(line.a.shifted(period), line.b))
                        .min(dist(line.a, line.b.shifted(period)));
                    for s in wrap_segment(line, period).into_vec() {
                        assert!(approx(s.length(), shortest, 1e-9), "{a}->{b}");
                    }
                    // And equals the true periodic separation
                    let dl = periodic_delta(a, b, period);
                    let true_len = (dl * dl + (lb - la) * (lb - la)).sqrt();
                    assert!(approx(shortest, true_len, 1e-9));
                }
            }
        }
    }

    #[test]
    fn no_wrap_is_identity() {
        for &(a, b) in &[(0.0, 100.0), (200.0, 359.0), (45.0, 45.0)] {
            let line = seg((a, 1.0), (b, 2.0));
            assert_eq!(wrap_segment(line, 360.0).into_vec(), vec![line]);
        }
    }

    #[test]
    fn wrap_segments_counts_splits() {
        let lines = vec![
            seg((10.0, 0.0), (20.0, 0.0)),
            seg((359.0, 0.0), (1.0, 0.0)),
            seg((1.0, 0.0), (359.0, 0.0)),
        ];
        let (out, split) = wrap_segments(lines, 360.0);
        assert_eq!(split, 2);
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn polyline_wraps_each_step() {
        let pts = [pt(22.0, 0.0), pt(23.5, 1.0), pt(0.5, 2.0), pt(2.0, 3.0)];
        let segs = wrap_polyline(&pts, 24.0);
        assert_eq!(segs.len(), 4);
        assert!(segs.iter().all(|s| s.length() < 2.0));
        assert!(wrap_polyline(&pts[..1], 24.0).is_empty());
    }
}
