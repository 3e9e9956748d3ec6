use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::StarCatalog;

/// Marker area for a star of `magnitude` under limiting magnitude `limit`.
///
/// Strictly decreasing in magnitude over the range that matters. A forced-in
/// star fainter than `limit + 1.5` would wrap back up the parabola, so the
/// base is floored at zero and such stars get a zero-size marker.
pub fn marker_size(magnitude: f64, limit: f64) -> f64 {
    (1.5 + limit - magnitude).max(0.0).powi(2)
}

/// Stars to draw, keyed by Hipparcos number, with their marker sizes.
///
/// A star is in when it is at least as bright as `limit`, or when its number
/// is in `must_include` (constellation endpoints stay drawable however faint).
pub fn select_stars(
    catalog: &StarCatalog,
    limit: f64,
    must_include: &BTreeSet<u32>,
) -> BTreeMap<u32, f64> {
    catalog
        .iter()
        .filter(|s| s.magnitude <= limit || must_include.contains(&s.hip))
        .map(|s| (s.hip, marker_size(s.magnitude, limit)))
        .collect()
}
