use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::astro::Direction;
use crate::brightness::select_stars;
use crate::catalog::{edge_endpoints, ConstellationFigure, StarCatalog};
use crate::config::ChartConfig;
use crate::ephemeris::EphemerisSource;
use crate::error::{ChartError, Result};
use crate::geometry::{wrap_polyline, wrap_segments};
use crate::motion::motion_vector;
use crate::projector::{project, project_body};
use crate::scene::{BodyMarker, ChartScene, FigureLines, Label, StarPoint};
use crate::time::ChartTime;
use crate::types::{Frame, LineSegment, ProjectedPoint};

pub struct Datasets<'a> {
    pub stars: &'a StarCatalog,
    pub constellations: &'a [ConstellationFigure],
    pub ephemeris: &'a dyn EphemerisSource,
}

/// Turns catalog, figures and ephemeris into chart scenes. Holds no state
/// between builds.
pub struct ChartComposer<'a> {
    pub data: Datasets<'a>,
    pub cfg: ChartConfig,
}

impl<'a> ChartComposer<'a> {
    pub fn new(data: Datasets<'a>, cfg: ChartConfig) -> Self {
        Self { data, cfg }
    }

    /// Build one panel. The frame name is checked before anything is computed.
    pub fn build_chart(
        &self,
        t: &ChartTime,
        frame: &str,
        limiting_magnitude: f64,
    ) -> Result<ChartScene> {
        let frame: Frame = frame.parse()?;
        self.build_chart_in(t, frame, limiting_magnitude)
    }

    pub fn build_chart_in(
        &self,
        t: &ChartTime,
        frame: Frame,
        limiting_magnitude: f64,
    ) -> Result<ChartScene> {
        let period = frame.period();

        let forced = edge_endpoints(self.data.constellations);
        let selected = select_stars(self.data.stars, limiting_magnitude, &forced);
        info!(
            frame = frame.name(),
            stars = selected.len(),
            forced = forced.len(),
            "selected stars"
        );

        let mut positions: BTreeMap<u32, ProjectedPoint> = BTreeMap::new();
        let mut stars = Vec::with_capacity(selected.len());
        for (&hip, &size) in &selected {
            let star = self.data.stars.get(hip)?;
            let position = project(&star.direction_at(t), frame);
            positions.insert(hip, position);
            stars.push(StarPoint {
                hip,
                position,
                magnitude: star.magnitude,
                size,
            });
        }

        let constellation_lines = self.constellation_lines(&positions, frame)?;
        let reference_curve = self.reference_curve(frame);

        let (bodies, labels) = self.bodies(t, frame)?;

        Ok(ChartScene {
            frame,
            period,
            lat_limit: self.cfg.lat_limit_deg,
            title: format!("Sun, Moon and Planets at {}", t.utc_label()),
            x_label: frame.x_label().to_string(),
            y_label: frame.y_label().to_string(),
            x_ticks: ticks(period, frame.tick_step()),
            stars,
            constellation_lines,
            reference_curve,
            bodies,
            labels,
        })
    }

    fn constellation_lines(
        &self,
        positions: &BTreeMap<u32, ProjectedPoint>,
        frame: Frame,
    ) -> Result<Vec<FigureLines>> {
        let mut out = Vec::with_capacity(self.data.constellations.len());
        let mut total_split = 0usize;

        for fig in self.data.constellations {
            let mut lines = Vec::with_capacity(fig.edges.len());
            for e in &fig.edges {
                lines.push(LineSegment::new(
                    Self::position_of(positions, e.a)?,
                    Self::position_of(positions, e.b)?,
                ));
            }
            let (segments, split) = wrap_segments(lines, frame.period());
            total_split += split;
            out.push(FigureLines {
                abbr: fig.abbr.clone(),
                name: fig.name.clone(),
                segments,
            });
        }

        debug!(split = total_split, "constellation edges wrapped");
        Ok(out)
    }

    // Endpoints are forced into the selection, so a miss means the figure
    // names a star the catalog does not have.
    fn position_of(positions: &BTreeMap<u32, ProjectedPoint>, hip: u32) -> Result<ProjectedPoint> {
        positions
            .get(&hip)
            .copied()
            .ok_or_else(|| ChartError::UnknownObject(format!("HIP {hip}")))
    }

    /// The ecliptic drawn against the chart: flat in its own frame, a sampled
    /// curve in equatorial coordinates.
    fn reference_curve(&self, frame: Frame) -> Vec<LineSegment> {
        let period = frame.period();
        match frame {
            // Spans the whole axis on purpose; wrapping it would fold it to nothing
            Frame::Ecliptic => vec![LineSegment::new(
                ProjectedPoint::new(0.0, 0.0),
                ProjectedPoint::new(period, 0.0),
            )],
            Frame::Equatorial => {
                let step = self.cfg.reference_step_deg.max(0.1);
                let n = (360.0 / step).ceil() as usize;
                let mut pts: Vec<ProjectedPoint> = (0..n)
                    .map(|i| project(&Direction::from_ecliptic(i as f64 * step, 0.0), frame))
                    .collect();
                // Close the loop back through the equinox
                if let Some(&first) = pts.first() {
                    pts.push(first);
                }
                wrap_polyline(&pts, period)
            }
        }
    }

    fn bodies(&self, t: &ChartTime, frame: Frame) -> Result<(Vec<BodyMarker>, Vec<Label>)> {
        let mut markers = Vec::with_capacity(self.cfg.bodies.entries.len());
        let mut labels = Vec::with_capacity(self.cfg.bodies.entries.len());

        for style in &self.cfg.bodies.entries {
            let position = project_body(self.data.ephemeris, &style.id, t, frame)?;
            let motion = if style.show_motion_vector {
                Some(motion_vector(
                    self.data.ephemeris,
                    &style.id,
                    t,
                    frame,
                    self.cfg.motion_offset_days,
                )?)
            } else {
                None
            };

            labels.push(Label {
                text: format!(" {}", style.label),
                position,
                rotation_deg: 90.0,
            });
            markers.push(BodyMarker {
                id: style.id.clone(),
                label: style.label.clone(),
                color: style.color.clone(),
                marker_size: style.marker_size,
                position,
                motion,
            });
        }

        Ok((markers, labels))
    }
}

fn ticks(period: f64, step: f64) -> Vec<f64> {
    let n = (period / step).round() as usize;
    (0..=n).map(|i| i as f64 * step).collect()
}
