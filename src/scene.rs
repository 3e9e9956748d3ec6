//! Renderer-agnostic description of one chart panel.

use serde::Serialize;

use crate::types::{Frame, LineSegment, MotionVector, ProjectedPoint};

#[derive(Debug, Clone, Serialize)]
pub struct StarPoint {
    pub hip: u32,
    pub position: ProjectedPoint,
    pub magnitude: f64,
    /// Marker area, in the units the brightness filter produces.
    pub size: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FigureLines {
    pub abbr: String,
    pub name: String,
    pub segments: Vec<LineSegment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BodyMarker {
    pub id: String,
    pub label: String,
    pub color: String,
    pub marker_size: f64,
    pub position: ProjectedPoint,
    pub motion: Option<MotionVector>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Label {
    pub text: String,
    pub position: ProjectedPoint,
    /// Counter-clockwise, degrees.
    pub rotation_deg: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartScene {
    pub frame: Frame,
    pub period: f64,
    pub lat_limit: f64,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_ticks: Vec<f64>,
    pub stars: Vec<StarPoint>,
    pub constellation_lines: Vec<FigureLines>,
    pub reference_curve: Vec<LineSegment>,
    pub bodies: Vec<BodyMarker>,
    pub labels: Vec<Label>,
}

impl ChartScene {
    /// All constellation segments, figure by figure.
    #[cfg(test)]
    pub fn constellation_segments(&self) -> impl Iterator<Item = &LineSegment> {
        self.constellation_lines.iter().flat_map(|f| f.segments.iter())
    }
}
