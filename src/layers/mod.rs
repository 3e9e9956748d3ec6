use svg::node::element::path::Data;
use svg::node::element::{Group, Path, Text as TextEl};

use crate::layout::PanelLayout;
use crate::scene::ChartScene;
use crate::types::LineSegment;

/// One scene placed on the page.
pub struct Panel<'a> {
    pub scene: &'a ChartScene,
    pub layout: PanelLayout,
    pub index: usize,
}

impl Panel<'_> {
    pub fn clip_id(&self) -> String {
        format!("clip-panel-{}", self.index)
    }
}

pub trait Layer {
    /// Produce an SVG group for this layer.
    fn render(&self, panel: &Panel<'_>) -> Group;
}

pub fn group_with_class(class: &str) -> Group {
    let mut g = Group::new();
    g = g.set("class", class);
    g
}

pub fn text(class: &str, x: f64, y: f64, anchor: &str, content: &str) -> TextEl {
    TextEl::new(content)
        .set("class", class)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
}

/// A single path holding one move/line pair per segment.
pub fn segments_path(class: &str, panel: &Panel<'_>, segments: &[LineSegment]) -> Option<Path> {
    if segments.is_empty() {
        return None;
    }
    let mut d = Data::new();
    for s in segments {
        let a = panel.layout.to_px(s.a);
        let b = panel.layout.to_px(s.b);
        d = d.move_to((a.x, a.y)).line_to((b.x, b.y));
    }
    Some(
        Path::new()
            .set("class", class)
            .set("fill", "none")
            .set("d", d),
    )
}

pub mod background;
pub mod bodies;
pub mod constellations;
pub mod ecliptic;
pub mod frame;
pub mod grid;
pub mod labels;
pub mod legend;
pub mod stars;

pub use background::BackgroundLayer;
pub use bodies::BodiesLayer;
pub use constellations::ConstellationsLayer;
pub use ecliptic::EclipticLayer;
pub use frame::FrameLayer;
pub use grid::GridLayer;
pub use labels::LabelsLayer;
pub use legend::LegendLayer;
pub use stars::StarsLayer;
