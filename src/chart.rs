use std::fs;
use svg::node::element::path::Data;
use svg::node::element::{ClipPath, Definitions, Group, Marker, Path, Rectangle, Style};
use svg::Document;

use crate::config::RenderConfig;
use crate::layers::{
    BackgroundLayer, BodiesLayer, ConstellationsLayer, EclipticLayer, FrameLayer, GridLayer,
    LabelsLayer, Layer, LegendLayer, Panel, StarsLayer,
};
use crate::layout::PanelLayout;
use crate::scene::ChartScene;

// Load the default css for embedding
const DEFAULT_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/styles/chart.css"));

/// Turns finished scenes into some visual output. Axis limits, aspect ratio
/// and titling are the renderer's business.
pub trait Renderer {
    type Output;

    fn render(&self, scenes: &[ChartScene]) -> Self::Output;
}

/// Stacks one SVG panel per scene, top to bottom.
pub struct SvgRenderer {
    cfg: RenderConfig,
    css_path: Option<String>,
}

impl SvgRenderer {
    pub fn new(cfg: RenderConfig, css_path: Option<String>) -> Self {
        Self { cfg, css_path }
    }

    fn load_css_text(&self) -> String {
        if let Some(path) = &self.css_path {
            match fs::read_to_string(path) {
                Ok(text) => return text,
                Err(e) => tracing::warn!(%path, error = %e, "falling back to embedded css"),
            }
        }
        // Embedded fallback
        DEFAULT_CSS.to_owned()
    }

    fn arrow_marker() -> Marker {
        Marker::new()
            .set("id", "arrow")
            .set("viewBox", "0 0 10 10")
            .set("refX", 10)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(Path::new().set(
                "d",
                Data::new()
                    .move_to((0.0, 0.0))
                    .line_to((10.0, 5.0))
                    .line_to((0.0, 10.0))
                    .close(),
            ))
    }

    fn render_panel(&self, panel: &Panel<'_>) -> (Group, ClipPath) {
        let l = &panel.layout;

        // Layer stack, back to front
        let clipped_layers: Vec<Box<dyn Layer>> = vec![
            Box::new(BackgroundLayer::new()),
            Box::new(GridLayer::new()),
            Box::new(EclipticLayer::new()),
            Box::new(ConstellationsLayer::new()),
            Box::new(StarsLayer::new()),
            Box::new(BodiesLayer::new()),
            Box::new(LabelsLayer::new()),
            Box::new(LegendLayer::new()),
        ];
        let unclipped_layers: Vec<Box<dyn Layer>> = vec![Box::new(FrameLayer::new())];

        let clip = ClipPath::new().set("id", panel.clip_id()).add(
            Rectangle::new()
                .set("x", l.plot_x)
                .set("y", l.plot_y)
                .set("width", l.plot_w)
                .set("height", l.plot_h),
        );

        let mut group = Group::new()
            .set("class", format!("panel {}", panel.scene.frame.name()));

        // Clipped layers inside the plot border
        let mut clipped = Group::new().set("clip-path", format!("url(#{})", panel.clip_id()));
        for layer in clipped_layers {
            clipped = clipped.add(layer.render(panel));
        }
        group = group.add(clipped);

        // Unclipped layers outside the plot border
        for layer in unclipped_layers {
            group = group.add(layer.render(panel));
        }

        (group, clip)
    }

    pub fn to_file(&self, scenes: &[ChartScene], path: &str) -> std::io::Result<()> {
        let doc = self.render(scenes);
        svg::save(path, &doc)
    }
}

impl Renderer for SvgRenderer {
    type Output = Document;

    fn render(&self, scenes: &[ChartScene]) -> Document {
        let mut defs = Definitions::new().add(Self::arrow_marker());
        let mut panels = Vec::with_capacity(scenes.len());
        let mut top = 0.0;

        for (index, scene) in scenes.iter().enumerate() {
            let layout = PanelLayout::new(&self.cfg, scene, top);
            top += layout.height;
            let panel = Panel {
                scene,
                layout,
                index,
            };
            let (group, clip) = self.render_panel(&panel);
            defs = defs.add(clip);
            panels.push(group);
        }

        let mut doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", self.cfg.width)
            .set("height", top.ceil())
            .set("class", "chart");

        let css = self.load_css_text();
        if !css.is_empty() {
            doc = doc.add(Style::new(css));
        }
        doc = doc.add(defs);
        for g in panels {
            doc = doc.add(g);
        }
        doc
    }
}
