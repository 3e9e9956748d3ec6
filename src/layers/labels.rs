use svg::node::element::Group;

use crate::layers::{group_with_class, text, Layer, Panel};

pub struct LabelsLayer;
impl LabelsLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for LabelsLayer {
    fn render(&self, panel: &Panel<'_>) -> Group {
        let mut g = group_with_class("labels");

        for label in &panel.scene.labels {
            let p = panel.layout.to_px(label.position);
            let mut t = text("label", p.x, p.y, "start", &label.text);
            // Scene rotations are counter-clockwise; SVG turns clockwise
            if label.rotation_deg != 0.0 {
                t = t.set(
                    "transform",
                    format!("rotate({:.2},{:.2},{:.2})", -label.rotation_deg, p.x, p.y),
                );
            }
            g = g.add(t);
        }
        g
    }
}
