use svg::node::element::{Circle, Group};

use crate::layers::{group_with_class, Layer, Panel};

pub struct StarsLayer;
impl StarsLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for StarsLayer {
    fn render(&self, panel: &Panel<'_>) -> Group {
        let mut g = group_with_class("stars");

        for s in &panel.scene.stars {
            // Marker size is an area; its square root is the diameter
            let r = s.size.sqrt() / 2.0;
            if r <= 0.0 {
                continue;
            }
            let p = panel.layout.to_px(s.position);
            g = g.add(
                Circle::new()
                    .set("id", format!("hip-{}-{}", s.hip, panel.index))
                    .set("class", "star")
                    .set("cx", p.x)
                    .set("cy", p.y)
                    .set("r", r),
            );
        }
        g
    }
}
