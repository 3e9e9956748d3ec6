use svg::node::element::{Circle, Group, Line};

use crate::layers::{group_with_class, Layer, Panel};

/// Sun, Moon and planet markers, plus motion arrows where the scene has them.
pub struct BodiesLayer;
impl BodiesLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for BodiesLayer {
    fn render(&self, panel: &Panel<'_>) -> Group {
        let mut g = group_with_class("bodies");

        for b in &panel.scene.bodies {
            let p = panel.layout.to_px(b.position);

            if let Some(v) = &b.motion {
                let tip = panel.layout.to_px(v.tip());
                g = g.add(
                    Line::new()
                        .set("class", "motion")
                        .set("x1", p.x)
                        .set("y1", p.y)
                        .set("x2", tip.x)
                        .set("y2", tip.y)
                        .set("marker-end", "url(#arrow)"),
                );
            }

            g = g.add(
                Circle::new()
                    .set("id", format!("{}-{}", b.id, panel.index))
                    .set("class", "body")
                    .set("cx", p.x)
                    .set("cy", p.y)
                    .set("r", b.marker_size / 2.0)
                    .set("fill", b.color.as_str())
                    .set("stroke", b.color.as_str()),
            );
        }
        g
    }
}
