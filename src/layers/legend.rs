use svg::node::element::{Circle, Group, Rectangle};

use crate::layers::{group_with_class, text, Layer, Panel};

const ROW_HEIGHT: f64 = 16.0;
const PAD: f64 = 8.0;

/// Body key in the top-left corner of the first panel.
pub struct LegendLayer;
impl LegendLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for LegendLayer {
    fn render(&self, panel: &Panel<'_>) -> Group {
        let mut g = group_with_class("legend");
        let bodies = &panel.scene.bodies;
        if panel.index != 0 || bodies.is_empty() {
            return g;
        }

        let l = &panel.layout;
        let (x0, y0) = (l.plot_x + PAD, l.plot_y + PAD);
        g = g.add(
            Rectangle::new()
                .set("class", "legend-box")
                .set("x", x0)
                .set("y", y0)
                .set("width", 90.0)
                .set("height", bodies.len() as f64 * ROW_HEIGHT + PAD),
        );

        for (i, b) in bodies.iter().enumerate() {
            let cy = y0 + PAD + i as f64 * ROW_HEIGHT + ROW_HEIGHT / 2.0 - 4.0;
            g = g.add(
                Circle::new()
                    .set("cx", x0 + PAD + 4.0)
                    .set("cy", cy)
                    .set("r", (b.marker_size / 2.0).min(5.0))
                    .set("fill", b.color.as_str()),
            );
            g = g.add(text("legend-label", x0 + PAD + 14.0, cy + 4.0, "start", &b.label));
        }
        g
    }
}
