use svg::node::element::Group;

use crate::layers::{group_with_class, segments_path, Layer, Panel};

pub struct ConstellationsLayer;
impl ConstellationsLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for ConstellationsLayer {
    fn render(&self, panel: &Panel<'_>) -> Group {
        let mut g = group_with_class("constellations");

        for fig in &panel.scene.constellation_lines {
            if let Some(path) = segments_path("constellation", panel, &fig.segments) {
                let name = if fig.name.is_empty() { &fig.abbr } else { &fig.name };
                g = g.add(
                    Group::new()
                        .set("id", format!("{}-{}", fig.abbr, panel.index))
                        .set("data-name", name.as_str())
                        .add(path),
                );
            }
        }
        g
    }
}
