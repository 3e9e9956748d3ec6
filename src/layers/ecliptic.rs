use svg::node::element::Group;

use crate::layers::{group_with_class, segments_path, Layer, Panel};

/// The ecliptic, already cut at the longitude boundary by the composer.
pub struct EclipticLayer;
impl EclipticLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for EclipticLayer {
    fn render(&self, panel: &Panel<'_>) -> Group {
        let mut g = group_with_class("ecliptic");
        if let Some(path) = segments_path("ecliptic", panel, &panel.scene.reference_curve) {
            g = g.add(path);
        }
        g
    }
}
