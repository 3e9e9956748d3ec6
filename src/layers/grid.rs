use svg::node::element::path::Data;
use svg::node::element::{Group, Path};

use crate::layers::{group_with_class, Layer, Panel};
use crate::types::ProjectedPoint;

const LAT_STEP_DEG: f64 = 10.0;

pub struct GridLayer;
impl GridLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for GridLayer {
    fn render(&self, panel: &Panel<'_>) -> Group {
        let mut g = group_with_class("lines");
        let l = &panel.layout;
        let lat = l.lat_limit;

        // Longitude meridians at the major ticks
        let mut d = Data::new();
        for &x in &panel.scene.x_ticks {
            let a = l.to_px(ProjectedPoint::new(x, lat));
            let b = l.to_px(ProjectedPoint::new(x, -lat));
            d = d.move_to((a.x, a.y)).line_to((b.x, b.y));
        }
        g = g.add(
            Path::new()
                .set("class", "graticule lon")
                .set("fill", "none")
                .set("d", d),
        );

        // Latitude parallels
        let mut d = Data::new();
        let mut y = -(lat / LAT_STEP_DEG).floor() * LAT_STEP_DEG;
        while y <= lat {
            let a = l.to_px(ProjectedPoint::new(l.period, y));
            let b = l.to_px(ProjectedPoint::new(0.0, y));
            d = d.move_to((a.x, a.y)).line_to((b.x, b.y));
            y += LAT_STEP_DEG;
        }
        g = g.add(
            Path::new()
                .set("class", "graticule lat")
                .set("fill", "none")
                .set("d", d),
        );

        g
    }
}
