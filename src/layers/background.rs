use svg::node::element::{Group, Rectangle};

use crate::layers::{group_with_class, Layer, Panel};

pub struct BackgroundLayer;
impl BackgroundLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for BackgroundLayer {
    fn render(&self, panel: &Panel<'_>) -> Group {
        let l = &panel.layout;
        group_with_class("background").add(
            Rectangle::new()
                .set("class", "sky")
                .set("x", l.plot_x)
                .set("y", l.plot_y)
                .set("width", l.plot_w)
                .set("height", l.plot_h),
        )
    }
}
