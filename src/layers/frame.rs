use svg::node::element::{Group, Line, Rectangle};

use crate::layers::{group_with_class, text, Layer, Panel};
use crate::types::{Frame, ProjectedPoint};

const TICK_LEN: f64 = 6.0;
const LAT_STEP_DEG: i32 = 10;

fn lon_label(frame: Frame, x: f64) -> String {
    match frame {
        Frame::Ecliptic => format!("{x:.0}°"),
        Frame::Equatorial => format!("{x:.0}h"),
    }
}

/// Border, ticks, axis titles and the panel title. Drawn outside the clip.
pub struct FrameLayer;
impl FrameLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for FrameLayer {
    fn render(&self, panel: &Panel<'_>) -> Group {
        let mut g = group_with_class("frame");
        let l = &panel.layout;
        let scene = panel.scene;
        let (top, bottom, left, right) = (l.plot_y, l.plot_y + l.plot_h, l.plot_x, l.plot_x + l.plot_w);

        // Border rectangle
        g = g.add(
            Rectangle::new()
                .set("x", left)
                .set("y", top)
                .set("width", l.plot_w)
                .set("height", l.plot_h)
                .set("fill", "none")
                .set("class", "border"),
        );

        // Longitude ticks along the bottom
        for &x in &scene.x_ticks {
            let p = l.to_px(ProjectedPoint::new(x, -l.lat_limit));
            g = g.add(
                Line::new()
                    .set("x1", p.x)
                    .set("y1", bottom)
                    .set("x2", p.x)
                    .set("y2", bottom + TICK_LEN)
                    .set("class", "tick"),
            );
            g = g.add(text(
                "tick-label",
                p.x,
                bottom + 20.0,
                "middle",
                &lon_label(scene.frame, x),
            ));
        }

        // Latitude ticks along the left
        let lim = l.lat_limit.floor() as i32;
        for d in (-lim..=lim).filter(|d| d % LAT_STEP_DEG == 0) {
            let p = l.to_px(ProjectedPoint::new(l.period, d as f64));
            g = g.add(
                Line::new()
                    .set("x1", left)
                    .set("y1", p.y)
                    .set("x2", left - TICK_LEN)
                    .set("y2", p.y)
                    .set("class", "tick"),
            );
            g = g.add(text("tick-label", left - 10.0, p.y + 4.0, "end", &format!("{d}°")));
        }

        g = g.add(text(
            "axis-title",
            (left + right) / 2.0,
            bottom + 40.0,
            "middle",
            &scene.x_label,
        ));
        let (yx, yy) = (left - 42.0, (top + bottom) / 2.0);
        g = g.add(
            text("axis-title", yx, yy, "middle", &scene.y_label)
                .set("transform", format!("rotate(-90,{yx:.2},{yy:.2})")),
        );
        g = g.add(text("title", (left + right) / 2.0, top - 12.0, "middle", &scene.title));

        g
    }
}
