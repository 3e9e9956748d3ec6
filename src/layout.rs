use crate::config::RenderConfig;
use crate::scene::ChartScene;
use crate::types::ProjectedPoint;

/// Pixel coordinates inside the SVG document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Where one panel sits in the document and how chart coordinates map onto it.
///
/// Longitude runs from the period at the left edge down to 0 at the right, as
/// the sky looks from inside the sphere. One degree of longitude (one hour is
/// fifteen) spans the same pixels as one degree of latitude.
#[derive(Debug, Clone, Copy)]
pub struct PanelLayout {
    pub plot_x: f64,
    pub plot_y: f64,
    pub plot_w: f64,
    pub plot_h: f64,
    pub height: f64,
    pub period: f64,
    pub lat_limit: f64,
}

impl PanelLayout {
    /// Layout for `scene`, with the panel's top edge at `top` pixels.
    pub fn new(cfg: &RenderConfig, scene: &ChartScene, top: f64) -> Self {
        let m = cfg.margin;
        let plot_x = m.left as f64;
        let plot_y = top + m.top as f64;
        let plot_w = cfg.width.saturating_sub(m.left + m.right).max(1) as f64;
        let lat_limit = scene.lat_limit.max(1.0);

        let px_per_deg = plot_w / 360.0;
        let plot_h = 2.0 * lat_limit * px_per_deg;

        Self {
            plot_x,
            plot_y,
            plot_w,
            plot_h,
            height: m.top as f64 + plot_h + m.bottom as f64,
            period: scene.period,
            lat_limit,
        }
    }

    pub fn to_px(&self, p: ProjectedPoint) -> Point {
        Point {
            x: self.plot_x + (self.period - p.lon) * self.x_scale(),
            y: self.plot_y + (self.lat_limit - p.lat) / (2.0 * self.lat_limit) * self.plot_h,
        }
    }

    /// Pixels per unit of longitude.
    pub fn x_scale(&self) -> f64 {
        self.plot_w / self.period
    }
}
