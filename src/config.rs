use serde::{Deserialize, Serialize};

/// How one solar-system body is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyStyle {
    pub id: String,
    pub color: String,
    pub marker_size: f64,
    pub label: String,
    #[serde(default)]
    pub show_motion_vector: bool,
}

impl BodyStyle {
    fn new(id: &str, color: &str, marker_size: f64, label: &str, show_motion_vector: bool) -> Self {
        Self {
            id: id.to_string(),
            color: color.to_string(),
            marker_size,
            label: label.to_string(),
            show_motion_vector,
        }
    }
}

/// Bodies to plot, in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyTable {
    pub entries: Vec<BodyStyle>,
}

impl Default for BodyTable {
    fn default() -> Self {
        Self {
            entries: vec![
                BodyStyle::new("sun", "yellow", 10.0, "Sun", true),
                BodyStyle::new("moon", "grey", 10.0, "Moon", false),
                BodyStyle::new("mercury", "orange", 6.0, "Mercury", true),
                BodyStyle::new("venus", "silver", 6.0, "Venus", true),
                BodyStyle::new("mars", "red", 5.0, "Mars", false),
                BodyStyle::new("jupiter_barycenter", "brown", 5.0, "Jupiter", false),
                BodyStyle::new("saturn_barycenter", "lightgrey", 5.0, "Saturn", false),
                BodyStyle::new("uranus_barycenter", "cyan", 4.0, "Uranus", false),
                BodyStyle::new("neptune_barycenter", "blue", 4.0, "Neptune", false),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub limiting_magnitude: f64,
    /// Displayed latitude band, degrees either side of zero.
    pub lat_limit_deg: f64,
    /// Time step for motion vectors, days.
    pub motion_offset_days: f64,
    /// Ecliptic longitude step when sampling the reference curve, degrees.
    pub reference_step_deg: f64,
    pub bodies: BodyTable,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            limiting_magnitude: 3.0,
            lat_limit_deg: 30.0,
            motion_offset_days: 7.0,
            reference_step_deg: 2.0,
            bodies: BodyTable::default(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Margin {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Margin {
    #[cfg(test)]
    pub fn uniform(px: u32) -> Self {
        Self {
            top: px,
            bottom: px,
            left: px,
            right: px,
        }
    }
}

/// Pixel geometry of the SVG output.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub width: u32,
    pub margin: Margin,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1900,
            margin: Margin {
                top: 40,
                bottom: 50,
                left: 60,
                right: 30,
            },
        }
    }
}
