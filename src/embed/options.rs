use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

pub const BASE_INTERVAL_MS: u32 = 700;
pub const MIN_INTERVAL_MS: u32 = 250;

pub const WIDTH_RANGE: (u32, u32) = (180, 520);
pub const HEIGHT_RANGE: (u32, u32) = (160, 520);
pub const DEFAULT_DIMENSION: u32 = 260;

/// Distance of a docked widget from the top, left and right edges.
pub const ANCHOR_EDGE_PX: u32 = 20;
/// Bottom anchors sit higher to leave room for the caption under the widget.
pub const ANCHOR_BOTTOM_PX: u32 = 50;

/// Named screen positions for the default (undragged) placement.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    LeftMiddle,
    RightMiddle,
    #[default]
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    /// Unrecognized names fall back to the default anchor.
    pub fn normalize(raw: &str) -> Self {
        raw.trim().parse().unwrap_or_else(|_| {
            debug!(position = %raw, "unknown anchor, using default");
            Self::default()
        })
    }

    pub fn css_class(&self) -> String {
        format!("pos-{}", self)
    }

    /// Top-left corner of a widget of `widget` size docked at this anchor.
    pub fn origin(&self, window: Size, widget: Size) -> Point {
        let edge = ANCHOR_EDGE_PX as f64;
        let bottom = ANCHOR_BOTTOM_PX as f64;
        let left = edge;
        let center_x = (window.width - widget.width) / 2.0;
        let right = window.width - edge - widget.width;
        let top = edge;
        let middle_y = (window.height - widget.height) / 2.0;
        let low = window.height - bottom - widget.height;

        let (x, y) = match self {
            Self::TopLeft => (left, top),
            Self::TopCenter => (center_x, top),
            Self::TopRight => (right, top),
            Self::LeftMiddle => (left, middle_y),
            Self::RightMiddle => (right, middle_y),
            Self::BottomLeft => (left, low),
            Self::BottomCenter => (center_x, low),
            Self::BottomRight => (right, low),
        };
        Point::new(x, y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub position: Anchor,
    pub width: u32,
    pub height: u32,
    pub draggable: bool,
    pub label: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            position: Anchor::default(),
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            draggable: false,
            label: String::new(),
        }
    }
}

impl LayoutOptions {
    /// Builds options from unvalidated input, clamping every field.
    pub fn from_raw(
        position: &str,
        width: Option<&str>,
        height: Option<&str>,
        draggable: bool,
        label: &str,
    ) -> Self {
        Self {
            position: Anchor::normalize(position),
            width: clamp_dimension(width, WIDTH_RANGE),
            height: clamp_dimension(height, HEIGHT_RANGE),
            draggable,
            label: label.trim().to_string(),
        }
    }

    pub fn viewport(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }
}

/// Absent or non-numeric input yields the default; numbers are rounded and
/// clamped into `range`.
pub fn clamp_dimension(raw: Option<&str>, range: (u32, u32)) -> u32 {
    let parsed = raw
        .map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite());
    match parsed {
        Some(v) => v.round().clamp(range.0 as f64, range.1 as f64) as u32,
        None => DEFAULT_DIMENSION,
    }
}

/// `max(250, round(700 / speed))`; non-positive speeds count as 1x.
pub fn animation_interval(speed: f64) -> u32 {
    let speed = if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        1.0
    };
    let ms = (BASE_INTERVAL_MS as f64 / speed).round();
    (ms as u32).max(MIN_INTERVAL_MS)
}
