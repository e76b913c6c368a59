//! Pixel geometry of the rendered keyboard stage.
//!
//! Mirrors the widget stylesheet: rows are flex lines with an 8px gap, a 10px
//! vertical margin and a horizontal stagger; keys are 64x56 unless a width
//! class widens them. Coordinates are in the stage's local space.

use crate::layouts::{canonical_role, Layout};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const KEY_WIDTH: f64 = 64.0;
pub const KEY_HEIGHT: f64 = 56.0;
pub const KEY_GAP: f64 = 8.0;
pub const ROW_MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Key rectangles of one layout, indexed by role.
#[derive(Debug, Clone)]
pub struct StageGeometry {
    rects: HashMap<String, Rect>,
    bounds: Size,
}

impl StageGeometry {
    pub fn from_layout(layout: &Layout) -> Self {
        let mut rects = HashMap::new();
        let mut bounds = Size::default();

        for (r, row) in layout.rows.iter().enumerate() {
            // Sibling margins collapse, so rows sit one key height plus one margin apart.
            let y = ROW_MARGIN + r as f64 * (KEY_HEIGHT + ROW_MARGIN);
            let mut x = row.offset as f64;
            for key in &row.keys {
                let width = key.width.map(|w| w.px() as f64).unwrap_or(KEY_WIDTH);
                let rect = Rect {
                    x,
                    y,
                    width,
                    height: KEY_HEIGHT,
                };
                if let Some(role) = &key.role {
                    rects.insert(role.clone(), rect);
                }
                bounds.width = bounds.width.max(rect.right());
                bounds.height = bounds.height.max(rect.bottom() + ROW_MARGIN);
                x += width + KEY_GAP;
            }
        }

        Self { rects, bounds }
    }

    pub fn rect(&self, role: &str) -> Option<Rect> {
        self.rects.get(canonical_role(role)).copied()
    }

    /// Extent of the whole stage, including the last row's bottom margin.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Translation that centers `role` inside a viewport of the given size.
    pub fn pan_to(&self, role: &str, viewport: Size) -> Option<Point> {
        self.rect(role).map(|r| pan_offset(viewport, r))
    }
}

/// Viewport center minus the key center.
pub fn pan_offset(viewport: Size, key: Rect) -> Point {
    let c = key.center();
    Point::new(viewport.width / 2.0 - c.x, viewport.height / 2.0 - c.y)
}
