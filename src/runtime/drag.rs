//! Drag state machine. Global move/up listeners exist only while `Dragging`.

use crate::geometry::{Point, Size};

/// Closest a dragged widget may come to the top/left viewport edge.
pub const EDGE_MIN: f64 = 8.0;
/// Space kept free between the widget and the right/bottom viewport edge.
pub const EDGE_PAD: f64 = 12.0;

pub const PRIMARY_BUTTON: u16 = 0;
/// Pointer travel (px, per axis) beyond which a press counts as a drag
/// rather than a click.
pub const DRAG_THRESHOLD: f64 = 3.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.ctrl || self.shift || self.alt || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDown {
    pub at: Point,
    pub button: u16,
    pub modifiers: Modifiers,
    /// The press landed on the minimize/restore control.
    pub on_toggle: bool,
}

impl PointerDown {
    pub fn primary(x: f64, y: f64) -> Self {
        Self {
            at: Point::new(x, y),
            button: PRIMARY_BUTTON,
            modifiers: Modifiers::default(),
            on_toggle: false,
        }
    }

    fn starts_drag(&self) -> bool {
        self.button == PRIMARY_BUTTON && !self.modifiers.any() && !self.on_toggle
    }
}

/// Keeps `value` within `[EDGE_MIN, window - widget - EDGE_PAD]`. When the
/// widget is larger than the window the lower bound wins.
pub fn clamp_axis(value: f64, widget: f64, window: f64) -> f64 {
    value.min(window - widget - EDGE_PAD).max(EDGE_MIN)
}

pub fn clamp_position(p: Point, widget: Size, window: Size) -> Point {
    Point::new(
        clamp_axis(p.x, widget.width, window.width),
        clamp_axis(p.y, widget.height, window.height),
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        pointer_start: Point,
        origin: Point,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DragMachine {
    state: DragState,
}

impl DragMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Whether window-level move/up listeners are attached.
    pub fn listeners_attached(&self) -> bool {
        self.is_dragging()
    }

    /// `Idle -> Dragging`. `current` is the widget's rendered top-left corner,
    /// so the drag starts without a jump. Returns whether a drag began.
    pub fn pointer_down(&mut self, event: &PointerDown, current: Point) -> bool {
        if self.is_dragging() || !event.starts_drag() {
            return false;
        }
        self.state = DragState::Dragging {
            pointer_start: event.at,
            origin: current,
        };
        true
    }

    /// New clamped position, or `None` when idle. Sizes are read per move
    /// since the window may be resized mid-drag.
    pub fn pointer_move(&self, pointer: Point, widget: Size, window: Size) -> Option<Point> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging {
                pointer_start,
                origin,
            } => {
                let moved = Point::new(
                    origin.x + pointer.x - pointer_start.x,
                    origin.y + pointer.y - pointer_start.y,
                );
                Some(clamp_position(moved, widget, window))
            }
        }
    }

    /// Whether `pointer` is past [`DRAG_THRESHOLD`] from where the drag began.
    pub fn travelled_past_threshold(&self, pointer: Point) -> bool {
        match self.state {
            DragState::Idle => false,
            DragState::Dragging { pointer_start, .. } => {
                (pointer.x - pointer_start.x).abs() > DRAG_THRESHOLD
                    || (pointer.y - pointer_start.y).abs() > DRAG_THRESHOLD
            }
        }
    }

    /// `Dragging -> Idle` on pointer-up or cancel. Returns whether a drag ended.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }
}
