//! One mounted widget instance.
//!
//! All state lives on the instance: several widgets on one page share nothing
//! but the storage they persist into. Host events arrive through the
//! `pointer_*`, `toggle`, `click_pill` and `tick` entry points.

use super::animation::{Animator, Frame};
use super::drag::{clamp_position, DragMachine, PointerDown};
use super::minimize::MinimizeState;
use super::store::{read_or_none, write_or_ignore, KeyValueStore, SavedCoords, StorageKeys};
use crate::embed::options::{DEFAULT_DIMENSION, MIN_INTERVAL_MS};
use crate::embed::{animation_interval, Anchor, EmbedAttributes};
use crate::geometry::{Point, Size};
use crate::layouts::{build_layout, canonical_role, Layout, OsTarget, Platform};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct MountOptions {
    pub os: OsTarget,
    pub sequence: Vec<String>,
    pub label: String,
    pub viewport: Size,
    pub interval_ms: u32,
    pub position: Anchor,
    pub draggable: bool,
    /// Mounted inside a `.kbd-wrap` container. Without one the widget renders
    /// inline and has no toggle, pill or drag.
    pub wrapped: bool,
}

impl MountOptions {
    /// Programmatic mount with `{os, seq}` only.
    pub fn new<S: AsRef<str>>(os: OsTarget, sequence: &[S]) -> Self {
        Self {
            os,
            sequence: sequence.iter().map(|s| s.as_ref().to_string()).collect(),
            label: String::new(),
            viewport: Size::new(DEFAULT_DIMENSION as f64, DEFAULT_DIMENSION as f64),
            interval_ms: animation_interval(1.0),
            position: Anchor::default(),
            draggable: false,
            wrapped: false,
        }
    }

    pub fn from_attributes(attrs: &EmbedAttributes) -> Self {
        Self {
            os: attrs.os,
            sequence: attrs.seq.clone(),
            label: attrs.label.clone(),
            viewport: Size::new(attrs.width as f64, attrs.height as f64),
            interval_ms: attrs.interval,
            position: attrs.position,
            draggable: attrs.draggable,
            wrapped: true,
        }
    }
}

/// What the widget can observe about the page it is mounted in.
#[derive(Debug, Clone, PartialEq)]
pub struct HostEnv {
    pub user_agent: String,
    pub window: Size,
    /// Rendered size of the expanded widget; defaults to its viewport size.
    pub widget: Option<Size>,
    /// Rendered size of the minimized pill. Without it the model measures a
    /// minimized widget at its expanded size.
    pub pill: Option<Size>,
}

impl HostEnv {
    pub fn new(user_agent: &str, window: Size) -> Self {
        Self {
            user_agent: user_agent.to_string(),
            window,
            widget: None,
            pill: None,
        }
    }
}

pub struct Widget<S: KeyValueStore> {
    platform: Platform,
    layout: Layout,
    options: MountOptions,
    keys: StorageKeys,
    animator: Animator,
    minimize: MinimizeState,
    drag: Option<DragMachine>,
    position: Option<Point>,
    /// The current drag has moved past the click threshold.
    drag_moved: bool,
    /// The next pill click belongs to a drag that just ended.
    swallow_click: bool,
    env: HostEnv,
    store: S,
}

impl<S: KeyValueStore> Widget<S> {
    /// Runs the mount sequence: platform detection, layout, persisted
    /// minimize state, persisted coordinates, then the first animation tick.
    pub fn mount(options: MountOptions, env: HostEnv, store: S) -> Self {
        let platform = options.os.platform_for(&env.user_agent);
        let sequence: Vec<String> = options
            .sequence
            .iter()
            .map(|s| canonical_role(&s.trim().to_lowercase()).to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let layout = build_layout(platform);
        let keys = StorageKeys::new(&sequence, &options.label);
        let animator = Animator::new(&sequence, &layout, options.viewport);

        let minimize = if options.wrapped {
            MinimizeState::from_stored(read_or_none(&store, &keys.state).as_deref())
        } else {
            MinimizeState::Expanded
        };
        let drag = (options.wrapped && options.draggable).then(DragMachine::new);

        let mut widget = Self {
            platform,
            layout,
            options,
            keys,
            animator,
            minimize,
            drag,
            position: None,
            drag_moved: false,
            swallow_click: false,
            env,
            store,
        };
        if widget.drag.is_some() {
            widget.restore_coords();
        }

        info!(
            platform = %widget.platform,
            keys = widget.animator.len(),
            state = %widget.minimize,
            "widget mounted"
        );
        widget.animator.tick();
        widget
    }

    fn restore_coords(&mut self) {
        let Some(raw) = read_or_none(&self.store, &self.keys.coords) else {
            return;
        };
        match serde_json::from_str::<SavedCoords>(&raw) {
            Ok(c) => {
                let p = clamp_position(Point::new(c.left, c.top), self.widget_size(), self.env.window);
                debug!(left = p.x, top = p.y, "restored drag position");
                self.position = Some(p);
            }
            Err(e) => debug!(error = %e, "ignoring unreadable saved position"),
        }
    }

    pub fn tick(&mut self) -> Option<Frame> {
        self.animator.tick().cloned()
    }

    /// Expanded <-> Minimized via the toggle control. The new state is
    /// persisted before returning.
    pub fn toggle(&mut self) -> MinimizeState {
        if self.options.wrapped {
            self.set_minimized(self.minimize.toggled());
        }
        self.minimize
    }

    /// The pill only exists while minimized; clicking it restores. The click
    /// that ends a drag of the pill is not a restore.
    pub fn click_pill(&mut self) -> MinimizeState {
        if std::mem::take(&mut self.swallow_click) {
            debug!("pill click after drag ignored");
            return self.minimize;
        }
        if self.options.wrapped && self.is_minimized() {
            self.set_minimized(MinimizeState::Expanded);
        }
        self.minimize
    }

    fn set_minimized(&mut self, state: MinimizeState) {
        self.minimize = state;
        write_or_ignore(&mut self.store, &self.keys.state, &state.to_string());
        debug!(state = %state, "minimize state changed");
        // A position dragged as a pill may not fit the expanded widget.
        if let Some(p) = self.position {
            self.position = Some(clamp_position(p, self.widget_size(), self.env.window));
        }
    }

    /// Returns whether a drag started.
    pub fn pointer_down(&mut self, event: PointerDown) -> bool {
        let origin = self.rendered_origin();
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        if !drag.pointer_down(&event, origin) {
            return false;
        }
        self.position = Some(origin);
        self.drag_moved = false;
        self.swallow_click = false;
        true
    }

    pub fn pointer_move(&mut self, at: Point) -> Option<Point> {
        let widget = self.widget_size();
        let drag = self.drag.as_ref()?;
        let moved = drag.pointer_move(at, widget, self.env.window)?;
        self.drag_moved |= drag.travelled_past_threshold(at);
        self.position = Some(moved);
        Some(moved)
    }

    /// Ends a drag and persists the resulting coordinates.
    pub fn pointer_up(&mut self) {
        let ended = self.drag.as_mut().is_some_and(DragMachine::release);
        if !ended {
            return;
        }
        self.swallow_click = std::mem::take(&mut self.drag_moved);
        if let Some(p) = self.position {
            let coords = SavedCoords {
                left: p.x,
                top: p.y,
            };
            match serde_json::to_string(&coords) {
                Ok(json) => {
                    write_or_ignore(&mut self.store, &self.keys.coords, &json);
                }
                Err(e) => debug!(error = %e, "could not encode position"),
            }
        }
    }

    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }

    pub fn resize_window(&mut self, window: Size) {
        self.env.window = window;
    }

    /// Stops the loop and releases the widget. The store is handed back so a
    /// later mount on the "same page" can read what this one persisted.
    pub fn destroy(mut self) -> S {
        if let Some(drag) = self.drag.as_mut() {
            drag.release();
        }
        info!("widget destroyed");
        self.store
    }

    /// Top-left corner on screen: the drag position if any, else the anchor.
    pub fn rendered_origin(&self) -> Point {
        self.position.unwrap_or_else(|| {
            self.options
                .position
                .origin(self.env.window, self.widget_size())
        })
    }

    /// Size of the rendered `.kbd-wrap`: the pill while minimized (when its
    /// size is known), otherwise the expanded widget.
    pub fn widget_size(&self) -> Size {
        let expanded = self.env.widget.unwrap_or(self.options.viewport);
        if self.is_minimized() {
            self.env.pill.unwrap_or(expanded)
        } else {
            expanded
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn interval_ms(&self) -> u32 {
        self.options.interval_ms.max(MIN_INTERVAL_MS)
    }

    pub fn storage_keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn minimize_state(&self) -> MinimizeState {
        self.minimize
    }

    pub fn is_minimized(&self) -> bool {
        self.minimize == MinimizeState::Minimized
    }

    pub fn is_draggable(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.as_ref().is_some_and(DragMachine::is_dragging)
    }

    pub fn listeners_attached(&self) -> bool {
        self.drag.as_ref().is_some_and(DragMachine::listeners_attached)
    }

    /// Absolute placement, or `None` while the anchor CSS positions the widget.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.animator.current().map(|f| f.active.as_str())
    }

    pub fn caption(&self) -> &str {
        self.animator.current().map_or("", |f| f.caption.as_str())
    }

    pub fn pan(&self) -> Option<Point> {
        self.animator.current().map(|f| f.pan)
    }

    pub fn pill_text(&self) -> String {
        let seq = self.animator.pretty_sequence();
        if self.options.label.is_empty() {
            seq
        } else {
            format!("{} {}", self.options.label, seq)
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
