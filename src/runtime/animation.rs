//! The highlight loop: one active key per tick, a caption that grows by one
//! pretty label per tick and resets when the sequence wraps, and a pan that
//! keeps the active key centered.

use crate::geometry::{Point, Size, StageGeometry};
use crate::layouts::Layout;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
struct Step {
    role: String,
    pretty: String,
    pan: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub index: usize,
    pub active: String,
    pub caption: String,
    pub pan: Point,
}

#[derive(Debug, Clone)]
pub struct Animator {
    steps: Vec<Step>,
    index: usize,
    buffer: String,
    current: Option<Frame>,
}

impl Animator {
    /// Roles absent from `layout` are dropped; an empty result is inert.
    pub fn new<S: AsRef<str>>(sequence: &[S], layout: &Layout, viewport: Size) -> Self {
        let geometry = StageGeometry::from_layout(layout);
        let steps = sequence
            .iter()
            .filter_map(|role| {
                let role = role.as_ref();
                geometry.pan_to(role, viewport).map(|pan| Step {
                    role: role.to_string(),
                    pretty: layout.platform.pretty_label(role),
                    pan,
                })
            })
            .collect();
        Self {
            steps,
            index: 0,
            buffer: String::new(),
            current: None,
        }
    }

    pub fn is_inert(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the key the next tick will highlight.
    pub fn next_index(&self) -> usize {
        self.index
    }

    /// Caption text accumulated for the current loop.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The frame on screen (highlight, caption text, pan) after the last tick.
    pub fn current(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    pub fn pretty_sequence(&self) -> String {
        self.steps
            .iter()
            .map(|s| s.pretty.as_str())
            .collect::<Vec<_>>()
            .join(" + ")
    }

    pub fn tick(&mut self) -> Option<&Frame> {
        if self.steps.is_empty() {
            return None;
        }
        let step = &self.steps[self.index];
        if !self.buffer.is_empty() {
            self.buffer.push_str(" + ");
        }
        self.buffer.push_str(&step.pretty);
        self.current = Some(Frame {
            index: self.index,
            active: step.role.clone(),
            caption: self.buffer.clone(),
            pan: step.pan,
        });

        self.index = (self.index + 1) % self.steps.len();
        if self.index == 0 {
            self.buffer.clear();
        }
        self.current.as_ref()
    }
}
