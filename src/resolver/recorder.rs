//! Recording mode: turns live key-down/key-up events into a sequence.

use super::normalize_token;
use crate::layouts::{canonical_role, Layout, Platform};
use std::collections::HashSet;
use tracing::debug;

/// Normalizes a DOM-style `KeyboardEvent.key` value to a role token.
pub fn normalize_key_event(key: &str, platform: Platform) -> String {
    let k = key.to_lowercase();
    match k.as_str() {
        "alt" => match platform {
            Platform::Mac => "option".to_string(),
            Platform::Win => "alt".to_string(),
        },
        " " => "space".to_string(),
        "meta" => match platform {
            Platform::Win => "win".to_string(),
            Platform::Mac => "command".to_string(),
        },
        "os" => "win".to_string(),
        _ if k.len() == 1 && k.chars().all(|c| c.is_ascii_lowercase()) => k,
        _ => normalize_token(&k),
    }
}

/// Accumulates a recorded sequence. Held keys are not repeated by key-repeat;
/// recording ends only when the caller calls [`Recorder::finish`].
#[derive(Debug, Clone)]
pub struct Recorder {
    layout: Layout,
    held: HashSet<String>,
    pressed: Vec<String>,
}

impl Recorder {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            held: HashSet::new(),
            pressed: Vec::new(),
        }
    }

    /// Returns the role appended to the sequence, if any.
    pub fn key_down(&mut self, key: &str) -> Option<&str> {
        let token = normalize_key_event(key, self.layout.platform);
        let role = canonical_role(&token).to_string();
        if !self.layout.has_role(&role) {
            debug!(key = %key, "ignoring key outside layout");
            return None;
        }
        if !self.held.insert(role.clone()) {
            return None;
        }
        self.pressed.push(role);
        self.pressed.last().map(String::as_str)
    }

    pub fn key_up(&mut self, key: &str) {
        let token = normalize_key_event(key, self.layout.platform);
        self.held.remove(canonical_role(&token));
    }

    pub fn sequence(&self) -> &[String] {
        &self.pressed
    }

    /// Display form used by the authoring text box.
    pub fn display(&self) -> String {
        self.pressed.join(", ")
    }

    pub fn finish(self) -> Vec<String> {
        self.pressed
    }
}
