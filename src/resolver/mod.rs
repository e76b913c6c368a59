//! Maps user-entered shortcut text onto layout roles.
//!
//! Resolution is partial: tokens the active layout cannot place are reported in
//! `Resolution::unresolved` while the rest still play.

pub mod recorder;

use crate::layouts::{canonical_role, Layout};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use recorder::{normalize_key_event, Recorder};

/// Symbolic spellings and their canonical role. Bare letters map to themselves
/// and anything else passes through unchanged.
const ALIASES: &[(&str, &str)] = &[
    ("control", "control"),
    ("ctrl", "control"),
    ("⌃", "control"),
    ("shift", "shift"),
    ("⇧", "shift"),
    ("alt", "alt"),
    ("option", "option"),
    ("⌥", "option"),
    ("cmd", "command"),
    ("command", "command"),
    ("⌘", "command"),
    ("meta", "command"),
    ("win", "win"),
    ("space", "space"),
    (" ", "space"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub roles: Vec<String>,
    pub unresolved: Vec<String>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Lowercases, trims and applies the alias table.
pub fn normalize_token(token: &str) -> String {
    let trimmed = token.trim();
    // A lone space is itself an alias; do not trim it away.
    let t = if trimmed.is_empty() && !token.is_empty() {
        " ".to_string()
    } else {
        trimmed.to_lowercase()
    };
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == t)
        .map(|(_, role)| role.to_string())
        .unwrap_or(t)
}

/// Splits on `+`, commas and whitespace runs, normalizing each piece.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == '+' || c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(normalize_token)
        .collect()
}

pub fn resolve(raw: &str, layout: &Layout) -> Resolution {
    resolve_tokens(&tokenize(raw), layout)
}

/// Resolves already-normalized tokens (e.g. from a recording).
pub fn resolve_tokens<S: AsRef<str>>(tokens: &[S], layout: &Layout) -> Resolution {
    let mut out = Resolution::default();
    for token in tokens {
        let token = token.as_ref();
        let role = canonical_role(token);
        if layout.has_role(role) {
            out.roles.push(role.to_string());
        } else {
            warn!(token = %token, platform = %layout.platform, "key not found in layout");
            out.unresolved.push(token.to_string());
        }
    }
    debug!(
        resolved = out.roles.len(),
        unresolved = out.unresolved.len(),
        "sequence resolved"
    );
    out
}
