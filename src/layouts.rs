//! QWERTY keyboard layouts for the two supported platforms.
//!
//! Both variants share the three letter rows and differ only in the bottom
//! modifier row. A layout is rebuilt, never mutated, when the platform changes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum_macros::{Display, EnumIter, EnumString};

/// Number of rows in every layout: QWERTY, ASDF, ZXCV and the modifier row.
pub const ROW_COUNT: usize = 4;

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mac,
    Win,
}

impl Platform {
    /// Platform of the machine running the generator.
    pub fn host() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Self::Mac
        } else {
            Self::Win
        }
    }

    /// Display text for a role, used by captions and the minimized pill.
    pub fn pretty_label(&self, role: &str) -> String {
        let glyph = match (self, role) {
            (Self::Mac, "option") => Some("⌥ option"),
            (Self::Mac, "command") => Some("⌘ command"),
            (Self::Mac, "control") => Some("⌃ control"),
            (Self::Mac, "shift") => Some("⇧ shift"),
            (Self::Win, "win") => Some("⊞ Win"),
            (Self::Win, "alt") => Some("Alt"),
            (Self::Win, "ctrl") | (Self::Win, "control") => Some("Ctrl"),
            _ => None,
        };
        if let Some(g) = glyph {
            return g.to_string();
        }
        if role.chars().count() == 1 {
            role.to_uppercase()
        } else {
            role.to_string()
        }
    }
}

/// Platform selection as baked into `data-os`: `auto` defers to the host page.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum OsTarget {
    Auto,
    Mac,
    Win,
}

impl OsTarget {
    /// Resolves `auto` through user-agent detection.
    pub fn platform_for(&self, user_agent: &str) -> Platform {
        match self {
            Self::Auto => detect_platform(user_agent),
            Self::Mac => Platform::Mac,
            Self::Win => Platform::Win,
        }
    }

    /// Resolves `auto` to the fallback platform.
    pub fn platform_or(&self, fallback: Platform) -> Platform {
        match self {
            Self::Auto => fallback,
            Self::Mac => Platform::Mac,
            Self::Win => Platform::Win,
        }
    }
}

impl From<Platform> for OsTarget {
    fn from(p: Platform) -> Self {
        match p {
            Platform::Mac => Self::Mac,
            Platform::Win => Self::Win,
        }
    }
}

/// Mirrors the runtime's user-agent sniffing. Linux gets the PC modifier row.
pub fn detect_platform(user_agent: &str) -> Platform {
    let ua = user_agent.to_ascii_lowercase();
    if ["mac", "iphone", "ipad", "ipod"].iter().any(|m| ua.contains(m)) {
        Platform::Mac
    } else if ua.contains("win") || ua.contains("linux") {
        Platform::Win
    } else {
        Platform::Mac
    }
}

/// Key width classes. Purely geometric; the names double as CSS classes.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WidthClass {
    W125,
    W150,
    W175,
    W175x,
    W225,
    W6,
}

impl WidthClass {
    /// Rendered width in pixels.
    pub fn px(&self) -> u32 {
        match self {
            Self::W125 => 88,
            Self::W150 => 96,
            Self::W175 => 112,
            Self::W175x => 128,
            Self::W225 => 160,
            Self::W6 => 416,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySpec {
    pub role: Option<String>,
    pub width: Option<WidthClass>,
    pub label: String,
}

impl KeySpec {
    fn new(role: Option<&str>, width: Option<WidthClass>, label: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            width,
            label: label.to_string(),
        }
    }

    fn letter(ch: char) -> Self {
        let role = ch.to_ascii_lowercase().to_string();
        Self {
            label: ch.to_ascii_uppercase().to_string(),
            role: Some(role),
            width: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Horizontal stagger in pixels.
    pub offset: u32,
    pub keys: Vec<KeySpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub platform: Platform,
    pub rows: Vec<Row>,
}

/// `ctrl` is an alias of the `control` role.
pub fn canonical_role(role: &str) -> &str {
    if role == "ctrl" {
        "control"
    } else {
        role
    }
}

fn letter_row(lead: KeySpec, letters: &str, offset: u32) -> Row {
    let mut keys = vec![lead];
    keys.extend(letters.chars().map(KeySpec::letter));
    Row { offset, keys }
}

pub fn build_layout(platform: Platform) -> Layout {
    let mut rows = Vec::with_capacity(ROW_COUNT);
    rows.push(letter_row(
        KeySpec::new(None, Some(WidthClass::W150), "Tab"),
        "QWERTYUIOP",
        16,
    ));
    rows.push(letter_row(
        KeySpec::new(None, Some(WidthClass::W175), "Caps"),
        "ASDFGHJKL",
        28,
    ));
    rows.push(letter_row(
        KeySpec::new(Some("shift"), Some(WidthClass::W225), "Shift"),
        "ZXCVBNM",
        40,
    ));

    let modifiers = match platform {
        Platform::Mac => vec![
            KeySpec::new(Some("fn"), None, "fn"),
            KeySpec::new(Some("control"), Some(WidthClass::W125), "control"),
            KeySpec::new(Some("option"), Some(WidthClass::W125), "option"),
            KeySpec::new(Some("command"), Some(WidthClass::W175x), "command"),
            KeySpec::new(Some("space"), Some(WidthClass::W6), ""),
        ],
        Platform::Win => vec![
            KeySpec::new(Some("control"), Some(WidthClass::W125), "Ctrl"),
            KeySpec::new(Some("win"), Some(WidthClass::W125), "Win"),
            KeySpec::new(Some("alt"), Some(WidthClass::W125), "Alt"),
            KeySpec::new(Some("space"), Some(WidthClass::W6), ""),
        ],
    };
    rows.push(Row {
        offset: 28,
        keys: modifiers,
    });

    Layout { platform, rows }
}

impl Layout {
    /// Roles in row-major order.
    pub fn roles(&self) -> Vec<&str> {
        self.rows
            .iter()
            .flat_map(|r| r.keys.iter())
            .filter_map(|k| k.role.as_deref())
            .collect()
    }

    pub fn role_set(&self) -> BTreeSet<&str> {
        self.roles().into_iter().collect()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.position_of(role).is_some()
    }

    /// (row, column) of the key carrying `role`, after alias folding.
    pub fn position_of(&self, role: &str) -> Option<(usize, usize)> {
        let role = canonical_role(role);
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.keys
                .iter()
                .position(|k| k.role.as_deref() == Some(role))
                .map(|c| (r, c))
        })
    }

    pub fn key(&self, role: &str) -> Option<&KeySpec> {
        self.position_of(role).map(|(r, c)| &self.rows[r].keys[c])
    }
}
