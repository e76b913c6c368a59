//! The widget runtime template and its parameter substitution.
//!
//! The script and base stylesheet ship inside the binary. Layout tables are
//! serialized from [`build_layout`] so the runtime never carries its own copy
//! of the keyboard geometry.

use super::options::{Anchor, ANCHOR_BOTTOM_PX, ANCHOR_EDGE_PX};
use crate::error::KmResult;
use crate::layouts::{build_layout, Platform, Row};
use std::collections::BTreeMap;
use std::fmt::Write;
use strum::IntoEnumIterator;

const RUNTIME_JS: &str = include_str!("../../assets/kbd-mini.js");
const BASE_CSS: &str = include_str!("../../assets/kbd-mini.css");

pub const TEMPLATE_VERSION: &str = env!("CARGO_PKG_VERSION");

const SLOT_VERSION: &str = "__KBD_VERSION__";
const SLOT_LAYOUTS: &str = "__KBD_LAYOUTS__";
const SLOT_INTERVAL: &str = "__KBD_INTERVAL__";

/// JSON table `{ "mac": [rows], "win": [rows] }` consumed by the runtime.
pub fn layout_table() -> KmResult<String> {
    let table: BTreeMap<String, Vec<Row>> = Platform::iter()
        .map(|p| (p.to_string(), build_layout(p).rows))
        .collect();
    Ok(serde_json::to_string(&table)?)
}

/// Fills the runtime template. `interval_ms` is only the fallback used when
/// the host element lacks a usable `data-interval`.
pub fn render_script(interval_ms: u32) -> KmResult<String> {
    let script = RUNTIME_JS
        .replace(SLOT_VERSION, TEMPLATE_VERSION)
        .replace(SLOT_LAYOUTS, &layout_table()?)
        .replace(SLOT_INTERVAL, &interval_ms.to_string());
    Ok(neutralize_script_close(&script))
}

pub fn render_style() -> String {
    let mut css = String::from(BASE_CSS);
    for anchor in Anchor::iter() {
        let _ = writeln!(css, ".kbd-wrap.{}{{{}}}", anchor.css_class(), anchor_rule(anchor));
    }
    css
}

fn anchor_rule(anchor: Anchor) -> String {
    let edge = ANCHOR_EDGE_PX;
    let bottom = ANCHOR_BOTTOM_PX;
    match anchor {
        Anchor::TopLeft => format!("top:{edge}px;left:{edge}px"),
        Anchor::TopCenter => format!("top:{edge}px;left:50%;transform:translateX(-50%)"),
        Anchor::TopRight => format!("top:{edge}px;right:{edge}px"),
        Anchor::LeftMiddle => format!("top:50%;left:{edge}px;transform:translateY(-50%)"),
        Anchor::RightMiddle => format!("top:50%;right:{edge}px;transform:translateY(-50%)"),
        Anchor::BottomLeft => format!("bottom:{bottom}px;left:{edge}px"),
        Anchor::BottomCenter => format!("bottom:{bottom}px;left:50%;transform:translateX(-50%)"),
        Anchor::BottomRight => format!("bottom:{bottom}px;right:{edge}px"),
    }
}

/// Rewrites every `</script` (any case) as `<\/script` so the payload cannot
/// close its own script element.
pub fn neutralize_script_close(src: &str) -> String {
    let lower = src.to_ascii_lowercase();
    let mut out = String::with_capacity(src.len());
    let mut last = 0;
    for (i, _) in lower.match_indices("</script") {
        out.push_str(&src[last..i]);
        out.push_str("<\\/");
        last = i + 2;
    }
    out.push_str(&src[last..]);
    out
}

pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn unescape_attr(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
