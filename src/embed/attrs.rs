//! Reader for the generator-to-runtime attribute contract.
//!
//! Only the two elements the runtime reads are inspected: the `.kbd-wrap`
//! container (`data-pos`, `data-draggable`) and the `.kbd-mini` host
//! (`data-os`, `data-seq`, `data-w`, `data-h`, `data-interval`, `data-label`).

use super::options::Anchor;
use super::template::unescape_attr;
use crate::error::{KbdMiniError, KmResult};
use crate::layouts::OsTarget;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedAttributes {
    pub os: OsTarget,
    pub seq: Vec<String>,
    pub width: u32,
    pub height: u32,
    pub interval: u32,
    pub label: String,
    pub position: Anchor,
    pub draggable: bool,
}

impl EmbedAttributes {
    pub fn parse(html: &str) -> KmResult<Self> {
        let scanner = TagScanner::new()?;
        let host = scanner
            .find(html, "kbd-mini")
            .ok_or_else(|| KbdMiniError::Validation("no .kbd-mini host element".into()))?;
        let container = scanner.find(html, "kbd-wrap").unwrap_or_default();

        let os_raw = host.get("data-os").map(String::as_str).unwrap_or("auto");
        let os = os_raw
            .parse::<OsTarget>()
            .map_err(|_| KbdMiniError::UnknownPlatform(os_raw.to_string()))?;

        let seq = host
            .get("data-seq")
            .map(|s| {
                s.split(',')
                    .map(|t| t.trim().to_lowercase())
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            os,
            seq,
            width: numeric(&host, "data-w")?,
            height: numeric(&host, "data-h")?,
            interval: numeric(&host, "data-interval")?,
            label: host.get("data-label").cloned().unwrap_or_default(),
            position: container
                .get("data-pos")
                .map(|p| Anchor::normalize(p))
                .unwrap_or_default(),
            draggable: container.get("data-draggable").map(String::as_str) == Some("true"),
        })
    }
}

fn numeric(attrs: &HashMap<String, String>, name: &str) -> KmResult<u32> {
    let raw = attrs
        .get(name)
        .ok_or_else(|| KbdMiniError::Validation(format!("missing {}", name)))?;
    raw.trim()
        .parse()
        .map_err(|_| KbdMiniError::Validation(format!("{} is not an integer: '{}'", name, raw)))
}

/// Finds `<div>` start tags and splits their attributes. Quoted values may
/// contain `>`.
struct TagScanner {
    tag: Regex,
    attr: Regex,
}

impl TagScanner {
    fn new() -> KmResult<Self> {
        Ok(Self {
            tag: Regex::new(r#"(?i)<div\b((?:[^>"']|"[^"]*"|'[^']*')*)>"#)?,
            attr: Regex::new(
                r#"([^\s"'=/>]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#,
            )?,
        })
    }

    /// Attributes of the first `<div>` whose class list contains `class`.
    fn find(&self, html: &str, class: &str) -> Option<HashMap<String, String>> {
        self.tag
            .captures_iter(html)
            .map(|c| self.attributes(c.get(1).map_or("", |m| m.as_str())))
            .find(|attrs| {
                attrs
                    .get("class")
                    .is_some_and(|c| c.split_whitespace().any(|x| x == class))
            })
    }

    fn attributes(&self, body: &str) -> HashMap<String, String> {
        self.attr
            .captures_iter(body)
            .map(|c| {
                let value = c
                    .get(2)
                    .or_else(|| c.get(3))
                    .or_else(|| c.get(4))
                    .map_or("", |m| m.as_str());
                (c[1].to_ascii_lowercase(), unescape_attr(value))
            })
            .collect()
    }
}
