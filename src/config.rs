use crate::embed::LayoutOptions;
use crate::error::{KbdMiniError, KmResult};
use crate::layouts::OsTarget;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Everything the authoring side chooses about a widget besides its sequence.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// Platform baked into the widget: auto, mac or win
    #[arg(long, default_value = "auto")]
    pub os: String,

    /// Animation speed multiplier (1.0 = one key every 700ms)
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,

    /// Screen anchor, e.g. bottom-left or top-center
    #[arg(long, default_value = "bottom-left")]
    pub position: String,

    /// Viewport width in px (180-520)
    #[arg(long)]
    #[serde(deserialize_with = "lenient_dimension")]
    pub width: Option<String>,

    /// Viewport height in px (160-520)
    #[arg(long)]
    #[serde(deserialize_with = "lenient_dimension")]
    pub height: Option<String>,

    /// Let visitors drag the widget around
    #[arg(long, default_value_t = false)]
    pub draggable: bool,

    /// Text shown before the shortcut in the minimized pill
    #[arg(long, default_value = "")]
    pub label: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            os: "auto".to_string(),
            speed: 1.0,
            position: "bottom-left".to_string(),
            width: None,
            height: None,
            draggable: false,
            label: String::new(),
        }
    }
}

/// Accepts `260`, `"260"` or anything else; clamping decides later.
fn lenient_dimension<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

impl EmbedConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KmResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            KbdMiniError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays values the user typed on the command line onto `self`
    /// (usually loaded from a file). Defaults never override file values.
    pub fn merge_from_cli(&mut self, cli: &EmbedConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(os, "os");
        update_if_present!(speed, "speed");
        update_if_present!(position, "position");
        update_if_present!(width, "width");
        update_if_present!(height, "height");
        update_if_present!(draggable, "draggable");
        update_if_present!(label, "label");
    }

    pub fn os_target(&self) -> KmResult<OsTarget> {
        self.os
            .trim()
            .parse()
            .map_err(|_| KbdMiniError::UnknownPlatform(self.os.clone()))
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions::from_raw(
            &self.position,
            self.width.as_deref(),
            self.height.as_deref(),
            self.draggable,
            &self.label,
        )
    }
}
