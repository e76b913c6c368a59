use crate::config::EmbedConfig;
use crate::embed::{animation_interval, synthesize, LayoutOptions};
use crate::error::{KbdMiniError, KmResult};
use crate::layouts::{build_layout, Platform};
use crate::resolver::{resolve, Recorder, Resolution};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// What an authoring front end submits.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmbedRequest {
    pub sequence_text: String,
    #[serde(default)]
    pub config: EmbedConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmbedResult {
    pub html: String,
    /// Layout the sequence was resolved against.
    pub platform: Platform,
    pub resolution: Resolution,
    pub options: LayoutOptions,
    pub interval_ms: u32,
}

/// A live keyboard event, as `KeyboardEvent.key`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "key", rename_all = "lowercase")]
pub enum KeyEvent {
    Down(String),
    Up(String),
}

/// Service: resolve the sequence text and emit the embed snippet.
///
/// With `os = auto` the sequence is checked against `author_platform`, the
/// platform the author is working on; the widget itself re-detects at mount.
pub fn generate_embed(
    sequence_text: &str,
    config: &EmbedConfig,
    author_platform: Platform,
) -> KmResult<EmbedResult> {
    let os = config.os_target()?;
    let platform = os.platform_or(author_platform);
    let layout = build_layout(platform);

    let resolution = resolve(sequence_text, &layout);
    if !resolution.unresolved.is_empty() {
        warn!("Key not found: {}", resolution.unresolved.join(", "));
    }
    if resolution.is_empty() {
        return Err(KbdMiniError::EmptySequence);
    }

    let options = config.layout_options();
    let bundle = synthesize(&resolution.roles, os, config.speed, &options)?;
    info!(
        sequence = %resolution.roles.join(","),
        os = %os,
        "embed generated"
    );

    Ok(EmbedResult {
        html: bundle.to_html(),
        platform,
        resolution,
        options,
        interval_ms: animation_interval(config.speed),
    })
}

/// Service: same as [`generate_embed`] for a deserialized request.
pub fn handle_request(request: &EmbedRequest) -> KmResult<EmbedResult> {
    generate_embed(&request.sequence_text, &request.config, Platform::host())
}

/// Service: replays recorded key events and returns the captured sequence.
pub fn record_sequence<I>(platform: Platform, events: I) -> Vec<String>
where
    I: IntoIterator<Item = KeyEvent>,
{
    let mut recorder = Recorder::new(build_layout(platform));
    for event in events {
        match event {
            KeyEvent::Down(key) => {
                recorder.key_down(&key);
            }
            KeyEvent::Up(key) => recorder.key_up(&key),
        }
    }
    recorder.finish()
}
