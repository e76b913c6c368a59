//! Embed Synthesizer: turns a resolved sequence and layout options into a
//! paste-anywhere HTML bundle (container, host element, script, style).

pub mod attrs;
pub mod options;
pub mod template;

use crate::error::KmResult;
use crate::layouts::{canonical_role, OsTarget};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use attrs::EmbedAttributes;
pub use options::{animation_interval, clamp_dimension, Anchor, LayoutOptions};
use template::escape_attr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    /// Opening tag of the positioned `.kbd-wrap` container.
    pub container: String,
    /// The `.kbd-mini` host element carrying the runtime parameters.
    pub markup: String,
    pub style: String,
    pub script: String,
}

impl Bundle {
    /// The snippet as pasted into a host page. The style comes first so the
    /// widget is laid out before the inline script measures it. The script
    /// must directly follow the host element: it locates the host as its
    /// previous sibling.
    pub fn to_html(&self) -> String {
        [
            self.container.as_str(),
            &format!("<style>{}</style>", self.style),
            self.markup.as_str(),
            &format!("<script>{}</script>", self.script),
            "</div>",
        ]
        .join("\n")
    }
}

pub fn synthesize(
    sequence: &[String],
    os: OsTarget,
    speed: f64,
    options: &LayoutOptions,
) -> KmResult<Bundle> {
    let roles: Vec<&str> = sequence
        .iter()
        .map(|r| canonical_role(r.trim()))
        .filter(|r| !r.is_empty() && !r.contains(','))
        .collect();
    if roles.is_empty() {
        warn!("empty sequence, the widget will render without animating");
    }

    let interval = animation_interval(speed);
    debug!(
        roles = roles.len(),
        interval,
        position = %options.position,
        "synthesizing bundle"
    );

    let container = format!(
        r#"<div class="kbd-wrap {}" data-pos="{}" data-draggable="{}">"#,
        options.position.css_class(),
        options.position,
        options.draggable
    );
    let markup = format!(
        r#"<div class="kbd-mini" data-os="{}" data-seq="{}" data-w="{}" data-h="{}" data-interval="{}" data-label="{}"></div>"#,
        os,
        escape_attr(&roles.join(",")),
        options.width,
        options.height,
        interval,
        escape_attr(&options.label)
    );

    Ok(Bundle {
        container,
        markup,
        style: template::render_style(),
        script: template::render_script(interval)?,
    })
}
