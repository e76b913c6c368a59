use crate::reports;
use clap::Args;
use kbdmini::embed::options::{HEIGHT_RANGE, WIDTH_RANGE};
use kbdmini::embed::{animation_interval, clamp_dimension};
use kbdmini::error::{KbdMiniError, KmResult};
use kbdmini::geometry::Size;
use kbdmini::layouts::{build_layout, OsTarget, Platform};
use kbdmini::resolver::resolve;
use kbdmini::runtime::{HostEnv, MemoryStore, MountOptions, Widget};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct PreviewArgs {
    #[arg(required = true, num_args = 1..)]
    pub sequence: Vec<String>,

    #[arg(long, default_value = "auto")]
    pub os: String,

    /// Frames to print; defaults to one full loop
    #[arg(short, long)]
    pub ticks: Option<usize>,

    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,

    #[arg(long)]
    pub width: Option<String>,

    #[arg(long)]
    pub height: Option<String>,

    #[arg(long, default_value = "")]
    pub label: String,
}

pub fn run(args: PreviewArgs) -> KmResult<()> {
    let os: OsTarget = args
        .os
        .trim()
        .parse()
        .map_err(|_| KbdMiniError::UnknownPlatform(args.os.clone()))?;
    let platform = os.platform_or(Platform::host());
    let resolution = resolve(&args.sequence.join(" "), &build_layout(platform));
    if !resolution.is_complete() {
        warn!("Key not found: {}", resolution.unresolved.join(", "));
    }
    if resolution.is_empty() {
        return Err(KbdMiniError::EmptySequence);
    }

    let mut options = MountOptions::new(OsTarget::from(platform), &resolution.roles);
    options.viewport = Size::new(
        clamp_dimension(args.width.as_deref(), WIDTH_RANGE) as f64,
        clamp_dimension(args.height.as_deref(), HEIGHT_RANGE) as f64,
    );
    options.interval_ms = animation_interval(args.speed);
    options.label = args.label.trim().to_string();

    let env = HostEnv::new("", Size::new(1280.0, 800.0));
    let mut widget = Widget::mount(options, env, MemoryStore::new());
    info!(
        "▶️  {} on {} every {}ms",
        widget.pill_text(),
        widget.platform(),
        widget.interval_ms()
    );

    let ticks = args.ticks.unwrap_or_else(|| widget.animator().len());
    let mut frame = widget.animator().current().cloned();
    for _ in 0..ticks {
        let Some(f) = frame.as_ref() else {
            break;
        };
        reports::print_frame(widget.layout(), f);
        frame = widget.tick();
    }
    Ok(())
}
