use crate::reports;
use clap::Args;
use kbdmini::error::{KbdMiniError, KmResult};
use kbdmini::layouts::{build_layout, Platform};

#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// mac or win; defaults to this machine's platform
    #[arg(long)]
    pub os: Option<String>,
}

pub fn run(args: LayoutArgs) -> KmResult<()> {
    let platform = match &args.os {
        Some(raw) => raw
            .trim()
            .parse::<Platform>()
            .map_err(|_| KbdMiniError::UnknownPlatform(raw.clone()))?,
        None => Platform::host(),
    };
    let layout = build_layout(platform);
    reports::print_layout(&layout, None);
    reports::print_roles(&layout);
    Ok(())
}
