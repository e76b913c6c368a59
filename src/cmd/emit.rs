use clap::{ArgMatches, Args};
use kbdmini::api;
use kbdmini::config::EmbedConfig;
use kbdmini::error::KmResult;
use kbdmini::layouts::Platform;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EmitArgs {
    /// Shortcut text, e.g. "cmd + shift + p" or "ctrl alt t"
    #[arg(required = true, num_args = 1..)]
    pub sequence: Vec<String>,

    #[command(flatten)]
    pub config: EmbedConfig,

    /// JSON file with embed settings; flags given here win over it
    #[arg(long = "config")]
    pub config_file: Option<PathBuf>,

    /// Write the snippet to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: EmitArgs, matches: &ArgMatches) -> KmResult<()> {
    let config = match &args.config_file {
        Some(path) => {
            info!("📂 Loading embed settings from {}", path.display());
            let mut file_config = EmbedConfig::load_from_file(path)?;
            file_config.merge_from_cli(&args.config, matches);
            file_config
        }
        None => args.config.clone(),
    };

    let text = args.sequence.join(" ");
    let result = api::generate_embed(&text, &config, Platform::host())?;

    match &args.out {
        Some(path) => {
            fs::write(path, &result.html)?;
            info!(
                "💾 Wrote {} bytes for [{}] to {}",
                result.html.len(),
                result.resolution.roles.join(", "),
                path.display()
            );
        }
        None => println!("{}", result.html),
    }
    Ok(())
}
