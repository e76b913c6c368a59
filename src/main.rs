use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Animated keyboard-shortcut widgets for any web page", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the embeddable HTML snippet for a shortcut
    Emit(cmd::emit::EmitArgs),
    /// Play the widget in the terminal
    Preview(cmd::preview::PreviewArgs),
    /// Show the keyboard layout for a platform
    Layout(cmd::layout::LayoutArgs),
    /// Read the parameters back out of an emitted snippet
    Inspect(cmd::inspect::InspectArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // stdout carries the snippet; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    let sub_matches = matches
        .subcommand()
        .map(|(_, m)| m.clone())
        .unwrap_or_default();

    let result = match cli.command {
        Commands::Emit(args) => cmd::emit::run(args, &sub_matches),
        Commands::Preview(args) => cmd::preview::run(args),
        Commands::Layout(args) => cmd::layout::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
