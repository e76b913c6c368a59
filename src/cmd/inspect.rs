use crate::reports;
use clap::Args;
use kbdmini::embed::EmbedAttributes;
use kbdmini::error::KmResult;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// A file containing an emitted snippet
    pub file: PathBuf,

    /// Print only the JSON, without the summary table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: InspectArgs) -> KmResult<()> {
    let html = fs::read_to_string(&args.file)?;
    let attrs = EmbedAttributes::parse(&html)?;
    println!("{}", serde_json::to_string_pretty(&attrs)?);
    if !args.json {
        reports::print_attributes(&attrs);
    }
    Ok(())
}
