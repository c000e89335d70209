use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fb2rename",
    about = "Rename an FB2 e-book after its author, series and title",
    long_about = "Reads the title-info block of a FictionBook file and renames it in place to \
                  \"First Last - SERIES## - Title\", keeping the original extension"
)]
struct Args {
    /// FB2 file to rename
    filename: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let renamed = fb2rename::process(&args.filename)
        .with_context(|| format!("Failed to process {}", args.filename.display()))?;

    println!("{} -> {}", renamed.from.display(), renamed.to.display());
    Ok(())
}
