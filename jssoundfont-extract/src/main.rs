use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{CommandFactory, Parser};
use env_logger::{Env, Target};
use log::info;

use walker::{process_paths, WalkSummary};

mod walker;

#[derive(Parser)]
#[command(version)]
/// Extracts the base64 encoded samples of MIDI.js soundfont files
pub struct Args {
    /// Soundfont files, or directories whose files should all be extracted.
    /// Samples are written to <file directory>/<font name>/<note>.<format>
    paths: Vec<PathBuf>,
}

/// prints the usage line to `out` if there is nothing to process
fn run<W: Write>(args: &Args, out: &mut W) -> io::Result<WalkSummary> {
    if args.paths.is_empty() {
        writeln!(out, "{}", Args::command().render_usage())?;
        return Ok(WalkSummary::default());
    }
    let summary = process_paths(&args.paths);
    info!(
        "done: {} of {} files extracted, {} notes saved, {} errors",
        summary.files_extracted, summary.files_seen, summary.notes_saved, summary.errors
    );
    Ok(summary)
}

fn main() -> anyhow::Result<()> {
    let env = Env::new().default_filter_or("info");
    env_logger::Builder::from_env(env)
        .target(Target::Stdout)
        .init();
    let args = Args::parse();
    run(&args, &mut io::stdout())?;
    Ok(())
}
