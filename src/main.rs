use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use workspace_status::config::Config;
use workspace_status::git::GitCommand;
use workspace_status::status;

#[derive(clap::Parser)]
#[command(
    name = "workspace-status",
    version,
    about = "Print build version and revision for a build system's workspace status"
)]
struct Args {}

fn main() -> Result<()> {
    Args::parse();
    env_logger::init();

    let git = GitCommand::new(&Config::default());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    status::write_status(&git, &mut out).context("Failed to report workspace status")?;

    Ok(())
}
