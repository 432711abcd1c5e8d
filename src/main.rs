use clap::Parser;
use color_eyre::eyre::Result;
use taskboard_daemon::app::{run, Args};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    run(&Args::parse()).await
}
