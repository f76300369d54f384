// src/bin/cli.rs
use clap::Parser;
use conjugaison::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run(cli::Args::parse())
}
