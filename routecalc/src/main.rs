//! Interactive route calculator.
//!
//! Run: cargo run --bin routecalc -- --rows 8 --cols 12 --ascii

use std::io;

use anyhow::Context;
use clap::Parser;
use routecalc_lib::{Args, Command, Menu, Session};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let session = Session::new(args.config());
    let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock(), session);

    if let Some((height, width)) = args.initial_size() {
        menu.apply(Command::CreateWorld { height, width })
            .context("failed to write to stdout")?;
    }

    menu.run().context("menu I/O failed")?;
    Ok(())
}
