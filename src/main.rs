//! Entry point: parse the flags, set up logging, run the shell on stdin.

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use litreg::catalog::factory::{self, LiteratureFields};
use litreg::catalog::{LiteratureRegister, LogDeleteListener};
use litreg::cli::app::Cli;
use litreg::cli::shell::Shell;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut register = LiteratureRegister::new();
    register.subscribe(Box::new(LogDeleteListener));
    if cli.demo {
        seed_demo(&mut register)?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(&mut register, stdin.lock(), stdout.lock(), cli.format);
    shell.run()?;

    Ok(())
}

fn seed_demo(register: &mut LiteratureRegister) -> litreg::Result<()> {
    register.add(factory::create(
        "magazine",
        LiteratureFields::new("Wired", "Condé Nast").with_schedule("Tech", 12),
    )?);
    register.add(factory::create(
        "newspaper",
        LiteratureFields::new("Aftenposten", "Schibsted").with_schedule("News", 312),
    )?);
    register.add(factory::create(
        "book",
        LiteratureFields::new("Dune", "Ace"),
    )?);
    register.add(factory::create(
        "comic",
        LiteratureFields::new("Nemi", "Egmont"),
    )?);
    Ok(())
}
