///////////////////////////
mod options;
///////////////////////////
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
///////////////////////////
use libnpd::{CallChain, Console, NullObjectSource, Outcome};
use options::Options;
///////////////////////////

fn run_demo() -> Result<Outcome> {
    let mut console = Console::stdout();
    CallChain::new(NullObjectSource).run(&mut console)
}

fn main() {
    let _options = Options::parse();
    // The null dereference is caught inside the chain, so only a console failure ends up here.
    // It is reported, but the demo still terminates normally.
    if let Err(e) = run_demo() {
        eprintln!("{} {:#}", "Demo output lost:".yellow().bold(), e);
    }
}
