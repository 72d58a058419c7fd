use crate::config::Config;
use crate::demo::{Demo, DemoErr};
use std::process::{ExitCode, Termination};
use tracing_subscriber::EnvFilter;

mod config;
mod demo;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => e.report(),
    }
}

fn run() -> Result<(), DemoErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = config::parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        print_help();
        return Ok(());
    }
    if configs.contains(&Config::Version) {
        println!("lazyseq {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    init_logging(configs.contains(&Config::Verbose));
    let mut demos = args.map(|name| Demo::parse(&name)).collect::<Result<Vec<_>, _>>()?;
    if demos.is_empty() {
        demos = Demo::ALL.to_vec();
    }
    for demo in demos {
        demo.run();
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn print_help() {
    println!("Usage: lazyseq [-h] [-V] [-v] [<demo>...]");
    println!();
    println!("Runs the given demos, or all of them when none is given.");
    println!();
    println!("Demos:");
    for demo in Demo::ALL {
        println!("    {:<16}{}", demo.name(), demo.help());
    }
}
