// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod types;
pub mod watch;

use std::sync::Arc;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::RunConfig;
use crate::engine::{install_interrupt_handler, Supervisor};
use crate::errors::Result;
use crate::exec::RealCommandRunner;
use crate::fs::RealFileSystem;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config resolution (CLI flags or config file)
/// - Ctrl-C handling
/// - the supervisor and its watch tasks
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = config::resolve(&args)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    install_interrupt_handler()?;

    let supervisor = Supervisor::new(
        cfg,
        Arc::new(RealFileSystem),
        Arc::new(RealCommandRunner),
    );
    supervisor.run().await
}

/// Simple dry-run output: print the resolved targets.
fn print_dry_run(cfg: &RunConfig) {
    println!("watchr dry-run");
    println!("  quiet = {}", cfg.quiet);
    println!("  verbose = {}", cfg.verbose);
    println!("  poll_interval = {:?}", cfg.poll_interval);
    println!("  on_failure = {:?}", cfg.failure_policy);
    println!();

    println!("files ({}):", cfg.targets.len());
    for target in cfg.targets.iter() {
        println!("  - {}", target.path.display());
        match &target.command {
            Some(cmd) => println!("      cmd: {cmd}"),
            None => println!("      cmd: (none, report only)"),
        }
    }

    debug!("dry-run complete (nothing watched)");
}
