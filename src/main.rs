// src/main.rs

use watchr::errors::WatchrError;
use watchr::{cli, logging, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        eprintln!("watchr error: {err:#}");
        if err
            .downcast_ref::<WatchrError>()
            .is_some_and(WatchrError::is_config)
        {
            cli::print_usage();
        }
        std::process::exit(1);
    }
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await?;
    Ok(())
}
