// src/engine/signal.rs

use std::io::{self, Write};

use tracing::info;

/// Install the process-wide interrupt listener.
///
/// On SIGINT (or SIGTERM on unix) the listener overwrites the terminal's `^C`
/// echo, logs one line and exits the process with status 0. Watch tasks are
/// not given a chance to finish their current iteration.
///
/// On unix the signal handlers are registered before this returns, so a
/// signal arriving right after startup is never lost.
pub fn install_interrupt_handler() -> io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::spawn(async move {
            tokio::select! {
                _ = sigint.recv() => {}
                _ = sigterm.recv() => {}
            }
            exit_on_interrupt();
        });
    }

    #[cfg(not(unix))]
    {
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            exit_on_interrupt();
        });
    }

    Ok(())
}

fn exit_on_interrupt() -> ! {
    // Carriage return so the echoed "^C" gets overwritten.
    print!("\r");
    let _ = io::stdout().flush();
    info!("Ctrl+C pressed in terminal, exiting watchr");
    std::process::exit(0);
}
