// src/engine/mod.rs

//! Orchestration for watchr.
//!
//! - [`supervisor`] launches one watch task per target and applies the
//!   failure policy.
//! - [`signal`] terminates the process cleanly on Ctrl-C / SIGTERM.

pub mod signal;
pub mod supervisor;

pub use signal::install_interrupt_handler;
pub use supervisor::Supervisor;
