//! # Vitrine Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vitrine Storefront                               │
//! │                                                                         │
//! │  main.rs ────► parses flags, starts the runtime                         │
//! │                                                                         │
//! │  lib.rs ─────► logging, config, Store, shell loop                       │
//! │                                                                         │
//! │  stdout: screens            stderr: logs                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;

#[tokio::main]
async fn main() {
    let args = vitrine::Args::parse();

    // The actual setup is in lib.rs for better testability
    if let Err(e) = vitrine::run(args).await {
        eprintln!("vitrine: {}", e);
        std::process::exit(1);
    }
}
