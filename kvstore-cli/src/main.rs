//  MAIN.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 09:44:37
//  Last edited:
//    19 Oct 2026, 15:50:03
//  Auto updated?
//    Yes
//
//  Description:
//!   Entrypoint to `kvutil`, which exposes the key-value store client
//!   helpers on the command line.
//

mod cli;
mod logging;

use std::time::Duration;

use clap::Parser;
use dotenvy::dotenv;
use error_trace::trace;
use kvstore::{get_address, get_duration, validate_address, validate_address_async, KvConfig};
use tracing::{debug, error, info};

use crate::cli::{Cli, KvSubcommand};


/***** CONSTANTS *****/
/// The log level of `kvutil` and `kvstore` when no verbosity flags are given.
const DEFAULT_LOG_LEVEL: tracing::level_filters::LevelFilter = tracing::level_filters::LevelFilter::WARN;
/// The environment variable with filter directives that override the verbosity flags.
const LOG_LEVEL_ENV_VAR: &str = "KVUTIL_LOG";



/***** ENTRYPOINT *****/
#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();
    let args = Cli::parse();

    let cli_log_level = args.logging.log_level(DEFAULT_LOG_LEVEL);
    logging::setup_subscriber(LOG_LEVEL_ENV_VAR, cli_log_level);

    info!("Initializing kvutil v{}...", env!("CARGO_PKG_VERSION"));

    match args.subcommand {
        KvSubcommand::Duration { timeout, config } => {
            let duration: Duration = match config {
                Some(path) => {
                    debug!("Using default timeout from '{}'", path.display());
                    match KvConfig::from_path(&path) {
                        Ok(config) => config.get_duration(timeout),
                        Err(err) => {
                            error!("{}", trace!(("Failed to load KvConfig file"), err));
                            std::process::exit(1);
                        },
                    }
                },
                None => get_duration(timeout),
            };
            println!("{}", duration.as_secs());
        },

        KvSubcommand::Address { host, port } => println!("{}", get_address(host, port)),

        KvSubcommand::Validate { address, use_async } => {
            let res = if use_async { validate_address_async(&address).await } else { validate_address(&address) };
            match res {
                Ok(()) => println!("OK"),
                Err(err) => {
                    error!("{}", trace!(("Address '{address}' is invalid"), err));
                    std::process::exit(1);
                },
            }
        },
    }
}
