//  CLI.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 09:51:22
//  Last edited:
//    19 Oct 2026, 15:44:58
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the command-line arguments of `kvutil`.
//

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::level_filters::LevelFilter;


/***** TESTS *****/
#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;


    #[test]
    fn test_cli_verify() { Cli::command().debug_assert(); }

    #[test]
    fn test_log_level_from_warn() {
        let level = |args: &[&str]| {
            let mut argv: Vec<&str> = vec!["kvutil"];
            argv.extend_from_slice(args);
            argv.extend_from_slice(&["duration", "3"]);
            Cli::parse_from(argv).logging.log_level(LevelFilter::WARN)
        };

        assert_eq!(level(&[]), LevelFilter::WARN);
        assert_eq!(level(&["-v"]), LevelFilter::INFO);
        assert_eq!(level(&["-vv"]), LevelFilter::DEBUG);
        assert_eq!(level(&["-vvv"]), LevelFilter::TRACE);
        assert_eq!(level(&["-vvvvvv"]), LevelFilter::TRACE);
        assert_eq!(level(&["-q"]), LevelFilter::ERROR);
        assert_eq!(level(&["-qq"]), LevelFilter::OFF);
        assert_eq!(level(&["-qqqq"]), LevelFilter::OFF);
        assert_eq!(level(&["--debug"]), LevelFilter::DEBUG);
        assert_eq!(level(&["--trace"]), LevelFilter::TRACE);
    }

    #[test]
    fn test_log_level_conflicts() {
        assert!(Cli::try_parse_from(["kvutil", "-v", "-q", "duration", "3"]).is_err());
        assert!(Cli::try_parse_from(["kvutil", "--debug", "--trace", "duration", "3"]).is_err());
    }

    #[test]
    fn test_negative_numbers() {
        let args = Cli::parse_from(["kvutil", "address", "localhost", "-1"]);
        assert!(matches!(args.subcommand, KvSubcommand::Address { port: -1, .. }));
        let args = Cli::parse_from(["kvutil", "duration", "-5"]);
        assert!(matches!(args.subcommand, KvSubcommand::Duration { timeout: -5, config: None }));
    }
}





/***** LIBRARY *****/
/// Inspects and normalizes the inputs of the key-value store client.
#[derive(Debug, Parser)]
#[clap(name = "kvutil", author, version)]
pub struct Cli {
    #[clap(flatten)]
    pub logging: Verbosity,

    #[clap(subcommand)]
    pub subcommand: KvSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum KvSubcommand {
    #[clap(name = "duration", about = "Prints the duration that a timeout (in seconds) is turned into.")]
    Duration {
        #[clap(name = "SECONDS", allow_negative_numbers = true, help = "The timeout to convert. Zero or negative selects the default.")]
        timeout: i64,
        #[clap(short, long, env = "KVUTIL_CONFIG", help = "A YAML file that overrides the default timeout.")]
        config:  Option<PathBuf>,
    },

    #[clap(name = "address", about = "Joins a host and a port into an address.")]
    Address {
        #[clap(name = "HOST", help = "The host-part of the address.")]
        host: String,
        #[clap(name = "PORT", allow_negative_numbers = true, help = "The port-part of the address.")]
        port: i64,
    },

    #[clap(name = "validate", about = "Checks that an address has a valid port and a host that resolves.")]
    Validate {
        #[clap(name = "ADDRESS", help = "The `host:port` address to validate.")]
        address: String,
        #[clap(long = "async", help = "If given, resolves the host on tokio's resolver instead of blocking.")]
        use_async: bool,
    },
}

/// The levels `kvutil` can log at, from quietest to loudest.
const LEVEL_LADDER: [LevelFilter; 6] = [LevelFilter::OFF, LevelFilter::ERROR, LevelFilter::WARN, LevelFilter::INFO, LevelFilter::DEBUG, LevelFilter::TRACE];

/// Flags that move the log level of `kvutil` away from its default.
#[derive(Args, Debug)]
pub struct Verbosity {
    /// Jumps straight to `debug`.
    #[clap(long, global = true, help = "If given, prints debug information.", group = "verbosity", env = "KVUTIL_DEBUG")]
    pub debug: bool,
    /// Jumps straight to `trace`, which includes every resolver lookup.
    #[clap(long, global = true, help = "If given, prints as much debug information as possible.", group = "verbosity", env = "KVUTIL_TRACE")]
    pub trace: bool,
    /// Steps up from the default (`warn`): `-v` for info, `-vv` for debug, `-vvv` for trace.
    #[clap(short, long, global = true, help = "Increments the log level by one step per occurrence.", action = ArgAction::Count, group = "verbosity")]
    pub(crate) verbose: u8,
    /// Steps down from the default: `-q` for errors only, `-qq` for nothing.
    #[clap(short, long, global = true, help = "Decrements the log level by one step per occurrence.", action = ArgAction::Count, group = "verbosity")]
    pub(crate) quiet: u8,
}
impl Verbosity {
    /// Finds the log level requested by the flags.
    ///
    /// # Arguments
    /// - `default_level`: The level to start stepping from.
    ///
    /// # Returns
    /// The level `kvutil` should log at.
    pub fn log_level(&self, default_level: LevelFilter) -> LevelFilter {
        if self.trace {
            return LevelFilter::TRACE;
        } else if self.debug {
            return LevelFilter::DEBUG;
        }

        let start: usize = LEVEL_LADDER.iter().position(|level| *level == default_level).unwrap_or(0);
        let step: usize = start.saturating_add(self.verbose.into()).saturating_sub(self.quiet.into());
        LEVEL_LADDER[step.min(LEVEL_LADDER.len() - 1)]
    }
}
