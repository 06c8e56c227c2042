//  LOGGING.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 10:02:41
//  Last edited:
//    19 Oct 2026, 15:47:12
//  Auto updated?
//    Yes
//
//  Description:
//!   Installs the `tracing` subscriber used by `kvutil`.
//

use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;


/***** TESTS *****/





/***** CONSTANTS *****/
/// The crates (as `tracing` targets) that the level picked on the command line applies to.
const OWN_TARGETS: [&str; 2] = ["kvstore", "kvutil"];





/***** HELPER FUNCTIONS *****/
/// Builds the filter directives used when the environment does not give any.
///
/// The given level applies to our own crates only. Dependencies log at `warn` at most.
fn default_directives(level: LevelFilter) -> String {
    let mut dirs: String = std::cmp::min(level, LevelFilter::WARN).to_string();
    for target in OWN_TARGETS {
        dirs.push_str(&format!(",{target}={level}"));
    }
    dirs
}





/***** LIBRARY *****/
/// Installs a global subscriber that writes to stderr, so stdout only carries command output.
///
/// # Arguments
/// - `log_level_env_var`: An environment variable that, if set, holds [`EnvFilter`] directives
///   that replace the defaults entirely.
/// - `level`: The level for `kvutil` and the `kvstore` library otherwise.
pub fn setup_subscriber(log_level_env_var: &str, level: LevelFilter) {
    let dirs: String = std::env::var(log_level_env_var).unwrap_or_else(|_| default_directives(level));
    let filter: EnvFilter = EnvFilter::builder().parse_lossy(&dirs);
    tracing_subscriber::registry().with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)).with(filter).init();

    debug!("Logger initiated with filter '{dirs}'");
}
