//  DURATION.rs
//    by Lut99
//
//  Created:
//    06 Oct 2026, 09:31:18
//  Last edited:
//    09 Oct 2026, 10:15:33
//  Auto updated?
//    Yes
//
//  Description:
//!   Converts user-given timeouts into [`Duration`]s.
//

use std::time::Duration;

use crate::constants::DEFAULT_KV_GET_TIMEOUT;


/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn test_duration_negative_timeout() {
        assert_eq!(get_duration(-1), DEFAULT_KV_GET_TIMEOUT);
        assert_eq!(get_duration(i64::MIN), DEFAULT_KV_GET_TIMEOUT);
    }

    #[test]
    fn test_duration_zero_timeout() { assert_eq!(get_duration(0), DEFAULT_KV_GET_TIMEOUT); }

    #[test]
    fn test_duration_timeout() {
        assert_eq!(get_duration(10), Duration::from_secs(10));
        assert_eq!(get_duration(1), Duration::from_secs(1));
    }

    #[test]
    fn test_duration_with_default() {
        let default = Duration::from_secs(42);
        assert_eq!(get_duration_or(0, default), default);
        assert_eq!(get_duration_or(3, default), Duration::from_secs(3));
    }
}





/***** LIBRARY *****/
/// Converts a timeout in seconds to a [`Duration`], falling back to the given default.
///
/// # Arguments
/// - `timeout`: The timeout, in seconds. Anything non-positive counts as "not set".
/// - `default`: The [`Duration`] to return when `timeout` is not set.
///
/// # Returns
/// `timeout` seconds, or `default`.
#[inline]
pub fn get_duration_or(timeout: i64, default: Duration) -> Duration {
    match u64::try_from(timeout) {
        Ok(secs) if secs > 0 => Duration::from_secs(secs),
        _ => default,
    }
}

/// Converts a timeout in seconds to a [`Duration`].
///
/// If the timeout is zero or negative, the [default `GET` timeout](DEFAULT_KV_GET_TIMEOUT) is
/// used instead. Use [`KvConfig::get_duration()`](crate::config::KvConfig::get_duration()) to
/// fall back to a configured default.
///
/// # Arguments
/// - `timeout`: The timeout, in seconds.
///
/// # Returns
/// A new [`Duration`] of `timeout` seconds (or the default).
#[inline]
pub fn get_duration(timeout: i64) -> Duration { get_duration_or(timeout, DEFAULT_KV_GET_TIMEOUT) }
