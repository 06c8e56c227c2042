//  CONSTANTS.rs
//    by Lut99
//
//  Created:
//    06 Oct 2026, 09:20:05
//  Last edited:
//    08 Oct 2026, 16:41:52
//  Auto updated?
//    Yes
//
//  Description:
//!   Defaults shared by the helpers in this crate. Changing a default
//!   here changes it for every caller of the key-value store client.
//

use std::time::Duration;

/// The timeout used for key-value `GET`s when the caller does not provide a positive one, in seconds.
pub const DEFAULT_KV_GET_TIMEOUT_SECS: u64 = 5;
/// [`DEFAULT_KV_GET_TIMEOUT_SECS`] as a [`Duration`].
pub const DEFAULT_KV_GET_TIMEOUT: Duration = Duration::from_secs(DEFAULT_KV_GET_TIMEOUT_SECS);

/// The highest port number an address may carry.
pub const MAX_PORT: i64 = u16::MAX as i64;
