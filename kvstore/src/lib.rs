//  LIB.rs
//    by Lut99
//
//  Created:
//    06 Oct 2026, 09:12:40
//  Last edited:
//    17 Oct 2026, 11:03:27
//  Auto updated?
//    Yes
//
//  Description:
//!   Input normalization helpers used by the key-value store client before
//!   it talks to the network: timeout conversion, value coercion and
//!   address formatting / validation.
//

// Declare modules
pub mod address;
pub mod config;
pub mod constants;
pub mod duration;
pub mod value;

// Pull some things into the crate namespace
pub use address::{
    get_address, parse_address, parse_address_async, split_host_port, validate_address, validate_address_async, Address, AddressError, Host, SplitError,
};
pub use config::{ConfigError, KvConfig};
pub use duration::get_duration;
pub use value::{to_bytes, to_string, CoerceError, KvValue};
