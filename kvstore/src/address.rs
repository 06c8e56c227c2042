//  ADDRESS.rs
//    by Lut99
//
//  Created:
//    08 Oct 2026, 10:05:56
//  Last edited:
//    19 Oct 2026, 15:31:48
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the [`Address`] of a key-value store endpoint, together with
//!   the functions that build and validate `host:port` strings.
//!
//!   Validation runs the same pipeline every time, stopping at the first
//!   failing step:
//!   1. Split the string into a host and a port ([`split_host_port()`]);
//!   2. Resolve the host with the system resolver;
//!   3. Parse the port as a decimal integer; and
//!   4. Check that the port is in the range `0..=65535`.
//

use std::borrow::Cow;
use std::fmt::{Display, Formatter, Result as FResult};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, ToSocketAddrs as _};
use std::num::ParseIntError;
use std::str::FromStr;

use enum_debug::EnumDebug;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::constants::MAX_PORT;


/***** TESTS *****/





/***** ERRORS *****/
/// Describes why an address could not be split into a host and a port.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SplitError {
    /// There is no port (or no colon in front of it).
    #[error("missing port in address")]
    MissingPort,
    /// The host contains a colon but is not wrapped in brackets.
    #[error("too many colons in address")]
    TooManyColons,
    /// An opening bracket was never closed.
    #[error("missing ']' in address")]
    MissingBracket,
    /// A bracket appeared outside of an IPv6 literal.
    #[error("unexpected {c:?} in address")]
    UnexpectedBracket { c: char },
}

/// Errors that relate to validating or parsing [`Address`]es.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The input could not be split into a host and a port.
    #[error("Invalid Format of address {raw:?}")]
    InvalidFormat { raw: String, source: SplitError },
    /// The address had no host part.
    #[error("Address {raw:?} has no host")]
    MissingHost { raw: String },
    /// The host did not resolve to any IP address.
    #[error("Unknown host {host:?}")]
    UnknownHost { host: String, source: Option<std::io::Error> },
    /// The port is not a decimal integer.
    #[error("Invalid address port {raw:?}")]
    InvalidPort { raw: String, source: ParseIntError },
    /// The port is a number, but not one that fits in a port.
    #[error("Invalid address port range: {port} is not in 0..={max}", max = MAX_PORT)]
    InvalidPortRange { port: i64 },
}





/***** HELPER FUNCTIONS *****/
/// Turns a [`SplitError`] into an [`AddressError`] for the given input.
#[inline]
fn split(raw: &str) -> Result<(&str, &str), AddressError> {
    split_host_port(raw).map_err(|source| AddressError::InvalidFormat { raw: raw.into(), source })
}

/// Checks that the given host resolves to at least one IP address. Blocks on the system resolver.
fn resolve(host: &str) -> Result<(), AddressError> {
    if host.is_empty() {
        return Err(AddressError::UnknownHost { host: host.into(), source: None });
    }

    debug!("Resolving host {host:?}...");
    let mut addrs = (host, 0u16).to_socket_addrs().map_err(|source| AddressError::UnknownHost { host: host.into(), source: Some(source) })?;
    match addrs.next() {
        Some(addr) => {
            trace!("Host {host:?} resolves to {}", addr.ip());
            Ok(())
        },
        None => Err(AddressError::UnknownHost { host: host.into(), source: None }),
    }
}

/// Checks that the given host resolves to at least one IP address, using tokio's resolver.
async fn resolve_async(host: &str) -> Result<(), AddressError> {
    if host.is_empty() {
        return Err(AddressError::UnknownHost { host: host.into(), source: None });
    }

    debug!("Resolving host {host:?} (async)...");
    let mut addrs =
        tokio::net::lookup_host((host, 0u16)).await.map_err(|source| AddressError::UnknownHost { host: host.into(), source: Some(source) })?;
    match addrs.next() {
        Some(addr) => {
            trace!("Host {host:?} resolves to {}", addr.ip());
            Ok(())
        },
        None => Err(AddressError::UnknownHost { host: host.into(), source: None }),
    }
}

/// Parses a port as a decimal integer and checks it is in range.
///
/// # Errors
/// This function errors with [`AddressError::InvalidPort`] if `raw` is not an integer, or with
/// [`AddressError::InvalidPortRange`] if it is but falls outside of `0..=65535`.
fn parse_port(raw: &str) -> Result<u16, AddressError> {
    let port: i64 = i64::from_str(raw).map_err(|source| AddressError::InvalidPort { raw: raw.into(), source })?;
    // Fails exactly when the port is outside of `0..=MAX_PORT`
    u16::try_from(port).map_err(|_| AddressError::InvalidPortRange { port })
}





/***** LIBRARY *****/
/// Defines the possible types of hostnames.
#[derive(Clone, Debug, EnumDebug, Eq, Hash, PartialEq)]
pub enum Host {
    /// It's an IPv4 address.
    IPv4(Ipv4Addr),
    /// It's an IPv6 address.
    IPv6(Ipv6Addr),
    /// It's a hostname.
    Name(String),
}
// Constructors
impl Host {
    /// Constructor for the Host that initializes it for the given IPv4 address.
    #[inline]
    pub const fn new_ipv4(b1: u8, b2: u8, b3: u8, b4: u8) -> Self { Self::IPv4(Ipv4Addr::new(b1, b2, b3, b4)) }

    /// Constructor for the Host that initializes it for the given hostname.
    ///
    /// Note that this does not check whether `name` is actually an IP address. Use
    /// [`Host::classify()`] for that.
    #[inline]
    pub fn new_name(name: impl Into<String>) -> Self { Self::Name(name.into()) }

    /// Constructor for the Host that picks the right variant for the given raw host.
    ///
    /// # Arguments
    /// - `raw`: An IPv4 address, an (unbracketed) IPv6 address or a hostname.
    ///
    /// # Returns
    /// A new Host of the appropriate kind.
    #[inline]
    pub fn classify(raw: &str) -> Self {
        match IpAddr::from_str(raw) {
            Ok(addr) => Self::from(addr),
            Err(_) => Self::Name(raw.into()),
        }
    }
}
// Accessors
impl Host {
    /// Checks whether this Host is an [IPv4 address](Host::IPv4).
    #[inline]
    pub const fn is_ipv4(&self) -> bool { matches!(self, Self::IPv4(_)) }

    /// Checks whether this Host is a [hostname](Host::Name).
    #[inline]
    pub const fn is_name(&self) -> bool { matches!(self, Self::Name(_)) }
}
// Formatting
impl Display for Host {
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::IPv4(addr) => addr.fmt(f),
            Self::IPv6(addr) => addr.fmt(f),
            Self::Name(name) => name.fmt(f),
        }
    }
}
// Conversion
impl From<IpAddr> for Host {
    #[inline]
    fn from(value: IpAddr) -> Self {
        match value {
            IpAddr::V4(addr) => Self::IPv4(addr),
            IpAddr::V6(addr) => Self::IPv6(addr),
        }
    }
}



/// The address of a key-value store endpoint: a [`Host`] and a port.
///
/// Parsing one with [`FromStr`] only checks the syntax. Use [`parse_address()`] to also check
/// that the host resolves.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Address {
    /// The host-part of the address.
    pub host: Host,
    /// The port-part of the address.
    pub port: u16,
}
// Constructors
impl Address {
    /// Constructor for the Address that initializes it for the given IPv4 address.
    #[inline]
    pub fn ipv4(b1: u8, b2: u8, b3: u8, b4: u8, port: u16) -> Self { Self { host: Host::new_ipv4(b1, b2, b3, b4), port } }

    /// Constructor for the Address that initializes it for the given IPv6 address.
    #[inline]
    pub fn from_ipv6(ipv6: impl Into<Ipv6Addr>, port: u16) -> Self { Self { host: Host::IPv6(ipv6.into()), port } }

    /// Constructor for the Address that initializes it for the given hostname.
    ///
    /// # Arguments
    /// - `hostname`: The hostname for this Address.
    /// - `port`: The port for this address.
    ///
    /// # Returns
    /// A new Address instance.
    #[inline]
    pub fn hostname(hostname: impl Into<String>, port: u16) -> Self { Self { host: Host::new_name(hostname), port } }
}
// Accessors
impl Address {
    /// Returns the domain-part, as a (serialized) string version.
    ///
    /// # Returns
    /// A `Cow<str>` that either borrows the hostname, or else holds the serialized IP.
    #[inline]
    pub fn domain(&self) -> Cow<'_, str> {
        match &self.host {
            Host::Name(name) => Cow::Borrowed(name),
            host => Cow::Owned(host.to_string()),
        }
    }

    /// Returns if this Address has a hostname as host.
    #[inline]
    pub const fn is_hostname(&self) -> bool { self.host.is_name() }

    /// Returns if this Address has an IPv4 address as host.
    #[inline]
    pub const fn is_ipv4(&self) -> bool { self.host.is_ipv4() }
}
// Formatting
impl Display for Address {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        // Any host with a colon in it (IPv6, zoned or not) needs brackets to be split again
        let domain: Cow<str> = self.domain();
        if domain.contains(':') { write!(f, "[{}]:{}", domain, self.port) } else { write!(f, "{}:{}", domain, self.port) }
    }
}
// De/Serialization
impl Serialize for Address {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
impl<'de> Deserialize<'de> for Address {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        /// Defines the visitor for the Address
        struct AddressVisitor;
        impl Visitor<'_> for AddressVisitor {
            type Value = Address;

            #[inline]
            fn expecting(&self, f: &mut Formatter<'_>) -> FResult { write!(f, "an address:port pair") }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Address::from_str(v).map_err(E::custom)
            }
        }

        // Call the visitor
        deserializer.deserialize_str(AddressVisitor)
    }
}
impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port): (&str, &str) = split(s)?;
        if host.is_empty() {
            return Err(AddressError::MissingHost { raw: s.into() });
        }
        let port: u16 = parse_port(port)?;
        Ok(Self { host: Host::classify(host), port })
    }
}



/// Concatenates a host and a port into a single `host:port` string.
///
/// No validation is done; see [`validate_address()`] for that.
///
/// # Arguments
/// - `host`: The host-part of the address.
/// - `port`: The port-part of the address.
///
/// # Returns
/// A new string `"<host>:<port>"`.
#[inline]
pub fn get_address(host: impl AsRef<str>, port: i64) -> String { format!("{}:{}", host.as_ref(), port) }

/// Splits an address into its host and port parts.
///
/// Accepts `host:port` and `[host]:port`, where the latter is used for IPv6 literals. The
/// brackets are stripped from the returned host. The port may be empty.
///
/// # Arguments
/// - `raw`: The address to split.
///
/// # Returns
/// A tuple of the host and the port, both borrowing from `raw`.
///
/// # Errors
/// This function errors if `raw` is not of either form.
pub fn split_host_port(raw: &str) -> Result<(&str, &str), SplitError> {
    let colon: usize = raw.rfind(':').ok_or(SplitError::MissingPort)?;

    // Find the host, and from where brackets are no longer allowed
    let (host, open_from, close_from): (&str, usize, usize) = if raw.starts_with('[') {
        let end: usize = raw.find(']').ok_or(SplitError::MissingBracket)?;
        match raw.as_bytes().get(end + 1) {
            // Only `:port` may follow the closing bracket
            Some(b':') if end + 1 == colon => {},
            Some(b':') => return Err(SplitError::TooManyColons),
            _ => return Err(SplitError::MissingPort),
        }
        (&raw[1..end], 1, end + 1)
    } else {
        let host: &str = &raw[..colon];
        if host.contains(':') {
            return Err(SplitError::TooManyColons);
        }
        (host, 0, 0)
    };
    if raw[open_from..].contains('[') {
        return Err(SplitError::UnexpectedBracket { c: '[' });
    }
    if raw[close_from..].contains(']') {
        return Err(SplitError::UnexpectedBracket { c: ']' });
    }

    Ok((host, &raw[colon + 1..]))
}

/// Parses an address, checking that its host resolves and that its port is valid.
///
/// Note that this blocks on the system resolver, without any timeout.
///
/// # Arguments
/// - `raw`: The `host:port` string to parse.
///
/// # Returns
/// The parsed [`Address`].
///
/// # Errors
/// This function errors on the first step that fails:
/// - [`AddressError::InvalidFormat`] if `raw` cannot be [split](split_host_port());
/// - [`AddressError::UnknownHost`] if the host does not resolve;
/// - [`AddressError::InvalidPort`] if the port is not a decimal integer; or
/// - [`AddressError::InvalidPortRange`] if the port is not in `0..=65535`.
pub fn parse_address(raw: &str) -> Result<Address, AddressError> {
    let (host, port): (&str, &str) = split(raw)?;
    resolve(host)?;
    let port: u16 = parse_port(port)?;
    let host: Host = Host::classify(host);
    trace!("Address {raw:?} has a host of kind {}", host.variant());
    Ok(Address { host, port })
}

/// Async version of [`parse_address()`] that resolves the host on tokio's blocking pool.
///
/// # Errors
/// This function errors for the same reasons as [`parse_address()`].
pub async fn parse_address_async(raw: &str) -> Result<Address, AddressError> {
    let (host, port): (&str, &str) = split(raw)?;
    resolve_async(host).await?;
    let port: u16 = parse_port(port)?;
    let host: Host = Host::classify(host);
    trace!("Address {raw:?} has a host of kind {}", host.variant());
    Ok(Address { host, port })
}

/// Validates the host and port of an address.
///
/// See [`parse_address()`] for the steps taken.
///
/// # Errors
/// This function errors if the address is not valid.
#[inline]
pub fn validate_address(raw: &str) -> Result<(), AddressError> { parse_address(raw).map(|_| ()) }

/// Validates the host and port of an address without blocking the executor.
///
/// # Errors
/// This function errors if the address is not valid.
#[inline]
pub async fn validate_address_async(raw: &str) -> Result<(), AddressError> { parse_address_async(raw).await.map(|_| ()) }
