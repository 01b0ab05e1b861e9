//! # Address Parser
//!
//! Turns `addr` or `addr/prefix` text into an [`IpAddress`].
//!
//! Parsing is strict: whitespace is never trimmed, IPv4 octets may not carry
//! leading zeros, and a netmask must be plain decimal digits within the
//! family's width. Malformed input never produces a value.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use thiserror::Error;

use super::address::{Family, IpAddress};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Neither IPv4 nor IPv6 syntax was recognized.
    #[error("invalid IP address: {input:?}")]
    InvalidAddress { input: String },

    /// A netmask was given but is not a number within the family's range.
    #[error("invalid {family} netmask {netmask:?}, expected 0-{}", .family.max_prefix_len())]
    InvalidNetmask { netmask: String, family: Family },
}

/// Parses an address with an optional CIDR netmask.
///
/// Supported formats:
/// * **IPv4**: dotted quad (e.g., "192.168.1.5", "10.0.0.0/8").
/// * **IPv6**: RFC 4291 text, `::` compression and a trailing dotted quad
///   included (e.g., "2001:db8::/32", "::ffff:192.0.2.1").
///
/// The address part is checked before the netmask, so `"/24"` is an
/// [`ParseError::InvalidAddress`] rather than a netmask error.
pub fn parse(text: &str) -> Result<IpAddress, ParseError> {
    let (addr_str, netmask_str) = match text.split_once('/') {
        Some((addr_str, netmask_str)) => (addr_str, Some(netmask_str)),
        None => (text, None),
    };

    let ip = parse_ip(addr_str).ok_or_else(|| ParseError::InvalidAddress {
        input: text.to_string(),
    })?;

    let family = match ip {
        IpAddr::V4(_) => Family::Ipv4,
        IpAddr::V6(_) => Family::Ipv6,
    };

    let netmask = netmask_str
        .map(|netmask_str| parse_netmask(netmask_str, family))
        .transpose()?;

    Ok(IpAddress::from_validated(ip, netmask))
}

/// Tries IPv4 first, then IPv6.
fn parse_ip(s: &str) -> Option<IpAddr> {
    if let Ok(v4) = s.parse::<Ipv4Addr>() {
        return Some(IpAddr::V4(v4));
    }
    s.parse::<Ipv6Addr>().ok().map(IpAddr::V6)
}

fn parse_netmask(s: &str, family: Family) -> Result<u8, ParseError> {
    let invalid = || ParseError::InvalidNetmask {
        netmask: s.to_string(),
        family,
    };

    // `u8::from_str` would also take a leading '+'
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let prefix_len = s.parse::<u8>().map_err(|_| invalid())?;
    if prefix_len > family.max_prefix_len() {
        return Err(invalid());
    }

    Ok(prefix_len)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
