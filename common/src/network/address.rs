//! # Address Value Model
//!
//! An [`IpAddress`] is a family-tagged byte sequence in network byte order,
//! optionally carrying a CIDR netmask (prefix length).
//!
//! Values are immutable once built. The only ways to get one are [`super::parse::parse`],
//! [`IpAddress::new`], and the `From` conversions from std address types.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use super::format::PresentationOptions;
use super::parse::{self, ParseError};

/// Address family of an [`IpAddress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Ipv4,
    Ipv6,
}

impl Family {
    /// Width of the family's addresses in bits, which is also its largest valid netmask.
    pub const fn max_prefix_len(self) -> u8 {
        match self {
            Family::Ipv4 => 32,
            Family::Ipv6 => 128,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Ipv4 => f.write_str("IPv4"),
            Family::Ipv6 => f.write_str("IPv6"),
        }
    }
}

/// An IPv4 or IPv6 address with an optional netmask.
///
/// Equality is structural: two values are equal when family, bytes and netmask
/// all match. Values of different families are never equal.
///
/// The variants can be matched on but not built outside this crate, so a
/// netmask is always within the family's width:
///
/// ```compile_fail
/// use cidrkit_common::network::IpAddress;
///
/// let bogus = IpAddress::V4 { octets: [10, 0, 0, 0], netmask: Some(200) };
/// ```
///
/// ```
/// use cidrkit_common::network::IpAddress;
/// use std::net::{IpAddr, Ipv4Addr};
///
/// assert!(IpAddress::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 0)), Some(200)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpAddress {
    #[non_exhaustive]
    V4 { octets: [u8; 4], netmask: Option<u8> },
    #[non_exhaustive]
    V6 { octets: [u8; 16], netmask: Option<u8> },
}

impl IpAddress {
    /// Builds an address from a std address and an optional netmask.
    ///
    /// Fails with [`ParseError::InvalidNetmask`] if the netmask is wider than the family allows.
    pub fn new(ip: IpAddr, netmask: Option<u8>) -> Result<Self, ParseError> {
        let family = family_of(ip);
        if let Some(prefix_len) = netmask.filter(|&n| n > family.max_prefix_len()) {
            return Err(ParseError::InvalidNetmask {
                netmask: prefix_len.to_string(),
                family,
            });
        }
        Ok(Self::from_validated(ip, netmask))
    }

    /// Callers must have checked `netmask` against the family of `ip`.
    pub(crate) const fn from_validated(ip: IpAddr, netmask: Option<u8>) -> Self {
        match ip {
            IpAddr::V4(v4) => IpAddress::V4 {
                octets: v4.octets(),
                netmask,
            },
            IpAddr::V6(v6) => IpAddress::V6 {
                octets: v6.octets(),
                netmask,
            },
        }
    }

    pub const fn family(&self) -> Family {
        match self {
            IpAddress::V4 { .. } => Family::Ipv4,
            IpAddress::V6 { .. } => Family::Ipv6,
        }
    }

    pub const fn has_netmask(&self) -> bool {
        self.netmask().is_some()
    }

    /// The prefix length, if the address was given one.
    pub const fn netmask(&self) -> Option<u8> {
        match *self {
            IpAddress::V4 { netmask, .. } | IpAddress::V6 { netmask, .. } => netmask,
        }
    }

    /// Raw address bytes in network byte order: 4 for IPv4, 16 for IPv6.
    pub fn octets(&self) -> &[u8] {
        match self {
            IpAddress::V4 { octets, .. } => octets,
            IpAddress::V6 { octets, .. } => octets,
        }
    }

    /// The address as a std [`IpAddr`], netmask dropped.
    pub fn ip(&self) -> IpAddr {
        match *self {
            IpAddress::V4 { octets, .. } => IpAddr::V4(Ipv4Addr::from(octets)),
            IpAddress::V6 { octets, .. } => IpAddr::V6(Ipv6Addr::from(octets)),
        }
    }

    /// Netmask, or the family's full width when there is none.
    pub(crate) fn prefix_len(&self) -> u8 {
        self.netmask()
            .unwrap_or_else(|| self.family().max_prefix_len())
    }
}

fn family_of(ip: IpAddr) -> Family {
    match ip {
        IpAddr::V4(_) => Family::Ipv4,
        IpAddr::V6(_) => Family::Ipv6,
    }
}

impl From<Ipv4Addr> for IpAddress {
    fn from(ip: Ipv4Addr) -> Self {
        Self::from_validated(IpAddr::V4(ip), None)
    }
}

impl From<Ipv6Addr> for IpAddress {
    fn from(ip: Ipv6Addr) -> Self {
        Self::from_validated(IpAddr::V6(ip), None)
    }
}

impl From<IpAddr> for IpAddress {
    fn from(ip: IpAddr) -> Self {
        Self::from_validated(ip, None)
    }
}

impl FromStr for IpAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s)
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(PresentationOptions::STANDARD), f)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
