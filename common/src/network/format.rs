//! # Address Formatter
//!
//! Renders an [`IpAddress`] back to text. Output depends only on the address
//! and the [`PresentationOptions`] passed in.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::ops::{BitOr, BitOrAssign};

use super::address::IpAddress;

/// Set of presentation flags, combined with `|`.
///
/// When both [`FORCE_NETMASK`](Self::FORCE_NETMASK) and
/// [`SUPPRESS_NETMASK`](Self::SUPPRESS_NETMASK) are set, suppression wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PresentationOptions(u8);

impl PresentationOptions {
    /// Compact canonical form; the netmask is printed only if the address has one.
    pub const STANDARD: Self = Self(0);

    /// Always print a netmask, `/32` or `/128` when the address has none.
    pub const FORCE_NETMASK: Self = Self(1 << 0);

    /// Never print the netmask.
    pub const SUPPRESS_NETMASK: Self = Self(1 << 1);

    /// Print IPv6 addresses as eight zero-padded groups with no `::`. No effect on IPv4.
    pub const EXPANDED: Self = Self(1 << 2);

    const ALL: u8 = Self::FORCE_NETMASK.0 | Self::SUPPRESS_NETMASK.0 | Self::EXPANDED.0;

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Unknown bits are dropped.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for PresentationOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PresentationOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// An address paired with presentation options, ready to be written with `{}`.
///
/// Returned by [`IpAddress::display`].
#[derive(Debug, Clone, Copy)]
pub struct Formatted {
    address: IpAddress,
    options: PresentationOptions,
}

impl Formatted {
    fn netmask_suffix(&self) -> Option<u8> {
        if self.options.contains(PresentationOptions::SUPPRESS_NETMASK) {
            return None;
        }
        match self.address.netmask() {
            Some(prefix_len) => Some(prefix_len),
            None if self.options.contains(PresentationOptions::FORCE_NETMASK) => {
                Some(self.address.family().max_prefix_len())
            }
            None => None,
        }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.address {
            IpAddress::V4 { octets, .. } => write!(f, "{}", Ipv4Addr::from(octets))?,
            IpAddress::V6 { octets, .. } if self.options.contains(PresentationOptions::EXPANDED) => {
                write_expanded(f, &octets)?
            }
            IpAddress::V6 { octets, .. } => write!(f, "{}", Ipv6Addr::from(octets))?,
        }

        if let Some(prefix_len) = self.netmask_suffix() {
            write!(f, "/{prefix_len}")?;
        }
        Ok(())
    }
}

/// Writes all eight groups as four lowercase hex digits each.
fn write_expanded(f: &mut fmt::Formatter<'_>, octets: &[u8; 16]) -> fmt::Result {
    for (i, group) in octets.chunks_exact(2).enumerate() {
        if i > 0 {
            f.write_str(":")?;
        }
        write!(f, "{:04x}", u16::from_be_bytes([group[0], group[1]]))?;
    }
    Ok(())
}

impl IpAddress {
    /// Lazily formatted view of the address; see [`PresentationOptions`].
    pub fn display(&self, options: PresentationOptions) -> Formatted {
        Formatted {
            address: *self,
            options,
        }
    }

    /// Renders the address to a string; see [`PresentationOptions`].
    pub fn format(&self, options: PresentationOptions) -> String {
        self.display(options).to_string()
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
