//! # Subnet Matching
//!
//! Prefix comparison between two [`IpAddress`] values of the same family.

use super::address::IpAddress;

impl IpAddress {
    /// Returns `true` if `other` falls inside the subnet described by `self`.
    ///
    /// * `self` should carry a netmask. Without one its full width is used,
    ///   which reduces the check to address equality.
    /// * The netmask of `other` is ignored.
    /// * Addresses of different families are never contained.
    pub fn contains(&self, other: &IpAddress) -> bool {
        if self.family() != other.family() {
            return false;
        }
        prefix_matches(self.octets(), other.octets(), self.prefix_len())
    }

    /// The address with every bit past the prefix cleared. The netmask is kept.
    ///
    /// `192.168.1.42/24` becomes `192.168.1.0/24`. Without a netmask the address
    /// is returned unchanged.
    pub fn network(&self) -> IpAddress {
        let prefix_len = self.prefix_len();
        match *self {
            IpAddress::V4 { mut octets, netmask } => {
                clear_host_bits(&mut octets, prefix_len);
                IpAddress::V4 { octets, netmask }
            }
            IpAddress::V6 { mut octets, netmask } => {
                clear_host_bits(&mut octets, prefix_len);
                IpAddress::V6 { octets, netmask }
            }
        }
    }
}

/// High-order bits of the last, partial byte of a prefix.
const fn partial_mask(bits: u8) -> u8 {
    0xFF << (8 - bits)
}

/// Compares the leading `prefix_len` bits of two equally long byte slices.
///
/// Whole bytes are compared directly; a trailing partial byte only on its high bits.
fn prefix_matches(network: &[u8], addr: &[u8], prefix_len: u8) -> bool {
    let full_bytes = usize::from(prefix_len / 8);
    let rest = prefix_len % 8;

    if network[..full_bytes] != addr[..full_bytes] {
        return false;
    }
    if rest == 0 {
        return true;
    }

    let mask = partial_mask(rest);
    network[full_bytes] & mask == addr[full_bytes] & mask
}

fn clear_host_bits(octets: &mut [u8], prefix_len: u8) {
    let full_bytes = usize::from(prefix_len / 8);
    let rest = prefix_len % 8;

    let Some(tail) = octets.get_mut(full_bytes..) else {
        return;
    };
    if let Some((first, zeroed)) = tail.split_first_mut() {
        *first &= if rest == 0 { 0 } else { partial_mask(rest) };
        zeroed.fill(0);
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
