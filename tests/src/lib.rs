//! Shared helpers for the integration tests.

use cidrkit_common::network::{IpAddress, PresentationOptions, parse};

/// Parses `s`, panicking with the parse error on failure.
pub fn addr(s: &str) -> IpAddress {
    parse(s).unwrap_or_else(|e| panic!("{s}: {e}"))
}

/// `subnet.contains(addr)` over two address strings.
pub fn contains(subnet: &str, address: &str) -> bool {
    addr(subnet).contains(&addr(address))
}

pub fn render(s: &str, options: PresentationOptions) -> String {
    addr(s).format(options)
}
