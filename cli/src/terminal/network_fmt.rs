use crate::terminal::colors;
use cidrkit_common::network::{Family, IpAddress, PresentationOptions};
use colored::*;

/// Renders an address with the address and netmask parts colored by family.
pub fn colored_address(address: &IpAddress, options: PresentationOptions) -> ColoredString {
    let (addr_color, prefix_color) = match address.family() {
        Family::Ipv4 => (colors::IPV4_ADDR, colors::IPV4_PREFIX),
        Family::Ipv6 => (colors::IPV6_ADDR, colors::IPV6_PREFIX),
    };

    let rendered: String = address.format(options);
    match rendered.split_once('/') {
        Some((addr, prefix)) => {
            let addr: ColoredString = addr.color(addr_color);
            let prefix: ColoredString = prefix.color(prefix_color);
            format!("{addr}/{prefix}").color(colors::SEPARATOR)
        }
        None => rendered.color(addr_color),
    }
}

/// Key/value lines describing an address, for `print::as_tree_one_level`.
pub fn to_key_value_pair(address: &IpAddress, options: PresentationOptions) -> Vec<(String, ColoredString)> {
    let mut pairs: Vec<(String, ColoredString)> = vec![(
        "family".to_string(),
        address.family().to_string().color(colors::TEXT_DEFAULT),
    )];

    let netmask: ColoredString = match address.netmask() {
        Some(prefix_len) => prefix_len.to_string().color(colors::ACCENT),
        None => "none".dimmed(),
    };
    pairs.push(("netmask".to_string(), netmask));

    if address.has_netmask() {
        pairs.push(("network".to_string(), colored_address(&address.network(), options)));
    }

    let octets: String = address
        .octets()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ");
    pairs.push(("bytes".to_string(), octets.dimmed()));

    pairs
}
