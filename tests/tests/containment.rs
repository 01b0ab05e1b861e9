use cidrkit_common::network::{IpAddress, parse};
use cidrkit_integration_tests::{addr, contains};
use proptest::prelude::*;
use std::net::Ipv4Addr;

/*************************************************************
                     Documented cases
**************************************************************/

#[test]
fn host_inside_ipv4_subnet() {
    assert!(contains("192.168.1.0/24", "192.168.1.42"));
}

#[test]
fn host_outside_ipv4_subnet() {
    assert!(!contains("192.168.1.0/24", "192.168.2.1"));
}

#[test]
fn host_inside_ipv6_subnet() {
    assert!(contains("2001:db8::/32", "2001:db8:1::1"));
}

#[test]
fn zero_prefix_contains_everything_in_family() {
    assert!(contains("0.0.0.0/0", "203.0.113.7"));
    assert!(contains("::/0", "::1"));
}

#[test]
fn cross_family_is_never_contained() {
    assert!(!contains("10.0.0.0/8", "::1"));
    assert!(!contains("::/0", "10.0.0.1"));
    // Mapped addresses are not normalized
    assert!(!contains("10.0.0.0/8", "::ffff:10.0.0.1"));
}

/*************************************************************
                  Subnets without netmask
**************************************************************/

#[test]
fn plain_address_compares_for_equality() {
    assert!(contains("198.51.100.7", "198.51.100.7"));
    assert!(contains("198.51.100.7", "198.51.100.7/24"));
    assert!(!contains("198.51.100.7", "198.51.100.8"));
}

/*************************************************************
                  Common private ranges
**************************************************************/

#[test]
fn rfc1918_ranges() {
    let private: Vec<IpAddress> = ["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"]
        .iter()
        .map(|s| addr(s))
        .collect();
    let is_private = |s: &str| private.iter().any(|net| net.contains(&addr(s)));

    assert!(is_private("10.255.0.1"));
    assert!(is_private("172.31.255.255"));
    assert!(is_private("192.168.100.1"));
    assert!(!is_private("172.32.0.1"));
    assert!(!is_private("8.8.8.8"));
}

#[test]
fn link_local_ipv6() {
    assert!(contains("fe80::/10", "fe80::1ff:fe23:4567:890a"));
    assert!(!contains("fe80::/10", "fd00::1"));
}

proptest! {
    #[test]
    fn full_width_prefix_is_reflexive(octets in any::<[u8; 4]>()) {
        let a = parse(&format!("{}/32", Ipv4Addr::from(octets))).unwrap();
        prop_assert!(a.contains(&a));
    }

    #[test]
    fn contains_agrees_with_network(octets in any::<[u8; 4]>(), other in any::<[u8; 4]>(), prefix_len in 0u8..=32) {
        let subnet = parse(&format!("{}/{prefix_len}", Ipv4Addr::from(octets))).unwrap();
        let other = IpAddress::from(Ipv4Addr::from(other));
        let same_network = parse(&format!("{}/{prefix_len}", other.ip())).unwrap().network().octets()
            == subnet.network().octets();
        prop_assert_eq!(subnet.contains(&other), same_network);
    }
}
