use cidrkit_common::network::{Family, ParseError, parse};
use cidrkit_integration_tests::addr;

#[test]
fn family_is_detected() {
    assert_eq!(addr("127.0.0.1").family(), Family::Ipv4);
    assert_eq!(addr("::1").family(), Family::Ipv6);
    assert_eq!(addr("::ffff:127.0.0.1").family(), Family::Ipv6);
}

#[test]
fn netmask_round_trips() {
    for (s, n) in [("10.0.0.0/8", 8), ("192.168.1.0/24", 24), ("2001:db8::/32", 32), ("::/0", 0)] {
        assert_eq!(addr(s).netmask(), Some(n));
        assert!(addr(s).has_netmask());
    }
}

#[test]
fn not_an_ip_is_invalid_address() {
    assert!(matches!(parse("not-an-ip"), Err(ParseError::InvalidAddress { .. })));
}

#[test]
fn out_of_range_netmask_is_invalid_netmask() {
    assert_eq!(
        parse("10.0.0.1/99"),
        Err(ParseError::InvalidNetmask {
            netmask: "99".to_string(),
            family: Family::Ipv4
        })
    );
}

#[test]
fn strict_inputs_are_rejected() {
    for s in ["", "/24", " 10.0.0.1", "10.0.0.1\n", "10.0.0.1/ 24", "localhost", "10.0.0.1/24/8"] {
        assert!(parse(s).is_err(), "{s:?} should not parse");
    }
}

#[test]
fn netmask_beyond_family_width_never_builds() {
    use cidrkit_common::network::IpAddress;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    assert!(IpAddress::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 0)), Some(200)).is_err());
    assert!(IpAddress::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), Some(200)).is_err());

    // Whatever does build renders to text the parser takes back
    let subnet = IpAddress::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 0)), Some(32)).unwrap();
    assert_eq!(parse(&subnet.to_string()), Ok(subnet));
    assert!(subnet.contains(&addr("10.0.0.0")));
}
