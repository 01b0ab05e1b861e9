use cidrkit_common::network::{PresentationOptions, parse};
use cidrkit_integration_tests::render;

const STANDARD: PresentationOptions = PresentationOptions::STANDARD;
const FORCE: PresentationOptions = PresentationOptions::FORCE_NETMASK;
const SUPPRESS: PresentationOptions = PresentationOptions::SUPPRESS_NETMASK;
const EXPANDED: PresentationOptions = PresentationOptions::EXPANDED;

/*************************************************************
                         Round trips
**************************************************************/

#[test]
fn standard_reproduces_input() {
    for s in [
        "192.168.1.0/24",
        "10.0.0.1",
        "0.0.0.0/0",
        "255.255.255.255/32",
        "2001:db8::/32",
        "2001:db8::1",
        "::1/128",
        "fe80::1:2:3:4/64",
    ] {
        assert_eq!(render(s, STANDARD), s);
    }
}

#[test]
fn standard_output_parses_back() {
    for s in ["2001:0db8:0:0:0:0:0:1/64", "::FFFF:192.0.2.1", "1:2:3:4:5:6:7:8"] {
        let a = parse(s).unwrap();
        assert_eq!(parse(&a.to_string()).unwrap(), a);
    }
}

/*************************************************************
                        Netmask options
**************************************************************/

#[test]
fn force_synthesizes_family_width() {
    assert_eq!(render("203.0.113.7", FORCE), "203.0.113.7/32");
    assert_eq!(render("2001:db8::7", FORCE), "2001:db8::7/128");
}

#[test]
fn suppress_drops_netmask() {
    for s in ["10.0.0.0/8", "2001:db8::/32", "::/0", "10.0.0.1"] {
        assert!(!render(s, SUPPRESS).contains('/'));
        assert!(!render(s, SUPPRESS | FORCE).contains('/'));
        assert!(!render(s, SUPPRESS | FORCE | EXPANDED).contains('/'));
    }
}

/*************************************************************
                          Expanded
**************************************************************/

#[test]
fn expanded_ipv6_is_fixed_width() {
    let s = render("2001:db8::1/48", EXPANDED | SUPPRESS);
    assert_eq!(s, "2001:0db8:0000:0000:0000:0000:0000:0001");
    assert_eq!(s.len(), 39);
}

#[test]
fn expanded_leaves_ipv4_alone() {
    assert_eq!(render("192.0.2.1", EXPANDED), "192.0.2.1");
    assert_eq!(render("192.0.2.1", EXPANDED | FORCE), "192.0.2.1/32");
}
