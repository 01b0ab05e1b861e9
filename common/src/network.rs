//! # Network Addresses
//!
//! Text goes in through [`parse`], comes back out through
//! [`IpAddress::format`], and subnets are checked with [`IpAddress::contains`].
//!
//! ```
//! use cidrkit_common::network::{parse, PresentationOptions};
//!
//! let subnet = parse("192.168.1.0/24").unwrap();
//! let host = parse("192.168.1.42").unwrap();
//!
//! assert!(subnet.contains(&host));
//! assert_eq!(host.format(PresentationOptions::FORCE_NETMASK), "192.168.1.42/32");
//! ```

pub mod address;
pub mod format;
pub mod parse;
pub mod subnet;

pub use address::{Family, IpAddress};
pub use format::{Formatted, PresentationOptions};
pub use parse::{ParseError, parse};
