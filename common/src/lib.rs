//! # cidrkit common
//!
//! Value types for IPv4/IPv6 addresses with optional CIDR netmasks.
//!
//! * **[`network`]**: parsing, canonical rendering and subnet containment.
//! * **[`config`]**: settings handed from the command line to the command handlers.

pub mod config;
pub mod network;
