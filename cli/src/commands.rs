pub mod contains;
pub mod show;

use clap::{ArgAction, Args, Parser, Subcommand};
use cidrkit_common::network::{IpAddress, PresentationOptions};

#[derive(Parser)]
#[command(name = "cidrkit")]
#[command(about = "Parse, print and compare IP addresses and CIDR subnets.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print bare results only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug output (-vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse addresses and print them in canonical form
    #[command(alias = "s")]
    Show {
        #[arg(required = true)]
        addresses: Vec<IpAddress>,
        #[command(flatten)]
        presentation: PresentationArgs,
    },
    /// Check whether addresses fall inside a subnet
    #[command(alias = "c")]
    Contains {
        subnet: IpAddress,
        #[arg(required = true)]
        addresses: Vec<IpAddress>,
        #[command(flatten)]
        presentation: PresentationArgs,
    },
}

#[derive(Args, Debug, Default, Clone, Copy)]
pub struct PresentationArgs {
    /// Always print a netmask (/32 or /128 when the address has none)
    #[arg(long)]
    pub force_netmask: bool,

    /// Never print a netmask, takes precedence over --force-netmask
    #[arg(long)]
    pub suppress_netmask: bool,

    /// Print IPv6 addresses in full, without :: compression
    #[arg(long)]
    pub expanded: bool,
}

impl PresentationArgs {
    pub fn options(&self) -> PresentationOptions {
        let mut options = PresentationOptions::STANDARD;
        if self.force_netmask {
            options |= PresentationOptions::FORCE_NETMASK;
        }
        if self.suppress_netmask {
            options |= PresentationOptions::SUPPRESS_NETMASK;
        }
        if self.expanded {
            options |= PresentationOptions::EXPANDED;
        }
        options
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
