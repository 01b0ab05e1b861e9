use cidrkit_common::{config::Config, network::IpAddress};
use colored::*;
use tracing::{debug, warn};

use crate::terminal::{colors, print};

pub fn contains(subnet: &IpAddress, addresses: &[IpAddress], cfg: &Config) -> anyhow::Result<()> {
    if !subnet.has_netmask() {
        warn!("{subnet} has no netmask, only the exact address will match");
    }

    let rendered: Vec<String> = addresses.iter().map(|a| a.format(cfg.options)).collect();
    print::set_key_width(rendered.iter().map(String::len).max().unwrap_or(0));

    let mut outside: usize = 0;
    for (address, text) in addresses.iter().zip(&rendered) {
        if address.family() != subnet.family() {
            debug!("{address} is {}, {subnet} is {}", address.family(), subnet.family());
        }

        let inside: bool = subnet.contains(address);
        if !inside {
            outside += 1;
        }

        let verdict: ColoredString = if inside {
            "inside".color(colors::INSIDE)
        } else {
            "outside".color(colors::OUTSIDE)
        };

        if cfg.q_level > 0 {
            print::print(&format!("{text} {verdict}"));
        } else {
            print::aligned_line(text, &verdict);
        }
    }

    if outside > 0 {
        anyhow::bail!(
            "{outside} of {} addresses are outside {}",
            addresses.len(),
            subnet.format(cfg.options)
        );
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
