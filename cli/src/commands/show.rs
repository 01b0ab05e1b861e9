use cidrkit_common::{config::Config, network::IpAddress};
use tracing::debug;

use crate::terminal::{network_fmt, print};

pub fn show(addresses: &[IpAddress], cfg: &Config) -> anyhow::Result<()> {
    debug!("Rendering {} addresses with options {:?}", addresses.len(), cfg.options);

    for (idx, address) in addresses.iter().enumerate() {
        if cfg.q_level > 0 {
            print::print(&address.format(cfg.options));
            continue;
        }

        let rendered = network_fmt::colored_address(address, cfg.options);
        print::tree_head(idx, &rendered.to_string());
        print::as_tree_one_level(&network_fmt::to_key_value_pair(address, cfg.options));
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
