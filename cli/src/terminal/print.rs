use std::cell::Cell;

use crate::terminal::{colors, logging::PRINT_TARGET};
use colored::*;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    static KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let dashes: usize = TOTAL_WIDTH.saturating_sub(title.chars().count());
    let left: String = "─".repeat(dashes / 2);
    let right: String = "─".repeat(dashes - dashes / 2);

    print(&format!("{}{}{}", left.bright_black(), title.bright_green(), right.bright_black()));
}

/// Sets the column `aligned_line` pads keys to.
pub fn set_key_width(width: usize) {
    KEY_WIDTH.set(width);
}

/// `key....: value`, with the dots filling up to the width given to `set_key_width`.
pub fn aligned(key: &str, value: &ColoredString) -> String {
    let dots: String = ".".repeat((KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    )
}

pub fn aligned_line(key: &str, value: &ColoredString) {
    print(&aligned(key, value));
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    print(&format!("{} {}", idx_str.color(colors::SEPARATOR), name));
}

/// One line per pair, keys padded to seven columns, drawn as a single tree level.
pub fn tree_lines(key_value_pair: &[(String, ColoredString)]) -> Vec<String> {
    key_value_pair
        .iter()
        .enumerate()
        .map(|(i, (key, value))| {
            let branch: ColoredString = if i + 1 < key_value_pair.len() {
                "├─".bright_black()
            } else {
                "└─".bright_black()
            };
            let dots: String = ".".repeat(7usize.saturating_sub(key.len()));
            format!(
                " {} {}{}{} {}",
                branch,
                key.color(colors::TEXT_DEFAULT),
                dots.color(colors::SEPARATOR),
                ":".color(colors::SEPARATOR),
                value
            )
        })
        .collect()
}

pub fn as_tree_one_level(key_value_pair: &[(String, ColoredString)]) {
    for line in tree_lines(key_value_pair) {
        print(&line);
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
