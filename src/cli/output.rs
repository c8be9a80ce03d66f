//! Terminal output helpers shared by the commands

use colored::*;

/// Display a section header
pub fn section_header(title: &str) {
    println!("\n{}", title.bold().cyan());
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Display an empty/none indicator
pub fn empty(message: &str) {
    println!("{} {}", "◌".dimmed(), message);
}

/// One tree section: a title and its items, or a dimmed "none"
pub fn tree_section(title: &str, items: &[String], is_last: bool) {
    let prefix = if is_last { "└─" } else { "├─" };
    println!("{} {} ({})", prefix.dimmed(), title.bold(), items.len());

    let indent = if is_last { "   " } else { "│  " };
    if items.is_empty() {
        println!("{}{} {}", indent, "└─".dimmed(), "none".dimmed());
        return;
    }
    for (i, item) in items.iter().enumerate() {
        let item_prefix = if i == items.len() - 1 { "└─" } else { "├─" };
        println!("{}{} {}", indent, item_prefix.dimmed(), item);
    }
}
