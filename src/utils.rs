use colored::*;
use log::Level;
use std::io::{self, Write};

use crate::types::*;

pub fn severity_tag(level: Level) -> ColoredString {
    match level {
        Level::Error => "[ERROR]".bright_red(),
        Level::Warn => "[WARNING]".bright_yellow(),
        Level::Info => "[INFO]".bright_blue(),
        Level::Debug | Level::Trace => "[DEBUG]".dimmed(),
    }
}

pub fn success_tag() -> ColoredString {
    "[SUCCESS]".bright_green()
}

/// Routes `log` records to stderr with the same tags the prompts use.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{} {}", severity_tag(record.level()), record.args()))
        .init();
}

pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=====================================".bright_magenta())?;
    writeln!(out, "{}", "           EVM  WALLETS".bright_magenta().bold())?;
    writeln!(out, "{}", "=====================================".bright_magenta())?;
    writeln!(out, "{}", "Supports all EVM-compatible blockchains".bright_cyan())?;
    writeln!(out, "{}", "Works with MetaMask, Trust Wallet, OKX Wallet, and more\n".bright_yellow())?;
    Ok(())
}

pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "\nSelect the wallet data you want to export:\n".bright_magenta())?;
    writeln!(out, "{}", "0. Exit".on_bright_red().bold())?;
    for kind in OutputKind::ALL {
        let line = format!("{}. {}", kind.code(), kind.label());
        match kind {
            OutputKind::Details => writeln!(out, "{} {}", line.bright_green(), "(Recommended)".bright_green())?,
            OutputKind::Addresses | OutputKind::PrivateKeys | OutputKind::Mnemonic => writeln!(out, "{}", line.bright_blue())?,
            _ => writeln!(out, "{}", line.bright_cyan())?,
        }
    }
    writeln!(out)?;
    Ok(())
}

pub fn print_summary<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    writeln!(out, "{}", "\nWallet Summary:".bright_magenta())?;
    let index_width = summary.rows.iter().map(|r| r.index.to_string().len()).max().unwrap_or(1).max(1);
    let addr_width = summary.rows.iter().map(|r| r.address.len()).max().unwrap_or(0).max("Wallet Address".len());
    let key_width = summary.rows.iter().map(|r| r.private_key.len()).max().unwrap_or(0).max("Private Key".len());
    let rule = format!("+-{}-+-{}-+-{}-+", "-".repeat(index_width), "-".repeat(addr_width), "-".repeat(key_width));
    writeln!(out, "{}", rule)?;
    writeln!(out, "| {:<index_width$} | {:<addr_width$} | {:<key_width$} |", "#", "Wallet Address", "Private Key")?;
    writeln!(out, "{}", rule)?;
    for row in &summary.rows {
        writeln!(out, "| {:>index_width$} | {:<addr_width$} | {:<key_width$} |", row.index, row.address, row.private_key)?;
    }
    writeln!(out, "{}", rule)?;
    if summary.hidden_rows() > 0 {
        writeln!(out, "... and {} more", summary.hidden_rows())?;
    }
    if !summary.files_written.is_empty() {
        writeln!(out, "{}", "\nFiles Created:".bright_green())?;
        for file in &summary.files_written {
            writeln!(out, "{}", format!("  {}", file.display()).green())?;
        }
    }
    if summary.failed_writes > 0 {
        writeln!(out, "{} {} write(s) failed; see errors above.", severity_tag(Level::Warn), summary.failed_writes)?;
    }
    writeln!(out, "\n{} Wallets generated successfully!", success_tag())?;
    writeln!(out, "{}", format!("Total wallets: {}", summary.total).bright_blue())?;
    Ok(())
}
