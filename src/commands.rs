use clap::Parser;
use std::{io, path::PathBuf};

use crate::constants::*;
use crate::derive::MnemonicKeyGenerator;
use crate::ops::*;
use crate::output::FileSink;
use crate::prompt::*;
use crate::types::*;

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = env!("CARGO_PKG_DESCRIPTION"), version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[arg(short, long, value_parser = parse_count_arg, help = "Number of wallets to generate (prompted if omitted)")]
    pub count: Option<u64>,
    #[arg(short, long, value_parser = parse_selection_arg, help = "Output codes, e.g. 1,3,5 (0 exits; prompted if omitted)")]
    pub select: Option<Selection>,
    #[arg(short, long, default_value = DEFAULT_OUT_DIR, help = "Directory the wallet files are written to")]
    pub out_dir: PathBuf,
    #[arg(short, long, default_value_t = DEFAULT_WORDS, value_parser = parse_words_arg, help = "Number of mnemonic words (12 or 24)")]
    pub words: u32,
    #[arg(long, help = "Keep existing file contents instead of truncating them")]
    pub append: bool,
    #[arg(long, help = "Do not print the banner")]
    pub no_banner: bool,
}

fn parse_count_arg(raw: &str) -> Result<u64, String> {
    parse_count(raw).map_err(|e| e.to_string())
}

fn parse_words_arg(raw: &str) -> Result<u32, String> {
    match raw.trim() {
        "12" => Ok(12),
        "24" => Ok(24),
        _ => Err("Word count must be 12 or 24".to_string()),
    }
}

fn parse_selection_arg(raw: &str) -> Result<Selection, String> {
    parse_selection(raw).map_err(|e| e.to_string())
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        let policy = if self.append { TruncatePolicy::Append } else { TruncatePolicy::Truncate };
        RunOptions {
            count: self.count,
            selection: self.select.clone(),
            config: OutputConfig::new(&self.out_dir, policy),
            banner: !self.no_banner,
        }
    }
}

pub fn execute(cli: Cli) -> Result<RunOutcome, Box<dyn std::error::Error>> {
    let mut generator = MnemonicKeyGenerator::new(cli.words)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_generator(cli.run_options(), &mut generator, FileSink, &mut input, &mut output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_interactive() {
        let cli = Cli::try_parse_from(["evm-wallet-gen"]).unwrap();
        let options = cli.run_options();
        assert_eq!(options.count, None);
        assert_eq!(options.selection, None);
        assert_eq!(options.config.policy, TruncatePolicy::Truncate);
        assert_eq!(cli.words, 12);
        assert!(options.banner);
    }

    #[test]
    fn flags_fill_in_answers() {
        let cli = Cli::try_parse_from(["evm-wallet-gen", "-c", "3", "-s", "1,4", "-o", "out", "-w", "24", "--append", "--no-banner"]).unwrap();
        let options = cli.run_options();
        assert_eq!(options.count, Some(3));
        assert_eq!(options.selection, Some(Selection::Export([OutputKind::Addresses, OutputKind::Details].into_iter().collect())));
        assert_eq!(options.config.path_for(OutputKind::Addresses), PathBuf::from("out/wallet_addresses.txt"));
        assert_eq!(options.config.policy, TruncatePolicy::Append);
        assert_eq!(cli.words, 24);
        assert!(!options.banner);
    }

    #[test]
    fn invalid_flags_are_usage_errors() {
        assert!(Cli::try_parse_from(["evm-wallet-gen", "-c", "x"]).is_err());
        assert!(Cli::try_parse_from(["evm-wallet-gen", "-s", "9"]).is_err());
        assert!(Cli::try_parse_from(["evm-wallet-gen", "-w", "18"]).is_err());
    }

    #[test]
    fn abort_code_parses_as_flag() {
        let cli = Cli::try_parse_from(["evm-wallet-gen", "-s", "0,4"]).unwrap();
        assert_eq!(cli.select, Some(Selection::Abort));
    }
}
