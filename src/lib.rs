//! # ewg
//!
//! Bulk generator for throwaway EVM wallets.
//!
//! Each wallet is a fresh BIP-39 mnemonic and the first account on the
//! standard Ethereum path (`m/44'/60'/0'/0/0`), with an EIP-55 checksummed
//! address. The selected representations are appended to plain-text files.
//!
//! ## Usage
//!
//! ```bash
//! # Fully interactive
//! cargo run
//!
//! # Non-interactive: 10 wallets, details + serial addresses, into ./out
//! cargo run -- -c 10 -s 4,5 -o out
//! ```
//!
//! **Flags:**
//! - `-c, --count <N>` (Optional): Wallets to generate (prompted if omitted)
//! - `-s, --select <CODES>` (Optional): Comma-separated output codes (prompted if omitted)
//! - `-o, --out-dir <DIR>` (Optional): Output directory (default = `.`)
//! - `-w, --words <12|24>` (Optional): Mnemonic length (default = `12`)
//! - `--append` (Optional): Keep existing file contents instead of truncating
//! - `--no-banner` (Optional): Skip the banner
//!
//! ## Output codes
//!
//! ```text
//! 0  exit without generating anything
//! 1  wallet_addresses.txt            <address>
//! 2  wallet_private_keys.txt         <private key>
//! 3  wallet_mnemonic.txt             <mnemonic>
//! 4  wallet_details.txt              numbered block with all three
//! 5  wallet_serial_addresses.txt     <n>. <address>
//! 6  wallet_serial_private_keys.txt  <n>. <private key>
//! 7  wallet_serial_mnemonic.txt      <n>. <mnemonic>
//! ```
//!
//! Selected files are truncated once input is collected, unless `--append` is
//! given. Unselected files are never touched.
//!
//! **Warning:** the files are plain text. Anyone who can read them controls
//! the funds.

pub mod commands;
pub mod constants;
pub mod crypto;
pub mod derive;
pub mod error;
pub mod ops;
pub mod output;
pub mod prompt;
pub mod types;
pub mod utils;
pub mod wallet;
