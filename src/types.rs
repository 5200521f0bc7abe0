use std::{collections::BTreeSet, path::{Path, PathBuf}};
use zeroize::Zeroizing;

use crate::constants::*;

/// One export category a user can pick from the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputKind {
    Addresses,
    PrivateKeys,
    Mnemonic,
    Details,
    SerialAddresses,
    SerialPrivateKeys,
    SerialMnemonic,
}

impl OutputKind {
    pub const ALL: [OutputKind; 7] = [
        OutputKind::Addresses,
        OutputKind::PrivateKeys,
        OutputKind::Mnemonic,
        OutputKind::Details,
        OutputKind::SerialAddresses,
        OutputKind::SerialPrivateKeys,
        OutputKind::SerialMnemonic,
    ];

    /// Menu code to kind. `0` is the abort code and is handled by the caller.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(OutputKind::Addresses),
            2 => Some(OutputKind::PrivateKeys),
            3 => Some(OutputKind::Mnemonic),
            4 => Some(OutputKind::Details),
            5 => Some(OutputKind::SerialAddresses),
            6 => Some(OutputKind::SerialPrivateKeys),
            7 => Some(OutputKind::SerialMnemonic),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            OutputKind::Addresses => 1,
            OutputKind::PrivateKeys => 2,
            OutputKind::Mnemonic => 3,
            OutputKind::Details => 4,
            OutputKind::SerialAddresses => 5,
            OutputKind::SerialPrivateKeys => 6,
            OutputKind::SerialMnemonic => 7,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            OutputKind::Addresses => ADDRESSES_FILE,
            OutputKind::PrivateKeys => PRIVATE_KEYS_FILE,
            OutputKind::Mnemonic => MNEMONIC_FILE,
            OutputKind::Details => DETAILS_FILE,
            OutputKind::SerialAddresses => SERIAL_ADDRESSES_FILE,
            OutputKind::SerialPrivateKeys => SERIAL_PRIVATE_KEYS_FILE,
            OutputKind::SerialMnemonic => SERIAL_MNEMONIC_FILE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputKind::Addresses => "Wallet Addresses Only",
            OutputKind::PrivateKeys => "Wallet Private Keys Only",
            OutputKind::Mnemonic => "Wallet Mnemonic Only",
            OutputKind::Details => "All Wallet Details (With Serial Number)",
            OutputKind::SerialAddresses => "All Wallet Addresses (With Serial Number)",
            OutputKind::SerialPrivateKeys => "All Wallet Private Keys (With Serial Number)",
            OutputKind::SerialMnemonic => "All Wallet Mnemonics (With Serial Number)",
        }
    }
}

/// Kinds chosen for this run. Duplicate codes collapse into one entry.
pub type OutputSelection = BTreeSet<OutputKind>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Abort,
    Export(OutputSelection),
}

/// What a [`crate::derive::KeyGenerator`] hands back for one wallet.
pub struct GeneratedKey {
    pub address: String,
    pub private_key: Zeroizing<String>,
    pub mnemonic: Option<Zeroizing<String>>,
}

pub struct WalletRecord {
    pub index: u64,
    pub address: String,
    pub private_key: Zeroizing<String>,
    pub mnemonic: Option<Zeroizing<String>>,
}

impl WalletRecord {
    pub fn new(index: u64, key: GeneratedKey) -> Self {
        Self { index, address: key.address, private_key: key.private_key, mnemonic: key.mnemonic }
    }

    pub fn mnemonic_or_na(&self) -> &str {
        self.mnemonic.as_deref().map(String::as_str).unwrap_or(MISSING_MNEMONIC)
    }

    /// Newline-terminated payload appended to the file of `kind`.
    pub fn render(&self, kind: OutputKind) -> Zeroizing<String> {
        let i = self.index;
        let text = match kind {
            OutputKind::Addresses => format!("{}\n", self.address),
            OutputKind::PrivateKeys => format!("{}\n", &*self.private_key),
            OutputKind::Mnemonic => format!("{}\n", self.mnemonic_or_na()),
            OutputKind::Details => format!(
                "{i}. Wallet {i}\nWallet Address: {}\nMnemonic Phrase: {}\nPrivate Key: {}\n\n",
                self.address,
                self.mnemonic_or_na(),
                &*self.private_key
            ),
            OutputKind::SerialAddresses => format!("{i}. {}\n", self.address),
            OutputKind::SerialPrivateKeys => format!("{i}. {}\n", &*self.private_key),
            OutputKind::SerialMnemonic => format!("{i}. {}\n", self.mnemonic_or_na()),
        };
        Zeroizing::new(text)
    }

    pub fn preview(&self) -> PreviewRow {
        PreviewRow { index: self.index, address: redact(&self.address), private_key: redact(&self.private_key) }
    }
}

fn redact(value: &str) -> String {
    let prefix: String = value.chars().take(PREVIEW_PREFIX_LEN).collect();
    format!("{}...", prefix)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncatePolicy {
    /// Empty every selected file once input is collected.
    Truncate,
    /// Keep whatever earlier runs left behind.
    Append,
}

/// Immutable file layout for a run.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    dir: PathBuf,
    pub policy: TruncatePolicy,
}

impl OutputConfig {
    pub fn new(dir: impl Into<PathBuf>, policy: TruncatePolicy) -> Self {
        Self { dir: dir.into(), policy }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, kind: OutputKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUT_DIR, TruncatePolicy::Truncate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub index: u64,
    pub address: String,
    pub private_key: String,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub total: u64,
    pub rows: Vec<PreviewRow>,
    pub files_written: Vec<PathBuf>,
    pub failed_writes: u64,
}

impl RunSummary {
    pub fn hidden_rows(&self) -> u64 {
        self.total.saturating_sub(self.rows.len() as u64)
    }
}
