pub const ADDRESSES_FILE: &str = "wallet_addresses.txt";
pub const PRIVATE_KEYS_FILE: &str = "wallet_private_keys.txt";
pub const MNEMONIC_FILE: &str = "wallet_mnemonic.txt";
pub const DETAILS_FILE: &str = "wallet_details.txt";
pub const SERIAL_ADDRESSES_FILE: &str = "wallet_serial_addresses.txt";
pub const SERIAL_PRIVATE_KEYS_FILE: &str = "wallet_serial_private_keys.txt";
pub const SERIAL_MNEMONIC_FILE: &str = "wallet_serial_mnemonic.txt";

pub const DEFAULT_OUT_DIR: &str = ".";
pub const DEFAULT_WORDS: u32 = 12;
pub const ETH_DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

pub const ABORT_CODE: char = '0';
pub const MISSING_MNEMONIC: &str = "N/A";

pub const PREVIEW_PREFIX_LEN: usize = 10;
pub const PREVIEW_ROWS: usize = 20;
