use bip32::{DerivationPath, XPrv};
use bip39::{Language, Mnemonic, MnemonicType, Seed};
use zeroize::Zeroizing;

use crate::constants::*;
use crate::crypto::*;
use crate::types::*;

type GenerateResult = Result<GeneratedKey, Box<dyn std::error::Error>>;

/// Source of fresh key material, one call per wallet.
pub trait KeyGenerator {
    fn generate(&mut self) -> GenerateResult;
}

/// Random BIP-39 mnemonic, first account on the standard Ethereum path.
pub struct MnemonicKeyGenerator {
    word_count: MnemonicType,
    path: DerivationPath,
}

impl MnemonicKeyGenerator {
    pub fn new(words: u32) -> Result<Self, Box<dyn std::error::Error>> {
        let word_count = match words {
            12 => MnemonicType::Words12,
            24 => MnemonicType::Words24,
            _ => return Err("Word count must be 12 or 24".into()),
        };
        Ok(Self { word_count, path: ETH_DERIVATION_PATH.parse()? })
    }
}

impl KeyGenerator for MnemonicKeyGenerator {
    fn generate(&mut self) -> GenerateResult {
        let mnemonic = Mnemonic::new(self.word_count, Language::English);
        derive_from_mnemonic(&mnemonic, &self.path)
    }
}

pub fn derive_from_phrase(phrase: &str) -> GenerateResult {
    let mnemonic = Mnemonic::from_phrase(phrase.trim(), Language::English).map_err(|_| "Invalid mnemonic phrase.")?;
    derive_from_mnemonic(&mnemonic, &ETH_DERIVATION_PATH.parse()?)
}

fn derive_from_mnemonic(mnemonic: &Mnemonic, path: &DerivationPath) -> GenerateResult {
    let seed = Seed::new(mnemonic, "");
    let xprv = XPrv::derive_from_path(seed.as_bytes(), path)?;
    let secret_bytes = Zeroizing::new(xprv.to_bytes());
    let public_bytes = xprv.private_key().verifying_key().to_encoded_point(false);
    let address = address_from_public_key(public_bytes.as_bytes())?;
    Ok(GeneratedKey {
        address: to_checksum_address(&address),
        private_key: Zeroizing::new(format!("0x{}", hex::encode(*secret_bytes))),
        mnemonic: Some(Zeroizing::new(mnemonic.phrase().to_string())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS_LEN: usize = 42;
    const PRIVATE_KEY_LEN: usize = 66;
    const HARDHAT_PHRASE: &str = "test test test test test test test test test test test junk";

    #[test]
    fn known_phrase_derives_known_account() {
        let key = derive_from_phrase(HARDHAT_PHRASE).unwrap();
        assert_eq!(key.address, "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        assert_eq!(&*key.private_key, "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80");
        assert_eq!(key.mnemonic.as_deref().map(String::as_str), Some(HARDHAT_PHRASE));
    }

    #[test]
    fn rejects_garbage_phrase() {
        assert!(derive_from_phrase("not a real mnemonic").is_err());
    }

    #[test]
    fn rejects_unsupported_word_count() {
        assert!(MnemonicKeyGenerator::new(15).is_err());
    }

    #[test]
    fn random_keys_are_well_formed_and_distinct() {
        let mut generator = MnemonicKeyGenerator::new(12).unwrap();
        let a = generator.generate().unwrap();
        let b = generator.generate().unwrap();
        for key in [&a, &b] {
            assert_eq!(key.address.len(), ADDRESS_LEN);
            assert!(is_checksum_valid(&key.address));
            assert_eq!(key.private_key.len(), PRIVATE_KEY_LEN);
            assert!(key.private_key[2..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
            assert_eq!(key.mnemonic.as_ref().unwrap().split_whitespace().count(), 12);
        }
        assert_ne!(a.address, b.address);
        assert_ne!(*a.private_key, *b.private_key);
        assert_ne!(a.mnemonic.as_deref(), b.mnemonic.as_deref());
    }

    #[test]
    fn twenty_four_word_mnemonics() {
        let key = MnemonicKeyGenerator::new(24).unwrap().generate().unwrap();
        assert_eq!(key.mnemonic.unwrap().split_whitespace().count(), 24);
    }
}
