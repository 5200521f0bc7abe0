use tiny_keccak::{Hasher, Keccak};

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut hash = [0u8; 32];
    hasher.finalize(&mut hash);
    hash
}

/// Address for an uncompressed SEC1 public key (`0x04 || X || Y`).
pub fn address_from_public_key(uncompressed: &[u8]) -> Result<[u8; 20], Box<dyn std::error::Error>> {
    if uncompressed.len() != 65 || uncompressed[0] != 0x04 {
        return Err("Expected a 65-byte uncompressed public key".into());
    }
    let hash = keccak256(&uncompressed[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Ok(address)
}

/// EIP-55 mixed-case encoding of a 20-byte address.
pub fn to_checksum_address(address: &[u8; 20]) -> String {
    let lower = hex::encode(address);
    let hash = keccak256(lower.as_bytes());
    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 { hash[i / 2] >> 4 } else { hash[i / 2] & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub fn is_checksum_valid(address: &str) -> bool {
    let Some(body) = address.strip_prefix("0x") else {
        return false;
    };
    let Ok(bytes) = hex::decode(body) else {
        return false;
    };
    let Ok(raw) = <[u8; 20]>::try_from(bytes.as_slice()) else {
        return false;
    };
    to_checksum_address(&raw) == address
}
