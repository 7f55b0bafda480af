use sha2::{Digest, Sha256};

/// SHA-256 hex digest of a password. The configured password is only
/// held in memory in this form.
pub fn digest_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Byte equality that inspects every byte regardless of where the first
/// mismatch is. Inputs of different length are unequal.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
