use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the password bytes.
///
/// Unsalted and single-round. A salted, memory-hard KDF (argon2, bcrypt) is
/// the better choice for new deployments; existing rows depend on this exact
/// encoding, so changing it invalidates every stored credential.
pub fn digest_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(
            digest_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            digest_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn deterministic_and_fixed_length() {
        let a = digest_password("pw123");
        assert_eq!(a, digest_password("pw123"));
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn distinct_inputs_distinct_digests() {
        assert_ne!(digest_password("pw123"), digest_password("pw124"));
        assert_ne!(digest_password("pw123"), digest_password("pw123 "));
    }
}
