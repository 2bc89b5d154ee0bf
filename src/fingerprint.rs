use std::hash::{Hash, Hasher};

/// Feeds a value's `Hash` implementation into BLAKE3.
struct Blake3Hasher(blake3::Hasher);

impl Hasher for Blake3Hasher {
    fn write(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }

    fn finish(&self) -> u64 {
        let digest = self.0.finalize();
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest.as_bytes()[..8]);
        u64::from_le_bytes(head)
    }
}

/// Derives a stable string fingerprint from a value
///
/// The fingerprint is the lowercase hex BLAKE3 digest of whatever the value's
/// `Hash` implementation writes. Values that compare equal hash identically, so
/// they share a fingerprint for the lifetime of the process.
///
/// # Examples
///
/// ```
/// use sovran_collections::fingerprint;
///
/// assert_eq!(fingerprint("apple"), fingerprint(&"apple".to_string()));
/// assert_ne!(fingerprint("apple"), fingerprint("pear"));
/// assert_eq!(fingerprint(&42u32).len(), 64);
/// ```
pub fn fingerprint<T: Hash + ?Sized>(value: &T) -> String {
    let mut hasher = Blake3Hasher(blake3::Hasher::new());
    value.hash(&mut hasher);
    hasher.0.finalize().to_hex().to_string()
}
