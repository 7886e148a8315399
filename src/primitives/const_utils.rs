//! Const evaluation utilities

/// FNV-1a 64-bit Hash for strings (const fn)
pub const fn fnv1a_64_str(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash: u64 = 0xcbf29ce484222325;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x100000001b3);
        i += 1;
    }
    hash
}

/// Extract nibble N (0-15) from 64-bit FNV-1a hash
/// Used for HashStream16 generation from module paths
pub const fn hash_nibble(s: &str, n: u8) -> u8 {
    let hash = fnv1a_64_str(s);
    ((hash >> (n * 4)) & 0xF) as u8
}

/// Byte of `s` stored at identity position `i` (0..64).
///
/// Up to 64 bytes are kept verbatim and padded with 0. Longer strings keep
/// the first 32 bytes, 16 from the middle and the last 16.
pub const fn sample_byte(s: &str, i: usize) -> u8 {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let idx = if len <= 64 {
        i
    } else if i < 32 {
        i
    } else if i < 48 {
        (len - 16) / 2 + (i - 32)
    } else {
        len - 16 + (i - 48)
    };
    if idx < len { bytes[idx] } else { 0 }
}

/// Nibble `n` (0..128) of the sampled identity string, high nibble first.
pub const fn identity_nibble(s: &str, n: usize) -> u8 {
    let byte = sample_byte(s, n / 2);
    if n % 2 == 0 { byte >> 4 } else { byte & 0xF }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_nibbles_rebuild_hash() {
        let s = "crate::model::Base";
        let mut rebuilt = 0u64;
        let mut n = 0;
        while n < 16 {
            rebuilt |= (hash_nibble(s, n) as u64) << (n * 4);
            n += 1;
        }
        assert_eq!(rebuilt, fnv1a_64_str(s));
        assert_ne!(fnv1a_64_str("a::S"), fnv1a_64_str("b::S"));
    }

    #[test]
    fn test_identity_nibbles_spell_short_strings() {
        let s = "a::S";
        assert_eq!(identity_nibble(s, 0), 0x6);
        assert_eq!(identity_nibble(s, 1), 0x1);
        assert_eq!(identity_nibble(s, 7), 0x3);
        assert_eq!(identity_nibble(s, 8), 0);
        assert_eq!(identity_nibble(s, 127), 0);
    }

    #[test]
    fn test_long_strings_keep_head_and_tail() {
        let s = "0123456789abcdef0123456789abcdef-middle-part-of-a-long-identity-string@tests/x.rs:10:1";
        assert!(s.len() > 64);
        assert_eq!(sample_byte(s, 0), b'0');
        assert_eq!(sample_byte(s, 31), b'f');
        assert_eq!(sample_byte(s, 63), b'1');
        assert_eq!(sample_byte(s, 48), s.as_bytes()[s.len() - 16]);
    }
}
