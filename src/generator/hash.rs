/// Polynomial rolling hash of a location name.
///
/// `hash = hash * 31 + unit` over the UTF-16 code units of `s`, wrapping as a
/// 32-bit signed integer at every step, then taking the absolute value.
pub fn seed_hash(s: &str) -> u32 {
    let hash = s.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    });

    hash.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_inputs() {
        assert_eq!(seed_hash(""), 0);
        assert_eq!(seed_hash("a"), 97);
        assert_eq!(seed_hash("ab"), 97 * 31 + 98);
    }

    #[test]
    fn matches_known_32_bit_values() {
        assert_eq!(seed_hash("hello"), 99_162_322);
        // Wraps to i32::MIN, whose absolute value does not fit in an i32.
        assert_eq!(seed_hash("polygenelubricants"), 2_147_483_648);
    }

    #[test]
    fn is_stable() {
        let name = "Connaught Place, Delhi";

        assert_eq!(seed_hash(name), seed_hash(name));
        assert_ne!(seed_hash(name), seed_hash("India Gate, Delhi"));
    }

    #[test]
    fn hashes_utf16_units() {
        // U+1F600 is a surrogate pair: 0xD83D, 0xDE00.
        assert_eq!(seed_hash("\u{1F600}"), 0xD83D * 31 + 0xDE00);
    }
}
