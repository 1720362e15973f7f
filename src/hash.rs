/// Multiplier of the polynomial string hash.
pub const HASH_MULTIPLIER: i32 = 31;

/// Polynomial hash over the UTF-16 code units of `key`.
///
/// Computes `h = h * 31 + unit` for every unit in order, starting from 0,
/// in 32-bit signed wrapping arithmetic. The result is reproducible across
/// platforms and equals Java's `String::hashCode` for the same text.
pub fn string_hash(key: &str) -> i32 {
    key.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(i32::from(unit))
    })
}

/// Bucket that `key` belongs to in a table of `num_buckets` buckets.
///
/// Uses the Euclidean remainder, so a negative hash still lands in
/// `0..num_buckets`.
pub fn bucket_index(key: &str, num_buckets: usize) -> usize {
    debug_assert!(num_buckets > 0, "bucket count must be non-zero");
    i64::from(string_hash(key)).rem_euclid(num_buckets as i64) as usize
}
