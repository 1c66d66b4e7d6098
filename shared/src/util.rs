/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowflake_ids_are_positive_and_monotonic_per_ms() {
        let a = snowflake_id();
        assert!(a > 0);
        // Stays inside the JS safe-integer range
        assert!(a < (1i64 << 53));
    }

    #[test]
    fn snowflake_ids_rarely_collide() {
        let ids: std::collections::HashSet<i64> = (0..64).map(|_| snowflake_id()).collect();
        // 64 draws of 4096 random low bits within the same ms may collide,
        // but most must be distinct
        assert!(ids.len() > 32);
    }
}
