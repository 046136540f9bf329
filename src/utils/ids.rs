//! Resource id generation

use rand::Rng;

// Custom epoch: 2024-01-01 00:00:00 UTC
const EPOCH_MS: i64 = 1_704_067_200_000;

/// Generate a snowflake-style `i64` for use as a resource id.
///
/// Layout (53 bits, fits in JavaScript's `Number.MAX_SAFE_INTEGER`):
///   - 41 bits: milliseconds since the custom epoch (~69 years)
///   - 12 bits: random (4096 values per millisecond)
pub fn snowflake_id() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_positive_and_js_safe() {
        let id = snowflake_id();
        assert!(id > 0);
        assert!(id <= 0x1F_FFFF_FFFF_FFFF); // 2^53 - 1
    }

    #[test]
    fn ids_are_time_ordered_across_milliseconds() {
        let a = snowflake_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = snowflake_id();
        assert!(b > a);
    }
}
