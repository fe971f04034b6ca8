//! Fixed-point reward arithmetic.
//!
//! `amount * elapsed * reward_rate` can exceed `u128` (u64 amount, i64 seconds,
//! u128 rate), so the product is formed in a 256-bit integer and descaled once.
//! 64 + 64 + 128 bits always fit in 256, so the product itself cannot overflow.

use uint::construct_uint;

use crate::constants::SCALE;

construct_uint! {
    /// 256-bit unsigned integer used for the intermediate accrual product.
    pub struct U256(4);
}

/// Linear accrual: `amount * elapsed * reward_rate / SCALE`, truncated.
///
/// Saturates at `u64::MAX`; payouts are clamped to the `u64` vault balance.
pub fn accrued_reward(amount: u64, elapsed: u64, reward_rate: u128) -> u64 {
    if amount == 0 || elapsed == 0 || reward_rate == 0 {
        return 0;
    }

    let product = U256::from(amount)
        .saturating_mul(U256::from(elapsed))
        .saturating_mul(U256::from(reward_rate));
    let reward = product / U256::from(SCALE);

    if reward > U256::from(u64::MAX) {
        u64::MAX
    } else {
        reward.low_u64()
    }
}

/// Seconds in `[from, now]`; a clock reading behind `from` counts as zero.
pub fn elapsed_seconds(from: i64, now: i64) -> u64 {
    now.saturating_sub(from).max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn one_day_at_one_basis_point_per_second() {
        // 1000 * 86_400 * 1e14 / 1e18
        assert_eq!(accrued_reward(1_000, 86_400, 100_000_000_000_000), 8_640);
    }

    #[test]
    fn truncates_fractional_units() {
        // 3 * 1 * 0.5 = 1.5 -> 1
        assert_eq!(accrued_reward(3, 1, SCALE / 2), 1);
        assert_eq!(accrued_reward(1, 1, SCALE - 1), 0);
    }

    #[test]
    fn zero_inputs_accrue_nothing() {
        assert_eq!(accrued_reward(0, 100, SCALE), 0);
        assert_eq!(accrued_reward(100, 0, SCALE), 0);
    }

    #[test]
    fn wide_intermediate_product_does_not_overflow() {
        // u64::MAX * 1e18 overflows u128 but descales back into range.
        assert_eq!(accrued_reward(u64::MAX, 1, SCALE), u64::MAX);
    }

    #[test]
    fn reward_beyond_u64_saturates() {
        assert_eq!(accrued_reward(u64::MAX, 2, SCALE), u64::MAX);
        assert_eq!(accrued_reward(1 << 40, 20_000_000, SCALE), u64::MAX);
        assert_eq!(accrued_reward(u64::MAX, u64::MAX, u128::MAX), u64::MAX);
    }

    #[test]
    fn elapsed_never_negative() {
        assert_eq!(elapsed_seconds(100, 40), 0);
        assert_eq!(elapsed_seconds(100, 100), 0);
        assert_eq!(elapsed_seconds(100, 160), 60);
    }

    proptest! {
        #[test]
        fn matches_u128_formula_when_it_fits(
            amount in 0u64..1_000_000_000_000,
            elapsed in 0u64..100_000_000,
            rate in 1u128..1_000_000_000_000_000_000,
        ) {
            let expected = (amount as u128) * (elapsed as u128) * rate / SCALE;
            prop_assert_eq!(accrued_reward(amount, elapsed, rate) as u128, expected);
        }

        #[test]
        fn monotonic_in_elapsed(
            amount in 0u64..u32::MAX as u64,
            a in 0u64..1_000_000,
            b in 0u64..1_000_000,
            rate in 1u128..SCALE,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(accrued_reward(amount, lo, rate) <= accrued_reward(amount, hi, rate));
        }
    }
}
