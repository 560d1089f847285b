use crate::error::MathError;
use alloy_primitives::U256;

const U256_ONE: U256 = U256::ONE;
const U256_TWO: U256 = U256::from_limbs([2, 0, 0, 0]);
const U256_THREE: U256 = U256::from_limbs([3, 0, 0, 0]);

/// Computes `floor(a * b / denominator)` with a full 512-bit intermediate
/// product, returning a `MathError` when the denominator is zero or the
/// quotient does not fit in 256 bits.
///
/// Every liquidity and swap formula in this crate funnels its three-operand
/// products through here so that no intermediate can silently wrap.
#[inline(always)]
pub fn mul_div(a: U256, b: U256, mut denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    // 512-bit product as (prod1, prod0), high and low 256-bit halves.
    let mm = a.mul_mod(b, U256::MAX);
    let mut prod0 = a.wrapping_mul(b);

    let (mut prod1, borrow) = mm.overflowing_sub(prod0);
    if borrow {
        prod1 = prod1.wrapping_sub(U256_ONE);
    }

    if prod1.is_zero() {
        return Ok(prod0.wrapping_div(denominator));
    }

    if denominator <= prod1 {
        return Err(MathError::Overflow);
    }

    // Subtract the remainder so that (prod1, prod0) is an exact multiple of
    // the denominator, then divide via a modular inverse.
    let remainder = a.mul_mod(b, denominator);
    let (prod0_new, borrow) = prod0.overflowing_sub(remainder);
    prod0 = prod0_new;
    if borrow {
        prod1 = prod1.wrapping_sub(U256_ONE);
    }

    let twos = denominator & denominator.wrapping_neg();
    denominator = denominator.wrapping_div(twos);
    prod0 = prod0.wrapping_div(twos);

    let twos_adj = twos
        .wrapping_neg()
        .wrapping_div(twos)
        .wrapping_add(U256_ONE);
    prod0 |= prod1.wrapping_mul(twos_adj);

    // Newton-Raphson inverse of the (now odd) denominator mod 2^256.
    // Each iteration doubles the number of correct bits; six reach 256.
    let mut inv = U256_THREE.wrapping_mul(denominator) ^ U256_TWO;
    for _ in 0..6 {
        inv = inv.wrapping_mul(U256_TWO.wrapping_sub(denominator.wrapping_mul(inv)));
    }

    Ok(prod0.wrapping_mul(inv))
}

/// Divides `a` by `b`, rounding up when there is a non-zero remainder.
///
/// Panics on `b == 0`, mirroring primitive integer division; callers must
/// guard the denominator.
#[inline(always)]
pub fn div_rounding_up(a: U256, b: U256) -> U256 {
    let (quotient, remainder) = a.div_rem(b);
    if remainder.is_zero() {
        quotient
    } else {
        quotient + U256_ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_div_small_operands() {
        let result = mul_div(U256::from(10u8), U256::from(20u8), U256::from(5u8)).unwrap();
        assert_eq!(result, U256::from(40u8));
    }

    #[test]
    fn mul_div_rejects_zero_denominator() {
        let result = mul_div(U256::from(10u8), U256::from(20u8), U256::ZERO);
        assert!(matches!(result, Err(MathError::DivisionByZero)));
    }

    #[test]
    fn mul_div_truncates_toward_zero() {
        // 7 * 10 / 8 = 8.75 -> 8
        let result = mul_div(U256::from(7u8), U256::from(10u8), U256::from(8u8)).unwrap();
        assert_eq!(result, U256::from(8u8));
    }

    #[test]
    fn mul_div_wide_product_narrow_quotient() {
        // a * b overflows 256 bits but the quotient fits:
        // (2^256 - 1) * (2^256 - 1) / (2^256 - 1) = 2^256 - 1
        let result = mul_div(U256::MAX, U256::MAX, U256::MAX).unwrap();
        assert_eq!(result, U256::MAX);
    }

    #[test]
    fn mul_div_wide_product_even_denominator() {
        // Exercises the twos-factoring path: denominator is a power of two
        // and the product needs both 256-bit halves.
        let a = U256::from(1u8) << 200;
        let b = U256::from(1u8) << 100;
        let d = U256::from(1u8) << 64;
        let result = mul_div(a, b, d).unwrap();
        assert_eq!(result, U256::from(1u8) << 236);
    }

    #[test]
    fn mul_div_reports_quotient_overflow() {
        // (2^256 - 1) * 2 / 1 does not fit in 256 bits
        let result = mul_div(U256::MAX, U256::from(2u8), U256::ONE);
        assert!(matches!(result, Err(MathError::Overflow)));
    }

    #[test]
    fn div_rounding_up_exact() {
        assert_eq!(
            div_rounding_up(U256::from(10u8), U256::from(5u8)),
            U256::from(2u8)
        );
    }

    #[test]
    fn div_rounding_up_with_remainder() {
        assert_eq!(
            div_rounding_up(U256::from(10u8), U256::from(3u8)),
            U256::from(4u8)
        );
    }

    #[test]
    fn div_rounding_up_large_values() {
        // (2^256 - 1) / (2^256 - 2) rounds up to 2
        assert_eq!(
            div_rounding_up(U256::MAX, U256::MAX - U256::ONE),
            U256::from(2u8)
        );
    }

    #[test]
    #[should_panic]
    fn div_rounding_up_zero_denominator_panics() {
        let _ = div_rounding_up(U256::from(10u8), U256::ZERO);
    }
}
