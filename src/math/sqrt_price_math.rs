use crate::error::{Error, MathError, StateError};
use crate::math::math_helpers::{div_rounding_up, mul_div};
use crate::math::tick_math::{MAX_SQRT_PRICE, MIN_SQRT_PRICE};
use crate::types::{Liquidity, PriceRange, SqrtPriceX96, TokenAmount};
use crate::{Q96, RESOLUTION, U160_MAX};
use alloy_primitives::U256;

/// Computes the sqrt price after `amount` of token0 is sold into the range.
///
/// token0 reserves enter the *reciprocal* sqrt-price coordinate, so the
/// price moves down along `floor(L * Q96 * P / (L * Q96 + amount * P))`,
/// the harmonic-style update that keeps liquidity constant on the curve.
///
/// Fails with `RangeExhausted` when the result would land below the lowest
/// representable tick; the caller would have to cross into another range.
pub fn next_sqrt_price_from_amount_0_in(
    sqrt_price: SqrtPriceX96,
    liquidity: Liquidity,
    amount: TokenAmount,
) -> Result<SqrtPriceX96, Error> {
    if sqrt_price.is_zero() {
        return Err(StateError::SqrtPriceIsZero.into());
    }
    if liquidity.is_zero() {
        return Err(StateError::LiquidityIsZero.into());
    }

    let price = sqrt_price.get();
    let amount = amount.get();
    let numerator = U256::from(liquidity.get()) << RESOLUTION;

    let next = match amount
        .checked_mul(price)
        .and_then(|product| numerator.checked_add(product))
    {
        Some(denominator) => mul_div(numerator, price, denominator)?,
        // amount * price exceeds 256 bits; divide the denominator through by
        // the price instead, rounding it up so the result stays a floor.
        None => {
            let denominator = div_rounding_up(numerator, price)
                .checked_add(amount)
                .ok_or(StateError::RangeExhausted)?;
            numerator / denominator
        }
    };

    if next < MIN_SQRT_PRICE.get() {
        return Err(StateError::RangeExhausted.into());
    }
    Ok(SqrtPriceX96::new(next))
}

/// Computes the sqrt price after `amount` of token1 is sold into the range.
///
/// token1 reserves are linear in the sqrt-price coordinate at fixed
/// liquidity, so the price moves up by exactly `floor(amount * Q96 / L)`.
///
/// Fails with `RangeExhausted` when the result would land above the highest
/// representable tick.
pub fn next_sqrt_price_from_amount_1_in(
    sqrt_price: SqrtPriceX96,
    liquidity: Liquidity,
    amount: TokenAmount,
) -> Result<SqrtPriceX96, Error> {
    if sqrt_price.is_zero() {
        return Err(StateError::SqrtPriceIsZero.into());
    }
    if liquidity.is_zero() {
        return Err(StateError::LiquidityIsZero.into());
    }

    let amount = amount.get();
    let liquidity = U256::from(liquidity.get());

    let quotient = if amount <= U160_MAX {
        (amount << RESOLUTION) / liquidity
    } else {
        mul_div(amount, Q96, liquidity)?
    };

    let next = sqrt_price
        .get()
        .checked_add(quotient)
        .ok_or(MathError::Overflow)?;

    if next > MAX_SQRT_PRICE.get() {
        return Err(StateError::RangeExhausted.into());
    }
    Ok(SqrtPriceX96::new(next))
}

/// Amount of token0 held between two sqrt prices at the given liquidity:
/// `floor(L * Q96 * (pb - pa) / pb / pa)`, pair accepted in either order.
pub fn amount_0_delta(
    sqrt_price_a: SqrtPriceX96,
    sqrt_price_b: SqrtPriceX96,
    liquidity: Liquidity,
) -> Result<TokenAmount, Error> {
    let range = PriceRange::new(sqrt_price_a, sqrt_price_b);
    if range.lower().is_zero() {
        return Err(StateError::SqrtPriceIsZero.into());
    }

    let numerator_1 = U256::from(liquidity.get()) << RESOLUTION;
    let numerator_2 = range.width();

    let amount = mul_div(numerator_1, numerator_2, range.upper().get())? / range.lower().get();
    Ok(TokenAmount::new(amount))
}

/// Amount of token1 held between two sqrt prices at the given liquidity:
/// `floor(L * (pb - pa) / Q96)`, pair accepted in either order.
pub fn amount_1_delta(
    sqrt_price_a: SqrtPriceX96,
    sqrt_price_b: SqrtPriceX96,
    liquidity: Liquidity,
) -> Result<TokenAmount, Error> {
    let range = PriceRange::new(sqrt_price_a, sqrt_price_b);

    let amount = mul_div(U256::from(liquidity.get()), range.width(), Q96)?;
    Ok(TokenAmount::new(amount))
}
