use crate::error::{Error, MathError, StateError};
use crate::math::math_helpers::mul_div;
use crate::types::{Liquidity, PriceRange, SqrtPriceX96, TokenAmount};
use crate::Q96;
use alloy_primitives::U256;

/// Liquidity supportable by depositing `amount` of token0 (the
/// price-denominated asset) across the given sqrt-price range:
/// `L = amount * (pa * pb / Q96) / (pb - pa)`, truncated.
///
/// Bounds may be passed in either order.
pub fn liquidity_for_amount_0(
    amount: TokenAmount,
    sqrt_price_a: SqrtPriceX96,
    sqrt_price_b: SqrtPriceX96,
) -> Result<Liquidity, Error> {
    let range = checked_range(sqrt_price_a, sqrt_price_b)?;

    let intermediate = mul_div(range.lower().get(), range.upper().get(), Q96)?;
    let liquidity = mul_div(amount.get(), intermediate, range.width())?;
    into_liquidity(liquidity)
}

/// Liquidity supportable by depositing `amount` of token1 (the quote asset)
/// across the given sqrt-price range: `L = amount * Q96 / (pb - pa)`,
/// truncated.
///
/// Bounds may be passed in either order.
pub fn liquidity_for_amount_1(
    amount: TokenAmount,
    sqrt_price_a: SqrtPriceX96,
    sqrt_price_b: SqrtPriceX96,
) -> Result<Liquidity, Error> {
    let range = checked_range(sqrt_price_a, sqrt_price_b)?;

    let liquidity = mul_div(amount.get(), Q96, range.width())?;
    into_liquidity(liquidity)
}

/// Liquidity usable from a two-sided deposit positioned around the current
/// price.
///
/// Below the range only token0 backs the position and above it only token1;
/// in between, each token covers its side of the current price and the
/// smaller of the two liquidities wins, so the deposit never requires more
/// of either token than was provided.
pub fn liquidity_for_amounts(
    amount_0: TokenAmount,
    amount_1: TokenAmount,
    sqrt_price: SqrtPriceX96,
    sqrt_price_a: SqrtPriceX96,
    sqrt_price_b: SqrtPriceX96,
) -> Result<Liquidity, Error> {
    let range = PriceRange::new(sqrt_price_a, sqrt_price_b);

    if sqrt_price <= range.lower() {
        liquidity_for_amount_0(amount_0, range.lower(), range.upper())
    } else if sqrt_price >= range.upper() {
        liquidity_for_amount_1(amount_1, range.lower(), range.upper())
    } else {
        let liquidity_0 = liquidity_for_amount_0(amount_0, sqrt_price, range.upper())?;
        let liquidity_1 = liquidity_for_amount_1(amount_1, range.lower(), sqrt_price)?;
        Ok(liquidity_0.min(liquidity_1))
    }
}

fn checked_range(
    sqrt_price_a: SqrtPriceX96,
    sqrt_price_b: SqrtPriceX96,
) -> Result<PriceRange, StateError> {
    let range = PriceRange::new(sqrt_price_a, sqrt_price_b);
    if range.lower().is_zero() {
        return Err(StateError::SqrtPriceIsZero);
    }
    if range.is_zero_width() {
        return Err(StateError::ZeroWidthRange);
    }
    Ok(range)
}

fn into_liquidity(raw: U256) -> Result<Liquidity, Error> {
    if raw > U256::from(u128::MAX) {
        return Err(MathError::Overflow.into());
    }
    Ok(Liquidity::new(raw.to::<u128>()))
}
