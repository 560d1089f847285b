use crate::error::{Error, StateError};
use crate::math::sqrt_price_math::{
    amount_0_delta, amount_1_delta, next_sqrt_price_from_amount_0_in,
    next_sqrt_price_from_amount_1_in,
};
use crate::types::{Liquidity, SqrtPriceX96, TokenAmount};

/// Outcome of absorbing one input amount inside a single liquidity range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapStep {
    /// Sqrt price after the full input is absorbed.
    pub sqrt_price_next: SqrtPriceX96,
    /// Input actually consumed by the move, as the truncated curve sees it.
    pub amount_in: TokenAmount,
    /// Output delivered by the move.
    pub amount_out: TokenAmount,
}

/// Simulates a swap confined to the current liquidity range.
///
/// `zero_for_one` selects the direction: `true` sells token0 for token1 and
/// moves the price down; `false` sells token1 for token0 and moves it up.
/// The new price comes from the direction's update formula, and the realized
/// amounts are the token deltas between the old and new price. Every
/// division truncates toward zero, so the step never reports more output
/// than the curve releases.
///
/// A zero input is a no-op (unchanged price, zero amounts). A move that
/// would leave the representable tick band fails with `RangeExhausted`;
/// crossing into an adjacent range is the caller's problem, not this
/// function's.
pub fn compute_swap_step(
    sqrt_price: SqrtPriceX96,
    liquidity: Liquidity,
    amount_in: TokenAmount,
    zero_for_one: bool,
) -> Result<SwapStep, Error> {
    if sqrt_price.is_zero() {
        return Err(StateError::SqrtPriceIsZero.into());
    }
    if liquidity.is_zero() {
        return Err(StateError::LiquidityIsZero.into());
    }
    if amount_in.is_zero() {
        return Ok(SwapStep {
            sqrt_price_next: sqrt_price,
            amount_in: TokenAmount::ZERO,
            amount_out: TokenAmount::ZERO,
        });
    }

    let sqrt_price_next = if zero_for_one {
        next_sqrt_price_from_amount_0_in(sqrt_price, liquidity, amount_in)?
    } else {
        next_sqrt_price_from_amount_1_in(sqrt_price, liquidity, amount_in)?
    };

    let (amount_in, amount_out) = if zero_for_one {
        (
            amount_0_delta(sqrt_price_next, sqrt_price, liquidity)?,
            amount_1_delta(sqrt_price_next, sqrt_price, liquidity)?,
        )
    } else {
        (
            amount_1_delta(sqrt_price_next, sqrt_price, liquidity)?,
            amount_0_delta(sqrt_price_next, sqrt_price, liquidity)?,
        )
    };

    Ok(SwapStep {
        sqrt_price_next,
        amount_in,
        amount_out,
    })
}
