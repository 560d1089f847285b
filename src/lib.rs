//! Concentrated-liquidity AMM pricing math, confined to a single liquidity
//! range.
//!
//! This crate is the stateless kernel a pool implementation calls into:
//! - Tick / sqrt-price conversion (`math::tick_math`): the bidirectional map
//!   between discrete tick indices and Q64.96 square-root prices, plus the
//!   human-facing price entry points.
//! - Liquidity derivation (`math::liquidity_math`): the liquidity a price
//!   range can support given a deposit of one (or both) tokens.
//! - Swap-step simulation (`math::swap_math`): how one input amount moves
//!   the price inside the range and what is exchanged.
//!
//! Everything is a pure function of its arguments, with no state and no
//! I/O, so every entry point is safe to call concurrently without
//! coordination.
//! Arithmetic is integer-only fixed point with truncation toward zero;
//! floating point appears solely at the price boundary, through operations
//! with exact IEEE-754 rounding guarantees. Overflow is detected and
//! reported as an error, never wrapped.
//!
//! # Examples
//!
//! ## Converting between ticks and prices
//! ```
//! use clmm_range_math::math::tick_math;
//!
//! let tick = tick_math::tick_at_price(5000.0)?;
//! assert_eq!(tick.index(), 85176);
//!
//! let sqrt_price = tick_math::sqrt_price_at_tick(tick)?;
//! assert_eq!(tick_math::tick_at_sqrt_price(sqrt_price)?, tick);
//! # Ok::<(), clmm_range_math::error::StateError>(())
//! ```
//!
//! ## Depositing into a range and swapping against it
//! ```
//! use clmm_range_math::math::{liquidity_math, swap_math, tick_math};
//! use clmm_range_math::{TokenAmount, U256};
//!
//! // A position on the 4545..5500 price range, pool trading at 5000.
//! let lower = tick_math::sqrt_price_at_price(4545.0)?;
//! let current = tick_math::sqrt_price_at_price(5000.0)?;
//! let upper = tick_math::sqrt_price_at_price(5500.0)?;
//!
//! let eth = U256::from(10u128.pow(18));
//! let liquidity = liquidity_math::liquidity_for_amounts(
//!     TokenAmount::new(eth),
//!     TokenAmount::new(U256::from(5000u64) * eth),
//!     current,
//!     lower,
//!     upper,
//! )?;
//!
//! // Sell 42 of token1 into the range: the price moves up and token0 comes out.
//! let step = swap_math::compute_swap_step(
//!     current,
//!     liquidity,
//!     TokenAmount::new(U256::from(42u64) * eth),
//!     false,
//! )?;
//!
//! assert_eq!(tick_math::tick_at_sqrt_price(step.sqrt_price_next)?.index(), 85184);
//! assert_eq!(step.amount_out.get(), U256::from(8396714242162444u64));
//! # Ok::<(), clmm_range_math::Error>(())
//! ```

pub use alloy_primitives::U256;

pub mod error;
pub mod math;
pub mod types;

pub use error::Error;
pub use types::{Liquidity, PriceRange, SqrtPriceX96, Tick, TokenAmount};

/// Number of fractional bits in the Q64.96 sqrt-price representation.
pub const RESOLUTION: usize = 96;

/// The Q64.96 scale factor, `2^96`.
pub const Q96: U256 = U256::from_limbs([0, 4294967296, 0, 0]);

pub const U160_MAX: U256 = U256::from_limbs([u64::MAX, u64::MAX, u32::MAX as u64, 0]);
