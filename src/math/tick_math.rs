use crate::error::StateError;
use crate::types::{SqrtPriceX96, Tick};
use alloy_primitives::{I256, U256};

/// Sqrt price at [`Tick::MIN`]; no lower price is representable.
pub const MIN_SQRT_PRICE: SqrtPriceX96 =
    SqrtPriceX96::new(U256::from_limbs([4295128739, 0, 0, 0]));
/// Sqrt price at [`Tick::MAX`]; no higher price is representable.
pub const MAX_SQRT_PRICE: SqrtPriceX96 = SqrtPriceX96::new(U256::from_limbs([
    6743328256752651558,
    17280870778742802505,
    4294805859,
    0,
]));

const Q96_F64: f64 = 79228162514264337593543950336.0; // 2^96, exactly representable

// log_2 -> tick rescale factor and the +/- error bars of the fixed-point
// log, all Q128: sqrt(1.0001) per tick means tick = log_2(ratio) / log_2(sqrt(1.0001)).
const SQRT_10001: I256 = I256::from_raw(U256::from_limbs([11745905768312294533, 13863, 0, 0]));
const TICK_LOW: I256 = I256::from_raw(U256::from_limbs([
    6552757943157144234,
    184476617836266586,
    0,
    0,
]));
const TICK_HIGH: I256 = I256::from_raw(U256::from_limbs([
    4998474450511881007,
    15793544031827761793,
    0,
    0,
]));

const U256_128: U256 = U256::from_limbs([128, 0, 0, 0]);
const SHIFT_128: usize = 128;

// Q128.128 multipliers sqrt(1/1.0001)^(2^k) for bit k = 1..=19 of the
// absolute tick; bit 0 is the seed ratio below.
const STEP_FACTORS: [[u64; 2]; 19] = [
    [6459403834229662010, 18444899583751176498],
    [17226890335427755468, 18443055278223354162],
    [2032852871939366096, 18439367220385604838],
    [14545316742740207172, 18431993317065449817],
    [5129152022828963008, 18417254355718160513],
    [4894419605888772193, 18387811781193591352],
    [1280255884321894483, 18329067761203520168],
    [15924666964335305636, 18212142134806087854],
    [8010504389359918676, 17980523815641551639],
    [10668036004952895731, 17526086738831147013],
    [4878133418470705625, 16651378430235024244],
    [9537173718739605541, 15030750278693429944],
    [9972618978014552549, 12247334978882834399],
    [10428997489610666743, 8131365268884726200],
    [9305304367709015974, 3584323654723342297],
    [14301143598189091785, 696457651847595233],
    [7393154844743099908, 26294789957452057],
    [2209338891292245656, 37481735321082],
    [10518117631919034274, 76158723],
];

/// Returns `floor(1.0001^(tick/2) * 2^96)`, the Q64.96 sqrt price at a tick,
/// or `TickOutOfBounds` outside `[Tick::MIN, Tick::MAX]`.
///
/// Integer-only: the power is assembled from precomputed Q128.128 factors,
/// one per set bit of the tick, so the result is identical on every platform.
pub fn sqrt_price_at_tick(tick: Tick) -> Result<SqrtPriceX96, StateError> {
    if !tick.is_in_bounds() {
        return Err(StateError::TickOutOfBounds);
    }
    let abs_tick = tick.index().unsigned_abs();

    let mut ratio = if abs_tick & 1 != 0 {
        U256::from_limbs([12262481743371124737, 18445821805675392311, 0, 0])
    } else {
        U256::from_limbs([0, 0, 1, 0])
    };
    for (bit, factor) in STEP_FACTORS.iter().enumerate() {
        if abs_tick & (1u32 << (bit + 1)) != 0 {
            ratio = ratio.wrapping_mul(U256::from_limbs([factor[0], factor[1], 0, 0])) >> 128;
        }
    }

    // The factors encode negative ticks; invert for positive ones.
    if tick.index() > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up so the tick -> price -> tick round
    // trip lands back on the same tick.
    let round_up = !(ratio & U256::from(0xFFFF_FFFFu64)).is_zero();
    Ok(SqrtPriceX96::new(
        (ratio >> 32) + U256::from(round_up as u64),
    ))
}

/// Returns the greatest tick whose sqrt price is `<= sqrt_price`.
///
/// Domain is `[MIN_SQRT_PRICE, MAX_SQRT_PRICE)`; anything outside comes back
/// as `SqrtPriceOutOfBounds`. Integer-only: a fixed-point base-2 log with 14
/// refinement bits brackets the tick to two candidates, and an exact forward
/// computation picks between them.
pub fn tick_at_sqrt_price(sqrt_price: SqrtPriceX96) -> Result<Tick, StateError> {
    if sqrt_price < MIN_SQRT_PRICE || sqrt_price >= MAX_SQRT_PRICE {
        return Err(StateError::SqrtPriceOutOfBounds);
    }

    let ratio: U256 = sqrt_price.get() << 32;
    let msb = 255 - ratio.leading_zeros();

    // Normalize into [2^127, 2^128) for the squaring steps.
    let mut r = if msb >= 128 {
        ratio >> (msb - 127)
    } else {
        ratio << (127 - msb)
    };

    let mut log_2: I256 = (I256::from_raw(U256::from(msb)) - I256::from_raw(U256_128)) << 64;

    for shift in (50usize..=63).rev() {
        r = r.wrapping_mul(r) >> 127;
        let f: U256 = r >> 128;
        log_2 |= I256::from_raw(f << shift);
        if !f.is_zero() {
            r >>= 1;
        }
    }

    let log_sqrt10001 = log_2.wrapping_mul(SQRT_10001);
    let tick_low = ((log_sqrt10001 - TICK_LOW) >> SHIFT_128).low_i32();
    let tick_high = ((log_sqrt10001 + TICK_HIGH) >> SHIFT_128).low_i32();

    let tick = if tick_low == tick_high {
        tick_low
    } else if sqrt_price_at_tick(Tick::new(tick_high))? <= sqrt_price {
        tick_high
    } else {
        tick_low
    };
    Ok(Tick::new(tick))
}

/// Returns `floor(sqrt(price) * 2^96)` for a plain (human-facing) price.
///
/// This is the one place floating point enters the crate. `f64::sqrt` is
/// IEEE-754 correctly rounded and the 2^96 scale only shifts the exponent,
/// so the result is still deterministic across platforms.
pub fn sqrt_price_at_price(price: f64) -> Result<SqrtPriceX96, StateError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(StateError::InvalidPrice);
    }

    let scaled = price.sqrt() * Q96_F64;
    let raw = u256_from_f64_floor(scaled).ok_or(StateError::SqrtPriceOutOfBounds)?;

    let sqrt_price = SqrtPriceX96::new(raw);
    if sqrt_price < MIN_SQRT_PRICE || sqrt_price >= MAX_SQRT_PRICE {
        return Err(StateError::SqrtPriceOutOfBounds);
    }
    Ok(sqrt_price)
}

/// Returns `floor(log_1.0001(price))`: the tick whose price band contains
/// the given price. Monotonic non-decreasing in `price`.
///
/// Routed through [`sqrt_price_at_price`] and the integer tick lookup rather
/// than a floating-point logarithm, which has no cross-platform rounding
/// guarantee.
pub fn tick_at_price(price: f64) -> Result<Tick, StateError> {
    tick_at_sqrt_price(sqrt_price_at_price(price)?)
}

/// Truncates a non-negative finite f64 to an integer via its mantissa and
/// exponent. `None` when the value is negative, non-finite, or >= 2^256.
fn u256_from_f64_floor(value: f64) -> Option<U256> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    if value < 1.0 {
        return Some(U256::ZERO);
    }

    let bits = value.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i64 - 1075;
    let mantissa = (bits & 0x000f_ffff_ffff_ffff) | (1 << 52);

    if exponent >= 0 {
        if exponent > 203 {
            // mantissa has 53 bits; anything shifted past 2^256 is unusable
            return None;
        }
        Some(U256::from(mantissa) << exponent as usize)
    } else {
        // value >= 1.0 bounds the exponent to [-52, 0)
        Some(U256::from(mantissa >> (-exponent) as u32))
    }
}
