use clmm_range_math::math::{liquidity_math, math_helpers, swap_math, tick_math};
use clmm_range_math::{Liquidity, SqrtPriceX96, Tick, TokenAmount, U256};
use criterion::{black_box, Criterion};
use std::str::FromStr;

const ONE_E18: u128 = 1_000_000_000_000_000_000;

fn reference_pool() -> (SqrtPriceX96, Liquidity) {
    (
        tick_math::sqrt_price_at_price(5000.0).unwrap(),
        Liquidity::new(1517882343751509783892u128),
    )
}

pub fn bench_tick_math(c: &mut Criterion) {
    let ticks: Vec<Tick> = (-887272..887272)
        .step_by(10_007)
        .map(Tick::new)
        .collect();
    let sqrt_prices: Vec<SqrtPriceX96> = ticks
        .iter()
        .map(|tick| tick_math::sqrt_price_at_tick(*tick).unwrap())
        .collect();

    c.bench_function("tick_math/sqrt_price_at_tick", |b| {
        b.iter(|| {
            for tick in &ticks {
                black_box(tick_math::sqrt_price_at_tick(black_box(*tick)).unwrap());
            }
        })
    });

    c.bench_function("tick_math/tick_at_sqrt_price", |b| {
        b.iter(|| {
            for sqrt_price in &sqrt_prices {
                black_box(tick_math::tick_at_sqrt_price(black_box(*sqrt_price)).unwrap());
            }
        })
    });

    c.bench_function("tick_math/tick_at_price", |b| {
        b.iter(|| black_box(tick_math::tick_at_price(black_box(5000.0)).unwrap()))
    });
}

pub fn bench_liquidity_math(c: &mut Criterion) {
    let lower = tick_math::sqrt_price_at_price(4545.0).unwrap();
    let current = tick_math::sqrt_price_at_price(5000.0).unwrap();
    let upper = tick_math::sqrt_price_at_price(5500.0).unwrap();

    c.bench_function("liquidity_math/liquidity_for_amounts", |b| {
        b.iter(|| {
            black_box(
                liquidity_math::liquidity_for_amounts(
                    TokenAmount::new(U256::from(ONE_E18)),
                    TokenAmount::new(U256::from(5000 * ONE_E18)),
                    black_box(current),
                    lower,
                    upper,
                )
                .unwrap(),
            )
        })
    });
}

pub fn bench_swap_math(c: &mut Criterion) {
    let (current, liquidity) = reference_pool();

    c.bench_function("swap_math/compute_swap_step/token1_in", |b| {
        b.iter(|| {
            black_box(
                swap_math::compute_swap_step(
                    black_box(current),
                    liquidity,
                    TokenAmount::new(U256::from(42 * ONE_E18)),
                    false,
                )
                .unwrap(),
            )
        })
    });

    c.bench_function("swap_math/compute_swap_step/token0_in", |b| {
        b.iter(|| {
            black_box(
                swap_math::compute_swap_step(
                    black_box(current),
                    liquidity,
                    TokenAmount::new(U256::from(13370000000000000u128)),
                    true,
                )
                .unwrap(),
            )
        })
    });
}

pub fn bench_math_helpers(c: &mut Criterion) {
    // the amount_0_delta inner product: wide enough to force the 512-bit path
    let a = U256::from(1517882343751509783892u128) << 96;
    let b = U256::from_str("273440692257950788829052928000").unwrap();
    let d = U256::from_str("5875717789736564987741329162240").unwrap();

    c.bench_function("math_helpers/mul_div", |bencher| {
        bencher.iter(|| black_box(math_helpers::mul_div(black_box(a), b, d).unwrap()))
    });
}
