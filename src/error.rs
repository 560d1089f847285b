use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    #[error("Math error - overflow")]
    Overflow,
    #[error("Math error - division by zero")]
    DivisionByZero,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("State error - price must be finite and positive")]
    InvalidPrice,

    #[error("State error - tick out of bounds")]
    TickOutOfBounds,

    #[error("State error - sqrtPrice out of bounds")]
    SqrtPriceOutOfBounds,
    #[error("State error - sqrtPrice is 0")]
    SqrtPriceIsZero,

    #[error("State error - price range has zero width")]
    ZeroWidthRange,

    #[error("State error - liquidity is 0")]
    LiquidityIsZero,

    #[error("State error - swap exhausted the current price range")]
    RangeExhausted,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    MathError(#[from] crate::error::MathError),

    #[error(transparent)]
    StateError(#[from] crate::error::StateError),
}
