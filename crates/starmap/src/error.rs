use thiserror::Error;

/// Reasons a [`Generator`](crate::Generator) cannot be constructed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("a random source is required: set a seed or supply dice")]
    MissingRandomSource,
    #[error("galactic neighborhood offset too small: radial {radial} pc is inside 300 pc")]
    OffsetTooSmall { radial: f64 },
    #[error(
        "galactic neighborhood offset too large: radial {radial} pc (max 30000), vertical {vertical} pc (max 1250)"
    )]
    OffsetTooLarge { radial: f64, vertical: f64 },
    #[error("galactic neighborhood offset must be finite")]
    NonFiniteOffset,
}
