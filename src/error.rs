use thiserror::Error;

/// Top-level error type for kernel conversions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KernelError {
    #[error("zero homogeneous weight: a point at infinity has no Cartesian image")]
    ZeroWeight,
}

/// Convenience type alias for results using [`KernelError`].
pub type Result<T> = std::result::Result<T, KernelError>;
