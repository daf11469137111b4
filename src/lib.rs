//! Parametrized geometric kernels with shared coordinate storage.
//!
//! Points come in two representations behind one generic interface: the
//! [`cartesian`] kernel stores field coordinates directly, while the
//! [`homogeneous`] kernel stores ring tuples and divides on read. Both
//! keep their coordinates in immutable shared representations behind
//! [`Handle`], so copying a point never copies coordinates.

pub mod cartesian;
pub mod error;
pub mod handle;
pub mod homogeneous;
pub mod kernel;
pub mod number;

pub use cartesian::Cartesian;
pub use error::{KernelError, Result};
pub use handle::{CartesianIter, Coordinates, Handle};
pub use homogeneous::Homogeneous;
pub use kernel::{Kernel, Origin, Point2Ops, Point3Ops};
pub use number::{FieldNumber, RingNumber};
