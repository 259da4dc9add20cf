//! The `pulse_core` crate is the fixed-step integration engine for generated
//! cell models.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `CellModel` (the
//!   generated model capability), `Scheme` (fixed-step advance).
//! - **Solvers**: `ForwardEuler` and `GeneralizedRushLarsen` steppers.
//! - **Trajectory**: the sequential driver plus the `integrate` convenience
//!   surface.
//! - **Monitor**: post-hoc recomputation of monitored expressions over a
//!   saved trajectory.
//! - **Models**: a built-in Hodgkin-Huxley model in the generated style.

pub mod error;
pub mod models;
pub mod monitor;
pub mod solvers;
pub mod trajectory;
pub mod traits;

pub use error::SolverError;
pub use trajectory::{integrate, SchemeKind, Trajectory};
