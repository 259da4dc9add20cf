use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in the integration core.
/// Must support floating-point arithmetic, debug printing, and conversion
/// from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A generated cell model: fixed dimensions plus the pure update kernels
/// emitted by the code generator. The core never looks inside the kernels;
/// in particular, which state components the Rush-Larsen kernel treats as
/// gating variables is entirely the model's business.
pub trait CellModel<T: Scalar> {
    /// Number of state variables.
    fn num_states(&self) -> usize;

    /// Number of model parameters.
    fn num_parameters(&self) -> usize;

    /// Number of monitored expressions.
    fn num_monitored(&self) -> usize;

    /// One explicit forward Euler update, `out = u + dt * f(u, t, p)`.
    /// `out` must be `num_states` long; `states` is left untouched.
    fn step_explicit_euler(&self, states: &[T], t: T, dt: T, params: &[T], out: &mut [T]);

    /// One generalized Rush-Larsen update: gating components relax
    /// exponentially toward their steady state, the rest take the same
    /// explicit update as `step_explicit_euler`.
    fn step_rush_larsen(&self, states: &[T], t: T, dt: T, params: &[T], out: &mut [T]);

    /// Evaluates every monitored expression at `(t, states)` into `out`
    /// (`num_monitored` values).
    fn monitored(&self, t: T, states: &[T], params: &[T], out: &mut [T]);

    /// Fills `out` with the model's initial state values.
    fn init_states(&self, out: &mut [T]);

    /// Fills `out` with the model's default parameter values.
    fn init_parameters(&self, out: &mut [T]);
}

/// A scheme that can advance a cell model by one fixed step.
pub trait Scheme<T: Scalar> {
    /// Performs one step of size dt.
    /// t: current time (updated after step)
    /// state: current state (updated after step)
    /// params: model parameters (read-only)
    fn step(&mut self, model: &impl CellModel<T>, t: &mut T, state: &mut [T], dt: T, params: &[T]);
}
