use crate::error::SolverError;
use crate::solvers::{ForwardEuler, GeneralizedRushLarsen};
use crate::traits::{CellModel, Scalar, Scheme};
use serde::{Deserialize, Serialize};

/// Which fixed-step scheme the driver should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemeKind {
    ForwardEuler,
    GeneralizedRushLarsen,
}

/// Drives `t_values.len() - 1` fixed steps of `scheme`, committing each
/// stepped state into the matching row of `trajectory` (row-major,
/// `num_states` values per row) and into `state` for the next iteration.
///
/// Row 0 of `trajectory` belongs to the caller: seed it with the initial
/// condition before (or after) calling, and pass the same initial condition
/// in `state`. The step at index `it` is taken from `t_values[it - 1]`, the
/// time at which that step starts; `dt` is constant for the run.
///
/// All buffer sizes are checked here, once; the step loop itself performs
/// no validation.
pub fn solve_fixed<T, M, S>(
    model: &M,
    scheme: &mut S,
    state: &mut [T],
    params: &[T],
    t_values: &[T],
    dt: T,
    trajectory: &mut [T],
) -> Result<(), SolverError>
where
    T: Scalar,
    M: CellModel<T>,
    S: Scheme<T>,
{
    let dim = model.num_states();
    if state.len() != dim {
        return Err(SolverError::BufferSize {
            name: "state",
            got: state.len(),
            expected: dim,
        });
    }
    if params.len() != model.num_parameters() {
        return Err(SolverError::BufferSize {
            name: "params",
            got: params.len(),
            expected: model.num_parameters(),
        });
    }
    if t_values.len() < 2 {
        return Err(SolverError::TimeGridTooShort { got: t_values.len() });
    }
    let num_timesteps = t_values.len() - 1;
    if trajectory.len() != (num_timesteps + 1) * dim {
        return Err(SolverError::BufferSize {
            name: "trajectory",
            got: trajectory.len(),
            expected: (num_timesteps + 1) * dim,
        });
    }

    // Strictly sequential: each step consumes the state committed by the
    // previous one.
    for it in 1..=num_timesteps {
        let mut t = t_values[it - 1];
        scheme.step(model, &mut t, state, dt, params);
        trajectory[it * dim..(it + 1) * dim].copy_from_slice(state);
    }
    Ok(())
}

/// A completed fixed-step run: the time grid and the row-major state matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    /// Sample times, `num_timesteps + 1` of them.
    pub t: Vec<f64>,
    /// Row-major states, one `num_states` row per sample.
    pub states: Vec<f64>,
    pub num_states: usize,
}

impl Trajectory {
    /// Number of saved samples (initial condition included).
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// The state row at sample `it`.
    pub fn sample(&self, it: usize) -> &[f64] {
        &self.states[it * self.num_states..(it + 1) * self.num_states]
    }
}

/// Integrates `model` over `[t_start, t_start + num_timesteps * dt]` on a
/// uniform grid, seeding sample 0 with `initial_state` and stepping with the
/// requested scheme.
pub fn integrate<M: CellModel<f64>>(
    model: &M,
    scheme: SchemeKind,
    initial_state: &[f64],
    params: &[f64],
    t_start: f64,
    dt: f64,
    num_timesteps: usize,
) -> Result<Trajectory, SolverError> {
    if num_timesteps == 0 {
        return Err(SolverError::NoTimesteps);
    }
    let dim = model.num_states();
    if initial_state.len() != dim {
        return Err(SolverError::BufferSize {
            name: "initial_state",
            got: initial_state.len(),
            expected: dim,
        });
    }

    let t: Vec<f64> = (0..=num_timesteps)
        .map(|k| t_start + k as f64 * dt)
        .collect();
    let mut states = vec![0.0; (num_timesteps + 1) * dim];
    states[..dim].copy_from_slice(initial_state);

    let mut current = initial_state.to_vec();
    match scheme {
        SchemeKind::ForwardEuler => {
            let mut s = ForwardEuler::new(dim);
            solve_fixed(model, &mut s, &mut current, params, &t, dt, &mut states)?;
        }
        SchemeKind::GeneralizedRushLarsen => {
            let mut s = GeneralizedRushLarsen::new(dim);
            solve_fixed(model, &mut s, &mut current, params, &t, dt, &mut states)?;
        }
    }

    Ok(Trajectory {
        t,
        states,
        num_states: dim,
    })
}
