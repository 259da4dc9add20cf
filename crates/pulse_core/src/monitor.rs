use crate::error::SolverError;
use crate::traits::{CellModel, Scalar};
use crate::trajectory::Trajectory;

/// Recomputes a selection of monitored expressions over a saved trajectory.
///
/// `states` is the row-major state matrix (`t_values.len()` rows of
/// `num_states` values); row `i` of `out` receives the monitored values at
/// sample `i`, gathered in the order given by `indices`. The pass is
/// stateless and never re-integrates: each row is computed independently
/// from its own scratch copies, so nothing leaks between samples.
///
/// Every index is range-checked before any sampling happens; an index
/// outside `[0, num_monitored)` is a caller bug and fails fast rather than
/// reading garbage.
pub fn sample_monitored<T, M>(
    model: &M,
    states: &[T],
    params: &[T],
    t_values: &[T],
    indices: &[usize],
    out: &mut [T],
) -> Result<(), SolverError>
where
    T: Scalar,
    M: CellModel<T>,
{
    let dim = model.num_states();
    let n_mon = model.num_monitored();
    let length = t_values.len();
    let num = indices.len();

    if states.len() != length * dim {
        return Err(SolverError::BufferSize {
            name: "states",
            got: states.len(),
            expected: length * dim,
        });
    }
    if params.len() != model.num_parameters() {
        return Err(SolverError::BufferSize {
            name: "params",
            got: params.len(),
            expected: model.num_parameters(),
        });
    }
    if out.len() != length * num {
        return Err(SolverError::BufferSize {
            name: "out",
            got: out.len(),
            expected: length * num,
        });
    }
    for &index in indices {
        if index >= n_mon {
            return Err(SolverError::MonitorIndexOutOfRange {
                index,
                count: n_mon,
            });
        }
    }

    let zero = T::from_f64(0.0).unwrap();
    let mut u = vec![zero; dim];
    let mut m_tmp = vec![zero; n_mon];
    // Rows are mutually independent; this loop could be split across
    // workers as long as each gets its own u/m_tmp scratch.
    for i in 0..length {
        u.copy_from_slice(&states[i * dim..(i + 1) * dim]);
        model.monitored(t_values[i], &u, params, &mut m_tmp);
        for (j, &index) in indices.iter().enumerate() {
            out[i * num + j] = m_tmp[index];
        }
    }
    Ok(())
}

/// Allocating convenience over a completed `Trajectory`.
pub fn monitored_over<M: CellModel<f64>>(
    model: &M,
    trajectory: &Trajectory,
    params: &[f64],
    indices: &[usize],
) -> Result<Vec<f64>, SolverError> {
    let mut out = vec![0.0; trajectory.len() * indices.len()];
    sample_monitored(
        model,
        &trajectory.states,
        params,
        &trajectory.t,
        indices,
        &mut out,
    )?;
    Ok(out)
}
