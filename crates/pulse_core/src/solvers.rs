use crate::traits::{CellModel, Scalar, Scheme};

/// Forward Euler stepper.
/// Explicit and conditionally stable; choosing a dt the model tolerates is
/// the caller's responsibility.
pub struct ForwardEuler<T: Scalar> {
    tmp: Vec<T>,
}

impl<T: Scalar> ForwardEuler<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            tmp: vec![T::from_f64(0.0).unwrap(); dim],
        }
    }
}

impl<T: Scalar> Scheme<T> for ForwardEuler<T> {
    fn step(&mut self, model: &impl CellModel<T>, t: &mut T, state: &mut [T], dt: T, params: &[T]) {
        // The model kernel writes the advanced state into tmp; commit it
        // only once the whole update is computed.
        model.step_explicit_euler(state, *t, dt, params, &mut self.tmp);
        state.copy_from_slice(&self.tmp);
        *t = *t + dt;
    }
}

/// Generalized Rush-Larsen stepper.
/// The model kernel advances gating components exponentially toward their
/// steady state, which keeps them bounded for any dt > 0; non-gating
/// components take the plain explicit update.
pub struct GeneralizedRushLarsen<T: Scalar> {
    tmp: Vec<T>,
}

impl<T: Scalar> GeneralizedRushLarsen<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            tmp: vec![T::from_f64(0.0).unwrap(); dim],
        }
    }
}

impl<T: Scalar> Scheme<T> for GeneralizedRushLarsen<T> {
    fn step(&mut self, model: &impl CellModel<T>, t: &mut T, state: &mut [T], dt: T, params: &[T]) {
        model.step_rush_larsen(state, *t, dt, params, &mut self.tmp);
        state.copy_from_slice(&self.tmp);
        *t = *t + dt;
    }
}

#[cfg(test)]
mod tests {
    use super::{ForwardEuler, GeneralizedRushLarsen};
    use crate::traits::{CellModel, Scheme};

    /// Scalar relaxation du/dt = (u_inf - u) / tau with constant
    /// coefficients taken from the parameter vector. The single state is
    /// treated as a gating variable by the Rush-Larsen kernel.
    struct Gate;

    impl CellModel<f64> for Gate {
        fn num_states(&self) -> usize {
            1
        }

        fn num_parameters(&self) -> usize {
            2
        }

        fn num_monitored(&self) -> usize {
            1
        }

        fn step_explicit_euler(&self, states: &[f64], _t: f64, dt: f64, params: &[f64], out: &mut [f64]) {
            let (u_inf, tau) = (params[0], params[1]);
            out[0] = states[0] + dt * (u_inf - states[0]) / tau;
        }

        fn step_rush_larsen(&self, states: &[f64], _t: f64, dt: f64, params: &[f64], out: &mut [f64]) {
            let (u_inf, tau) = (params[0], params[1]);
            out[0] = u_inf + (states[0] - u_inf) * (-dt / tau).exp();
        }

        fn monitored(&self, _t: f64, states: &[f64], _params: &[f64], out: &mut [f64]) {
            out[0] = states[0];
        }

        fn init_states(&self, out: &mut [f64]) {
            out[0] = 0.0;
        }

        fn init_parameters(&self, out: &mut [f64]) {
            out[0] = 1.0;
            out[1] = 0.5;
        }
    }

    #[test]
    fn forward_euler_matches_closed_form_on_linear_decay() {
        // With u_inf = 0 the gate reduces to u' = -u / tau, so Euler gives
        // u[n] = u0 * (1 - dt/tau)^n.
        let model = Gate;
        let params = [0.0, 2.0];
        let dt = 0.1;
        let mut scheme = ForwardEuler::new(1);
        let mut state = [1.0];
        let mut t = 0.0;
        for n in 1..=50 {
            scheme.step(&model, &mut t, &mut state, dt, &params);
            let exact = (1.0 - dt / params[1]).powi(n);
            assert!((state[0] - exact).abs() < 1e-12, "step {n}: {} vs {exact}", state[0]);
        }
        assert!((t - 5.0).abs() < 1e-9);
    }

    #[test]
    fn rush_larsen_single_step_is_exact_for_constant_coefficients() {
        let model = Gate;
        let params = [0.8, 0.5];
        let u0 = 0.2;
        for dt in [1e-3, 0.1, 5.0, 500.0] {
            let mut scheme = GeneralizedRushLarsen::new(1);
            let mut state = [u0];
            let mut t = 0.0;
            scheme.step(&model, &mut t, &mut state, dt, &params);
            let exact = params[0] + (u0 - params[0]) * (-dt / params[1]).exp();
            assert!((state[0] - exact).abs() < 1e-14, "dt={dt}: {} vs {exact}", state[0]);
        }
    }

    #[test]
    fn rush_larsen_stays_bounded_where_forward_euler_diverges() {
        // dt = 10 * tau is far outside Euler's stability region.
        let model = Gate;
        let params = [1.0, 0.1];
        let dt = 1.0;

        let mut euler = ForwardEuler::new(1);
        let mut u_euler = [0.0];
        let mut rl = GeneralizedRushLarsen::new(1);
        let mut u_rl = [0.0];
        let (mut te, mut tr) = (0.0, 0.0);
        for _ in 0..20 {
            euler.step(&model, &mut te, &mut u_euler, dt, &params);
            rl.step(&model, &mut tr, &mut u_rl, dt, &params);
        }
        assert!(u_euler[0].abs() > 1e10, "Euler should have diverged: {}", u_euler[0]);
        assert!((u_rl[0] - 1.0).abs() < 1e-4, "RL should have relaxed to u_inf: {}", u_rl[0]);
    }
}
