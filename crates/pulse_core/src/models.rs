//! Built-in cell model, written the way the generator emits them.
//!
//! Hodgkin-Huxley squid axon membrane (1952). Four states `V, m, h, n`;
//! the three gates take the exponential branch of the Rush-Larsen kernel,
//! the membrane potential takes the explicit one.

use crate::traits::CellModel;

/// State layout: `[V, m, h, n]`.
pub const V: usize = 0;
pub const M: usize = 1;
pub const H: usize = 2;
pub const N: usize = 3;

/// Parameter layout: `[g_na, g_k, g_leak, e_na, e_k, e_leak, cm, i_app]`.
pub const G_NA: usize = 0;
pub const G_K: usize = 1;
pub const G_LEAK: usize = 2;
pub const E_NA: usize = 3;
pub const E_K: usize = 4;
pub const E_LEAK: usize = 5;
pub const CM: usize = 6;
pub const I_APP: usize = 7;

/// Monitored layout: `[i_na, i_k, i_leak, dv_dt]`.
pub const MON_I_NA: usize = 0;
pub const MON_I_K: usize = 1;
pub const MON_I_LEAK: usize = 2;
pub const MON_DV_DT: usize = 3;

pub struct HodgkinHuxley;

// Voltage in mV, time in ms, currents in uA/cm^2.
fn alpha_m(v: f64) -> f64 {
    0.1 * (v + 40.0) / (1.0 - (-(v + 40.0) / 10.0).exp())
}

fn beta_m(v: f64) -> f64 {
    4.0 * (-(v + 65.0) / 18.0).exp()
}

fn alpha_h(v: f64) -> f64 {
    0.07 * (-(v + 65.0) / 20.0).exp()
}

fn beta_h(v: f64) -> f64 {
    1.0 / (1.0 + (-(v + 35.0) / 10.0).exp())
}

fn alpha_n(v: f64) -> f64 {
    0.01 * (v + 55.0) / (1.0 - (-(v + 55.0) / 10.0).exp())
}

fn beta_n(v: f64) -> f64 {
    0.125 * (-(v + 65.0) / 80.0).exp()
}

fn currents(states: &[f64], params: &[f64]) -> (f64, f64, f64) {
    let v = states[V];
    let i_na = params[G_NA] * states[M].powi(3) * states[H] * (v - params[E_NA]);
    let i_k = params[G_K] * states[N].powi(4) * (v - params[E_K]);
    let i_leak = params[G_LEAK] * (v - params[E_LEAK]);
    (i_na, i_k, i_leak)
}

impl CellModel<f64> for HodgkinHuxley {
    fn num_states(&self) -> usize {
        4
    }

    fn num_parameters(&self) -> usize {
        8
    }

    fn num_monitored(&self) -> usize {
        4
    }

    fn step_explicit_euler(&self, states: &[f64], _t: f64, dt: f64, params: &[f64], out: &mut [f64]) {
        let v = states[V];
        let (i_na, i_k, i_leak) = currents(states, params);
        let dv_dt = (params[I_APP] - i_na - i_k - i_leak) / params[CM];
        out[V] = v + dt * dv_dt;
        out[M] = states[M] + dt * (alpha_m(v) * (1.0 - states[M]) - beta_m(v) * states[M]);
        out[H] = states[H] + dt * (alpha_h(v) * (1.0 - states[H]) - beta_h(v) * states[H]);
        out[N] = states[N] + dt * (alpha_n(v) * (1.0 - states[N]) - beta_n(v) * states[N]);
    }

    fn step_rush_larsen(&self, states: &[f64], _t: f64, dt: f64, params: &[f64], out: &mut [f64]) {
        let v = states[V];
        let (i_na, i_k, i_leak) = currents(states, params);
        let dv_dt = (params[I_APP] - i_na - i_k - i_leak) / params[CM];
        out[V] = v + dt * dv_dt;

        // Gates: u' = u_inf + (u - u_inf) * exp(-dt * (alpha + beta)).
        for (i, alpha, beta) in [
            (M, alpha_m(v), beta_m(v)),
            (H, alpha_h(v), beta_h(v)),
            (N, alpha_n(v), beta_n(v)),
        ] {
            let rate = alpha + beta;
            let u_inf = alpha / rate;
            out[i] = u_inf + (states[i] - u_inf) * (-dt * rate).exp();
        }
    }

    fn monitored(&self, _t: f64, states: &[f64], params: &[f64], out: &mut [f64]) {
        let (i_na, i_k, i_leak) = currents(states, params);
        out[MON_I_NA] = i_na;
        out[MON_I_K] = i_k;
        out[MON_I_LEAK] = i_leak;
        out[MON_DV_DT] = (params[I_APP] - i_na - i_k - i_leak) / params[CM];
    }

    fn init_states(&self, out: &mut [f64]) {
        out[V] = -65.0;
        out[M] = 0.05;
        out[H] = 0.6;
        out[N] = 0.325;
    }

    fn init_parameters(&self, out: &mut [f64]) {
        out[G_NA] = 120.0;
        out[G_K] = 36.0;
        out[G_LEAK] = 0.3;
        out[E_NA] = 50.0;
        out[E_K] = -77.0;
        out[E_LEAK] = -54.387;
        out[CM] = 1.0;
        out[I_APP] = 0.0;
    }
}
