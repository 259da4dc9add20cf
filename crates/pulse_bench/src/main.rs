use std::time::Instant;

use anyhow::{bail, Context, Result};
use pulse_core::models::HodgkinHuxley;
use pulse_core::solvers::{ForwardEuler, GeneralizedRushLarsen};
use pulse_core::traits::{CellModel, Scheme};

fn time_scheme<S: Scheme<f64>>(
    label: &str,
    mut scheme: S,
    model: &HodgkinHuxley,
    params: &[f64],
    num_timesteps: usize,
    dt: f64,
) {
    println!("Scheme: {label}");
    let mut states = vec![0.0; model.num_states()];
    model.init_states(&mut states);
    let mut t = 0.0;

    let clock = Instant::now();
    for _ in 0..num_timesteps {
        scheme.step(model, &mut t, &mut states, dt, params);
    }
    let elapsed = clock.elapsed().as_secs_f64();
    println!(
        "Computed {num_timesteps} time steps in {elapsed:.4} s. Time steps per second: {:.0}",
        num_timesteps as f64 / elapsed
    );
    println!();
}

fn main() -> Result<()> {
    let dt = 0.01; // ms
    let mut num_timesteps: usize = 1_000_000;
    if let Some(arg) = std::env::args().nth(1) {
        num_timesteps = arg
            .parse()
            .with_context(|| format!("num_timesteps must be an integer, got `{arg}`"))?;
        println!("num_timesteps set to {num_timesteps}");
        if num_timesteps == 0 {
            bail!("num_timesteps must be positive");
        }
    }

    let model = HodgkinHuxley;
    let dim = model.num_states();
    let mut params = vec![0.0; model.num_parameters()];
    model.init_parameters(&mut params);

    time_scheme(
        "Forward Euler",
        ForwardEuler::new(dim),
        &model,
        &params,
        num_timesteps,
        dt,
    );
    time_scheme(
        "Rush Larsen (exp integrator on all gates)",
        GeneralizedRushLarsen::new(dim),
        &model,
        &params,
        num_timesteps,
        dt,
    );

    Ok(())
}
