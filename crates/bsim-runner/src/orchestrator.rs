//! Replication fan-out and response assembly.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use uuid::Uuid;

use bsim_cabin::CabinLayout;
use bsim_core::{Scenario, SimRng};
use bsim_engine::{BoardingSim, NoopObserver, RunResult};
use bsim_metrics::{aggregate, compare};
use bsim_pax::{assign_ranks, generate};

use crate::error::RunError;
use crate::outcome::SimulationOutcome;

/// Hard ceiling on simulated time per replication (4 simulated hours).
/// Converted to a tick cap from the request's `time_step`; a boarding run
/// that is still incomplete after this long is runaway by construction
/// (e.g. a near-zero walking speed at high load).
pub const MAX_SIM_SECS: f64 = 4.0 * 3600.0;

/// Wall-clock budget for one orchestrated request.
#[derive(Clone, Debug)]
pub struct RunBudget {
    pub wall_clock: Duration,
}

impl Default for RunBudget {
    fn default() -> Self {
        Self { wall_clock: Duration::from_secs(30) }
    }
}

/// Execute a validated scenario: `num_runs` strategy replications, each
/// paired with a baseline run over the *same* generated population
/// (re-ranked in place), then aggregate, compare, and assign a `run_id`.
///
/// Replication `i` draws from `SimRng::child(i + 1)` of the base seed, so a
/// seeded request reproduces bit-identically while replications stay
/// uncorrelated.  The deadline is checked before each replication starts;
/// no replication is cancelled mid-run.
pub fn run_scenario(scenario: &Scenario, budget: &RunBudget) -> Result<SimulationOutcome, RunError> {
    scenario.validate()?;
    let layout = CabinLayout::build(&scenario.aircraft)?;

    let base_seed = scenario.seed.unwrap_or_else(rand::random);
    let deadline = Instant::now() + budget.wall_clock;
    let max_ticks = (MAX_SIM_SECS / scenario.controls.time_step).ceil() as u64;

    let mut root = SimRng::new(base_seed);
    let rngs: Vec<SimRng> = (0..scenario.controls.num_runs)
        .map(|i| root.child(i as u64 + 1))
        .collect();

    let replicate = |mut rng: SimRng| -> Result<(RunResult, RunResult), RunError> {
        if Instant::now() >= deadline {
            return Err(RunError::Timeout(format!(
                "wall-clock budget of {:.1}s exhausted before all replications ran",
                budget.wall_clock.as_secs_f64()
            )));
        }

        let mut pax = generate(
            &layout,
            &scenario.load,
            &scenario.bags,
            &scenario.behavior,
            scenario.boarding.method,
            &mut rng,
        );

        let strategy = BoardingSim::new(&layout, &pax, &scenario.bags, scenario.controls.time_step)
            .run(max_ticks, &mut NoopObserver)
            .map_err(|e| RunError::Timeout(e.to_string()))?;

        // Same passengers, same sampled attributes — only the queue order
        // changes.  This isolates the effect of the ordering policy.
        assign_ranks(&mut pax, &layout, scenario.boarding.baseline_method, &mut rng);
        let baseline = BoardingSim::new(&layout, &pax, &scenario.bags, scenario.controls.time_step)
            .run(max_ticks, &mut NoopObserver)
            .map_err(|e| RunError::Timeout(e.to_string()))?;

        Ok((strategy, baseline))
    };

    // Fan out across rayon's core-sized pool; collect is the join barrier.
    let pairs: Vec<(RunResult, RunResult)> =
        rngs.into_par_iter().map(replicate).collect::<Result<_, _>>()?;

    let (strategy_runs, baseline_runs): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
    let strategy = aggregate(&strategy_runs)?;
    let baseline = aggregate(&baseline_runs)?;
    let comparison = compare(
        &strategy,
        &baseline,
        scenario.controls.cost_per_minute_delay,
        scenario.assumptions.flights_per_year,
    );

    Ok(SimulationOutcome {
        run_id: Uuid::new_v4(),
        strategy,
        comparison,
        assumptions: scenario.assumptions.clone(),
    })
}
