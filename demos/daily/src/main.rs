//! daily — reference run of the rust_fatigue simulator.
//!
//! Simulates one person over 120 time units (five 24-hour days) at
//! `dt = 0.1` with the reference coefficients, logging the state once per
//! simulated day and printing a summary table at the end.
//!
//! Usage: `daily [config.json]`.  Fields missing from the JSON keep their
//! defaults.  Set `RUST_LOG=debug` (or `trace`) for more detail.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ft_core::{SimConfig, Tick, whole_steps};
use ft_model::PersonState;
use ft_sim::{SeriesStats, SimBuilder, SimObserver, Trajectory};

const HOURS_PER_DAY: f64 = 24.0;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs the live state at the start of every simulated day.
struct DailyLog {
    ticks_per_day: Option<u64>,
    dt:            f64,
}

impl SimObserver for DailyLog {
    fn on_tick_end(&mut self, tick: Tick, person: &PersonState) {
        let Some(per_day) = self.ticks_per_day else { return };
        if tick.0.is_multiple_of(per_day) {
            info!(
                day = tick.0 / per_day,
                t = tick.0 as f64 * self.dt,
                energy = format!("{:.4}", person.energy()),
                lactate = format!("{:.4}", person.lactate()),
                cognitive_fatigue = format!("{:.4}", person.cognitive_fatigue()),
                "day start"
            );
        }
    }

    fn on_run_end(&mut self, trajectory: &Trajectory) {
        let bonuses = trajectory.recovery().iter().filter(|r| **r > 0.0).count();
        info!(ticks = trajectory.len(), bonuses, "trajectory recorded");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config() -> Result<SimConfig> {
    match std::env::args().nth(1) {
        None => Ok(SimConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))
        }
    }
}

fn print_row(name: &str, s: &SeriesStats) {
    println!(
        "{:<18} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
        name, s.min, s.max, s.mean, s.last
    );
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config()?;
    info!(
        time_end = config.time_end,
        dt = config.dt,
        physical_base_rate = config.physical_base_rate,
        mental_base_rate = config.mental_base_rate,
        "configuration loaded"
    );

    let mut observer = DailyLog {
        ticks_per_day: whole_steps(HOURS_PER_DAY, config.dt),
        dt:            config.dt,
    };
    let sim = SimBuilder::new(config).build()?;

    let t0 = Instant::now();
    let trajectory = sim.run(&mut observer);
    let elapsed = t0.elapsed();

    let summary = trajectory.summary();
    println!();
    println!("Simulation complete in {:.3} ms ({} ticks)", elapsed.as_secs_f64() * 1e3, summary.ticks);
    println!();
    println!("{:<18} {:>10} {:>10} {:>10} {:>10}", "Series", "Min", "Max", "Mean", "Final");
    println!("{}", "-".repeat(62));
    print_row("energy", &summary.energy);
    print_row("lactate", &summary.lactate);
    print_row("cognitive_fatigue", &summary.cognitive_fatigue);
    print_row("total_fatigue", &summary.total_fatigue);

    Ok(())
}
