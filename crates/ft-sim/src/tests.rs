//! Integration tests for ft-sim.

use ft_core::{SimConfig, Tick};
use ft_model::PersonState;

use crate::{SimBuilder, SimObserver, Trajectory};

const EPS: f64 = 1e-12;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn short_config(time_end: f64, dt: f64) -> SimConfig {
    SimConfig { time_end, dt, ..SimConfig::default() }
}

fn reference_run() -> Trajectory {
    SimBuilder::new(SimConfig::default())
        .build()
        .unwrap()
        .run(&mut crate::NoopObserver)
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use ft_core::FtError;
    use ft_model::{ActivityModel, RecoverySchedule};

    use super::*;
    use crate::SimError;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        assert_eq!(sim.grid().len(), 1200);
        assert_eq!(sim.current_tick(), Tick(1));
        assert!(!sim.is_complete());
        assert_eq!(sim.trajectory().len(), 1);
    }

    #[test]
    fn negative_dt_fails_fast() {
        let result = SimBuilder::new(short_config(10.0, -0.1)).build();
        assert!(matches!(
            result,
            Err(SimError::Config(FtError::InvalidParameter { name: "dt", .. }))
        ));
    }

    #[test]
    fn negative_base_rate_fails_fast() {
        let config = SimConfig { physical_base_rate: -0.2, ..SimConfig::default() };
        assert!(SimBuilder::new(config).build().is_err());
    }

    #[test]
    fn dt_that_does_not_divide_bonus_period_builds() {
        for dt in [3.0, 0.3, 0.7, 0.15] {
            assert!(SimBuilder::new(short_config(120.0, dt)).build().is_ok(), "dt = {dt}");
        }
    }

    #[test]
    fn huge_grid_fails_fast() {
        let result = SimBuilder::new(short_config(1e300, 1e-300)).build();
        assert!(matches!(
            result,
            Err(SimError::Config(FtError::InvalidParameter { name: "time_end", .. }))
        ));
    }

    #[test]
    fn overrides_replace_config_models() {
        let sim = SimBuilder::new(SimConfig::default())
            .physical(ActivityModel::new(0.0).unwrap())
            .mental(ActivityModel::new(0.0).unwrap())
            .schedule(RecoverySchedule::default())
            .build()
            .unwrap();
        let trajectory = sim.run(&mut crate::NoopObserver);
        assert!(trajectory.lactate().iter().all(|&l| l == 0.0));
        assert!(trajectory.cognitive_fatigue().iter().all(|&c| c == 0.0));
    }
}

// ── Single-tick scenario ──────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use ft_core::CircadianConfig;
    use ft_model::RecoverySchedule;

    use super::*;
    use crate::NoopObserver;

    #[test]
    fn first_tick_matches_hand_computation() {
        // t = 0.1 is hour 0.1, inside the 18:00-06:00 night window.
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        assert!(sim.step(&mut NoopObserver));

        let t = sim.trajectory();
        assert_eq!(t.len(), 2);
        assert!((t.time()[1] - 0.1).abs() < EPS);
        assert_eq!(t.physical_activity()[1], 0.2);
        assert_eq!(t.mental_activity()[1], 0.1);
        assert!((t.energy()[1] - 0.985).abs() < EPS, "got {}", t.energy()[1]);
        assert!((t.lactate()[1] - 0.001).abs() < EPS, "got {}", t.lactate()[1]);
        assert!(
            (t.cognitive_fatigue()[1] - 0.0002).abs() < EPS,
            "got {}",
            t.cognitive_fatigue()[1]
        );
        assert_eq!(sim.person().energy(), t.energy()[1]);
    }

    #[test]
    fn first_tick_with_daytime_start() {
        // Night window 18:00-00:00 puts t = 0.1 in daytime (rate 0.03).
        let circadian = CircadianConfig { night_end_hour: 0.0, ..CircadianConfig::default() };
        let mut sim = SimBuilder::new(SimConfig::default())
            .schedule(RecoverySchedule::new(circadian).unwrap())
            .build()
            .unwrap();
        assert!(sim.step(&mut NoopObserver));
        let e = sim.trajectory().energy()[1];
        assert!((e - 0.983).abs() < EPS, "got {e}");
    }

    #[test]
    fn first_step_processes_tick_one() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        assert_eq!(sim.current_tick(), Tick(1));
        sim.step(&mut NoopObserver);
        assert_eq!(sim.current_tick(), Tick(2));
        assert_eq!(sim.trajectory().len(), 2);
    }

    #[test]
    fn step_stops_at_end_of_grid() {
        let mut sim = SimBuilder::new(short_config(1.0, 0.1)).build().unwrap();
        let mut steps = 0;
        while sim.step(&mut NoopObserver) {
            steps += 1;
        }
        assert_eq!(steps, 9);
        assert!(sim.is_complete());
        assert!(!sim.step(&mut NoopObserver));
        assert_eq!(sim.trajectory().len(), 10);
    }

    #[test]
    fn run_finishes_a_partially_stepped_sim() {
        let mut stepped = SimBuilder::new(short_config(30.0, 0.1)).build().unwrap();
        for _ in 0..50 {
            stepped.step(&mut NoopObserver);
        }
        let resumed = stepped.run(&mut NoopObserver);
        let direct = SimBuilder::new(short_config(30.0, 0.1))
            .build()
            .unwrap()
            .run(&mut NoopObserver);
        assert_eq!(resumed, direct);
    }
}

// ── Full run ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn reference_run_lengths() {
        let t = reference_run();
        assert_eq!(t.len(), 1200);
        for series in [
            t.energy(),
            t.lactate(),
            t.cognitive_fatigue(),
            t.total_fatigue(),
            t.recovery(),
            t.physical_activity(),
            t.mental_activity(),
        ] {
            assert_eq!(series.len(), 1200);
        }
    }

    #[test]
    fn index_zero_is_initial_condition() {
        let t = reference_run();
        assert_eq!(t.time()[0], 0.0);
        assert_eq!(t.energy()[0], 1.0);
        assert_eq!(t.lactate()[0], 0.0);
        assert_eq!(t.cognitive_fatigue()[0], 0.0);
        assert_eq!(t.total_fatigue()[0], 0.0);
        assert_eq!(t.recovery()[0], 0.0);
        assert_eq!(t.physical_activity()[0], 0.0);
        assert_eq!(t.mental_activity()[0], 0.0);
    }

    #[test]
    fn state_is_never_negative() {
        let t = reference_run();
        for i in 0..t.len() {
            assert!(t.energy()[i] >= 0.0, "energy[{i}]");
            assert!(t.lactate()[i] >= 0.0, "lactate[{i}]");
            assert!(t.cognitive_fatigue()[i] >= 0.0, "cognitive_fatigue[{i}]");
        }
    }

    #[test]
    fn total_fatigue_is_exact_sum() {
        let t = reference_run();
        for i in 0..t.len() {
            assert_eq!(t.total_fatigue()[i], t.lactate()[i] + t.cognitive_fatigue()[i]);
        }
    }

    #[test]
    fn time_is_tick_times_dt() {
        let t = reference_run();
        for (i, &time) in t.time().iter().enumerate() {
            assert_eq!(time, i as f64 * 0.1);
        }
    }

    #[test]
    fn bonus_lands_every_twenty_time_units() {
        let t = reference_run();
        let bonus_ticks: Vec<usize> = t
            .recovery()
            .iter()
            .enumerate()
            .filter(|(_, r)| **r != 0.0)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(bonus_ticks, vec![200, 400, 600, 800, 1000]);

        // Hour-of-day at t = 20, 40, 60, 80, 100 is 20, 16, 12, 8, 4.
        assert!((t.recovery()[200] - 0.05 * 0.1).abs() < EPS);
        assert!((t.recovery()[400] - 0.03 * 0.1).abs() < EPS);
        assert!((t.recovery()[800] - 0.03 * 0.1).abs() < EPS);
        assert!((t.recovery()[1000] - 0.05 * 0.1).abs() < EPS);
    }

    #[test]
    fn bonus_with_dt_not_dividing_period() {
        // dt = 3: samples at 0, 3, .., 117.  Only t = 60 (tick 20) is a whole
        // multiple of 20 besides t = 0.
        let t = SimBuilder::new(short_config(120.0, 3.0))
            .build()
            .unwrap()
            .run(&mut crate::NoopObserver);
        assert_eq!(t.len(), 40);
        let bonus_ticks: Vec<usize> = (0..t.len()).filter(|&i| t.recovery()[i] != 0.0).collect();
        assert_eq!(bonus_ticks, vec![20]);
        // Hour 12 is daytime.
        assert!((t.recovery()[20] - 0.03 * 3.0).abs() < EPS);
    }

    #[test]
    fn bonus_is_added_unclamped_after_the_loop() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        while sim.step(&mut crate::NoopObserver) {}
        let before = sim.trajectory().clone();
        let after = sim.run(&mut crate::NoopObserver);

        for i in 0..after.len() {
            let expected = before.energy()[i] + after.recovery()[i];
            assert_eq!(after.energy()[i], expected, "energy[{i}]");
        }
        // Lactate and fatigue untouched by the bonus pass.
        assert_eq!(after.lactate(), before.lactate());
        assert_eq!(after.total_fatigue(), before.total_fatigue());
    }

    #[test]
    fn activity_follows_gating_on_previous_energy() {
        let config = SimConfig { physical_base_rate: 3.0, ..SimConfig::default() };
        let t = SimBuilder::new(config).build().unwrap().run(&mut crate::NoopObserver);
        let mut saw_gated = false;
        for i in 1..t.len() {
            // Recovery bonus only touches ticks that are multiples of 200;
            // the loop gates on the pre-bonus value, so skip the tick after.
            if (i - 1) % 200 == 0 && i > 1 {
                continue;
            }
            let gated = t.energy()[i - 1] < 0.3;
            let expected = if gated { 1.5 } else { 3.0 };
            assert_eq!(t.physical_activity()[i], expected, "tick {i}");
            saw_gated |= gated;
        }
        assert!(saw_gated);
    }

    #[test]
    fn runs_are_deterministic() {
        assert_eq!(reference_run(), reference_run());
    }

    #[test]
    fn phase_plot_pairs_energy_with_total_fatigue() {
        let t = reference_run();
        let pairs: Vec<(f64, f64)> = t.phase_plot().collect();
        assert_eq!(pairs.len(), t.len());
        assert_eq!(pairs[7], (t.energy()[7], t.total_fatigue()[7]));
    }

    #[test]
    fn summary_reports_final_values() {
        let t = reference_run();
        let s = t.summary();
        assert_eq!(s.ticks, 1200);
        assert_eq!(s.energy.last, t.energy()[1199]);
        assert_eq!(s.lactate.min, 0.0);
        assert!(s.energy.max >= s.energy.mean && s.energy.mean >= s.energy.min);
        assert_eq!(t.final_snapshot().unwrap().lactate, t.lactate()[1199]);
    }
}

// ── Observer hooks ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        ticks:     Vec<Tick>,
        energies:  Vec<f64>,
        run_ends:  usize,
        final_len: usize,
    }

    impl SimObserver for Recorder {
        fn on_tick_end(&mut self, tick: Tick, person: &PersonState) {
            self.ticks.push(tick);
            self.energies.push(person.energy());
        }

        fn on_run_end(&mut self, trajectory: &Trajectory) {
            self.run_ends += 1;
            self.final_len = trajectory.len();
        }
    }

    #[test]
    fn hooks_fire_once_per_tick_and_once_at_end() {
        let mut obs = Recorder::default();
        let t = SimBuilder::new(short_config(5.0, 0.1)).build().unwrap().run(&mut obs);
        assert_eq!(obs.ticks.len(), 49);
        assert_eq!(obs.ticks.first(), Some(&Tick(1)));
        assert_eq!(obs.ticks.last(), Some(&Tick(49)));
        assert_eq!(obs.run_ends, 1);
        assert_eq!(obs.final_len, t.len());
    }

    #[test]
    fn observer_sees_live_state() {
        let mut obs = Recorder::default();
        let t = SimBuilder::new(short_config(5.0, 0.1)).build().unwrap().run(&mut obs);
        // No bonus tick within the first 5 time units, so series == live state.
        assert_eq!(obs.energies.as_slice(), &t.energy()[1..]);
    }
}
