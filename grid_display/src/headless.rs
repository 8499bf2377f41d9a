// headless.rs - Run the simulation without a window

use conway::Simulator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub generations: u64,
    pub population: usize,
    pub settled: bool,
}

/// Advances `sim` up to `generations` times, stopping early on a cycle
/// when `stop_on_cycle` is set.
pub fn run(sim: &mut Simulator, generations: u64, stop_on_cycle: bool) -> Summary {
    let _span = tracing::info_span!("headless", generations).entered();

    for _ in 0..generations {
        sim.advance();
        tracing::debug!(
            generation = sim.generation(),
            population = sim.world().population(),
            "tick"
        );
        if stop_on_cycle && sim.is_settled() {
            break;
        }
    }

    Summary {
        generations: sim.generation(),
        population: sim.world().population(),
        settled: sim.is_settled(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::patterns::BLOCK;
    use conway::Config;

    #[test]
    fn runs_requested_generations() {
        let mut sim = Simulator::new(Config::default().with_size(20, 20).with_seed(3)).unwrap();
        let summary = run(&mut sim, 12, false);
        assert_eq!(summary.generations, 12);
        assert_eq!(summary.population, sim.world().population());
    }

    #[test]
    fn stops_on_cycle() {
        let config = Config::default().with_size(8, 8);
        let mut sim = Simulator::with_pattern(config, &BLOCK, (3, 3)).unwrap();
        let summary = run(&mut sim, 100, true);
        assert_eq!(
            summary,
            Summary { generations: 1, population: 4, settled: true }
        );
    }

    #[test]
    fn keeps_going_through_a_cycle_when_asked() {
        let config = Config::default().with_size(8, 8);
        let mut sim = Simulator::with_pattern(config, &BLOCK, (3, 3)).unwrap();
        let summary = run(&mut sim, 5, false);
        assert_eq!(summary.generations, 5);
        assert!(summary.settled);
    }
}
