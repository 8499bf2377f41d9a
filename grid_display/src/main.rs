// main.rs - Conway's Game of Life viewer and headless runner

use anyhow::{bail, Context as _};
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use conway::grid::{DENSE_LIVE_PERCENT, SCREEN_HEIGHT, SCREEN_WIDTH};
use conway::{patterns, Config, EdgePolicy, Simulator};

mod headless;
mod pixels;
mod ui;

#[derive(Parser)]
#[command(name = "grid_display", about = "Conway's Game of Life on a pixel grid")]
struct Cli {
    /// Field width in cells
    #[arg(long, default_value_t = SCREEN_WIDTH)]
    width: usize,
    /// Field height in cells
    #[arg(long, default_value_t = SCREEN_HEIGHT)]
    height: usize,
    /// Percent chance a cell starts alive
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100), conflicts_with = "dense")]
    live_percent: Option<u8>,
    /// Use the dense 81% seed
    #[arg(long)]
    dense: bool,
    /// Fixed RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// Count neighbors with the flat-index bounds check (bleeds across rows)
    #[arg(long)]
    linear_edges: bool,
    /// Start from a named pattern centered on the field
    #[arg(long)]
    pattern: Option<String>,
    /// Generations per second in the window
    #[arg(long, default_value_t = 60)]
    tps: u32,
    /// Run without a window
    #[arg(long)]
    headless: bool,
    /// Generations to run in headless mode
    #[arg(short, long, default_value_t = 100)]
    generations: u64,
    /// Stop the headless run once the world repeats itself
    #[arg(long)]
    stop_on_cycle: bool,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::default().with_size(self.width, self.height);
        if self.dense {
            config.live_percent = DENSE_LIVE_PERCENT;
        }
        if let Some(percent) = self.live_percent {
            config.live_percent = percent;
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.linear_edges {
            config = config.with_edges(EdgePolicy::LinearIndex);
        }
        config
    }

    fn simulator(&self) -> anyhow::Result<Simulator> {
        let config = self.config();
        let sim = match &self.pattern {
            Some(name) => {
                let Some(pattern) = patterns::find(name) else {
                    let known: Vec<_> = patterns::PATTERNS.iter().map(|p| p.name).collect();
                    bail!("unknown pattern {name:?}, expected one of {known:?}");
                };
                let (pw, ph) = pattern.extent();
                let origin = (
                    config.width.saturating_sub(pw) / 2,
                    config.height.saturating_sub(ph) / 2,
                );
                Simulator::with_pattern(config, pattern, origin)
            }
            None => Simulator::new(config),
        };
        sim.context("invalid world configuration")
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut sim = cli.simulator()?;

    if cli.headless {
        let summary = headless::run(&mut sim, cli.generations, cli.stop_on_cycle);
        println!(
            "generations={} population={} settled={}",
            summary.generations, summary.population, summary.settled
        );
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_title("conway"),
        ..Default::default()
    };

    let app = ui::GridApp::new(sim, cli.tps);
    eframe::run_native("conway", options, Box::new(|_cc| Box::new(app)))
        .map_err(|err| anyhow::anyhow!("viewer failed: {err}"))
}
