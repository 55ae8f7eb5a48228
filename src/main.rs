use anyhow::{Context, Result, bail};
use clap::Parser;
use hex_life::application::{SharedGrid, Simulation, SimulationConfig};
use hex_life::domain::{HexCoord, HexGrid, LevelData, Pattern, StepStrategy, presets};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Command-line arguments for a headless run.
#[derive(Debug, Parser)]
#[command(name = "hex_life", version, about = "Run the hexagonal life automaton headless")]
struct Cli {
    /// JSON configuration file. Flags below override its values.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Level file describing the board, replacing width and height.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["width", "height"])]
    level: Option<PathBuf>,
    /// Hexagons in even rows.
    #[arg(long, value_name = "HEXAGONS", requires = "height")]
    width: Option<usize>,
    /// Rows of hexagons.
    #[arg(long, value_name = "ROWS", requires = "width")]
    height: Option<usize>,
    /// Pattern file or preset name stamped before the first step.
    #[arg(long, value_name = "FILE|PRESET")]
    pattern: Option<String>,
    /// Hexagon receiving the pattern.
    #[arg(long, value_name = "X,Y", default_value = "0,0", value_parser = parse_coord)]
    at: HexCoord,
    /// Steps to run.
    #[arg(long, default_value_t = 10)]
    generations: u64,
    /// Probability of a cell starting alive.
    #[arg(long, value_name = "P")]
    density: Option<f64>,
    /// Seed for the random population.
    #[arg(long)]
    seed: Option<u64>,
    /// Rule name (HexLife or SparseLife).
    #[arg(long)]
    rule: Option<String>,
    /// Evaluate hexagons on a single thread.
    #[arg(long)]
    serial: bool,
}

fn parse_coord(value: &str) -> Result<HexCoord, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {value:?}"))?;
    let parse = |part: &str| part.trim().parse::<i32>().map_err(|error| error.to_string());
    Ok(HexCoord::new(parse(x)?, parse(y)?))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let mut grid = build_grid(&cli, &config)?;
    if config.initial_density > 0.0 {
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        grid.populate_random(&mut rng, config.initial_density);
    }
    if let Some(name) = &cli.pattern {
        let pattern = load_pattern(name)?;
        if !grid.stamp_pattern(cli.at.x, cli.at.y, &pattern.template()) {
            warn!(hexagon = %cli.at, "pattern not stamped, hexagon missing or not editable");
        }
    }

    info!(
        hexagons = grid.len(),
        rule = grid.rule().name(),
        strategy = grid.strategy().name(),
        "Starting hex life run"
    );
    let mut simulation = Simulation::new(SharedGrid::new(grid));
    report(&simulation);
    for _ in 0..cli.generations {
        simulation = simulation.step_once();
        report(&simulation);
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn resolve_config(cli: &Cli) -> Result<SimulationConfig> {
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let (Some(width), Some(height)) = (cli.width, cli.height) {
        config.width = width;
        config.height = height;
    }
    if let Some(density) = cli.density {
        config.initial_density = density;
    }
    if let Some(seed) = cli.seed {
        config.rng_seed = Some(seed);
    }
    if let Some(rule) = &cli.rule {
        config.rule = rule.clone();
    }
    if cli.serial {
        config.strategy = StepStrategy::Serial;
    }
    config.validate().context("invalid settings")?;
    Ok(config)
}

fn build_grid(cli: &Cli, config: &SimulationConfig) -> Result<HexGrid> {
    let Some(path) = &cli.level else {
        return Ok(config.build_grid()?);
    };
    let level = LevelData::load(path)?;
    let grid = level
        .build()
        .with_context(|| format!("failed to build level {}", path.display()))?;
    Ok(grid.with_rule(config.rule()?).with_strategy(config.strategy))
}

fn load_pattern(name: &str) -> Result<Pattern> {
    if Path::new(name).is_file() {
        return Ok(Pattern::load(name)?);
    }
    match presets::by_name(name) {
        Some(pattern) => Ok(pattern),
        None => bail!("no pattern file or preset named {name:?}"),
    }
}

fn report(simulation: &Simulation) {
    let (alive, consistent) = simulation
        .grid
        .with(|grid| (grid.alive_count(), grid.shared_cells_consistent()));
    if !consistent {
        warn!(generation = simulation.generation, "shared border cells disagree");
    }
    println!(
        "generation {:>5}  alive {:>6}  step {:>7.3} ms",
        simulation.generation, alive, simulation.last_step_time_ms
    );
}
