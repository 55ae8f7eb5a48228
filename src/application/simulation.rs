use super::config::{ConfigError, SimulationConfig};
use super::shared::SharedGrid;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Simulation orchestrates ticking a shared board at a fixed rate.
/// Frame time is accumulated and a step is taken once the interval elapses.
pub struct Simulation {
    pub grid: SharedGrid,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_step_time_ms: f32, // Step performance metric
}

impl Simulation {
    /// Create a paused simulation stepping ten times per second
    pub fn new(grid: SharedGrid) -> Self {
        let generation = grid.with(|grid| grid.generation());
        Self {
            grid,
            is_running: false,
            generation,
            update_timer: 0.0,
            updates_per_second: 10.0,
            last_step_time_ms: 0.0,
        }
    }

    /// Build the board described by `config`, randomly populated when a
    /// density is configured.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        let mut grid = config.build_grid()?;
        if config.initial_density > 0.0 {
            let mut rng = match config.rng_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            grid.populate_random(&mut rng, config.initial_density);
        }
        let simulation = Self::new(SharedGrid::new(grid));
        Ok(Self {
            updates_per_second: 1000.0 / config.tick_interval_ms as f32,
            ..simulation
        })
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Take exactly one step, running or not
    pub fn step_once(mut self) -> Self {
        let start = std::time::Instant::now();
        self.generation = self.grid.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        debug!(generation = self.generation, ms = self.last_step_time_ms, "step");
        self
    }

    /// Advance the clock by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self = self.step_once();
            self.update_timer = 0.0;
        }

        self
    }
}
