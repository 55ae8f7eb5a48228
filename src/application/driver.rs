use super::shared::SharedGrid;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{info, warn};

/// Background thread stepping a shared board at a fixed interval.
pub struct Driver {
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<u64>>,
}

impl Driver {
    pub fn spawn(grid: SharedGrid, interval: Duration) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let worker_flag = Arc::clone(&running);

        info!(interval_ms = interval.as_millis() as u64, "Starting simulation driver");
        let worker = thread::spawn(move || {
            let mut steps = 0u64;
            while worker_flag.load(Ordering::Relaxed) {
                grid.step();
                steps += 1;
                thread::sleep(interval);
            }
            steps
        });

        Self {
            running,
            worker: Some(worker),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Stop ticking and wait for the thread. Returns the steps it took.
    pub fn stop(mut self) -> u64 {
        self.shutdown()
    }

    fn shutdown(&mut self) -> u64 {
        self.running.store(false, Ordering::Relaxed);
        let Some(worker) = self.worker.take() else {
            return 0;
        };
        match worker.join() {
            Ok(steps) => {
                info!(steps, "Simulation driver stopped");
                steps
            }
            Err(_) => {
                warn!("Simulation driver thread panicked");
                0
            }
        }
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        self.shutdown();
    }
}
