// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/supervisor.rs
// Version: 1.0.0
//
// This file runs the configured number of workers. Each worker is watched by
// its own supervising task, so a panicking worker is respawned with the same
// identity without touching the others. It also prints the periodic
// dashboard.

use crate::core::types::{DifficultyLevel, WorkerIdentity};
use crate::miner::shutdown::Shutdown;
use crate::miner::stats::{MinerStats, WorkerStats};
use crate::miner::worker::{Worker, WorkerSettings};
use crate::pool::locator::PoolEndpoint;
use crate::Result;
use log::{debug, error, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

pub use crate::miner::worker::RestartMode;

const LOG_TARGET: &str = "ducos1::miner::supervisor";

/// Everything the supervisor needs, free of command-line concerns.
#[derive(Debug, Clone)]
pub struct MinerConfig {
    pub username: String,
    pub mining_key: String,
    pub difficulty: DifficultyLevel,
    pub workers: usize,
    pub endpoint: PoolEndpoint,
    pub settings: WorkerSettings,
    /// Zero disables the dashboard.
    pub stats_interval: Duration,
}

pub struct MinerSupervisor {
    config: MinerConfig,
    endpoint: Arc<PoolEndpoint>,
    stats: Arc<MinerStats>,
    shutdown: Shutdown,
}

impl MinerSupervisor {
    pub fn new(config: MinerConfig, shutdown: Shutdown) -> Self {
        let workers = config.workers.max(1);
        Self {
            endpoint: Arc::new(config.endpoint.clone()),
            stats: Arc::new(MinerStats::new(workers)),
            config: MinerConfig { workers, ..config },
            shutdown,
        }
    }

    /// Get access to miner statistics
    pub fn get_stats(&self) -> Arc<MinerStats> {
        Arc::clone(&self.stats)
    }

    fn build_worker(&self, index: usize) -> Worker {
        let identity = WorkerIdentity {
            index,
            username: self.config.username.clone(),
            mining_key: self.config.mining_key.clone(),
            difficulty: self.config.difficulty,
        };
        Worker::new(
            identity,
            Arc::clone(&self.endpoint),
            self.config.settings.clone(),
            Arc::clone(&self.stats.tally),
            Arc::clone(&self.stats.worker_stats[index]),
            self.shutdown.clone(),
        )
    }

    /// Run every worker until shutdown is triggered.
    pub async fn run(self: Arc<Self>) -> Result<()> {
        info!(target: LOG_TARGET,
            "Starting {} worker(s) for {} ({} difficulty)",
            self.config.workers, self.config.username, self.config.difficulty
        );

        let mut workers = JoinSet::new();
        for index in 0..self.config.workers {
            let supervisor = Arc::clone(&self);
            workers.spawn(async move { supervisor.supervise_worker(index).await });
        }

        let dashboard = Self::start_stats_printer(Arc::clone(&self));

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                error!(target: LOG_TARGET, "Worker supervisor task failed: {}", e);
            }
        }

        if let Some(dashboard) = dashboard {
            dashboard.abort();
        }
        let snapshot = self.stats.tally.snapshot();
        info!(target: LOG_TARGET, "All workers stopped. Final Accept/Reject Ratio: {}", snapshot);
        Ok(())
    }

    /// Keep one worker slot alive, respawning after a panic.
    async fn supervise_worker(&self, index: usize) {
        keep_alive(
            index,
            &self.shutdown,
            self.config.settings.retry_delay,
            &self.stats.worker_stats[index],
            || self.build_worker(index).run(),
        )
        .await
    }

    fn start_stats_printer(supervisor: Arc<Self>) -> Option<tokio::task::JoinHandle<()>> {
        let period = supervisor.config.stats_interval;
        if period.is_zero() {
            return None;
        }

        Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = supervisor.shutdown.wait() => break,
                    _ = interval.tick() => supervisor.stats.display_dashboard(),
                }
            }
        }))
    }
}

/// Run the future built by `launch` on its own task, launching it again after
/// `delay` whenever it panics. Returns once it finishes or shutdown is triggered.
async fn keep_alive<F, Fut>(
    index: usize,
    shutdown: &Shutdown,
    delay: Duration,
    stats: &WorkerStats,
    mut launch: F,
) where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = ()> + Send + 'static,
{
    loop {
        match tokio::spawn(launch()).await {
            Ok(()) => {
                debug!(target: LOG_TARGET, "Worker {} exited", index);
                return;
            }
            Err(e) if e.is_panic() && !shutdown.is_triggered() => {
                error!(target: LOG_TARGET, "Worker {} panicked, respawning in {:?}", index, delay);
                stats.record_reconnect();
                tokio::select! {
                    _ = shutdown.wait() => return,
                    _ = tokio::time::sleep(delay) => {}
                }
            }
            Err(e) => {
                debug!(target: LOG_TARGET, "Worker {} ended: {}", index, e);
                return;
            }
        }
    }
}


// Changelog:
// - v1.0.0 (2026-10-17): Initial worker pool.
//   - Replaces the shared-socket CPU miner with independent per-worker sockets.
//   - Panicking workers are respawned locally after the retry delay (keep_alive).
