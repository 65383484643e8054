// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/worker.rs
// Version: 1.0.0
//
// This file contains the implementation of a single mining worker for the
// DUCO-S1 miner, located in the miner module. A worker owns one pool
// connection and loops through request job -> solve -> report forever,
// rebuilding its connection after every failure.
//
// Tree Location:
// - src/miner/worker.rs (worker state machine)
// - Depends on: tokio, crate::core::ducos1, crate::pool::client, crate::miner::stats

use crate::core::ducos1::{max_nonce, solve_until};
use crate::core::types::{Job, ShareOutcome, SolveResult, WorkerIdentity};
use crate::error::WorkerError;
use crate::miner::restart;
use crate::miner::shutdown::Shutdown;
use crate::miner::stats::{ShareTally, WorkerState, WorkerStats};
use crate::pool::client::{ConnectionTimeouts, PoolConnection};
use crate::pool::locator::PoolEndpoint;
use crate::utils::format::FormatUtils;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;

const LOG_TARGET: &str = "ducos1::miner::worker";

/// How a failed worker comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestartMode {
    /// Rebuild the worker's own connection, other workers are untouched.
    #[default]
    Worker,
    /// Replace the whole process image with a fresh invocation.
    Process,
}

#[derive(Debug, Clone)]
pub struct WorkerSettings {
    pub client_tag: String,
    pub retry_delay: Duration,
    pub timeouts: ConnectionTimeouts,
    pub restart_mode: RestartMode,
}

impl Default for WorkerSettings {
    fn default() -> Self {
        Self {
            client_tag: crate::utils::user_agent::client_tag(),
            retry_delay: Duration::from_secs(5),
            timeouts: ConnectionTimeouts::default(),
            restart_mode: RestartMode::Worker,
        }
    }
}

pub struct Worker {
    identity: WorkerIdentity,
    endpoint: Arc<PoolEndpoint>,
    settings: WorkerSettings,
    tally: Arc<ShareTally>,
    stats: Arc<WorkerStats>,
    shutdown: Shutdown,
}

impl Worker {
    pub fn new(
        identity: WorkerIdentity,
        endpoint: Arc<PoolEndpoint>,
        settings: WorkerSettings,
        tally: Arc<ShareTally>,
        stats: Arc<WorkerStats>,
        shutdown: Shutdown,
    ) -> Self {
        Self {
            identity,
            endpoint,
            settings,
            tally,
            stats,
            shutdown,
        }
    }

    pub fn index(&self) -> usize {
        self.identity.index
    }

    /// Run sessions back to back until shutdown is triggered.
    pub async fn run(self) {
        info!(target: LOG_TARGET,
            "Worker {} started for {} ({} difficulty)",
            self.identity.index, self.identity.username, self.identity.difficulty
        );

        while !self.shutdown.is_triggered() {
            let failure = tokio::select! {
                _ = self.shutdown.wait() => break,
                failure = self.run_session() => failure,
            };

            if !self.recover(failure).await {
                break;
            }
        }

        self.transition(WorkerState::Disconnected);
        info!(target: LOG_TARGET, "Worker {} stopped", self.identity.index);
    }

    /// One connection lifetime. Only returns on failure.
    async fn run_session(&self) -> WorkerError {
        let mut connection = match self.connect().await {
            Ok(connection) => connection,
            Err(e) => return e,
        };

        loop {
            if let Err(e) = self.run_cycle(&mut connection).await {
                return e;
            }
        }
    }

    async fn connect(&self) -> Result<PoolConnection, WorkerError> {
        self.transition(WorkerState::Disconnected);

        let (host, port) = self.endpoint.resolve().await;
        info!(target: LOG_TARGET, "Worker {} connecting to {}:{}", self.identity.index, host, port);

        let connection = PoolConnection::connect(&host, port, self.settings.timeouts).await?;
        info!(target: LOG_TARGET,
            "Worker {} connected to {}:{} (server version {})",
            self.identity.index, host, port, connection.server_version()
        );

        self.transition(WorkerState::Connected);
        Ok(connection)
    }

    /// Request one job, solve it and report it.
    pub async fn run_cycle(&self, connection: &mut PoolConnection) -> Result<ShareOutcome, WorkerError> {
        self.transition(WorkerState::AwaitingJob);
        let job = connection
            .request_job(&self.identity.username, self.identity.difficulty, &self.identity.mining_key)
            .await?;
        let difficulty = job.difficulty()?;
        self.stats.record_job();
        debug!(target: LOG_TARGET,
            "Worker {} job: seed={} target={} difficulty={}",
            self.identity.index, job.seed, job.target_digest, difficulty
        );

        self.transition(WorkerState::Solving);
        let result = match self.solve(&job, difficulty).await? {
            Some(result) => result,
            None if self.shutdown.is_triggered() => return Err(WorkerError::Cancelled),
            None => {
                return Err(WorkerError::SearchExhausted {
                    seed: job.seed,
                    max_nonce: max_nonce(difficulty),
                });
            }
        };

        self.transition(WorkerState::Reporting);
        let hashrate = result.hashrate();
        let outcome = connection
            .submit_result(result.nonce, hashrate, &self.settings.client_tag)
            .await?;

        let snapshot = self.tally.record(outcome);
        self.stats.record_share(outcome.is_accepted(), hashrate);

        match outcome {
            ShareOutcome::Accepted => info!(target: LOG_TARGET,
                "A: Worker {} accepted share: {} Hashrate: {} Difficulty: {}",
                self.identity.index, result.nonce, FormatUtils::format_khs(hashrate), difficulty
            ),
            ShareOutcome::Rejected => warn!(target: LOG_TARGET,
                "R: Worker {} rejected share: {} Hashrate: {} Difficulty: {}",
                self.identity.index, result.nonce, FormatUtils::format_khs(hashrate), difficulty
            ),
        }
        info!(target: LOG_TARGET, "Accept/Reject Ratio: {}", snapshot);

        Ok(outcome)
    }

    /// CPU-bound search on the blocking pool.
    async fn solve(&self, job: &Job, difficulty: u64) -> Result<Option<SolveResult>, WorkerError> {
        let seed = job.seed.clone();
        let target = job.target_digest.clone();
        let should_stop = self.shutdown.flag();

        tokio::task::spawn_blocking(move || solve_until(&seed, &target, difficulty, &should_stop))
            .await
            .map_err(|e| WorkerError::Solver(e.to_string()))
    }

    /// Handle a failed session. Returns false when the worker should stop.
    async fn recover(&self, failure: WorkerError) -> bool {
        self.transition(WorkerState::Disconnected);

        match &failure {
            WorkerError::Cancelled => return false,
            WorkerError::SearchExhausted { .. } => {
                // Lost job: count it, drop the socket so the pool is not left waiting on it.
                let snapshot = self.tally.record_rejected();
                self.stats.record_share(false, self.stats.get_hashrate());
                warn!(target: LOG_TARGET,
                    "Worker {}: {}, counting it as rejected and reconnecting in {:?}",
                    self.identity.index, failure, self.settings.retry_delay
                );
                info!(target: LOG_TARGET, "Accept/Reject Ratio: {}", snapshot);
            }
            WorkerError::Connect(_) | WorkerError::Protocol(_) | WorkerError::Solver(_) => {
                error!(target: LOG_TARGET,
                    "Worker {} {}, restarting in {:?}",
                    self.identity.index, failure, self.settings.retry_delay
                );
            }
        }

        tokio::select! {
            _ = self.shutdown.wait() => return false,
            _ = tokio::time::sleep(self.settings.retry_delay) => {}
        }

        // Lost jobs always reconnect in-process.
        let exhausted = matches!(failure, WorkerError::SearchExhausted { .. });
        if self.settings.restart_mode == RestartMode::Process && !exhausted {
            let e = restart::reexec_current_process();
            error!(target: LOG_TARGET, "Process restart failed: {}, restarting worker instead", e);
        }

        self.stats.record_reconnect();
        true
    }

    fn transition(&self, next: WorkerState) {
        let previous = self.stats.state();
        if previous != next {
            debug!(target: LOG_TARGET, "Worker {}: {} -> {}", self.identity.index, previous, next);
            self.stats.set_state(next);
        }
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial DUCO-S1 worker.
//   - One socket per worker, strictly synchronous job cycle.
//   - Solver on spawn_blocking with the shutdown flag as stop signal.
//   - Exhausted searches count as rejected and reconnect after the retry delay.
